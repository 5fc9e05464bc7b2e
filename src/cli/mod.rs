pub mod render;
pub mod session;

use std::{fmt::Display, io};

use anyhow::{anyhow, Result};
use chrono::FixedOffset;
use clap::{Parser, ValueEnum};
use render::RenderStyle;
use session::Session;
use tracing::{info, level_filters::LevelFilter};

use crate::{
    habit::engine::StreakEngine,
    utils::{
        calendar::Calendar,
        clock::{Clock, DefaultClock},
        dir::create_application_default_path,
        logging::enable_logging,
    },
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateStyle {
    Uk,
    Us,
}

impl From<DateStyle> for chrono_english::Dialect {
    fn from(value: DateStyle) -> Self {
        match value {
            DateStyle::Uk => Self::Uk,
            DateStyle::Us => Self::Us,
        }
    }
}

impl Display for DateStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStyle::Uk => write!(f, "uk"),
            DateStyle::Us => write!(f, "us"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "Streakmark", version, long_about = None)]
#[command(about = "Track a daily habit over the current month", long_about = None)]
struct Args {
    #[arg(long, help = "Log everything, mirrored to stderr")]
    log: bool,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Offset from UTC in hours that decides where days start and end. Defaults to the local offset"
    )]
    utc_offset: Option<f64>,
    #[arg(long, default_value_t = DateStyle::Uk, help = "Style of dates used during parsing. For Uk it's day/month/year. For Us it's month/day/year")]
    date_style: DateStyle,
    #[arg(long, help = "Mark done days with brackets instead of colors")]
    no_color: bool,
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&create_application_default_path()?, logging_level)?;

    let calendar = resolve_calendar(args.utc_offset)?;
    let clock = DefaultClock;
    let engine = StreakEngine::new(&clock.time(), calendar)?;
    info!(
        offset = %engine.calendar().zone(),
        "Tracking {}-{:02}",
        engine.days().year(),
        engine.days().month()
    );

    let style = if args.no_color {
        RenderStyle::Plain
    } else {
        RenderStyle::Color
    };
    let session = Session::new(engine, Box::new(clock), args.date_style, style);
    session.run(io::stdin().lock(), io::stdout().lock())
}

/// Day boundaries are fixed for the whole session. Without an explicit offset the local one at
/// startup is used.
fn resolve_calendar(utc_offset: Option<f64>) -> Result<Calendar<FixedOffset>> {
    let Some(hours) = utc_offset else {
        return Ok(Calendar::local());
    };
    let seconds = (hours * 3600.).round();
    if !seconds.is_finite() || seconds.abs() >= 86_400. {
        return Err(anyhow!("UTC offset of {hours} hours is out of range"));
    }
    Calendar::fixed(seconds as i32)
        .ok_or_else(|| anyhow!("UTC offset of {hours} hours is out of range"))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::resolve_calendar;

    #[test]
    fn test_resolve_calendar_offset() -> anyhow::Result<()> {
        let calendar = resolve_calendar(Some(5.5))?;
        assert_eq!(calendar.zone().local_minus_utc(), 5 * 3600 + 30 * 60);

        let instant = Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap();
        assert_eq!(
            calendar.day_of(&instant),
            NaiveDate::from_ymd_opt(2026, 10, 20).unwrap()
        );

        let west = resolve_calendar(Some(-8.))?;
        assert_eq!(west.zone().local_minus_utc(), -8 * 3600);
        Ok(())
    }

    #[test]
    fn test_resolve_calendar_defaults_to_local() -> anyhow::Result<()> {
        let calendar = resolve_calendar(None)?;
        let local = chrono::Local::now().offset().local_minus_utc();
        assert_eq!(calendar.zone().local_minus_utc(), local);
        Ok(())
    }

    #[test]
    fn test_resolve_calendar_out_of_range() {
        assert!(resolve_calendar(Some(24.)).is_err());
        assert!(resolve_calendar(Some(-30.)).is_err());
        assert!(resolve_calendar(Some(f64::NAN)).is_err());
    }
}
