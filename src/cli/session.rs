use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use chrono::{FixedOffset, NaiveDate};
use chrono_english::parse_date_string;
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::{habit::engine::StreakEngine, utils::clock::Clock};

use super::{
    render::{render_screen, RenderStyle},
    DateStyle,
};

const PROMPT: &str = "> ";

#[derive(Parser, Debug)]
#[command(
    name = "streakmark",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug)]
enum SessionCommand {
    #[command(
        about = "Mark a day as done, or undo it. Takes a day of the month or dates like \"today\", \"yesterday\", \"15/10/2026\""
    )]
    Toggle {
        #[arg(required = true, num_args = 1..)]
        date: Vec<String>,
    },
    #[command(about = "Show the calendar")]
    Show,
    #[command(about = "Show the current streak")]
    Streak,
    #[command(about = "Print the days of the month as json")]
    Json,
    #[command(about = "Leave the tracker", visible_alias = "exit")]
    Quit,
}

/// Result of a single command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// Interactive session over a [StreakEngine]. Reads the clock on every command and hands the time
/// to the engine, so the streak follows the real day while the month stays the one generated at
/// startup.
pub struct Session {
    engine: StreakEngine<FixedOffset>,
    clock: Box<dyn Clock>,
    date_style: DateStyle,
    style: RenderStyle,
}

impl Session {
    pub fn new(
        engine: StreakEngine<FixedOffset>,
        clock: Box<dyn Clock>,
        date_style: DateStyle,
        style: RenderStyle,
    ) -> Self {
        Self {
            engine,
            clock,
            date_style,
            style,
        }
    }

    pub fn engine(&self) -> &StreakEngine<FixedOffset> {
        &self.engine
    }

    pub fn screen(&self) -> String {
        render_screen(self.engine.days(), self.streak(), self.style)
    }

    fn streak(&self) -> usize {
        self.engine.current_streak(&self.clock.time())
    }

    /// Executes one line of input.
    pub fn handle(&mut self, line: &str) -> Result<Outcome> {
        let SessionLine { command } = SessionLine::try_parse_from(line.split_whitespace())?;

        let output = match command {
            SessionCommand::Toggle { date } => {
                let phrase = date.join(" ");
                let day = self.resolve_day(&phrase)?;
                match self.engine.toggle_day(day) {
                    Some(_) => self.screen(),
                    None => format!("{day} is outside of the tracked month, nothing changed\n"),
                }
            }
            SessionCommand::Show => self.screen(),
            SessionCommand::Streak => format!("Current Streak: {}\n", self.streak()),
            SessionCommand::Json => {
                let mut json = serde_json::to_string_pretty(self.engine.days())?;
                json.push('\n');
                json
            }
            SessionCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(output))
    }

    /// A bare number is a day of the tracked month, anything else goes through date parsing
    /// relative to the current time.
    fn resolve_day(&self, phrase: &str) -> Result<NaiveDate> {
        let days = self.engine.days();
        if let Ok(day) = phrase.parse::<u32>() {
            return NaiveDate::from_ymd_opt(days.year(), days.month(), day).ok_or_else(|| {
                anyhow!(
                    "Day {day} doesn't exist in {}-{:02}",
                    days.year(),
                    days.month()
                )
            });
        }

        let calendar = self.engine.calendar();
        let now = self.clock.time().with_timezone(calendar.zone());
        let parsed = parse_date_string(phrase, now, self.date_style.into())
            .map_err(|e| anyhow!("Failed to parse date {phrase:?}: {e}"))?;
        Ok(calendar.day_of(&parsed))
    }

    /// Runs until `quit` or the end of `input`. Command errors are reported and the session keeps
    /// going, only failing IO ends it early.
    pub fn run(mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        info!(
            year = self.engine.days().year(),
            month = self.engine.days().month(),
            "Starting session"
        );
        write!(output, "{}", self.screen())?;
        write!(output, "{PROMPT}")?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match self.handle(&line) {
                    Ok(Outcome::Output(text)) => write!(output, "{text}")?,
                    Ok(Outcome::Quit) => break,
                    Err(e) => {
                        debug!("Command {line:?} failed: {e}");
                        writeln!(output, "{e}")?;
                    }
                }
            }
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        info!(done = self.engine.days().done_count(), "Session finished");
        Ok(())
    }
}
