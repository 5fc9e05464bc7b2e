use chrono::{DateTime, Datelike, NaiveDate, TimeZone};
use tracing::debug;

use crate::utils::{calendar::Calendar, time::days_in_month};

use super::{
    day::{DayRecord, DaySet},
    error::CalendarResolutionError,
};

/// Produces every day of the month containing `reference`, none of them done. Which month that is
/// depends on `calendar`, since an instant near midnight can belong to different days in different
/// zones.
pub fn generate<T: TimeZone, Tz: TimeZone>(
    reference: &DateTime<T>,
    calendar: &Calendar<Tz>,
) -> Result<DaySet, CalendarResolutionError> {
    let today = calendar.day_of(reference);
    let (year, month) = (today.year(), today.month());

    let count = days_in_month(year, month).ok_or(CalendarResolutionError::new(year, month))?;

    let days = (1..=count)
        .map(|day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .map(DayRecord::new)
                .ok_or(CalendarResolutionError::new(year, month))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(year, month, count, "Generated days of month");

    Ok(DaySet::new(year, month, days))
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

    use crate::{
        habit::{day::DaySet, error::CalendarResolutionError},
        utils::{calendar::Calendar, logging::TEST_LOGGING},
    };

    use super::generate;

    const TEST_START_DATE: NaiveDateTime = NaiveDateTime::new(
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
        NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
    );

    fn generate_for(year: i32, month: u32, day: u32) -> DaySet {
        let reference = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(year, month, day)
                .unwrap()
                .and_time(NaiveTime::MIN),
        );
        generate(&reference, &Calendar::utc()).unwrap()
    }

    #[test]
    fn test_generate_covers_month() -> anyhow::Result<()> {
        *TEST_LOGGING;
        let days = generate(&Utc.from_utc_datetime(&TEST_START_DATE), &Calendar::utc())?;

        assert_eq!(days.year(), 2026);
        assert_eq!(days.month(), 10);
        assert_eq!(days.len(), 31);
        assert_eq!(days.done_count(), 0);

        for (i, record) in days.iter().enumerate() {
            assert_eq!(record.date.day0() as usize, i);
            assert_eq!(record.date.month(), 10);
            assert!(!record.is_done);
        }

        for pair in days.days().windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        Ok(())
    }

    #[test]
    fn test_generate_month_lengths() {
        assert_eq!(generate_for(2026, 9, 30).len(), 30);
        assert_eq!(generate_for(2026, 12, 31).len(), 31);
        assert_eq!(generate_for(2023, 2, 14).len(), 28);
        assert_eq!(generate_for(2024, 2, 29).len(), 29);
        assert_eq!(generate_for(1900, 2, 1).len(), 28);
        assert_eq!(generate_for(2000, 2, 1).len(), 29);
    }

    #[test]
    fn test_generate_is_deterministic() {
        assert_eq!(generate_for(2024, 2, 10), generate_for(2024, 2, 10));
        // Any day of the month yields the same set.
        assert_eq!(generate_for(2024, 2, 1), generate_for(2024, 2, 29));
    }

    #[test]
    fn test_generate_respects_calendar_zone() -> anyhow::Result<()> {
        let reference = Utc.from_utc_datetime(
            &NaiveDate::from_ymd_opt(2026, 9, 30)
                .unwrap()
                .and_hms_opt(23, 30, 0)
                .unwrap(),
        );

        let utc = generate(&reference, &Calendar::utc())?;
        assert_eq!((utc.month(), utc.len()), (9, 30));

        let east = generate(&reference, &Calendar::fixed(2 * 3600).unwrap())?;
        assert_eq!((east.month(), east.len()), (10, 31));
        Ok(())
    }

    #[test]
    fn test_generate_unresolvable_month() {
        let reference = Utc.from_utc_datetime(&NaiveDate::MAX.and_time(NaiveTime::MIN));
        assert_eq!(
            generate(&reference, &Calendar::utc()),
            Err(CalendarResolutionError::new(NaiveDate::MAX.year(), 12))
        );
    }
}
