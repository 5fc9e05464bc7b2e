use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::trace;

use crate::utils::calendar::Calendar;

use super::{day::DaySet, error::CalendarResolutionError, generator::generate};

/// Owns the days of the tracked month and is the only way to change them.
///
/// The month is generated once, from the time given to [StreakEngine::new]. It is not regenerated
/// when a running session crosses midnight or the end of the month.
#[derive(Debug, Clone)]
pub struct StreakEngine<Tz: TimeZone> {
    calendar: Calendar<Tz>,
    days: DaySet,
}

impl<Tz: TimeZone> StreakEngine<Tz> {
    pub fn new<T: TimeZone>(
        now: &DateTime<T>,
        calendar: Calendar<Tz>,
    ) -> Result<Self, CalendarResolutionError> {
        let days = generate(now, &calendar)?;
        Ok(Self { calendar, days })
    }

    pub fn days(&self) -> &DaySet {
        &self.days
    }

    pub fn calendar(&self) -> &Calendar<Tz> {
        &self.calendar
    }

    /// Flips the day `target` falls on. Dates outside of the tracked month are ignored.
    pub fn toggle<T: TimeZone>(&mut self, target: &DateTime<T>) {
        let day = self.calendar.day_of(target);
        self.toggle_day(day);
    }

    /// Same as [StreakEngine::toggle] for an already resolved day. Returns the new state of the
    /// day, or [None] when nothing matched.
    pub fn toggle_day(&mut self, day: NaiveDate) -> Option<bool> {
        match self.days.get_mut(day) {
            Some(record) => {
                record.is_done = !record.is_done;
                trace!(%day, done = record.is_done, "Toggled day");
                Some(record.is_done)
            }
            None => {
                trace!(%day, "Ignoring toggle outside of tracked month");
                None
            }
        }
    }

    /// Number of consecutive done days ending with the day of `now`. Stops at the first day that
    /// isn't done or isn't tracked, so it never reaches into the previous month.
    pub fn current_streak<T: TimeZone>(&self, now: &DateTime<T>) -> usize {
        let mut streak = 0;
        let mut day = Some(self.calendar.day_of(now));

        while let Some(current) = day {
            match self.days.get(current) {
                Some(record) if record.is_done => {
                    streak += 1;
                    day = current.pred_opt();
                }
                _ => break,
            }
        }
        streak
    }
}
