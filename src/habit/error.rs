use std::fmt::Display;

/// The calendar couldn't produce a valid range of days for the month of a reference time.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CalendarResolutionError {
    pub year: i32,
    pub month: u32,
}

impl CalendarResolutionError {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }
}

impl Display for CalendarResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Can't resolve days of month {} in year {}",
            self.month, self.year
        )
    }
}

impl std::error::Error for CalendarResolutionError {}
