use chrono::{DateTime, Utc};

/// Represents an entity responsible for providing dates across application. The habit core never
/// reads it directly, callers pass the time they got from here. This allows it to be swapped for
/// testing.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn time(&self) -> DateTime<Utc>;
}

pub struct DefaultClock;

impl Clock for DefaultClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
