use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};

/// Defines where day boundaries lie. Every "same calendar day" decision in the crate is made by
/// converting an instant with [Calendar::day_of], so generation and lookups always agree.
#[derive(Debug, Clone)]
pub struct Calendar<Tz: TimeZone> {
    zone: Tz,
}

impl<Tz: TimeZone> Calendar<Tz> {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> &Tz {
        &self.zone
    }

    /// Calendar day `instant` falls on in this calendar's zone.
    pub fn day_of<T: TimeZone>(&self, instant: &DateTime<T>) -> NaiveDate {
        instant.with_timezone(&self.zone).date_naive()
    }
}

impl Calendar<Utc> {
    pub fn utc() -> Self {
        Self::new(Utc)
    }
}

impl Calendar<FixedOffset> {
    /// Calendar with a fixed offset east of UTC. [None] if the offset is out of bounds.
    pub fn fixed(offset_seconds: i32) -> Option<Self> {
        FixedOffset::east_opt(offset_seconds).map(Self::new)
    }

    /// Calendar pinned to the local offset as of this call. Later DST changes don't move it.
    pub fn local() -> Self {
        Self::new(*Local::now().offset())
    }
}
