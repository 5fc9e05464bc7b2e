use chrono::NaiveDate;
use serde::Serialize;

/// A single day of the tracked month. Its identity is the calendar day itself.
#[derive(PartialEq, Eq, Debug, Serialize, Clone, Copy)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub is_done: bool,
}

impl DayRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_done: false,
        }
    }
}

/// Every day of one month, in ascending order, one record per calendar day.
///
/// Only [StreakEngine](super::engine::StreakEngine) can change records. Everyone else gets a read
/// only view.
#[derive(PartialEq, Eq, Debug, Serialize, Clone)]
pub struct DaySet {
    year: i32,
    month: u32,
    days: Vec<DayRecord>,
}

impl DaySet {
    /// `days` must be sorted and contiguous, covering the whole of `month`.
    pub(crate) fn new(year: i32, month: u32, days: Vec<DayRecord>) -> Self {
        Self { year, month, days }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days(&self) -> &[DayRecord] {
        &self.days
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayRecord> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.days.iter().filter(|v| v.is_done).count()
    }

    /// Record for `date`, if the date belongs to this month.
    pub fn get(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.position(date).map(|i| &self.days[i])
    }

    pub(crate) fn get_mut(&mut self, date: NaiveDate) -> Option<&mut DayRecord> {
        self.position(date).map(|i| &mut self.days[i])
    }

    fn position(&self, date: NaiveDate) -> Option<usize> {
        self.days.binary_search_by_key(&date, |v| v.date).ok()
    }
}
