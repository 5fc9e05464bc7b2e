use chrono::{Months, NaiveDate};

/// Number of days in `month` of `year`, leap years included. [None] when chrono can't represent
/// either the first of the month or the first of the following one.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_next = first.checked_add_months(Months::new(1))?;
    u32::try_from((first_next - first).num_days()).ok()
}

/// Label shown on a calendar cell. Day of month without padding.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}
