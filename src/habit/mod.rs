//! The habit core: the days of the current month, their done state, and the streak over them.
//! Nothing in here reads the system clock or the local time zone, callers supply both.

pub mod day;
pub mod engine;
pub mod error;
pub mod generator;
