//! Small terminal habit tracker. Shows the days of the current month, lets you mark each one as
//! done, and counts how many days in a row ending today are done.
//!

pub mod cli;
pub mod habit;
pub mod utils;
