#![doc = include_str!("../README.md")]

pub mod date;
pub mod engine;
pub mod error;
pub mod grid;

pub use crate::date::{CalendarDate, YearMonth};
pub use crate::engine::{Chrono, Civil, DateEngine};
pub use crate::error::ParseDateError;
pub use crate::grid::{month_grid, weekday_labels, MonthGrid, WeekStart};

// Reexport Weekday from chrono as part of the public type.
pub use chrono::Weekday;

/// English month names, indexed by zero-based month.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Canonical `YYYY-MM-DD` key of a date.
///
/// This key identifies grid cells and is the serialization used by native
/// date inputs.
///
/// ```
/// use month_grid::{canonical_key, CalendarDate};
///
/// let date = CalendarDate::from_ymd0(1999, 0, 5).unwrap();
/// assert_eq!(canonical_key(date), "1999-01-05");
/// ```
pub fn canonical_key(date: CalendarDate) -> String {
    date.to_string()
}
