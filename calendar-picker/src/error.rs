use std::fmt;

use month_grid::{CalendarDate, ParseDateError};

use crate::policy::Bounds;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A string received from the native date input is not a canonical date.
    InvalidDate(ParseDateError),
    /// A date was submitted outside of the selectable bounds.
    OutOfBounds { date: CalendarDate, bounds: Bounds },
    /// A month index outside of `0..=11`.
    InvalidMonth(u8),
    /// The native date input is not rendered by the picker.
    NotNativeInput,
}

impl From<ParseDateError> for Error {
    fn from(err: ParseDateError) -> Self {
        Self::InvalidDate(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::OutOfBounds { date, bounds } => write!(f, "{date} is not in {bounds}"),
            Self::InvalidMonth(month0) => {
                write!(f, "month index {month0} is too large: expected 0 to 11")
            }
            Self::NotNativeInput => write!(f, "picker is not using the native date input"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            _ => None,
        }
    }
}
