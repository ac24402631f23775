use std::cmp::Ordering;
use std::fmt;

use month_grid::{CalendarDate, Chrono, DateEngine};

use crate::error::{Error, Result};

/// Optional inclusive limits of the selectable dates.
///
/// Nothing requires `min` to be before `max`: when it is not the case, no
/// date can be selected at all.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<CalendarDate>,
    pub max: Option<CalendarDate>,
}

impl Bounds {
    pub const UNBOUNDED: Self = Self { min: None, max: None };

    pub fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Self {
        Self { min, max }
    }

    pub fn with_min(self, min: CalendarDate) -> Self {
        Self { min: Some(min), ..self }
    }

    pub fn with_max(self, max: CalendarDate) -> Self {
        Self { max: Some(max), ..self }
    }

    /// Check if a date can't be selected.
    ///
    /// ```
    /// use calendar_picker::{Bounds, CalendarDate};
    ///
    /// let date = |s: &str| s.parse::<CalendarDate>().unwrap();
    /// let bounds = Bounds::default()
    ///     .with_min(date("2024-01-10"))
    ///     .with_max(date("2024-01-20"));
    ///
    /// assert!(bounds.is_disabled(date("2024-01-09")));
    /// assert!(!bounds.is_disabled(date("2024-01-10")));
    /// assert!(!bounds.is_disabled(date("2024-01-20")));
    /// assert!(bounds.is_disabled(date("2024-01-21")));
    /// ```
    pub fn is_disabled(&self, candidate: CalendarDate) -> bool {
        self.is_disabled_with(Chrono, candidate)
    }

    /// Same as [`Bounds::is_disabled`] using a specific engine to compare
    /// dates.
    pub fn is_disabled_with(&self, engine: impl DateEngine, candidate: CalendarDate) -> bool {
        let after_max = self
            .max
            .is_some_and(|max| engine.compare(candidate, max) == Ordering::Greater);

        let before_min = self
            .min
            .is_some_and(|min| engine.compare(candidate, min) == Ordering::Less);

        after_max || before_min
    }

    /// Check if `min` is after `max`, in which case all dates are disabled.
    pub fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    /// Return the date back if it is selectable.
    pub fn check(&self, date: CalendarDate) -> Result<CalendarDate> {
        if self.is_disabled(date) {
            Err(Error::OutOfBounds { date, bounds: *self })
        } else {
            Ok(date)
        }
    }

    /// Canonical `min` and `max` attributes of a native date input.
    pub fn native_attrs(&self) -> (Option<String>, Option<String>) {
        (
            self.min.map(|date| date.to_string()),
            self.max.map(|date| date.to_string()),
        )
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (Some(min), Some(max)) => write!(f, "{min}..={max}"),
            (Some(min), None) => write!(f, "{min}.."),
            (None, Some(max)) => write!(f, "..={max}"),
            (None, None) => write!(f, ".."),
        }
    }
}

/// Check if a date can't be selected within given bounds.
pub fn is_disabled(candidate: CalendarDate, bounds: &Bounds) -> bool {
    bounds.is_disabled(candidate)
}
