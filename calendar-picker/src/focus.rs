use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use month_grid::{CalendarDate, YearMonth};

use crate::error::{Error, Result};

/// Years that can be displayed by default.
pub const DEFAULT_YEAR_RANGE: RangeInclusive<i32> = 1901..=2100;

/// The month displayed by a picker, independently of the selected date.
///
/// The displayed year always stays within a configured range: jumping to a
/// year outside of it lands on the closest bound, and stepping past either
/// end of the range has no effect.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct FocusMonth {
    current: YearMonth,
    years: RangeInclusive<i32>,
}

impl FocusMonth {
    /// Start displaying a month, or the closest month of given year range.
    ///
    /// ```
    /// use calendar_picker::{FocusMonth, YearMonth};
    ///
    /// let initial = YearMonth::new(1850, 4).unwrap();
    /// let focus = FocusMonth::new(initial, 1901..=2100);
    /// assert_eq!(focus.current(), YearMonth::new(1901, 0).unwrap());
    /// ```
    pub fn new(initial: YearMonth, years: RangeInclusive<i32>) -> Self {
        let years = normalize_year_range(years);
        let mut focus = Self { current: initial, years };
        focus.current = focus.nearest(initial.first_day());
        focus
    }

    pub fn current(&self) -> YearMonth {
        self.current
    }

    /// First day of the displayed month.
    pub fn first_day(&self) -> CalendarDate {
        self.current.first_day()
    }

    pub fn years(&self) -> &RangeInclusive<i32> {
        &self.years
    }

    /// Display next month, carrying into next year. Return `false` if the
    /// end of the year range was already reached.
    pub fn next(&mut self) -> bool {
        self.step(1)
    }

    /// Display previous month, borrowing from previous year. Return `false`
    /// if the start of the year range was already reached.
    pub fn prev(&mut self) -> bool {
        self.step(-1)
    }

    /// Display given month, clamping the year into the year range.
    ///
    /// ```
    /// use calendar_picker::{Error, FocusMonth, YearMonth};
    ///
    /// let mut focus = FocusMonth::new(YearMonth::new(2024, 0).unwrap(), 1901..=2100);
    ///
    /// assert_eq!(focus.jump(2150, 6), Ok(YearMonth::new(2100, 6).unwrap()));
    /// assert_eq!(focus.jump(2024, 12), Err(Error::InvalidMonth(12)));
    /// assert_eq!(focus.current(), YearMonth::new(2100, 6).unwrap());
    /// ```
    pub fn jump(&mut self, year: i32, month0: u8) -> Result<YearMonth> {
        if month0 > 11 {
            return Err(Error::InvalidMonth(month0));
        }

        self.current = self.clamped(year, month0);
        Ok(self.current)
    }

    /// Display the month of a date, its day is ignored.
    ///
    /// Dates before the year range display its first month and dates after
    /// it display its last month.
    pub fn set_month(&mut self, date: CalendarDate) -> YearMonth {
        self.current = self.nearest(date);
        self.current
    }

    /// Display the month of a date if it is not already displayed. Return
    /// `true` if the displayed month changed.
    pub fn follow(&mut self, date: CalendarDate) -> bool {
        if self.current.contains(date) {
            return false;
        }

        let previous = self.current;
        self.set_month(date) != previous
    }

    fn step(&mut self, delta: i32) -> bool {
        let Some(target) = self.current.add_months(delta) else {
            return false;
        };

        if !self.years.contains(&target.year()) {
            #[cfg(feature = "log")]
            log::debug!("Ignored navigation to {target}, outside of {:?}", self.years);
            return false;
        }

        self.current = target;
        true
    }

    /// Month of the range which is the closest to given date.
    fn nearest(&self, date: CalendarDate) -> YearMonth {
        let (start, end) = (*self.years.start(), *self.years.end());

        let month = if date.year() < start {
            self.clamped(start, 0)
        } else if date.year() > end {
            self.clamped(end, 11)
        } else {
            return self.clamped(date.year(), date.month0());
        };

        #[cfg(feature = "log")]
        log::debug!("Displaying {month} instead of {date}, outside of {:?}", self.years);

        month
    }

    fn clamped(&self, year: i32, month0: u8) -> YearMonth {
        let clamped_year = year.clamp(*self.years.start(), *self.years.end());

        if clamped_year != year {
            #[cfg(feature = "log")]
            log::debug!(
                year = year,
                clamped = clamped_year;
                "Clamped displayed year into {:?}",
                self.years
            );
        }

        YearMonth::new(clamped_year, month0).expect("year range only holds supported years")
    }
}

/// Reorder bounds of the range and restrict it to years which can be laid out
/// in a grid, including spillover days.
fn normalize_year_range(years: RangeInclusive<i32>) -> RangeInclusive<i32> {
    let (start, end) = years.into_inner();
    let (start, end) = if start <= end { (start, end) } else { (end, start) };
    let supported_start = NaiveDate::MIN.year() + 1;
    let supported_end = NaiveDate::MAX.year() - 1;

    let start = start.clamp(supported_start, supported_end);
    let end = end.clamp(supported_start, supported_end);
    start..=end
}
