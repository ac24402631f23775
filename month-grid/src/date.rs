use std::fmt;
use std::str::FromStr;

use chrono::format::ParseErrorKind;
use chrono::{Datelike, Local, NaiveDate, Weekday};

use crate::engine::{Chrono, DateEngine};
use crate::error::ParseDateError;

// CalendarDate

/// A day of the calendar, with no time-of-day or timezone component.
///
/// Months are zero-based (`0` is January) and days are one-based. A value
/// always represents an existing day which can also be represented by
/// [`chrono::NaiveDate`], and every transformation returns a new value.
///
/// Dates are ordered chronologically.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate {
    year: i32,
    month0: u8,
    day: u8,
}

impl CalendarDate {
    /// Create a date from its components, if it exists.
    ///
    /// ```
    /// use month_grid::CalendarDate;
    ///
    /// assert!(CalendarDate::from_ymd0(2024, 1, 29).is_some());
    /// assert!(CalendarDate::from_ymd0(2023, 1, 29).is_none());
    /// assert!(CalendarDate::from_ymd0(2023, 12, 1).is_none());
    /// ```
    pub fn from_ymd0(year: i32, month0: u8, day: u8) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, u32::from(month0) + 1, u32::from(day))?;
        Some(Self { year, month0, day })
    }

    /// Create a date from components which may overflow, carrying the excess
    /// the same way calendar arithmetic does.
    ///
    /// The day `0` of a month is the last day of the previous month, the
    /// month `12` is the January of next year, and so on. This only fails
    /// if the resulting date can't be represented.
    ///
    /// ```
    /// use month_grid::CalendarDate;
    ///
    /// let date = |s: &str| s.parse::<CalendarDate>().unwrap();
    ///
    /// assert_eq!(CalendarDate::rollover(2024, 2, 0), Some(date("2024-02-29")));
    /// assert_eq!(CalendarDate::rollover(2023, 12, 1), Some(date("2024-01-01")));
    /// assert_eq!(CalendarDate::rollover(2024, -1, 31), Some(date("2023-12-31")));
    /// assert_eq!(CalendarDate::rollover(2024, 0, 32), Some(date("2024-02-01")));
    /// ```
    pub fn rollover(year: i32, month0: i32, day: i32) -> Option<Self> {
        let months = i64::from(year) * 12 + i64::from(month0);
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month0 = u8::try_from(months.rem_euclid(12)).ok()?;
        Self::from_ymd0(year, month0, 1)?.checked_add_days(i64::from(day) - 1)
    }

    /// The current day of the host's local calendar.
    pub fn today() -> Self {
        Local::now().date_naive().into()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (`0` is January).
    pub fn month0(&self) -> u8 {
        self.month0
    }

    /// One-based month (`1` is January).
    pub fn month(&self) -> u8 {
        self.month0 + 1
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn weekday(&self) -> Weekday {
        Chrono.weekday(*self)
    }

    /// Day of the week counted from Sunday (`0`) to Saturday (`6`).
    pub fn weekday_from_sunday(&self) -> u8 {
        self.weekday()
            .num_days_from_sunday()
            .try_into()
            .expect("weekday index should fit in a byte")
    }

    /// Check if this day is a Saturday or a Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// The month this date belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth { year: self.year, month0: self.month0 }
    }

    /// Check if both dates belong to the same month of the same year.
    pub fn same_month(&self, other: &Self) -> bool {
        self.year_month() == other.year_month()
    }

    /// Shift this date by a number of days, or return `None` if the result
    /// can't be represented.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        Chrono.add_days(self, days)
    }

    /// Shift this date by a number of days, which may be negative.
    ///
    /// ```
    /// use month_grid::CalendarDate;
    ///
    /// let date = |s: &str| s.parse::<CalendarDate>().unwrap();
    ///
    /// assert_eq!(date("2023-12-31").add_days(1), date("2024-01-01"));
    /// assert_eq!(date("2024-03-01").add_days(-1), date("2024-02-29"));
    /// ```
    ///
    /// # Panics
    ///
    /// If the result is out of the range supported by chrono.
    pub fn add_days(self, days: i64) -> Self {
        self.checked_add_days(days)
            .expect("date shifted out of the supported range")
    }

    /// Same day in another month of the same year, clamped to the length
    /// of that month.
    ///
    /// ```
    /// use month_grid::CalendarDate;
    ///
    /// let date = |s: &str| s.parse::<CalendarDate>().unwrap();
    ///
    /// assert_eq!(date("2024-01-31").with_month0(1), Some(date("2024-02-29")));
    /// assert_eq!(date("2024-01-31").with_month0(12), None);
    /// ```
    pub fn with_month0(self, month0: u8) -> Option<Self> {
        let target = YearMonth::new(self.year, month0)?;
        Some(target.clamped_day(self.day))
    }

    /// Same day and month in another year, clamped to the length of that
    /// month.
    pub fn with_year(self, year: i32) -> Option<Self> {
        let target = YearMonth::new(year, self.month0)?;
        Some(target.clamped_day(self.day))
    }

    pub fn first_of_month(self) -> Self {
        self.year_month().first_day()
    }

    pub fn last_of_month(self) -> Self {
        self.year_month().last_day()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0().try_into().expect("month should fit in a byte"),
            day: date.day().try_into().expect("day should fit in a byte"),
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        NaiveDate::from_ymd_opt(date.year, u32::from(date.month()), u32::from(date.day))
            .expect("calendar dates are always valid")
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month(), self.day)
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for CalendarDate {
    type Err = ParseDateError;

    /// Parse a canonical `YYYY-MM-DD` key, which must be written exactly as
    /// it is displayed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 10 {
            return Err(ParseDateError::new(s, "expected format YYYY-MM-DD"));
        }

        let date: Self = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|err| match err.kind() {
                ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => {
                    ParseDateError::new(s, "this day does not exist")
                }
                _ => ParseDateError::new(s, "expected format YYYY-MM-DD"),
            })?
            .into();

        // Chrono is lenient with signs and padding.
        if date.to_string() != s {
            return Err(ParseDateError::new(s, "expected format YYYY-MM-DD"));
        }

        Ok(date)
    }
}

// YearMonth

/// A month of a given year, such as the month displayed by a date picker.
#[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month0: u8,
}

impl YearMonth {
    /// Create a year/month pair if the month is valid and its days can be
    /// represented.
    ///
    /// ```
    /// use month_grid::YearMonth;
    ///
    /// assert!(YearMonth::new(2024, 11).is_some());
    /// assert!(YearMonth::new(2024, 12).is_none());
    /// ```
    pub fn new(year: i32, month0: u8) -> Option<Self> {
        CalendarDate::from_ymd0(year, month0, 1)?;
        Some(Self { year, month0 })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (`0` is January).
    pub fn month0(&self) -> u8 {
        self.month0
    }

    /// Number of days in this month.
    pub fn day_count(&self) -> u8 {
        Chrono.days_in_month(self.year, self.month0)
    }

    pub fn first_day(&self) -> CalendarDate {
        CalendarDate { year: self.year, month0: self.month0, day: 1 }
    }

    pub fn last_day(&self) -> CalendarDate {
        CalendarDate { year: self.year, month0: self.month0, day: self.day_count() }
    }

    /// Check if a date belongs to this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year_month() == *self
    }

    /// Move by a number of months, carrying into the year.
    ///
    /// ```
    /// use month_grid::YearMonth;
    ///
    /// let dec = YearMonth::new(2023, 11).unwrap();
    /// assert_eq!(dec.add_months(1), YearMonth::new(2024, 0));
    /// assert_eq!(dec.add_months(-12), YearMonth::new(2022, 11));
    /// ```
    pub fn add_months(&self, delta: i32) -> Option<Self> {
        let months = i64::from(self.year) * 12 + i64::from(self.month0) + i64::from(delta);
        let year = i32::try_from(months.div_euclid(12)).ok()?;
        let month0 = u8::try_from(months.rem_euclid(12)).ok()?;
        Self::new(year, month0)
    }

    pub fn next(&self) -> Option<Self> {
        self.add_months(1)
    }

    pub fn prev(&self) -> Option<Self> {
        self.add_months(-1)
    }

    fn clamped_day(&self, day: u8) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month0: self.month0,
            day: day.clamp(1, self.day_count()),
        }
    }
}

impl From<CalendarDate> for YearMonth {
    fn from(date: CalendarDate) -> Self {
        date.year_month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month0 + 1)
    }
}

impl fmt::Debug for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod test {
    use super::{CalendarDate, YearMonth};
    use chrono::{Days, NaiveDate};

    fn date(s: &str) -> CalendarDate {
        s.parse().expect("invalid date literal")
    }

    #[test]
    fn test_rollover() {
        assert_eq!(CalendarDate::rollover(2023, 2, 0), Some(date("2023-02-28")));
        assert_eq!(CalendarDate::rollover(2000, 2, 0), Some(date("2000-02-29")));
        assert_eq!(CalendarDate::rollover(1900, 2, 0), Some(date("1900-02-28")));
        assert_eq!(CalendarDate::rollover(2024, 0, 0), Some(date("2023-12-31")));
        assert_eq!(CalendarDate::rollover(2024, 25, 1), Some(date("2026-02-01")));
        assert_eq!(CalendarDate::rollover(2024, -13, 1), Some(date("2022-12-01")));
        assert_eq!(CalendarDate::rollover(2024, 1, 30), Some(date("2024-03-01")));
        assert_eq!(CalendarDate::rollover(i32::MAX, 0, 1), None);
    }

    #[test]
    fn test_transforms_return_new_values() {
        let original = date("2024-01-31");
        let shifted = original.add_days(30);
        let moved = original.with_month0(1).unwrap();
        let other_year = original.with_year(2023).unwrap();

        assert_eq!(original, date("2024-01-31"));
        assert_eq!(shifted, date("2024-03-01"));
        assert_eq!(moved, date("2024-02-29"));
        assert_eq!(other_year, date("2023-01-31"));
        assert_eq!(date("2024-02-29").with_year(2023), Some(date("2023-02-28")));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in [
            "",
            "2024-1-05",
            "2024/01/05",
            "2024-13-01",
            "2024-00-10",
            "2024-02-30",
            "2024-02-00",
            "20x4-01-01",
            "+024-01-01",
            "2024-01-05 ",
            "2024-1-5  ",
            " 2024-1-05",
            "not a date",
        ] {
            assert!(raw.parse::<CalendarDate>().is_err(), "{raw:?} was accepted");
        }
    }

    #[test]
    fn test_parse_error_reason() {
        let err = "2023-02-29".parse::<CalendarDate>().unwrap_err();
        assert_eq!(err.input(), "2023-02-29");
        assert!(err.to_string().ends_with("this day does not exist"), "{err}");

        let err = "2024/01/05".parse::<CalendarDate>().unwrap_err();
        assert!(err.to_string().ends_with("expected format YYYY-MM-DD"), "{err}");
    }

    #[test]
    fn test_canonical_key_round_trip() {
        let first = NaiveDate::from_ymd_opt(1901, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(2100, 12, 31).unwrap();

        for naive in first.iter_days().take_while(|d| *d <= last) {
            let date = CalendarDate::from(naive);
            let key = date.to_string();
            assert_eq!(key, naive.format("%Y-%m-%d").to_string());
            assert_eq!(key.parse::<CalendarDate>(), Ok(date));
        }
    }

    #[test]
    fn test_ordering_is_chronological() {
        let first = NaiveDate::from_ymd_opt(1999, 12, 25).unwrap();

        for offset in 0..400 {
            let a = first + Days::new(offset);
            let b = a + Days::new(1);
            assert!(CalendarDate::from(a) < CalendarDate::from(b));
        }
    }

    #[test]
    fn test_year_month() {
        let feb = YearMonth::new(2024, 1).unwrap();
        assert_eq!(feb.day_count(), 29);
        assert_eq!(feb.last_day(), date("2024-02-29"));
        assert!(feb.contains(date("2024-02-10")));
        assert!(!feb.contains(date("2023-02-10")));
        assert_eq!(feb.prev(), YearMonth::new(2024, 0));
        assert_eq!(YearMonth::new(2024, 0).unwrap().prev(), YearMonth::new(2023, 11));
        assert_eq!(feb.to_string(), "2024-02");
    }

    #[test]
    fn test_weekday_from_sunday() {
        assert_eq!(date("2024-03-03").weekday_from_sunday(), 0);
        assert_eq!(date("2024-03-04").weekday_from_sunday(), 1);
        assert_eq!(date("2024-03-09").weekday_from_sunday(), 6);
        assert!(date("2024-03-09").is_weekend());
        assert!(!date("2024-03-08").is_weekend());
    }
}
