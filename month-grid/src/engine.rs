//! Date arithmetic backends.
//!
//! Grids and selection rules only rely on the capabilities exposed by
//! [`DateEngine`], which makes it possible to swap the arithmetic behind
//! them. Two engines are provided: [`Chrono`], which is used by default, and
//! [`Civil`] which only relies on integer arithmetic.
use std::cmp::Ordering;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::date::CalendarDate;

/// The minimal set of calendar operations needed to lay out a month.
pub trait DateEngine {
    /// Number of days in a month, `month0` being zero-based.
    ///
    /// # Panics
    ///
    /// If the month does not exist.
    fn days_in_month(&self, year: i32, month0: u8) -> u8;

    /// Day of the week of a date.
    fn weekday(&self, date: CalendarDate) -> Weekday;

    /// Shift a date by a number of days, or return `None` if the result can't
    /// be represented.
    fn add_days(&self, date: CalendarDate, days: i64) -> Option<CalendarDate>;

    /// Compare two dates by calendar day.
    fn compare(&self, a: CalendarDate, b: CalendarDate) -> Ordering {
        a.cmp(&b)
    }
}

impl<E: DateEngine + ?Sized> DateEngine for &E {
    fn days_in_month(&self, year: i32, month0: u8) -> u8 {
        (**self).days_in_month(year, month0)
    }

    fn weekday(&self, date: CalendarDate) -> Weekday {
        (**self).weekday(date)
    }

    fn add_days(&self, date: CalendarDate, days: i64) -> Option<CalendarDate> {
        (**self).add_days(date, days)
    }

    fn compare(&self, a: CalendarDate, b: CalendarDate) -> Ordering {
        (**self).compare(a, b)
    }
}

// Chrono

/// Date arithmetic backed by [`chrono::NaiveDate`].
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Chrono;

impl DateEngine for Chrono {
    fn days_in_month(&self, year: i32, month0: u8) -> u8 {
        let first_next_month = NaiveDate::from_ymd_opt(year, u32::from(month0) + 1, 1)
            .expect("first of the month should always exist")
            .checked_add_months(chrono::Months::new(1));

        let Some(first_next_month) = first_next_month else {
            // December of last supported year
            return 31;
        };

        // The day 0 of next month is the last day of this month.
        first_next_month
            .pred_opt()
            .expect("first of a month can't be the first supported day")
            .day()
            .try_into()
            .expect("day should fit in a byte")
    }

    fn weekday(&self, date: CalendarDate) -> Weekday {
        NaiveDate::from(date).weekday()
    }

    fn add_days(&self, date: CalendarDate, days: i64) -> Option<CalendarDate> {
        let date = NaiveDate::from(date);
        let delta = Days::new(days.unsigned_abs());

        let shifted = if days >= 0 {
            date.checked_add_days(delta)
        } else {
            date.checked_sub_days(delta)
        };

        shifted.map(CalendarDate::from)
    }
}

// Civil

/// Date arithmetic computed from a count of days since 1970-01-01 in the
/// proleptic Gregorian calendar.
///
/// See http://howardhinnant.github.io/date_algorithms.html
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Civil;

impl Civil {
    fn is_leap_year(year: i64) -> bool {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }

    /// Count days from 1970-01-01, `month` being one-based.
    fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
        let year = if month <= 2 { year - 1 } else { year };
        let era = year.div_euclid(400);
        let year_of_era = year - era * 400;
        let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
        era * 146_097 + day_of_era - 719_468
    }

    /// Inverse of [`Civil::days_from_civil`].
    fn civil_from_days(days: i64) -> (i64, i64, i64) {
        let days = days + 719_468;
        let era = days.div_euclid(146_097);
        let day_of_era = days - era * 146_097;

        let year_of_era =
            (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;

        let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
        let shifted_month = (5 * day_of_year + 2) / 153;
        let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
        let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
        let year = year_of_era + era * 400 + i64::from(month <= 2);
        (year, month, day)
    }

    fn day_number(date: CalendarDate) -> i64 {
        Self::days_from_civil(
            date.year().into(),
            date.month().into(),
            date.day().into(),
        )
    }
}

impl DateEngine for Civil {
    fn days_in_month(&self, year: i32, month0: u8) -> u8 {
        match month0 {
            0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
            3 | 5 | 8 | 10 => 30,
            1 if Self::is_leap_year(year.into()) => 29,
            1 => 28,
            _ => panic!("invalid month index {month0}"),
        }
    }

    fn weekday(&self, date: CalendarDate) -> Weekday {
        // 1970-01-01 was a Thursday
        match (Self::day_number(date) + 4).rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }

    fn add_days(&self, date: CalendarDate, days: i64) -> Option<CalendarDate> {
        let day_number = Self::day_number(date).checked_add(days)?;
        let (year, month, day) = Self::civil_from_days(day_number);

        CalendarDate::from_ymd0(
            year.try_into().ok()?,
            (month - 1).try_into().ok()?,
            day.try_into().ok()?,
        )
    }
}
