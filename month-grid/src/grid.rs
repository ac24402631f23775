use std::fmt;

use chrono::Weekday;

use crate::date::{CalendarDate, YearMonth};
use crate::engine::{Chrono, DateEngine};

pub const DAYS_OF_WEEK_SUN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
pub const DAYS_OF_WEEK_MON: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

// WeekStart

/// The day displayed in the first column of a month grid.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn from_monday_start(monday_start: bool) -> Self {
        if monday_start {
            Self::Monday
        } else {
            Self::Sunday
        }
    }

    /// Column of given weekday in a grid.
    pub fn column(self, weekday: Weekday) -> u8 {
        let column = match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        };

        column.try_into().expect("weekday index should fit in a byte")
    }

    /// Short English labels of the columns of a grid.
    pub fn labels(self) -> [&'static str; 7] {
        match self {
            Self::Sunday => DAYS_OF_WEEK_SUN,
            Self::Monday => DAYS_OF_WEEK_MON,
        }
    }
}

/// Short English labels of the weekdays, in display order.
///
/// ```
/// use month_grid::weekday_labels;
///
/// assert_eq!(weekday_labels(true), ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
/// assert_eq!(weekday_labels(false), ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);
/// ```
pub fn weekday_labels(week_starts_monday: bool) -> [&'static str; 7] {
    WeekStart::from_monday_start(week_starts_monday).labels()
}

// MonthGrid

/// The whole weeks covering a month.
///
/// Rows always contain 7 consecutive days, and the rows themselves are
/// consecutive: cells form a single run of days with no gap or repetition.
/// Days of the previous and next month needed to complete the first and last
/// weeks are part of the grid, see [`MonthGrid::diff_month`].
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    week_start: WeekStart,
    rows: Vec<[CalendarDate; 7]>,
}

impl MonthGrid {
    /// Lay out the weeks of a month.
    ///
    /// ```
    /// use month_grid::{MonthGrid, WeekStart, YearMonth};
    ///
    /// // March 2026 starts on a Sunday and lasts 31 days
    /// let march = YearMonth::new(2026, 2).unwrap();
    ///
    /// assert_eq!(MonthGrid::new(march, WeekStart::Sunday).weeks(), 5);
    /// assert_eq!(MonthGrid::new(march, WeekStart::Monday).weeks(), 6);
    /// ```
    pub fn new(month: YearMonth, week_start: WeekStart) -> Self {
        Self::with_engine(Chrono, month, week_start)
    }

    /// Lay out the weeks of a month using a specific date engine.
    pub fn with_engine(engine: impl DateEngine, month: YearMonth, week_start: WeekStart) -> Self {
        let first = month.first_day();
        let days_in_month = engine.days_in_month(month.year(), month.month0());
        let leading_offset = week_start.column(engine.weekday(first));
        let weeks = (usize::from(leading_offset) + usize::from(days_in_month)).div_ceil(7);

        let start = engine
            .add_days(first, -i64::from(leading_offset))
            .expect("grid starts before the first supported day");

        let rows = (0..weeks)
            .map(|week| {
                std::array::from_fn(|column| {
                    let offset = i64::try_from(week * 7 + column).expect("grid is too large");

                    engine
                        .add_days(start, offset)
                        .expect("grid ends after the last supported day")
                })
            })
            .collect();

        Self { month, week_start, rows }
    }

    /// The month this grid was built for.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Number of rows, which is either 4, 5 or 6.
    pub fn weeks(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[[CalendarDate; 7]] {
        &self.rows
    }

    /// Labels of the columns of this grid.
    pub fn labels(&self) -> [&'static str; 7] {
        self.week_start.labels()
    }

    /// Iterate over all cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.rows.iter().flatten().copied()
    }

    pub fn first(&self) -> CalendarDate {
        self.rows[0][0]
    }

    pub fn last(&self) -> CalendarDate {
        self.rows[self.rows.len() - 1][6]
    }

    /// Check if a date is displayed by this grid, including spillover.
    pub fn contains(&self, date: CalendarDate) -> bool {
        (self.first()..=self.last()).contains(&date)
    }

    /// Check if a cell belongs to another month than the one this grid was
    /// built for.
    pub fn diff_month(&self, date: CalendarDate) -> bool {
        !self.month.contains(date)
    }

    /// Row and column of a date in this grid.
    ///
    /// ```
    /// use month_grid::{month_grid, CalendarDate};
    ///
    /// let grid = month_grid(2024, 1, true);
    /// let date = |s: &str| s.parse::<CalendarDate>().unwrap();
    ///
    /// assert_eq!(grid.position(date("2024-01-29")), Some((0, 0)));
    /// assert_eq!(grid.position(date("2024-02-29")), Some((4, 3)));
    /// assert_eq!(grid.position(date("2024-03-04")), None);
    /// ```
    pub fn position(&self, date: CalendarDate) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row, week)| {
            let column = week.iter().position(|cell| *cell == date)?;
            Some((row, column))
        })
    }
}

impl fmt::Debug for MonthGrid {
    /// ```
    /// use month_grid::month_grid;
    ///
    /// assert_eq!(
    ///     format!("{:?}", month_grid(2015, 1, false)),
    ///     "MonthGrid { month: 2015-02, week_start: Sunday, range: 2015-02-01..=2015-02-28 }",
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthGrid")
            .field("month", &self.month)
            .field("week_start", &self.week_start)
            .field("range", &(self.first()..=self.last()))
            .finish()
    }
}

/// Lay out the weeks of a month, `month0` being zero-based.
///
/// ```
/// use month_grid::month_grid;
///
/// let grid = month_grid(2024, 0, false);
/// assert_eq!(grid.weeks(), 5);
/// assert_eq!(grid.first().to_string(), "2023-12-31");
/// assert_eq!(grid.last().to_string(), "2024-02-03");
/// ```
///
/// # Panics
///
/// If the month is not in `0..=11`, or the year is not supported by chrono.
pub fn month_grid(year: i32, month0: u8, week_starts_monday: bool) -> MonthGrid {
    assert!(month0 < 12, "month index {month0} is out of 0..=11");
    let month = YearMonth::new(year, month0).expect("year should be supported by chrono");
    MonthGrid::new(month, WeekStart::from_monday_start(week_starts_monday))
}

#[cfg(test)]
mod test {
    use super::{month_grid, MonthGrid, WeekStart};
    use crate::date::{CalendarDate, YearMonth};
    use crate::engine::Civil;

    fn date(s: &str) -> CalendarDate {
        s.parse().expect("invalid date literal")
    }

    fn assert_well_formed(grid: &MonthGrid) {
        assert!((4..=6).contains(&grid.weeks()), "{grid:?} has {} weeks", grid.weeks());
        assert!(grid.rows().iter().all(|row| row.len() == 7));

        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), grid.weeks() * 7);

        for pair in cells.windows(2) {
            assert_eq!(pair[0].add_days(1), pair[1], "gap in {grid:?}");
        }

        let month = grid.month();
        let in_month = cells.iter().filter(|cell| month.contains(**cell)).count();
        assert_eq!(in_month, usize::from(month.day_count()));
        assert!(grid.rows()[0].contains(&month.first_day()));
        assert!(grid.rows()[grid.weeks() - 1].contains(&month.last_day()));
    }

    #[test]
    fn test_all_supported_months() {
        for year in 1901..=2100 {
            for month0 in 0..12 {
                for monday_start in [false, true] {
                    let grid = month_grid(year, month0, monday_start);
                    assert_well_formed(&grid);

                    let first_column = grid.first().weekday_from_sunday();
                    assert_eq!(first_column, if monday_start { 1 } else { 0 });
                }
            }
        }
    }

    #[test]
    fn test_engines_build_same_grid() {
        for year in [1901, 1999, 2000, 2024, 2100] {
            for month0 in 0..12 {
                let month = YearMonth::new(year, month0).unwrap();

                for week_start in [WeekStart::Sunday, WeekStart::Monday] {
                    assert_eq!(
                        MonthGrid::new(month, week_start),
                        MonthGrid::with_engine(Civil, month, week_start),
                    );
                }
            }
        }
    }

    #[test]
    fn test_leap_day() {
        let grid = month_grid(2024, 1, true);
        let leap_day = date("2024-02-29");
        assert_eq!(grid.iter().filter(|cell| *cell == leap_day).count(), 1);

        let grid = month_grid(2023, 1, true);
        assert!(!grid.iter().any(|cell| cell.month0() == 1 && cell.day() == 29));
    }

    #[test]
    fn test_row_counts() {
        // February 2015 starts on a Sunday and has 28 days
        assert_eq!(month_grid(2015, 1, false).weeks(), 4);
        assert_eq!(month_grid(2015, 1, true).weeks(), 5);
        // February 2021 starts on a Monday
        assert_eq!(month_grid(2021, 1, true).weeks(), 4);
        // August 2020 starts on a Saturday and has 31 days
        assert_eq!(month_grid(2020, 7, false).weeks(), 6);
        assert_eq!(month_grid(2020, 7, true).weeks(), 6);
    }

    #[test]
    fn test_spillover() {
        let grid = month_grid(2024, 0, true);
        assert_eq!(grid.first(), date("2024-01-01"));
        assert_eq!(grid.last(), date("2024-02-04"));
        assert!(!grid.diff_month(date("2024-01-31")));
        assert!(grid.diff_month(date("2024-02-01")));
        assert!(grid.contains(date("2024-02-04")));
        assert!(!grid.contains(date("2024-02-05")));

        let grid = month_grid(2023, 11, false);
        assert_eq!(grid.first(), date("2023-11-26"));
        assert_eq!(grid.last(), date("2024-01-06"));
        assert!(grid.diff_month(grid.last()));
    }

    #[test]
    #[should_panic(expected = "out of 0..=11")]
    fn test_invalid_month() {
        month_grid(2024, 12, false);
    }
}
