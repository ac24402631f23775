//! Navigation headers displayed above the grid.
//!
//! A header is an external widget which only sees the displayed month and
//! the operations moving it, through a [`HeaderContext`].
use std::ops::RangeInclusive;

use month_grid::{CalendarDate, MONTH_NAMES};

use crate::focus::FocusMonth;

/// What a navigation header can see and do.
pub struct HeaderContext<'a> {
    focus: &'a mut FocusMonth,
}

impl<'a> HeaderContext<'a> {
    pub(crate) fn new(focus: &'a mut FocusMonth) -> Self {
        Self { focus }
    }

    /// First day of the displayed month.
    pub fn month(&self) -> CalendarDate {
        self.focus.first_day()
    }

    pub fn next(&mut self) {
        self.focus.next();
    }

    pub fn prev(&mut self) {
        self.focus.prev();
    }

    /// Years that can be displayed.
    pub fn years(&self) -> &RangeInclusive<i32> {
        self.focus.years()
    }

    /// Display the month of given date, its day is ignored.
    pub fn set_month(&mut self, date: CalendarDate) {
        self.focus.set_month(date);
    }
}

/// A widget allowing to navigate between months.
pub trait NavigationHeader {
    fn show(&mut self, ctx: &mut HeaderContext<'_>);
}

impl<F: FnMut(&mut HeaderContext<'_>)> NavigationHeader for F {
    fn show(&mut self, ctx: &mut HeaderContext<'_>) {
        self(ctx)
    }
}

// DefaultHeader

/// User input received by a [`DefaultHeader`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum HeaderInput {
    /// The "previous month" button was pressed.
    Prev,
    /// The "next month" button was pressed.
    Next,
    /// A month was picked in the month selector.
    SelectMonth(u8),
    /// A year was typed in the year field.
    EnterYear(i32),
}

/// What a [`DefaultHeader`] displays.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct HeaderView {
    /// Zero-based index of the selected month option.
    pub month0: u8,
    pub month_options: [&'static str; 12],
    pub year: i32,
    /// Limits of the year field.
    pub year_range: RangeInclusive<i32>,
}

/// A header with previous/next buttons, a month selector and a year field.
///
/// Inputs are queued by the host and applied the next time the header is
/// shown. Months outside of `0..=11` are ignored and entered years are
/// clamped into the picker's year range, keeping the selected month.
///
/// ```
/// use calendar_picker::header::{DefaultHeader, HeaderInput};
/// use calendar_picker::{Picker, PickerOptions, YearMonth};
///
/// let mut picker = Picker::new(PickerOptions::default())
///     .with_focus_month(YearMonth::new(2024, 0).unwrap());
///
/// let mut header = DefaultHeader::default();
/// header.push(HeaderInput::SelectMonth(4));
/// header.push(HeaderInput::EnterYear(2030));
/// picker.show_header(&mut header);
///
/// assert_eq!(picker.focus_month(), YearMonth::new(2030, 4).unwrap());
/// assert_eq!(header.view().unwrap().month_options[4], "May");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DefaultHeader {
    pending: Vec<HeaderInput>,
    year_range: Option<RangeInclusive<i32>>,
    view: Option<HeaderView>,
}

impl DefaultHeader {
    /// Override the limits displayed by the year field, which are the
    /// picker's year range by default.
    pub fn with_year_range(self, year_range: RangeInclusive<i32>) -> Self {
        Self { year_range: Some(year_range), ..self }
    }

    /// Queue an input until next time this header is shown.
    pub fn push(&mut self, input: HeaderInput) {
        self.pending.push(input);
    }

    /// What was displayed last time this header was shown.
    pub fn view(&self) -> Option<&HeaderView> {
        self.view.as_ref()
    }
}

impl NavigationHeader for DefaultHeader {
    fn show(&mut self, ctx: &mut HeaderContext<'_>) {
        for input in self.pending.drain(..) {
            match input {
                HeaderInput::Prev => ctx.prev(),
                HeaderInput::Next => ctx.next(),
                HeaderInput::SelectMonth(month0) => {
                    if let Some(date) = ctx.month().with_month0(month0) {
                        ctx.set_month(date);
                    }
                }
                HeaderInput::EnterYear(year) => {
                    let year = year.clamp(*ctx.years().start(), *ctx.years().end());

                    if let Some(date) = ctx.month().with_year(year) {
                        ctx.set_month(date);
                    }
                }
            }
        }

        let month = ctx.month();

        self.view = Some(HeaderView {
            month0: month.month0(),
            month_options: MONTH_NAMES,
            year: month.year(),
            year_range: self.year_range.clone().unwrap_or_else(|| ctx.years().clone()),
        });
    }
}
