//! Description of what a picker displays, to be drawn by the host.
use month_grid::{CalendarDate, MonthGrid};

use crate::interaction::Focused;
use crate::policy::Bounds;

/// How the picker is presented.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum RenderMode {
    /// A text input opening the month grid popover.
    #[default]
    Desktop,
    /// A native date input, which only exchanges canonical `YYYY-MM-DD`
    /// strings with the picker.
    NativeFallback,
}

impl RenderMode {
    pub fn select(is_mobile: bool, testing: bool) -> Self {
        if is_mobile || testing {
            Self::NativeFallback
        } else {
            Self::Desktop
        }
    }
}

/// Presentation flags of a grid cell, given to the style callback.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct CellProps {
    /// The cell is the selected value.
    pub current: bool,
    /// The cell is spillover from the previous or next month.
    pub diff_month: bool,
    pub is_weekend: bool,
    pub today: bool,
}

/// A button of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell<S> {
    pub date: CalendarDate,
    /// Unique canonical key of the cell, also used as its accessible label.
    pub key: String,
    /// Day of the month displayed in the cell.
    pub label: u8,
    pub disabled: bool,
    pub focused: bool,
    /// Output of the style callback.
    pub style: S,
}

/// The month grid with its header labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarView<S> {
    /// First day of the displayed month, as given to the navigation header.
    pub month: CalendarDate,
    pub labels: [&'static str; 7],
    pub rows: Vec<Vec<Cell<S>>>,
}

/// The input field of the picker.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum InputView {
    Text {
        id: Option<String>,
        value: String,
        placeholder: Option<String>,
    },
    Native {
        id: Option<String>,
        /// Canonical key of the value, empty if there is none.
        value: String,
        min: Option<String>,
        max: Option<String>,
        placeholder: Option<String>,
    },
}

/// Everything a picker displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerView<S> {
    pub mode: RenderMode,
    pub input: InputView,
    /// Whether the popover is visible.
    pub open: bool,
    pub calendar: CalendarView<S>,
}

pub(crate) struct CellContext<'a> {
    pub(crate) grid: &'a MonthGrid,
    pub(crate) bounds: &'a Bounds,
    pub(crate) value: Option<CalendarDate>,
    pub(crate) today: CalendarDate,
    pub(crate) focused: Option<Focused>,
}

impl CellContext<'_> {
    pub(crate) fn props(&self, date: CalendarDate) -> CellProps {
        CellProps {
            current: self.value == Some(date),
            diff_month: self.grid.diff_month(date),
            is_weekend: date.is_weekend(),
            today: date == self.today,
        }
    }

    pub(crate) fn calendar<S>(&self, mut style: impl FnMut(CellProps) -> S) -> CalendarView<S> {
        let rows = self
            .grid
            .rows()
            .iter()
            .map(|week| {
                week.iter()
                    .map(|&date| Cell {
                        date,
                        key: date.to_string(),
                        label: date.day(),
                        disabled: self.bounds.is_disabled(date),
                        focused: self.focused == Some(Focused::Cell(date)),
                        style: style(self.props(date)),
                    })
                    .collect()
            })
            .collect();

        CalendarView {
            month: self.grid.month().first_day(),
            labels: self.grid.labels(),
            rows,
        }
    }
}
