use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;

use chrono::NaiveDate;
use month_grid::{CalendarDate, MonthGrid, WeekStart, YearMonth};

use crate::error::{Error, Result};
use crate::focus::{FocusMonth, DEFAULT_YEAR_RANGE};
use crate::header::{HeaderContext, NavigationHeader};
use crate::interaction::{Activation, Focused, HitRegion, Interaction, Status};
use crate::listener::{ListenerId, ListenerRegistry, ListenerSet};
use crate::policy::Bounds;
use crate::view::{CellContext, CellProps, InputView, PickerView, RenderMode};

type ChangeCallback = Box<dyn FnMut(CalendarDate)>;
type Formatter = Box<dyn Fn(CalendarDate) -> String>;

// PickerOptions

/// Static configuration of a [`Picker`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct PickerOptions {
    /// Identifier forwarded to the input field.
    pub id: Option<String>,
    pub placeholder: Option<String>,
    pub bounds: Bounds,
    /// Display weeks starting on Monday instead of Sunday.
    pub monday_start: bool,
    /// Close the popover once a date is selected.
    pub close_on_select: bool,
    pub is_mobile: bool,
    /// Use the native input, as done on mobile, to ease automated testing.
    pub testing: bool,
    /// Years that can be displayed.
    pub year_range: RangeInclusive<i32>,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            id: None,
            placeholder: None,
            bounds: Bounds::UNBOUNDED,
            monday_start: false,
            close_on_select: false,
            is_mobile: false,
            testing: false,
            year_range: DEFAULT_YEAR_RANGE,
        }
    }
}

impl PickerOptions {
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..self }
    }

    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        Self { placeholder: Some(placeholder.into()), ..self }
    }

    pub fn with_bounds(self, bounds: Bounds) -> Self {
        Self { bounds, ..self }
    }

    pub fn with_min(self, min: CalendarDate) -> Self {
        Self { bounds: self.bounds.with_min(min), ..self }
    }

    pub fn with_max(self, max: CalendarDate) -> Self {
        Self { bounds: self.bounds.with_max(max), ..self }
    }

    pub fn with_monday_start(self, monday_start: bool) -> Self {
        Self { monday_start, ..self }
    }

    pub fn with_close_on_select(self, close_on_select: bool) -> Self {
        Self { close_on_select, ..self }
    }

    pub fn with_mobile(self, is_mobile: bool) -> Self {
        Self { is_mobile, ..self }
    }

    pub fn with_testing(self, testing: bool) -> Self {
        Self { testing, ..self }
    }

    pub fn with_year_range(self, year_range: RangeInclusive<i32>) -> Self {
        Self { year_range, ..self }
    }

    pub fn week_start(&self) -> WeekStart {
        WeekStart::from_monday_start(self.monday_start)
    }

    pub fn render_mode(&self) -> RenderMode {
        RenderMode::select(self.is_mobile, self.testing)
    }
}

// Picker

/// A date picker: an input field opening a month grid.
///
/// The picker never modifies its value by itself: selected dates are
/// reported to the change callback and it is up to the caller to feed them
/// back with [`Picker::set_value`].
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use calendar_picker::{CalendarDate, HitRegion, Picker, PickerOptions, Status};
///
/// let date = |s: &str| s.parse::<CalendarDate>().unwrap();
/// let selected = Rc::new(Cell::new(None));
///
/// let mut picker = Picker::new(PickerOptions::default().with_close_on_select(true))
///     .with_today(date("2024-03-12"))
///     .on_change({
///         let selected = selected.clone();
///         move |date| selected.set(Some(date))
///     });
///
/// picker.focus_input();
/// assert_eq!(picker.status(), Status::Open);
///
/// picker.pointer_down(HitRegion::Popover);
/// picker.activate(date("2024-04-02"));
///
/// assert_eq!(selected.get(), Some(date("2024-04-02")));
/// assert_eq!(picker.focus_month().month0(), 3);
/// assert_eq!(picker.input_text(), "2 Apr 24");
/// assert_eq!(picker.status(), Status::Closed);
/// ```
pub struct Picker {
    options: PickerOptions,
    value: Option<CalendarDate>,
    today: CalendarDate,
    focus: FocusMonth,
    grid: MonthGrid,
    interaction: Interaction,
    input_text: String,
    on_change: Option<ChangeCallback>,
    format: Option<Formatter>,
}

impl Picker {
    /// Create a closed picker displaying current month.
    pub fn new(options: PickerOptions) -> Self {
        let today = CalendarDate::today();
        let focus = FocusMonth::new(today.year_month(), options.year_range.clone());
        let grid = build_grid(focus.current(), options.week_start());

        Self {
            options,
            value: None,
            today,
            focus,
            grid,
            interaction: Interaction::new(Rc::new(ListenerSet::default())),
            input_text: String::new(),
            on_change: None,
            format: None,
        }
    }

    // --
    // -- Builder Methods
    // --

    /// Attach the registry where dismiss listeners are installed, typically
    /// shared by all pickers of a document.
    ///
    /// An open picker is closed, releasing its listener from the previous
    /// registry.
    pub fn with_listeners(mut self, listeners: Rc<dyn ListenerRegistry>) -> Self {
        self.interaction.close();
        Self { interaction: Interaction::new(listeners), ..self }
    }

    /// Set the initial value, and display its month.
    pub fn with_value(mut self, value: CalendarDate) -> Self {
        self.set_value(Some(value));
        self.focus.set_month(value);
        self.sync_grid();
        self
    }

    /// Display given month.
    pub fn with_focus_month(mut self, month: YearMonth) -> Self {
        self.focus.set_month(month.first_day());
        self.sync_grid();
        self
    }

    /// Override current date, which is highlighted and receives focus.
    pub fn with_today(self, today: CalendarDate) -> Self {
        Self { today, ..self }
    }

    /// Register the callback receiving committed dates.
    pub fn on_change(self, callback: impl FnMut(CalendarDate) + 'static) -> Self {
        Self { on_change: Some(Box::new(callback)), ..self }
    }

    /// Override the display format of the text input.
    pub fn with_format(mut self, format: impl Fn(CalendarDate) -> String + 'static) -> Self {
        self.format = Some(Box::new(format));
        self.input_text = display_text(self.format.as_ref(), self.value);
        self
    }

    // --
    // -- Accessors
    // --

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn value(&self) -> Option<CalendarDate> {
        self.value
    }

    pub fn today(&self) -> CalendarDate {
        self.today
    }

    pub fn status(&self) -> Status {
        self.interaction.status()
    }

    pub fn is_open(&self) -> bool {
        self.interaction.is_open()
    }

    pub fn focused(&self) -> Option<Focused> {
        self.interaction.focused()
    }

    pub fn dismiss_listener(&self) -> Option<ListenerId> {
        self.interaction.dismiss_listener()
    }

    pub fn focus_month(&self) -> YearMonth {
        self.focus.current()
    }

    /// Grid of the displayed month.
    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn render_mode(&self) -> RenderMode {
        self.options.render_mode()
    }

    /// Text currently displayed by the text input.
    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    // --
    // -- External updates
    // --

    /// Replace the value owned by the caller.
    ///
    /// The text input is updated, but the displayed month is left untouched.
    pub fn set_value(&mut self, value: Option<CalendarDate>) {
        self.value = value;
        self.input_text = display_text(self.format.as_ref(), value);
    }

    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
    }

    pub fn set_monday_start(&mut self, monday_start: bool) {
        self.options.monday_start = monday_start;
        self.sync_grid();
    }

    // --
    // -- Interaction
    // --

    /// The text input gained focus.
    ///
    /// This opens the popover and moves focus to today's cell if it is
    /// displayed and enabled. The native input has no popover, so it
    /// returns `None` in that mode.
    pub fn focus_input(&mut self) -> Option<Focused> {
        if self.render_mode() == RenderMode::NativeFallback {
            return None;
        }

        let today_cell = Some(self.today)
            .filter(|today| self.grid.contains(*today))
            .filter(|today| !self.options.bounds.is_disabled(*today));

        Some(self.interaction.focus_input(today_cell))
    }

    /// A pointer-down event reached the document.
    pub fn pointer_down(&mut self, region: HitRegion) -> Status {
        self.interaction.pointer_down(region)
    }

    /// Activate the cell of a date from the displayed grid.
    ///
    /// Committing a date notifies the change callback, displays its month,
    /// updates the text input and finally closes the popover if configured
    /// to do so.
    pub fn activate(&mut self, date: CalendarDate) -> Activation {
        let disabled = self.options.bounds.is_disabled(date);

        if !disabled && !self.grid.contains(date) {
            #[cfg(feature = "log")]
            log::warn!("Ignored activation of {date}, which is not displayed");

            return Activation::Ignored;
        }

        let on_change = &mut self.on_change;
        let focus = &mut self.focus;
        let input_text = &mut self.input_text;
        let format = self.format.as_ref();

        let activation =
            self.interaction
                .activate(date, disabled, self.options.close_on_select, |date| {
                    if let Some(callback) = on_change {
                        callback(date);
                    }

                    focus.follow(date);
                    *input_text = display_text(format, Some(date));
                });

        self.sync_grid();
        activation
    }

    /// Close the popover. Return `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        self.interaction.close()
    }

    // --
    // -- Navigation
    // --

    pub fn next(&mut self) -> bool {
        let moved = self.focus.next();
        self.sync_grid();
        moved
    }

    pub fn prev(&mut self) -> bool {
        let moved = self.focus.prev();
        self.sync_grid();
        moved
    }

    /// Display a month, see [`FocusMonth::jump`].
    pub fn jump(&mut self, year: i32, month0: u8) -> Result<YearMonth> {
        let month = self.focus.jump(year, month0)?;
        self.sync_grid();
        Ok(month)
    }

    /// Let a navigation header move the displayed month.
    pub fn show_header(&mut self, header: &mut impl NavigationHeader) {
        header.show(&mut HeaderContext::new(&mut self.focus));
        self.sync_grid();
    }

    // --
    // -- Native input
    // --

    /// A string was submitted by the native date input.
    ///
    /// Invalid or disabled dates are reported as an error and never reach
    /// the change callback.
    pub fn native_input(&mut self, raw: &str) -> Result<CalendarDate> {
        if self.render_mode() != RenderMode::NativeFallback {
            return Err(Error::NotNativeInput);
        }

        let date = raw
            .parse::<CalendarDate>()
            .map_err(Error::from)
            .and_then(|date| self.options.bounds.check(date))
            .inspect_err(|_err| {
                #[cfg(feature = "log")]
                log::warn!(input = raw; "Rejected native input: {_err}");
            })?;

        if let Some(callback) = &mut self.on_change {
            callback(date);
        }

        self.focus.follow(date);
        self.sync_grid();
        Ok(date)
    }

    // --
    // -- Rendering
    // --

    /// Describe what should be displayed, the style of each cell being
    /// computed by given callback.
    pub fn render<S>(&self, style: impl FnMut(CellProps) -> S) -> PickerView<S> {
        let mode = self.render_mode();
        let id = self.options.id.clone();
        let placeholder = self.options.placeholder.clone();

        let input = match mode {
            RenderMode::Desktop => {
                InputView::Text { id, value: self.input_text.clone(), placeholder }
            }
            RenderMode::NativeFallback => {
                let (min, max) = self.options.bounds.native_attrs();

                InputView::Native {
                    id,
                    value: self.value.map(|date| date.to_string()).unwrap_or_default(),
                    min,
                    max,
                    placeholder,
                }
            }
        };

        let cells = CellContext {
            grid: &self.grid,
            bounds: &self.options.bounds,
            value: self.value,
            today: self.today,
            focused: self.interaction.focused(),
        };

        PickerView {
            mode,
            input,
            open: self.is_open(),
            calendar: cells.calendar(style),
        }
    }

    /// Only rebuild the grid when the displayed month or week start changed.
    fn sync_grid(&mut self) {
        let month = self.focus.current();
        let week_start = self.options.week_start();

        if self.grid.month() != month || self.grid.week_start() != week_start {
            self.grid = build_grid(month, week_start);
        }
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("options", &self.options)
            .field("value", &self.value)
            .field("today", &self.today)
            .field("focus", &self.focus)
            .field("interaction", &self.interaction)
            .field("input_text", &self.input_text)
            .finish_non_exhaustive()
    }
}

fn build_grid(month: YearMonth, week_start: WeekStart) -> MonthGrid {
    #[cfg(test)]
    crate::tests::stats::notify::generated_grid();

    MonthGrid::new(month, week_start)
}

/// Text displayed for a value: the custom format if there is one, something
/// like "5 Mar 24" otherwise.
fn display_text(format: Option<&Formatter>, value: Option<CalendarDate>) -> String {
    let Some(date) = value else {
        return String::new();
    };

    match format {
        Some(format) => format(date),
        None => NaiveDate::from(date).format("%-d %b %y").to_string(),
    }
}
