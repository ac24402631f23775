//! Development module that shares the fuzzing logic between unit tests and
//! the actual fuzzing.

use std::cell::RefCell;
use std::rc::Rc;

use arbitrary::Arbitrary;

use calendar_picker::{
    Activation, Bounds, CalendarDate, HitRegion, ListenerSet, Picker, PickerOptions, RenderMode,
    Status,
};

/// Sequences longer than this don't find anything new.
const MAX_EVENTS: usize = 256;

/// A fuzzing example
#[derive(Arbitrary, Clone, Debug)]
pub struct Data {
    /// Offset of current date from year 2000, in days.
    pub today: i16,
    pub min: Option<i16>,
    pub max: Option<i16>,
    pub close_on_select: bool,
    pub monday_start: bool,
    pub native: bool,
    pub events: Vec<Event>,
}

/// Something the user or the host does to a picker
#[derive(Arbitrary, Clone, Debug)]
pub enum Event {
    FocusInput,
    PointerDown(HitRegion),
    /// Activate a cell of the grid, picked by index.
    Activate(u8),
    Next,
    Prev,
    Jump { year: i16, month0: u8 },
    NativeInput(String),
    SetValue(Option<i16>),
    SetMondayStart(bool),
    Close,
}

/// Fuzzed dates are picked around year 2000.
fn offset(days: i16) -> CalendarDate {
    CalendarDate::from_ymd0(2000, 0, 1)
        .expect("invalid origin")
        .add_days(days.into())
}

/// A committed date must be displayed, or the closest month of the year
/// range if it is out of it.
fn assert_displays(picker: &Picker, date: CalendarDate) {
    let years = &picker.options().year_range;
    let month = picker.focus_month();

    if years.contains(&date.year()) {
        assert!(month.contains(date), "{date} committed while {month} is displayed");
    } else if date.year() < *years.start() {
        assert_eq!((month.year(), month.month0()), (*years.start(), 0));
    } else {
        assert_eq!((month.year(), month.month0()), (*years.end(), 11));
    }
}

/// Run a fuzzing test and return `true` if the example should be kept in
/// corpus.
pub fn run_fuzz_picker(data: Data) -> bool {
    if data.events.is_empty() || data.events.len() > MAX_EVENTS {
        return false;
    }

    let bounds = Bounds::new(data.min.map(offset), data.max.map(offset));
    let listeners = Rc::new(ListenerSet::default());
    let changes = Rc::new(RefCell::new(Vec::new()));

    let options = PickerOptions::default()
        .with_bounds(bounds)
        .with_close_on_select(data.close_on_select)
        .with_monday_start(data.monday_start)
        .with_testing(data.native);

    let today = offset(data.today);

    let mut picker = Picker::new(options)
        .with_listeners(listeners.clone())
        .with_today(today)
        .with_focus_month(today.year_month())
        .on_change({
            let changes = changes.clone();
            move |date| changes.borrow_mut().push(date)
        });

    let mut expected_changes = 0;

    for event in data.events {
        match event {
            Event::FocusInput => {
                picker.focus_input();
            }
            Event::PointerDown(region) => {
                let was_open = picker.is_open();
                let status = picker.pointer_down(region);
                assert_eq!(status == Status::Open, was_open && region.is_inside());
            }
            Event::Activate(index) => {
                let cells: Vec<_> = picker.grid().iter().collect();
                let date = cells[usize::from(index) % cells.len()];
                let was_open = picker.is_open();

                match picker.activate(date) {
                    Activation::Inert => assert!(bounds.is_disabled(date)),
                    Activation::Ignored => assert!(!was_open),
                    Activation::Committed { closed } => {
                        expected_changes += 1;
                        assert_eq!(closed, data.close_on_select);
                        assert!(picker.grid().contains(date));
                        assert_displays(&picker, date);
                    }
                }
            }
            Event::Next => {
                picker.next();
            }
            Event::Prev => {
                picker.prev();
            }
            Event::Jump { year, month0 } => {
                let result = picker.jump(year.into(), month0);
                assert_eq!(result.is_ok(), month0 < 12);
            }
            Event::NativeInput(raw) => {
                if let Ok(date) = picker.native_input(&raw) {
                    expected_changes += 1;
                    assert_displays(&picker, date);
                }
            }
            Event::SetValue(value) => picker.set_value(value.map(offset)),
            Event::SetMondayStart(monday_start) => picker.set_monday_start(monday_start),
            Event::Close => {
                picker.close();
            }
        }

        // A listener is held exactly while the popover is open.
        assert_eq!(listeners.active_count(), usize::from(picker.is_open()));
        assert_eq!(picker.dismiss_listener().is_some(), picker.is_open());
        assert_eq!(picker.focused().is_some(), picker.is_open());

        // The native input never opens a popover.
        if picker.render_mode() == RenderMode::NativeFallback {
            assert!(!picker.is_open());
        }

        // Displayed grid matches displayed month.
        assert_eq!(picker.grid().month(), picker.focus_month());
        assert!(picker.options().year_range.contains(&picker.focus_month().year()));

        // Only enabled dates are committed.
        let committed = changes.borrow();
        assert_eq!(committed.len(), expected_changes);
        assert!(committed.iter().all(|date| !bounds.is_disabled(*date)));
    }

    drop(picker);
    assert_eq!(listeners.active_count(), 0);
    true
}
