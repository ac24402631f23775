
mod fallback;

use std::cell::RefCell;
use std::rc::Rc;

use crate::{CalendarDate, ListenerSet, Picker, PickerOptions};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use $crate::CalendarDate;
        $date.parse::<CalendarDate>().expect("invalid date literal")
    }};
}

/// A picker with fixed current date, recording its changes and sharing its
/// listeners with the caller.
struct Harness {
    picker: Picker,
    listeners: Rc<ListenerSet>,
    changes: Rc<RefCell<Vec<CalendarDate>>>,
}

impl Harness {
    fn new(options: PickerOptions, today: CalendarDate) -> Self {
        let listeners = Rc::new(ListenerSet::default());
        let changes = Rc::new(RefCell::new(Vec::new()));

        let picker = Picker::new(options)
            .with_listeners(listeners.clone())
            .with_today(today)
            .with_focus_month(today.year_month())
            .on_change({
                let changes = changes.clone();
                move |date| changes.borrow_mut().push(date)
            });

        Self { picker, listeners, changes }
    }

    fn changes(&self) -> Vec<CalendarDate> {
        self.changes.borrow().clone()
    }
}
