use std::fmt;
use std::rc::Rc;

use month_grid::CalendarDate;

use crate::listener::{DismissListener, ListenerId, ListenerRegistry};

/// Whether the popover is displayed.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Status {
    Closed,
    Open,
}

/// Where a pointer-down event originated.
///
/// This is the single test deciding if a gesture dismisses the picker: the
/// trigger input is considered part of the picker, so that the gesture
/// opening the popover can never be mistaken for an outside click.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
pub enum HitRegion {
    /// The text input opening the picker.
    Trigger,
    /// Anywhere in the popover subtree, including grid cells and the header.
    Popover,
    /// Anywhere else in the document.
    Outside,
}

impl HitRegion {
    /// Classify an event from containment tests performed by the host.
    pub fn classify(in_trigger: bool, in_popover: bool) -> Self {
        if in_popover {
            Self::Popover
        } else if in_trigger {
            Self::Trigger
        } else {
            Self::Outside
        }
    }

    pub fn is_inside(self) -> bool {
        self != Self::Outside
    }
}

/// Element of the picker holding keyboard focus.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Focused {
    /// The text input.
    Input,
    /// The grid cell of a date.
    Cell(CalendarDate),
}

/// Result of activating a grid cell.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Activation {
    /// The cell is disabled and nothing happened.
    Inert,
    /// The cell can't be activated in current state.
    Ignored,
    /// The date was committed, and the popover possibly closed.
    Committed { closed: bool },
}

enum Visibility {
    Closed,
    Open { dismiss: DismissListener },
}

// Interaction

/// Open/closed state of a picker, with the resources tied to it.
///
/// While open, a dismiss listener is held from the registry. It is released
/// by any transition to the closed state and when this value is dropped.
pub struct Interaction {
    visibility: Visibility,
    focused: Option<Focused>,
    listeners: Rc<dyn ListenerRegistry>,
}

impl Interaction {
    pub fn new(listeners: Rc<dyn ListenerRegistry>) -> Self {
        Self { visibility: Visibility::Closed, focused: None, listeners }
    }

    pub fn status(&self) -> Status {
        match self.visibility {
            Visibility::Closed => Status::Closed,
            Visibility::Open { .. } => Status::Open,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status() == Status::Open
    }

    /// Element currently holding focus, if it belongs to the picker.
    pub fn focused(&self) -> Option<Focused> {
        self.focused
    }

    /// Listener currently held for outside dismissal.
    pub fn dismiss_listener(&self) -> Option<ListenerId> {
        match &self.visibility {
            Visibility::Closed => None,
            Visibility::Open { dismiss } => Some(dismiss.id()),
        }
    }

    /// The text input gained focus: open the popover and hand focus over to
    /// the cell of today's date if it is displayed.
    ///
    /// Exactly one element holds focus after this call: today's cell if
    /// there is one, the text input otherwise.
    pub fn focus_input(&mut self, today_cell: Option<CalendarDate>) -> Focused {
        if let Visibility::Closed = self.visibility {
            let dismiss = DismissListener::acquire(self.listeners.clone());
            self.visibility = Visibility::Open { dismiss };
        }

        let focused = today_cell.map_or(Focused::Input, Focused::Cell);
        self.focused = Some(focused);
        focused
    }

    /// A pointer-down event was caught by the document. Return the status
    /// after handling it.
    pub fn pointer_down(&mut self, region: HitRegion) -> Status {
        if self.is_open() && !region.is_inside() {
            #[cfg(feature = "log")]
            log::debug!("Pointer down outside of the picker, closing");

            self.close();
        }

        self.status()
    }

    /// Activate the cell of a date, calling `commit` if the activation is
    /// accepted.
    ///
    /// Disabled cells are always inert, and cells can only be activated
    /// while the popover is open.
    pub fn activate(
        &mut self,
        date: CalendarDate,
        disabled: bool,
        close_on_select: bool,
        commit: impl FnOnce(CalendarDate),
    ) -> Activation {
        if disabled {
            return Activation::Inert;
        }

        if !self.is_open() {
            #[cfg(feature = "log")]
            log::debug!("Ignored activation of {date} while closed");

            return Activation::Ignored;
        }

        commit(date);
        self.focused = Some(Focused::Cell(date));

        if close_on_select {
            self.close();
        }

        Activation::Committed { closed: close_on_select }
    }

    /// Close the popover, releasing the dismiss listener. Return `false` if
    /// it was already closed.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.visibility = Visibility::Closed;
        self.focused = None;
        was_open
    }
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("status", &self.status())
            .field("dismiss_listener", &self.dismiss_listener())
            .field("focused", &self.focused)
            .finish()
    }
}
