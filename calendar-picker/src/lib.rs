#![doc = include_str!("../../README.md")]
// Enable doc_auto_cfg feature when building docs on the nightly channel
// (which will be the case for docs.rs).
#![allow(unexpected_cfgs)]
#![cfg_attr(all(doc, CHANNEL_NIGHTLY), feature(doc_auto_cfg))]

pub mod error;
pub mod focus;
pub mod header;
pub mod interaction;
pub mod listener;
pub mod picker;
pub mod policy;
pub mod view;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{Error, Result};
pub use crate::focus::FocusMonth;
pub use crate::header::{DefaultHeader, HeaderContext, NavigationHeader};
pub use crate::interaction::{Activation, Focused, HitRegion, Interaction, Status};
pub use crate::listener::{DismissListener, ListenerId, ListenerRegistry, ListenerSet};
pub use crate::picker::{Picker, PickerOptions};
pub use crate::policy::{is_disabled, Bounds};
pub use crate::view::{CalendarView, Cell, CellProps, InputView, PickerView, RenderMode};

pub use month_grid::{
    canonical_key, month_grid, weekday_labels, CalendarDate, MonthGrid, WeekStart, Weekday,
    YearMonth, MONTH_NAMES,
};
