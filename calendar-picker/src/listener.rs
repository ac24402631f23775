//! Document-level pointer-down listeners used for outside dismissal.
//!
//! An open picker holds exactly one [`DismissListener`]. The registration is
//! removed from its [`ListenerRegistry`] when the guard is dropped, which
//! happens on every transition out of the open state and when the picker
//! itself is dropped.
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

/// Identifier of a listener registered on a document.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Somewhere pointer-down listeners can be attached to, such as the document
/// of a web page.
///
/// Registries are shared by all pickers of a page and are not thread-safe:
/// implementations are expected to rely on interior mutability.
pub trait ListenerRegistry {
    /// Attach a new pointer-down listener.
    fn install(&self) -> ListenerId;

    /// Detach a listener previously returned by [`ListenerRegistry::install`].
    fn remove(&self, id: ListenerId);
}

// DismissListener

/// A registered pointer-down listener, removed when dropped.
pub struct DismissListener {
    registry: Rc<dyn ListenerRegistry>,
    id: ListenerId,
}

impl DismissListener {
    pub(crate) fn acquire(registry: Rc<dyn ListenerRegistry>) -> Self {
        let id = registry.install();

        #[cfg(feature = "log")]
        log::trace!("Installed dismiss listener {id:?}");

        Self { registry, id }
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for DismissListener {
    fn drop(&mut self) {
        #[cfg(feature = "log")]
        log::trace!("Removing dismiss listener {:?}", self.id);

        self.registry.remove(self.id);
    }
}

impl fmt::Debug for DismissListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DismissListener").field(&self.id).finish()
    }
}

// ListenerSet

/// An in-memory registry keeping track of active listeners.
///
/// ```
/// use std::rc::Rc;
/// use calendar_picker::{ListenerRegistry, ListenerSet};
///
/// let listeners = Rc::new(ListenerSet::default());
/// let id = listeners.install();
/// assert_eq!(listeners.active_count(), 1);
///
/// listeners.remove(id);
/// assert_eq!(listeners.active_count(), 0);
/// ```
#[derive(Debug, Default)]
pub struct ListenerSet {
    next_id: Cell<u64>,
    active: RefCell<BTreeSet<ListenerId>>,
}

impl ListenerSet {
    /// Number of listeners currently installed.
    pub fn active_count(&self) -> usize {
        self.active.borrow().len()
    }

    pub fn is_active(&self, id: ListenerId) -> bool {
        self.active.borrow().contains(&id)
    }

    /// Total number of listeners ever installed.
    pub fn installed_count(&self) -> u64 {
        self.next_id.get()
    }
}

impl ListenerRegistry for ListenerSet {
    fn install(&self) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.active.borrow_mut().insert(id);
        id
    }

    fn remove(&self, id: ListenerId) {
        let removed = self.active.borrow_mut().remove(&id);
        debug_assert!(removed, "listener {id:?} was removed twice");
    }
}
