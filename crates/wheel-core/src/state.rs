//! Process-wide wheel state: the rotation index and the open flag.
//!
//! The index is never clamped or wrapped here; all wraparound lives in
//! [`crate::layout`]. Every mutation notifies subscribers synchronously with a
//! [`WheelSnapshot`], in subscription order.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle passed to the gesture mapper, animator and frame loop.
pub type SharedWheel = Rc<RefCell<WheelState>>;

/// Copy of the state handed to listeners, so they never need to borrow the
/// wheel while it is being mutated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelSnapshot {
    pub index: i64,
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(WheelSnapshot)>;

#[derive(Default)]
pub struct WheelState {
    index: i64,
    open: bool,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl WheelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a restored index (e.g. a shared link) instead of 0.
    pub fn with_index(index: i64) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn shared(self) -> SharedWheel {
        Rc::new(RefCell::new(self))
    }

    pub fn index(&self) -> i64 {
        self.index
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn snapshot(&self) -> WheelSnapshot {
        WheelSnapshot {
            index: self.index,
            open: self.open,
        }
    }

    pub fn increment(&mut self) {
        self.index = self.index.wrapping_add(1);
        log::debug!("[wheel] increment -> {}", self.index);
        self.notify();
    }

    pub fn decrement(&mut self) {
        self.index = self.index.wrapping_sub(1);
        log::debug!("[wheel] decrement -> {}", self.index);
        self.notify();
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        log::debug!("[wheel] open={}", open);
        self.notify();
    }

    pub fn toggle_open(&mut self) {
        self.set_open(!self.open);
    }

    /// Register a change listener. It is not called for the current state.
    pub fn subscribe(&mut self, listener: impl FnMut(WheelSnapshot) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let snap = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(snap);
        }
    }
}

impl std::fmt::Debug for WheelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelState")
            .field("index", &self.index)
            .field("open", &self.open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
