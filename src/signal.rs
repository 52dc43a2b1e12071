//! Synchronous observer lists.
//!
//! A [`Signal`] is the notification channel shared by actions, scene objects and the
//! sequence editor. Observers are plain closures, called in connection order on the
//! emitting thread before `emit` returns.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use serde_json::Value;

/// Identifier of a connected observer, unique within one [`Signal`].
type SlotId = u64;

/// A connected observer.
type Slot<T> = Rc<dyn Fn(&T)>;

/// The observer list behind a [`Signal`].
struct Slots<T> {
    /// Id handed to the next connection.
    next_id: SlotId,
    /// Connected observers, in connection order.
    slots: Vec<(SlotId, Slot<T>)>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            slots: Vec::new(),
        }
    }
}

/// A list of observers that get called with every emitted value.
///
/// Cloning a `Signal` yields another handle to the same observer list.
pub struct Signal<T> {
    /// The shared observer list.
    inner: Rc<RefCell<Slots<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Slots::default())),
        }
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl<T: 'static> Signal<T> {
    /// Creates a signal with no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects an observer. It stays connected for as long as the returned
    /// [`Connection`] is alive.
    ///
    /// ```
    /// use std::{cell::Cell, rc::Rc};
    /// use scene_actions::prelude::Signal;
    ///
    /// let signal = Signal::<u32>::new();
    /// let seen = Rc::new(Cell::new(0));
    /// let sink = seen.clone();
    /// let connection = signal.connect(move |v| sink.set(*v));
    ///
    /// signal.emit(&7);
    /// assert_eq!(seen.get(), 7);
    ///
    /// drop(connection);
    /// signal.emit(&9);
    /// assert_eq!(seen.get(), 7);
    /// ```
    pub fn connect(&self, observer: impl Fn(&T) + 'static) -> Connection<T> {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.slots.push((id, Rc::new(observer)));
        Connection {
            slots: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Calls every connected observer with `value`.
    ///
    /// The observer list is snapshotted first, so observers may connect or
    /// disconnect while being notified.
    pub fn emit(&self, value: &T) {
        let observers: Vec<Slot<T>> = self
            .inner
            .borrow()
            .slots
            .iter()
            .map(|(_, slot)| Rc::clone(slot))
            .collect();
        for observer in observers {
            observer(value);
        }
    }

    /// Disconnects every observer. Outstanding [`Connection`]s become inert.
    pub fn disconnect_all(&self) {
        // observers are dropped outside of the borrow, they may own connections themselves
        let removed = std::mem::take(&mut self.inner.borrow_mut().slots);
        drop(removed);
    }

    /// Returns a handle that does not keep the observer list alive.
    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl<T> Signal<T> {
    /// Number of connected observers.
    pub fn observer_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }
}

/// A non-owning handle to a [`Signal`].
pub struct WeakSignal<T> {
    /// The observer list, if still alive.
    inner: Weak<RefCell<Slots<T>>>,
}

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T: 'static> WeakSignal<T> {
    /// Emits on the signal if it still exists.
    pub fn emit(&self, value: &T) {
        if let Some(inner) = self.inner.upgrade() {
            Signal { inner }.emit(value);
        }
    }
}

/// Keeps an observer connected to a [`Signal`]. Dropping it disconnects the observer.
#[must_use = "the observer is disconnected when the connection is dropped"]
pub struct Connection<T> {
    /// The observer list the observer lives in.
    slots: Weak<RefCell<Slots<T>>>,
    /// The observer's id in that list.
    id: SlotId,
}

impl<T> Connection<T> {
    /// Whether the observer is still connected.
    pub fn is_connected(&self) -> bool {
        self.slots
            .upgrade()
            .is_some_and(|slots| slots.borrow().slots.iter().any(|(id, _)| *id == self.id))
    }
}

impl<T> Drop for Connection<T> {
    fn drop(&mut self) {
        let Some(slots) = self.slots.upgrade() else {
            return;
        };
        let removed = {
            let mut slots = slots.borrow_mut();
            slots
                .slots
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| slots.slots.remove(index))
        };
        drop(removed);
    }
}

impl<T> fmt::Debug for Connection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection").field("id", &self.id).finish()
    }
}

/// What an action reports to its observers.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// A field was set to a new value.
    Changed {
        /// The wire name of the field, e.g. `"text"`.
        field: &'static str,
        /// The new value.
        value: Value,
    },
    /// Something the action depends on changed outside of it (e.g. its speaker was
    /// renamed). Views should re-read whatever they display.
    DataChanged,
}

impl Notification {
    /// The changed field, if this is a [`Notification::Changed`].
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Notification::Changed { field, .. } => Some(*field),
            Notification::DataChanged => None,
        }
    }
}
