//! Live scene objects and the registry actions resolve them through.
//!
//! Scene objects are owned by the scene (or the resource layer), never by actions.
//! Actions observe them through their [`LifecycleEvent`] signal.

use std::{
    cell::{Cell, Ref, RefCell, RefMut},
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::debug;

use crate::signal::{Connection, Signal};

pub mod objects;
pub mod registry;

pub use objects::*;
pub use registry::*;

/// A shared handle to a live scene object.
pub type ObjectHandle = Rc<SceneObject>;

/// Process-wide unique identifier of a scene object.
pub type ObjectId = u64;

/// Source of [`ObjectId`]s.
static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Lifecycle notifications of a scene object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The object got a new name.
    Renamed(String),
    /// The object was removed from its scene and must not be used anymore.
    Destroyed,
}

/// An object living in a scene: a character, a sound, a dialogue box...
pub struct SceneObject {
    /// Unique id, stable across renames.
    id: ObjectId,
    /// The display name, unique per kind within a scene by convention.
    name: RefCell<String>,
    /// Kind-specific data.
    data: RefCell<ObjectData>,
    /// Set once [`SceneObject::destroy`] ran.
    destroyed: Cell<bool>,
    /// Rename/destroy notifications.
    lifecycle: Signal<LifecycleEvent>,
}

impl SceneObject {
    /// Creates a new object. It is not part of any scene until added to one.
    pub fn new(name: impl Into<String>, data: impl Into<ObjectData>) -> ObjectHandle {
        Rc::new(Self {
            id: NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed),
            name: RefCell::new(name.into()),
            data: RefCell::new(data.into()),
            destroyed: Cell::new(false),
            lifecycle: Signal::new(),
        })
    }

    /// The object's id.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The object's current name.
    pub fn name(&self) -> String {
        self.name.borrow().clone()
    }

    /// Renames the object and notifies its observers. Renaming to the same name does nothing.
    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        if *self.name.borrow() == name {
            return;
        }
        debug!("renaming object {} to {name:?}", self.id);
        self.name.replace(name.clone());
        self.lifecycle.emit(&LifecycleEvent::Renamed(name));
    }

    /// The kind of the object.
    pub fn kind(&self) -> ObjectKind {
        self.data.borrow().kind()
    }

    /// Whether the object is of the given kind. `None` matches every kind.
    pub fn is(&self, kind: Option<ObjectKind>) -> bool {
        kind.map_or(true, |k| self.kind() == k)
    }

    /// Borrows the kind-specific data.
    pub fn data(&self) -> Ref<'_, ObjectData> {
        self.data.borrow()
    }

    /// Mutably borrows the kind-specific data.
    pub fn data_mut(&self) -> RefMut<'_, ObjectData> {
        self.data.borrow_mut()
    }

    /// Borrows the character data, if this is a character.
    pub fn as_character(&self) -> Option<Ref<'_, Character>> {
        Ref::filter_map(self.data.borrow(), |data| match data {
            ObjectData::Character(c) => Some(c),
            _ => None,
        })
        .ok()
    }

    /// Whether [`SceneObject::destroy`] ran on this object.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// Tells every observer the object is gone, then drops all of them.
    /// Calling it again does nothing.
    pub fn destroy(&self) {
        if self.destroyed.replace(true) {
            return;
        }
        debug!("destroying object {} ({:?})", self.id, self.name.borrow());
        self.lifecycle.emit(&LifecycleEvent::Destroyed);
        self.lifecycle.disconnect_all();
    }

    /// Observes renames and destruction of this object.
    pub fn observe(&self, observer: impl Fn(&LifecycleEvent) + 'static) -> Connection<LifecycleEvent> {
        self.lifecycle.connect(observer)
    }

    /// Number of connected lifecycle observers.
    pub fn observer_count(&self) -> usize {
        self.lifecycle.observer_count()
    }
}

impl fmt::Debug for SceneObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneObject")
            .field("id", &self.id)
            .field("name", &*self.name.borrow())
            .field("data", &*self.data.borrow())
            .field("destroyed", &self.destroyed.get())
            .finish()
    }
}
