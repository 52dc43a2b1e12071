//! Finding live objects by name.

use std::cell::RefCell;

use indexmap::IndexMap;
use tracing::debug;

use super::{ObjectData, ObjectHandle, ObjectId, ObjectKind, SceneObject};

/// The lookup contract actions use to turn names into live objects.
///
/// Implemented by [`Scene`]; editors embedding their own scene graph can implement it
/// on top of it.
pub trait ObjectRegistry {
    /// Returns the object called `name`, restricted to `kind` when given.
    fn find_object(&self, kind: Option<ObjectKind>, name: &str) -> Option<ObjectHandle>;

    /// Returns every object of `kind` (every object when `None`), in scene order.
    fn objects(&self, kind: Option<ObjectKind>) -> Vec<ObjectHandle>;
}

/// An authored scene: an ordered set of live objects.
///
/// The scene owns its objects. Removing an object destroys it, which tells every
/// action observing it to let go.
#[derive(Debug, Default)]
pub struct Scene {
    /// The objects, in insertion order.
    objects: RefCell<IndexMap<ObjectId, ObjectHandle>>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an existing object to the scene.
    pub fn add(&self, object: ObjectHandle) -> ObjectHandle {
        self.objects
            .borrow_mut()
            .insert(object.id(), ObjectHandle::clone(&object));
        object
    }

    /// Creates an object and adds it to the scene.
    ///
    /// ```
    /// use scene_actions::prelude::*;
    ///
    /// let scene = Scene::new();
    /// let alice = scene.spawn("Alice", Character::default());
    ///
    /// let found = scene.find_object(Some(ObjectKind::Character), "Alice");
    /// assert!(found.is_some_and(|c| c.id() == alice.id()));
    /// assert!(scene.find_object(Some(ObjectKind::Sound), "Alice").is_none());
    /// ```
    pub fn spawn(&self, name: impl Into<String>, data: impl Into<ObjectData>) -> ObjectHandle {
        self.add(SceneObject::new(name, data))
    }

    /// Removes an object from the scene and destroys it.
    /// Returns `false` if the object was not part of the scene.
    pub fn remove(&self, object: &ObjectHandle) -> bool {
        // release the borrow before destroy() calls into observers
        let removed = self.objects.borrow_mut().shift_remove(&object.id());
        match removed {
            Some(object) => {
                object.destroy();
                true
            }
            None => {
                debug!("object {} is not part of this scene", object.id());
                false
            }
        }
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    /// Whether the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }

    /// Removes and destroys every object.
    pub fn clear(&self) {
        let removed = std::mem::take(&mut *self.objects.borrow_mut());
        for object in removed.into_values() {
            object.destroy();
        }
    }
}

impl ObjectRegistry for Scene {
    fn find_object(&self, kind: Option<ObjectKind>, name: &str) -> Option<ObjectHandle> {
        if name.is_empty() {
            return None;
        }
        self.objects
            .borrow()
            .values()
            .find(|o| o.is(kind) && o.name() == name)
            .cloned()
    }

    fn objects(&self, kind: Option<ObjectKind>) -> Vec<ObjectHandle> {
        self.objects
            .borrow()
            .values()
            .filter(|o| o.is(kind))
            .cloned()
            .collect()
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.clear();
    }
}
