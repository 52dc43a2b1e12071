//! Non-owning references from actions to scene objects.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    scene::{LifecycleEvent, ObjectHandle, SceneObject},
    signal::Connection,
};

/// A reference to a scene object that the holder observes but does not own.
///
/// While bound, the reference follows the object's lifecycle: it reports the object's
/// current name and lets go of the object as soon as the object is destroyed. When no
/// live object is bound, a plain fallback name can stand in for it.
#[derive(Default)]
pub struct ObjectRef {
    /// The observed object. Shared with the lifecycle observer so destruction can clear it.
    slot: Rc<RefCell<Option<Weak<SceneObject>>>>,
    /// Subscription to the object's lifecycle, dropped on rebinding.
    connection: Option<Connection<LifecycleEvent>>,
    /// Name used while no live object is bound.
    fallback_name: String,
}

impl ObjectRef {
    /// Creates an empty reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live object, if one is bound and still alive.
    pub fn object(&self) -> Option<ObjectHandle> {
        self.slot
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .filter(|o| !o.is_destroyed())
    }

    /// Whether a live object is bound.
    pub fn is_bound(&self) -> bool {
        self.object().is_some()
    }

    /// Whether this reference points to exactly `object` (both being `None` counts).
    pub fn points_to(&self, object: Option<&ObjectHandle>) -> bool {
        match (self.object(), object) {
            (Some(bound), Some(other)) => Rc::ptr_eq(&bound, other),
            (None, None) => true,
            _ => false,
        }
    }

    /// The live object's current name, or the fallback name when nothing is bound.
    pub fn name(&self) -> String {
        match self.object() {
            Some(object) => object.name(),
            None => self.fallback_name.clone(),
        }
    }

    /// The stored fallback name. Meaningless while an object is bound.
    pub fn fallback_name(&self) -> &str {
        &self.fallback_name
    }

    /// Starts observing `object` (or nothing), after letting go of the previous object
    /// and clearing the fallback name. `on_rename` is called with the new name whenever
    /// the object is renamed.
    pub fn bind(&mut self, object: Option<ObjectHandle>, on_rename: impl Fn(&str) + 'static) {
        self.clear();
        let Some(object) = object else {
            return;
        };

        let slot = Rc::downgrade(&self.slot);
        self.connection = Some(object.observe(move |event| match event {
            LifecycleEvent::Destroyed => {
                if let Some(slot) = slot.upgrade() {
                    slot.borrow_mut().take();
                }
            }
            LifecycleEvent::Renamed(name) => on_rename(name),
        }));
        *self.slot.borrow_mut() = Some(Rc::downgrade(&object));
    }

    /// Lets go of any bound object and stores `name` as the fallback.
    pub fn set_fallback_name(&mut self, name: impl Into<String>) {
        self.release();
        self.fallback_name = name.into();
    }

    /// Lets go of any bound object, keeping the fallback name.
    pub fn release(&mut self) {
        // unsubscribe before forgetting the object
        self.connection = None;
        self.slot.borrow_mut().take();
    }

    /// Lets go of any bound object and clears the fallback name.
    pub fn clear(&mut self) {
        self.release();
        self.fallback_name.clear();
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("object", &self.object().map(|o| o.id()))
            .field("fallback_name", &self.fallback_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::scene::{Character, Scene};

    #[test]
    fn follows_renames() {
        let scene = Scene::new();
        let alice = scene.spawn("Alice", Character::default());
        let renames = Rc::new(Cell::new(0));
        let counter = renames.clone();

        let mut reference = ObjectRef::new();
        reference.bind(Some(alice.clone()), move |_| counter.set(counter.get() + 1));
        assert_eq!(reference.name(), "Alice");

        alice.set_name("Alicia");
        assert_eq!(reference.name(), "Alicia");
        assert_eq!(renames.get(), 1);
    }

    #[test]
    fn lets_go_when_destroyed() {
        let scene = Scene::new();
        let alice = scene.spawn("Alice", Character::default());
        let mut reference = ObjectRef::new();
        reference.bind(Some(alice.clone()), |_| {});

        scene.remove(&alice);
        assert!(!reference.is_bound());
        assert_eq!(reference.name(), "");
    }

    #[test]
    fn lets_go_when_freed_without_notice() {
        let alice = SceneObject::new("Alice", Character::default());
        let mut reference = ObjectRef::new();
        reference.bind(Some(alice.clone()), |_| {});

        drop(alice);
        assert!(reference.object().is_none());
    }

    #[test]
    fn rebinding_unsubscribes_from_previous_object() {
        let scene = Scene::new();
        let alice = scene.spawn("Alice", Character::default());
        let bob = scene.spawn("Bob", Character::default());
        let mut reference = ObjectRef::new();

        reference.bind(Some(alice.clone()), |_| {});
        assert_eq!(alice.observer_count(), 1);

        reference.bind(Some(bob.clone()), |_| {});
        assert_eq!(alice.observer_count(), 0);
        assert_eq!(bob.observer_count(), 1);
        assert!(reference.points_to(Some(&bob)));

        drop(reference);
        assert_eq!(bob.observer_count(), 0);
    }

    #[test]
    fn fallback_name_replaces_binding() {
        let scene = Scene::new();
        let alice = scene.spawn("Alice", Character::default());
        let mut reference = ObjectRef::new();
        reference.bind(Some(alice.clone()), |_| {});

        reference.set_fallback_name("Carol");
        assert!(reference.points_to(None));
        assert_eq!(alice.observer_count(), 0);
        assert_eq!(reference.name(), "Carol");
    }
}
