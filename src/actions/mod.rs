//! Actions: the scripted steps of a scene.
//!
//! Every action variant implements [`Action`] on top of an [`ActionBase`]. Variants are
//! serialized to [`ActionData`] maps tagged with their [`ActionKind`], which is what
//! [`action_from_data`] dispatches on to rebuild them.

use std::{any::Any, fmt, rc::Rc, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    config::DialogueDefaults,
    errors::ActionError,
    scene::{ObjectHandle, ObjectKind, ObjectRegistry},
    signal::{Notification, Signal},
};

pub mod base;
pub mod change_state;
pub mod data;
pub mod dialogue;

pub use base::ActionBase;
pub use change_state::ChangeState;
pub use data::ActionData;
pub use dialogue::Dialogue;

/// The tag identifying an action variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A [`Dialogue`] line.
    Dialogue,
    /// A [`ChangeState`] action.
    ChangeState,
}

impl ActionKind {
    /// Every variant, in menu order.
    pub const ALL: [ActionKind; 2] = [ActionKind::Dialogue, ActionKind::ChangeState];

    /// The tag written to the `type` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Dialogue => "Dialogue",
            ActionKind::ChangeState => "ChangeState",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ActionError::UnknownType(s.to_string()))
    }
}

/// What actions need from their surroundings: the registry names are resolved
/// through, and the defaults new actions start from.
///
/// The context is passed explicitly to every action when it is created. Without a
/// registry every lookup fails and actions keep names only.
#[derive(Clone, Default)]
pub struct ActionContext {
    /// The scene (or resource layer) to resolve names in.
    registry: Option<Rc<dyn ObjectRegistry>>,
    /// Initial values of new dialogue lines.
    dialogue_defaults: DialogueDefaults,
}

impl ActionContext {
    /// A context with no registry and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves names through `registry`.
    pub fn with_registry(mut self, registry: Rc<dyn ObjectRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Starts new dialogue lines from `defaults`.
    pub fn with_dialogue_defaults(mut self, defaults: DialogueDefaults) -> Self {
        self.dialogue_defaults = defaults;
        self
    }

    /// The registry, if any.
    pub fn registry(&self) -> Option<&Rc<dyn ObjectRegistry>> {
        self.registry.as_ref()
    }

    /// Initial values of new dialogue lines.
    pub fn dialogue_defaults(&self) -> DialogueDefaults {
        self.dialogue_defaults
    }

    /// Looks `name` up in the registry.
    pub fn find_object(&self, kind: Option<ObjectKind>, name: &str) -> Option<ObjectHandle> {
        self.registry.as_ref()?.find_object(kind, name)
    }

    /// Every registry object of `kind`, empty without a registry.
    pub fn objects(&self, kind: Option<ObjectKind>) -> Vec<ObjectHandle> {
        self.registry
            .as_ref()
            .map(|r| r.objects(kind))
            .unwrap_or_default()
    }
}

impl fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionContext")
            .field("registry", &self.registry.is_some())
            .field("dialogue_defaults", &self.dialogue_defaults)
            .finish()
    }
}

/// One scripted step of a scene.
///
/// Setters of every implementation raise exactly one [`Notification`] when they change
/// something and none when the value is unchanged.
pub trait Action: fmt::Debug {
    /// The shared state.
    fn base(&self) -> &ActionBase;

    /// The shared state, mutably.
    fn base_mut(&mut self) -> &mut ActionBase;

    /// Merges the recognized keys of `data` into the action. Missing keys, unknown keys
    /// and values of the wrong type leave the action untouched. `internal` data may carry
    /// editor-only fields that external data does not.
    fn load(&mut self, data: &ActionData, internal: bool);

    /// Serializes the action. Live objects are written by name.
    fn serialize(&self, internal: bool) -> ActionData;

    /// A short summary for list views.
    fn display_text(&self) -> String;

    /// Binds the action to its target in the edited scene and applies its effect.
    /// A missing target is not an error.
    fn bind_to_target(&mut self);

    /// Undoes everything [`Action::bind_to_target`] did to the target and unbinds.
    fn unbind_from_target(&mut self);

    /// The quick-edit text, for text-editable actions.
    fn edit_text(&self) -> Option<String> {
        None
    }

    /// Applies an edited quick-edit text. Ignored by actions that are not text-editable.
    fn set_edit_text(&mut self, _text: &str) {}

    /// Upcast for downcasting to the concrete variant.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for downcasting to the concrete variant.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The variant tag.
    fn kind(&self) -> ActionKind {
        self.base().kind()
    }

    /// Whether the action is bound to the edited scene.
    fn is_active(&self) -> bool {
        self.base().is_active()
    }

    /// Activates or deactivates the action.
    fn set_active(&mut self, active: bool) {
        if self.is_active() == active {
            return;
        }
        if active {
            self.bind_to_target();
        } else {
            self.unbind_from_target();
        }
        self.base().notify("active", active);
    }

    /// Targets `object`. An active action restores its old target first and applies
    /// itself to the new one.
    fn set_scene_object(&mut self, object: Option<ObjectHandle>) {
        if self.base().targets(object.as_ref()) {
            return;
        }
        let active = self.is_active();
        if active {
            self.unbind_from_target();
        }
        self.base_mut().set_scene_object(object);
        if active {
            self.bind_to_target();
        }
    }

    /// Targets the object called `name`, or just the name if the scene has no such object.
    fn set_scene_object_name(&mut self, name: &str) {
        let active = self.is_active();
        if active {
            self.unbind_from_target();
        }
        self.base_mut().set_scene_object_name(name);
        if active {
            self.bind_to_target();
        }
    }

    /// Loads the fields every action shares.
    fn load_base(&mut self, data: &ActionData, internal: bool) {
        if let Some(object) = data::string(data, "object") {
            self.set_scene_object_name(object);
        }
        self.base_mut().load(data, internal);
    }

    /// The channel the action reports its changes on.
    fn notifier(&self) -> &Signal<Notification> {
        self.base().notifier()
    }

    /// Builds an equivalent, inactive copy through a serialization round trip.
    fn duplicate(&self) -> Box<dyn Action> {
        let mut copy = create_action(self.kind(), self.base().context());
        copy.load(&self.serialize(true), true);
        copy
    }
}

impl dyn Action {
    /// Downcasts to a concrete variant.
    pub fn downcast_ref<T: Action + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Mutably downcasts to a concrete variant.
    pub fn downcast_mut<T: Action + 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut()
    }
}

/// Creates an empty action of the given kind.
pub fn create_action(kind: ActionKind, context: &ActionContext) -> Box<dyn Action> {
    match kind {
        ActionKind::Dialogue => Box::new(Dialogue::new(context.clone())),
        ActionKind::ChangeState => Box::new(ChangeState::new(context.clone())),
    }
}

/// Rebuilds an action from internal data, picking the variant from its `type` key.
///
/// ```
/// use serde_json::json;
/// use scene_actions::prelude::*;
///
/// let data = json!({ "type": "Dialogue", "character": "Bob", "text": "Hi" });
/// let action = action_from_data(data.as_object().unwrap(), &ActionContext::new()).unwrap();
/// assert_eq!(action.kind(), ActionKind::Dialogue);
/// assert_eq!(action.display_text(), "Bob: \"Hi\"");
/// ```
pub fn action_from_data(
    data: &ActionData,
    context: &ActionContext,
) -> Result<Box<dyn Action>, ActionError> {
    let tag = data::string(data, "type").ok_or(ActionError::MissingType)?;
    let kind: ActionKind = tag.parse()?;
    let mut action = create_action(kind, context);
    action.load(data, true);
    Ok(action)
}
