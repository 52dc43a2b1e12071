//! State and behavior shared by every action variant.

use serde_json::Value;
use tracing::debug;

use crate::{
    binding::ObjectRef,
    scene::ObjectHandle,
    signal::{Notification, Signal},
};

use super::{
    data::{self, ActionData},
    ActionContext, ActionKind,
};

/// The part of an action every variant has: its kind, label, activation state, the
/// scene object it renders into or acts on, and its notification channel.
#[derive(Debug)]
pub struct ActionBase {
    /// The variant tag, fixed at construction.
    kind: ActionKind,
    /// Editor-only label.
    name: String,
    /// Whether the action is the current one in the edited scene.
    active: bool,
    /// The object the action renders into or acts on.
    target: ObjectRef,
    /// Whether playback waits for a click once the action finished.
    mouse_click_on_finish: bool,
    /// Whether the action can be edited through its quick-edit text.
    text_editable: bool,
    /// Registry and defaults the action resolves names with.
    context: ActionContext,
    /// Change notifications.
    notifier: Signal<Notification>,
}

impl ActionBase {
    /// Creates the shared state of an action of the given kind.
    pub fn new(kind: ActionKind, context: ActionContext) -> Self {
        Self {
            kind,
            name: String::new(),
            active: false,
            target: ObjectRef::new(),
            mouse_click_on_finish: false,
            text_editable: false,
            context,
            notifier: Signal::new(),
        }
    }

    /// Sets the capability flags of the variant.
    pub(crate) fn with_capabilities(mut self, mouse_click_on_finish: bool, text_editable: bool) -> Self {
        self.mouse_click_on_finish = mouse_click_on_finish;
        self.text_editable = text_editable;
        self
    }

    /// The variant tag.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// The editor label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the editor label.
    pub fn set_name(&mut self, name: &str) {
        if self.name == name {
            return;
        }
        self.name = name.to_string();
        self.notify("name", name);
    }

    /// Whether the action is bound to the edited scene.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether playback waits for a click once the action finished.
    pub fn mouse_click_on_finish(&self) -> bool {
        self.mouse_click_on_finish
    }

    /// Whether the action supports quick-edit text.
    pub fn text_editable(&self) -> bool {
        self.text_editable
    }

    /// The live target object. Always `None` while the action is inactive.
    pub fn scene_object(&self) -> Option<ObjectHandle> {
        if !self.active {
            return None;
        }
        self.target.object()
    }

    /// The name of the target: the live object's current name, or the stored name.
    pub fn target_name(&self) -> String {
        self.target.name()
    }

    /// Whether the target reference points to exactly `object`.
    pub fn targets(&self, object: Option<&ObjectHandle>) -> bool {
        self.target.points_to(object)
    }

    /// Replaces the target reference. Callers handle deactivation around it.
    pub(crate) fn set_scene_object(&mut self, object: Option<ObjectHandle>) {
        if self.target.points_to(object.as_ref()) {
            return;
        }
        let on_rename = self.rename_observer();
        self.target.bind(object, on_rename);
        self.notify("object", self.target.name());
    }

    /// Resolves `name` through the registry and targets the result, keeping just the name
    /// when nothing matches.
    pub(crate) fn set_scene_object_name(&mut self, name: &str) {
        if let Some(object) = self.context.find_object(None, name) {
            self.set_scene_object(Some(object));
            return;
        }
        if !self.target.is_bound() && self.target.fallback_name() == name {
            return;
        }
        debug!("no object named {name:?} in the scene, keeping the name only");
        self.target.set_fallback_name(name);
        self.notify("object", name);
    }

    /// Marks the action active, resolving a name-only target if the scene now has it.
    pub(crate) fn activate(&mut self) {
        self.active = true;
        if self.target.is_bound() {
            return;
        }
        let name = self.target.fallback_name().to_string();
        match self.context.find_object(None, &name) {
            Some(object) => {
                let on_rename = self.rename_observer();
                self.target.bind(Some(object), on_rename);
            }
            None if !name.is_empty() => debug!("target {name:?} is not in the scene"),
            None => {}
        }
    }

    /// Marks the action inactive.
    pub(crate) fn deactivate(&mut self) {
        self.active = false;
    }

    /// The registry and defaults the action was created with.
    pub fn context(&self) -> &ActionContext {
        &self.context
    }

    /// The channel the action reports its changes on.
    pub fn notifier(&self) -> &Signal<Notification> {
        &self.notifier
    }

    /// Reports that `field` changed to `value`.
    pub fn notify(&self, field: &'static str, value: impl Into<Value>) {
        self.notifier.emit(&Notification::Changed {
            field,
            value: value.into(),
        });
    }

    /// Reports that something the action displays changed outside of it.
    pub fn data_changed(&self) {
        self.notifier.emit(&Notification::DataChanged);
    }

    /// An observer for referenced objects that turns renames into [`Notification::DataChanged`].
    pub(crate) fn rename_observer(&self) -> impl Fn(&str) + 'static {
        let notifier = self.notifier.downgrade();
        move |_| notifier.emit(&Notification::DataChanged)
    }

    /// Loads the editor label. Only internal data carries it.
    pub(crate) fn load(&mut self, data: &ActionData, internal: bool) {
        if !internal {
            return;
        }
        if let Some(name) = data::string(data, "name") {
            self.set_name(name);
        }
    }

    /// Serializes the shared fields.
    pub(crate) fn serialize(&self, internal: bool) -> ActionData {
        let mut data = ActionData::new();
        data.insert("type".into(), self.kind.as_str().into());

        let target = self.target.name();
        if !target.is_empty() {
            data.insert("object".into(), target.into());
        }
        if internal && !self.name.is_empty() {
            data.insert("name".into(), self.name.clone().into());
        }
        data
    }
}
