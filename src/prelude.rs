//! Prelude for the `scene_actions` crate.
pub use super::{
    actions::{
        action_from_data, create_action, Action, ActionBase, ActionContext, ActionData,
        ActionKind, ChangeState, Dialogue,
    },
    binding::ObjectRef,
    config::{DialogueDefaults, EditorConfig},
    edit_text::EditText,
    editor::{ActionId, ActionSequence, ClipboardPayload, QuickEdit, SequenceEvent},
    errors::*,
    scene::{
        Character, Color, DialogueBox, LifecycleEvent, ObjectData, ObjectHandle, ObjectId,
        ObjectKind, ObjectRegistry, Prop, Scene, SceneObject, Sound, TextBox,
    },
    signal::{Connection, Notification, Signal, WeakSignal},
};
