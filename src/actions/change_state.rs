//! Switching a scene object to another state.

use std::{
    any::Any,
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::scene::{ObjectHandle, SceneObject};

use super::{
    data::{self, ActionData},
    Action, ActionBase, ActionContext, ActionKind,
};

/// Puts the target object (a character or a prop) into a named state.
///
/// While active the state is applied to the live target, and the state the target was
/// in before is put back on deactivation.
#[derive(Debug)]
pub struct ChangeState {
    /// Shared action state.
    base: ActionBase,
    /// The state to switch to.
    state: String,
    /// The state the target was in when the action was first applied, with the target
    /// it belongs to.
    previous: Option<(Weak<SceneObject>, String)>,
}

impl ChangeState {
    /// Creates an action with no state.
    pub fn new(context: ActionContext) -> Self {
        Self {
            base: ActionBase::new(ActionKind::ChangeState, context),
            state: String::new(),
            previous: None,
        }
    }

    /// Creates an action from internal data.
    pub fn from_data(data: &ActionData, context: ActionContext) -> Self {
        let mut change = Self::new(context);
        change.load(data, true);
        change
    }

    /// The state to switch to.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Sets the state to switch to, applying it right away while active.
    pub fn set_state(&mut self, state: &str) {
        if self.state == state {
            return;
        }
        self.state = state.to_string();
        self.apply_state();
        self.base.notify("state", state);
    }

    /// Switches the live target to the state, remembering the state it had before.
    fn apply_state(&mut self) {
        let Some(target) = self.base.scene_object() else {
            return;
        };
        if self.state.is_empty() {
            return;
        }

        let previous = target.data_mut().set_current_state(&self.state);
        match previous {
            Some(previous) if self.previous.is_none() => {
                self.previous = Some((Rc::downgrade(&target), previous));
            }
            Some(_) => {}
            None => debug!("{:?} has no states", target.name()),
        }
    }

    /// The scene objects that have states, i.e. the candidate targets.
    pub fn available_objects(&self) -> Vec<ObjectHandle> {
        self.base
            .context()
            .objects(None)
            .into_iter()
            .filter(|object| object.data().states().is_some())
            .collect()
    }
}

impl Action for ChangeState {
    fn base(&self) -> &ActionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ActionBase {
        &mut self.base
    }

    fn load(&mut self, data: &ActionData, internal: bool) {
        self.load_base(data, internal);
        if let Some(state) = data::string(data, "state") {
            self.set_state(state);
        }
    }

    fn serialize(&self, internal: bool) -> ActionData {
        let mut data = self.base.serialize(internal);
        data.insert("state".into(), self.state.clone().into());
        data
    }

    fn display_text(&self) -> String {
        let object = self.base.target_name();
        if object.is_empty() {
            format!("Change state to \"{}\"", self.state)
        } else {
            format!("Change state of \"{object}\" to \"{}\"", self.state)
        }
    }

    fn bind_to_target(&mut self) {
        self.base.activate();
        self.apply_state();
    }

    fn unbind_from_target(&mut self) {
        if let Some((target, previous)) = self.previous.take() {
            match target.upgrade().filter(|t| !t.is_destroyed()) {
                Some(target) => {
                    target.data_mut().set_current_state(&previous);
                }
                None => debug!("state target is gone, nothing to restore"),
            }
        }
        self.base.deactivate();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
