//! The action list of a scene as the editor manipulates it.
//!
//! An [`ActionSequence`] owns the actions and addresses them by [`ActionId`]s that stay
//! valid across reordering. It keeps the selection and the current action, which is
//! the only active one, and reports what happens through [`SequenceEvent`]s.

use std::fmt;

use indexmap::IndexSet;
use tracing::debug;

use crate::{
    actions::{action_from_data, Action, ActionContext, ActionData},
    config::EditorConfig,
    errors::ActionError,
    signal::Signal,
};

use quick_edit::CursorMemory;

pub mod clipboard;
pub mod events;
pub mod quick_edit;

pub use clipboard::ClipboardPayload;
pub use events::SequenceEvent;
pub use quick_edit::QuickEdit;

/// Identifies an action within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionId(u64);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An action and its id.
#[derive(Debug)]
struct Entry {
    /// The id.
    id: ActionId,
    /// The action.
    action: Box<dyn Action>,
}

/// An ordered, editable list of actions.
///
/// ```
/// use scene_actions::prelude::*;
///
/// let mut sequence = ActionSequence::new(ActionContext::new());
/// let first = sequence.append(create_action(ActionKind::Dialogue, sequence.context()));
/// let second = sequence.append(create_action(ActionKind::ChangeState, sequence.context()));
///
/// sequence.move_actions(&[second], 0);
/// assert_eq!(sequence.ids(), [second, first]);
///
/// sequence.set_current(Some(first));
/// assert!(sequence.get(first).unwrap().is_active());
/// ```
#[derive(Debug)]
pub struct ActionSequence {
    /// Context new and pasted actions are created with.
    context: ActionContext,
    /// Whether pasted actions replace the selection.
    select_pasted: bool,
    /// The actions, in order.
    entries: Vec<Entry>,
    /// The id the next action gets.
    next_id: u64,
    /// Selected actions.
    selection: IndexSet<ActionId>,
    /// Where range selections start.
    anchor: Option<ActionId>,
    /// The active action.
    current: Option<ActionId>,
    /// What cut and copy produced last.
    clipboard: Option<ClipboardPayload>,
    /// The open quick-edit session.
    quick_edit: Option<QuickEdit>,
    /// Where the last quick-edit session left the cursor.
    cursor_memory: CursorMemory,
    /// Where events are sent.
    events: Signal<SequenceEvent>,
}

impl ActionSequence {
    /// Creates an empty sequence whose actions resolve names through `context`.
    pub fn new(context: ActionContext) -> Self {
        let defaults = EditorConfig::default();
        Self {
            context,
            select_pasted: defaults.select_pasted,
            entries: Vec::new(),
            next_id: 0,
            selection: IndexSet::new(),
            anchor: None,
            current: None,
            clipboard: None,
            quick_edit: None,
            cursor_memory: CursorMemory::default(),
            events: Signal::new(),
        }
    }

    /// Applies the editor configuration.
    pub fn with_config(mut self, config: &EditorConfig) -> Self {
        self.context = self.context.clone().with_dialogue_defaults(config.dialogue);
        self.select_pasted = config.select_pasted;
        self
    }

    /// The context actions of this sequence are created with.
    pub fn context(&self) -> &ActionContext {
        &self.context
    }

    /// The channel sequence events are sent on.
    pub fn events(&self) -> &Signal<SequenceEvent> {
        &self.events
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence has no actions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ids of all actions, in order.
    pub fn ids(&self) -> Vec<ActionId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// The position of `id`.
    pub fn index_of(&self, id: ActionId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// The id at `index`.
    pub fn id_at(&self, index: usize) -> Option<ActionId> {
        self.entries.get(index).map(|entry| entry.id)
    }

    /// The action `id`.
    pub fn get(&self, id: ActionId) -> Option<&(dyn Action + 'static)> {
        let index = self.index_of(id)?;
        Some(self.entries[index].action.as_ref())
    }

    /// The action `id`, mutably.
    pub fn get_mut(&mut self, id: ActionId) -> Option<&mut (dyn Action + 'static)> {
        let index = self.index_of(id)?;
        Some(self.entries[index].action.as_mut())
    }

    /// The actions with their ids, in order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &(dyn Action + 'static))> {
        self.entries
            .iter()
            .map(|entry| (entry.id, entry.action.as_ref()))
    }

    /// Adds `action` at the end.
    pub fn append(&mut self, action: Box<dyn Action>) -> ActionId {
        self.insert(self.len(), action)
    }

    /// Inserts `action` at `index`, or at the end if `index` is past it.
    pub fn insert(&mut self, index: usize, action: Box<dyn Action>) -> ActionId {
        let id = ActionId(self.next_id);
        self.next_id += 1;
        let index = index.min(self.len());
        self.entries.insert(index, Entry { id, action });
        id
    }

    /// Rebuilds actions from their data and appends them. Nothing is appended if any
    /// entry is not an action.
    pub fn load(&mut self, data: &[ActionData]) -> Result<Vec<ActionId>, ActionError> {
        let actions = data
            .iter()
            .map(|entry| action_from_data(entry, &self.context))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(actions
            .into_iter()
            .map(|action| self.append(action))
            .collect())
    }

    /// Serializes all actions, in order.
    pub fn serialize(&self, internal: bool) -> Vec<ActionData> {
        self.entries
            .iter()
            .map(|entry| entry.action.serialize(internal))
            .collect()
    }

    /// Removes the action `id`, deactivating it first if it is the current one.
    pub fn remove(&mut self, id: ActionId) -> Option<Box<dyn Action>> {
        let index = self.index_of(id)?;
        let was_current = self.current == Some(id);
        if was_current {
            self.entries[index].action.set_active(false);
            self.current = None;
        }
        if self.quick_edit.as_ref().is_some_and(|session| session.action() == id) {
            debug!("closing the quick-edit session of removed action {id}");
            self.quick_edit = None;
        }
        self.selection.shift_remove(&id);
        if self.anchor == Some(id) {
            self.anchor = None;
        }

        let entry = self.entries.remove(index);
        if was_current {
            self.events.emit(&SequenceEvent::CurrentChanged(None));
        }
        Some(entry.action)
    }

    /// Removes the selected actions and returns them, in list order.
    pub fn remove_selected(&mut self) -> Vec<Box<dyn Action>> {
        self.selected_ids()
            .into_iter()
            .filter_map(|id| self.remove(id))
            .collect()
    }

    /// Moves `ids` to `drop_index`, an index into the list before the move. The moved
    /// actions keep their relative order. Returns whether anything moved.
    pub fn move_actions(&mut self, ids: &[ActionId], drop_index: usize) -> bool {
        let drop_index = drop_index.min(self.len());
        let wanted: IndexSet<ActionId> = ids.iter().copied().collect();
        let moving: Vec<usize> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| wanted.contains(&entry.id))
            .map(|(index, _)| index)
            .collect();
        if moving.is_empty() {
            return false;
        }

        let before_drop = moving.iter().filter(|index| **index < drop_index).count();
        let mut moved: Vec<Entry> = moving
            .iter()
            .rev()
            .map(|index| self.entries.remove(*index))
            .collect();
        moved.reverse();

        let at = drop_index - before_drop;
        self.entries.splice(at..at, moved);
        true
    }

    /// The selected ids, in list order.
    pub fn selected_ids(&self) -> Vec<ActionId> {
        self.entries
            .iter()
            .map(|entry| entry.id)
            .filter(|id| self.selection.contains(id))
            .collect()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: ActionId) -> bool {
        self.selection.contains(&id)
    }

    /// Selects `id` and nothing else.
    pub fn select_only(&mut self, id: ActionId) {
        if self.index_of(id).is_none() {
            return;
        }
        self.selection.clear();
        self.selection.insert(id);
        self.anchor = Some(id);
    }

    /// Selects exactly the given actions.
    pub fn select(&mut self, ids: &[ActionId]) {
        self.selection = ids
            .iter()
            .copied()
            .filter(|id| self.index_of(*id).is_some())
            .collect();
        self.anchor = self.selection.first().copied();
    }

    /// Adds `id` to the selection, or takes it out if it is selected.
    pub fn toggle_selected(&mut self, id: ActionId) {
        if self.index_of(id).is_none() {
            return;
        }
        if !self.selection.shift_remove(&id) {
            self.selection.insert(id);
        }
        self.anchor = Some(id);
    }

    /// Selects every action between the last clicked one and `id`.
    pub fn extend_selection(&mut self, id: ActionId) {
        let anchor = self.anchor.unwrap_or(id);
        self.select_range(anchor, id);
        if self.anchor.is_none() && !self.selection.is_empty() {
            self.anchor = Some(id);
        }
    }

    /// Selects every action between `from` and `to`, both included, and nothing else.
    pub fn select_range(&mut self, from: ActionId, to: ActionId) {
        let (Some(from), Some(to)) = (self.index_of(from), self.index_of(to)) else {
            return;
        };
        let (start, end) = if from <= to { (from, to) } else { (to, from) };
        self.selection = self.entries[start..=end].iter().map(|entry| entry.id).collect();
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.anchor = None;
    }

    /// The active action.
    pub fn current(&self) -> Option<ActionId> {
        self.current
    }

    /// Makes `id` the current action: the previous one is deactivated and `id` activated.
    /// Returns whether the current action changed.
    pub fn set_current(&mut self, id: Option<ActionId>) -> bool {
        if self.current == id {
            return false;
        }
        if let Some(new) = id {
            if self.index_of(new).is_none() {
                debug!("cannot make unknown action {new} current");
                return false;
            }
        }

        if let Some(previous) = self.current.take() {
            if let Some(action) = self.get_mut(previous) {
                action.set_active(false);
            }
        }
        if let Some(new) = id {
            if let Some(action) = self.get_mut(new) {
                action.set_active(true);
            }
        }
        self.current = id;
        self.events.emit(&SequenceEvent::CurrentChanged(id));
        true
    }

    /// Handles a click on `id`: a click on the current action is reported as such,
    /// any other action becomes current and the only selected one.
    pub fn click(&mut self, id: ActionId) {
        if self.current == Some(id) {
            self.events.emit(&SequenceEvent::CurrentClicked(id));
            return;
        }
        if self.set_current(Some(id)) {
            self.select_only(id);
        }
    }
}

impl Drop for ActionSequence {
    fn drop(&mut self) {
        // leave the scene as it was before the current action was applied
        if let Some(current) = self.current.take() {
            if let Some(action) = self.get_mut(current) {
                action.set_active(false);
            }
        }
    }
}
