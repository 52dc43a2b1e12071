//! Editing an action inline through its quick-edit text.

use tracing::{debug, warn};

use crate::actions::{create_action, Action, ActionKind};

use super::{ActionId, ActionSequence};

/// An open quick-edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickEdit {
    /// The edited action.
    action: ActionId,
    /// The text being edited.
    text: String,
    /// Cursor position, in characters.
    cursor: usize,
    /// Whether the action was written for this session, and goes away if it is cancelled.
    written: bool,
}

impl QuickEdit {
    /// The edited action.
    pub fn action(&self) -> ActionId {
        self.action
    }

    /// The text being edited.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position, in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Where the cursor was when the last session was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CursorMemory {
    /// The cursor was after the last character.
    at_end: bool,
    /// The cursor position, in characters.
    position: usize,
}

impl Default for CursorMemory {
    fn default() -> Self {
        Self {
            at_end: true,
            position: 0,
        }
    }
}

impl CursorMemory {
    /// Where the cursor starts in `text`.
    fn place(&self, text: &str) -> usize {
        let len = text.chars().count();
        if self.at_end {
            len
        } else {
            self.position.min(len)
        }
    }
}

// Quick edit
impl ActionSequence {
    /// Opens a quick-edit session on `id` and returns it. Only text-editable actions
    /// can be quick-edited; a session already open is committed first.
    pub fn begin_quick_edit(&mut self, id: ActionId) -> Option<&QuickEdit> {
        self.open_session(id, false)
    }

    /// The open session, if any.
    pub fn quick_edit(&self) -> Option<&QuickEdit> {
        self.quick_edit.as_ref()
    }

    /// Replaces the session text and moves the cursor, clamped to the text.
    pub fn update_quick_edit(&mut self, text: &str, cursor: usize) -> bool {
        let Some(session) = self.quick_edit.as_mut() else {
            return false;
        };
        session.text = text.to_string();
        session.cursor = cursor.min(text.chars().count());
        true
    }

    /// Applies the session text to the action and closes the session.
    pub fn commit_quick_edit(&mut self) -> bool {
        let Some(session) = self.quick_edit.take() else {
            return false;
        };
        self.cursor_memory = CursorMemory {
            at_end: session.cursor == session.text.chars().count(),
            position: session.cursor,
        };
        match self.get_mut(session.action) {
            Some(action) => {
                action.set_edit_text(&session.text);
                true
            }
            None => {
                warn!("quick-edited action {:?} is gone", session.action);
                false
            }
        }
    }

    /// Closes the session without touching the action. An action written for the
    /// session is removed again.
    pub fn cancel_quick_edit(&mut self) {
        let Some(session) = self.quick_edit.take() else {
            return;
        };
        if session.written {
            debug!("dropping unwritten action {:?}", session.action);
            self.remove(session.action);
        }
    }

    /// Inserts an empty dialogue line after the current action (or at the end), makes it
    /// current and opens a quick-edit session on it.
    pub fn write_dialogue(&mut self) -> ActionId {
        let index = self
            .current
            .and_then(|current| self.index_of(current))
            .map_or(self.len(), |index| index + 1);
        let id = self.insert(index, create_action(ActionKind::Dialogue, &self.context));
        self.set_current(Some(id));
        self.select_only(id);
        self.open_session(id, true);
        id
    }

    /// Opens a session, committing any open one first.
    fn open_session(&mut self, id: ActionId, written: bool) -> Option<&QuickEdit> {
        if self.quick_edit.is_some() {
            self.commit_quick_edit();
        }
        let action = self.get(id)?;
        if !action.base().text_editable() {
            debug!("{} actions have no quick-edit text", action.kind());
            return None;
        }
        let text = action.edit_text()?;
        let cursor = self.cursor_memory.place(&text);
        self.quick_edit = Some(QuickEdit {
            action: id,
            text,
            cursor,
            written,
        });
        self.quick_edit.as_ref()
    }
}
