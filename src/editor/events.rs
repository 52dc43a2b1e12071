//! What an [`ActionSequence`](super::ActionSequence) reports to the views around it.

use super::ActionId;

/// An event raised by an action sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceEvent {
    /// These actions were copied to the clipboard.
    Copied(Vec<ActionId>),
    /// These actions were copied to the clipboard and removed.
    Cut(Vec<ActionId>),
    /// These actions were pasted from the clipboard.
    Pasted(Vec<ActionId>),
    /// Another action (or none) became the current one.
    CurrentChanged(Option<ActionId>),
    /// The current action was clicked again.
    CurrentClicked(ActionId),
}
