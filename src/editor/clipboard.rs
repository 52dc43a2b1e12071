//! Copying actions between sequences as JSON text.

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    actions::{action_from_data, Action, ActionContext, ActionData},
    errors::PasteError,
};

use super::{ActionId, ActionSequence, SequenceEvent};

/// Serialized actions on their way through the clipboard: a JSON list of internal
/// action data, in list order.
///
/// ```
/// use scene_actions::prelude::*;
///
/// let mut line = Dialogue::new(ActionContext::new());
/// line.set_text("Hi");
///
/// let payload = ClipboardPayload::from_data([line.serialize(true)]);
/// let pasted = payload.to_actions(&ActionContext::new()).unwrap();
/// assert_eq!(pasted[0].display_text(), "\"Hi\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardPayload(String);

impl ClipboardPayload {
    /// The MIME type the payload is offered under.
    pub const MIME_TYPE: &'static str = "application/x-scene-actions+json";

    /// Wraps text taken from the system clipboard. It is only checked when pasted.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Builds a payload from serialized actions.
    pub fn from_data(data: impl IntoIterator<Item = ActionData>) -> Self {
        let list: Vec<Value> = data.into_iter().map(Value::Object).collect();
        Self(Value::Array(list).to_string())
    }

    /// The JSON text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the serialized actions.
    pub fn decode(&self) -> Result<Vec<ActionData>, PasteError> {
        Ok(serde_json::from_str(&self.0)?)
    }

    /// Rebuilds the actions, failing as a whole if any entry is not an action.
    pub fn to_actions(&self, context: &ActionContext) -> Result<Vec<Box<dyn Action>>, PasteError> {
        let data = self.decode()?;
        debug!("rebuilding {} actions from the clipboard", data.len());
        data.iter()
            .enumerate()
            .map(|(index, entry)| {
                action_from_data(entry, context).map_err(|source| PasteError::Action { index, source })
            })
            .collect()
    }
}

// Clipboard
impl ActionSequence {
    /// Copies the selected actions, in list order. Returns `None` when nothing is selected.
    pub fn copy(&mut self) -> Option<ClipboardPayload> {
        let ids = self.selected_ids();
        let payload = self.store_selection(&ids)?;
        self.events.emit(&SequenceEvent::Copied(ids));
        Some(payload)
    }

    /// Copies the selected actions and removes them. Returns `None` when nothing is selected.
    pub fn cut(&mut self) -> Option<ClipboardPayload> {
        let ids = self.selected_ids();
        let payload = self.store_selection(&ids)?;
        self.remove_selected();
        self.events.emit(&SequenceEvent::Cut(ids));
        Some(payload)
    }

    /// What the last cut or copy produced, or what was put there with
    /// [`ActionSequence::set_clipboard`].
    pub fn clipboard(&self) -> Option<&ClipboardPayload> {
        self.clipboard.as_ref()
    }

    /// Replaces the clipboard content, e.g. with text from the system clipboard.
    pub fn set_clipboard(&mut self, payload: Option<ClipboardPayload>) {
        self.clipboard = payload;
    }

    /// Whether there is anything to paste.
    pub fn can_paste(&self) -> bool {
        self.clipboard.is_some()
    }

    /// Pastes after the last selected action, or at the end when nothing is selected.
    pub fn paste(&mut self) -> Result<Vec<ActionId>, PasteError> {
        let index = self
            .selected_ids()
            .last()
            .and_then(|id| self.index_of(*id))
            .map_or(self.len(), |index| index + 1);
        self.paste_at(index)
    }

    /// Inserts fresh copies of the clipboard actions at `index` and returns their ids.
    /// An empty clipboard pastes nothing; a payload that is not entirely made of actions
    /// is rejected as a whole.
    pub fn paste_at(&mut self, index: usize) -> Result<Vec<ActionId>, PasteError> {
        let Some(payload) = &self.clipboard else {
            return Ok(Vec::new());
        };
        let actions = match payload.to_actions(&self.context) {
            Ok(actions) => actions,
            Err(err) => {
                warn!("nothing pasted: {err}");
                return Err(err);
            }
        };

        let index = index.min(self.len());
        let ids: Vec<ActionId> = actions
            .into_iter()
            .enumerate()
            .map(|(offset, action)| self.insert(index + offset, action))
            .collect();
        if self.select_pasted {
            self.select(&ids);
        }
        info!("pasted {} actions at {index}", ids.len());
        self.events.emit(&SequenceEvent::Pasted(ids.clone()));
        Ok(ids)
    }

    /// Serializes `ids` into the clipboard.
    fn store_selection(&mut self, ids: &[ActionId]) -> Option<ClipboardPayload> {
        if ids.is_empty() {
            return None;
        }
        let payload = ClipboardPayload::from_data(
            ids.iter()
                .filter_map(|id| self.get(*id))
                .map(|action| action.serialize(true)),
        );
        self.clipboard = Some(payload.clone());
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{
        actions::{ActionKind, ChangeState, Dialogue},
        config::EditorConfig,
        errors::ActionError,
        scene::{ObjectData, ObjectRegistry},
        tests::{minimal_scene, record},
    };

    /// A sequence of three lines, `one`, `two` and `three`.
    fn three_lines() -> (ActionSequence, Vec<ActionId>) {
        let mut sequence = ActionSequence::new(ActionContext::new());
        let ids = ["one", "two", "three"]
            .into_iter()
            .map(|text| {
                let mut line = Dialogue::new(ActionContext::new());
                line.set_text(text);
                sequence.append(Box::new(line))
            })
            .collect();
        (sequence, ids)
    }

    fn texts(sequence: &ActionSequence) -> Vec<String> {
        sequence.iter().map(|(_, action)| action.display_text()).collect()
    }

    #[test]
    fn copy_serializes_selection_in_list_order() {
        let (mut sequence, ids) = three_lines();
        let (events, _connection) = record(sequence.events());
        sequence.select_only(ids[2]);
        sequence.toggle_selected(ids[0]);

        let payload = sequence.copy().unwrap();

        let data = payload.decode().unwrap();
        assert_eq!(data[0]["text"], json!("one"));
        assert_eq!(data[1]["text"], json!("three"));
        assert_eq!(sequence.len(), 3);
        assert_eq!(*events.borrow(), [SequenceEvent::Copied(vec![ids[0], ids[2]])]);
    }

    #[test]
    fn copy_without_selection() {
        let (mut sequence, _) = three_lines();
        assert!(sequence.copy().is_none());
        assert!(!sequence.can_paste());
    }

    #[test]
    fn cut_removes_selection() {
        let (mut sequence, ids) = three_lines();
        let (events, _connection) = record(sequence.events());
        sequence.select_only(ids[1]);

        sequence.cut().unwrap();

        assert_eq!(texts(&sequence), ["\"one\"", "\"three\""]);
        assert!(sequence.can_paste());
        assert_eq!(*events.borrow(), [SequenceEvent::Cut(vec![ids[1]])]);
    }

    #[test]
    fn paste_inserts_fresh_copies() {
        let (mut sequence, ids) = three_lines();
        sequence.select_range(ids[0], ids[1]);
        sequence.copy();
        let (events, _connection) = record(sequence.events());

        let pasted = sequence.paste_at(3).unwrap();

        assert_eq!(pasted.len(), 2);
        assert!(pasted.iter().all(|id| !ids.contains(id)));
        assert_eq!(
            texts(&sequence),
            ["\"one\"", "\"two\"", "\"three\"", "\"one\"", "\"two\""]
        );
        assert_eq!(sequence.selected_ids(), pasted);
        assert_eq!(*events.borrow(), [SequenceEvent::Pasted(pasted.clone())]);
    }

    #[test]
    fn paste_after_selection() {
        let (mut sequence, ids) = three_lines();
        sequence.select_only(ids[0]);
        sequence.cut();
        sequence.select_only(ids[1]);

        sequence.paste().unwrap();

        assert_eq!(texts(&sequence), ["\"two\"", "\"one\"", "\"three\""]);
    }

    #[test]
    fn paste_keeps_selection_when_configured() {
        let config = EditorConfig::from_ron("(select_pasted: false)").unwrap();
        let (sequence, ids) = three_lines();
        let mut sequence = sequence.with_config(&config);
        sequence.select_only(ids[2]);
        sequence.copy();

        sequence.paste_at(0).unwrap();

        assert_eq!(sequence.selected_ids(), [ids[2]]);
    }

    #[test]
    fn paste_with_empty_clipboard_is_a_no_op() {
        let (mut sequence, _) = three_lines();
        let (events, _connection) = record(sequence.events());
        assert!(sequence.paste_at(0).unwrap().is_empty());
        assert_eq!(sequence.len(), 3);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn rejected_payload_inserts_nothing() {
        let (mut sequence, _) = three_lines();
        sequence.set_clipboard(Some(ClipboardPayload::from_text(
            json!([{ "type": "Dialogue", "text": "ok" }, { "type": "Wait" }]).to_string(),
        )));

        assert!(matches!(sequence.paste_at(0), Err(PasteError::Action { index: 1, .. })));
        assert_eq!(sequence.len(), 3);
    }

    #[test]
    fn pasted_actions_resolve_in_the_scene() {
        let (scene, context) = minimal_scene();
        let mut sequence = ActionSequence::new(context.clone());
        let mut change = ChangeState::new(context);
        change.set_scene_object_name("door");
        change.set_state("open");
        let id = sequence.append(Box::new(change));
        sequence.select_only(id);
        sequence.cut();

        let pasted = sequence.paste_at(0).unwrap();
        sequence.set_current(Some(pasted[0]));

        let door = scene.find_object(None, "door").unwrap();
        assert!(matches!(&*door.data(), ObjectData::Prop(p) if p.current_state == "open"));
    }

    #[test]
    fn keeps_order_and_variants() {
        let payload = ClipboardPayload::from_text(
            json!([
                { "type": "ChangeState", "state": "open" },
                { "type": "Dialogue", "text": "Hi" },
            ])
            .to_string(),
        );
        let actions = payload.to_actions(&ActionContext::new()).unwrap();
        let kinds: Vec<ActionKind> = actions.iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, [ActionKind::ChangeState, ActionKind::Dialogue]);
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::not_a_list(r#"{ "type": "Dialogue" }"#)]
    #[case::not_objects("[1, 2]")]
    fn malformed_payloads(#[case] text: &str) {
        let payload = ClipboardPayload::from_text(text);
        assert!(matches!(
            payload.to_actions(&ActionContext::new()),
            Err(PasteError::Payload(_))
        ));
    }

    #[test]
    fn unknown_type_names_the_entry() {
        let payload = ClipboardPayload::from_text(
            json!([{ "type": "Dialogue" }, { "type": "Wait" }]).to_string(),
        );
        let err = payload.to_actions(&ActionContext::new()).err().unwrap();
        assert!(matches!(
            err,
            PasteError::Action { index: 1, source: ActionError::UnknownType(t) } if t == "Wait"
        ));
    }

    #[test]
    fn empty_list() {
        let payload = ClipboardPayload::from_data([]);
        assert_eq!(payload.as_str(), "[]");
        assert!(payload.to_actions(&ActionContext::new()).unwrap().is_empty());
    }
}
