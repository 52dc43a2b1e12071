//! Dialogue lines.

use std::any::Any;

use tracing::{debug, warn};

use crate::{
    binding::ObjectRef,
    edit_text::{self, EditText},
    scene::{ObjectData, ObjectHandle, ObjectKind},
};

use super::{
    data::{self, ActionData},
    Action, ActionBase, ActionContext, ActionKind,
};

/// A line of dialogue, optionally said by a character and accompanied by a sound.
///
/// The speaker is either a live character of the scene, followed across renames and
/// dropped when it is destroyed, or just a name when no such character exists (yet).
/// While active, the line is shown in the action's target, which is either a
/// [`DialogueBox`](crate::scene::DialogueBox) or a [`TextBox`](crate::scene::TextBox).
#[derive(Debug)]
pub struct Dialogue {
    /// Shared action state.
    base: ActionBase,
    /// The speaker, live or by name.
    character: ObjectRef,
    /// The spoken line.
    text: String,
    /// Whether the line is appended to the text already in the box.
    append: bool,
    /// A sound played with the line. Never has a fallback name.
    sound: ObjectRef,
    /// Volume of the sound, nominally 0 to 100.
    sound_volume: i32,
    /// Whether `text_speed` overrides the project text speed.
    text_speed_enabled: bool,
    /// Speed the line is revealed at.
    text_speed: i32,
}

impl Dialogue {
    /// Creates an empty line.
    pub fn new(context: ActionContext) -> Self {
        let defaults = context.dialogue_defaults();
        Self {
            base: ActionBase::new(ActionKind::Dialogue, context).with_capabilities(true, true),
            character: ObjectRef::new(),
            text: String::new(),
            append: false,
            sound: ObjectRef::new(),
            sound_volume: defaults.sound_volume,
            text_speed_enabled: false,
            text_speed: defaults.text_speed,
        }
    }

    /// Creates a line from internal data.
    pub fn from_data(data: &ActionData, context: ActionContext) -> Self {
        let mut dialogue = Self::new(context);
        dialogue.load(data, true);
        dialogue
    }

    /// The live speaker, if one is bound.
    pub fn character(&self) -> Option<ObjectHandle> {
        self.character.object()
    }

    /// Makes `character` the speaker. Setting the current speaker again does nothing,
    /// and objects that are not characters are ignored.
    pub fn set_character(&mut self, character: Option<ObjectHandle>) {
        if self.character.points_to(character.as_ref()) {
            return;
        }
        if let Some(object) = &character {
            if object.kind() != ObjectKind::Character {
                warn!("{:?} is not a character, it cannot speak", object.name());
                return;
            }
        }

        let on_rename = self.base.rename_observer();
        self.character.bind(character, on_rename);
        self.update_text_box();
        self.base.notify("character", self.character_name());
    }

    /// Makes the scene character called `name` the speaker. If the scene has no such
    /// character, the name alone is kept until one is assigned.
    pub fn set_character_by_name(&mut self, name: &str) {
        if self.character.is_bound() && self.character.name() == name {
            return;
        }
        match self.base.context().find_object(Some(ObjectKind::Character), name) {
            Some(character) => self.set_character(Some(character)),
            None => {
                debug!("no character named {name:?}, keeping the name only");
                self.set_character_name(name);
            }
        }
    }

    /// Stores `name` as the speaker without looking it up, dropping any live speaker.
    pub fn set_character_name(&mut self, name: &str) {
        if !self.character.is_bound() && self.character.fallback_name() == name {
            return;
        }
        self.character.set_fallback_name(name);
        self.update_text_box();
        self.base.notify("character", self.character_name());
    }

    /// The speaker's name: the live character's current name, or the stored name.
    pub fn character_name(&self) -> String {
        self.character.name()
    }

    /// The spoken line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the spoken line.
    pub fn set_text(&mut self, text: &str) {
        if self.text == text {
            return;
        }
        self.text = text.to_string();
        self.update_text_box();
        self.base.notify("text", text);
    }

    /// Whether the line is appended to the text already shown.
    pub fn append(&self) -> bool {
        self.append
    }

    /// Sets whether the line is appended to the text already shown.
    pub fn set_append(&mut self, append: bool) {
        if self.append == append {
            return;
        }
        self.append = append;
        self.base.notify("append", append);
    }

    /// The sound played with the line, if any.
    pub fn sound(&self) -> Option<ObjectHandle> {
        self.sound.object()
    }

    /// Plays `sound` with the line. Objects that are not sounds are ignored.
    pub fn set_sound(&mut self, sound: Option<ObjectHandle>) {
        if self.sound.points_to(sound.as_ref()) {
            return;
        }
        if let Some(object) = &sound {
            if object.kind() != ObjectKind::Sound {
                warn!("{:?} is not a sound", object.name());
                return;
            }
        }

        self.sound.bind(sound, |_| {});
        self.base.notify("sound", self.sound.name());
    }

    /// Plays the sound called `name` with the line, or no sound if there is none.
    pub fn set_sound_by_name(&mut self, name: &str) {
        let sound = self.base.context().find_object(Some(ObjectKind::Sound), name);
        if sound.is_none() && !name.is_empty() {
            debug!("no sound named {name:?}");
        }
        self.set_sound(sound);
    }

    /// Volume of the sound.
    pub fn sound_volume(&self) -> i32 {
        self.sound_volume
    }

    /// Sets the volume of the sound.
    pub fn set_sound_volume(&mut self, volume: i32) {
        if self.sound_volume == volume {
            return;
        }
        self.sound_volume = volume;
        self.base.notify("soundVolume", volume);
    }

    /// Whether the line overrides the text speed.
    pub fn text_speed_enabled(&self) -> bool {
        self.text_speed_enabled
    }

    /// Enables or disables the text speed override.
    pub fn set_text_speed_enabled(&mut self, enabled: bool) {
        if self.text_speed_enabled == enabled {
            return;
        }
        self.text_speed_enabled = enabled;
        self.base.notify("textSpeedEnabled", enabled);
    }

    /// The overriding text speed.
    pub fn text_speed(&self) -> i32 {
        self.text_speed
    }

    /// Sets the overriding text speed.
    pub fn set_text_speed(&mut self, speed: i32) {
        if self.text_speed == speed {
            return;
        }
        self.text_speed = speed;
        self.base.notify("textSpeed", speed);
    }

    /// Pushes the line into the target, if the action is active and has one.
    fn update_text_box(&self) {
        let Some(target) = self.base.scene_object() else {
            return;
        };

        let (name, text_color, name_color) = match self.character.object() {
            Some(character) => {
                let colors = character
                    .as_character()
                    .map(|c| (c.text_color, c.name_color))
                    .unwrap_or_default();
                (character.name(), colors.0, colors.1)
            }
            None => (self.character.fallback_name().to_string(), None, None),
        };

        let mut target_data = target.data_mut();
        match &mut *target_data {
            ObjectData::DialogueBox(dialogue_box) => {
                dialogue_box.set_speaker_name(name);
                dialogue_box.set_text(self.text.as_str());
                dialogue_box.set_text_color(text_color);
                dialogue_box.set_speaker_name_color(name_color);
            }
            ObjectData::TextBox(text_box) => {
                text_box.set_placeholder_text_color(text_color);
                text_box.set_placeholder_text(self.text.as_str());
            }
            other => debug!("a {:?} cannot show dialogue lines", other.kind()),
        }
    }

    /// Empties the target, if the action is active and has one.
    fn restore_text_box(&self) {
        let Some(target) = self.base.scene_object() else {
            return;
        };

        let mut target_data = target.data_mut();
        match &mut *target_data {
            ObjectData::DialogueBox(dialogue_box) => dialogue_box.clear(),
            ObjectData::TextBox(text_box) => text_box.clear(),
            other => debug!("a {:?} cannot show dialogue lines", other.kind()),
        }
    }
}

impl Action for Dialogue {
    fn base(&self) -> &ActionBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ActionBase {
        &mut self.base
    }

    fn load(&mut self, data: &ActionData, internal: bool) {
        self.load_base(data, internal);

        if let Some(name) = data::string(data, "character") {
            self.set_character_by_name(name);
        }
        if let Some(text) = data::string(data, "text") {
            self.set_text(text);
        }
        if let Some(append) = data::boolean(data, "append") {
            self.set_append(append);
        }
        if let Some(sound) = data::string(data, "sound") {
            self.set_sound_by_name(sound);
        }
        if let Some(volume) = data::integer(data, "soundVolume") {
            self.set_sound_volume(volume);
        }
        let speed = data::integer(data, "textSpeed");
        // an explicit flag wins over the one implied by "textSpeed"
        let enabled = internal
            .then(|| data::boolean(data, "textSpeedEnabled"))
            .flatten()
            .or(speed.map(|_| true));
        if let Some(speed) = speed {
            self.set_text_speed(speed);
        }
        if let Some(enabled) = enabled {
            self.set_text_speed_enabled(enabled);
        }
    }

    fn serialize(&self, internal: bool) -> ActionData {
        let mut data = self.base.serialize(internal);

        let character = self.character_name();
        if !character.is_empty() {
            data.insert("character".into(), character.into());
        }
        if self.append {
            data.insert("append".into(), true.into());
        }
        if let Some(sound) = self.sound.object() {
            data.insert("sound".into(), sound.name().into());
            data.insert("soundVolume".into(), self.sound_volume.into());
        } else if internal {
            data.insert("soundVolume".into(), self.sound_volume.into());
        }
        if self.text_speed_enabled || internal {
            data.insert("textSpeed".into(), self.text_speed.into());
        }
        if internal {
            data.insert("textSpeedEnabled".into(), self.text_speed_enabled.into());
        }
        data.insert("text".into(), self.text.clone().into());
        data
    }

    fn display_text(&self) -> String {
        let name = self.character_name();
        if name.is_empty() {
            format!("\"{}\"", self.text)
        } else {
            format!("{name}: \"{}\"", self.text)
        }
    }

    fn bind_to_target(&mut self) {
        self.base.activate();
        self.update_text_box();
    }

    fn unbind_from_target(&mut self) {
        self.restore_text_box();
        self.base.deactivate();
    }

    fn edit_text(&self) -> Option<String> {
        Some(edit_text::encode(&self.character_name(), &self.text))
    }

    fn set_edit_text(&mut self, text: &str) {
        let EditText { speaker, text } = edit_text::decode(text);
        match speaker {
            Some(name) => self.set_character_by_name(&name),
            None => self.set_character_name(""),
        }
        self.set_text(&text);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use rstest::{fixture, rstest};
    use serde_json::json;

    use super::*;
    use crate::{
        scene::{Color, Scene},
        signal::Notification,
        tests::{minimal_scene, record, ALICE_NAME_COLOR, ALICE_TEXT_COLOR},
    };

    #[fixture]
    fn setup() -> (Rc<Scene>, Dialogue) {
        let (scene, context) = minimal_scene();
        (scene, Dialogue::new(context))
    }

    fn find(scene: &Scene, name: &str) -> ObjectHandle {
        use crate::scene::ObjectRegistry;
        scene.find_object(None, name).unwrap()
    }

    #[test]
    fn starts_from_context_defaults() {
        let dialogue = Dialogue::new(ActionContext::new());
        assert_eq!(dialogue.text(), "");
        assert!(!dialogue.append());
        assert_eq!(dialogue.sound_volume(), 100);
        assert_eq!(dialogue.text_speed(), 50);
        assert!(!dialogue.text_speed_enabled());
        assert!(dialogue.base().mouse_click_on_finish());
        assert!(dialogue.base().text_editable());
    }

    #[rstest]
    #[case::text(|d: &mut Dialogue| d.set_text("Hello"))]
    #[case::append(|d: &mut Dialogue| d.set_append(true))]
    #[case::sound_volume(|d: &mut Dialogue| d.set_sound_volume(30))]
    #[case::text_speed_enabled(|d: &mut Dialogue| d.set_text_speed_enabled(true))]
    #[case::text_speed(|d: &mut Dialogue| d.set_text_speed(10))]
    #[case::character(|d: &mut Dialogue| d.set_character_by_name("Alice"))]
    #[case::character_name(|d: &mut Dialogue| d.set_character_name("Carol"))]
    #[case::sound(|d: &mut Dialogue| d.set_sound_by_name("beep"))]
    #[case::name(|d: &mut Dialogue| d.base_mut().set_name("intro"))]
    #[case::object(|d: &mut Dialogue| d.set_scene_object_name("box"))]
    #[case::active(|d: &mut Dialogue| d.set_active(true))]
    fn setters_notify_once_per_change(
        setup: (Rc<Scene>, Dialogue),
        #[case] setter: fn(&mut Dialogue),
    ) {
        let (_scene, mut dialogue) = setup;
        let (notifications, _connection) = record(dialogue.notifier());

        setter(&mut dialogue);
        assert_eq!(notifications.borrow().len(), 1);

        setter(&mut dialogue);
        assert_eq!(notifications.borrow().len(), 1);
    }

    #[rstest]
    fn binds_live_character(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        let (notifications, _connection) = record(dialogue.notifier());

        dialogue.set_character_by_name("Alice");

        let alice = find(&scene, "Alice");
        assert!(dialogue.character().is_some_and(|c| Rc::ptr_eq(&c, &alice)));
        assert_eq!(
            *notifications.borrow(),
            vec![Notification::Changed {
                field: "character",
                value: json!("Alice")
            }]
        );
    }

    #[rstest]
    fn follows_character_renames(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Alice");
        let (notifications, _connection) = record(dialogue.notifier());

        find(&scene, "Alice").set_name("Alicia");

        assert_eq!(dialogue.character_name(), "Alicia");
        assert_eq!(dialogue.serialize(false)["character"], json!("Alicia"));
        assert_eq!(*notifications.borrow(), vec![Notification::DataChanged]);
    }

    #[rstest]
    fn destroyed_character_leaves_no_name(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Alice");

        scene.remove(&find(&scene, "Alice"));

        assert!(dialogue.character().is_none());
        assert_eq!(dialogue.character_name(), "");
        assert!(!dialogue.serialize(true).contains_key("character"));
    }

    #[rstest]
    fn unknown_character_keeps_the_name(setup: (Rc<Scene>, Dialogue)) {
        let (_scene, mut dialogue) = setup;
        let (notifications, _connection) = record(dialogue.notifier());

        dialogue.set_character_by_name("Carol");

        assert!(dialogue.character().is_none());
        assert_eq!(dialogue.character_name(), "Carol");
        assert_eq!(notifications.borrow().len(), 1);
    }

    #[rstest]
    fn character_name_replaces_live_character(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Alice");

        dialogue.set_character_name("Alice");

        assert!(dialogue.character().is_none());
        assert_eq!(dialogue.character_name(), "Alice");
        assert_eq!(find(&scene, "Alice").observer_count(), 0);
    }

    #[rstest]
    fn ignores_objects_that_cannot_speak(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        let (notifications, _connection) = record(dialogue.notifier());

        dialogue.set_character(Some(find(&scene, "door")));

        assert!(dialogue.character().is_none());
        assert!(notifications.borrow().is_empty());
    }

    #[rstest]
    fn destroyed_sound_is_dropped(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_sound_by_name("beep");
        assert!(dialogue.sound().is_some());

        scene.remove(&find(&scene, "beep"));

        assert!(dialogue.sound().is_none());
        assert!(!dialogue.serialize(false).contains_key("sound"));
    }

    #[rstest]
    fn unknown_sound_means_no_sound(setup: (Rc<Scene>, Dialogue)) {
        let (_scene, mut dialogue) = setup;
        dialogue.set_sound_by_name("beep");
        dialogue.set_sound_by_name("boom");
        assert!(dialogue.sound().is_none());
    }

    #[rstest]
    fn renders_into_dialogue_box_while_active(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Alice");
        dialogue.set_text("Hello");
        dialogue.set_scene_object_name("box");

        let dialogue_box = find(&scene, "box");
        assert!(matches!(&*dialogue_box.data(), ObjectData::DialogueBox(b) if b.is_clear()));

        dialogue.set_active(true);
        {
            let data = dialogue_box.data();
            let ObjectData::DialogueBox(shown) = &*data else {
                panic!("not a dialogue box");
            };
            assert_eq!(shown.speaker_name(), "Alice");
            assert_eq!(shown.text(), "Hello");
            assert_eq!(shown.text_color(), Some(ALICE_TEXT_COLOR));
            assert_eq!(shown.speaker_name_color(), Some(ALICE_NAME_COLOR));
        }

        dialogue.set_text("Bye");
        assert!(matches!(&*dialogue_box.data(), ObjectData::DialogueBox(b) if b.text() == "Bye"));

        dialogue.set_active(false);
        assert!(matches!(&*dialogue_box.data(), ObjectData::DialogueBox(b) if b.is_clear()));
    }

    #[rstest]
    fn renders_into_text_box_while_active(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Alice");
        dialogue.set_text("Hello");
        dialogue.set_scene_object_name("input");
        dialogue.set_active(true);

        let text_box = find(&scene, "input");
        {
            let data = text_box.data();
            let ObjectData::TextBox(shown) = &*data else {
                panic!("not a text box");
            };
            assert_eq!(shown.placeholder_text(), "Hello");
            assert_eq!(shown.placeholder_text_color(), Some(ALICE_TEXT_COLOR));
        }

        dialogue.set_active(false);
        assert!(matches!(&*text_box.data(), ObjectData::TextBox(b) if b.is_clear()));
    }

    #[rstest]
    fn name_only_speaker_has_no_colors(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_character_name("Narrator");
        dialogue.set_scene_object_name("box");
        dialogue.set_active(true);

        let dialogue_box = find(&scene, "box");
        let data = dialogue_box.data();
        let ObjectData::DialogueBox(shown) = &*data else {
            panic!("not a dialogue box");
        };
        assert_eq!(shown.speaker_name(), "Narrator");
        assert_eq!(shown.text_color(), None::<Color>);
    }

    #[rstest]
    fn retargeting_restores_previous_target(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_text("Hello");
        dialogue.set_scene_object_name("box");
        dialogue.set_active(true);

        dialogue.set_scene_object_name("input");

        assert!(matches!(&*find(&scene, "box").data(), ObjectData::DialogueBox(b) if b.is_clear()));
        assert!(
            matches!(&*find(&scene, "input").data(), ObjectData::TextBox(b) if b.placeholder_text() == "Hello")
        );
    }

    #[rstest]
    fn load_is_a_partial_update(setup: (Rc<Scene>, Dialogue)) {
        let (_scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Bob");
        dialogue.set_text("Hi");
        dialogue.set_sound_by_name("beep");
        let before = dialogue.serialize(true);
        let (notifications, _connection) = record(dialogue.notifier());

        dialogue.load(&before, true);
        dialogue.load(&ActionData::new(), true);

        assert_eq!(dialogue.serialize(true), before);
        assert!(notifications.borrow().is_empty());
    }

    #[rstest]
    fn load_ignores_unknown_keys_and_wrong_types(setup: (Rc<Scene>, Dialogue)) {
        let (_scene, mut dialogue) = setup;
        dialogue.set_text("Hi");
        let data = json!({ "unrelated": 3, "text": 7, "append": "yes" });

        dialogue.load(data.as_object().unwrap(), false);

        assert_eq!(dialogue.text(), "Hi");
        assert!(!dialogue.append());
    }

    #[rstest]
    #[case::implied(json!({ "textSpeed": 20 }), true, true)]
    #[case::explicit_wins(json!({ "textSpeed": 20, "textSpeedEnabled": false }), true, false)]
    #[case::external_flag_ignored(json!({ "textSpeed": 20, "textSpeedEnabled": false }), false, true)]
    fn loading_text_speed(
        setup: (Rc<Scene>, Dialogue),
        #[case] data: serde_json::Value,
        #[case] internal: bool,
        #[case] enabled: bool,
    ) {
        let (_scene, mut dialogue) = setup;
        dialogue.load(data.as_object().unwrap(), internal);
        assert_eq!(dialogue.text_speed(), 20);
        assert_eq!(dialogue.text_speed_enabled(), enabled);
    }

    #[rstest]
    fn serialized_keys(setup: (Rc<Scene>, Dialogue)) {
        let (_scene, mut dialogue) = setup;
        dialogue.set_text("Hi");
        dialogue.base_mut().set_name("intro");

        assert_eq!(
            serde_json::Value::Object(dialogue.serialize(false)),
            json!({ "type": "Dialogue", "text": "Hi" })
        );
        assert_eq!(
            serde_json::Value::Object(dialogue.serialize(true)),
            json!({
                "type": "Dialogue",
                "name": "intro",
                "text": "Hi",
                "soundVolume": 100,
                "textSpeed": 50,
                "textSpeedEnabled": false,
            })
        );

        dialogue.set_character_name("Carol");
        dialogue.set_append(true);
        dialogue.set_sound_by_name("beep");
        dialogue.set_text_speed_enabled(true);
        assert_eq!(
            serde_json::Value::Object(dialogue.serialize(false)),
            json!({
                "type": "Dialogue",
                "character": "Carol",
                "text": "Hi",
                "append": true,
                "sound": "beep",
                "soundVolume": 100,
                "textSpeed": 50,
            })
        );
    }

    #[rstest]
    #[case::with_speaker("Alice", "Hi", "Alice: \"Hi\"")]
    #[case::without_speaker("", "Hi", "\"Hi\"")]
    fn display_text(
        setup: (Rc<Scene>, Dialogue),
        #[case] speaker: &str,
        #[case] text: &str,
        #[case] expected: &str,
    ) {
        let (_scene, mut dialogue) = setup;
        dialogue.set_character_by_name(speaker);
        dialogue.set_text(text);
        assert_eq!(dialogue.display_text(), expected);
    }

    #[rstest]
    #[case::speaker("Alice", "Hello there")]
    #[case::unknown_speaker("Carol", "Hello")]
    #[case::nested_quotes("Bob", "She said 'hi'")]
    #[case::no_speaker("", "Just text")]
    fn edit_text_round_trip(
        setup: (Rc<Scene>, Dialogue),
        #[case] speaker: &str,
        #[case] text: &str,
    ) {
        let (_scene, mut source) = setup;
        source.set_character_by_name(speaker);
        source.set_text(text);

        let mut target = Dialogue::new(source.base().context().clone());
        target.set_edit_text(&source.edit_text().unwrap());

        assert_eq!(target.character_name(), speaker);
        assert_eq!(target.text(), text);
    }

    #[rstest]
    fn edit_text_binds_live_character(setup: (Rc<Scene>, Dialogue)) {
        let (scene, mut dialogue) = setup;
        dialogue.set_edit_text("Bob: 'Hey'");
        assert!(dialogue
            .character()
            .is_some_and(|c| Rc::ptr_eq(&c, &find(&scene, "Bob"))));
        assert_eq!(dialogue.text(), "Hey");
    }

    #[rstest]
    fn edit_text_without_pattern_clears_speaker(setup: (Rc<Scene>, Dialogue)) {
        let (_scene, mut dialogue) = setup;
        dialogue.set_character_by_name("Alice");

        dialogue.set_edit_text("  no speaker here  ");

        assert_eq!(dialogue.character_name(), "");
        assert_eq!(dialogue.text(), "no speaker here");
    }

    #[test]
    fn from_data_restores_fields() {
        let (_scene, context) = minimal_scene();
        let data = json!({ "type": "Dialogue", "character": "Alice", "text": "Hi", "append": true });
        let dialogue = Dialogue::from_data(data.as_object().unwrap(), context);
        assert!(dialogue.character().is_some());
        assert_eq!(dialogue.text(), "Hi");
        assert!(dialogue.append());
    }
}
