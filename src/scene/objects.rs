//! The kinds of scene objects actions can reference or render into.

use serde::{Deserialize, Serialize};

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// A character that can speak dialogue lines and switch between states (poses, moods).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Character {
    /// Color of the lines the character says.
    pub text_color: Option<Color>,
    /// Color of the character's name in a dialogue box.
    pub name_color: Option<Color>,
    /// The states the character can be in.
    pub states: Vec<String>,
    /// The state the character is currently in.
    pub current_state: String,
}

impl Character {
    /// Sets the color of the character's lines.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = Some(color);
        self
    }

    /// Sets the color of the character's name.
    pub fn with_name_color(mut self, color: Color) -> Self {
        self.name_color = Some(color);
        self
    }

    /// Adds the given states. The first one becomes the current state if none is set.
    pub fn with_states<S: Into<String>>(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states.into_iter().map(Into::into));
        if self.current_state.is_empty() {
            if let Some(first) = self.states.first() {
                self.current_state = first.clone();
            }
        }
        self
    }
}

/// An audio resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sound {
    /// Where the audio lives, relative to the project.
    pub path: String,
}

impl Sound {
    /// Creates a sound resource pointing at `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// The rich rendering target of a dialogue line: a box with a speaker name and a text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogueBox {
    /// Name shown above the text.
    speaker_name: String,
    /// The line being shown.
    text: String,
    /// Color of the line.
    text_color: Option<Color>,
    /// Color of the speaker name.
    speaker_name_color: Option<Color>,
}

impl DialogueBox {
    /// The shown speaker name.
    pub fn speaker_name(&self) -> &str {
        &self.speaker_name
    }

    /// Sets the shown speaker name.
    pub fn set_speaker_name(&mut self, name: impl Into<String>) {
        self.speaker_name = name.into();
    }

    /// The shown text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sets the shown text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The color of the text, `None` for the box default.
    pub fn text_color(&self) -> Option<Color> {
        self.text_color
    }

    /// Sets the text color, `None` for the box default.
    pub fn set_text_color(&mut self, color: Option<Color>) {
        self.text_color = color;
    }

    /// The color of the speaker name, `None` for the box default.
    pub fn speaker_name_color(&self) -> Option<Color> {
        self.speaker_name_color
    }

    /// Sets the speaker name color, `None` for the box default.
    pub fn set_speaker_name_color(&mut self, color: Option<Color>) {
        self.speaker_name_color = color;
    }

    /// Empties the box and resets its colors.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the box shows nothing.
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// The plain rendering target of a dialogue line: a text input showing the line as
/// placeholder text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBox {
    /// Greyed-out text shown while the box is empty.
    placeholder_text: String,
    /// Color of the placeholder text.
    placeholder_text_color: Option<Color>,
}

impl TextBox {
    /// The placeholder text.
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    /// Sets the placeholder text.
    pub fn set_placeholder_text(&mut self, text: impl Into<String>) {
        self.placeholder_text = text.into();
    }

    /// The placeholder color, `None` for the box default.
    pub fn placeholder_text_color(&self) -> Option<Color> {
        self.placeholder_text_color
    }

    /// Sets the placeholder color, `None` for the box default.
    pub fn set_placeholder_text_color(&mut self, color: Option<Color>) {
        self.placeholder_text_color = color;
    }

    /// Empties the placeholder and resets its color.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the box shows nothing.
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

/// Any other scene object with a set of states, e.g. a door that can be open or closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prop {
    /// The states the prop can be in.
    pub states: Vec<String>,
    /// The state the prop is currently in.
    pub current_state: String,
}

impl Prop {
    /// Creates a prop with the given states, starting in the first one.
    pub fn with_states<S: Into<String>>(states: impl IntoIterator<Item = S>) -> Self {
        let states: Vec<String> = states.into_iter().map(Into::into).collect();
        Self {
            current_state: states.first().cloned().unwrap_or_default(),
            states,
        }
    }
}

/// The kind of a scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// A [`Character`].
    Character,
    /// A [`Sound`].
    Sound,
    /// A [`DialogueBox`].
    DialogueBox,
    /// A [`TextBox`].
    TextBox,
    /// A [`Prop`].
    Prop,
}

/// The kind-specific part of a scene object.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectData {
    /// See [`Character`].
    Character(Character),
    /// See [`Sound`].
    Sound(Sound),
    /// See [`DialogueBox`].
    DialogueBox(DialogueBox),
    /// See [`TextBox`].
    TextBox(TextBox),
    /// See [`Prop`].
    Prop(Prop),
}

impl ObjectData {
    /// The kind of this object.
    pub fn kind(&self) -> ObjectKind {
        match self {
            ObjectData::Character(_) => ObjectKind::Character,
            ObjectData::Sound(_) => ObjectKind::Sound,
            ObjectData::DialogueBox(_) => ObjectKind::DialogueBox,
            ObjectData::TextBox(_) => ObjectKind::TextBox,
            ObjectData::Prop(_) => ObjectKind::Prop,
        }
    }

    /// The states of the object, if it has any notion of states.
    pub fn states(&self) -> Option<&[String]> {
        match self {
            ObjectData::Character(c) => Some(&c.states),
            ObjectData::Prop(p) => Some(&p.states),
            _ => None,
        }
    }

    /// The current state of the object, if it has any notion of states.
    pub fn current_state(&self) -> Option<&str> {
        match self {
            ObjectData::Character(c) => Some(&c.current_state),
            ObjectData::Prop(p) => Some(&p.current_state),
            _ => None,
        }
    }

    /// Switches the object to `state`. Returns the previous state, or `None` if the
    /// object has no states.
    pub fn set_current_state(&mut self, state: &str) -> Option<String> {
        let current = match self {
            ObjectData::Character(c) => &mut c.current_state,
            ObjectData::Prop(p) => &mut p.current_state,
            _ => return None,
        };
        Some(std::mem::replace(current, state.to_string()))
    }
}

impl From<Character> for ObjectData {
    fn from(value: Character) -> Self {
        ObjectData::Character(value)
    }
}

impl From<Sound> for ObjectData {
    fn from(value: Sound) -> Self {
        ObjectData::Sound(value)
    }
}

impl From<DialogueBox> for ObjectData {
    fn from(value: DialogueBox) -> Self {
        ObjectData::DialogueBox(value)
    }
}

impl From<TextBox> for ObjectData {
    fn from(value: TextBox) -> Self {
        ObjectData::TextBox(value)
    }
}

impl From<Prop> for ObjectData {
    fn from(value: Prop) -> Self {
        ObjectData::Prop(value)
    }
}
