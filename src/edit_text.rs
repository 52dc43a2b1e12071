//! The one-line quick-edit form of a dialogue line: `Name: "text"`.
//!
//! The speaker is everything before the first colon, the text is quoted with either
//! double or single quotes and may span several lines. Input that does not have that
//! shape is plain text said by nobody.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Matches `Name: "text"` and `Name: 'text'`.
static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r#"^(?P<name>[^:]+):( )*(("(?P<text1>.*)")|('(?P<text2>.*)'))$"#)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("speaker line pattern is valid")
});

/// A decoded quick-edit text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditText {
    /// Who says the line. `None` when the input had no speaker.
    pub speaker: Option<String>,
    /// The line itself.
    pub text: String,
}

/// Splits quick-edit input into speaker and text.
///
/// ```
/// use scene_actions::edit_text::decode;
///
/// let line = decode(r#"Alice: "It's 'fine'""#);
/// assert_eq!(line.speaker.as_deref(), Some("Alice"));
/// assert_eq!(line.text, "It's 'fine'");
///
/// let line = decode("  just words ");
/// assert_eq!(line.speaker, None);
/// assert_eq!(line.text, "just words");
/// ```
pub fn decode(raw: &str) -> EditText {
    let raw = raw.trim();
    let Some(captures) = SPEAKER_LINE.captures(raw) else {
        return EditText {
            speaker: None,
            text: raw.to_string(),
        };
    };

    let text = captures
        .name("text1")
        .or_else(|| captures.name("text2"))
        .map_or("", |m| m.as_str());
    EditText {
        speaker: Some(captures["name"].to_string()),
        text: text.to_string(),
    }
}

/// Builds the quick-edit form of a line. Without a speaker the text is left bare.
pub fn encode(speaker: &str, text: &str) -> String {
    if speaker.is_empty() {
        text.to_string()
    } else {
        format!("{speaker}: \"{text}\"")
    }
}
