//! Editor settings, read from RON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_ron::de::from_bytes;
use tracing::info;

use crate::errors::ConfigError;

/// Initial values of new dialogue lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueDefaults {
    /// Volume of the line's sound.
    pub sound_volume: i32,
    /// Text speed used when a line overrides the project speed.
    pub text_speed: i32,
}

impl Default for DialogueDefaults {
    fn default() -> Self {
        Self {
            sound_volume: 100,
            text_speed: 50,
        }
    }
}

/// Settings of the action editor. Every field is optional in the RON source.
///
/// ```
/// use scene_actions::config::EditorConfig;
///
/// let config = EditorConfig::from_ron("(dialogue: (text_speed: 20))").unwrap();
/// assert_eq!(config.dialogue.text_speed, 20);
/// assert_eq!(config.dialogue.sound_volume, 100);
/// assert!(config.select_pasted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial values of new dialogue lines.
    pub dialogue: DialogueDefaults,
    /// Whether pasted actions become the selection.
    pub select_pasted: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dialogue: DialogueDefaults::default(),
            select_pasted: true,
        }
    }
}

impl EditorConfig {
    /// Parses the configuration from RON text.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        Self::from_ron_bytes(source.as_bytes())
    }

    /// Parses the configuration from RON bytes.
    pub fn from_ron_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        Ok(from_bytes(bytes)?)
    }

    /// Reads the configuration from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let config = Self::from_ron_bytes(&bytes)?;
        info!("loaded editor configuration from {}", path.display());
        Ok(config)
    }
}
