//! Errors that can happen at the edges of the crate.
//!
//! Actions themselves never fail: unresolved names fall back and malformed input is
//! read as plain text. Only rebuilding actions from foreign data and loading the
//! configuration report errors.

use thiserror::Error;

/// Errors when rebuilding an action from its data.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The data has no string `type` key.
    #[error("the action data has no type")]
    MissingType,
    /// The `type` key names no known action variant.
    #[error("unknown action type {0:?}")]
    UnknownType(String),
}

/// Errors when pasting actions from a clipboard payload.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum PasteError {
    /// The payload is not a JSON list of objects.
    #[error("could not decode the clipboard payload: {0}")]
    Payload(#[from] serde_json::Error),
    /// An entry of the payload could not be turned into an action.
    #[error("entry {index} of the clipboard payload is not an action: {source}")]
    Action {
        /// Position of the entry in the payload.
        index: usize,
        /// Why the entry was rejected.
        source: ActionError,
    },
}

/// Errors when loading the editor configuration.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An [IO Error](std::io::Error)
    #[error("could not read the configuration: {0}")]
    Io(#[from] std::io::Error),
    /// A [RON Error](serde_ron::error::SpannedError)
    #[error("could not parse the configuration: {0}")]
    Ron(#[from] serde_ron::error::SpannedError),
}
