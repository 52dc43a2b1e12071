#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![forbid(unsafe_code)]
#![warn(clippy::doc_markdown)]

//! [`scene_actions`] is the data core of a visual novel editor: the scripted
//! actions of a scene (dialogue lines, state changes), bound live to the scene
//! objects they act on while they are being edited.
//!
//! Actions refer to characters, sounds and text boxes by name. While an action is
//! the current one in the editor it is bound to the live objects: it renders into
//! its dialogue box, follows renames of its speaker and lets go of objects that are
//! deleted. Everything it did to the scene is undone when it is deactivated.

pub mod actions;
pub mod binding;
pub mod config;
pub mod edit_text;
pub mod editor;
pub mod errors;
pub mod prelude;
pub mod scene;
pub mod signal;
