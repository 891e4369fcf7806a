//! Input event model and edit-action classification.
//!
//! The host forwards its key events (already decoded by whatever input layer
//! it uses) as [`KeyEvent`] values. [`classify_key`] maps each event onto the
//! editor's small action vocabulary; navigation keys and modifier chords come
//! back as [`EditAction::Passthrough`] and keep their native behavior.

mod action;
mod keyboard;

pub use action::{EditAction, classify_key};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
