//! Classification of input events into edit actions.
//!
//! Every key event maps to exactly one [`EditAction`]; there is no error
//! outcome. Keys the editor does not intercept (navigation, Tab, Esc,
//! Ctrl/Alt/Super chords) classify as [`EditAction::Passthrough`] so the host
//! leaves their native behavior alone.

use crate::input::keyboard::{KeyCode, KeyEvent};

/// A discrete edit action applied to the masked editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// Insert a single printable character at the caret/selection.
    InsertChar(char),
    /// Insert a newline at the caret/selection.
    InsertNewline,
    /// Delete the selection, or the character before a collapsed caret.
    DeleteBackward,
    /// Delete the selection, or the character after a collapsed caret.
    DeleteForward,
    /// Insert pasted text at the caret/selection.
    Paste(String),
    /// Replace the entire buffer (the host's unmasked editing path).
    Replace(String),
    /// Not intercepted; the host keeps the event's native behavior.
    Passthrough,
}

impl EditAction {
    /// Check whether this action inserts characters into the buffer.
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        matches!(
            self,
            Self::InsertChar(_) | Self::InsertNewline | Self::Paste(_)
        )
    }
}

/// Classify a key event into an edit action.
///
/// Modifier chords are never intercepted, so shortcuts like select-all or
/// copy reach the host unchanged. Paste arrives through the host's paste
/// event rather than as a key, so Ctrl+V falling through here is intended.
#[must_use]
pub fn classify_key(event: &KeyEvent) -> EditAction {
    if event.is_chord() {
        return EditAction::Passthrough;
    }
    match event.code {
        KeyCode::Char(c) => EditAction::InsertChar(c),
        KeyCode::Enter => EditAction::InsertNewline,
        KeyCode::Backspace => EditAction::DeleteBackward,
        KeyCode::Delete => EditAction::DeleteForward,
        _ => EditAction::Passthrough,
    }
}
