//! `maskpad` - masked secret-message editor core
//!
//! A UI-framework-agnostic implementation of a masked text field: the editor
//! owns an authoritative secret string, shows only the most recently typed or
//! pasted character for a bounded window, and renders every other character
//! as a mask glyph while still supporting caret-accurate insert, delete, and
//! paste editing plus an explicit full-reveal mode.
//!
//! The host (a form, a TUI widget, a web view) feeds key and paste events in,
//! reads the derived display string out, and reads the authoritative value
//! when the user submits. Rendering and timer dispatch stay on the host side:
//! the editor exposes a [`HostView`] seam for display/caret commits and an
//! injectable [`Clock`] so the reveal window is deterministic under test.
//!
//! # Example
//!
//! ```
//! use maskpad::{MaskedEditor, Selection};
//!
//! let mut editor = MaskedEditor::new();
//! editor.handle_key('H'.into(), Selection::caret(0));
//! editor.handle_key('i'.into(), Selection::caret(1));
//!
//! // Authoritative value is intact; only the newest character shows.
//! assert_eq!(editor.value(), "Hi");
//! assert_eq!(editor.display(), "*i");
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow SecretBuffer in text module etc
#![allow(clippy::missing_errors_doc)] // No fallible public API
#![allow(clippy::missing_panics_doc)] // Public API does not panic
#![allow(clippy::must_use_candidate)] // Applied where it matters
#![allow(clippy::missing_const_for_fn)] // Const-ness is not a goal here
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks

pub mod clock;
pub mod editor;
pub mod event;
pub mod input;
pub mod text;

// Re-export core types at crate root
pub use clock::{Clock, ManualClock, SystemClock};
pub use editor::{
    CaretController, DisclosureMode, Dispatch, HostView, MaskedEditor, REVEAL_WINDOW,
    RevealScheduler, RevealState,
};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use input::{EditAction, KeyCode, KeyEvent, KeyModifiers, classify_key};
pub use text::{DeleteMode, MASK_GLYPH, SecretBuffer, Selection, render};
