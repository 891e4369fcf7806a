//! The masked editor: edit dispatch, reveal scheduling, caret staging.
//!
//! [`MaskedEditor`] ties the pieces together. For each input event the host
//! reads its widget's current selection, classifies the event (or lets
//! [`MaskedEditor::handle_key`] do it), and applies the resulting action.
//! The editor mutates the buffer, updates the reveal state per the
//! disclosure rules, stages the caret, and the host then calls
//! [`MaskedEditor::sync_view`] to push the new display string and restore
//! the cursor — in that order.
//!
//! Everything runs synchronously inside one host event turn; the only
//! deferred element is the reveal reversion, which the host drives by
//! calling [`MaskedEditor::poll`] from its event loop.

mod reveal;
mod view;

pub use reveal::{DisclosureMode, REVEAL_WINDOW, RevealScheduler, RevealState};
pub use view::{CaretController, HostView};

use crate::clock::{Clock, SystemClock};
use crate::event::{LogLevel, emit_log};
use crate::input::{EditAction, KeyEvent, classify_key};
use crate::text::{DeleteMode, SecretBuffer, Selection, render};

/// Outcome of dispatching an input event.
///
/// [`Dispatch::Handled`] means the editor consumed the event and the host
/// must suppress the widget's native handling (and sync the view).
/// [`Dispatch::Passthrough`] means the event was not intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The editor consumed the event.
    Handled,
    /// The event keeps its native behavior in the host widget.
    Passthrough,
}

/// A masked secret-message editor instance.
///
/// Owns its buffer, reveal state, and reveal deadline exclusively; nothing is
/// shared across instances and nothing persists when the instance is dropped.
#[derive(Debug)]
pub struct MaskedEditor<C: Clock = SystemClock> {
    buffer: SecretBuffer,
    reveal: RevealState,
    scheduler: RevealScheduler,
    caret: CaretController,
    clock: C,
}

impl MaskedEditor<SystemClock> {
    /// Create an empty editor on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for MaskedEditor<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> MaskedEditor<C> {
    /// Create an empty editor on an injected time source.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            buffer: SecretBuffer::new(),
            reveal: RevealState::new(),
            scheduler: RevealScheduler::new(),
            caret: CaretController::new(),
            clock,
        }
    }

    /// Classify and apply a key event against the widget's selection at the
    /// moment the event fired.
    pub fn handle_key(&mut self, event: KeyEvent, selection: Selection) -> Dispatch {
        self.apply(classify_key(&event), selection)
    }

    /// Apply pasted text against the widget's current selection.
    pub fn handle_paste(&mut self, text: &str, selection: Selection) -> Dispatch {
        self.apply(EditAction::Paste(text.to_string()), selection)
    }

    /// Apply a classified edit action.
    ///
    /// Every action has a defined outcome; boundary conditions (backspace at
    /// offset 0, forward delete at the end, empty paste) are no-ops that
    /// still count as handled.
    pub fn apply(&mut self, action: EditAction, selection: Selection) -> Dispatch {
        match action {
            EditAction::InsertChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert(c.encode_utf8(&mut tmp), selection);
            }
            EditAction::InsertNewline => self.insert("\n", selection),
            EditAction::DeleteBackward => self.remove(DeleteMode::Backspace, selection),
            EditAction::DeleteForward => self.remove(DeleteMode::Forward, selection),
            EditAction::Paste(text) => {
                // Empty paste: no buffer change, no reveal scheduling.
                if !text.is_empty() {
                    self.insert(&text, selection);
                }
            }
            EditAction::Replace(text) => self.replace_all(&text),
            EditAction::Passthrough => return Dispatch::Passthrough,
        }
        Dispatch::Handled
    }

    /// Replace the entire buffer verbatim, clearing any transient reveal.
    ///
    /// This is the host's unmasked editing path: while the message is fully
    /// revealed the widget can run its native editing and report the whole
    /// new value here. The caret is staged at the end of the new text.
    pub fn replace_all(&mut self, text: &str) {
        let caret = self.buffer.set_text(text);
        self.scheduler.clear(&mut self.reveal);
        self.caret.stage(caret);
    }

    /// Toggle between masked editing and full reveal.
    pub fn toggle_disclosure(&mut self) {
        let next = match self.reveal.mode() {
            DisclosureMode::Masked => DisclosureMode::RevealedAll,
            DisclosureMode::RevealedAll => DisclosureMode::Masked,
        };
        self.reveal.enter(next, &mut self.scheduler);
        emit_log(LogLevel::Info, &format!("disclosure mode -> {next:?}"));
    }

    /// Revert an expired reveal window. Returns `true` when the display
    /// changed and the host should repaint (via [`Self::sync_view`]).
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        self.scheduler.poll(&mut self.reveal, now)
    }

    /// Push the current display string to the host and restore the staged
    /// caret, commit first, caret second.
    pub fn sync_view<V: HostView + ?Sized>(&mut self, view: &mut V) {
        let display = self.display();
        self.caret.sync(&display, view);
    }

    /// The authoritative secret value, read verbatim on submit.
    #[must_use]
    pub fn value(&self) -> String {
        self.buffer.text()
    }

    /// The derived display string for the next paint.
    #[must_use]
    pub fn display(&self) -> String {
        render(&self.buffer, &self.reveal)
    }

    /// Buffer length in `char`s.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Check if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The current disclosure mode.
    #[must_use]
    pub fn disclosure(&self) -> DisclosureMode {
        self.reveal.mode()
    }

    /// The transiently revealed index, if any.
    #[must_use]
    pub fn revealed_index(&self) -> Option<usize> {
        self.reveal.revealed_index()
    }

    /// Check if a reveal reversion deadline is armed.
    #[must_use]
    pub fn has_pending_reveal(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// The caret offset staged by the latest edit, if the host has not
    /// synced it yet.
    #[must_use]
    pub fn staged_caret(&self) -> Option<usize> {
        self.caret.staged()
    }

    fn insert(&mut self, text: &str, selection: Selection) {
        debug_assert!(!text.is_empty());
        let caret = self.buffer.replace_range(text, selection);
        if !self.reveal.is_full_reveal() {
            // Reveal the last character of the inserted run at the buffer
            // index it now occupies, which for mid-string insertions is not
            // the end of the string.
            self.scheduler
                .schedule(&mut self.reveal, caret - 1, self.clock.now());
        }
        self.caret.stage(caret);
    }

    fn remove(&mut self, mode: DeleteMode, selection: Selection) {
        let caret = self.buffer.delete(mode, selection);
        if !self.reveal.is_full_reveal() {
            self.scheduler.clear(&mut self.reveal);
        }
        self.caret.stage(caret);
    }
}
