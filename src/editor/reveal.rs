//! Transient disclosure state and the single reveal timer.
//!
//! After a character is typed or pasted it stays in clear form for
//! [`REVEAL_WINDOW`], then reverts to the mask glyph. [`RevealScheduler`]
//! owns the one pending deadline: scheduling always replaces any existing
//! deadline, so two reveal windows can never overlap and a stale expiry can
//! never revert a newer reveal. The host drives expiry by calling
//! [`MaskedEditor::poll`](super::MaskedEditor::poll) from its event loop.

use std::time::{Duration, Instant};

use crate::event::{LogLevel, emit_log};

/// How long a newly entered character stays visible.
pub const REVEAL_WINDOW: Duration = Duration::from_millis(2500);

/// Top-level disclosure mode of the editor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureMode {
    /// Masked editing: everything renders as the mask glyph except at most
    /// one transiently revealed character.
    #[default]
    Masked,
    /// The entire buffer renders in clear form until toggled off.
    RevealedAll,
}

/// Current disclosure state: mode plus the transiently revealed index.
///
/// While the mode is [`DisclosureMode::RevealedAll`], rendering ignores the
/// revealed index entirely; it is not necessarily reset on entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    mode: DisclosureMode,
    revealed: Option<usize>,
}

impl RevealState {
    /// Create a fully masked state with no transient disclosure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current disclosure mode.
    #[must_use]
    pub fn mode(&self) -> DisclosureMode {
        self.mode
    }

    /// Check if the whole buffer is currently shown in clear form.
    #[must_use]
    pub fn is_full_reveal(&self) -> bool {
        self.mode == DisclosureMode::RevealedAll
    }

    /// The transiently revealed index, if any.
    #[must_use]
    pub fn revealed_index(&self) -> Option<usize> {
        self.revealed
    }

    pub(crate) fn set_revealed(&mut self, revealed: Option<usize>) {
        self.revealed = revealed;
    }

    /// Switch disclosure mode.
    ///
    /// Entering [`DisclosureMode::RevealedAll`] cancels the pending reveal
    /// deadline (irrelevant while everything is visible) without touching the
    /// revealed index. Re-entering [`DisclosureMode::Masked`] starts fully
    /// masked: the last-edited character is not revealed again. Switching to
    /// the current mode is a no-op.
    pub fn enter(&mut self, mode: DisclosureMode, scheduler: &mut RevealScheduler) {
        if mode == self.mode {
            return;
        }
        match mode {
            DisclosureMode::RevealedAll => {
                scheduler.cancel();
            }
            DisclosureMode::Masked => {
                self.revealed = None;
            }
        }
        self.mode = mode;
    }
}

/// Owner of the single pending reveal deadline.
///
/// Deadline-based rather than callback-based: the host polls from its event
/// loop and repaints when the poll reports a change. Dropping the scheduler
/// drops the deadline with it, so there is nothing to clean up on unmount.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealScheduler {
    deadline: Option<Instant>,
}

impl RevealScheduler {
    /// Create a scheduler with no pending deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal `index` and arm the reversion deadline at `now + REVEAL_WINDOW`.
    ///
    /// Replaces any pending deadline; the most recent index wins.
    pub fn schedule(&mut self, state: &mut RevealState, index: usize, now: Instant) {
        state.set_revealed(Some(index));
        self.deadline = Some(now + REVEAL_WINDOW);
        emit_log(
            LogLevel::Debug,
            &format!("reveal window opened at index {index}"),
        );
    }

    /// Cancel any pending deadline and mask everything immediately.
    ///
    /// Used whenever an edit removes characters, so a deleted region can
    /// never remain revealed through a stale index.
    pub fn clear(&mut self, state: &mut RevealState) {
        self.deadline = None;
        state.set_revealed(None);
    }

    /// Cancel the pending deadline without touching the revealed index.
    fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Revert the reveal if the deadline has passed. Returns `true` when the
    /// state changed and the host should repaint.
    pub fn poll(&mut self, state: &mut RevealState, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                state.set_revealed(None);
                emit_log(LogLevel::Debug, "reveal window expired");
                true
            }
            _ => false,
        }
    }

    /// Check if a reversion deadline is armed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
