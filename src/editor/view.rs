//! Host view seam and caret restoration.
//!
//! The editor never talks to a concrete widget. After a mutation it hands the
//! derived display string and the target caret offset to the host through
//! [`HostView`], in a fixed two-phase order: the display commit first, the
//! caret placement only once that commit has landed. Placing the caret
//! against a stale rendering would let it land in mismatched content, so
//! [`CaretController`] centralizes the ordering instead of leaving it to each
//! call site.

/// The host-side text widget, as seen by the editor.
///
/// Implementations must apply `commit_display` to the widget before
/// `place_caret` runs; [`CaretController::sync`] calls them in that order
/// within one host event turn.
pub trait HostView {
    /// Apply the derived display string to the widget.
    fn commit_display(&mut self, display: &str);

    /// Set the widget's cursor to `offset` (a `char` offset into the
    /// display). Called only after the corresponding display commit.
    fn place_caret(&mut self, offset: usize);
}

/// Holds the caret offset computed by the latest edit until the display
/// commit it belongs to has been pushed to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CaretController {
    staged: Option<usize>,
}

impl CaretController {
    /// Create a controller with nothing staged.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the caret offset produced by a buffer mutation. A later edit in
    /// the same turn replaces the earlier target.
    pub fn stage(&mut self, offset: usize) {
        self.staged = Some(offset);
    }

    /// The staged caret offset, if an edit is awaiting a view sync.
    #[must_use]
    pub fn staged(&self) -> Option<usize> {
        self.staged
    }

    /// Push `display` to the view, then restore the staged caret.
    ///
    /// The caret is consumed: a sync with no intervening edit commits the
    /// display again (e.g. after a reveal expiry repaint) but leaves the
    /// host's cursor where the user put it.
    pub fn sync<V: HostView + ?Sized>(&mut self, display: &str, view: &mut V) {
        view.commit_display(display);
        if let Some(offset) = self.staged.take() {
            view.place_caret(offset);
        }
    }
}
