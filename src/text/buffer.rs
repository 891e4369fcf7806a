//! Authoritative secret string with caret-relative edit operations.
//!
//! [`SecretBuffer`] is rope-backed and mutated only through
//! [`replace_range`](SecretBuffer::replace_range) and
//! [`delete`](SecretBuffer::delete). Both clamp the incoming selection
//! against the current length, so out-of-range offsets from a stale view
//! degrade to no-ops instead of panicking, and both return the caret offset
//! the view should restore after the edit.

use ropey::Rope;

/// The active caret or highlighted range at the moment an edit begins.
///
/// Read from the host view at the start of each operation; not persisted
/// between operations. Offsets are `char` offsets into the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Start offset (inclusive).
    pub start: usize,
    /// End offset (exclusive). Equal to `start` for a collapsed caret.
    pub end: usize,
}

impl Selection {
    /// Create a collapsed caret at `offset`.
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Create a selection spanning `[start, end)`, normalizing order.
    #[must_use]
    pub fn range(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Check if this is a collapsed caret rather than a highlighted range.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamp both offsets to `len`, preserving order.
    fn clamp(self, len: usize) -> (usize, usize) {
        let start = self.start.min(len);
        let end = self.end.min(len).max(start);
        (start, end)
    }
}

/// Which side of a collapsed caret a single-character delete removes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteMode {
    /// Remove the character before the caret.
    Backspace,
    /// Remove the character after the caret.
    Forward,
}

/// The authoritative secret string.
///
/// Owned exclusively by one editor instance. Length is unbounded; nothing is
/// implicitly truncated.
#[derive(Clone, Debug, Default)]
pub struct SecretBuffer {
    rope: Rope,
}

impl SecretBuffer {
    /// Create a new empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer with initial text.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Length in `char`s.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Iterate over the buffer's characters.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    /// The full secret string.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Remove `[selection.start, selection.end)` and insert `text` at the
    /// start. Returns the resulting caret offset, `start + len(text)`.
    ///
    /// `text` may be empty (pure range removal) or multi-character (paste).
    pub fn replace_range(&mut self, text: &str, selection: Selection) -> usize {
        let (start, end) = selection.clamp(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
        if !text.is_empty() {
            self.rope.insert(start, text);
        }
        start + text.chars().count()
    }

    /// Delete per `mode` at `selection`. Returns the resulting caret offset.
    ///
    /// A highlighted range is removed outright regardless of `mode`. For a
    /// collapsed caret, [`DeleteMode::Backspace`] removes the character
    /// before it (no-op at offset 0) and [`DeleteMode::Forward`] removes the
    /// character after it (no-op at the end of the buffer).
    pub fn delete(&mut self, mode: DeleteMode, selection: Selection) -> usize {
        let (start, end) = selection.clamp(self.len_chars());
        if start != end {
            self.rope.remove(start..end);
            return start;
        }
        match mode {
            DeleteMode::Backspace => {
                if start == 0 {
                    return 0;
                }
                self.rope.remove(start - 1..start);
                start - 1
            }
            DeleteMode::Forward => {
                if start < self.len_chars() {
                    self.rope.remove(start..start + 1);
                }
                start
            }
        }
    }

    /// Replace the entire contents. Returns the caret offset (the new end).
    pub fn set_text(&mut self, text: &str) -> usize {
        self.rope = Rope::from_str(text);
        self.len_chars()
    }
}
