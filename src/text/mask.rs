//! Mask rendering: derive the on-screen string from buffer and reveal state.

use crate::editor::RevealState;
use crate::text::buffer::SecretBuffer;

/// The substitute character shown in place of a hidden character.
pub const MASK_GLYPH: char = '*';

/// Derive the display string for the current paint.
///
/// In full-reveal mode the buffer is returned unchanged. Otherwise every
/// character renders as [`MASK_GLYPH`] except the transiently revealed index,
/// if any. A revealed index at or past the buffer length is treated as none.
///
/// Pure: no side effects, re-derivable at any time from `(buffer, reveal)`
/// alone, and length-preserving in `char`s.
#[must_use]
pub fn render(buffer: &SecretBuffer, reveal: &RevealState) -> String {
    if reveal.is_full_reveal() {
        return buffer.text();
    }
    let revealed = reveal
        .revealed_index()
        .filter(|&index| index < buffer.len_chars());
    buffer
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            if Some(index) == revealed {
                ch
            } else {
                MASK_GLYPH
            }
        })
        .collect()
}
