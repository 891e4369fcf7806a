//! Secret text storage and mask rendering.
//!
//! [`SecretBuffer`] holds the authoritative secret string; [`render`] derives
//! the on-screen string from the buffer and the current reveal state. All
//! offsets throughout this module are `char` offsets, matching what a host
//! text widget reports as its selection.

mod buffer;
mod mask;

pub use buffer::{DeleteMode, SecretBuffer, Selection};
pub use mask::{MASK_GLYPH, render};
