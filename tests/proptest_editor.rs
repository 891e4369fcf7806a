//! Property-based tests for the masked editor.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs:
//! the display is length-preserving and leak-free in masked mode, rendering
//! is pure, and arbitrary edit sequences keep caret and reveal state in
//! range.

use maskpad::{
    DeleteMode, EditAction, ManualClock, MaskedEditor, REVEAL_WINDOW, SecretBuffer, Selection,
};
use proptest::prelude::*;
use std::time::Duration;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary UTF-8 strings (proptest default, printable).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,60}"
}

/// A single edit action with selection offsets (clamped by the buffer).
#[derive(Clone, Debug)]
enum Step {
    Type(char),
    Paste(String),
    Backspace(usize, usize),
    ForwardDelete(usize, usize),
    AdvanceAndPoll(u64),
    Toggle,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        any::<char>().prop_map(Step::Type),
        "\\PC{0,10}".prop_map(Step::Paste),
        (0usize..80, 0usize..80).prop_map(|(a, b)| Step::Backspace(a, b)),
        (0usize..80, 0usize..80).prop_map(|(a, b)| Step::ForwardDelete(a, b)),
        (0u64..6000).prop_map(Step::AdvanceAndPoll),
        Just(Step::Toggle),
    ]
}

fn apply_step(editor: &mut MaskedEditor<ManualClock>, clock: &ManualClock, step: &Step) {
    match step {
        Step::Type(c) => {
            let caret = editor.len_chars();
            editor.apply(EditAction::InsertChar(*c), Selection::caret(caret));
        }
        Step::Paste(text) => {
            let caret = editor.len_chars();
            editor.handle_paste(text, Selection::caret(caret));
        }
        Step::Backspace(a, b) => {
            editor.apply(EditAction::DeleteBackward, Selection::range(*a, *b));
        }
        Step::ForwardDelete(a, b) => {
            editor.apply(EditAction::DeleteForward, Selection::range(*a, *b));
        }
        Step::AdvanceAndPoll(ms) => {
            clock.advance(Duration::from_millis(*ms));
            editor.poll();
        }
        Step::Toggle => editor.toggle_disclosure(),
    }
}

// ============================================================================
// Rendering Properties
// ============================================================================

proptest! {
    /// Masked display always has the same char length as the buffer.
    #[test]
    fn masked_display_preserves_length(text in utf8_string()) {
        let clock = ManualClock::new();
        let mut editor = MaskedEditor::with_clock(clock.clone());
        editor.handle_paste(&text, Selection::caret(0));

        prop_assert_eq!(editor.display().chars().count(), editor.len_chars());

        clock.advance(REVEAL_WINDOW);
        editor.poll();
        prop_assert_eq!(editor.display().chars().count(), editor.len_chars());
    }

    /// At most one character is ever in clear form in masked mode, and it is
    /// the character the buffer actually holds at the revealed index.
    #[test]
    fn masked_display_leaks_at_most_one_char(text in utf8_string()) {
        let mut editor = MaskedEditor::with_clock(ManualClock::new());
        editor.handle_paste(&text, Selection::caret(0));

        let display: Vec<char> = editor.display().chars().collect();
        let value: Vec<char> = editor.value().chars().collect();
        let clear: Vec<usize> = display
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != '*')
            .map(|(i, _)| i)
            .collect();

        prop_assert!(clear.len() <= 1);
        if let Some(&index) = clear.first() {
            prop_assert_eq!(Some(index), editor.revealed_index());
            prop_assert_eq!(display[index], value[index]);
        }
    }

    /// Rendering is pure: two renders of the same state are identical.
    #[test]
    fn render_is_idempotent(text in utf8_string()) {
        let mut editor = MaskedEditor::with_clock(ManualClock::new());
        editor.handle_paste(&text, Selection::caret(0));
        prop_assert_eq!(editor.display(), editor.display());
    }

    /// Full reveal always shows the buffer verbatim.
    #[test]
    fn full_reveal_shows_value(text in utf8_string()) {
        let mut editor = MaskedEditor::with_clock(ManualClock::new());
        editor.handle_paste(&text, Selection::caret(0));
        editor.toggle_disclosure();
        prop_assert_eq!(editor.display(), editor.value());
    }
}

// ============================================================================
// Buffer Operation Properties
// ============================================================================

proptest! {
    /// Insert caret lands at start + len(text) (clamped start), within bounds.
    #[test]
    fn insert_caret_in_bounds(
        initial in utf8_string(),
        insert in "\\PC{0,10}",
        a in 0usize..80,
        b in 0usize..80,
    ) {
        let mut buf = SecretBuffer::with_text(&initial);
        let caret = buf.replace_range(&insert, Selection::range(a, b));
        prop_assert!(caret <= buf.len_chars());
    }

    /// Delete never grows the buffer and leaves the caret in bounds.
    #[test]
    fn delete_caret_in_bounds(
        initial in utf8_string(),
        a in 0usize..80,
        b in 0usize..80,
        backspace in any::<bool>(),
    ) {
        let mut buf = SecretBuffer::with_text(&initial);
        let before = buf.len_chars();
        let mode = if backspace { DeleteMode::Backspace } else { DeleteMode::Forward };
        let caret = buf.delete(mode, Selection::range(a, b));
        prop_assert!(buf.len_chars() <= before);
        prop_assert!(caret <= buf.len_chars());
    }
}

// ============================================================================
// Whole-Editor State Machine Properties
// ============================================================================

proptest! {
    /// Arbitrary event sequences keep every invariant: revealed index in
    /// range or cleared, no reveal scheduling in full-reveal mode, display
    /// length matching buffer length in masked mode.
    #[test]
    fn random_sessions_hold_invariants(steps in prop::collection::vec(step(), 0..40)) {
        let clock = ManualClock::new();
        let mut editor = MaskedEditor::with_clock(clock.clone());

        for s in &steps {
            apply_step(&mut editor, &clock, s);

            if let Some(index) = editor.revealed_index() {
                if !matches!(editor.disclosure(), maskpad::DisclosureMode::RevealedAll) {
                    prop_assert!(
                        index < editor.len_chars(),
                        "revealed index {} out of range for len {}",
                        index,
                        editor.len_chars()
                    );
                }
            }

            let display_len = editor.display().chars().count();
            prop_assert_eq!(display_len, editor.len_chars());
        }
    }

    /// After the reveal window passes with no edits, nothing stays revealed.
    #[test]
    fn expiry_always_masks(steps in prop::collection::vec(step(), 0..20)) {
        let clock = ManualClock::new();
        let mut editor = MaskedEditor::with_clock(clock.clone());
        for s in &steps {
            apply_step(&mut editor, &clock, s);
        }

        clock.advance(REVEAL_WINDOW);
        editor.poll();
        if !matches!(editor.disclosure(), maskpad::DisclosureMode::RevealedAll) {
            prop_assert!(editor.display().chars().all(|c| c == '*'));
        }
    }
}
