//! Property-based tests for the selection toggle reducer.

use core_state::{Selection, StyleSet, toggle_style};
use core_text::{Buffer, StyleKind};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = StyleKind> {
    prop::sample::select(StyleKind::ALL.to_vec())
}

fn text_and_span() -> impl Strategy<Value = (String, usize, usize)> {
    "[ -~\n]{0,40}".prop_flat_map(|s| {
        let len = s.chars().count();
        (Just(s), 0..=len, 0..=len)
    })
}

proptest! {
    // Toggling on then off restores ASCII text and the original span.
    #[test]
    fn on_off_restores_text((text, a, b) in text_and_span(), kind in any_kind()) {
        let sel = Selection::new(a, b);
        let on = toggle_style(Some(Buffer::new(&text)), sel, kind, StyleSet::empty());
        let off = toggle_style(on.buffer, on.selection, kind, on.active);
        prop_assert_eq!(off.buffer.map(|b| b.to_string()), Some(text));
        prop_assert_eq!(off.selection, sel);
        prop_assert!(off.active.is_empty());
    }

    // The returned selection always ends inside the new buffer and covers the rewrite.
    #[test]
    fn selection_tracks_output((text, a, b) in text_and_span(), kind in any_kind()) {
        let sel = Selection::new(a, b);
        let out = toggle_style(Some(Buffer::new(&text)), sel, kind, StyleSet::empty());
        let buf = out.buffer.expect("buffer kept");
        prop_assert_eq!(out.selection.start, sel.start);
        prop_assert!(out.selection.end <= buf.len_chars());
        prop_assert_eq!(
            buf.len_chars() - out.selection.len(),
            text.chars().count() - sel.len()
        );
    }

    // Active-set membership flips exactly once per toggle.
    #[test]
    fn active_set_flips(kind in any_kind(), caret in 0usize..8) {
        let out = toggle_style(
            Some(Buffer::new("12345678")),
            Selection::caret(caret),
            kind,
            StyleSet::empty(),
        );
        prop_assert!(out.active.has(kind));
        prop_assert_eq!(out.active.kinds().count(), 1);
        prop_assert!(!out.mutated);
    }
}
