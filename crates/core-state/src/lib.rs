//! Editing session state: text buffer, selection, and the active style set.
//!
//! The session is a thin owner around the pure reducer in [`toggle`]. Hosts
//! feed it caret/selection updates and style toggles; the composed text it
//! holds is what gets copied out or rendered onto the card.
//!
//! Selection offsets are 0-based char (scalar value) indices. `start == end`
//! is a caret with nothing selected.

use core_text::{Buffer, StyleKind};

pub mod toggle;
pub use toggle::{ToggleOutcome, restyle_span, toggle_style};

/// Half-open char range `[start, end)` over the session buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Construct a selection normalizing ordering so that `start <= end`.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends into `0..=len`. Hosts call this before handing a
    /// selection to [`toggle_style`], which does not re-validate.
    pub fn clamped(self, len: usize) -> Self {
        Self::new(self.start.min(len), self.end.min(len))
    }
}

bitflags::bitflags! {
    /// Styles currently toggled on in the session. UI intent only: existing
    /// text is never restyled when this set changes on its own.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleSet: u8 {
        const BOLD        = 0b0000_0001;
        const ITALIC      = 0b0000_0010;
        const BOLD_ITALIC = 0b0000_0100;
        const MONOSPACE   = 0b0000_1000;
        const SERIF_BOLD  = 0b0001_0000;
        const UNDERLINE   = 0b0010_0000;
        const STRIKE      = 0b0100_0000;
    }
}

impl StyleSet {
    pub const fn of(kind: StyleKind) -> Self {
        match kind {
            StyleKind::Bold => Self::BOLD,
            StyleKind::Italic => Self::ITALIC,
            StyleKind::BoldItalic => Self::BOLD_ITALIC,
            StyleKind::Monospace => Self::MONOSPACE,
            StyleKind::SerifBold => Self::SERIF_BOLD,
            StyleKind::Underline => Self::UNDERLINE,
            StyleKind::Strike => Self::STRIKE,
        }
    }

    pub fn has(&self, kind: StyleKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Styles in the set, in `StyleKind::ALL` order.
    pub fn kinds(&self) -> impl Iterator<Item = StyleKind> + '_ {
        StyleKind::ALL.into_iter().filter(|k| self.has(*k))
    }
}

/// One composer editing session.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    buffer: Option<Buffer>,
    selection: Selection,
    active: StyleSet,
}

impl EditSession {
    pub fn new(content: &str) -> Self {
        Self {
            buffer: Some(Buffer::new(content)),
            ..Self::default()
        }
    }

    /// A session with no backing text; toggles only change the active set.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn text(&self) -> Option<String> {
        self.buffer.as_ref().map(Buffer::to_string)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn active(&self) -> StyleSet {
        self.active
    }

    /// Move the selection; out-of-range offsets are clamped to the buffer.
    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.buffer.as_ref().map_or(0, Buffer::len_chars);
        self.selection = Selection::new(start, end).clamped(len);
    }

    /// Replace the whole text (host keystrokes), keeping the caret in range.
    pub fn set_text(&mut self, content: &str) {
        let buffer = Buffer::new(content);
        self.selection = self.selection.clamped(buffer.len_chars());
        self.buffer = Some(buffer);
    }

    /// Toggle `kind`; returns true when text was rewritten.
    pub fn toggle(&mut self, kind: StyleKind) -> bool {
        let outcome = toggle_style(self.buffer.take(), self.selection, kind, self.active);
        let mutated = outcome.mutated;
        self.buffer = outcome.buffer;
        self.selection = outcome.selection;
        self.active = outcome.active;
        mutated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_normalizes_and_clamps() {
        let sel = Selection::new(7, 2);
        assert_eq!(sel, Selection { start: 2, end: 7 });
        assert_eq!(sel.len(), 5);
        assert_eq!(sel.clamped(4), Selection { start: 2, end: 4 });
        assert!(Selection::caret(3).is_empty());
    }

    #[test]
    fn style_set_tracks_kinds_separately() {
        let mut set = StyleSet::empty();
        set.toggle(StyleSet::of(StyleKind::Bold));
        assert!(set.has(StyleKind::Bold));
        assert!(!set.has(StyleKind::SerifBold));
        set.toggle(StyleSet::of(StyleKind::Strike));
        assert_eq!(
            set.kinds().collect::<Vec<_>>(),
            vec![StyleKind::Bold, StyleKind::Strike]
        );
    }

    #[test]
    fn session_select_clamps_to_text() {
        let mut s = EditSession::new("abc");
        s.select(1, 99);
        assert_eq!(s.selection(), Selection { start: 1, end: 3 });
    }

    #[test]
    fn session_bold_then_unbold() {
        let mut s = EditSession::new("make it bold");
        s.select(8, 12);
        assert!(s.toggle(StyleKind::Bold));
        let bold = core_text::to_styled("bold", StyleKind::Bold);
        assert_eq!(s.text().unwrap(), format!("make it {bold}"));
        assert!(s.active().has(StyleKind::Bold));
        assert!(s.toggle(StyleKind::Bold));
        assert_eq!(s.text().unwrap(), "make it bold");
        assert!(s.active().is_empty());
    }

    #[test]
    fn detached_session_only_flips_intent() {
        let mut s = EditSession::detached();
        s.select(0, 4);
        assert!(!s.toggle(StyleKind::Italic));
        assert!(s.active().has(StyleKind::Italic));
        assert_eq!(s.text(), None);
    }

    #[test]
    fn set_text_pulls_selection_in() {
        let mut s = EditSession::new("longer text");
        s.select(2, 10);
        s.set_text("tiny");
        assert_eq!(s.selection(), Selection { start: 2, end: 4 });
    }
}
