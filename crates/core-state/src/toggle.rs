//! Selection style toggle: a pure reducer over
//! `(buffer, selection, active set, kind) -> (buffer, selection, active set)`.
//!
//! Rules:
//! - The toggled kind always flips in the active set, selection or not.
//! - A caret-only selection never touches text.
//! - Otherwise the selected span is rewritten. Activation restyles it
//!   (alphabet remap or combining mark); deactivation flattens remaps via
//!   `to_plain` or strips that one mark.
//! - The returned selection covers exactly the rewritten span so chained
//!   toggles keep working on the same logical text.
//!
//! Telemetry: one `state.toggle` trace event per call with span sizes only.

use core_text::{Buffer, StyleKind, strip_mark, to_plain, to_styled};
use tracing::trace;

use crate::{Selection, StyleSet};

#[derive(Debug, Clone)]
pub struct ToggleOutcome {
    pub buffer: Option<Buffer>,
    pub selection: Selection,
    pub active: StyleSet,
    /// Whether the style was switched on by this toggle.
    pub activated: bool,
    /// Whether any text was rewritten.
    pub mutated: bool,
}

/// Restyle a span for activation or deactivation of `kind`.
pub fn restyle_span(text: &str, kind: StyleKind, activating: bool) -> String {
    match (kind.mark(), activating) {
        (_, true) => to_styled(text, kind),
        (Some(mark), false) => strip_mark(text, mark),
        (None, false) => to_plain(text),
    }
}

/// Apply one toggle. `selection` must already lie within the buffer.
pub fn toggle_style(
    buffer: Option<Buffer>,
    selection: Selection,
    kind: StyleKind,
    active: StyleSet,
) -> ToggleOutcome {
    let activated = !active.has(kind);
    let active = active ^ StyleSet::of(kind);

    let Some(mut buffer) = buffer else {
        trace!(target: "state.toggle", %kind, activated, "toggle_without_buffer");
        return ToggleOutcome {
            buffer: None,
            selection,
            active,
            activated,
            mutated: false,
        };
    };

    if selection.is_empty() {
        trace!(target: "state.toggle", %kind, activated, caret = selection.start, "toggle_intent_only");
        return ToggleOutcome {
            buffer: Some(buffer),
            selection,
            active,
            activated,
            mutated: false,
        };
    }

    let selected = buffer.slice(selection.start, selection.end);
    let replacement = restyle_span(&selected, kind, activated);
    let produced = buffer.replace(selection.start, selection.end, &replacement);
    trace!(
        target: "state.toggle",
        %kind,
        activated,
        selected_chars = selection.len(),
        produced_chars = produced,
        "toggle_applied"
    );
    ToggleOutcome {
        buffer: Some(buffer),
        selection: Selection::new(selection.start, selection.start + produced),
        active,
        activated,
        mutated: true,
    }
}
