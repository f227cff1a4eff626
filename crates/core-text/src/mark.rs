//! Combining-mark decoration (underline / strikethrough in plain text).
//!
//! A combining mark renders on top of the scalar value before it, so
//! decorating means inserting the mark after every character. Newlines are
//! skipped to keep line structure intact.

/// U+0332 COMBINING LOW LINE.
pub const UNDERLINE: char = '\u{0332}';
/// U+0336 COMBINING LONG STROKE OVERLAY.
pub const STRIKE: char = '\u{0336}';

pub fn decorate(text: &str, mark: char) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        out.push(ch);
        if ch != '\n' {
            out.push(mark);
        }
    }
    out
}

/// Remove every occurrence of `mark`; other combining marks are kept.
pub fn strip_mark(text: &str, mark: char) -> String {
    text.chars().filter(|&ch| ch != mark).collect()
}
