//! Text primitives for the post composer: styled alphabets, combining-mark
//! decoration, and a rope-backed edit buffer.
//!
//! All offsets exposed here count Unicode scalar values (Rust `char`s), not
//! bytes and not UTF-16 units. Selections coming from a host editor must be
//! converted before they reach this crate.

use std::fmt;

use ropey::Rope;

pub mod mark;
pub mod style;

pub use mark::{decorate, strip_mark};
pub use style::{CodePointRange, ParseStyleError, StyleKind, to_plain, to_styled};

/// An editable text buffer backed by a `ropey::Rope`.
#[derive(Clone, Default)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    pub fn new(content: &str) -> Self {
        Self {
            rope: Rope::from_str(content),
        }
    }

    /// Length in scalar values.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Owned copy of the char range `[start, end)`.
    /// Caller guarantees `start <= end <= len_chars()`.
    pub fn slice(&self, start: usize, end: usize) -> String {
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    /// Replace the char range `[start, end)` with `text`, returning the
    /// number of chars inserted.
    pub fn replace(&mut self, start: usize, end: usize, text: &str) -> usize {
        if start < end {
            self.rope.remove(start..end);
        }
        self.rope.insert(start, text);
        text.chars().count()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("chars", &self.len_chars())
            .field("lines", &self.line_count())
            .finish()
    }
}

impl From<&str> for Buffer {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}
