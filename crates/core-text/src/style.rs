//! Styled Unicode alphabets.
//!
//! Post platforms strip rich formatting, but they keep plain Unicode. The
//! Mathematical Alphanumeric Symbols block carries bold, italic and monospace
//! renditions of the ASCII letters and digits, so "styling" a string is a pure
//! code point remap:
//!
//! - `A`..`Z` map to `upper + (ch - 'A')`
//! - `a`..`z` map to `lower + (ch - 'a')`
//! - `0`..`9` map to `digit + (ch - '0')`
//!
//! Anything else (punctuation, whitespace, emoji, characters that are already
//! styled) passes through untouched. Iteration is per scalar value, so astral
//! plane input is never split.
//!
//! Italic and bold italic have no digit block; digits stay ASCII under those
//! styles. Underline and strike are not remaps at all: they decorate each
//! character with a combining mark (see [`crate::mark`]).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::mark;

/// Base code points for one styled alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePointRange {
    pub upper: Option<u32>,
    pub lower: Option<u32>,
    pub digit: Option<u32>,
}

pub const BOLD: CodePointRange = CodePointRange {
    upper: Some(0x1D400),
    lower: Some(0x1D41A),
    digit: Some(0x1D7CE),
};

pub const ITALIC: CodePointRange = CodePointRange {
    upper: Some(0x1D434),
    lower: Some(0x1D44E),
    digit: None,
};

pub const BOLD_ITALIC: CodePointRange = CodePointRange {
    upper: Some(0x1D468),
    lower: Some(0x1D482),
    digit: None,
};

pub const MONOSPACE: CodePointRange = CodePointRange {
    upper: Some(0x1D670),
    lower: Some(0x1D68A),
    digit: Some(0x1D7F6),
};

// Lookup order for `to_plain`. Serif bold shares the bold table.
const PLAIN_LOOKUP: [CodePointRange; 4] = [BOLD, ITALIC, BOLD_ITALIC, MONOSPACE];

const LETTERS: u32 = 26;
const DIGITS: u32 = 10;

impl CodePointRange {
    /// Map one character into this alphabet, or return it unchanged.
    pub fn style(self, ch: char) -> char {
        let code = ch as u32;
        let mapped = match ch {
            'A'..='Z' => self.upper.map(|base| base + (code - 'A' as u32)),
            'a'..='z' => self.lower.map(|base| base + (code - 'a' as u32)),
            '0'..='9' => self.digit.map(|base| base + (code - '0' as u32)),
            _ => None,
        };
        mapped.and_then(char::from_u32).unwrap_or(ch)
    }

    /// Inverse of [`CodePointRange::style`]: `Some(ascii)` when `ch` lies in
    /// one of this alphabet's blocks.
    pub fn unstyle(self, ch: char) -> Option<char> {
        let code = ch as u32;
        let hit = |base: Option<u32>, len: u32, first: char| {
            base.filter(|b| (*b..*b + len).contains(&code))
                .and_then(|b| char::from_u32(first as u32 + (code - b)))
        };
        hit(self.upper, LETTERS, 'A')
            .or_else(|| hit(self.lower, LETTERS, 'a'))
            .or_else(|| hit(self.digit, DIGITS, '0'))
    }
}

/// Every style the composer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKind {
    Bold,
    Italic,
    BoldItalic,
    Monospace,
    /// Alias of `Bold`; the bold block is already serif.
    SerifBold,
    Underline,
    Strike,
}

impl StyleKind {
    pub const ALL: [StyleKind; 7] = [
        StyleKind::Bold,
        StyleKind::Italic,
        StyleKind::BoldItalic,
        StyleKind::Monospace,
        StyleKind::SerifBold,
        StyleKind::Underline,
        StyleKind::Strike,
    ];

    /// Alphabet table for remap styles; `None` for the combining-mark styles.
    pub const fn range(self) -> Option<CodePointRange> {
        match self {
            StyleKind::Bold | StyleKind::SerifBold => Some(BOLD),
            StyleKind::Italic => Some(ITALIC),
            StyleKind::BoldItalic => Some(BOLD_ITALIC),
            StyleKind::Monospace => Some(MONOSPACE),
            StyleKind::Underline | StyleKind::Strike => None,
        }
    }

    /// Combining mark for decoration styles.
    pub const fn mark(self) -> Option<char> {
        match self {
            StyleKind::Underline => Some(mark::UNDERLINE),
            StyleKind::Strike => Some(mark::STRIKE),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            StyleKind::Bold => "bold",
            StyleKind::Italic => "italic",
            StyleKind::BoldItalic => "boldItalic",
            StyleKind::Monospace => "monospace",
            StyleKind::SerifBold => "serifBold",
            StyleKind::Underline => "underline",
            StyleKind::Strike => "strike",
        }
    }
}

impl fmt::Display for StyleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseStyleError {
    #[error("unknown text style `{0}`")]
    Unknown(String),
}

impl FromStr for StyleKind {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim() {
            "bold" => StyleKind::Bold,
            "italic" => StyleKind::Italic,
            "boldItalic" | "bold_italic" | "bold-italic" => StyleKind::BoldItalic,
            "monospace" | "mono" => StyleKind::Monospace,
            "serifBold" | "serif_bold" | "serif-bold" => StyleKind::SerifBold,
            "underline" => StyleKind::Underline,
            "strike" | "strikethrough" => StyleKind::Strike,
            other => return Err(ParseStyleError::Unknown(other.to_string())),
        };
        Ok(kind)
    }
}

/// Render `text` in the given style.
///
/// Remap styles replace ASCII letters/digits one-for-one. Decoration styles
/// insert their combining mark after every non-newline character.
pub fn to_styled(text: &str, kind: StyleKind) -> String {
    match (kind.range(), kind.mark()) {
        (Some(range), _) => text.chars().map(|ch| range.style(ch)).collect(),
        (None, Some(m)) => mark::decorate(text, m),
        (None, None) => text.to_string(),
    }
}

/// Flatten any styled letters/digits back to ASCII.
///
/// Combining marks and everything outside the known alphabets pass through,
/// which makes this idempotent.
pub fn to_plain(text: &str) -> String {
    text.chars().map(plain_char).collect()
}

fn plain_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch;
    }
    PLAIN_LOOKUP
        .iter()
        .find_map(|range| range.unstyle(ch))
        .unwrap_or(ch)
}
