//! Free-text transforms applied before styling: punctuation enrichment,
//! hashtag blocks, sentence casing, and post composition.
//!
//! Every function here is pure and total over `&str`; none of them can fail.

use std::sync::LazyLock;

use regex::Regex;

pub mod compose;
pub mod hashtag;

pub use compose::{
    ComposeOptions, ComposedText, ParseTemplateError, Template, compose, file_stem,
};
pub use hashtag::append_hashtags;

static ELLIPSIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.{3}").expect("ELLIPSIS_RE is a valid static regex pattern"));
static EM_DASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" ?-- ?").expect("EM_DASH_RE is a valid static regex pattern"));
static DOUBLE_QUOTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^\n\r\x{2028}\x{2029}]*?)""#).expect("DOUBLE_QUOTE_RE is a valid static regex pattern")
});
static SINGLE_QUOTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'([^\n\r\x{2028}\x{2029}]*?)'").expect("SINGLE_QUOTE_RE is a valid static regex pattern"));
static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:\*|-)\s+").expect("BULLET_RE is a valid static regex pattern")
});
static SPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("SPACE_RUN_RE is a valid static regex pattern"));
static SENTENCE_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|\. )([A-Za-z0-9_])").expect("SENTENCE_START_RE is a valid static regex pattern")
});

/// Light-touch punctuation cleanup.
///
/// Rules run in a fixed order since later ones see earlier output:
/// 1. `...` becomes `…` (each non-overlapping triple, left to right, so
///    `....` becomes `….`)
/// 2. `--` with optional single spaces around it becomes ` — `
/// 3. `"x"` becomes `“x”` (lazy, never across `\n`, `\r`, U+2028, U+2029)
/// 4. `'x'` becomes `‘x’`
/// 5. a line starting with `*` or `-` plus whitespace becomes `• `
/// 6. runs of spaces collapse to one
/// 7. the result is trimmed of whitespace and the BOM (NEL is kept)
pub fn enrich(text: &str) -> String {
    let s = ELLIPSIS_RE.replace_all(text, "…");
    let s = EM_DASH_RE.replace_all(&s, " — ");
    let s = DOUBLE_QUOTE_RE.replace_all(&s, "“${1}”");
    let s = SINGLE_QUOTE_RE.replace_all(&s, "‘${1}’");
    let s = BULLET_RE.replace_all(&s, "• ");
    let s = SPACE_RUN_RE.replace_all(&s, " ");
    s.trim_matches(is_trimmable).to_string()
}

// Whitespace and line terminators, minus NEL (U+0085), plus the BOM.
fn is_trimmable(ch: char) -> bool {
    (ch.is_whitespace() && ch != '\u{85}') || ch == '\u{FEFF}'
}

/// Uppercase the first word character of the text and every word character
/// that directly follows a literal `". "`. Nothing is lowercased.
pub fn sentence_case(text: &str) -> String {
    SENTENCE_START_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_ascii_uppercase())
        })
        .into_owned()
}
