//! Post composition: template, enrichment, affixes, hashtags, then style.
//!
//! `compose` is the single place the draft fields meet. Its output is derived
//! data, recomputed from the source fields on every change and never stored.

use std::fmt;
use std::str::FromStr;

use core_text::{StyleKind, to_styled};
use thiserror::Error;
use tracing::trace;

use crate::{append_hashtags, enrich};

const FILE_STEM_MAX: usize = 40;
const FILE_STEM_FALLBACK: &str = "linkedin-post";

/// Starter layouts wrapped around the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Template {
    #[default]
    Blank,
    Quote,
    Tip,
    Announcement,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::Blank,
        Template::Quote,
        Template::Tip,
        Template::Announcement,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Template::Blank => "blank",
            Template::Quote => "quote",
            Template::Tip => "tip",
            Template::Announcement => "announcement",
        }
    }

    /// Wrap `draft`; an empty draft gets the template's sample line.
    pub fn apply(self, draft: &str) -> String {
        match self {
            Template::Blank => draft.to_string(),
            Template::Quote => format!(
                "“{}”\n\n— Your Name",
                or_sample(draft, "Make it simple, but significant.")
            ),
            Template::Tip => format!(
                "Pro Tip: {}\n\n• Context\n• Action\n• Results",
                or_sample(draft, "Start by sharing a concrete win before the lesson.")
            ),
            Template::Announcement => format!(
                "We’re live! 🚀\n\n{}\n\n🔗 Read more in the first comment.",
                or_sample(draft, "Just shipped a feature that cuts reporting time by 40%.")
            ),
        }
    }
}

fn or_sample<'a>(draft: &'a str, sample: &'a str) -> &'a str {
    if draft.is_empty() { sample } else { draft }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTemplateError {
    #[error("unknown post template `{0}`")]
    Unknown(String),
}

impl FromStr for Template {
    type Err = ParseTemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| ParseTemplateError::Unknown(s.trim().to_string()))
    }
}

/// Draft-side knobs of the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    pub template: Template,
    pub auto_enrich: bool,
    pub prefix: String,
    pub suffix: String,
    /// Whitespace-separated tag list, with or without leading `#`.
    pub hashtags: String,
    pub style: StyleKind,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            template: Template::Blank,
            auto_enrich: true,
            prefix: String::new(),
            suffix: String::new(),
            hashtags: String::new(),
            style: StyleKind::Bold,
        }
    }
}

/// The assembled post, before and after styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedText {
    plain: String,
    style: StyleKind,
}

impl ComposedText {
    pub fn as_str(&self) -> &str {
        &self.plain
    }

    pub fn style(&self) -> StyleKind {
        self.style
    }

    /// Styled string handed to the clipboard and the card renderer.
    pub fn styled(&self) -> String {
        to_styled(&self.plain, self.style)
    }
}

/// Assemble the post: template, optional enrichment, then prefix/body/suffix
/// (empty parts skipped) joined by newlines, then the hashtag block.
pub fn compose(draft: &str, opts: &ComposeOptions) -> ComposedText {
    let base = opts.template.apply(draft);
    let body = if opts.auto_enrich { enrich(&base) } else { base };
    let joined = [opts.prefix.as_str(), body.as_str(), opts.suffix.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    let plain = append_hashtags(&joined, &opts.hashtags);
    trace!(
        target: "enrich",
        template = opts.template.as_str(),
        auto_enrich = opts.auto_enrich,
        draft_chars = draft.chars().count(),
        composed_chars = plain.chars().count(),
        "compose"
    );
    ComposedText {
        plain,
        style: opts.style,
    }
}

/// Export filename stem: a kebab slug of the post text plus the aspect key.
pub fn file_stem(text: &str, ratio_key: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    let slug: String = slug.chars().take(FILE_STEM_MAX).collect();
    let slug = if slug.is_empty() {
        FILE_STEM_FALLBACK.to_string()
    } else {
        slug
    };
    format!("{slug}-{ratio_key}")
}
