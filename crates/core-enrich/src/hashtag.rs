//! Hashtag block appended under the post body.

/// Normalize a whitespace-separated tag list into `#tag` tokens.
/// Returns `None` when the input holds no tags.
pub fn hashtag_line(tags_input: &str) -> Option<String> {
    let tags: Vec<String> = tags_input
        .split_whitespace()
        .map(|tag| {
            if tag.starts_with('#') {
                tag.to_string()
            } else {
                format!("#{tag}")
            }
        })
        .collect();
    if tags.is_empty() {
        None
    } else {
        Some(tags.join(" "))
    }
}

/// Append the hashtag line to `body`, separated by a blank line.
///
/// An empty tag list returns `body` unchanged; an empty body returns the
/// hashtag line alone.
pub fn append_hashtags(body: &str, tags_input: &str) -> String {
    match hashtag_line(tags_input) {
        None => body.to_string(),
        Some(line) if body.is_empty() => line,
        Some(line) => format!("{body}\n\n{line}"),
    }
}
