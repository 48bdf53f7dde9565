/// Pure utility functions for authored rich-text content
///
/// These functions contain NO side effects - they take inputs and return outputs
/// without touching state or performing I/O.
use lazy_static::lazy_static;
use regex::Regex;

/// Words per minute used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Characters kept when an excerpt is derived from the content.
pub const FALLBACK_EXCERPT_CHARS: usize = 150;

lazy_static! {
    // Any tag, including an unterminated one at the end of the input
    static ref MARKUP_REGEX: Regex = Regex::new(r"<[^>]*>?").unwrap();
}

/// Replace every tag with a single space.
pub fn strip_markup(html: &str) -> String {
    MARKUP_REGEX.replace_all(html, " ").into_owned()
}

/// Number of whitespace-separated words once markup is removed.
pub fn word_count(html: &str) -> usize {
    strip_markup(html).split_whitespace().count()
}

/// Estimated reading time, rounded up to whole minutes.
pub fn reading_time_minutes(words: usize) -> usize {
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Excerpt derived from the content when the author did not write one.
///
/// Markup is removed without inserting spaces, the first
/// [`FALLBACK_EXCERPT_CHARS`] characters are kept and `...` is appended.
pub fn fallback_excerpt(html: &str) -> String {
    let text = MARKUP_REGEX.replace_all(html, "");
    let head: String = text.chars().take(FALLBACK_EXCERPT_CHARS).collect();
    format!("{}...", head)
}

/// Plain text of the content, used for annotation offsets.
pub fn plain_text(html: &str) -> String {
    MARKUP_REGEX.replace_all(html, "").into_owned()
}
