//! Allowlist sanitizer for authored rich text.
//!
//! Post content is rendered as raw HTML, so every write (editor saves and
//! AI-refined text) passes through here first. The fragment is parsed and
//! re-serialized: only formatting elements and a few attributes survive, text
//! and attribute values are escaped, and active content is removed.

use scraper::{ElementRef, Html};

/// Elements kept as-is (attributes filtered).
const ALLOWED_ELEMENTS: &[&str] = &[
    "p", "br", "strong", "b", "em", "i", "u", "s", "strike", "h1", "h2", "h3", "h4", "ul", "ol",
    "li", "blockquote", "pre", "code", "a", "img", "span", "sub", "sup", "hr",
];

/// Elements removed together with everything inside them.
const DROPPED_ELEMENTS: &[&str] = &[
    "script", "style", "iframe", "object", "embed", "noscript", "template", "svg", "math",
];

const VOID_ELEMENTS: &[&str] = &["br", "img", "hr"];

const SAFE_SCHEMES: &[&str] = &["http", "https", "mailto"];

fn attribute_allowed(element: &str, attribute: &str) -> bool {
    match (element, attribute) {
        (_, "class") => true,
        ("a", "href") | ("a", "title") => true,
        ("img", "src") | ("img", "alt") => true,
        ("span", "data-review-id") => true,
        _ => false,
    }
}

fn is_url_attribute(attribute: &str) -> bool {
    matches!(attribute, "href" | "src")
}

/// Whether a link target is relative or uses a safe scheme.
pub fn is_safe_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();

    let scheme_end = normalized.find(':');
    let path_start = normalized.find(['/', '?', '#']);

    match (scheme_end, path_start) {
        (Some(colon), Some(path)) if path < colon => true,
        (Some(colon), _) => SAFE_SCHEMES.contains(&&normalized[..colon]),
        (None, _) => true,
    }
}

/// Sanitize an HTML fragment.
pub fn sanitize_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    write_children(fragment.root_element(), &mut out);
    out
}

fn write_children(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            escape_into(text, false, out);
        } else if let Some(child_element) = ElementRef::wrap(child) {
            write_element(child_element, out);
        }
        // Comments, doctypes and processing instructions are dropped.
    }
}

fn write_element(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();

    if DROPPED_ELEMENTS.contains(&name) {
        return;
    }

    if !ALLOWED_ELEMENTS.contains(&name) {
        // Unknown wrapper: keep what it contains.
        write_children(element, out);
        return;
    }

    // Attribute storage is unordered; sort for stable output.
    let mut attributes: Vec<(&str, &str)> = element
        .value()
        .attrs()
        .filter(|(attribute, value)| {
            attribute_allowed(name, attribute) && (!is_url_attribute(attribute) || is_safe_url(value))
        })
        .collect();
    attributes.sort_by_key(|(attribute, _)| *attribute);

    out.push('<');
    out.push_str(name);
    for (attribute, value) in attributes {
        out.push(' ');
        out.push_str(attribute);
        out.push_str("=\"");
        escape_into(value, true, out);
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&name) {
        return;
    }

    write_children(element, out);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
