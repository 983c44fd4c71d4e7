//! Pre-rendered HTML detection and cleanup.
//!
//! Some newsletter bodies arrive as already-rendered HTML instead of
//! markdown. Those documents bypass the transformation stages entirely and
//! only get a fixed attribute scrub, so stale inline styling and event
//! handlers cannot leak into the host page.

use std::sync::LazyLock;

use regex::Regex;

/// Substrings that classify a document as already-rendered HTML.
const HTML_MARKERS: [&str; 4] = ["<h1", "<h2", "<p", "<div"];

/// Regex to match class attributes.
static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"class="[^"]*""#).unwrap());

/// Regex to match inline style attributes.
static STYLE_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"style="[^"]*""#).unwrap());

/// Regex to match inline onerror handlers.
static ONERROR_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"onerror="[^"]*""#).unwrap());

/// Regex to match whitespace runs.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Classify a document as pre-rendered HTML.
///
/// The check is deliberately non-semantic: any occurrence of `<h1`, `<h2`,
/// `<p` or `<div` anywhere in the text marks the whole document as HTML,
/// even inside prose. A document is either HTML or markdown, never both.
#[must_use]
pub fn looks_like_html(content: &str) -> bool {
    HTML_MARKERS.iter().any(|marker| content.contains(marker))
}

/// Scrub a pre-rendered HTML document for embedding.
///
/// Strips `class`, `style` and `onerror` attributes, normalizes
/// self-closing tags and collapses whitespace runs to single spaces. This
/// is regex text surgery, not HTML parsing: attribute values containing
/// escaped quotes are out of contract.
#[must_use]
pub fn scrub_prerendered(content: &str) -> String {
    let scrubbed = CLASS_ATTR_RE.replace_all(content, "");
    let scrubbed = STYLE_ATTR_RE.replace_all(&scrubbed, "");
    let scrubbed = ONERROR_ATTR_RE.replace_all(&scrubbed, "");
    let scrubbed = scrubbed.replace("/>", ">");
    let scrubbed = WHITESPACE_RE.replace_all(&scrubbed, " ");
    scrubbed.trim().to_string()
}
