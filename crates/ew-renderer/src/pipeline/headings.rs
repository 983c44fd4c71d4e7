//! Heading conversion for levels 1 through 3.
//!
//! Only ATX headings with a single space after the hashes are recognized.
//! The `<h2>` markup produced here is load-bearing: section boxing locates
//! named sections by searching for these exact bytes.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex to match level-1 headings.
static H1_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());

/// Regex to match level-2 headings.
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());

/// Regex to match level-3 headings.
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());

/// Opening markup for `<h1>`, up to the title text.
const H1_OPEN: &str = r#"<h1 class="text-4xl font-bold mb-8 text-slate-800 text-center bg-gradient-to-r from-blue-600 via-purple-600 to-pink-600 bg-clip-text text-transparent border-b-4 border-gradient-to-r from-blue-500 to-purple-500 pb-4">"#;

/// Opening markup for `<h2>`, up to the title text. Includes the accent
/// bar element, so the title is not adjacent to the `<h2>` tag itself.
pub(crate) const H2_OPEN: &str = r#"<h2 class="text-2xl font-bold mb-6 mt-12 text-slate-700 flex items-center gap-4 relative pl-8"><div class="absolute left-0 top-1/2 transform -translate-y-1/2 w-2 h-12 bg-gradient-to-b from-blue-500 via-purple-500 to-pink-500 rounded-full shadow-lg"></div>"#;

/// Opening markup for `<h3>`, up to the title text.
const H3_OPEN: &str = r#"<h3 class="text-xl font-semibold mb-5 text-slate-700 flex items-center gap-3"><div class="w-3 h-3 bg-gradient-to-r from-blue-500 to-purple-500 rounded-full shadow-md"></div>"#;

/// Convert `#`, `##` and `###` heading lines to styled elements.
#[must_use]
pub fn convert_headings(content: &str) -> String {
    let html = H1_RE.replace_all(content, |caps: &Captures<'_>| {
        format!("{H1_OPEN}{}</h1>", &caps[1])
    });
    let html = H2_RE.replace_all(&html, |caps: &Captures<'_>| {
        format!("{H2_OPEN}{}</h2>", &caps[1])
    });
    let html = H3_RE.replace_all(&html, |caps: &Captures<'_>| {
        format!("{H3_OPEN}{}</h3>", &caps[1])
    });
    html.to_string()
}
