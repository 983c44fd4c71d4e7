//! Inline construct conversion: links and bold spans.

use std::sync::LazyLock;

use regex::Regex;

/// Regex to match markdown link syntax.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Regex to match bold spans.
static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Styled anchor replacement. Links always open in a new tab.
const LINK_REPLACEMENT: &str = r#"<a href="$2" target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:text-blue-800 font-semibold underline decoration-2 decoration-blue-200 hover:decoration-blue-400 transition-all duration-200 hover:bg-blue-50 px-1 py-0.5 rounded">$1</a>"#;

/// Styled strong replacement.
const BOLD_REPLACEMENT: &str = r#"<strong class="font-bold text-slate-800 bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">$1</strong>"#;

/// Replace `[text](url)` occurrences with styled anchors.
///
/// Runs after image resolution, so surviving bracket pairs are plain
/// links. The url is emitted as-is; links are not validated the way image
/// sources are.
#[must_use]
pub fn resolve_links(content: &str) -> String {
    LINK_RE.replace_all(content, LINK_REPLACEMENT).to_string()
}

/// Replace `**text**` spans with styled `<strong>` elements.
#[must_use]
pub fn convert_bold(content: &str) -> String {
    BOLD_RE.replace_all(content, BOLD_REPLACEMENT).to_string()
}
