//! List item conversion.
//!
//! Items are emitted as loose `<li>` elements with no surrounding
//! `<ul>`/`<ol>`; the stylesheet treats them as flex rows, so the missing
//! list container has no visual effect. Ordered items keep their source
//! number as the rendered label, so renumbering is the author's job.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Regex to match unordered items (`-`, `•` or `*` bullet).
static UNORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[-•*] (.*)$").unwrap());

/// Regex to match ordered items (`1. ` style).
static ORDERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(\d+)\. (.*)$").unwrap());

/// Shared `<li>` opening markup.
const ITEM_OPEN: &str = r#"<li class="mb-4 text-slate-600 leading-relaxed flex items-start gap-4 p-3 rounded-lg hover:bg-slate-50 transition-colors">"#;

/// Marker span for unordered items.
const BULLET_MARKER: &str =
    r#"<span class="text-blue-500 mt-2 text-sm font-bold flex-shrink-0">▶</span>"#;

/// Convert unordered and ordered list lines to styled `<li>` elements.
#[must_use]
pub fn convert_lists(content: &str) -> String {
    let html = UNORDERED_RE.replace_all(content, |caps: &Captures<'_>| {
        format!(
            r#"{ITEM_OPEN}{BULLET_MARKER}<span class="flex-1">{}</span></li>"#,
            &caps[1]
        )
    });
    let html = ORDERED_RE.replace_all(&html, |caps: &Captures<'_>| {
        format!(
            r#"{ITEM_OPEN}<span class="text-blue-500 font-bold text-sm mt-1 min-w-[24px] flex-shrink-0">{}.</span><span class="flex-1">{}</span></li>"#,
            &caps[1], &caps[2]
        )
    });
    html.to_string()
}
