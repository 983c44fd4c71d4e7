//! Named-section boxing.
//!
//! A fixed registry maps emoji-prefixed `##` headings to color categories.
//! After heading conversion, each registry heading is located by literal
//! string match against the exact `<h2>` markup produced there; the
//! heading plus everything up to the next `<h1`/`<h2` is replaced by a
//! decorated container. Matching is case- and emoji-sensitive, so
//! near-miss headings stay plain.

use super::headings::H2_OPEN;

/// Color category for a boxed section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SectionCategory {
    Executive,
    Stats,
    Trends,
    Trivia,
}

impl SectionCategory {
    fn gradient_classes(self) -> &'static str {
        match self {
            Self::Executive => "from-blue-50 via-sky-50 to-blue-100",
            Self::Stats => "from-green-50 via-emerald-50 to-green-100",
            Self::Trends => "from-purple-50 via-violet-50 to-purple-100",
            Self::Trivia => "from-amber-50 via-orange-50 to-amber-100",
        }
    }

    fn border_classes(self) -> &'static str {
        match self {
            Self::Executive => "border-blue-500",
            Self::Stats => "border-green-500",
            Self::Trends => "border-purple-500",
            Self::Trivia => "border-amber-500",
        }
    }

    fn icon_classes(self) -> &'static str {
        match self {
            Self::Executive => "from-blue-500 to-sky-500",
            Self::Stats => "from-green-500 to-emerald-500",
            Self::Trends => "from-purple-500 to-violet-500",
            Self::Trivia => "from-amber-500 to-orange-500",
        }
    }

    fn dot_classes(self) -> &'static str {
        match self {
            Self::Executive => "bg-blue-500",
            Self::Stats => "bg-green-500",
            Self::Trends => "bg-purple-500",
            Self::Trivia => "bg-amber-500",
        }
    }
}

/// Registry of boxable section headings.
const SECTION_REGISTRY: [(&str, SectionCategory); 11] = [
    ("🔍 Executive Summary", SectionCategory::Executive),
    ("🧠 Big Picture", SectionCategory::Stats),
    ("🚀 Top Picks of the Week", SectionCategory::Trends),
    ("🌐 Trends to Watch", SectionCategory::Trends),
    ("💡 Quick Bytes", SectionCategory::Stats),
    ("📊 Data Pulse", SectionCategory::Stats),
    ("🧭 Featured Tool", SectionCategory::Trivia),
    ("🧩 Did You Know?", SectionCategory::Trivia),
    ("💬 From the Editor", SectionCategory::Executive),
    ("📅 Coming Next Week", SectionCategory::Trends),
    ("📨 Wrap-Up", SectionCategory::Executive),
];

/// List icon shown in every section box.
const LIST_ICON_SVG: &str = r#"<svg class="h-10 w-10 text-white" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M3 4a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1zm0 4a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1zm0 4a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1zm0 4a1 1 0 011-1h12a1 1 0 110 2H4a1 1 0 01-1-1z" clip-rule="evenodd" /></svg>"#;

/// Wrap registry sections in decorated containers.
///
/// Registry entries are processed in declaration order; sections cannot
/// overlap (a section ends at the next heading), so the order does not
/// change the output.
#[must_use]
pub fn box_sections(content: &str) -> String {
    let mut html = content.to_string();
    for &(title, category) in &SECTION_REGISTRY {
        html = box_named_section(&html, title, category);
    }
    html
}

/// Box every occurrence of one registry heading.
fn box_named_section(html: &str, title: &str, category: SectionCategory) -> String {
    let needle = format!("{H2_OPEN}{title}</h2>");
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find(&needle) {
        out.push_str(&rest[..start]);
        let tail = &rest[start + needle.len()..];
        let end = next_heading_offset(tail).unwrap_or(tail.len());
        out.push_str(&render_box(category, title, &tail[..end]));
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

/// Offset of the next `<h1`/`<h2` opening, if any.
fn next_heading_offset(tail: &str) -> Option<usize> {
    match (tail.find("<h1"), tail.find("<h2")) {
        (Some(h1), Some(h2)) => Some(h1.min(h2)),
        (h1, h2) => h1.or(h2),
    }
}

/// Emit the decorated container for one section.
///
/// The captured content is embedded verbatim, newlines included, so later
/// paragraph wrapping still sees its line structure.
fn render_box(category: SectionCategory, title: &str, content: &str) -> String {
    format!(
        r#"<div class="mt-12 p-12 bg-gradient-to-br {gradient} border-2 {border} rounded-3xl shadow-2xl relative overflow-hidden hover:shadow-3xl transition-all duration-500 hover:-translate-y-3 group backdrop-blur-sm"><div class="absolute top-0 left-0 right-0 h-3 bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 rounded-t-3xl"></div><div class="absolute -top-2 -left-2 -right-2 -bottom-2 bg-gradient-to-br from-blue-500 via-purple-500 to-pink-500 rounded-3xl opacity-5 -z-10"></div><div class="absolute inset-0 bg-white/20 backdrop-blur-sm rounded-3xl"></div><div class="relative z-10"><div class="flex items-center gap-6 mb-8"><div class="p-5 bg-gradient-to-r {icon} rounded-2xl shadow-xl group-hover:scale-110 transition-transform duration-300">{LIST_ICON_SVG}</div><h3 class="text-3xl font-bold text-slate-800 flex items-center gap-4 relative"><div class="w-4 h-4 {dot} rounded-full shadow-lg"></div>{title}</h3></div><div class="text-slate-700 leading-relaxed text-lg relative z-10 space-y-4">{content}</div></div></div>"#,
        gradient = category.gradient_classes(),
        border = category.border_classes(),
        icon = category.icon_classes(),
        dot = category.dot_classes(),
    )
}
