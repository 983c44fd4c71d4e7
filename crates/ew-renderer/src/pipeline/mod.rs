//! Markdown-to-HTML transformation pipeline.
//!
//! Stages run in a fixed order; each stage's output is the next stage's
//! input. The order is load-bearing: section boxing matches the exact
//! `<h2>` markup produced by heading conversion, and paragraph wrapping
//! keys off the first characters of lines emitted by every earlier stage.

pub(crate) mod boxing;
pub(crate) mod headings;
pub(crate) mod images;
pub(crate) mod inline;
pub(crate) mod lists;
pub(crate) mod paragraphs;
pub(crate) mod prerendered;
pub(crate) mod tables;

pub use prerendered::{looks_like_html, scrub_prerendered};

/// Transform newsletter markdown into an HTML fragment.
///
/// Documents classified as pre-rendered HTML are scrubbed and returned
/// directly; everything else runs through the full stage sequence. The
/// transformation is deterministic and total: any string input produces
/// output, malformed markdown degrades to literal text.
#[must_use]
pub fn transform_markdown(content: &str) -> String {
    if prerendered::looks_like_html(content) {
        return prerendered::scrub_prerendered(content);
    }

    let html = images::resolve_images(content);
    let html = inline::resolve_links(&html);
    let html = headings::convert_headings(&html);
    let html = lists::convert_lists(&html);
    let html = inline::convert_bold(&html);
    let html = tables::rebuild_tables(&html);
    let html = boxing::box_sections(&html);
    paragraphs::wrap_paragraphs(&html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_scenario() {
        let html = transform_markdown("# Hello");
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains(">Hello</h1>"));
        assert!(!html.contains("<h2"));
        assert!(!html.contains("<h3"));
    }

    #[test]
    fn test_list_scenario_preserves_order() {
        let html = transform_markdown("- First\n- Second");
        assert_eq!(html.matches("<li").count(), 2);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_hero_fallback_scenario() {
        let html = transform_markdown("![hero](not-a-url)");
        assert!(html.contains("photo-1518709268805-4e9042af2176"));
        assert!(!html.contains("not-a-url"));
    }

    #[test]
    fn test_named_section_scenario() {
        let html = transform_markdown("## 🔍 Executive Summary\nSome text\n## Other");
        assert!(html.contains("from-blue-50 via-sky-50 to-blue-100"));
        assert!(html.contains("Some text"));
        assert!(html.contains("Other</h2>"));
        assert!(!html.contains("Other</h3>"));
    }

    #[test]
    fn test_prerendered_html_skips_every_stage() {
        let input = r#"<div><p>Done deal</p>  <img src="x.png" /></div>"#;
        let html = transform_markdown(input);
        assert_eq!(html, r#"<div><p>Done deal</p> <img src="x.png" ></div>"#);
        // No pipeline markup appears
        assert!(!html.contains("newsletter"));
        assert!(!html.contains("mb-6"));
    }

    #[test]
    fn test_prerendered_classification_wins_over_markdown() {
        // The marker can sit anywhere, even in prose
        let input = "# Looks like markdown\nbut mentions <div somewhere";
        let html = transform_markdown(input);
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let input = "# Title\n\n## 📊 Data Pulse\n- stat one\n\n| Trend | Impact |\n| AI | High |";
        assert_eq!(transform_markdown(input), transform_markdown(input));
    }

    #[test]
    fn test_empty_input_yields_near_empty_fragment() {
        let html = transform_markdown("");
        assert_eq!(html, r#"<p class="mb-6 text-slate-600 leading-relaxed text-lg">"#);
    }

    #[test]
    fn test_full_newsletter_document() {
        let markdown = "\
# AI Weekly #42

![hero](https://cdn.example.com/cover.jpg)

## 🔍 Executive Summary
The week's **three** biggest stories in one place.

## 🌐 Trends to Watch
- Agents move into production
- [Research roundup](https://example.com/roundup)

| Trend | Impact |
|---|---|
| Open weights | High |

## Closing Notes
See you next week.";

        let html = transform_markdown(markdown);
        assert!(html.contains("<h1"));
        assert!(html.contains("https://cdn.example.com/cover.jpg"));
        assert_eq!(html.matches("mt-12 p-12").count(), 2);
        assert!(html.contains("<thead"));
        assert!(html.contains("<strong"));
        assert!(html.contains("<a href=\"https://example.com/roundup\""));
        assert!(html.contains("Closing Notes</h2>"));
    }
}
