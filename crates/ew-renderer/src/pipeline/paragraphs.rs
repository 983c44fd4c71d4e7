//! Paragraph wrapping, the final markup stage.
//!
//! Blank lines become `</p><p>` breaks first; then every line that does
//! not already start with produced block markup gets an opening `<p>`.
//! Paragraphs are only ever closed by the blank-line rule, so a document
//! ends with an unclosed `<p>`.

/// Opening paragraph tag.
const PARAGRAPH_OPEN: &str = r#"<p class="mb-6 text-slate-600 leading-relaxed text-lg">"#;

/// Replacement for a blank line between paragraphs.
const PARAGRAPH_BREAK: &str = r#"</p><p class="mb-6 text-slate-600 leading-relaxed text-lg">"#;

/// Line prefixes that block markup was already emitted for. The single
/// letter covers headings, list items, images, tables and section boxes
/// (and, coincidentally, any other tag starting with the same letter).
const BLOCK_PREFIXES: [&str; 5] = ["<h", "<l", "<i", "<t", "<d"];

/// Wrap bare lines in paragraph tags.
#[must_use]
pub fn wrap_paragraphs(content: &str) -> String {
    let content = content.replace("\n\n", PARAGRAPH_BREAK);
    let lines: Vec<String> = content
        .split('\n')
        .map(|line| {
            if BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
                line.to_string()
            } else {
                format!("{PARAGRAPH_OPEN}{line}")
            }
        })
        .collect();
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bare_line_gets_paragraph_open() {
        assert_eq!(
            wrap_paragraphs("plain text"),
            format!("{PARAGRAPH_OPEN}plain text")
        );
    }

    #[test]
    fn test_blank_line_becomes_break() {
        let html = wrap_paragraphs("first\n\nsecond");
        assert_eq!(html, format!("{PARAGRAPH_OPEN}first{PARAGRAPH_BREAK}second"));
    }

    #[test]
    fn test_block_markup_lines_skipped() {
        for line in [
            "<h1 class=\"x\">t</h1>",
            "<li class=\"x\">i</li>",
            "<img src=\"x\">",
            "<table>",
            "<div>",
        ] {
            assert_eq!(wrap_paragraphs(line), line);
        }
    }

    #[test]
    fn test_anchor_line_gets_wrapped() {
        // <a is not in the prefix set
        let html = wrap_paragraphs("<a href=\"x\">link</a>");
        assert!(html.starts_with(PARAGRAPH_OPEN));
    }

    #[test]
    fn test_paragraphs_never_closed_at_end() {
        let html = wrap_paragraphs("only line");
        assert!(!html.ends_with("</p>"));
        assert_eq!(html.matches("<p ").count(), 1);
    }

    #[test]
    fn test_single_newline_keeps_lines_separate() {
        let html = wrap_paragraphs("a\nb");
        assert_eq!(
            html,
            format!("{PARAGRAPH_OPEN}a\n{PARAGRAPH_OPEN}b")
        );
    }

    #[test]
    fn test_empty_input_opens_one_paragraph() {
        assert_eq!(wrap_paragraphs(""), PARAGRAPH_OPEN);
    }
}
