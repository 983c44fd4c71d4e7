//! Named-section extraction from newsletter drafts.
//!
//! Draft preview surfaces display three sections in dedicated panels
//! instead of inline: the executive summary, the did-you-know fact and
//! the by-the-numbers list. Each is located by its emoji-marked heading
//! (case-insensitive on the text, exact on the emoji), captured up to the
//! next `##` heading and removed from the residual body.

use std::sync::LazyLock;

use regex::Regex;

/// Regex to match the Executive Summary heading.
static EXECUTIVE_SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^##?\s*📝\s*Executive Summary").unwrap());

/// Regex to match the Did You Know heading.
static DID_YOU_KNOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^##?\s*💡\s*Did You Know\?").unwrap());

/// Regex to match the By The Numbers heading.
static BY_THE_NUMBERS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mi)^##?\s*📊\s*By The Numbers").unwrap());

/// Sections pulled out of a newsletter draft for dedicated display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewsletterSections {
    /// Content under the `📝 Executive Summary` heading, if present.
    pub executive_summary: Option<String>,
    /// Content under the `💡 Did You Know?` heading, if present.
    pub did_you_know: Option<String>,
    /// Items under the `📊 By The Numbers` heading, bullet markers
    /// stripped. Non-bullet lines in that section are dropped.
    pub by_the_numbers: Vec<String>,
    /// The document with extracted sections removed.
    pub main_content: String,
}

/// Byte span of one section within the source document, heading included.
struct SectionSpan {
    start: usize,
    end: usize,
    content: String,
}

/// Extract the named sections from a newsletter document.
///
/// Only the first occurrence of each section is extracted; stored content
/// is trimmed. A heading with nothing after it (not even a newline) does
/// not match. Extraction and removal cover the same byte span, so the
/// residual plus the removed spans reconstructs the input.
#[must_use]
pub fn parse_newsletter_sections(markdown: &str) -> NewsletterSections {
    let executive = find_section(markdown, &EXECUTIVE_SUMMARY_RE);
    let did_you_know = find_section(markdown, &DID_YOU_KNOW_RE);
    let numbers = find_section(markdown, &BY_THE_NUMBERS_RE);

    let mut removed: Vec<(usize, usize)> = [&executive, &did_you_know, &numbers]
        .into_iter()
        .flatten()
        .map(|span| (span.start, span.end))
        .collect();
    removed.sort_unstable();

    // Splice by byte offsets; a text search could delete an identical
    // substring occurring earlier in the document instead.
    let mut main_content = String::with_capacity(markdown.len());
    let mut cursor = 0;
    for &(start, end) in &removed {
        // A span nested inside an earlier one (a `#`-anchored heading
        // within a section running to end of input) is already gone.
        if start < cursor {
            cursor = cursor.max(end);
            continue;
        }
        main_content.push_str(&markdown[cursor..start]);
        cursor = end;
    }
    main_content.push_str(&markdown[cursor..]);

    NewsletterSections {
        executive_summary: executive.map(|span| span.content),
        did_you_know: did_you_know.map(|span| span.content),
        by_the_numbers: numbers
            .map(|span| split_number_items(&span.content))
            .unwrap_or_default(),
        main_content,
    }
}

/// Locate one section: heading line plus content up to the next `\n##`
/// (or end of input).
fn find_section(markdown: &str, heading_re: &Regex) -> Option<SectionSpan> {
    let heading = heading_re.find(markdown)?;
    let after_heading = &markdown[heading.end()..];
    let line_break = after_heading.find('\n')?;
    let content_start = heading.end() + line_break + 1;
    let tail = &markdown[content_start..];
    let content_end = tail
        .find("\n##")
        .map_or(markdown.len(), |pos| content_start + pos);
    Some(SectionSpan {
        start: heading.start(),
        end: content_end,
        content: markdown[content_start..content_end].trim().to_string(),
    })
}

/// Decompose By The Numbers content into individual item strings.
fn split_number_items(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|line| {
            let trimmed = line.trim();
            let rest = trimmed.strip_prefix(['-', '•', '*'])?;
            if !rest.starts_with(char::is_whitespace) {
                return None;
            }
            Some(rest.trim().to_string())
        })
        .collect()
}
