//! Table reconstruction from pipe-delimited lines.
//!
//! A line belongs to a table when it contains `|` and its trimmed form
//! both starts and ends with `|`. Contiguous table lines form a block that
//! is emitted as one output line; the first non-table line closes the
//! block and then passes through after it.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

/// Regex to match structural separator rows (`|---|---|`).
static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\|[\s\-\|]+\|$").unwrap());

/// Cell contents that mark a block's first data row as a header row.
const HEADER_INDICATORS: [&str; 6] = ["🔖", "💬", "📈", "Trend", "What's", "Impact"];

/// Opening markup for a table block.
const TABLE_OPEN: &str =
    r#"<div class="overflow-x-auto my-8 rounded-2xl shadow-xl"><table class="w-full bg-white">"#;

/// Opening markup for the header row.
const THEAD_OPEN: &str =
    r#"<thead class="bg-gradient-to-r from-blue-500 via-purple-500 to-pink-500 text-white"><tr>"#;

/// Opening markup for a body row.
const BODY_ROW_OPEN: &str = r#"<tr class="hover:bg-gradient-to-r hover:from-blue-50 hover:to-purple-50 transition-all duration-200 border-b border-slate-100">"#;

/// Closing markup for a table block. Emitted unconditionally, even when no
/// `<thead>`/`<tbody>` was opened; browsers normalize the structure.
const TABLE_CLOSE: &str = "</tbody></table></div>";

/// Reconstruct `<table>` markup from pipe-delimited line blocks.
#[must_use]
pub fn rebuild_tables(content: &str) -> String {
    let mut processed: Vec<String> = Vec::new();
    let mut block: Option<TableBlock> = None;

    for line in content.split('\n') {
        if is_table_line(line) {
            block.get_or_insert_with(TableBlock::new).push_row(line.trim());
        } else {
            if let Some(table) = block.take() {
                processed.push(table.finish());
            }
            processed.push(line.to_string());
        }
    }

    // Close a table that runs to end of input
    if let Some(table) = block.take() {
        processed.push(table.finish());
    }

    processed.join("\n")
}

/// Check whether a line belongs to a table block.
fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    line.contains('|') && trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Split a trimmed table line into trimmed cells, dropping the empty
/// artifacts outside the outer pipes.
fn split_cells(trimmed: &str) -> Vec<String> {
    let parts: Vec<&str> = trimmed.split('|').collect();
    if parts.len() <= 2 {
        return Vec::new();
    }
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// Check whether a cell marks the row as a header row.
fn is_header_cell(cell: &str) -> bool {
    HEADER_INDICATORS
        .iter()
        .any(|indicator| cell.contains(indicator))
}

/// One table block under construction.
struct TableBlock {
    html: String,
    saw_data_row: bool,
}

impl TableBlock {
    fn new() -> Self {
        Self {
            html: TABLE_OPEN.to_string(),
            saw_data_row: false,
        }
    }

    /// Append one table line. Separator rows and rows with no cells are
    /// consumed silently.
    fn push_row(&mut self, trimmed: &str) {
        if SEPARATOR_RE.is_match(trimmed) {
            return;
        }
        let cells = split_cells(trimmed);
        if cells.is_empty() {
            return;
        }
        // Only the first data row can become a header
        if !self.saw_data_row && cells.iter().any(|cell| is_header_cell(cell)) {
            self.push_header_row(&cells);
        } else {
            self.push_body_row(&cells);
        }
        self.saw_data_row = true;
    }

    fn push_header_row(&mut self, cells: &[String]) {
        self.html.push_str(THEAD_OPEN);
        for cell in cells {
            write!(
                self.html,
                r#"<th class="px-6 py-4 text-left font-bold text-lg">{cell}</th>"#
            )
            .unwrap();
        }
        self.html.push_str("</tr></thead><tbody>");
    }

    fn push_body_row(&mut self, cells: &[String]) {
        self.html.push_str(BODY_ROW_OPEN);
        for cell in cells {
            write!(
                self.html,
                r#"<td class="px-6 py-4 text-slate-600 font-medium">{cell}</td>"#
            )
            .unwrap();
        }
        self.html.push_str("</tr>");
    }

    fn finish(mut self) -> String {
        self.html.push_str(TABLE_CLOSE);
        self.html
    }
}
