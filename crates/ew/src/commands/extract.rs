//! `ew extract` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::Args;
use ew_sections::{
    NewsletterSections, parse_newsletter_sections, reading_time_minutes, word_count,
};
use serde::Serialize;

use crate::commands::{read_input, write_payload};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the extract command.
#[derive(Args)]
pub(crate) struct ExtractArgs {
    /// Newsletter markdown file to extract from (use - for stdin).
    file: PathBuf,

    /// Emit the report as JSON.
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (show extraction logs).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Extraction report for one draft.
#[derive(Serialize)]
struct ExtractReport {
    word_count: usize,
    reading_time_minutes: usize,
    sections: NewsletterSections,
}

impl ExtractReport {
    /// Render the human-readable report.
    fn to_text(&self) -> String {
        let mut text = String::new();
        writeln!(text, "Word count: {}", self.word_count).unwrap();
        writeln!(text, "Reading time: {} min", self.reading_time_minutes).unwrap();
        writeln!(
            text,
            "Executive summary: {}",
            presence(self.sections.executive_summary.as_deref())
        )
        .unwrap();
        writeln!(
            text,
            "Did you know: {}",
            presence(self.sections.did_you_know.as_deref())
        )
        .unwrap();
        writeln!(
            text,
            "By the numbers: {} items",
            self.sections.by_the_numbers.len()
        )
        .unwrap();
        text
    }
}

/// Describe an optional section for the report.
fn presence(section: Option<&str>) -> &'static str {
    if section.is_some() { "present" } else { "missing" }
}

impl ExtractArgs {
    /// Execute the extract command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the report cannot be
    /// serialized, or the output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = read_input(&self.file)?;

        let report = ExtractReport {
            word_count: word_count(&content),
            reading_time_minutes: reading_time_minutes(&content),
            sections: parse_newsletter_sections(&content),
        };

        tracing::info!(
            words = report.word_count,
            items = report.sections.by_the_numbers.len(),
            "Extracted sections"
        );

        let payload = if self.json {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        } else {
            report.to_text()
        };

        write_payload(self.output.as_deref(), &payload)?;
        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DRAFT: &str =
        "## 📝 Executive Summary\nShort and sweet.\n\n## 📊 By The Numbers\n- one\n- two\n";

    fn extract_to_file(json: bool) -> String {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("draft.md");
        std::fs::write(&input, DRAFT).unwrap();
        let out = temp_dir.path().join("report");
        let args = ExtractArgs {
            file: input,
            json,
            output: Some(out.clone()),
            verbose: false,
        };
        args.execute().unwrap();
        std::fs::read_to_string(&out).unwrap()
    }

    #[test]
    fn test_text_report_lists_presence_and_counts() {
        let report = extract_to_file(false);
        assert!(report.contains("Word count: 16"));
        assert!(report.contains("Reading time: 1 min"));
        assert!(report.contains("Executive summary: present"));
        assert!(report.contains("Did you know: missing"));
        assert!(report.contains("By the numbers: 2 items"));
    }

    #[test]
    fn test_json_report_contains_sections() {
        let report = extract_to_file(true);
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["word_count"], 16);
        assert_eq!(value["reading_time_minutes"], 1);
        assert_eq!(value["sections"]["executive_summary"], "Short and sweet.");
        assert_eq!(value["sections"]["by_the_numbers"][0], "one");
        assert_eq!(value["sections"]["did_you_know"], serde_json::Value::Null);
    }
}
