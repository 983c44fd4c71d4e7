//! Section extraction for EchoWrite newsletter drafts.
//!
//! The draft review page shows three sections in dedicated panels rather
//! than inline in the rendered body. This crate pulls those sections out
//! of the raw markdown and computes the word-count and reading-time
//! figures shown alongside them.
//!
//! ```
//! use ew_sections::parse_newsletter_sections;
//!
//! let sections = parse_newsletter_sections("## 📝 Executive Summary\nAgents are here.\n");
//! assert_eq!(sections.executive_summary.as_deref(), Some("Agents are here."));
//! ```

pub(crate) mod extract;
pub(crate) mod reading;

pub use extract::{NewsletterSections, parse_newsletter_sections};
pub use reading::{reading_time_minutes, word_count};
