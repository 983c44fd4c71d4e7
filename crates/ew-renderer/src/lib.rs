//! Newsletter markdown-to-HTML rendering.
//!
//! Converts the constrained markdown dialect produced by the EchoWrite
//! generation service into styled HTML fragments: images with stock
//! fallbacks, link and bold conversion, table reconstruction from
//! pipe-delimited lines, emoji-keyed section boxing and a feedback footer.
//!
//! This is deliberate regex text surgery over a fixed dialect, not a
//! general markdown parser: the upstream generator controls the input
//! shape, and the transformation must keep producing byte-identical
//! output for existing documents.
//!
//! # Example
//!
//! ```
//! use ew_renderer::{NewsletterRenderer, Variant};
//!
//! let markdown = "## 🔍 Executive Summary\nAgents everywhere.";
//! let html = NewsletterRenderer::new()
//!     .with_variant(Variant::Preview)
//!     .render(markdown);
//!
//! assert!(html.contains("newsletter-content"));
//! assert!(html.contains("Agents everywhere."));
//! ```

mod pipeline;
mod renderer;
mod variant;

pub use pipeline::{looks_like_html, scrub_prerendered, transform_markdown};
pub use renderer::{NewsletterRenderer, render_fragment};
pub use variant::Variant;
