//! Newsletter renderer: pipeline output plus footer and wrapper markup.

use crate::pipeline;
use crate::variant::Variant;

/// Feedback prompt appended after every markdown-rendered newsletter.
const FEEDBACK_FOOTER: &str = r#"<div class="mt-12 p-8 bg-gradient-to-br from-slate-50 to-slate-100 rounded-2xl border-2 border-slate-200 relative overflow-hidden"><div class="absolute top-0 left-0 right-0 h-1 bg-gradient-to-r from-blue-500 to-purple-500"></div><h3 class="text-2xl font-bold text-slate-800 mb-4 flex items-center justify-center gap-3"><span class="text-3xl">💬</span>How was this newsletter?</h3><p class="text-slate-600 text-lg mb-8 text-center">Your feedback helps us improve future newsletters!</p><div class="flex gap-6 justify-center flex-wrap"><button class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-green-500 to-green-600 text-white font-bold rounded-full hover:from-green-600 hover:to-green-700 transform hover:-translate-y-2 transition-all duration-300 shadow-lg hover:shadow-xl"><span class="text-2xl">👍</span>Great newsletter!</button><button class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-red-500 to-red-600 text-white font-bold rounded-full hover:from-red-600 hover:to-red-700 transform hover:-translate-y-2 transition-all duration-300 shadow-lg hover:shadow-xl"><span class="text-2xl">👎</span>Needs improvement</button></div></div>"#;

/// Render the inner fragment: transformed body plus the feedback footer.
///
/// Pre-rendered HTML documents are scrubbed and embedded with no footer;
/// only the markdown path gets the feedback prompt.
#[must_use]
pub fn render_fragment(content: &str) -> String {
    let body = pipeline::transform_markdown(content);
    if pipeline::looks_like_html(content) {
        body
    } else {
        format!("{body}{FEEDBACK_FOOTER}")
    }
}

/// Newsletter renderer.
///
/// Wraps the transformation pipeline with variant-specific container
/// markup. The output is an HTML fragment the caller injects verbatim;
/// isolating it from the host page is the caller's responsibility.
///
/// # Example
///
/// ```
/// use ew_renderer::{NewsletterRenderer, Variant};
///
/// let html = NewsletterRenderer::new()
///     .with_variant(Variant::Email)
///     .render("# AI Weekly");
///
/// assert!(html.starts_with(r#"<div class="newsletter-renderer"#));
/// assert!(html.contains("<h1"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NewsletterRenderer {
    variant: Variant,
}

impl NewsletterRenderer {
    /// Create a renderer with the default preview variant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            variant: Variant::default(),
        }
    }

    /// Set the rendering variant.
    #[must_use]
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Render a newsletter document into wrapped HTML.
    #[must_use]
    pub fn render(&self, content: &str) -> String {
        format!(
            r#"<div class="newsletter-renderer {}"><div class="newsletter-content">{}</div></div>"#,
            self.variant.wrapper_classes(),
            render_fragment(content)
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wrapper_carries_variant_classes() {
        let html = NewsletterRenderer::new()
            .with_variant(Variant::Draft)
            .render("hello");
        assert!(html.starts_with(r#"<div class="newsletter-renderer bg-white max-w-4xl mx-auto p-6"#));
        assert!(html.contains(r#"<div class="newsletter-content">"#));
        assert!(html.ends_with("</div></div>"));
    }

    #[test]
    fn test_default_variant_is_preview() {
        let html = NewsletterRenderer::new().render("hello");
        assert!(html.contains("max-w-5xl"));
    }

    #[test]
    fn test_variant_does_not_change_inner_fragment() {
        let markdown = "# Title\n\n- item";
        let email = NewsletterRenderer::new()
            .with_variant(Variant::Email)
            .render(markdown);
        let draft = NewsletterRenderer::new()
            .with_variant(Variant::Draft)
            .render(markdown);

        let inner = |html: &str| {
            let start = html.find(r#"<div class="newsletter-content">"#).unwrap();
            html[start..].to_string()
        };
        assert_eq!(inner(&email), inner(&draft));
    }

    #[test]
    fn test_markdown_path_appends_footer() {
        let html = render_fragment("# Title");
        assert!(html.contains("How was this newsletter?"));
        assert!(html.contains("Great newsletter!"));
        assert!(html.contains("Needs improvement"));
        // Footer comes after the content
        assert!(html.find("</h1>").unwrap() < html.find("How was this newsletter?").unwrap());
    }

    #[test]
    fn test_prerendered_path_has_no_footer() {
        let html = render_fragment("<h1>Already rendered</h1>");
        assert!(!html.contains("How was this newsletter?"));
        assert_eq!(html, "<h1>Already rendered</h1>");
    }

    #[test]
    fn test_footer_bypasses_paragraph_wrapping() {
        let html = render_fragment("text");
        // The footer's own markup is appended untouched, not re-wrapped
        assert!(html.ends_with("</button></div></div>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = NewsletterRenderer::new();
        let markdown = "## 🧩 Did You Know?\nfact\n\n| Trend |\n| x |";
        assert_eq!(renderer.render(markdown), renderer.render(markdown));
    }
}
