//! `ew render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use ew_renderer::{NewsletterRenderer, Variant, looks_like_html, render_fragment};

use crate::commands::{read_input, write_payload};
use crate::error::CliError;
use crate::output::Output;

/// Rendering variant selectable on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    /// Constrained styling for email clients.
    Email,
    /// Full interactive preview styling.
    Preview,
    /// Compact styling for the draft review page.
    Draft,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Email => Variant::Email,
            VariantArg::Preview => Variant::Preview,
            VariantArg::Draft => Variant::Draft,
        }
    }
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Newsletter markdown file to render (use - for stdin).
    file: PathBuf,

    /// Rendering variant controlling the wrapper classes.
    #[arg(long, value_enum, default_value = "preview", env = "EW_VARIANT")]
    variant: VariantArg,

    /// Emit the transformed body without the variant wrapper.
    #[arg(long)]
    fragment: bool,

    /// Write HTML to a file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output (show rendering logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let content = read_input(&self.file)?;

        let mut html = if self.fragment {
            render_fragment(&content)
        } else {
            NewsletterRenderer::new()
                .with_variant(self.variant.into())
                .render(&content)
        };
        html.push('\n');

        tracing::info!(
            passthrough = looks_like_html(&content),
            bytes = html.len(),
            "Rendered newsletter"
        );

        write_payload(self.output.as_deref(), &html)?;
        if let Some(path) = &self.output {
            output.success(&format!("Wrote {}", path.display()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_file(markdown: &str, fragment: bool) -> String {
        let temp_dir = tempfile::tempdir().unwrap();
        let input = temp_dir.path().join("draft.md");
        std::fs::write(&input, markdown).unwrap();
        let out = temp_dir.path().join("out.html");
        let args = RenderArgs {
            file: input,
            variant: VariantArg::Email,
            fragment,
            output: Some(out.clone()),
            verbose: false,
        };
        args.execute().unwrap();
        std::fs::read_to_string(&out).unwrap()
    }

    #[test]
    fn test_render_writes_wrapped_html() {
        let html = render_to_file("# Hello\n", false);
        assert!(html.starts_with(
            "<div class=\"newsletter-renderer bg-white max-w-4xl mx-auto p-8 \
             rounded-2xl shadow-xl\"><div class=\"newsletter-content\">"
        ));
        assert!(html.ends_with("</div></div>\n"));
        assert!(html.contains("Hello</h1>"));
    }

    #[test]
    fn test_render_fragment_omits_wrapper() {
        let html = render_to_file("# Hello\n", true);
        assert!(!html.contains("newsletter-renderer"));
        assert!(html.contains("Hello</h1>"));
    }

    #[test]
    fn test_render_missing_input_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = RenderArgs {
            file: temp_dir.path().join("absent.md"),
            variant: VariantArg::Preview,
            fragment: false,
            output: None,
            verbose: false,
        };
        assert!(args.execute().is_err());
    }
}
