//! Image resolution with URL validation and stock fallbacks.
//!
//! Generated newsletters occasionally carry broken image URLs (failed
//! template interpolation leaves `undefined`/`null` markers, or the source
//! emits a relative path). Every image slot must still render, so invalid
//! sources resolve to a fixed stock photo chosen by the alt text.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use url::Url;

/// Regex to match markdown image syntax.
static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

/// Stock photo for hero-tier slots with an invalid source.
const HERO_FALLBACK_URL: &str =
    "https://images.unsplash.com/photo-1518709268805-4e9042af2176?w=800&h=400&fit=crop&crop=center";

/// Stock photo for article-tier slots with an invalid source.
const ARTICLE_FALLBACK_URL: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=400&fit=crop&crop=center";

/// Stock photo for all other slots with an invalid source.
const DEFAULT_FALLBACK_URL: &str =
    "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop&crop=center";

/// Styling tier selected by the alt text.
///
/// The tier decides both the emitted markup and which stock fallback is
/// used, independent of whether the source URL is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ImageTier {
    Hero,
    Article,
    Default,
}

impl ImageTier {
    /// Pick the tier by case-insensitive alt-text substring.
    fn from_alt(alt: &str) -> Self {
        let alt = alt.to_lowercase();
        if alt.contains("hero") {
            Self::Hero
        } else if alt.contains("article") {
            Self::Article
        } else {
            Self::Default
        }
    }

    fn fallback_url(self) -> &'static str {
        match self {
            Self::Hero => HERO_FALLBACK_URL,
            Self::Article => ARTICLE_FALLBACK_URL,
            Self::Default => DEFAULT_FALLBACK_URL,
        }
    }
}

/// Check whether an image source is usable as-is.
///
/// Accepts sources that parse as a URL, start with `http` (case-sensitive)
/// and contain neither `undefined` nor `null`, the residue a broken
/// upstream interpolation leaves behind.
fn is_valid_image_url(src: &str) -> bool {
    Url::parse(src).is_ok()
        && src.starts_with("http")
        && !src.contains("undefined")
        && !src.contains("null")
}

/// Replace `![alt](src)` occurrences with styled image blocks.
#[must_use]
pub fn resolve_images(content: &str) -> String {
    IMAGE_RE
        .replace_all(content, |caps: &Captures<'_>| {
            let alt = &caps[1];
            let src = &caps[2];
            let tier = ImageTier::from_alt(alt);
            let url = if is_valid_image_url(src) {
                src
            } else {
                tier.fallback_url()
            };
            image_block(tier, url, alt)
        })
        .to_string()
}

/// Emit the single-line image block for a tier.
fn image_block(tier: ImageTier, url: &str, alt: &str) -> String {
    match tier {
        ImageTier::Hero => format!(
            r#"<div class="relative w-full my-8 group"><img src="{url}" alt="{alt}" class="w-full rounded-3xl shadow-2xl object-cover h-80 border-2 border-slate-200 hover:shadow-3xl transition-all duration-500 hover:scale-[1.02] hover:border-blue-300" /><div class="absolute inset-0 bg-gradient-to-t from-black/20 to-transparent rounded-3xl opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div></div>"#
        ),
        ImageTier::Article => format!(
            r#"<div class="relative w-full my-6 group"><img src="{url}" alt="{alt}" class="w-full rounded-2xl shadow-xl object-cover h-64 border border-slate-200 hover:shadow-2xl transition-all duration-300 hover:scale-[1.01]" /><div class="absolute inset-0 bg-gradient-to-t from-black/10 to-transparent rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div></div>"#
        ),
        ImageTier::Default => format!(
            r#"<div class="relative w-full my-6 group"><img src="{url}" alt="{alt}" class="w-full rounded-2xl shadow-xl object-cover max-h-96 border border-slate-200 hover:shadow-2xl transition-all duration-300 hover:scale-[1.02]" /><div class="absolute inset-0 bg-gradient-to-t from-black/10 to-transparent rounded-2xl opacity-0 group-hover:opacity-100 transition-opacity duration-300"></div></div>"#
        ),
    }
}
