//! Rendering variants for the three display contexts.

/// Display context for a rendered newsletter.
///
/// The variant only selects the outer wrapper's utility classes. The
/// transformation itself is identical across variants, so the same
/// document renders to the same inner fragment everywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Variant {
    /// Outgoing email body.
    Email,
    /// Full-width browser preview.
    #[default]
    Preview,
    /// Compact draft review card.
    Draft,
}

impl Variant {
    /// Wrapper utility classes for this variant.
    #[must_use]
    pub fn wrapper_classes(self) -> &'static str {
        match self {
            Self::Email => "bg-white max-w-4xl mx-auto p-8 rounded-2xl shadow-xl",
            Self::Preview => {
                "bg-white max-w-5xl mx-auto p-8 rounded-3xl shadow-2xl border border-slate-200"
            }
            Self::Draft => {
                "bg-white max-w-4xl mx-auto p-6 rounded-2xl shadow-lg border border-slate-200"
            }
        }
    }
}
