//! Supported locales and Accept-Language negotiation.

/// Supported translation tables.
///
/// [`Locale::En`] is the fallback for absent or unrecognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (default).
    #[default]
    En,
    /// Bengali.
    Bn,
}

impl Locale {
    /// Canonical language tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }

    /// Parse a single language tag (case-insensitive, tolerant of region
    /// subtags and quality weights).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_', ';']).next().unwrap_or("");
        match lang.trim() {
            "en" => Some(Self::En),
            "bn" => Some(Self::Bn),
            _ => None,
        }
    }

    /// Negotiate a locale from an `Accept-Language` header value.
    ///
    /// Only the first listed tag is considered; quality lists are not
    /// ranked. Unrecognized values select the default locale.
    pub fn from_accept_language(header: &str) -> Self {
        header
            .split(',')
            .next()
            .and_then(Self::parse)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
