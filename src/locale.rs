//! Opaque locale identifiers for content localization.
//!
//! A locale is carried as an opaque language tag, for example `sv` or
//! `de-DE`. The tag is stored and rendered verbatim; only the primary
//! language subtag takes part in content matching.

use std::fmt;

/// An opaque, equality-comparable locale identifier.
///
/// # Examples
///
/// ```
/// use cola_content::Locale;
///
/// let swedish = Locale::new("sv-SE");
/// assert_eq!(swedish.tag(), "sv-SE");
/// assert_eq!(swedish.language(), "sv");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Constructs a locale from a language tag, stored as-is.
    pub fn new(tag: impl Into<String>) -> Self {
        Locale { tag: tag.into() }
    }

    /// Returns the full language tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the primary language subtag, lowercased.
    ///
    /// The subtag is the segment before the first `-` or `_`, so region and
    /// script parts never take part in matching.
    pub fn language(&self) -> String {
        self.tag
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or("")
            .to_ascii_lowercase()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Locale::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Locale::new(tag)
    }
}
