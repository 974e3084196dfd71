//! Vendor mime-type classification values.
//!
//! Content entries are classified by a `mimeType` string property. The values
//! are not required to be IANA or RFC compliant, but the well-known constants
//! below keep to a structure that stays compatible with how registered media
//! types are declared:
//!
//! ```text
//! {type}/vnd.contargo.{name}
//! {type}/vnd.contargo.{name};{params}
//! {type}/vnd.contargo.{name}+{subtype}
//! {type}/vnd.contargo.{name}+{subtype};{params}
//! ```
//!
//! `vnd.contargo` is the vendor specifier. A parameter suffix marks an
//! alternate rendering of the same conceptual field, for example
//! `text/vnd.contargo.appicon+uri;class=small`.

use once_cell::sync::Lazy;
use std::fmt;

/// Value of [`static@TEXT_SUBJECT`].
pub const TEXT_SUBJECT_VALUE: &str = "text/vnd.contargo.subject";

/// Value of [`static@TEXT_DESCRIPTION`].
pub const TEXT_DESCRIPTION_VALUE: &str = "text/vnd.contargo.description";

/// Value of [`static@TEXT_BODY`].
pub const TEXT_BODY_VALUE: &str = "text/vnd.contargo.body";

/// Value of [`static@TEXT_APPICON`].
pub const TEXT_APPICON_VALUE: &str = "text/vnd.contargo.appicon";

/// Value of [`static@IMAGE_APPICON`].
pub const IMAGE_APPICON_VALUE: &str = "image/vnd.contargo.appicon";

/// A subject describes and gives context to some content in a single line of
/// text, for example an email or message subject line.
pub static TEXT_SUBJECT: Lazy<MimeType> = Lazy::new(|| MimeType::new(TEXT_SUBJECT_VALUE));

/// A description gives summary information about some content, for example a
/// clarification of the domain type of a search result.
pub static TEXT_DESCRIPTION: Lazy<MimeType> = Lazy::new(|| MimeType::new(TEXT_DESCRIPTION_VALUE));

/// Text representing the full content of some information, for example a
/// message body that is sent and persisted in multiple languages.
pub static TEXT_BODY: Lazy<MimeType> = Lazy::new(|| MimeType::new(TEXT_BODY_VALUE));

/// An application icon image resource reference, such as a path or a URI to a
/// scalable image. Authors may extend it with a classification parameter,
/// for example `;class=small`.
pub static TEXT_APPICON: Lazy<MimeType> = Lazy::new(|| MimeType::new(TEXT_APPICON_VALUE));

/// An application binary image icon.
pub static IMAGE_APPICON: Lazy<MimeType> = Lazy::new(|| MimeType::new(IMAGE_APPICON_VALUE));

/// An immutable mime-type classification value.
///
/// The wrapped string is used verbatim; no checks or validations are made.
/// Equality and hashing are derived from the string value, and a `MimeType`
/// also compares equal to a raw string carrying the same value.
///
/// # Examples
///
/// ```
/// use cola_content::MimeType;
///
/// let body = MimeType::new("text/vnd.contargo.body");
/// assert_eq!(body.value(), "text/vnd.contargo.body");
/// assert_eq!(body, "text/vnd.contargo.body");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimeType {
    value: String,
}

impl MimeType {
    /// Constructs a new mime type with the given value, used as-is.
    pub fn new(value: impl Into<String>) -> Self {
        MimeType {
            value: value.into(),
        }
    }

    /// Returns the mime type value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Derives a parameterized variant of this mime type.
    ///
    /// The receiver is left untouched; the returned value is the base value
    /// with a `;params` suffix, addressing an alternate rendering of the
    /// same conceptual field.
    ///
    /// # Examples
    ///
    /// ```
    /// use cola_content::MimeType;
    ///
    /// let icon = MimeType::new("text/vnd.contargo.appicon");
    /// let small = icon.with_params("class=small");
    /// assert_eq!(small.value(), "text/vnd.contargo.appicon;class=small");
    /// assert_eq!(icon.value(), "text/vnd.contargo.appicon");
    /// ```
    pub fn with_params(&self, params: &str) -> MimeType {
        MimeType::new(format!("{};{}", self.value, params))
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<str> for MimeType {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for MimeType {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for MimeType {
    fn eq(&self, other: &String) -> bool {
        self.value == *other
    }
}

impl PartialEq<MimeType> for str {
    fn eq(&self, other: &MimeType) -> bool {
        self == other.value
    }
}

impl PartialEq<MimeType> for &str {
    fn eq(&self, other: &MimeType) -> bool {
        *self == other.value
    }
}

impl PartialEq<MimeType> for String {
    fn eq(&self, other: &MimeType) -> bool {
        *self == other.value
    }
}
