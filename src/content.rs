//! Content entries and their wire codec.
//!
//! A [`Content`] is the unit entry of the content format: a mime-type
//! description and content data, with an optional locale for localization.
//! On the JSON wire an entry is an object with `mimeType`, `content` and an
//! optional `locale` field; binary content travels base64-encoded.

use crate::locale::Locale;
use crate::mime_type::MimeType;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use bytes::Bytes;
use serde::de::{Deserializer, Error as _};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::trace;

/// The payload of a content entry, either text or raw bytes.
///
/// The payload kind is fixed at the call site by the Rust type handed to the
/// builder; by convention mime-types starting with `text` carry text and all
/// others carry bytes, which is also how the wire decoder picks the branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentData {
    /// Plain text content.
    Text(String),
    /// Raw binary content, base64-encoded on the wire.
    Binary(Bytes),
}

impl ContentData {
    /// Reports whether this payload counts as blank.
    ///
    /// Text that is empty or whitespace-only is blank; binary payloads never
    /// are, not even empty ones.
    pub fn is_blank(&self) -> bool {
        match self {
            ContentData::Text(text) => text.trim().is_empty(),
            ContentData::Binary(_) => false,
        }
    }

    /// Returns the text payload, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentData::Text(text) => Some(text),
            ContentData::Binary(_) => None,
        }
    }

    /// Returns the binary payload, if this is binary.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ContentData::Text(_) => None,
            ContentData::Binary(bytes) => Some(bytes),
        }
    }

    /// Reduces the payload to its wire value, base64-encoding binary data.
    pub(crate) fn to_wire_value(&self) -> Value {
        match self {
            ContentData::Text(text) => Value::String(text.clone()),
            ContentData::Binary(bytes) => Value::String(STANDARD.encode(bytes)),
        }
    }
}

impl From<&str> for ContentData {
    fn from(text: &str) -> Self {
        ContentData::Text(text.to_owned())
    }
}

impl From<String> for ContentData {
    fn from(text: String) -> Self {
        ContentData::Text(text)
    }
}

impl From<&[u8]> for ContentData {
    fn from(bytes: &[u8]) -> Self {
        ContentData::Binary(Bytes::copy_from_slice(bytes))
    }
}

impl From<Vec<u8>> for ContentData {
    fn from(bytes: Vec<u8>) -> Self {
        ContentData::Binary(Bytes::from(bytes))
    }
}

impl From<Bytes> for ContentData {
    fn from(bytes: Bytes) -> Self {
        ContentData::Binary(bytes)
    }
}

impl fmt::Display for ContentData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentData::Text(text) => f.write_str(text),
            ContentData::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

/// A content format entry.
///
/// Immutable after construction: a mime-type string, a payload and an
/// optional locale. Entries are created through the
/// [`Contents`](crate::Contents) builder and queried back out of built
/// collections.
///
/// # Examples
///
/// ```
/// use cola_content::{Content, Locale};
///
/// let body = Content::localized("text/vnd.contargo.body", "Säg det", Locale::new("sv"));
/// assert_eq!(body.mime_type(), "text/vnd.contargo.body");
/// assert_eq!(body.locale().map(|l| l.tag()), Some("sv"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    mime_type: String,
    content: ContentData,
    locale: Option<Locale>,
}

impl Content {
    /// Creates a content entry without a locale.
    pub fn new(mime_type: impl Into<String>, content: impl Into<ContentData>) -> Self {
        Content {
            mime_type: mime_type.into(),
            content: content.into(),
            locale: None,
        }
    }

    /// Creates a content entry localized to the given locale.
    pub fn localized(
        mime_type: impl Into<String>,
        content: impl Into<ContentData>,
        locale: Locale,
    ) -> Self {
        Content {
            mime_type: mime_type.into(),
            content: content.into(),
            locale: Some(locale),
        }
    }

    /// Returns the mime type of this entry.
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the payload of this entry.
    pub fn content(&self) -> &ContentData {
        &self.content
    }

    /// Returns the locale of this entry, if any.
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Reports whether this entry is classified by exactly the given mime
    /// type. Base values and parameterized variants are distinct strings and
    /// never match each other.
    pub fn matches_mime_type(&self, mime_type: &MimeType) -> bool {
        self.mime_type == *mime_type.value()
    }

    /// Reports whether this entry matches the given mime type and the given
    /// locale's language subtag.
    ///
    /// An entry without a locale never matches a locale-qualified query;
    /// region and script subtags are ignored.
    pub fn matches_mime_type_and_locale(&self, mime_type: &MimeType, locale: &Locale) -> bool {
        match &self.locale {
            Some(own) => own.language() == locale.language() && self.matches_mime_type(mime_type),
            None => false,
        }
    }

    /// Reduces this entry to a plain key/value map in wire form.
    ///
    /// The map holds `mimeType` and `content` (binary payloads as a base64
    /// string), and `locale` in its string form only when a locale is set.
    pub fn as_map(&self) -> Map<String, Value> {
        let mut map = Map::new();

        map.insert("mimeType".to_owned(), Value::String(self.mime_type.clone()));
        map.insert("content".to_owned(), self.content.to_wire_value());

        if let Some(locale) = &self.locale {
            map.insert("locale".to_owned(), Value::String(locale.to_string()));
        }

        map
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.locale {
            Some(locale) => write!(
                f,
                "Content [mimeType={}, content={}, locale={}]",
                self.mime_type, self.content, locale
            ),
            None => write!(
                f,
                "Content [mimeType={}, content={}]",
                self.mime_type, self.content
            ),
        }
    }
}

impl Serialize for Content {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let fields = if self.locale.is_some() { 3 } else { 2 };
        let mut map = serializer.serialize_map(Some(fields))?;

        map.serialize_entry("mimeType", &self.mime_type)?;

        match &self.content {
            ContentData::Text(text) => map.serialize_entry("content", text)?,
            ContentData::Binary(bytes) => {
                map.serialize_entry("content", &STANDARD.encode(bytes))?
            }
        }

        // Absent locale is omitted entirely, never emitted as null
        if let Some(locale) = &self.locale {
            map.serialize_entry("locale", locale.tag())?;
        }

        map.end()
    }
}

/// Raw wire shape of an entry, before the text/binary branch is picked.
#[derive(Deserialize)]
struct WireContent {
    #[serde(rename = "mimeType")]
    mime_type: String,
    content: String,
    #[serde(default)]
    locale: Option<Value>,
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireContent::deserialize(deserializer)?;

        let content = if wire.mime_type.starts_with("text") {
            ContentData::Text(wire.content)
        } else {
            trace!(mime_type = %wire.mime_type, "decoding binary content entry");

            let bytes = STANDARD
                .decode(wire.content.as_bytes())
                .map_err(|e| D::Error::custom(format!("invalid base64 content: {e}")))?;

            ContentData::Binary(Bytes::from(bytes))
        };

        // Only string scalars carry a usable language tag
        let locale = match wire.locale {
            Some(Value::String(tag)) => Some(Locale::new(tag)),
            _ => None,
        };

        Ok(Content {
            mime_type: wire.mime_type,
            content,
            locale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mime_type;

    #[test]
    fn test_has_pretty_display() {
        let c1 = Content::new("type", "value");
        let string1 = c1.to_string();
        assert!(string1.contains("mimeType=type"), "missing information: '{string1}'");
        assert!(string1.contains("content=value"), "missing information: '{string1}'");
        assert!(!string1.contains("locale="), "must not have information: '{string1}'");

        let c2 = Content::localized("type", "value", Locale::new("en"));
        let string2 = c2.to_string();
        assert!(string2.contains("locale=en"), "missing information: '{string2}'");
    }

    #[test]
    fn test_binary_displays_as_byte_count() {
        let c = Content::new("image/vnd.contargo.appicon", vec![1u8, 2, 3]);
        assert!(c.to_string().contains("content=<3 bytes>"));
    }

    #[test]
    fn test_blank_detection() {
        assert!(ContentData::from("").is_blank());
        assert!(ContentData::from("   \t\n").is_blank());
        assert!(!ContentData::from("x").is_blank());

        // Binary payloads are never blank, not even empty ones
        assert!(!ContentData::from(Vec::new()).is_blank());
        assert!(!ContentData::from(&[0u8][..]).is_blank());
    }

    #[test]
    fn test_matches_mime_type_exactly() {
        let entry = Content::new(mime_type::TEXT_APPICON_VALUE, "icon.svg");
        let variant = mime_type::TEXT_APPICON.with_params("class=small");

        assert!(entry.matches_mime_type(&mime_type::TEXT_APPICON));
        assert!(!entry.matches_mime_type(&variant));
        assert!(!entry.matches_mime_type(&mime_type::TEXT_BODY));
    }

    #[test]
    fn test_matches_locale_by_language_subtag() {
        let entry = Content::localized(mime_type::TEXT_BODY_VALUE, "Säg det", Locale::new("sv-SE"));

        assert!(entry.matches_mime_type_and_locale(&mime_type::TEXT_BODY, &Locale::new("sv")));
        assert!(entry.matches_mime_type_and_locale(&mime_type::TEXT_BODY, &Locale::new("sv-FI")));
        assert!(!entry.matches_mime_type_and_locale(&mime_type::TEXT_BODY, &Locale::new("de")));
        assert!(!entry.matches_mime_type_and_locale(&mime_type::TEXT_SUBJECT, &Locale::new("sv")));
    }

    #[test]
    fn test_unlocalized_entry_never_matches_locale_query() {
        let entry = Content::new(mime_type::TEXT_BODY_VALUE, "Say it");
        assert!(!entry.matches_mime_type_and_locale(&mime_type::TEXT_BODY, &Locale::new("en")));
    }

    #[test]
    fn test_as_map_keys() {
        let plain = Content::new("text/vnd.contargo.body", "Say it");
        let map = plain.as_map();
        assert_eq!(map.get("mimeType"), Some(&Value::String("text/vnd.contargo.body".into())));
        assert_eq!(map.get("content"), Some(&Value::String("Say it".into())));
        assert!(!map.contains_key("locale"));

        let localized = Content::localized("text/vnd.contargo.body", "Säg det", Locale::new("sv"));
        let map = localized.as_map();
        assert_eq!(map.get("locale"), Some(&Value::String("sv".into())));
    }

    #[test]
    fn test_as_map_encodes_binary_as_base64() {
        let entry = Content::new("image/vnd.contargo.appicon", vec![1u8, 2, 3]);
        let map = entry.as_map();
        assert_eq!(map.get("content"), Some(&Value::String("AQID".into())));
    }

    #[test]
    fn test_reads_proper_content_from_json() {
        let json =
            r#"{"mimeType": "text/vnd.contargo.appicon", "content": "some-app-icon", "locale": "sv"}"#;

        let content: Content = serde_json::from_str(json).unwrap();

        assert_eq!(content.mime_type(), mime_type::TEXT_APPICON_VALUE);
        assert_eq!(content.content().as_text(), Some("some-app-icon"));
        assert_eq!(content.locale().map(Locale::language), Some("sv".to_string()));
    }

    #[test]
    fn test_reads_proper_byte_content_from_json() {
        let json = r#"{"mimeType": "image/vnd.contargo.appicon", "content": "AQID"}"#;

        let content: Content = serde_json::from_str(json).unwrap();

        assert_eq!(content.mime_type(), mime_type::IMAGE_APPICON_VALUE);
        assert_eq!(content.content().as_bytes(), Some(&[1u8, 2, 3][..]));
        assert!(content.locale().is_none());
    }

    #[test]
    fn test_decode_fails_on_missing_fields() {
        let missing_mime: Result<Content, _> = serde_json::from_str(r#"{"content": "x"}"#);
        assert!(missing_mime.is_err());

        let missing_content: Result<Content, _> =
            serde_json::from_str(r#"{"mimeType": "text/vnd.contargo.body"}"#);
        assert!(missing_content.is_err());
    }

    #[test]
    fn test_decode_fails_on_wrong_node_type() {
        let result: Result<Content, _> =
            serde_json::from_str(r#"{"mimeType": "text/vnd.contargo.body", "content": 42}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_fails_on_bad_base64() {
        let result: Result<Content, _> =
            serde_json::from_str(r#"{"mimeType": "image/vnd.contargo.appicon", "content": "%%%"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_ignores_non_scalar_locale() {
        let json =
            r#"{"mimeType": "text/vnd.contargo.body", "content": "Say it", "locale": {"lang": "sv"}}"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert!(content.locale().is_none());

        let json = r#"{"mimeType": "text/vnd.contargo.body", "content": "Say it", "locale": 7}"#;
        let content: Content = serde_json::from_str(json).unwrap();
        assert!(content.locale().is_none());
    }

    #[test]
    fn test_serialize_omits_absent_locale() {
        let entry = Content::new("text/vnd.contargo.body", "Say it");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("locale"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_binary_round_trip() {
        let bytes = vec![0u8, 255, 128, 7];
        let entry = Content::new("image/vnd.contargo.appicon", bytes.clone());

        let json = serde_json::to_string(&entry).unwrap();
        let decoded: Content = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.content().as_bytes(), Some(&bytes[..]));
    }

    #[test]
    fn test_empty_binary_round_trip() {
        let entry = Content::new("image/vnd.contargo.appicon", Vec::new());

        let json = serde_json::to_string(&entry).unwrap();
        let decoded: Content = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.content().as_bytes(), Some(&[][..]));
    }
}
