//! Chaining builder and read accessor for content collections.
//!
//! The write path assembles entries section by section: start at a mime-type
//! with [`Contents::with_mime_type`], append one or more values, switch
//! sections with [`ContentBuilder::and_with_mime_type`], and snapshot the
//! accumulated state as a list, a list of maps or a JSON string. The read
//! path wraps an already-built list and answers best-match lookups by
//! mime-type and locale.

use crate::content::{Content, ContentData};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::mime_type::MimeType;
use serde_json::{Map, Value};
use tracing::trace;

/// An ordered, read-only collection of content entries.
///
/// Insertion order is preserved and significant: lookups return the first
/// matching entry, and serialization emits entries in order.
///
/// # Examples
///
/// ```
/// use cola_content::{mime_type, Contents, Locale};
///
/// let contents = Contents::with_mime_type(&mime_type::TEXT_BODY)
///     .and_value("Say it")
///     .and_localized_value("Säg det", Locale::new("sv"))
///     .build();
///
/// let body = contents.for_mime_type(&mime_type::TEXT_BODY);
/// assert_eq!(body.and_then(|c| c.as_text()), Some("Say it"));
///
/// let swedish = contents.for_mime_type_and_locale(&mime_type::TEXT_BODY, &Locale::new("sv"));
/// assert_eq!(swedish.and_then(|c| c.as_text()), Some("Säg det"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contents {
    entries: Vec<Content>,
}

impl Contents {
    /// Starts a new builder, opening a section for the given mime-type.
    pub fn with_mime_type(mime_type: &MimeType) -> ContentBuilder {
        ContentBuilder {
            mime_type: mime_type.clone(),
            entries: Vec::new(),
        }
    }

    /// Wraps an already-built list of entries for querying.
    pub fn new(entries: Vec<Content>) -> Self {
        Contents { entries }
    }

    /// Decodes a JSON array of wire entries.
    ///
    /// Malformed input (missing `mimeType`/`content`, wrong node types, bad
    /// base64) fails the whole decode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] when the input is not a valid wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries = serde_json::from_str(json).map_err(|e| Error::Decode(e.to_string()))?;

        Ok(Contents { entries })
    }

    /// Returns the payload of the first entry classified by exactly the
    /// given mime-type, or `None` when no entry matches.
    ///
    /// Matching is exact on the full mime-type string, so a base value and
    /// its parameterized variants are independent addresses; neither falls
    /// back to the other.
    pub fn for_mime_type(&self, mime_type: &MimeType) -> Option<&ContentData> {
        self.entries
            .iter()
            .find(|entry| entry.matches_mime_type(mime_type))
            .map(Content::content)
    }

    /// Returns the payload of the first entry matching the given mime-type
    /// and the locale's language subtag, or `None` when no entry matches.
    pub fn for_mime_type_and_locale(
        &self,
        mime_type: &MimeType,
        locale: &Locale,
    ) -> Option<&ContentData> {
        self.entries
            .iter()
            .find(|entry| entry.matches_mime_type_and_locale(mime_type, locale))
            .map(Content::content)
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[Content] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether the collection holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<Content>> for Contents {
    fn from(entries: Vec<Content>) -> Self {
        Contents::new(entries)
    }
}

impl IntoIterator for Contents {
    type Item = Content;
    type IntoIter = std::vec::IntoIter<Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Contents {
    type Item = &'a Content;
    type IntoIter = std::slice::Iter<'a, Content>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Chaining builder accumulating content entries across mime-type sections.
///
/// Append operations consume and return the builder so chains read fluently.
/// Snapshot operations borrow it, may be called repeatedly and interleaved
/// with further appends, and always reflect the state at call time; a
/// returned snapshot is never affected by later appends.
#[derive(Debug, Clone)]
pub struct ContentBuilder {
    mime_type: MimeType,
    entries: Vec<Content>,
}

impl ContentBuilder {
    /// Appends a value to the current section.
    ///
    /// Text values that are empty or whitespace-only are silently dropped;
    /// binary values are always kept.
    pub fn and_value(mut self, value: impl Into<ContentData>) -> Self {
        self.push(value.into(), None);
        self
    }

    /// Appends a value to the current section, localized to the given
    /// locale. The same blank-drop policy as [`and_value`](Self::and_value)
    /// applies.
    pub fn and_localized_value(mut self, value: impl Into<ContentData>, locale: Locale) -> Self {
        self.push(value.into(), Some(locale));
        self
    }

    /// Switches the active section to another mime-type.
    ///
    /// Entries appended afterwards carry the new mime-type; previously
    /// accumulated entries keep their place in overall insertion order.
    pub fn and_with_mime_type(mut self, mime_type: &MimeType) -> Self {
        self.mime_type = mime_type.clone();
        self
    }

    fn push(&mut self, value: ContentData, locale: Option<Locale>) {
        if value.is_blank() {
            trace!(mime_type = %self.mime_type, "dropping blank content value");
            return;
        }

        let entry = match locale {
            Some(locale) => Content::localized(self.mime_type.value(), value, locale),
            None => Content::new(self.mime_type.value(), value),
        };

        self.entries.push(entry);
    }

    /// Snapshots the accumulated entries as a list.
    ///
    /// The returned list is an independent copy; later appends to the
    /// builder do not affect it.
    pub fn as_list(&self) -> Vec<Content> {
        self.entries.clone()
    }

    /// Snapshots the accumulated entries as plain key/value maps in wire
    /// form, one per entry.
    pub fn as_maps(&self) -> Vec<Map<String, Value>> {
        self.entries.iter().map(Content::as_map).collect()
    }

    /// Snapshots the accumulated entries as a JSON array string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] when the JSON layer fails to serialize.
    pub fn as_json(&self) -> Result<String> {
        serde_json::to_string(&self.entries).map_err(Error::Encode)
    }

    /// Finishes the chain, wrapping the accumulated entries for querying.
    pub fn build(self) -> Contents {
        Contents::new(self.entries)
    }
}
