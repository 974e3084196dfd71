//! Typed, localizable content entries with vendor mime-type classification.
//!
//! This crate provides the building blocks for attaching human-facing,
//! localizable content fragments (subject, description, body, icon
//! references) to other domain objects:
//! - [`MimeType`] values classifying entries, with parameterized variants
//! - [`Content`] entries carrying a text or binary payload and an optional
//!   [`Locale`]
//! - the [`Contents`] chaining builder and read accessor, with a JSON wire
//!   codec (binary payloads travel base64-encoded)
//!
//! All operations are synchronous, in-memory value transformations; built
//! collections are immutable and safe to share across threads.
//!
//! # Examples
//!
//! ```
//! use cola_content::{mime_type, Contents, Locale};
//!
//! let json = Contents::with_mime_type(&mime_type::TEXT_BODY)
//!     .and_value("Say it")
//!     .and_localized_value("Säg det", Locale::new("sv"))
//!     .as_json()?;
//!
//! let contents = Contents::from_json(&json)?;
//! let swedish = contents.for_mime_type_and_locale(&mime_type::TEXT_BODY, &Locale::new("sv"));
//! assert_eq!(swedish.and_then(|c| c.as_text()), Some("Säg det"));
//! # Ok::<(), cola_content::Error>(())
//! ```

pub mod content;
pub mod contents;
pub mod error;
pub mod locale;
pub mod mime_type;

// Re-export commonly used types
pub use content::{Content, ContentData};
pub use contents::{ContentBuilder, Contents};
pub use error::{Error, Result};
pub use locale::Locale;
pub use mime_type::MimeType;
