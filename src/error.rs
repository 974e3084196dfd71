//! Error types for the content crate.

use thiserror::Error;

/// The main error type for content codec operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed wire input (missing field, wrong node type, bad base64)
    #[error("Decode error: {0}")]
    Decode(String),

    /// Serialization failure in the JSON layer
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Specialized Result type for content operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Decode("missing field `mimeType`".to_string());
        assert_eq!(err.to_string(), "Decode error: missing field `mimeType`");
    }

    #[test]
    fn test_encode_error_wraps_source() {
        // Force a serde_json error by serializing a map with a non-string key
        let bad: std::collections::HashMap<Vec<u8>, u8> =
            [(vec![1u8], 1u8)].into_iter().collect();
        let source = serde_json::to_string(&bad).unwrap_err();

        let err = Error::Encode(source);
        assert!(err.to_string().starts_with("Encode error:"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_debug() {
        let err = Error::Decode("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Decode"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(Error::Decode("error".to_string()));
        assert!(err_result.is_err());
    }
}
