//! Error types for the extraction layer.

use thiserror::Error;

/// Main error type for extraction and the CLI.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Document-level parse failure from the core.
    #[error(transparent)]
    Parse(#[from] ccdex_core::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_is_transparent() {
        let parse = ccdex_core::ClinicalTree::parse("<unclosed").unwrap_err();
        let err = ExtractError::from(parse);
        assert!(err.to_string().starts_with("XML parsing failed"));
    }
}
