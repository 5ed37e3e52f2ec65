//! Error types for the core parsing layer.
//!
//! Only document-level parse failure is an error. Navigation misses,
//! unparseable timestamps and unrecognized null-flavor symbols are all
//! expressed as absent or fallback values, so section extractors never
//! need exception-style control flow for routine data sparsity.

use thiserror::Error;

/// Main error type for document parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input looked like XML but is not well-formed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Input was neither XML nor valid JSON.
    #[error("input is neither well-formed XML nor valid JSON: {source}")]
    UnrecognizedInput {
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, ParseError>;
