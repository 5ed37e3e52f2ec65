//! Top-level router: classify, detect, dispatch.

use ccdex_core::{detect, parse_source, DocumentType, SourceDocument};

use crate::demographics::extract_demographics;
use crate::error::Result;
use crate::problems::extract_problems;
use crate::types::ExtractedDocument;

/// Parse raw input and extract every supported section.
///
/// CCDA documents run the full pipeline. C32 (pre-CCDA) documents are
/// detected but not extracted, JSON input carries no sections, and XML
/// with no known template routes nowhere; all three produce a typed
/// empty document rather than an error.
///
/// # Arguments
/// * `source` - raw document text, BOM-prefixed or not
///
/// # Errors
/// Only document-level parse failure: input that is neither well-formed
/// XML nor valid JSON.
pub fn extract(source: &str) -> Result<ExtractedDocument> {
    let parsed = parse_source(source)?;
    let document_type = detect(&parsed);

    match (&parsed, document_type) {
        (SourceDocument::Xml(tree), DocumentType::Ccda) => {
            let root = tree.root();
            Ok(ExtractedDocument {
                document_type,
                demographics: Some(extract_demographics(root)),
                problems: extract_problems(root),
            })
        }
        _ => {
            tracing::warn!(
                document_type = document_type.as_str(),
                "no extraction pipeline for this document type"
            );
            Ok(ExtractedDocument {
                document_type,
                demographics: None,
                problems: Vec::new(),
            })
        }
    }
}
