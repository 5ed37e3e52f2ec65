//! Document type detection via declared template identifiers.
//!
//! Clinical documents assert conformance by declaring template OIDs at
//! the document root. Detection probes a fixed, ordered list of known
//! OIDs against the tree's template index and classifies by the first
//! match. Authors sometimes declare multiple identifiers for backward
//! compatibility, so the ordering is a deliberate tie-break: the
//! superseding standard's identifier outranks the legacy one and must
//! not be masked by it.

use serde::Serialize;

use crate::source::SourceDocument;

/// Document-level template OID for HITSP C32 (pre-CCDA legacy format).
pub const C32_TEMPLATE_OID: &str = "2.16.840.1.113883.3.88.11.32.1";

/// Document-level template OID for CCDA CCD.
pub const CCDA_TEMPLATE_OID: &str = "2.16.840.1.113883.10.20.22.1.1";

/// Known document templates in priority order; first match wins.
pub const DETECTION_PRIORITY: [(&str, DocumentType); 2] = [
    (CCDA_TEMPLATE_OID, DocumentType::Ccda),
    (C32_TEMPLATE_OID, DocumentType::C32),
];

/// Classification of an input document.
///
/// Derived, never stored: recomputed from the template index each time
/// detection runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    /// HITSP C32 legacy document. Detected but not extracted.
    C32,
    /// Consolidated CDA document.
    Ccda,
    /// Generic structured-data (JSON) input.
    Json,
    /// XML with no known document template.
    Unknown,
}

impl DocumentType {
    /// String value for serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C32 => "c32",
            Self::Ccda => "ccda",
            Self::Json => "json",
            Self::Unknown => "unknown",
        }
    }
}

/// Classify a parsed input document.
///
/// XML that declares no known template is [`DocumentType::Unknown`] -
/// a normal result, not an error; surrounding logic may still route it
/// to a default document-shape handler.
///
/// # Examples
/// ```
/// use ccdex_core::{detect, parse_source, DocumentType};
///
/// let xml = r#"<?xml version="1.0"?>
/// <ClinicalDocument><templateId root="2.16.840.1.113883.10.20.22.1.1"/></ClinicalDocument>"#;
/// assert_eq!(detect(&parse_source(xml).unwrap()), DocumentType::Ccda);
///
/// assert_eq!(detect(&parse_source("{\"a\": 1}").unwrap()), DocumentType::Json);
/// ```
#[must_use]
pub fn detect(source: &SourceDocument) -> DocumentType {
    match source {
        SourceDocument::Json(_) => DocumentType::Json,
        SourceDocument::Xml(tree) => {
            let root = tree.root();
            for (oid, document_type) in DETECTION_PRIORITY {
                if !root.find_by_template(oid).is_empty() {
                    return document_type;
                }
            }
            DocumentType::Unknown
        }
    }
}
