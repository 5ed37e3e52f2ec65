//! Input classification: XML vs. JSON, ahead of tree construction.
//!
//! Real-world feeds arrive with UTF-8 byte-order marks, without `<?xml`
//! declarations, or as JSON exports. Classification inspects a
//! whitespace-trimmed prefix and produces an explicit result type; the
//! detector and extractors consume that, never probing capabilities at
//! runtime.

use crate::error::{ParseError, Result};
use crate::tree::ClinicalTree;

/// UTF-8 byte-order mark (EF BB BF).
const UTF8_BOM: char = '\u{feff}';

/// A classified, parsed input document.
#[derive(Debug)]
pub enum SourceDocument {
    /// Well-formed XML, parsed into a tree.
    Xml(ClinicalTree),
    /// Generic structured data.
    Json(serde_json::Value),
}

/// Strip a leading UTF-8 byte-order mark.
///
/// # Examples
/// ```
/// use ccdex_core::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}<?xml"), "<?xml");
/// assert_eq!(strip_bom("<?xml"), "<?xml");
/// ```
#[must_use]
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix(UTF8_BOM).unwrap_or(source)
}

/// Classify and parse raw input.
///
/// Strings whose trimmed prefix is an XML declaration or a
/// `<ClinicalDocument` root tag are parsed as XML (the declaration is
/// not compulsory; some vendors omit it). Anything else is attempted as
/// JSON. Input matching neither fails with a [`ParseError`], logged
/// before propagating - the only error the core surfaces.
pub fn parse_source(source: &str) -> Result<SourceDocument> {
    let source = strip_bom(source);
    let lead = source.trim_start();

    if lead.starts_with("<?xml") || lead.starts_with("<ClinicalDocument") {
        return match ClinicalTree::parse(source) {
            Ok(tree) => Ok(SourceDocument::Xml(tree)),
            Err(error) => {
                tracing::error!(%error, "cannot parse input: malformed XML");
                Err(error)
            }
        };
    }

    match serde_json::from_str(source) {
        Ok(value) => Ok(SourceDocument::Json(value)),
        Err(source) => {
            tracing::error!(
                error = %source,
                "cannot parse input: accepts well-formed XML or JSON only"
            );
            Err(ParseError::UnrecognizedInput { source })
        }
    }
}
