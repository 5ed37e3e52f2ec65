//! Record types produced by the section extractors.
//!
//! Field-for-field these mirror the serialized output higher-level
//! consumers already depend on: absent leaves serialize as `null`,
//! repeated leaves as arrays.

use ccdex_core::{DocumentType, ParsedTimestamp};
use serde::Serialize;

/// An HL7 person name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonName {
    /// Name prefix (e.g., "Dr.").
    pub prefix: Option<String>,

    /// Given names, in document order.
    pub given: Vec<String>,

    /// Family name.
    pub family: Option<String>,
}

/// An HL7 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    /// Street address lines, in document order.
    pub street: Vec<String>,

    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
}

/// A low/high effective-time range.
///
/// Either bound may be absent; documents routinely carry open-ended
/// ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<ParsedTimestamp>,
    pub to: Option<ParsedTimestamp>,
}

/// One problem-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Problem {
    pub date: DateRange,

    /// Display name of the problem observation code.
    pub name: Option<String>,

    /// Status observation display name (e.g., "Active", "Resolved").
    pub status: Option<String>,

    /// Age at onset, in years.
    pub age: Option<u32>,

    pub code: Option<String>,
    pub code_system: Option<String>,
}

/// Patient demographics from `recordTarget`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Demographics {
    pub name: PersonName,

    /// Date of birth.
    pub dob: Option<ParsedTimestamp>,

    pub gender: Option<String>,
    pub address: Address,
    pub phone: Option<String>,
}

/// The extracted document: detected type plus section records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    /// Detected document type.
    #[serde(rename = "type")]
    pub document_type: DocumentType,

    /// Absent for inputs with no extraction pipeline (C32, JSON,
    /// unknown XML).
    pub demographics: Option<Demographics>,

    pub problems: Vec<Problem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_serialization() {
        let doc = ExtractedDocument {
            document_type: DocumentType::Unknown,
            demographics: None,
            problems: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&doc).expect("serializes"),
            r#"{"type":"unknown","demographics":null,"problems":[]}"#
        );
    }

    #[test]
    fn test_problem_absent_leaves_serialize_as_null() {
        let problem = Problem {
            date: DateRange {
                from: None,
                to: None,
            },
            name: Some("Pneumonia".to_string()),
            status: None,
            age: None,
            code: None,
            code_system: None,
        };
        let json = serde_json::to_value(&problem).expect("serializes");
        assert_eq!(json["name"], "Pneumonia");
        assert!(json["status"].is_null());
        assert!(json["date"]["from"].is_null());
    }
}
