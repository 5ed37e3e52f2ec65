//! ccdex core - semantic access to clinical document XML.
//!
//! Clinical documents (HL7 CCDA and its relatives) are produced by many
//! EHR vendors with wildly inconsistent conformance. This crate provides
//! the primitives that let section extractors work across that variance:
//!
//! - [`source`]: input classification (XML vs. JSON, BOM stripping)
//! - [`tree`]: an immutable element tree built once per document
//! - [`navigator`]: schema-aware, absence-tolerant tree queries
//! - [`detect`]: document type detection via declared template identifiers
//! - [`datetime`]: the tolerant multi-precision HL7 timestamp parser
//! - [`null_flavor`]: the HL7 "structured absence" code registry
//! - [`error`]: error types and Result alias
//!
//! Only the initial parse of malformed input fails. Every query after
//! that is total: a missing tag, template, attribute or timestamp is an
//! expected outcome in clinical data and is answered with an explicit
//! "no value", never an error.
//!
//! # Example
//!
//! ```
//! use ccdex_core::{parse_source, detect, DocumentType, SourceDocument};
//!
//! let xml = r#"<?xml version="1.0"?>
//! <ClinicalDocument>
//!   <templateId root="2.16.840.1.113883.10.20.22.1.1"/>
//!   <recordTarget/>
//! </ClinicalDocument>"#;
//!
//! let parsed = parse_source(xml).unwrap();
//! assert_eq!(detect(&parsed), DocumentType::Ccda);
//!
//! let SourceDocument::Xml(tree) = parsed else { unreachable!() };
//! assert!(tree.root().child_by_tag("recordTarget").is_present());
//! assert!(tree.root().child_by_tag("missing").value().is_none());
//! ```

pub mod datetime;
pub mod detect;
pub mod error;
pub mod navigator;
pub mod null_flavor;
pub mod source;
pub mod tree;

// Re-export commonly used items
pub use datetime::{parse_timestamp, ParsedTimestamp};
pub use detect::{detect, DocumentType};
pub use error::{ParseError, Result};
pub use navigator::{Navigator, NodeSet};
pub use null_flavor::NullFlavor;
pub use source::{parse_source, strip_bom, SourceDocument};
pub use tree::ClinicalTree;
