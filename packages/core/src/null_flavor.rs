//! HL7 null-flavor codes: structured absence of a value.
//!
//! Clinical data distinguishes *why* a value is missing - unknown, not
//! asked, masked for privacy, and so on - via a `nullFlavor` attribute.
//! The known codes form a closed set; anything else (site-specific or
//! future HL7 codes) resolves to [`NullFlavor::Unrecognized`] carrying
//! the symbol verbatim. Resolution is total and never touches shared
//! state.

use std::fmt;

use serde::{Serialize, Serializer};

/// Display label for symbols outside the known set.
const GENERIC_LABEL: &str = "NullFlavor";

/// A coded reason for the absence of a data value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NullFlavor {
    /// `NI` - no information.
    NoInformation,
    /// `NA` - not applicable.
    NotApplicable,
    /// `UNK` - unknown.
    Unknown,
    /// `ASKU` - asked but not known.
    AskedButNotKnown,
    /// `NAV` - temporarily unavailable.
    TemporarilyUnavailable,
    /// `NASK` - not asked.
    NotAsked,
    /// `MSK` - masked.
    Masked,
    /// `OTH` - no matching code.
    NoMatchingCode,
    /// Any other symbol, carried verbatim.
    Unrecognized(String),
}

impl NullFlavor {
    /// Resolve a `nullFlavor` symbol.
    ///
    /// Total: unknown symbols produce [`NullFlavor::Unrecognized`]
    /// rather than failing, since documents may use codes not
    /// enumerated here.
    ///
    /// # Examples
    /// ```
    /// use ccdex_core::NullFlavor;
    ///
    /// assert_eq!(NullFlavor::from_symbol("UNK"), NullFlavor::Unknown);
    /// assert_eq!(
    ///     NullFlavor::from_symbol("NINF"),
    ///     NullFlavor::Unrecognized("NINF".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "NI" => Self::NoInformation,
            "NA" => Self::NotApplicable,
            "UNK" => Self::Unknown,
            "ASKU" => Self::AskedButNotKnown,
            "NAV" => Self::TemporarilyUnavailable,
            "NASK" => Self::NotAsked,
            "MSK" => Self::Masked,
            "OTH" => Self::NoMatchingCode,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// The lookup symbol. `Unrecognized` returns its carried symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::NoInformation => "NI",
            Self::NotApplicable => "NA",
            Self::Unknown => "UNK",
            Self::AskedButNotKnown => "ASKU",
            Self::TemporarilyUnavailable => "NAV",
            Self::NotAsked => "NASK",
            Self::Masked => "MSK",
            Self::NoMatchingCode => "OTH",
            Self::Unrecognized(symbol) => symbol,
        }
    }

    /// Human-readable label. Display text and lookup symbol are
    /// decoupled for `Unrecognized`: it renders the generic label
    /// regardless of the symbol it carries.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoInformation => "No Information",
            Self::NotApplicable => "Not Applicable",
            Self::Unknown => "Unknown",
            Self::AskedButNotKnown => "Asked But Not Known",
            Self::TemporarilyUnavailable => "Temporarily Unavailable",
            Self::NotAsked => "Not Asked",
            Self::Masked => "Masked",
            Self::NoMatchingCode => "No Matching Code",
            Self::Unrecognized(_) => GENERIC_LABEL,
        }
    }

    /// Whether the symbol belongs to the known set.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for NullFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl Serialize for NullFlavor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.description())
    }
}
