//! Shared HL7 field shaping used by every section extractor.

use ccdex_core::{Navigator, NodeSet};

use crate::types::{Address, PersonName};

/// Entries within an element (tag name `entry`).
///
/// Sections list their clinical statements as `entry` children; some
/// vendors nest them one level deeper, so this matches descendants.
#[must_use]
pub fn entries<'a>(section: Navigator<'a>) -> NodeSet<'a> {
    section.descendants_by_tag("entry")
}

/// Parse an HL7 address element (`streetAddressLine` lines, city,
/// state, postalCode, country).
///
/// Absent-safe: an absent receiver produces an all-empty address.
#[must_use]
pub fn parse_address(addr: Navigator<'_>) -> Address {
    let street = addr
        .descendants_by_tag("streetAddressLine")
        .iter()
        .filter_map(|line| line.value())
        .collect();

    Address {
        street,
        city: addr.child_by_tag("city").value(),
        state: addr.child_by_tag("state").value(),
        zip: addr.child_by_tag("postalCode").value(),
        country: addr.child_by_tag("country").value(),
    }
}

/// Parse an HL7 name element (`prefix`, repeated `given`, `family`).
#[must_use]
pub fn parse_name(name: Navigator<'_>) -> PersonName {
    let given = name
        .descendants_by_tag("given")
        .iter()
        .filter_map(|g| g.value())
        .collect();

    PersonName {
        prefix: name.child_by_tag("prefix").value(),
        given,
        family: name.child_by_tag("family").value(),
    }
}
