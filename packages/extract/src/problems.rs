//! Problems section extractor (CCDA).
//!
//! Walks the entries of the problems section and shapes each into a
//! [`Problem`] record. Every lookup is absent-safe: a document with no
//! problems section, or entries missing half their observations, still
//! extracts cleanly.

use ccdex_core::{parse_timestamp, Navigator};

use crate::common::entries;
use crate::types::{DateRange, Problem};

/// Section-level template OID for the CCDA problems section.
pub const PROBLEMS_SECTION_OID: &str = "2.16.840.1.113883.10.20.22.2.5";

/// Entry-level problem observation template OID.
const PROBLEM_OBSERVATION_OID: &str = "2.16.840.1.113883.10.20.22.4.4";

/// Entry-level status observation template OID.
const STATUS_OBSERVATION_OID: &str = "2.16.840.1.113883.10.20.22.4.6";

/// Entry-level age observation template OID.
const AGE_OBSERVATION_OID: &str = "2.16.840.1.113883.10.20.22.4.31";

/// Extract the problems list from a CCDA document root.
#[must_use]
pub fn extract_problems(root: Navigator<'_>) -> Vec<Problem> {
    let section = root.find_by_template(PROBLEMS_SECTION_OID).first();

    entries(section)
        .iter()
        .map(extract_problem)
        .collect()
}

/// Shape one `entry` element into a [`Problem`].
fn extract_problem(entry: Navigator<'_>) -> Problem {
    // vendors nest effectiveTime at different depths under the entry
    let effective = entry.descendants_by_tag("effectiveTime").first();
    let date = DateRange {
        from: effective
            .child_by_tag("low")
            .attr("value")
            .and_then(parse_timestamp),
        to: effective
            .child_by_tag("high")
            .attr("value")
            .and_then(parse_timestamp),
    };

    let code = entry
        .find_by_template(PROBLEM_OBSERVATION_OID)
        .first()
        .child_by_tag("code");

    let status = entry
        .find_by_template(STATUS_OBSERVATION_OID)
        .first()
        .child_by_tag("value")
        .attr("displayName")
        .map(str::to_string);

    let age = entry
        .find_by_template(AGE_OBSERVATION_OID)
        .first()
        .child_by_tag("value")
        .attr("value")
        .and_then(|v| v.parse().ok());

    Problem {
        date,
        name: code.attr("displayName").map(str::to_string),
        status,
        age,
        code: code.attr("code").map(str::to_string),
        code_system: code.attr("codeSystem").map(str::to_string),
    }
}
