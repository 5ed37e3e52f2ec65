//! Demographics extractor (`recordTarget/patientRole`).

use ccdex_core::{parse_timestamp, Navigator};

use crate::common::{parse_address, parse_name};
use crate::types::Demographics;

/// Extract patient demographics from a CCDA document root.
///
/// Tolerates any amount of sparsity: a document with an empty
/// `recordTarget` still yields a record, with every leaf absent.
#[must_use]
pub fn extract_demographics(root: Navigator<'_>) -> Demographics {
    let role = root
        .child_by_tag("recordTarget")
        .child_by_tag("patientRole");
    let patient = role.child_by_tag("patient");

    let gender_code = patient.child_by_tag("administrativeGenderCode");
    let gender = gender_code
        .attr("displayName")
        .or_else(|| gender_code.attr("code"))
        .map(str::to_string);

    Demographics {
        name: parse_name(patient.child_by_tag("name")),
        dob: patient
            .child_by_tag("birthTime")
            .attr("value")
            .and_then(parse_timestamp),
        gender,
        address: parse_address(role.child_by_tag("addr")),
        phone: role.child_by_tag("telecom").attr("value").map(str::to_string),
    }
}
