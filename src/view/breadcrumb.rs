//! Breadcrumb: the selected path as display parts

use crate::selection::Selection;

pub const PLACEHOLDER: &str = "Select a grade to begin";
pub const SEPARATOR: &str = " › ";

/// Grade name, domain name, cluster name, standard code, sub-standard code
///
/// A sub-standard whose code repeats the standard's code is not shown twice.
pub fn project(state: &Selection) -> Vec<String> {
    let mut parts: Vec<String> = [
        &state.grade_name,
        &state.domain_name,
        &state.cluster_name,
        &state.standard_code,
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .cloned()
    .collect();

    if let Some(sub) = state.sub_standard_code.as_ref().filter(|s| !s.is_empty()) {
        if state.standard_code.as_ref() != Some(sub) {
            parts.push(sub.clone());
        }
    }
    parts
}

/// Single-line rendering used by the headless CLI
pub fn to_line(parts: &[String]) -> String {
    if parts.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        parts.join(SEPARATOR)
    }
}
