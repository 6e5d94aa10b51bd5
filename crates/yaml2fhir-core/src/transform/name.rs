//! Plain-text name splitting

use crate::fhir_types::HumanName;

/// Split `"First [Middle...] Last"` into a DSTU2 HumanName
///
/// The last word is the family name and every word before it is a given
/// name. A single word is taken as the family name.
pub fn to_human_name(value: &str) -> HumanName {
    let mut words: Vec<String> = value.split_whitespace().map(str::to_string).collect();
    let family = words.pop().into_iter().collect();
    HumanName {
        family,
        given: words,
    }
}
