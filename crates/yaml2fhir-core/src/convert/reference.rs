//! Reference Resolver

use crate::fhir_types::Reference;
use crate::registry::{ANCHOR_RESOURCE_TYPE, ResourceDescriptor};
use serde_json::{Value as JsonValue, json};

/// Patient reference field for a resource, if one should be injected
///
/// Only non-Patient resources with a reference property get one, and only
/// when a non-empty id was supplied by the caller.
pub fn resolve_reference(
    descriptor: &ResourceDescriptor,
    supplied_id: Option<&str>,
) -> Option<(&'static str, JsonValue)> {
    if descriptor.is_anchor() {
        return None;
    }
    let id = supplied_id.filter(|id| !id.is_empty())?;
    let property = descriptor.patient_reference()?;
    let reference = Reference::to_resource(ANCHOR_RESOURCE_TYPE, id);

    Some((property, json!({ "reference": reference.reference })))
}
