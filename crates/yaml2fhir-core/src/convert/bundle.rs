//! Bundle assembly for batches of converted resources

use super::id::IdGenerator;
use crate::fhir_types::{Bundle, BundleEntry};
use serde_json::Value as JsonValue;

/// Wrap resources in a `collection` Bundle, keeping their order
pub fn collection_bundle(resources: Vec<JsonValue>, generator: &dyn IdGenerator) -> Bundle {
    Bundle {
        resource_type: "Bundle".to_string(),
        id: generator.generate(),
        type_field: "collection".to_string(),
        entry: resources
            .into_iter()
            .map(|resource| BundleEntry { resource })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::id::UuidGenerator;
    use serde_json::json;

    #[test]
    fn test_collection_bundle_keeps_order() {
        let bundle = collection_bundle(
            vec![
                json!({ "resourceType": "Patient", "id": "1" }),
                json!({ "resourceType": "Encounter", "id": "2" }),
            ],
            &UuidGenerator,
        );

        assert_eq!(bundle.type_field, "collection");
        assert!(!bundle.id.is_empty());
        assert_eq!(bundle.entry.len(), 2);
        assert_eq!(bundle.entry[1].resource["resourceType"], "Encounter");
    }

    #[test]
    fn test_empty_bundle_has_no_entries() {
        let bundle = collection_bundle(Vec::new(), &UuidGenerator);
        let value = serde_json::to_value(&bundle).unwrap();
        assert!(value.get("entry").is_none());
    }
}
