//! FHIR Type Definitions for Conversion
//!
//! Simplified DSTU2 data types produced by the field transformers. Only the
//! elements the shorthand can express are modelled; everything else passes
//! through the converter untouched as plain JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ============================================================================
// Coding / CodeableConcept
// ============================================================================

/// A code defined by a terminology system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

/// Concept - reference to a terminology or just text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeableConcept {
    pub coding: Vec<Coding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl CodeableConcept {
    /// Wrap a single coding, using its display as the concept text
    pub fn from_coding(coding: Coding) -> Self {
        let text = coding.display.clone();
        Self {
            coding: vec![coding],
            text,
        }
    }
}

// ============================================================================
// Reference
// ============================================================================

/// A reference from one resource to another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    pub reference: String,
}

impl Reference {
    /// Reference a resource by type and logical id
    pub fn to_resource(resource_type: &str, id: &str) -> Self {
        Self {
            reference: format!("{resource_type}/{id}"),
        }
    }
}

// ============================================================================
// HumanName
// ============================================================================

/// Name of a human. DSTU2 allows repeated family names, hence the vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct HumanName {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub family: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub given: Vec<String>,
}

// ============================================================================
// Quantity
// ============================================================================

/// A measured amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quantity {
    pub value: serde_json::Number,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

// ============================================================================
// Bundle
// ============================================================================

/// FHIR Bundle resource (collection only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    /// Resource type (always "Bundle")
    pub resource_type: String,

    pub id: String,

    /// document | message | transaction | ... | collection
    #[serde(rename = "type")]
    pub type_field: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<BundleEntry>,
}

/// Entry in a bundle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BundleEntry {
    pub resource: JsonValue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_codeable_concept_serialization() {
        let concept = CodeableConcept::from_coding(Coding {
            system: Some("http://loinc.org".to_string()),
            code: "12345-6".to_string(),
            display: Some("Fake LOINC Code".to_string()),
        });

        assert_eq!(
            serde_json::to_value(&concept).unwrap(),
            json!({
                "coding": [{
                    "system": "http://loinc.org",
                    "code": "12345-6",
                    "display": "Fake LOINC Code"
                }],
                "text": "Fake LOINC Code"
            })
        );
    }

    #[test]
    fn test_codeable_concept_without_display_omits_text() {
        let concept = CodeableConcept::from_coding(Coding {
            system: None,
            code: "U".to_string(),
            display: None,
        });

        assert_eq!(
            serde_json::to_value(&concept).unwrap(),
            json!({ "coding": [{ "code": "U" }] })
        );
    }

    #[test]
    fn test_human_name_skips_empty_parts() {
        let name = HumanName {
            family: vec!["Jones".to_string()],
            given: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&name).unwrap(),
            json!({ "family": ["Jones"] })
        );
    }

    #[test]
    fn test_bundle_serialization() {
        let bundle = Bundle {
            resource_type: "Bundle".to_string(),
            id: "b1".to_string(),
            type_field: "collection".to_string(),
            entry: vec![BundleEntry {
                resource: json!({ "resourceType": "Patient", "id": "p1" }),
            }],
        };

        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["resourceType"], "Bundle");
        assert_eq!(value["type"], "collection");
        assert_eq!(value["entry"][0]["resource"]["id"], "p1");
    }
}
