//! Field Transformers
//!
//! Each registered property is bound to a [`Transform`] that converts one raw
//! input value into its FHIR shape. Transforms are pure: they see only the
//! value and the read-only code system alias table, never the surrounding
//! data object.
//!
//! | Transform | Input | Output |
//! |---|---|---|
//! | `Identity` | anything | unchanged |
//! | `Id` | string or number | string, `null` when blank |
//! | `CodeableConcept` | `LOINC#1234-5 Display` | `{coding: [...], text}` |
//! | `CodeableConceptList` | shorthand or list of shorthands | array of concepts |
//! | `Instant` | `2018-10-10` | `2018-10-10T00:00:00.000Z` |
//! | `DateTime` | partial date or date-time | date kept, date-time normalized |
//! | `HumanName` | `Bobby Jones` | `[{family: [Jones], given: [Bobby]}]` |
//! | `Reference` | `Practitioner/1` | `{reference: "Practitioner/1"}` |
//! | `ReferenceList` | reference or list | array of references |
//! | `Quantity` | `5.4 mg` | `{value, unit, system, code}` |
//!
//! Objects (and arrays, for list transforms) are treated as already
//! structured FHIR and pass through unchanged.

mod coding;
mod date;
mod name;

pub use coding::{CodeSystemAliases, parse_code};
pub use date::{to_date_time, to_instant};
pub use name::to_human_name;

use crate::fhir_types::{CodeableConcept, Quantity, Reference};
use serde_json::Value as JsonValue;
use thiserror::Error;

const UCUM_SYSTEM: &str = "http://unitsofmeasure.org";

/// Errors produced by a single field transform
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// Code shorthand without `#` or without a code
    #[error("expected code shorthand 'SYSTEM#code display', found '{0}'")]
    InvalidCode(String),

    /// Unparseable date or date-time
    #[error("expected a date (YYYY-MM-DD) or date-time, found '{0}'")]
    InvalidDate(String),

    /// Quantity without a numeric value
    #[error("expected a quantity '<number> <unit>', found '{0}'")]
    InvalidQuantity(String),

    /// Empty reference string
    #[error("expected a reference 'ResourceType/id', found an empty string")]
    EmptyReference,

    /// Value of the wrong JSON kind
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },
}

/// Transformation applied to one property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    Identity,
    Id,
    CodeableConcept,
    CodeableConceptList,
    Instant,
    DateTime,
    HumanName,
    Reference,
    ReferenceList,
    Quantity,
}

impl Transform {
    /// Name shown in resource listings
    pub fn name(self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::Id => "id",
            Transform::CodeableConcept => "CodeableConcept",
            Transform::CodeableConceptList => "CodeableConcept[]",
            Transform::Instant => "instant",
            Transform::DateTime => "dateTime",
            Transform::HumanName => "HumanName[]",
            Transform::Reference => "Reference",
            Transform::ReferenceList => "Reference[]",
            Transform::Quantity => "Quantity",
        }
    }

    /// Apply the transform to a raw value
    pub fn apply(
        self,
        value: &JsonValue,
        aliases: &CodeSystemAliases,
    ) -> Result<JsonValue, TransformError> {
        match self {
            Transform::Identity => Ok(value.clone()),
            Transform::Id => id_value(value),
            Transform::CodeableConcept => codeable_concept(value, aliases),
            Transform::CodeableConceptList => {
                each_item(value, |item| codeable_concept(item, aliases))
            }
            Transform::Instant => Ok(JsonValue::String(to_instant(expect_str(value)?)?)),
            Transform::DateTime => Ok(JsonValue::String(to_date_time(expect_str(value)?)?)),
            Transform::HumanName => human_name(value),
            Transform::Reference => reference(value),
            Transform::ReferenceList => each_item(value, reference),
            Transform::Quantity => quantity(value),
        }
    }
}

/// Blank ids yield `null` so the assigned id is kept
fn id_value(value: &JsonValue) -> Result<JsonValue, TransformError> {
    match value {
        JsonValue::String(id) if id.trim().is_empty() => Ok(JsonValue::Null),
        JsonValue::String(_) => Ok(value.clone()),
        JsonValue::Number(number) => Ok(JsonValue::String(number.to_string())),
        other => Err(unexpected("a string or number", other)),
    }
}

fn codeable_concept(
    value: &JsonValue,
    aliases: &CodeSystemAliases,
) -> Result<JsonValue, TransformError> {
    match value {
        JsonValue::Object(_) => Ok(value.clone()),
        JsonValue::String(shorthand) => {
            let concept = CodeableConcept::from_coding(parse_code(shorthand, aliases)?);
            Ok(to_json(&concept))
        }
        other => Err(unexpected("a code shorthand string", other)),
    }
}

fn human_name(value: &JsonValue) -> Result<JsonValue, TransformError> {
    match value {
        JsonValue::Object(_) | JsonValue::Array(_) => Ok(value.clone()),
        JsonValue::String(text) => Ok(JsonValue::Array(vec![to_json(&to_human_name(text))])),
        other => Err(unexpected("a name string", other)),
    }
}

fn reference(value: &JsonValue) -> Result<JsonValue, TransformError> {
    match value {
        JsonValue::Object(_) => Ok(value.clone()),
        JsonValue::String(target) => {
            let target = target.trim();
            if target.is_empty() {
                return Err(TransformError::EmptyReference);
            }
            Ok(to_json(&Reference {
                reference: target.to_string(),
            }))
        }
        other => Err(unexpected("a reference string", other)),
    }
}

fn quantity(value: &JsonValue) -> Result<JsonValue, TransformError> {
    match value {
        JsonValue::Object(_) => Ok(value.clone()),
        JsonValue::Number(number) => Ok(to_json(&Quantity {
            value: number.clone(),
            unit: None,
            system: None,
            code: None,
        })),
        JsonValue::String(text) => {
            let trimmed = text.trim();
            let (number, unit) = match trimmed.split_once(char::is_whitespace) {
                Some((number, unit)) => (number, Some(unit.trim().trim_matches('\''))),
                None => (trimmed, None),
            };
            let value: serde_json::Number = number
                .parse()
                .map_err(|_| TransformError::InvalidQuantity(trimmed.to_string()))?;
            let unit = unit.filter(|u| !u.is_empty()).map(str::to_string);
            Ok(to_json(&Quantity {
                value,
                system: unit.as_ref().map(|_| UCUM_SYSTEM.to_string()),
                code: unit.clone(),
                unit,
            }))
        }
        other => Err(unexpected("a quantity string or number", other)),
    }
}

/// Apply `f` to a scalar (yielding a one-element array) or to every array item
fn each_item<F>(value: &JsonValue, f: F) -> Result<JsonValue, TransformError>
where
    F: Fn(&JsonValue) -> Result<JsonValue, TransformError>,
{
    let items = match value {
        JsonValue::Array(items) => items.iter().map(&f).collect::<Result<Vec<_>, _>>()?,
        single => vec![f(single)?],
    };
    Ok(JsonValue::Array(items))
}

fn expect_str(value: &JsonValue) -> Result<&str, TransformError> {
    value
        .as_str()
        .ok_or_else(|| unexpected("a string", value))
}

fn unexpected(expected: &'static str, found: &JsonValue) -> TransformError {
    TransformError::UnexpectedType {
        expected,
        found: json_kind(found),
    }
}

/// Human-readable JSON kind of a value
pub fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// The FHIR types above only hold strings, numbers and vectors, which always
// serialize.
fn to_json<T: serde::Serialize>(value: &T) -> JsonValue {
    serde_json::to_value(value).unwrap_or(JsonValue::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn apply(transform: Transform, value: JsonValue) -> Result<JsonValue, TransformError> {
        transform.apply(&value, &CodeSystemAliases::builtin())
    }

    #[test]
    fn test_identity_passes_scalars_and_structures() {
        assert_eq!(apply(Transform::Identity, json!(true)).unwrap(), json!(true));
        assert_eq!(
            apply(Transform::Identity, json!("My Comments")).unwrap(),
            json!("My Comments")
        );
        assert_eq!(
            apply(Transform::Identity, json!({"line": ["1 Main St"]})).unwrap(),
            json!({"line": ["1 Main St"]})
        );
    }

    #[test]
    fn test_id_stringifies_numbers() {
        assert_eq!(apply(Transform::Id, json!(456)).unwrap(), json!("456"));
        assert_eq!(apply(Transform::Id, json!("abc")).unwrap(), json!("abc"));
        assert!(apply(Transform::Id, json!(true)).is_err());
    }

    #[test]
    fn test_blank_id_yields_null() {
        assert_eq!(apply(Transform::Id, json!("")).unwrap(), JsonValue::Null);
        assert_eq!(apply(Transform::Id, json!("   ")).unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_code_to_coding() {
        assert_eq!(
            apply(Transform::CodeableConcept, json!("LOINC#12345-6 Fake LOINC Code")).unwrap(),
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
    fn test_codeable_concept_list_accepts_scalar_and_list() {
        let single = apply(Transform::CodeableConceptList, json!("SCT#1 One")).unwrap();
        assert_eq!(single.as_array().unwrap().len(), 1);

        let many = apply(
            Transform::CodeableConceptList,
            json!(["SCT#1 One", "SCT#2 Two"]),
        )
        .unwrap();
        assert_eq!(many[1]["coding"][0]["code"], "2");
    }

    #[test]
    fn test_instant_and_date_time() {
        assert_eq!(
            apply(Transform::Instant, json!("2018-10-10")).unwrap(),
            json!("2018-10-10T00:00:00.000Z")
        );
        assert_eq!(
            apply(Transform::DateTime, json!("2018-10-10")).unwrap(),
            json!("2018-10-10")
        );
        assert!(matches!(
            apply(Transform::Instant, json!(20181010)),
            Err(TransformError::UnexpectedType { .. })
        ));
    }

    #[test]
    fn test_human_name() {
        assert_eq!(
            apply(Transform::HumanName, json!("Bobby Jones")).unwrap(),
            json!([{ "family": ["Jones"], "given": ["Bobby"] }])
        );
    }

    #[test]
    fn test_references() {
        assert_eq!(
            apply(Transform::Reference, json!("Practitioner/1")).unwrap(),
            json!({ "reference": "Practitioner/1" })
        );
        assert_eq!(
            apply(Transform::ReferenceList, json!(["Observation/1", "Observation/2"])).unwrap(),
            json!([{ "reference": "Observation/1" }, { "reference": "Observation/2" }])
        );
        assert_eq!(
            apply(Transform::Reference, json!("  ")),
            Err(TransformError::EmptyReference)
        );
    }

    #[test]
    fn test_quantity() {
        assert_eq!(
            apply(Transform::Quantity, json!("5.4 mg")).unwrap(),
            json!({
                "value": 5.4,
                "unit": "mg",
                "system": "http://unitsofmeasure.org",
                "code": "mg"
            })
        );
        assert_eq!(
            apply(Transform::Quantity, json!("120 'mm[Hg]'")).unwrap()["code"],
            "mm[Hg]"
        );
        assert_eq!(
            apply(Transform::Quantity, json!(3)).unwrap(),
            json!({ "value": 3 })
        );
        assert!(matches!(
            apply(Transform::Quantity, json!("lots mg")),
            Err(TransformError::InvalidQuantity(_))
        ));
    }
}
