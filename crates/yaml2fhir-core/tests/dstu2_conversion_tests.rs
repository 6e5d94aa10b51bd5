//! End-to-end DSTU2 conversions from YAML data objects

use serde_json::{Value, json};
use yaml2fhir_core::{ConvertError, FhirVersion, convert, lookup, supported_resource_types};

fn yaml(source: &str) -> Value {
    serde_yaml::from_str(source).unwrap()
}

/// Checks equality, allowing for a run-time assigned id
fn assert_eq_ignoring_id(actual: &Value, mut expected: Value) {
    let id = actual["id"].as_str().expect("id must be a string");
    assert!(!id.is_empty());
    expected["id"] = Value::String(id.to_string());
    assert_eq!(actual, &expected);
}

#[test]
fn test_blank_patient() {
    let data = yaml("resourceType: Patient");
    let result = convert(&data, None, "dstu2").unwrap();

    assert_eq_ignoring_id(&result, json!({ "resourceType": "Patient" }));
}

#[test]
fn test_blank_patient_with_supplied_id() {
    let data = yaml("resourceType: Patient");
    let result = convert(&data, Some("123"), "dstu2").unwrap();

    assert_eq!(result, json!({ "resourceType": "Patient", "id": "123" }));
}

#[test]
fn test_blank_encounter_with_defaults_and_patient_reference() {
    let data = yaml("resourceType: Encounter");
    let result = convert(&data, Some("123"), "dstu2").unwrap();

    assert_eq_ignoring_id(
        &result,
        json!({
            "resourceType": "Encounter",
            "patient": { "reference": "Patient/123" },
            "status": "finished"
        }),
    );
}

#[test]
fn test_patient_with_top_level_properties() {
    let data = yaml(
        r#"
resourceType: Patient
active: true
name: Bobby Jones
gender: male
birthDate: 2000-11-30
maritalStatus: http://hl7.org/fhir/marital-status#U Unmarried
"#,
    );
    let result = convert(&data, Some("123"), "dstu2").unwrap();

    assert_eq!(
        result,
        json!({
            "resourceType": "Patient",
            "id": "123",
            "active": true,
            "name": [{
                "family": ["Jones"],
                "given": ["Bobby"]
            }],
            "gender": "male",
            "birthDate": "2000-11-30",
            "maritalStatus": {
                "coding": [{
                    "system": "http://hl7.org/fhir/marital-status",
                    "code": "U",
                    "display": "Unmarried"
                }],
                "text": "Unmarried"
            }
        })
    );
}

#[test]
fn test_observation_with_top_level_properties() {
    let data = yaml(
        r#"
resourceType: Observation
id: 456
status: amended
code: LOINC#12345-6 Fake LOINC Code
issued: 2018-10-10
comments: My Comments
"#,
    );
    let result = convert(&data, Some("123"), "dstu2").unwrap();

    assert_eq!(
        result,
        json!({
            "resourceType": "Observation",
            "id": "456",
            "subject": { "reference": "Patient/123" },
            "status": "amended",
            "code": {
                "coding": [{
                    "system": "http://loinc.org",
                    "code": "12345-6",
                    "display": "Fake LOINC Code"
                }],
                "text": "Fake LOINC Code"
            },
            "issued": "2018-10-10T00:00:00.000Z",
            "comments": "My Comments"
        })
    );
}

#[test]
fn test_unsupported_fhir_version() {
    let data = yaml("resourceType: Patient");
    let err = convert(&data, Some("123"), "r4").unwrap_err();

    assert!(err.to_string().contains("Unsupported version of FHIR: r4"));
}

#[test]
fn test_missing_resource_type() {
    let data = yaml("id: abc");
    let err = convert(&data, Some("123"), "dstu2").unwrap_err();

    assert!(matches!(err, ConvertError::MissingResourceType));
    assert!(
        err.to_string()
            .contains("Each data object must specify its \"resourceType\"")
    );
}

#[test]
fn test_unsupported_resource_type() {
    // MedicationRequest is called MedicationOrder in DSTU2
    let data = yaml("resourceType: MedicationRequest");
    let err = convert(&data, Some("123"), "dstu2").unwrap_err();

    assert!(
        err.to_string()
            .contains("Unsupported resourceType: MedicationRequest")
    );
}

#[test]
fn test_invalid_property() {
    // Procedure.notDone is "notPerformed" in DSTU2
    let data = yaml("resourceType: Procedure\nnotDone: true");
    let err = convert(&data, Some("123"), "dstu2").unwrap_err();

    assert!(
        err.to_string()
            .contains("Procedure does not contain the property: notDone")
    );
}

#[test]
fn test_every_type_gets_id_and_defaults() {
    for resource_type in supported_resource_types(FhirVersion::Dstu2) {
        let data = json!({ "resourceType": resource_type });
        let result = convert(&data, None, "dstu2").unwrap();
        let descriptor = lookup(FhirVersion::Dstu2, resource_type).unwrap();

        assert!(!result["id"].as_str().unwrap().is_empty(), "{resource_type}");
        for (name, value) in descriptor.defaults() {
            assert_eq!(&result[*name], value, "{resource_type}.{name}");
        }
        // No id supplied, so no reference is wired
        if let Some(reference) = descriptor.patient_reference() {
            assert!(result.get(reference).is_none(), "{resource_type}");
        }
    }
}

#[test]
fn test_every_non_patient_type_references_supplied_patient() {
    for resource_type in supported_resource_types(FhirVersion::Dstu2) {
        let data = json!({ "resourceType": resource_type });
        let result = convert(&data, Some("abc"), "dstu2").unwrap();
        let descriptor = lookup(FhirVersion::Dstu2, resource_type).unwrap();

        assert_eq!(result["id"], "abc");
        match descriptor.patient_reference() {
            Some(reference) => {
                assert_eq!(result[reference], json!({ "reference": "Patient/abc" }))
            }
            None => assert_eq!(resource_type, "Patient"),
        }
    }
}

#[test]
fn test_generated_ids_differ() {
    let data = yaml("resourceType: Condition");
    let first = convert(&data, None, "dstu2").unwrap();
    let second = convert(&data, None, "dstu2").unwrap();

    assert_ne!(first["id"], second["id"]);
}

#[test]
fn test_conversion_is_deterministic_apart_from_generated_id() {
    let data = yaml(
        r#"
resourceType: Immunization
vaccineCode: CVX#140 Influenza, seasonal, injectable, preservative free
date: 2017-09-01
doseQuantity: 0.5 mL
"#,
    );
    let mut first = convert(&data, None, "dstu2").unwrap();
    let mut second = convert(&data, None, "dstu2").unwrap();
    first["id"] = Value::Null;
    second["id"] = Value::Null;

    assert_eq!(first, second);
    assert_eq!(first["status"], "completed");
    assert_eq!(first["wasNotGiven"], false);
    assert_eq!(
        first["vaccineCode"]["coding"][0]["system"],
        "http://hl7.org/fhir/sid/cvx"
    );
    assert_eq!(first["doseQuantity"]["unit"], "mL");
}

#[test]
fn test_user_value_overrides_default_and_reference() {
    let data = yaml(
        r#"
resourceType: Condition
verificationStatus: provisional
patient: Patient/other
onsetDateTime: 2015-04-02T10:00:00-05:00
bodySite:
  - SCT#368209003 Right arm
  - SCT#368208006 Left arm
"#,
    );
    let result = convert(&data, Some("123"), "dstu2").unwrap();

    assert_eq!(result["verificationStatus"], "provisional");
    assert_eq!(result["patient"], json!({ "reference": "Patient/other" }));
    assert_eq!(result["onsetDateTime"], "2015-04-02T15:00:00.000Z");
    assert_eq!(result["bodySite"][1]["text"], "Left arm");
}

#[test]
fn test_structured_values_pass_through() {
    let data = yaml(
        r#"
resourceType: Observation
code:
  coding:
    - system: http://loinc.org
      code: 8480-6
  text: Systolic blood pressure
valueQuantity:
  value: 120
  unit: mmHg
"#,
    );
    let result = convert(&data, None, "dstu2").unwrap();

    assert_eq!(result["code"]["text"], "Systolic blood pressure");
    assert_eq!(result["valueQuantity"], json!({ "value": 120, "unit": "mmHg" }));
}

#[test]
fn test_blank_id_in_data_keeps_assigned_id() {
    let data = yaml("resourceType: Patient\nid: ''");
    let generated = convert(&data, None, "dstu2").unwrap();
    assert_eq_ignoring_id(&generated, json!({ "resourceType": "Patient" }));

    let data = yaml("resourceType: Encounter\nid: '   '");
    let supplied = convert(&data, Some("123"), "dstu2").unwrap();
    assert_eq!(supplied["id"], "123");
    assert_eq!(supplied["patient"]["reference"], "Patient/123");
}
