//! DSTU2 (1.0.2) resource table
//!
//! Property names follow the DSTU2 resource definitions. Common resource
//! properties (`id`, `meta`, `text`, ...) are added by the registry.

use super::{DefaultValue, ResourceSpec};
use crate::transform::Transform::{
    self, CodeableConcept, CodeableConceptList, DateTime, HumanName, Identity, Instant, Quantity,
    Reference, ReferenceList,
};

pub(super) static RESOURCES: &[ResourceSpec] = &[
    ResourceSpec {
        resource_type: "Patient",
        patient_reference: None,
        defaults: &[],
        properties: PATIENT,
    },
    ResourceSpec {
        resource_type: "Encounter",
        patient_reference: Some("patient"),
        defaults: &[("status", DefaultValue::Code("finished"))],
        properties: ENCOUNTER,
    },
    ResourceSpec {
        resource_type: "Observation",
        patient_reference: Some("subject"),
        defaults: &[("status", DefaultValue::Code("final"))],
        properties: OBSERVATION,
    },
    ResourceSpec {
        resource_type: "Condition",
        patient_reference: Some("patient"),
        defaults: &[("verificationStatus", DefaultValue::Code("confirmed"))],
        properties: CONDITION,
    },
    ResourceSpec {
        resource_type: "Procedure",
        patient_reference: Some("subject"),
        defaults: &[("status", DefaultValue::Code("completed"))],
        properties: PROCEDURE,
    },
    ResourceSpec {
        resource_type: "MedicationOrder",
        patient_reference: Some("patient"),
        defaults: &[("status", DefaultValue::Code("active"))],
        properties: MEDICATION_ORDER,
    },
    ResourceSpec {
        resource_type: "MedicationStatement",
        patient_reference: Some("patient"),
        defaults: &[("status", DefaultValue::Code("completed"))],
        properties: MEDICATION_STATEMENT,
    },
    ResourceSpec {
        resource_type: "AllergyIntolerance",
        patient_reference: Some("patient"),
        defaults: &[],
        properties: ALLERGY_INTOLERANCE,
    },
    ResourceSpec {
        resource_type: "Immunization",
        patient_reference: Some("patient"),
        defaults: &[
            ("status", DefaultValue::Code("completed")),
            ("wasNotGiven", DefaultValue::Bool(false)),
            ("reported", DefaultValue::Bool(false)),
        ],
        properties: IMMUNIZATION,
    },
    ResourceSpec {
        resource_type: "DiagnosticReport",
        patient_reference: Some("subject"),
        defaults: &[("status", DefaultValue::Code("final"))],
        properties: DIAGNOSTIC_REPORT,
    },
];

const PATIENT: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("active", Identity),
    ("name", HumanName),
    ("telecom", Identity),
    ("gender", Identity),
    ("birthDate", Identity),
    ("deceasedBoolean", Identity),
    ("deceasedDateTime", DateTime),
    ("address", Identity),
    ("maritalStatus", CodeableConcept),
    ("multipleBirthBoolean", Identity),
    ("multipleBirthInteger", Identity),
    ("photo", Identity),
    ("contact", Identity),
    ("animal", Identity),
    ("communication", Identity),
    ("careProvider", ReferenceList),
    ("managingOrganization", Reference),
    ("link", Identity),
];

const ENCOUNTER: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("status", Identity),
    ("statusHistory", Identity),
    ("class", Identity),
    ("type", CodeableConceptList),
    ("priority", CodeableConcept),
    ("patient", Reference),
    ("episodeOfCare", ReferenceList),
    ("incomingReferral", ReferenceList),
    ("participant", Identity),
    ("appointment", Reference),
    ("period", Identity),
    ("length", Quantity),
    ("reason", CodeableConceptList),
    ("indication", ReferenceList),
    ("hospitalization", Identity),
    ("location", Identity),
    ("serviceProvider", Reference),
    ("partOf", Reference),
];

const OBSERVATION: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("status", Identity),
    ("category", CodeableConcept),
    ("code", CodeableConcept),
    ("subject", Reference),
    ("encounter", Reference),
    ("effectiveDateTime", DateTime),
    ("effectivePeriod", Identity),
    ("issued", Instant),
    ("performer", ReferenceList),
    ("valueQuantity", Quantity),
    ("valueCodeableConcept", CodeableConcept),
    ("valueString", Identity),
    ("valueRange", Identity),
    ("valueRatio", Identity),
    ("valueSampledData", Identity),
    ("valueAttachment", Identity),
    ("valueTime", Identity),
    ("valueDateTime", DateTime),
    ("valuePeriod", Identity),
    ("dataAbsentReason", CodeableConcept),
    ("interpretation", CodeableConcept),
    ("comments", Identity),
    ("bodySite", CodeableConcept),
    ("method", CodeableConcept),
    ("specimen", Reference),
    ("device", Reference),
    ("referenceRange", Identity),
    ("related", Identity),
    ("component", Identity),
];

const CONDITION: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("patient", Reference),
    ("encounter", Reference),
    ("asserter", Reference),
    ("dateRecorded", Identity),
    ("code", CodeableConcept),
    ("category", CodeableConcept),
    ("clinicalStatus", Identity),
    ("verificationStatus", Identity),
    ("severity", CodeableConcept),
    ("onsetDateTime", DateTime),
    ("onsetQuantity", Quantity),
    ("onsetPeriod", Identity),
    ("onsetRange", Identity),
    ("onsetString", Identity),
    ("abatementDateTime", DateTime),
    ("abatementQuantity", Quantity),
    ("abatementBoolean", Identity),
    ("abatementPeriod", Identity),
    ("abatementRange", Identity),
    ("abatementString", Identity),
    ("stage", Identity),
    ("evidence", Identity),
    ("bodySite", CodeableConceptList),
    ("notes", Identity),
];

const PROCEDURE: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("subject", Reference),
    ("status", Identity),
    ("category", CodeableConcept),
    ("code", CodeableConcept),
    ("notPerformed", Identity),
    ("reasonNotPerformed", CodeableConceptList),
    ("bodySite", CodeableConceptList),
    ("reasonCodeableConcept", CodeableConcept),
    ("reasonReference", Reference),
    ("performer", Identity),
    ("performedDateTime", DateTime),
    ("performedPeriod", Identity),
    ("encounter", Reference),
    ("location", Reference),
    ("outcome", CodeableConcept),
    ("report", ReferenceList),
    ("complication", CodeableConceptList),
    ("followUp", CodeableConceptList),
    ("request", Reference),
    ("notes", Identity),
    ("focalDevice", Identity),
    ("used", ReferenceList),
];

const MEDICATION_ORDER: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("dateWritten", DateTime),
    ("status", Identity),
    ("dateEnded", DateTime),
    ("reasonEnded", CodeableConcept),
    ("patient", Reference),
    ("prescriber", Reference),
    ("encounter", Reference),
    ("reasonCodeableConcept", CodeableConcept),
    ("reasonReference", Reference),
    ("note", Identity),
    ("medicationCodeableConcept", CodeableConcept),
    ("medicationReference", Reference),
    ("dosageInstruction", Identity),
    ("dispenseRequest", Identity),
    ("substitution", Identity),
    ("priorPrescription", Reference),
];

const MEDICATION_STATEMENT: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("patient", Reference),
    ("informationSource", Reference),
    ("dateAsserted", DateTime),
    ("status", Identity),
    ("wasNotTaken", Identity),
    ("reasonNotTaken", CodeableConceptList),
    ("reasonForUseCodeableConcept", CodeableConcept),
    ("reasonForUseReference", Reference),
    ("effectiveDateTime", DateTime),
    ("effectivePeriod", Identity),
    ("note", Identity),
    ("supportingInformation", ReferenceList),
    ("medicationCodeableConcept", CodeableConcept),
    ("medicationReference", Reference),
    ("dosage", Identity),
];

const ALLERGY_INTOLERANCE: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("onset", DateTime),
    ("recordedDate", DateTime),
    ("recorder", Reference),
    ("patient", Reference),
    ("reporter", Reference),
    ("substance", CodeableConcept),
    ("status", Identity),
    ("criticality", Identity),
    ("type", Identity),
    ("category", Identity),
    ("lastOccurence", DateTime),
    ("note", Identity),
    ("reaction", Identity),
];

const IMMUNIZATION: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("status", Identity),
    ("date", DateTime),
    ("vaccineCode", CodeableConcept),
    ("patient", Reference),
    ("wasNotGiven", Identity),
    ("reported", Identity),
    ("performer", Reference),
    ("requester", Reference),
    ("encounter", Reference),
    ("manufacturer", Reference),
    ("location", Reference),
    ("lotNumber", Identity),
    ("expirationDate", Identity),
    ("site", CodeableConcept),
    ("route", CodeableConcept),
    ("doseQuantity", Quantity),
    ("note", Identity),
    ("explanation", Identity),
    ("reaction", Identity),
    ("vaccinationProtocol", Identity),
];

const DIAGNOSTIC_REPORT: &[(&str, Transform)] = &[
    ("identifier", Identity),
    ("status", Identity),
    ("category", CodeableConcept),
    ("code", CodeableConcept),
    ("subject", Reference),
    ("encounter", Reference),
    ("effectiveDateTime", DateTime),
    ("effectivePeriod", Identity),
    ("issued", Instant),
    ("performer", Reference),
    ("request", ReferenceList),
    ("specimen", ReferenceList),
    ("result", ReferenceList),
    ("imagingStudy", ReferenceList),
    ("image", Identity),
    ("conclusion", Identity),
    ("codedDiagnosis", CodeableConceptList),
    ("presentedForm", Identity),
];
