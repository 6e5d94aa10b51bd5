//! Resource Type Registry
//!
//! Static per-version tables mapping a resource type name to the properties
//! the converter recognizes for it, the transform bound to each property,
//! the default values injected into every converted resource, and the
//! property that points back at the Patient.
//!
//! Tables are built once per process and never mutated, so lookups are safe
//! from any number of threads. Supporting a new version or resource type
//! means adding a table entry, not code.

mod dstu2;

use crate::error::ConvertError;
use crate::transform::Transform;
use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Resource type that other resources reference as their subject
pub const ANCHOR_RESOURCE_TYPE: &str = "Patient";

/// Properties every DomainResource carries
const COMMON_PROPERTIES: &[(&str, Transform)] = &[
    ("id", Transform::Id),
    ("meta", Transform::Identity),
    ("implicitRules", Transform::Identity),
    ("language", Transform::Identity),
    ("text", Transform::Identity),
    ("contained", Transform::Identity),
    ("extension", Transform::Identity),
    ("modifierExtension", Transform::Identity),
];

/// Supported FHIR versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FhirVersion {
    Dstu2,
}

impl FhirVersion {
    /// Every version with a registry
    pub const ALL: &'static [FhirVersion] = &[FhirVersion::Dstu2];

    /// Tag used on the command line and in configuration
    pub fn tag(self) -> &'static str {
        match self {
            FhirVersion::Dstu2 => "dstu2",
        }
    }

    /// Official release number
    pub fn release(self) -> &'static str {
        match self {
            FhirVersion::Dstu2 => "1.0.2",
        }
    }
}

impl fmt::Display for FhirVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for FhirVersion {
    type Err = ConvertError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let trimmed = tag.trim();
        FhirVersion::ALL
            .iter()
            .copied()
            .find(|v| v.tag().eq_ignore_ascii_case(trimmed) || v.release() == trimmed)
            .ok_or_else(|| ConvertError::unsupported_version(tag))
    }
}

/// Static description of one resource type, as written in the version tables
pub(crate) struct ResourceSpec {
    pub resource_type: &'static str,
    pub patient_reference: Option<&'static str>,
    pub defaults: &'static [(&'static str, DefaultValue)],
    pub properties: &'static [(&'static str, Transform)],
}

/// Default value literal
#[derive(Debug, Clone, Copy)]
pub(crate) enum DefaultValue {
    Code(&'static str),
    Bool(bool),
}

impl DefaultValue {
    fn to_json(self) -> JsonValue {
        match self {
            DefaultValue::Code(code) => JsonValue::String(code.to_string()),
            DefaultValue::Bool(flag) => JsonValue::Bool(flag),
        }
    }
}

/// Recognized properties, defaults and reference wiring for a resource type
#[derive(Debug, Clone)]
pub struct ResourceDescriptor {
    resource_type: &'static str,
    properties: IndexMap<&'static str, Transform>,
    defaults: Vec<(&'static str, JsonValue)>,
    patient_reference: Option<&'static str>,
}

impl ResourceDescriptor {
    fn from_spec(spec: &ResourceSpec) -> Self {
        let properties = COMMON_PROPERTIES
            .iter()
            .chain(spec.properties)
            .map(|(name, transform)| (*name, *transform))
            .collect();
        let defaults = spec
            .defaults
            .iter()
            .map(|(name, value)| (*name, value.to_json()))
            .collect();

        Self {
            resource_type: spec.resource_type,
            properties,
            defaults,
            patient_reference: spec.patient_reference,
        }
    }

    pub fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// Transform bound to a property, if the property is recognized
    pub fn transform_for(&self, property: &str) -> Option<Transform> {
        self.properties.get(property).copied()
    }

    pub fn contains_property(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Recognized properties in declaration order
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, Transform)> + '_ {
        self.properties.iter().map(|(name, transform)| (*name, *transform))
    }

    /// Default field values, applied before user fields
    pub fn defaults(&self) -> &[(&'static str, JsonValue)] {
        &self.defaults
    }

    /// Property holding the reference to the Patient, if any
    pub fn patient_reference(&self) -> Option<&'static str> {
        self.patient_reference
    }

    pub fn is_anchor(&self) -> bool {
        self.resource_type == ANCHOR_RESOURCE_TYPE
    }
}

type VersionTable = HashMap<&'static str, ResourceDescriptor>;

static REGISTRY: LazyLock<HashMap<FhirVersion, VersionTable>> = LazyLock::new(|| {
    FhirVersion::ALL
        .iter()
        .map(|version| (*version, build_table(specs_for(*version))))
        .collect()
});

fn specs_for(version: FhirVersion) -> &'static [ResourceSpec] {
    match version {
        FhirVersion::Dstu2 => dstu2::RESOURCES,
    }
}

fn build_table(specs: &[ResourceSpec]) -> VersionTable {
    specs
        .iter()
        .map(|spec| (spec.resource_type, ResourceDescriptor::from_spec(spec)))
        .collect()
}

/// Look up the descriptor for a resource type in a version
pub fn lookup(version: FhirVersion, resource_type: &str) -> Option<&'static ResourceDescriptor> {
    REGISTRY.get(&version)?.get(resource_type)
}

/// Resource types registered for a version, sorted by name
pub fn supported_resource_types(version: FhirVersion) -> Vec<&'static str> {
    let mut types: Vec<_> = REGISTRY
        .get(&version)
        .map(|table| table.keys().copied().collect())
        .unwrap_or_default();
    types.sort_unstable();
    types
}
