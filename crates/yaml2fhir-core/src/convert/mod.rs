//! Conversion Dispatcher
//!
//! Entry point turning a concise data object into a FHIR resource.
//!
//! # Algorithm
//!
//! 1. Resolve the FHIR version tag against the registry
//! 2. Require a non-empty string `resourceType` and look up its descriptor
//! 3. Check every input property against the descriptor, failing on the
//!    first unknown one before anything is transformed
//! 4. Build the output: `resourceType`, `id`, defaults, Patient reference
//! 5. Transform each input property and write it under its original key,
//!    in input order
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//!
//! let data = json!({
//!     "resourceType": "Observation",
//!     "code": "LOINC#12345-6 Fake LOINC Code",
//!     "issued": "2018-10-10"
//! });
//!
//! let resource = yaml2fhir_core::convert(&data, Some("123"), "dstu2").unwrap();
//!
//! assert_eq!(resource["id"], "123");
//! assert_eq!(resource["subject"]["reference"], "Patient/123");
//! assert_eq!(resource["code"]["coding"][0]["system"], "http://loinc.org");
//! assert_eq!(resource["issued"], "2018-10-10T00:00:00.000Z");
//! ```

mod bundle;
mod id;
mod reference;

pub use bundle::collection_bundle;
pub use id::{IdGenerator, UuidGenerator, assign_id};
pub use reference::resolve_reference;

use crate::Result;
use crate::config::Yaml2FhirConfig;
use crate::error::ConvertError;
use crate::registry::{self, FhirVersion};
use crate::transform::{CodeSystemAliases, json_kind};
use serde_json::{Map, Value as JsonValue};
use std::sync::Arc;
use tracing::{debug, trace};

/// Property naming the resource type of a data object
pub const RESOURCE_TYPE: &str = "resourceType";

/// Converts data objects into FHIR resources
///
/// Holds the read-only code system aliases and the id generator; a single
/// converter can be shared across threads.
#[derive(Debug, Clone)]
pub struct Converter {
    aliases: CodeSystemAliases,
    id_generator: Arc<dyn IdGenerator>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    /// Create a converter with the built-in code system aliases and UUID ids
    pub fn new() -> Self {
        Self {
            aliases: CodeSystemAliases::builtin(),
            id_generator: Arc::new(UuidGenerator),
        }
    }

    /// Create a converter using the code systems declared in a configuration
    pub fn from_config(config: &Yaml2FhirConfig) -> Self {
        match &config.code_systems {
            Some(code_systems) => Self::new().with_code_systems(code_systems.clone()),
            None => Self::new(),
        }
    }

    /// Add code system aliases, replacing built-in ones of the same name
    pub fn with_code_systems<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases.extend(aliases);
        self
    }

    /// Replace the generator used when no id is supplied
    pub fn with_id_generator(mut self, id_generator: Arc<dyn IdGenerator>) -> Self {
        self.id_generator = id_generator;
        self
    }

    pub fn aliases(&self) -> &CodeSystemAliases {
        &self.aliases
    }

    pub fn id_generator(&self) -> &dyn IdGenerator {
        self.id_generator.as_ref()
    }

    /// Convert a data object for the FHIR version named by `version_tag`
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the version tag is not supported
    /// - `resourceType` is missing or empty
    /// - the resource type is not registered for the version
    /// - a property is not recognized for the resource type
    /// - a property value does not match its transform's shorthand
    pub fn convert(
        &self,
        raw: &JsonValue,
        supplied_id: Option<&str>,
        version_tag: &str,
    ) -> Result<JsonValue> {
        let version: FhirVersion = version_tag.parse()?;
        self.convert_for_version(raw, supplied_id, version)
    }

    /// Convert a data object for an already resolved FHIR version
    pub fn convert_for_version(
        &self,
        raw: &JsonValue,
        supplied_id: Option<&str>,
        version: FhirVersion,
    ) -> Result<JsonValue> {
        let object = raw.as_object().ok_or_else(|| ConvertError::InvalidDataObject {
            found: json_kind(raw).to_string(),
        })?;

        let resource_type = object
            .get(RESOURCE_TYPE)
            .and_then(JsonValue::as_str)
            .filter(|resource_type| !resource_type.is_empty())
            .ok_or(ConvertError::MissingResourceType)?;

        debug!("Converting {} for FHIR {}", resource_type, version);

        let descriptor = registry::lookup(version, resource_type)
            .ok_or_else(|| ConvertError::unsupported_resource_type(resource_type))?;

        // Validate everything up front so a failure never leaves partial output
        let mut fields = Vec::with_capacity(object.len());
        for (property, value) in object {
            if property == RESOURCE_TYPE {
                continue;
            }
            let transform = descriptor
                .transform_for(property)
                .ok_or_else(|| ConvertError::unsupported_property(resource_type, property))?;
            fields.push((property, transform, value));
        }

        let mut resource = Map::new();
        resource.insert(
            RESOURCE_TYPE.to_string(),
            JsonValue::String(resource_type.to_string()),
        );

        let id = assign_id(supplied_id, self.id_generator());
        trace!("Assigned id {}", id);
        resource.insert("id".to_string(), JsonValue::String(id));

        for (name, value) in descriptor.defaults() {
            resource.insert(name.to_string(), value.clone());
        }

        if let Some((property, reference)) = resolve_reference(descriptor, supplied_id) {
            trace!("Injecting {}.{} reference", resource_type, property);
            resource.insert(property.to_string(), reference);
        }

        for (property, transform, value) in fields {
            if value.is_null() {
                trace!("Omitting null {}.{}", resource_type, property);
                continue;
            }
            let transformed = transform
                .apply(value, &self.aliases)
                .map_err(|e| ConvertError::invalid_value(resource_type, property, e.to_string()))?;
            if transformed.is_null() {
                trace!("Omitting blank {}.{}", resource_type, property);
                continue;
            }
            trace!("Applied {} to {}.{}", transform.name(), resource_type, property);
            resource.insert(property.clone(), transformed);
        }

        debug!(
            "Converted {}/{}",
            resource_type,
            resource["id"].as_str().unwrap_or_default()
        );
        Ok(JsonValue::Object(resource))
    }

    /// Wrap converted resources in a `collection` Bundle
    pub fn bundle(&self, resources: Vec<JsonValue>) -> Result<JsonValue> {
        let bundle = collection_bundle(resources, self.id_generator());
        Ok(serde_json::to_value(bundle)?)
    }
}

/// Convert a data object with the default converter
///
/// See [`Converter::convert`].
pub fn convert(raw: &JsonValue, supplied_id: Option<&str>, version_tag: &str) -> Result<JsonValue> {
    Converter::default().convert(raw, supplied_id, version_tag)
}
