//! Configuration system for yaml2fhir
//!
//! Settings shared by every conversion in a project: the default FHIR
//! version, extra code system aliases and output preferences.
//!
//! ## Configuration Files
//!
//! Searched for from the working directory upward, in this order:
//! - `.yaml2fhirrc.json`
//! - `.yaml2fhirrc.toml`
//! - `yaml2fhir.yaml` / `yaml2fhir.yml`
//! - `yaml2fhir.json`
//!
//! When none is found the defaults apply.
//!
//! ## Example Configuration (yaml2fhir.yaml)
//!
//! ```yaml
//! fhirVersion: dstu2
//! codeSystems:
//!   LOCAL: http://example.org/fhir/CodeSystem/local
//! output:
//!   pretty: true
//!   directory: out
//!   bundle: false
//! ```

mod loader;
mod yaml2fhir_config;

pub use loader::ConfigLoader;
pub use yaml2fhir_config::{
    ConfigFormat, DEFAULT_FHIR_VERSION, OutputConfiguration, Yaml2FhirConfig,
};
