//! yaml2fhir Core
//!
//! Converts concise, human-authored data objects (typically parsed from
//! YAML) into FHIR resources. Shorthand codes become CodeableConcepts,
//! plain dates become instants, names become HumanNames, and every resource
//! gets an id plus a reference back to its Patient.
//!
//! ```rust
//! use serde_json::json;
//!
//! let encounter = yaml2fhir_core::convert(
//!     &json!({ "resourceType": "Encounter" }),
//!     Some("123"),
//!     "dstu2",
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     encounter,
//!     json!({
//!         "resourceType": "Encounter",
//!         "id": "123",
//!         "status": "finished",
//!         "patient": { "reference": "Patient/123" }
//!     })
//! );
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod fhir_types;
pub mod registry;
pub mod result;
pub mod transform;

// Re-export commonly used types
pub use config::{ConfigLoader, OutputConfiguration, Yaml2FhirConfig};
pub use convert::{Converter, IdGenerator, UuidGenerator, convert};
pub use error::{ConvertError, ErrorKind};
pub use registry::{FhirVersion, ResourceDescriptor, lookup, supported_resource_types};
pub use result::{Result, ResultExt};
pub use transform::{CodeSystemAliases, Transform};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yaml2fhir=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
