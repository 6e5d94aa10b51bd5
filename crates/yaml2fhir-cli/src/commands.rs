//! Command implementations for the yaml2fhir CLI

pub mod config;
pub mod convert;

use colored::*;
use std::path::PathBuf;
use tracing::debug;
use yaml2fhir_core::{ConfigLoader, FhirVersion, Result, lookup, supported_resource_types};

/// Resources command implementation
pub fn resources_command(
    fhir_version: Option<String>,
    detailed: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = ConfigLoader::load(config_path.as_deref(), None)?;
    let tag = fhir_version.as_deref().unwrap_or_else(|| config.fhir_version());
    let version: FhirVersion = tag.parse()?;
    debug!("Listing resource types for FHIR {}", version);

    let resource_types = supported_resource_types(version);
    println!(
        "{} ({} resource types)",
        format!("FHIR {} ({})", version.tag().to_uppercase(), version.release()).bold(),
        resource_types.len()
    );

    for resource_type in resource_types {
        let Some(descriptor) = lookup(version, resource_type) else {
            continue;
        };

        if !detailed {
            println!("  {resource_type}");
            continue;
        }

        println!();
        println!("{}", resource_type.cyan().bold());
        if let Some(reference) = descriptor.patient_reference() {
            println!("  {} {}", "patient reference:".dimmed(), reference);
        }
        for (name, value) in descriptor.defaults() {
            println!("  {} {} = {}", "default:".dimmed(), name, value);
        }
        for (name, transform) in descriptor.properties() {
            println!("  {:<28} {}", name, transform.name().dimmed());
        }
    }

    Ok(())
}
