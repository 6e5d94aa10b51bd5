//! Configuration subcommands

use crate::ConfigFormat;
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{debug, error};
use yaml2fhir_core::config::ConfigFormat as CoreConfigFormat;
use yaml2fhir_core::{ConfigLoader, ConvertError, Converter, Result, Yaml2FhirConfig};

impl From<ConfigFormat> for CoreConfigFormat {
    fn from(format: ConfigFormat) -> Self {
        match format {
            ConfigFormat::Json => CoreConfigFormat::Json,
            ConfigFormat::Toml => CoreConfigFormat::Toml,
            ConfigFormat::Yaml => CoreConfigFormat::Yaml,
        }
    }
}

/// Config init command implementation
pub fn config_init_command(format: ConfigFormat, force: bool) -> Result<()> {
    debug!("Initializing configuration file with format: {:?}", format);

    let filename = match format {
        ConfigFormat::Json => ".yaml2fhirrc.json",
        ConfigFormat::Toml => ".yaml2fhirrc.toml",
        ConfigFormat::Yaml => "yaml2fhir.yaml",
    };
    let config_path = Path::new(filename);

    if config_path.exists() && !force {
        error!(
            "Configuration file '{}' already exists. Use --force to overwrite.",
            filename
        );
        return Err(ConvertError::config_error(format!(
            "Configuration file '{filename}' already exists"
        )));
    }

    let content = Yaml2FhirConfig::starter().render(format.into())?;
    std::fs::write(config_path, content).map_err(|e| ConvertError::io_error(config_path, e))?;

    println!("{} Created configuration file: {filename}", "✓".green());
    println!("   Edit the file to set the FHIR version and code system aliases.");

    Ok(())
}

/// Config validate command implementation
pub fn config_validate_command(path: Option<PathBuf>) -> Result<()> {
    debug!("Validating configuration file: {:?}", path);

    let config = ConfigLoader::load(path.as_deref(), None)?;
    println!("{} Configuration is valid", "✓".green());
    println!("   FHIR version: {}", config.fhir_version());
    println!(
        "   Custom code systems: {}",
        config.code_systems.as_ref().map_or(0, |c| c.len())
    );

    Ok(())
}

/// Config show command implementation
///
/// Prints the loaded configuration followed by the effective code system
/// aliases, built-in ones included.
pub fn config_show_command(config_path: Option<PathBuf>) -> Result<()> {
    let config = ConfigLoader::load(config_path.as_deref(), None)?;
    println!("{}", config.render(CoreConfigFormat::Yaml)?);

    let converter = Converter::from_config(&config);
    let aliases = converter.aliases();
    if aliases.is_empty() {
        return Ok(());
    }
    println!(
        "{} ({})",
        "Code systems in effect".bold(),
        aliases.len()
    );
    for (alias, url) in aliases.sorted() {
        println!("  {:<10} {}", alias.cyan(), url);
    }
    Ok(())
}
