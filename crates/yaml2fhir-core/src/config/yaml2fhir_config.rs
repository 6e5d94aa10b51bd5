//! Configuration types for yaml2fhir

use crate::Result;
use crate::error::ConvertError;
use crate::registry::FhirVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// FHIR version used when neither the command line nor the config names one
pub const DEFAULT_FHIR_VERSION: &str = "dstu2";

/// On-disk configuration format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("toml") => Some(ConfigFormat::Toml),
            Some("yaml") | Some("yml") => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Yaml2FhirConfig {
    /// Default FHIR version tag (`dstu2`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fhir_version: Option<String>,

    /// Extra code system aliases, e.g. `LOCAL: http://example.org/cs`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_systems: Option<BTreeMap<String, String>>,

    /// Output preferences for the command-line tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfiguration>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfiguration {
    /// Pretty-print JSON (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,

    /// Directory receiving one JSON file per input file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    /// Wrap the resources of each input in a collection Bundle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundle: Option<bool>,
}

impl Yaml2FhirConfig {
    /// Load configuration from file
    ///
    /// Supports JSON, TOML and YAML, chosen by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ConvertError::config_error(format!(
                "Unsupported config file extension for '{}' (expected .json, .toml, .yaml or .yml)",
                path.display()
            ))
        })?;
        let content = fs::read_to_string(path).map_err(|e| ConvertError::io_error(path, e))?;
        Self::parse(&content, format)
    }

    /// Parse configuration text in the given format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        let parsed = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(ConvertError::config_error)
    }

    /// Render the configuration in the given format
    pub fn render(&self, format: ConfigFormat) -> Result<String> {
        let rendered = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::to_string_pretty(self).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::to_string(self).map_err(|e| e.to_string()),
        };
        rendered.map_err(|message| ConvertError::SerializationError { message })
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<()> {
        if let Some(version) = &self.fhir_version {
            version.parse::<FhirVersion>().map_err(|e| {
                ConvertError::config_error(format!("fhirVersion: {e}"))
            })?;
        }
        if let Some(code_systems) = &self.code_systems {
            for (alias, url) in code_systems {
                if alias.is_empty() || alias.contains('#') {
                    return Err(ConvertError::config_error(format!(
                        "codeSystems: invalid alias '{alias}'"
                    )));
                }
                if url.trim().is_empty() {
                    return Err(ConvertError::config_error(format!(
                        "codeSystems: alias '{alias}' has an empty URL"
                    )));
                }
            }
        }
        Ok(())
    }

    /// FHIR version tag with default
    pub fn fhir_version(&self) -> &str {
        self.fhir_version.as_deref().unwrap_or(DEFAULT_FHIR_VERSION)
    }

    /// Get output configuration with defaults
    pub fn output_config(&self) -> OutputConfiguration {
        self.output.clone().unwrap_or_default()
    }

    /// Whether JSON output is pretty-printed (default: true)
    pub fn pretty(&self) -> bool {
        self.output
            .as_ref()
            .and_then(|o| o.pretty)
            .unwrap_or(true)
    }

    /// Configuration written by `config init`
    pub fn starter() -> Self {
        Self {
            fhir_version: Some(DEFAULT_FHIR_VERSION.to_string()),
            code_systems: Some(BTreeMap::from([(
                "LOCAL".to_string(),
                "http://example.org/fhir/CodeSystem/local".to_string(),
            )])),
            output: Some(OutputConfiguration {
                pretty: Some(true),
                directory: None,
                bundle: Some(false),
            }),
        }
    }
}
