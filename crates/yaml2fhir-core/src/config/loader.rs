//! Configuration file discovery and loading

use super::yaml2fhir_config::Yaml2FhirConfig;
use crate::Result;
use crate::error::ConvertError;
use std::path::{Path, PathBuf};

/// Config file names in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".yaml2fhirrc.json",
    ".yaml2fhirrc.toml",
    "yaml2fhir.yaml",
    "yaml2fhir.yml",
    "yaml2fhir.json",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Starts from the given directory and moves up the directory tree until
    /// a config is found or the filesystem root is reached.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| ConvertError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Yaml2FhirConfig> {
        let config = Yaml2FhirConfig::load(path).map_err(|e| {
            ConvertError::config_error(format!(
                "Failed to load config from '{}': {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from path or auto-discover
    ///
    /// An explicit path must exist. Without one, the directory tree above
    /// `start_dir` (or the current directory) is searched, and the defaults
    /// are returned when nothing is found.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<Yaml2FhirConfig> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(ConvertError::config_error(format!(
                    "Config file not found: {}. Run 'yaml2fhir config init' to create one.",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Yaml2FhirConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
        let path = dir.join(filename);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_temp_config(
            temp_dir.path(),
            "yaml2fhir.json",
            r#"{ "fhirVersion": "dstu2", "output": { "pretty": false } }"#,
        );

        let config = ConfigLoader::load_from_file(&config_path).unwrap();
        assert_eq!(config.fhir_version(), "dstu2");
        assert!(!config.pretty());
    }

    #[test]
    fn test_auto_discover_from_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data/patients");
        fs::create_dir_all(&nested).unwrap();

        create_temp_config(temp_dir.path(), "yaml2fhir.yaml", "fhirVersion: dstu2\n");

        let found = ConfigLoader::auto_discover(&nested).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), "yaml2fhir.yaml");
    }

    #[test]
    fn test_auto_discover_priority() {
        let temp_dir = TempDir::new().unwrap();

        create_temp_config(temp_dir.path(), "yaml2fhir.json", "{}");
        create_temp_config(temp_dir.path(), "yaml2fhir.yaml", "{}");
        create_temp_config(temp_dir.path(), ".yaml2fhirrc.toml", "");

        let found = ConfigLoader::auto_discover(temp_dir.path()).unwrap();
        assert_eq!(found.unwrap().file_name().unwrap(), ".yaml2fhirrc.toml");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Some(Path::new("nonexistent.json")), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), "yaml2fhir.json", r#"{ invalid json }"#);

        let result = ConfigLoader::load_from_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_unsupported_version() {
        let temp_dir = TempDir::new().unwrap();
        let config_path =
            create_temp_config(temp_dir.path(), ".yaml2fhirrc.json", r#"{"fhirVersion": "r4"}"#);

        let err = ConfigLoader::load(Some(&config_path), None).unwrap_err();
        assert!(err.to_string().contains("r4"));
    }
}
