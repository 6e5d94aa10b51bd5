//! Error types and handling for YAML to FHIR conversion

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested FHIR version has no registry
    #[error("Unsupported version of FHIR: {version}")]
    UnsupportedVersion { version: String },

    /// The data object lacks a usable `resourceType`
    #[error("Each data object must specify its \"resourceType\"")]
    MissingResourceType,

    /// The data object is not a mapping
    #[error("Each data object must be a mapping of property names to values, found {found}")]
    InvalidDataObject { found: String },

    /// The resource type is not registered for the requested version
    #[error("Unsupported resourceType: {resource_type}")]
    UnsupportedResourceType { resource_type: String },

    /// A property has no transformer for its resource type
    #[error("{resource_type} does not contain the property: {property}")]
    UnsupportedProperty {
        resource_type: String,
        property: String,
    },

    /// A property value does not match the shorthand its transformer expects
    #[error("Invalid value for {resource_type}.{property}: {message}")]
    InvalidValue {
        resource_type: String,
        property: String,
        message: String,
    },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML input that could not be parsed
    #[error("YAML error in '{path}': {message}")]
    YamlError { path: PathBuf, message: String },

    /// Two inputs would be written to the same output file
    #[error("Inputs '{first}' and '{second}' would both be written to '{target}'")]
    OutputConflict {
        target: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// JSON output that could not be produced
    #[error("Serialization error: {message}")]
    SerializationError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Version, resource type, property or value rejected by the registry
    Validation,
    /// Malformed input document
    Input,
    Config,
    Io,
    Serialization,
}

impl ConvertError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::UnsupportedVersion { .. }
            | ConvertError::UnsupportedResourceType { .. }
            | ConvertError::UnsupportedProperty { .. }
            | ConvertError::InvalidValue { .. } => ErrorKind::Validation,
            ConvertError::MissingResourceType
            | ConvertError::InvalidDataObject { .. }
            | ConvertError::YamlError { .. } => ErrorKind::Input,
            ConvertError::ConfigError { .. } => ErrorKind::Config,
            ConvertError::IoError { .. } | ConvertError::OutputConflict { .. } => ErrorKind::Io,
            ConvertError::SerializationError { .. } => ErrorKind::Serialization,
        }
    }

    /// Check if the error describes bad input data rather than an environment failure
    pub fn is_data_error(&self) -> bool {
        matches!(self.kind(), ErrorKind::Validation | ErrorKind::Input)
    }

    /// Create an unsupported version error
    pub fn unsupported_version(version: impl Into<String>) -> Self {
        Self::UnsupportedVersion {
            version: version.into(),
        }
    }

    /// Create an unsupported resource type error
    pub fn unsupported_resource_type(resource_type: impl Into<String>) -> Self {
        Self::UnsupportedResourceType {
            resource_type: resource_type.into(),
        }
    }

    /// Create an unsupported property error
    pub fn unsupported_property(
        resource_type: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self::UnsupportedProperty {
            resource_type: resource_type.into(),
            property: property.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(
        resource_type: impl Into<String>,
        property: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            resource_type: resource_type.into(),
            property: property.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create an output file conflict error
    pub fn output_conflict(
        target: impl Into<PathBuf>,
        first: impl Into<PathBuf>,
        second: impl Into<PathBuf>,
    ) -> Self {
        Self::OutputConflict {
            target: target.into(),
            first: first.into(),
            second: second.into(),
        }
    }

    /// Create a YAML parse error with path context
    pub fn yaml_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::YamlError {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}
