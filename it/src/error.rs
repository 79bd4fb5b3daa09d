//! Registry error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading template configurations or querying the registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Configuration for template '{template}' not found at {path}: {source}")]
    ConfigMissing {
        template: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Scaffold directory for template '{template}' not found: {path}")]
    TemplateDirMissing { template: String, path: PathBuf },

    #[error("Failed to read configuration for template '{template}' at {path}: {source}")]
    ConfigRead {
        template: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in configuration for template '{template}' at {path}: {source}")]
    ConfigParse {
        template: String,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration for template '{template}' at {path} must be a JSON object, found {found}")]
    ConfigNotObject {
        template: String,
        path: PathBuf,
        found: &'static str,
    },

    #[error("Unknown template: {name}")]
    UnknownTemplate { name: String },

    #[error("Template registered twice: {name}")]
    DuplicateTemplate { name: String },

    #[error("Failed to scan template directory {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl RegistryError {
    /// Check if this is a missing file/directory or unknown name error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::ConfigMissing { .. }
                | RegistryError::TemplateDirMissing { .. }
                | RegistryError::UnknownTemplate { .. }
        )
    }

    /// Check if the configuration file existed but could not be decoded
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            RegistryError::ConfigParse { .. } | RegistryError::ConfigNotObject { .. }
        )
    }

    /// Name of the template the error relates to, if any
    pub fn template(&self) -> Option<&str> {
        match self {
            RegistryError::ConfigMissing { template, .. }
            | RegistryError::ConfigRead { template, .. }
            | RegistryError::ConfigParse { template, .. }
            | RegistryError::ConfigNotObject { template, .. } => Some(template),
            RegistryError::TemplateDirMissing { template, .. } => Some(template),
            RegistryError::UnknownTemplate { name } | RegistryError::DuplicateTemplate { name } => Some(name),
            RegistryError::Discovery { .. } => None,
        }
    }
}
