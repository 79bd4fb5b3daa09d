//! Template configuration loading
//!
//! Each scaffold directory carries a `cookiecutter.json` object describing its
//! variables. Loading reads that object and merges caller-supplied overrides on
//! top of it: override keys replace file values and unknown keys are appended.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RegistryError;

/// Ordered mapping of scaffold variable name to JSON value
pub type Configuration = Map<String, Value>;

/// Default name of the per-template configuration file
pub const CONFIG_FILENAME: &str = "cookiecutter.json";

/// Reads template configurations below a base directory
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    base_dir: PathBuf,
    config_filename: String,
}

impl TemplateLoader {
    /// Create a loader reading `cookiecutter.json` files below `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            config_filename: CONFIG_FILENAME.to_string(),
        }
    }

    /// Use a different configuration file name
    pub fn with_config_filename(mut self, filename: impl Into<String>) -> Self {
        self.config_filename = filename.into();
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory of a template below the base directory
    pub fn template_dir(&self, template_name: &str) -> PathBuf {
        self.base_dir.join(template_name)
    }

    /// Full path of a template's configuration file
    pub fn config_path(&self, template_name: &str) -> PathBuf {
        self.template_dir(template_name).join(&self.config_filename)
    }

    /// Load `<base>/<template_name>/<config_filename>` and apply `overrides`
    ///
    /// Fails with [`RegistryError::ConfigMissing`] when the directory or file is
    /// absent and with [`RegistryError::ConfigParse`] when the contents are not
    /// valid UTF-8 JSON. Nothing is returned on failure.
    pub fn load(&self, template_name: &str, overrides: Option<&Configuration>) -> Result<Configuration, RegistryError> {
        let path = self.config_path(template_name);
        debug!(%template_name, ?path, "TemplateLoader::load: called");

        let content = fs::read(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RegistryError::ConfigMissing {
                    template: template_name.to_string(),
                    path: path.clone(),
                    source,
                }
            } else {
                RegistryError::ConfigRead {
                    template: template_name.to_string(),
                    path: path.clone(),
                    source,
                }
            }
        })?;
        debug!(%template_name, content_len = content.len(), "load: read content");

        let value: Value = serde_json::from_slice(&content).map_err(|source| RegistryError::ConfigParse {
            template: template_name.to_string(),
            path: path.clone(),
            source,
        })?;

        let mut configuration = match value {
            Value::Object(map) => map,
            other => {
                return Err(RegistryError::ConfigNotObject {
                    template: template_name.to_string(),
                    path,
                    found: json_kind(&other),
                });
            }
        };

        if let Some(overrides) = overrides {
            merge_overrides(&mut configuration, overrides);
        }

        debug!(%template_name, keys = configuration.len(), "load: complete");
        Ok(configuration)
    }
}

/// Load a template configuration from `base_dir` using the default file name
pub fn load_configuration(
    base_dir: impl AsRef<Path>,
    template_name: &str,
    overrides: Option<&Configuration>,
) -> Result<Configuration, RegistryError> {
    TemplateLoader::new(base_dir).load(template_name, overrides)
}

/// Apply overrides on top of a configuration
///
/// Keys are not validated against the existing configuration; new keys are
/// appended after the loaded ones.
pub fn merge_overrides(configuration: &mut Configuration, overrides: &Configuration) {
    for (key, value) in overrides {
        debug!(%key, replaced = configuration.contains_key(key), "merge_overrides: applying");
        configuration.insert(key.clone(), value.clone());
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
