//! Configuration for isatemplates

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::loader::{CONFIG_FILENAME, TemplateLoader};

/// Environment variable overriding the template base directory
pub const TEMPLATES_DIR_ENV: &str = "ISATEMPLATES_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory holding the `isatab-*` scaffold directories
    #[serde(rename = "templates-dir")]
    pub templates_dir: PathBuf,

    /// Per-template configuration file name
    #[serde(rename = "config-filename")]
    pub config_filename: String,
}

fn default_templates_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("isatemplates")
        .join("templates")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            config_filename: CONFIG_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// An explicit path must load. Otherwise `.isatemplates.yml` and then
    /// `~/.config/isatemplates/isatemplates.yml` are tried before defaults.
    /// `ISATEMPLATES_DIR` overrides the template directory of whichever wins.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::resolve(config_path)?;
        if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV)
            && !dir.is_empty()
        {
            tracing::debug!(%dir, "Config::load: templates dir from environment");
            config.templates_dir = PathBuf::from(dir);
        }
        Ok(config)
    }

    fn resolve(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".isatemplates.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("isatemplates").join("isatemplates.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loader reading from the configured directory and file name
    pub fn loader(&self) -> TemplateLoader {
        TemplateLoader::new(&self.templates_dir).with_config_filename(&self.config_filename)
    }
}
