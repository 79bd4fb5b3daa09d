//! Scanning a base directory for scaffold directories

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::RegistryError;
use crate::template::TemplateEntry;

/// Prefix shared by all ISA-tab scaffold directories
pub const TEMPLATE_DIR_PREFIX: &str = "isatab-";

/// A scaffold directory found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTemplate {
    /// Directory name, e.g. `isatab-germline`
    pub directory: String,
    pub path: PathBuf,
    /// Whether the directory holds a configuration file
    pub has_config: bool,
}

/// Differences between a registration table and the directories on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Directories with a configuration file that no entry refers to
    pub unregistered: Vec<String>,
    /// Directories referenced by entries but absent on disk
    pub missing: Vec<String>,
}

impl DiscoveryReport {
    pub fn is_clean(&self) -> bool {
        self.unregistered.is_empty() && self.missing.is_empty()
    }
}

/// List `isatab-*` subdirectories of `base_dir`
///
/// Results are sorted by directory name. Only immediate children are scanned.
pub fn discover_templates(base_dir: &Path, config_filename: &str) -> Result<Vec<DiscoveredTemplate>, RegistryError> {
    debug!(?base_dir, %config_filename, "discover_templates: called");
    let mut found = Vec::new();

    for entry in WalkDir::new(base_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| RegistryError::Discovery {
            path: base_dir.to_path_buf(),
            source,
        })?;

        if !entry.file_type().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            debug!(path = ?entry.path(), "discover_templates: skipping non-utf8 name");
            continue;
        };
        if !name.starts_with(TEMPLATE_DIR_PREFIX) {
            continue;
        }
        let has_config = entry.path().join(config_filename).is_file();
        debug!(%name, has_config, "discover_templates: found");

        found.push(DiscoveredTemplate {
            directory: name.to_string(),
            path: entry.path().to_path_buf(),
            has_config,
        });
    }

    debug!(count = found.len(), "discover_templates: complete");
    Ok(found)
}

/// Compare discovered directories with the directories a table refers to
pub fn reconcile(discovered: &[DiscoveredTemplate], entries: &[TemplateEntry]) -> DiscoveryReport {
    let on_disk: BTreeSet<&str> = discovered.iter().map(|d| d.directory.as_str()).collect();
    let configured: BTreeSet<&str> = discovered
        .iter()
        .filter(|d| d.has_config)
        .map(|d| d.directory.as_str())
        .collect();
    let referenced: BTreeSet<&str> = entries
        .iter()
        .flat_map(|e| [e.directory.as_str(), e.config_directory()])
        .collect();

    DiscoveryReport {
        unregistered: configured.difference(&referenced).map(|s| s.to_string()).collect(),
        missing: referenced.difference(&on_disk).map(|s| s.to_string()).collect(),
    }
}
