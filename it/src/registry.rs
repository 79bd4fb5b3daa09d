//! Template registry
//!
//! Built once from a registration table. Every entry's configuration is loaded
//! eagerly; a single failure aborts construction so a registry value is always
//! complete. The result is immutable and can be shared freely across readers.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::RegistryError;
use crate::loader::TemplateLoader;
use crate::template::{IsaTabTemplate, TemplateEntry, builtin_entries};

/// Mapping from template name to descriptor
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    loader: TemplateLoader,
    templates: HashMap<String, IsaTabTemplate>,
}

impl TemplateRegistry {
    /// Build the builtin registry from templates below `base_dir`
    pub fn load(base_dir: impl AsRef<Path>) -> Result<Self, RegistryError> {
        Self::with_loader(TemplateLoader::new(base_dir))
    }

    /// Build the builtin registry using a configured loader
    pub fn with_loader(loader: TemplateLoader) -> Result<Self, RegistryError> {
        Self::from_entries(loader, &builtin_entries())
    }

    /// Build a registry from an arbitrary registration table
    pub fn from_entries(loader: TemplateLoader, entries: &[TemplateEntry]) -> Result<Self, RegistryError> {
        debug!(base_dir = ?loader.base_dir(), count = entries.len(), "TemplateRegistry::from_entries: called");
        let mut templates = HashMap::with_capacity(entries.len());

        for entry in entries {
            if templates.contains_key(&entry.name) {
                return Err(RegistryError::DuplicateTemplate {
                    name: entry.name.clone(),
                });
            }

            let template = build_descriptor(&loader, entry)?;
            debug!(name = %template.name, path = ?template.path, "from_entries: registered");
            templates.insert(entry.name.clone(), template);
        }

        info!(count = templates.len(), base_dir = %loader.base_dir().display(), "Loaded ISA-tab templates");
        Ok(Self { loader, templates })
    }

    /// Get a template by name
    pub fn get(&self, name: &str) -> Result<&IsaTabTemplate, RegistryError> {
        self.lookup(name).ok_or_else(|| RegistryError::UnknownTemplate {
            name: name.to_string(),
        })
    }

    pub fn lookup(&self, name: &str) -> Option<&IsaTabTemplate> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Descriptors sorted by name
    pub fn iter(&self) -> impl Iterator<Item = &IsaTabTemplate> {
        let mut templates: Vec<&IsaTabTemplate> = self.templates.values().collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        templates.into_iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn base_dir(&self) -> &Path {
        self.loader.base_dir()
    }
}

fn build_descriptor(loader: &TemplateLoader, entry: &TemplateEntry) -> Result<IsaTabTemplate, RegistryError> {
    let configuration = loader.load(entry.config_directory(), entry.overrides_for_load())?;

    let path = loader.template_dir(&entry.directory);
    if !path.is_dir() {
        return Err(RegistryError::TemplateDirMissing {
            template: entry.name.clone(),
            path,
        });
    }

    Ok(IsaTabTemplate {
        name: entry.name.clone(),
        path,
        configuration,
        description: entry.description.clone(),
    })
}
