//! Template descriptors and the builtin registration table

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::loader::Configuration;

/// Information regarding one registered ISA-tab template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsaTabTemplate {
    /// Name of the ISA-tab template (registry key)
    pub name: String,

    /// Path to the scaffold directory
    pub path: PathBuf,

    /// Variables loaded from the configuration file, overrides applied
    pub configuration: Configuration,

    /// Optional description string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl IsaTabTemplate {
    /// Look up a single configuration variable
    pub fn variable(&self, key: &str) -> Option<&Value> {
        self.configuration.get(key)
    }
}

/// One row of a registration table
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateEntry {
    /// Registry key
    pub name: String,

    /// Scaffold directory below the base directory
    pub directory: String,

    /// Directory whose configuration file is loaded, if not `directory`
    pub config_source: Option<String>,

    pub description: Option<String>,

    /// Literal values merged over the loaded configuration
    pub overrides: Configuration,
}

impl TemplateEntry {
    pub fn new(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            config_source: None,
            description: None,
            overrides: Configuration::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Load the configuration from another template directory
    pub fn with_config_source(mut self, directory: impl Into<String>) -> Self {
        self.config_source = Some(directory.into());
        self
    }

    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Directory the configuration file is read from
    pub fn config_directory(&self) -> &str {
        self.config_source.as_deref().unwrap_or(&self.directory)
    }

    pub(crate) fn overrides_for_load(&self) -> Option<&Configuration> {
        if self.overrides.is_empty() { None } else { Some(&self.overrides) }
    }
}

/// Names of the builtin templates, in registration order
pub const BUILTIN_TEMPLATES: [&str; 10] = [
    "single_cell_rnaseq",
    "bulk_rnaseq",
    "tumor_normal_dna",
    "tumor_normal_triplets",
    "germline",
    "generic",
    "microarray",
    "ms_meta_biocrates",
    "stem_cell_core_bulk",
    "stem_cell_core_sc",
];

/// The builtin registration table
///
/// `bulk_rnaseq` points at its own scaffold but reuses the generic
/// configuration.
pub fn builtin_entries() -> Vec<TemplateEntry> {
    vec![
        TemplateEntry::new("single_cell_rnaseq", "isatab-single_cell_rnaseq")
            .with_description("single cell RNA sequencing ISA-tab template"),
        TemplateEntry::new("bulk_rnaseq", "isatab-bulk_rnaseq")
            .with_config_source("isatab-generic")
            .with_description("bulk RNA sequencing ISA-tab template"),
        TemplateEntry::new("tumor_normal_dna", "isatab-tumor_normal_dna")
            .with_description("Tumor-Normal DNA sequencing ISA-tab template")
            .with_override("is_triplet", false),
        TemplateEntry::new("tumor_normal_triplets", "isatab-tumor_normal_triplets")
            .with_description("Tumor-Normal DNA+RNA sequencing ISA-tab template")
            .with_override("is_triplet", true),
        TemplateEntry::new("germline", "isatab-germline").with_description("germline DNA sequencing ISA-tab template"),
        TemplateEntry::new("generic", "isatab-generic").with_description("generic RNA sequencing ISA-tab template"),
        TemplateEntry::new("microarray", "isatab-microarray").with_description("microarray ISA-tab template"),
        TemplateEntry::new("ms_meta_biocrates", "isatab-ms_meta_biocrates")
            .with_description("MS Metabolomics Biocrates kit ISA-tab template"),
        TemplateEntry::new("stem_cell_core_bulk", "isatab-stem_cell_core_bulk")
            .with_description("Bulk RNA sequencing ISA-tab template from hiPSC for stem cell core projects"),
        TemplateEntry::new("stem_cell_core_sc", "isatab-stem_cell_core_sc")
            .with_description("Single cell RNA sequencing ISA-tab template from hiPSC for stem cell core projects"),
    ]
}
