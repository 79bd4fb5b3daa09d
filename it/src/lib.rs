//! isatemplates - registry of ISA-tab Cookiecutter templates
//!
//! Each template is a Cookiecutter scaffold directory whose variables live in
//! a `cookiecutter.json` object. The registry loads every known template once,
//! applies its fixed overrides and hands out read-only descriptors that a
//! scaffolding tool can render from.
//!
//! # Layout
//!
//! ```text
//! templates/
//! ├── isatab-generic/
//! │   ├── cookiecutter.json    # template variables
//! │   └── {{cookiecutter.__output_dir}}/...
//! ├── isatab-germline/
//! └── ...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use isatemplates::TemplateRegistry;
//!
//! let registry = TemplateRegistry::load("templates")?;
//! let tpl = registry.get("tumor_normal_dna")?;
//! assert_eq!(tpl.configuration["is_triplet"], false);
//! ```

pub mod cli;
pub mod config;
mod discover;
mod error;
mod loader;
mod registry;
mod template;

pub use discover::{DiscoveredTemplate, DiscoveryReport, TEMPLATE_DIR_PREFIX, discover_templates, reconcile};
pub use error::RegistryError;
pub use loader::{CONFIG_FILENAME, Configuration, TemplateLoader, load_configuration, merge_overrides};
pub use registry::TemplateRegistry;
pub use template::{BUILTIN_TEMPLATES, IsaTabTemplate, TemplateEntry, builtin_entries};
