//! CLI argument parsing for isatemplates

use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

use crate::loader::Configuration;

#[derive(Parser, Debug)]
#[command(name = "isatpl")]
#[command(author, version, about = "Registry of ISA-tab Cookiecutter templates", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Base directory holding the isatab-* template directories
    #[arg(short, long, global = true)]
    pub templates_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered templates
    List {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show one template descriptor
    Show {
        /// Template name, e.g. germline
        #[arg(required = true)]
        name: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a template's variables with ad-hoc overrides applied
    Vars {
        /// Template name
        #[arg(required = true)]
        name: String,

        /// Override a variable (KEY=VALUE, VALUE parsed as JSON when possible)
        #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
        set: Vec<(String, Value)>,

        /// Output format
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,
    },

    /// Verify that every registered template loads and report stray directories
    Check,
}

/// Output format for listing commands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: {}. Use: text, json, or yaml", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Parse a `KEY=VALUE` assignment
///
/// `VALUE` is read as JSON (`true`, `3`, `["a"]`) and kept as a plain string
/// when it does not parse.
pub fn parse_assignment(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("Expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Empty key in '{}'", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Collect parsed assignments into an override mapping (later wins)
pub fn assignments_to_overrides(assignments: &[(String, Value)]) -> Configuration {
    assignments.iter().cloned().collect()
}
