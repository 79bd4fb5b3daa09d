use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use tracing::info;

use isatemplates::cli::{Cli, Command, OutputFormat, assignments_to_overrides};
use isatemplates::config::Config;
use isatemplates::{IsaTabTemplate, TemplateRegistry, builtin_entries, discover_templates, merge_overrides, reconcile};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(dir) = cli.templates_dir {
        config.templates_dir = dir;
    }
    info!(templates_dir = %config.templates_dir.display(), "isatpl starting");

    match cli.command {
        Command::List { format } => cmd_list(&build_registry(&config)?, &format),
        Command::Show { name, format } => {
            let registry = build_registry(&config)?;
            let template = registry.get(&name)?;
            print_template(template, &format)
        }
        Command::Vars { name, set, format } => {
            let registry = build_registry(&config)?;
            let template = registry.get(&name)?;
            let mut configuration = template.configuration.clone();
            merge_overrides(&mut configuration, &assignments_to_overrides(&set));
            print_value(&configuration, &format)
        }
        Command::Check => cmd_check(&config),
    }
}

fn build_registry(config: &Config) -> Result<TemplateRegistry> {
    TemplateRegistry::with_loader(config.loader())
        .with_context(|| format!("Failed to load templates from {}", config.templates_dir.display()))
}

fn cmd_list(registry: &TemplateRegistry, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for template in registry.iter() {
                println!(
                    "{:<24} {}",
                    template.name.cyan(),
                    template.description.as_deref().unwrap_or("").dimmed()
                );
            }
            Ok(())
        }
        _ => {
            let templates: Vec<&IsaTabTemplate> = registry.iter().collect();
            print_value(&templates, format)
        }
    }
}

fn print_template(template: &IsaTabTemplate, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            println!("Template: {}", template.name.cyan());
            if let Some(description) = &template.description {
                println!("  Description: {}", description);
            }
            println!("  Path: {}", template.path.display());
            println!("  Variables:");
            for (key, value) in &template.configuration {
                println!("    {} = {}", key.yellow(), value);
            }
            Ok(())
        }
        _ => print_value(template, format),
    }
}

fn print_value<T: serde::Serialize + ?Sized>(value: &T, format: &OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(value)?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn cmd_check(config: &Config) -> Result<()> {
    // Scan before loading so absent directories are listed rather than
    // surfacing as the first load error.
    let discovered = discover_templates(&config.templates_dir, &config.config_filename)?;
    let report = reconcile(&discovered, &builtin_entries());
    for directory in &report.unregistered {
        println!("{} Unregistered template directory: {}", "!".yellow(), directory);
    }
    for directory in &report.missing {
        println!("{} Missing template directory: {}", "✗".red(), directory);
    }
    if !report.missing.is_empty() {
        return Err(eyre!("{} template directories missing", report.missing.len()));
    }

    let registry = build_registry(config)?;
    println!(
        "{} {} templates loaded from {}",
        "✓".green(),
        registry.len(),
        registry.base_dir().display()
    );
    if report.is_clean() {
        println!("{} All template directories are registered", "✓".green());
    }
    Ok(())
}
