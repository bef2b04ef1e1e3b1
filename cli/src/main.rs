//! CLI entrypoint for luagen
//!
//! Wires the layers together: parses arguments, initializes logging,
//! loads configuration, constructs the source and writer adapters, and
//! runs the generate use case.

use anyhow::{Result, bail};
use clap::Parser;
use luagen_application::{GenerateInput, GenerateModulesUseCase, GenerateReport};
use luagen_domain::{OutputLayout, VersionSelection};
use luagen_infrastructure::{
    BundlecoreSource, ConfigLoader, FileConfig, FilesystemWriter, LocalFileSource, TemplateLoader,
};
use luagen_presentation::{Cli, Command, ConsoleReporter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let command = match cli.command {
        Some(command) => command,
        None => bail!("A subcommand is required. Run with --help for usage."),
    };

    let report = run(command, &config).await?;

    info!(
        "Run finished: {} written, {} failed",
        report.written.len(),
        report.failures.len()
    );

    if !cli.quiet {
        print!("{}", ConsoleReporter::format(&report));
    }

    Ok(())
}

/// Build the adapters for the selected command and execute the use case.
async fn run(command: Command, config: &FileConfig) -> Result<GenerateReport> {
    let writer = Arc::new(FilesystemWriter::new());

    let report = match command {
        Command::Local { data, template } => {
            let template = TemplateLoader::from_path(&template)?;
            let source = Arc::new(LocalFileSource::new(data, config.schema.local.clone()));
            let input = GenerateInput {
                template,
                schema: config.schema.local.clone(),
                selection: VersionSelection::All,
                layout: OutputLayout::Flat,
            };
            GenerateModulesUseCase::new(source, writer)
                .execute(input)
                .await?
        }
        Command::Fetch {
            tool_name,
            tool_version,
            tool_domain,
            template,
        } => {
            let template = TemplateLoader::from_path(&template)?;
            let source = Arc::new(BundlecoreSource::from_env(
                config.registry.base_url.clone(),
                tool_name.clone(),
                config.schema.remote.clone(),
            )?);
            let input = GenerateInput {
                template,
                schema: config.schema.remote.clone(),
                selection: VersionSelection::Exact(tool_version),
                layout: OutputLayout::Nested {
                    domain: tool_domain,
                    tool: tool_name,
                },
            };
            GenerateModulesUseCase::new(source, writer)
                .execute(input)
                .await?
        }
        Command::FetchAll {
            tool_name,
            template,
        } => {
            let template = TemplateLoader::from_path(&template)?;
            let source = Arc::new(BundlecoreSource::from_env(
                config.registry.base_url.clone(),
                tool_name,
                config.schema.remote.clone(),
            )?);
            let input = GenerateInput {
                template,
                schema: config.schema.remote.clone(),
                selection: VersionSelection::All,
                layout: OutputLayout::Flat,
            };
            GenerateModulesUseCase::new(source, writer)
                .execute(input)
                .await?
        }
    };

    Ok(report)
}
