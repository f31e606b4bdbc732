//! Main entry point for the connector binary
//!
//! Builds the discovery configuration from the given endpoints and the
//! discovery config file, then prints the result.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use connector::{ConfigBuilder, DryRunInitializer, DEFAULT_CONFIG_PATH};
use shared::{component_debug, logging, ComponentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

/// Build the discovery SDK configuration for a set of registry endpoints
#[derive(Parser)]
#[command(name = "connector")]
#[command(about = "Builds and prints the discovery SDK configuration")]
pub struct Args {
    /// Registry endpoints as host:port, comma-separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub endpoints: Vec<String>,

    /// Discovery config file merged over the endpoint defaults when present
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config_path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_tracing(ComponentId::Cli, Some(&args.log_level))?;
    logging::log_startup(ComponentId::Cli, "discovery configuration build");
    component_debug!(ComponentId::Cli, "Endpoints: {}", args.endpoints.join(","));

    let builder = ConfigBuilder::new().with_config_path(args.config_path.clone());
    let config = match builder.init_context(&args.endpoints, &DryRunInitializer) {
        Ok(config) => config,
        Err(e) => {
            logging::log_error(ComponentId::Cli, "Configuration build", &e);
            return Err(e.into());
        }
    };

    let rendered = match args.format {
        OutputFormat::Yaml => config.to_yaml(),
        OutputFormat::Json => config.to_json(),
    }
    .context("rendering configuration")?;

    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
