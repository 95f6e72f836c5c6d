use anyhow::{Context, Result};
use clap::Parser;
use risc_core::{form::FormControllerBuilder, registry::ParameterRegistry};
use risc_schemas::model::ModelSelection;
use std::io;

mod command;
mod config;
mod console;
mod session;

use command::SessionCommand;
use config::AppConfig;
use session::Session;

/// Enter vadose, saturated zone and dissolved source parameters and export them as a
/// text report.
#[derive(Debug, Parser)]
#[command(name = "risc", version)]
struct Cli {
    /// YAML configuration file.
    #[arg(long)]
    config: Option<String>,

    /// Export destination, overriding the configuration.
    #[arg(long)]
    output: Option<String>,

    /// Run the commands of a YAML script instead of reading from standard input.
    #[arg(long)]
    script: Option<String>,

    /// Model to select at start-up, e.g. "dissolved" or "Dissolved Source".
    #[arg(long)]
    model: Option<ModelSelection>,

    /// Chemical to select at start-up.
    #[arg(long)]
    chemical: Option<String>,

    /// Hide the contaminant list section.
    #[arg(long)]
    no_contaminants: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    println!("--- RISC Parameter Form ---");

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(output) = cli.output {
        config.output_path = output;
    }
    if let Some(chemical) = cli.chemical {
        config.default_chemical = Some(chemical);
    }
    if cli.no_contaminants {
        config.contaminant_section = false;
    }
    log::debug!("Configuration: {:?}", config);

    let registry = match &config.registry_path {
        Some(path) => ParameterRegistry::load(path)
            .with_context(|| format!("Failed to load parameter registry '{}'", path))?,
        None => ParameterRegistry::builtin(),
    };

    let controller = FormControllerBuilder::new()
        .with_registry(registry)
        .with_contaminant_section(config.contaminant_section)
        .build()
        .context("Invalid parameter registry")?;

    let mut session = Session::new(controller, config.default_chemical, config.output_path)
        .context("Invalid start-up chemical")?;
    println!("Chemical: {}", session.chemical());

    if let Some(model) = cli.model {
        println!("{}", session.execute(SessionCommand::SelectModel { model }));
    }

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match cli.script {
        Some(path) => {
            console::run_script(&mut session, &path, &mut output)?;
        }
        None => console::run_interactive(&mut session, io::stdin().lock(), &mut output)?,
    }

    log::debug!(
        "Session ended with model '{}' and {} contaminant(s)",
        session.controller().selection(),
        session.contaminants().len()
    );
    Ok(())
}
