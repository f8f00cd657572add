//! Config command - manage configuration.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use larder_core::LarderConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = "larder.json")]
    output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(config_path),
        ConfigCommand::Init(init_args) => init_config(init_args),
    }
}

fn show_config(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => LarderConfig::from_file(std::path::Path::new(path))?,
        None => {
            println!(
                "{} No config file given, showing defaults.",
                style("ℹ").blue()
            );
            LarderConfig::default()
        }
    };

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            args.output.display()
        );
    }

    let config = LarderConfig::default();
    config.save(&args.output)?;

    println!(
        "{} Wrote default configuration to {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}
