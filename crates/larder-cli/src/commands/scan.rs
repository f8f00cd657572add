//! Scan command - run an invoice image through the remote services.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use larder_core::{DelegationMode, RemoteParseOrchestrator};

use super::output::{write_items, OutputFormat};
use super::parse::{load_config, load_inventory};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input image file
    #[arg(required = true)]
    input: PathBuf,

    /// Inventory snapshot as a JSON array of {id?, name, category?}
    #[arg(short, long)]
    inventory: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Delegate parsing to the remote parse service
    #[arg(long, value_enum)]
    delegate: Option<Delegate>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Delegate {
    /// Local rules only
    Local,
    /// One parse call over the whole OCR text
    FullText,
    /// One parse call per block
    PerBlock,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(delegate) = args.delegate {
        config.remote.delegation = match delegate {
            Delegate::Local => DelegationMode::LocalOnly,
            Delegate::FullText => DelegationMode::FullText,
            Delegate::PerBlock => DelegationMode::PerBlock,
        };
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let image = fs::read(&args.input)?;
    info!(bytes = image.len(), file = %args.input.display(), "submitting invoice image");

    let inventory = load_inventory(args.inventory.as_deref())?;

    let orchestrator = RemoteParseOrchestrator::new(config)?;
    let items = orchestrator.parse_image(&image, &inventory).await?;

    write_items(&items, args.format, args.output.as_deref())
}
