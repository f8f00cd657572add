//! Parse command - extract items from OCR text with the local rules.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use larder_core::{InventoryEntry, InventoryIndex, InvoiceTextParser, LarderConfig};

use super::output::{write_items, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file (default: stdin)
    input: Option<PathBuf>,

    /// Inventory snapshot as a JSON array of {id?, name, category?}
    #[arg(short, long)]
    inventory: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override the fuzzy-match similarity threshold
    #[arg(short, long)]
    threshold: Option<f64>,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(threshold) = args.threshold {
        config.matching.similarity_threshold = threshold;
    }

    let raw_text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let inventory = load_inventory(args.inventory.as_deref())?;
    info!(names = inventory.len(), "inventory snapshot loaded");

    let parser = InvoiceTextParser::with_config(config);
    let items = parser.parse_text(&raw_text, &inventory);

    write_items(&items, args.format, args.output.as_deref())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<LarderConfig> {
    match config_path {
        Some(path) => Ok(LarderConfig::from_file(std::path::Path::new(path))?),
        None => Ok(LarderConfig::default()),
    }
}

pub fn load_inventory(path: Option<&std::path::Path>) -> anyhow::Result<InventoryIndex> {
    match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let entries: Vec<InventoryEntry> = serde_json::from_str(&content)?;
            Ok(InventoryIndex::new(entries))
        }
        None => Ok(InventoryIndex::default()),
    }
}
