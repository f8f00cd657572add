//! Shared output rendering for parsed items.

use std::fs;
use std::path::Path;

use console::style;
use larder_core::{ItemStatus, ParsedItem};

/// Output format selection shared by the parse and scan commands.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

/// Render items in the requested format to a file or stdout.
pub fn write_items(
    items: &[ParsedItem],
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(items)?,
        OutputFormat::Csv => render_csv(items)?,
        OutputFormat::Text => render_text(items),
    };

    match output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render_csv(items: &[ParsedItem]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "name",
        "corrected_name",
        "quantity",
        "unit",
        "price",
        "status",
        "category",
    ])?;

    for item in items {
        let quantity = item.quantity.to_string();
        let price = item.price.map(|p| p.to_string()).unwrap_or_default();
        writer.write_record([
            item.name.as_str(),
            item.corrected_name.as_str(),
            quantity.as_str(),
            item.unit.as_str(),
            price.as_str(),
            status_label(item.status),
            item.category.as_deref().unwrap_or(""),
        ])?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}

fn render_text(items: &[ParsedItem]) -> String {
    if items.is_empty() {
        return format!("{} no items extracted", style("!").yellow());
    }

    let mut out = String::new();
    for item in items {
        let marker = match item.status {
            ItemStatus::Tracked => style("✓").green(),
            ItemStatus::New => style("+").yellow(),
            ItemStatus::Unknown => style("?").yellow(),
            ItemStatus::Pending => style("!").red(),
        };

        let price = item
            .price
            .map(|p| format!("  ${p:.2}"))
            .unwrap_or_default();

        out.push_str(&format!(
            "{} {}  {} {}{}  [{}]\n",
            marker,
            item.corrected_name,
            item.quantity,
            item.unit,
            price,
            status_label(item.status),
        ));
    }
    out.push_str(&format!("{} item(s)", items.len()));
    out
}

fn status_label(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Tracked => "tracked",
        ItemStatus::New => "new",
        ItemStatus::Unknown => "unknown",
        ItemStatus::Pending => "pending",
    }
}
