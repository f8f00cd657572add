//! Vertical-table layout reconstruction.
//!
//! Some OCR engines emit columnar invoices as stacked column regions:
//! all description lines first, then a quantity header, then the
//! quantity/unit values as alternating lines. Re-interleaving those
//! columns recovers one parseable line per item.

use tracing::{debug, warn};

use crate::models::config::NormalizerConfig;
use crate::models::item::CandidateItem;

use super::normalize::normalize_line_with;

const HEADER_KEYWORDS: [&str; 3] = ["description", "quantity", "unit"];

/// Attempt the vertical-table reconstruction.
///
/// Returns `None` unless all three column headers are present and in
/// description < quantity < unit order; callers fall back to per-line
/// processing. Items are recovered by zipping the description column with
/// consecutive (quantity, unit) line pairs after the unit header.
pub fn reconstruct_columns(
    raw_text: &str,
    config: &NormalizerConfig,
) -> Option<Vec<CandidateItem>> {
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let description_idx = find_header(&lines, "description")?;
    let quantity_idx = find_header(&lines, "quantity")?;
    let unit_idx = find_header(&lines, "unit")?;

    if !(description_idx < quantity_idx && quantity_idx < unit_idx) {
        return None;
    }

    let name_lines: Vec<&str> = lines[description_idx + 1..quantity_idx]
        .iter()
        .filter(|l| !is_bare_header(l))
        .copied()
        .collect();

    let value_lines: Vec<&str> = lines[unit_idx + 1..]
        .iter()
        .filter(|l| !is_bare_header(l))
        .copied()
        .collect();

    let pairs: Vec<(&str, &str)> = value_lines
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    debug!(
        names = name_lines.len(),
        pairs = pairs.len(),
        "vertical table layout detected"
    );

    let count = name_lines.len().min(pairs.len());
    if name_lines.len() != pairs.len() {
        warn!(
            names = name_lines.len(),
            pairs = pairs.len(),
            dropped = name_lines.len().abs_diff(pairs.len()),
            "table column lengths differ; truncating to the shorter side"
        );
    }

    let mut items = Vec::with_capacity(count);
    for i in 0..count {
        let (qty, unit) = pairs[i];
        let combined = format!("{} {} {}", name_lines[i], qty, unit);
        if let Some(item) = normalize_line_with(&combined, config) {
            items.push(item);
        }
    }

    Some(items)
}

/// Extract candidate items from raw OCR text, using the default
/// normalizer configuration.
pub fn process_lines(raw_text: &str) -> Vec<CandidateItem> {
    process_lines_with(raw_text, &NormalizerConfig::default())
}

/// Extract candidate items from raw OCR text.
///
/// Tries the vertical-table reconstruction first; when headers are
/// missing or out of order it silently degrades to normalizing each line
/// on its own, skipping lines that carry a column-header keyword.
pub fn process_lines_with(raw_text: &str, config: &NormalizerConfig) -> Vec<CandidateItem> {
    if let Some(items) = reconstruct_columns(raw_text, config) {
        return items;
    }

    raw_text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !contains_header_keyword(l))
        .filter_map(|l| normalize_line_with(l, config))
        .collect()
}

fn find_header(lines: &[&str], keyword: &str) -> Option<usize> {
    lines.iter().position(|l| l.to_lowercase().contains(keyword))
}

fn is_bare_header(line: &str) -> bool {
    let lowered = line.to_lowercase();
    HEADER_KEYWORDS.contains(&lowered.as_str())
}

fn contains_header_keyword(line: &str) -> bool {
    let lowered = line.to_lowercase();
    HEADER_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VERTICAL: &str = "DESCRIPTION\nTomato\nGarlic\nQUANTITY\nUNIT\n2\nkg\n3\npack\n";

    #[test]
    fn reconstructs_vertical_table() {
        let items = process_lines(VERTICAL);
        assert_eq!(items.len(), 2);

        assert_eq!(items[0].name, "Tomato");
        assert_eq!(items[0].quantity, 2.0);
        assert_eq!(items[0].unit, "kg");

        assert_eq!(items[1].name, "Garlic");
        assert_eq!(items[1].quantity, 3.0);
        assert_eq!(items[1].unit, "pack");
    }

    #[test]
    fn truncates_to_shorter_column() {
        // three names, two value pairs
        let text = "DESCRIPTION\nTomato\nGarlic\nMilk\nQUANTITY\nUNIT\n2\nkg\n3\npack\n";
        let items = process_lines(text);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn falls_back_when_headers_missing() {
        let text = "Tomato 2 kg\nGarlic 3 pack\n";
        let items = process_lines(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Tomato");
    }

    #[test]
    fn falls_back_when_headers_out_of_order() {
        let text = "UNIT\nQUANTITY\nDESCRIPTION\nTomato 2 kg\n";
        let items = process_lines(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tomato");
    }

    #[test]
    fn fallback_skips_header_keyword_lines() {
        let text = "Description of goods\nTomato 2 kg\n";
        let items = process_lines(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tomato");
    }
}
