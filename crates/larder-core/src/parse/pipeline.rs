//! Composed local parsing pipeline: blocks/table → normalization →
//! name correction → status tagging.

use tracing::{debug, info};

use crate::models::config::LarderConfig;
use crate::models::inventory::InventoryIndex;
use crate::models::item::{CandidateItem, ItemStatus, ParsedItem};

use super::rules::{
    correct_name, is_likely_item_line, normalize_line_with, reconstruct_columns,
    split_into_blocks,
};

/// Local rules-based invoice text parser.
pub struct InvoiceTextParser {
    config: LarderConfig,
}

impl InvoiceTextParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: LarderConfig::default(),
        }
    }

    /// Create a parser from an explicit configuration.
    pub fn with_config(config: LarderConfig) -> Self {
        Self { config }
    }

    /// Set the fuzzy-match similarity threshold.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.config.matching.similarity_threshold = threshold;
        self
    }

    /// Parse raw OCR text into review-ready items.
    ///
    /// Vertical-table layouts are re-interleaved first; free-form text is
    /// grouped into blocks, filtered through the item-line classifier and
    /// normalized line by line. Extracted names are then corrected against
    /// the inventory snapshot and tagged for review.
    pub fn parse_text(&self, raw_text: &str, inventory: &InventoryIndex) -> Vec<ParsedItem> {
        let candidates = match reconstruct_columns(raw_text, &self.config.normalizer) {
            Some(items) => items,
            None => {
                let lines: Vec<&str> = raw_text
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .collect();
                let blocks = split_into_blocks(&lines);
                debug!(lines = lines.len(), blocks = blocks.len(), "split free-form text");

                blocks
                    .iter()
                    .filter(|block| is_likely_item_line(block))
                    .filter_map(|block| normalize_line_with(block, &self.config.normalizer))
                    .collect()
            }
        };

        info!(count = candidates.len(), "extracted candidate items");

        candidates
            .into_iter()
            .map(|item| self.correct_and_tag(item, None, None, inventory))
            .collect()
    }

    /// Correct one candidate's name and tag it for review.
    pub fn correct_and_tag(
        &self,
        item: CandidateItem,
        note: Option<String>,
        source_text: Option<String>,
        inventory: &InventoryIndex,
    ) -> ParsedItem {
        let corrected_name = correct_name(
            &item.name,
            inventory,
            self.config.matching.similarity_threshold,
        );
        let (status, category) = tag_status(&item.name, &corrected_name, inventory);

        ParsedItem {
            name: item.name,
            quantity: item.quantity,
            unit: item.unit,
            price: item.price,
            corrected_name,
            status,
            category,
            note,
            source_text,
        }
    }
}

impl Default for InvoiceTextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign a review status to an item after name correction.
///
/// One policy for every call site: empty corrected name → `Pending`;
/// exact case-folded inventory match → `Tracked`; unmatched with a name
/// the correction invented → `New` (lower confidence); unmatched and
/// passed through unchanged → `Unknown`. Returns the matched entry's
/// category alongside.
pub fn tag_status(
    raw_name: &str,
    corrected_name: &str,
    inventory: &InventoryIndex,
) -> (ItemStatus, Option<String>) {
    if corrected_name.trim().is_empty() {
        return (ItemStatus::Pending, None);
    }

    if let Some(entry) = inventory.lookup(corrected_name) {
        return (ItemStatus::Tracked, entry.category.clone());
    }

    if corrected_name != raw_name {
        (ItemStatus::New, None)
    } else {
        (ItemStatus::Unknown, None)
    }
}

/// Parse raw OCR text against an inventory snapshot.
///
/// Boundary function for the surrounding application; the pipeline
/// primitives in [`rules`](super::rules) stay independently callable.
pub fn parse_invoice_text(
    raw_text: &str,
    inventory: &InventoryIndex,
    threshold: f64,
) -> Vec<ParsedItem> {
    InvoiceTextParser::new()
        .with_similarity_threshold(threshold)
        .parse_text(raw_text, inventory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::InventoryEntry;
    use pretty_assertions::assert_eq;

    fn inventory() -> InventoryIndex {
        InventoryIndex::new(vec![
            InventoryEntry {
                id: Some("1".to_string()),
                name: "Tomato".to_string(),
                category: Some("produce".to_string()),
            },
            InventoryEntry {
                id: Some("2".to_string()),
                name: "Soy Sauce".to_string(),
                category: Some("condiments".to_string()),
            },
        ])
    }

    #[test]
    fn tags_tracked_when_corrected_name_is_indexed() {
        let (status, category) = tag_status("tomatoe", "Tomato", &inventory());
        assert_eq!(status, ItemStatus::Tracked);
        assert_eq!(category.as_deref(), Some("produce"));
    }

    #[test]
    fn tags_new_when_correction_invented_a_name() {
        let (status, _) = tag_status("tomatoe", "Tomatillo", &inventory());
        assert_eq!(status, ItemStatus::New);
    }

    #[test]
    fn tags_unknown_when_name_passed_through() {
        let (status, _) = tag_status("xyz123", "xyz123", &inventory());
        assert_eq!(status, ItemStatus::Unknown);
    }

    #[test]
    fn tags_pending_when_corrected_name_is_empty() {
        let (status, _) = tag_status("", "", &inventory());
        assert_eq!(status, ItemStatus::Pending);
    }

    #[test]
    fn parses_free_form_text_end_to_end() {
        let raw = "Tomatoe\n2 kg $4.00\nSubtotal 12.00\n";
        let items = parse_invoice_text(raw, &inventory(), 0.7);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Tomatoe");
        assert_eq!(items[0].corrected_name, "Tomato");
        assert_eq!(items[0].status, ItemStatus::Tracked);
        assert_eq!(items[0].category.as_deref(), Some("produce"));
        assert_eq!(items[0].quantity, 2.0);
        assert_eq!(items[0].unit, "kg");
        assert_eq!(items[0].price, Some(4.0));
    }

    #[test]
    fn parses_vertical_table_end_to_end() {
        let raw = "DESCRIPTION\nTomato\nGarlic\nQUANTITY\nUNIT\n2\nkg\n3\npack\n";
        let items = parse_invoice_text(raw, &inventory(), 0.7);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].status, ItemStatus::Tracked);
        assert_eq!(items[1].name, "Garlic");
        assert_eq!(items[1].status, ItemStatus::Unknown);
    }

    #[test]
    fn unmatched_names_pass_through_at_high_threshold() {
        let raw = "Tomatoe 2 kg\n";
        let items = parse_invoice_text(raw, &inventory(), 0.99);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].corrected_name, "Tomatoe");
        assert_eq!(items[0].status, ItemStatus::Unknown);
    }
}
