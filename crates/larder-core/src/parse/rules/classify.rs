//! Lexical classification of cleaned lines into item / non-item.

use tracing::debug;

use super::clean::clean_line;
use super::patterns::{
    CLASSIFIER_UNITS, METADATA_PREFIX, NUMBER_TOKEN, NUMERIC_ONLY_LINE, WORD_PRESENT,
};

/// Decide whether a line is likely a product line rather than a header,
/// address or metadata row. Deterministic and pure.
///
/// A line qualifies only when it carries words, a number and a unit token
/// all at once, and does not open with a metadata keyword or consist of
/// digits and separators alone.
pub fn is_likely_item_line(line: &str) -> bool {
    let cleaned = clean_line(line).to_lowercase();

    if METADATA_PREFIX.is_match(&cleaned) || NUMERIC_ONLY_LINE.is_match(&cleaned) {
        return false;
    }

    let has_number = NUMBER_TOKEN.is_match(&cleaned);
    let has_unit = CLASSIFIER_UNITS.is_match(&cleaned);
    let has_words = WORD_PRESENT.is_match(&cleaned);

    has_words && has_number && has_unit
}

/// Group consecutive item-like lines into candidate blocks.
///
/// Runs of lines passing [`is_likely_item_line`] are joined with spaces;
/// a non-matching line flushes the pending run. Ordering is preserved and
/// empty input yields empty output.
pub fn group_likely_item_blocks<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let mut grouped = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if is_likely_item_line(line) {
            current.push(line);
        } else if !current.is_empty() {
            grouped.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        grouped.push(current.join(" "));
    }

    debug!(blocks = grouped.len(), "grouped item-like lines");
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_product_lines() {
        assert!(is_likely_item_line("Soy Sauce 1 L"));
        assert!(is_likely_item_line("Chicken 3 kg $9.50"));
        assert!(is_likely_item_line("トマト 2袋"));
    }

    #[test]
    fn rejects_metadata_prefixes() {
        assert!(!is_likely_item_line("INVOICE # 1045"));
        assert!(!is_likely_item_line("Total 42.00"));
        assert!(!is_likely_item_line("Tel 03-1234-5678"));
        assert!(!is_likely_item_line("Thank you for your business"));
    }

    #[test]
    fn rejects_numeric_and_date_like_lines() {
        // digits, whitespace and separator punctuation only
        for line in ["1045", "12/05/2024", "10:30", "12 - 34", "3.50"] {
            assert!(!is_likely_item_line(line), "accepted {line:?}");
        }
    }

    #[test]
    fn rejects_lines_without_units_or_numbers() {
        assert!(!is_likely_item_line("Garlic"));
        assert!(!is_likely_item_line("Garlic 2"));
        assert!(!is_likely_item_line("Garlic kg"));
    }

    #[test]
    fn groups_consecutive_item_lines() {
        let lines = [
            "Fresh Produce Market",
            "Tomato 2 kg",
            "Garlic 1 pack",
            "Subtotal 12.00",
            "Milk 1 L",
        ];
        let blocks = group_likely_item_blocks(&lines);
        assert_eq!(blocks, vec!["Tomato 2 kg Garlic 1 pack", "Milk 1 L"]);
    }

    #[test]
    fn grouping_empty_input_yields_empty_output() {
        let lines: [&str; 0] = [];
        assert!(group_likely_item_blocks(&lines).is_empty());
    }
}
