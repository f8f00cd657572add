//! Fuzzy correction of extracted names against the inventory snapshot.

use tracing::debug;

use crate::models::inventory::InventoryIndex;

/// Map an extracted name to the closest known inventory name.
///
/// Names are compared case-folded with the Sørensen–Dice bigram
/// coefficient. When the best score reaches `threshold` the matched
/// entry's original-cased name is returned; otherwise the input passes
/// through unchanged. Ties keep the earliest candidate. Raising the
/// threshold can only shrink the set of accepted corrections.
pub fn correct_name(input: &str, inventory: &InventoryIndex, threshold: f64) -> String {
    let input_folded = input.to_lowercase();

    let mut best: Option<(&str, f64)> = None;
    for candidate in inventory.names() {
        let folded = candidate.trim().to_lowercase();
        if folded.is_empty() {
            continue;
        }

        let score = strsim::sorensen_dice(&input_folded, &folded);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((name, score)) if score >= threshold => {
            debug!(input, matched = name, score, "fuzzy-corrected item name");
            name.to_string()
        }
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn index() -> InventoryIndex {
        InventoryIndex::from_names(["Tomato", "Soy Sauce", "Olive Oil"])
    }

    #[test]
    fn corrects_close_misspelling() {
        assert_eq!(correct_name("tomatoe", &index(), 0.7), "Tomato");
    }

    #[test]
    fn passes_through_below_threshold() {
        assert_eq!(correct_name("xyz123", &index(), 0.7), "xyz123");
    }

    #[test]
    fn returns_original_cased_inventory_name() {
        assert_eq!(correct_name("soy sauce", &index(), 0.7), "Soy Sauce");
    }

    #[test]
    fn empty_inventory_passes_input_through() {
        let empty = InventoryIndex::default();
        assert_eq!(correct_name("tomatoe", &empty, 0.1), "tomatoe");
    }

    #[test]
    fn raising_threshold_only_removes_corrections() {
        let thresholds = [0.1, 0.5, 0.7, 0.9, 1.0];
        let mut accepted_before = true;
        for t in thresholds {
            let accepted = correct_name("tomatoe", &index(), t) == "Tomato";
            assert!(
                accepted_before || !accepted,
                "correction reappeared at threshold {t}"
            );
            accepted_before = accepted;
        }
    }
}
