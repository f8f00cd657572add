//! Item models produced by the parsing pipeline.
//!
//! Everything here is transient: candidate items live only between an OCR
//! submission and the user's confirm/discard decision. Persistence happens
//! outside this crate, after confirmation.

use serde::{Deserialize, Serialize};

/// A structured guess at one product line, extracted from cleaned text.
///
/// `quantity` is always finite and non-negative: unparseable quantities
/// reject the whole line before a `CandidateItem` is built. `price` is
/// present only when a `$`-prefixed token was found; it is never derived
/// from the same literal token as the quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    /// Extracted item name, non-empty after trimming.
    pub name: String,

    /// Extracted quantity.
    pub quantity: f64,

    /// Extracted unit token, or `"unit"` when the line carried none.
    pub unit: String,

    /// Extracted `$`-prefixed price, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Review status of a parsed item relative to the inventory snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// The corrected name matches an existing inventory item exactly.
    Tracked,
    /// Unmatched, but fuzzy correction produced a different name.
    New,
    /// Unmatched and the name passed through correction unchanged.
    Unknown,
    /// The corrected name is empty; the item needs manual attention.
    Pending,
}

/// A candidate item after name correction and status tagging.
///
/// This is the boundary artifact handed to the user-confirmation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItem {
    /// Name as extracted from the text.
    pub name: String,

    pub quantity: f64,

    pub unit: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Name after fuzzy correction against the inventory index.
    pub corrected_name: String,

    pub status: ItemStatus,

    /// Category of the matched inventory item, when tracked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Free-form note carried over from the parse service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// The text fragment this item was extracted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

/// One item as returned by the remote parse service.
///
/// The service contract requires name/quantity/unit, but responses have
/// historically arrived with fields missing, so everything is optional
/// here and [`LlmItem::into_candidate`] enforces the contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmItem {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub quantity: Option<f64>,

    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Older service revisions emitted `rawText` instead of `sourceText`.
    #[serde(default, alias = "rawText", skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
}

impl LlmItem {
    /// Convert into a [`CandidateItem`], rejecting items that are missing
    /// any required field or carry a non-finite or negative quantity.
    pub fn into_candidate(self) -> Option<(CandidateItem, Option<String>, Option<String>)> {
        let name = self.name?.trim().to_string();
        let quantity = self.quantity?;
        let unit = self.unit?.trim().to_string();

        if name.is_empty() || unit.is_empty() || !quantity.is_finite() || quantity < 0.0 {
            return None;
        }

        let item = CandidateItem {
            name,
            quantity,
            unit,
            price: self.price.filter(|p| p.is_finite()),
        };

        Some((item, self.note, self.source_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_item_requires_all_core_fields() {
        let item = LlmItem {
            name: Some("Garlic".to_string()),
            quantity: Some(2.0),
            unit: None,
            ..Default::default()
        };
        assert!(item.into_candidate().is_none());

        let item = LlmItem {
            name: Some("Garlic".to_string()),
            quantity: Some(2.0),
            unit: Some("kg".to_string()),
            price: Some(4.0),
            ..Default::default()
        };
        let (candidate, _, _) = item.into_candidate().unwrap();
        assert_eq!(candidate.name, "Garlic");
        assert_eq!(candidate.quantity, 2.0);
        assert_eq!(candidate.price, Some(4.0));
    }

    #[test]
    fn llm_item_rejects_bad_quantity() {
        let item = LlmItem {
            name: Some("Garlic".to_string()),
            quantity: Some(f64::NAN),
            unit: Some("kg".to_string()),
            ..Default::default()
        };
        assert!(item.into_candidate().is_none());
    }

    #[test]
    fn llm_item_accepts_raw_text_alias() {
        let item: LlmItem =
            serde_json::from_str(r#"{"name":"Milk","quantity":1,"unit":"l","rawText":"Milk 1L"}"#)
                .unwrap();
        assert_eq!(item.source_text.as_deref(), Some("Milk 1L"));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Tracked).unwrap(),
            "\"tracked\""
        );
        assert_eq!(
            serde_json::to_string(&ItemStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
