//! Client for the opaque text-parsing service (LLM behind an HTTP proxy).

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{RemoteError, Result};
use crate::models::config::RemoteConfig;
use crate::models::item::LlmItem;

/// Known historical response shapes of the parse service.
///
/// Older revisions wrapped items in `data`, some deployments use `items`,
/// and the model occasionally returns the bare array. The union is
/// normalized by [`LlmEnvelope::into_items`] so callers never probe
/// optional fields.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LlmEnvelope {
    Data { data: Vec<LlmItem> },
    Items { items: Vec<LlmItem> },
    Bare(Vec<LlmItem>),
}

impl LlmEnvelope {
    fn into_items(self) -> Vec<LlmItem> {
        match self {
            Self::Data { data } => data,
            Self::Items { items } => items,
            Self::Bare(items) => items,
        }
    }
}

/// Remove markdown code-fence markers the model wraps around JSON.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// HTTP client for the invoice parse service.
pub struct LlmClient {
    http: reqwest::Client,
    parse_block_url: String,
    parse_text_url: String,
}

impl LlmClient {
    /// Build a client from the remote configuration.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RemoteError::Http)?;

        Ok(Self {
            http,
            parse_block_url: config.parse_block_url.clone(),
            parse_text_url: config.parse_text_url.clone(),
        })
    }

    /// Parse a single text block into items.
    pub async fn parse_block(&self, block: &str) -> Result<Vec<LlmItem>> {
        self.post_for_items(&self.parse_block_url, json!({ "block": block }))
            .await
    }

    /// Parse a whole OCR text into items in one call.
    pub async fn parse_text(&self, raw_text: &str) -> Result<Vec<LlmItem>> {
        self.post_for_items(&self.parse_text_url, json!({ "rawText": raw_text }))
            .await
    }

    async fn post_for_items(&self, url: &str, body: serde_json::Value) -> Result<Vec<LlmItem>> {
        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(RemoteError::Http)?;

        let status = response.status();
        let text = response.text().await.map_err(RemoteError::Http)?;

        if !status.is_success() {
            return Err(RemoteError::Service {
                status: status.as_u16(),
                message: text,
            }
            .into());
        }

        let items = decode_items(&text)?;
        debug!(url, count = items.len(), "parse service returned items");
        Ok(items)
    }
}

fn decode_items(body: &str) -> Result<Vec<LlmItem>> {
    let stripped = strip_code_fences(body);
    let envelope: LlmEnvelope = serde_json::from_str(&stripped)
        .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;
    Ok(envelope.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_code_fences() {
        assert_eq!(
            strip_code_fences("```json\n[{\"name\":\"Garlic\"}]\n```"),
            "[{\"name\":\"Garlic\"}]"
        );
        assert_eq!(strip_code_fences("  [1]  "), "[1]");
    }

    #[test]
    fn decodes_data_envelope() {
        let items =
            decode_items(r#"{"data":[{"name":"Garlic","quantity":2,"unit":"kg"}]}"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Garlic"));
    }

    #[test]
    fn decodes_items_envelope() {
        let items =
            decode_items(r#"{"items":[{"name":"Milk","quantity":1,"unit":"l"}]}"#).unwrap();
        assert_eq!(items[0].name.as_deref(), Some("Milk"));
    }

    #[test]
    fn decodes_bare_array_with_fences() {
        let items = decode_items(
            "```json\n[{\"name\":\"Milk\",\"quantity\":1,\"unit\":\"l\",\"price\":3.2}]\n```",
        )
        .unwrap();
        assert_eq!(items[0].price, Some(3.2));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(decode_items("not json at all").is_err());
    }
}
