//! Sequencing of the remote OCR and parse services with the local rules.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::models::config::{DelegationMode, LarderConfig};
use crate::models::inventory::InventoryIndex;
use crate::models::item::{LlmItem, ParsedItem};
use crate::parse::rules::split_into_blocks;
use crate::parse::InvoiceTextParser;

use super::llm::LlmClient;
use super::ocr::OcrClient;

/// Orchestrates one invoice submission: OCR, block splitting or table
/// reconstruction, local or delegated parsing, name correction and
/// status tagging.
///
/// Every core transform stays pure; this is the only place that talks to
/// the network. No partial state is committed on failure, so a caller may
/// simply retry the whole submission.
pub struct RemoteParseOrchestrator {
    ocr: OcrClient,
    llm: LlmClient,
    parser: InvoiceTextParser,
    mode: DelegationMode,
}

impl RemoteParseOrchestrator {
    /// Build an orchestrator from a configuration.
    pub fn new(config: LarderConfig) -> Result<Self> {
        Ok(Self {
            ocr: OcrClient::new(&config.remote)?,
            llm: LlmClient::new(&config.remote)?,
            mode: config.remote.delegation,
            parser: InvoiceTextParser::with_config(config),
        })
    }

    /// Run the full pipeline over an invoice image.
    pub async fn parse_image(
        &self,
        image: &[u8],
        inventory: &InventoryIndex,
    ) -> Result<Vec<ParsedItem>> {
        let text = self.ocr.recognize(image).await?;
        self.parse_ocr_text(&text, inventory).await
    }

    /// Run the parsing stages over already-extracted OCR text.
    pub async fn parse_ocr_text(
        &self,
        raw_text: &str,
        inventory: &InventoryIndex,
    ) -> Result<Vec<ParsedItem>> {
        let items = match self.mode {
            DelegationMode::LocalOnly => {
                debug!("parsing with local rules");
                self.parser.parse_text(raw_text, inventory)
            }
            DelegationMode::FullText => {
                let items = self.llm.parse_text(raw_text).await?;
                self.finalize_llm_items(items, None, inventory)
            }
            DelegationMode::PerBlock => self.parse_per_block(raw_text, inventory).await,
        };

        info!(count = items.len(), mode = ?self.mode, "invoice text parsed");
        Ok(items)
    }

    /// Split the text into blocks and parse each through the service.
    ///
    /// A failed block is logged and skipped; the remaining blocks still
    /// produce items.
    async fn parse_per_block(&self, raw_text: &str, inventory: &InventoryIndex) -> Vec<ParsedItem> {
        let lines: Vec<&str> = raw_text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let blocks = split_into_blocks(&lines);
        debug!(blocks = blocks.len(), "delegating blocks to parse service");

        let mut parsed = Vec::new();
        for block in &blocks {
            match self.llm.parse_block(block).await {
                Ok(items) => {
                    parsed.extend(self.finalize_llm_items(items, Some(block.clone()), inventory));
                }
                Err(err) => {
                    warn!(error = %err, block = %block, "parse service failed for block, skipping");
                }
            }
        }
        parsed
    }

    fn finalize_llm_items(
        &self,
        items: Vec<LlmItem>,
        fallback_source: Option<String>,
        inventory: &InventoryIndex,
    ) -> Vec<ParsedItem> {
        items
            .into_iter()
            .filter_map(LlmItem::into_candidate)
            .map(|(candidate, note, source_text)| {
                let source = source_text.or_else(|| fallback_source.clone());
                self.parser.correct_and_tag(candidate, note, source, inventory)
            })
            .collect()
    }
}
