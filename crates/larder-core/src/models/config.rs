//! Configuration structures for the parsing pipeline.
//!
//! The heuristic constants that drive extraction (similarity threshold,
//! minimum line length, default unit, service endpoints) live here as
//! named values with documented defaults instead of inline literals.

use serde::{Deserialize, Serialize};

/// Main configuration for the larder pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LarderConfig {
    /// Fuzzy inventory-name matching configuration.
    pub matching: MatchingConfig,

    /// Line normalization configuration.
    pub normalizer: NormalizerConfig,

    /// Remote OCR / parse service configuration.
    pub remote: RemoteConfig,
}

/// Fuzzy name matching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Minimum Sørensen–Dice bigram similarity (0.0 - 1.0) required to
    /// replace an extracted name with an inventory name.
    pub similarity_threshold: f64,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
        }
    }
}

/// Line normalization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Minimum cleaned-line length; shorter lines are rejected outright.
    pub min_line_len: usize,

    /// Unit assigned when a line carries no unit token.
    pub default_unit: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_line_len: 2,
            default_unit: "unit".to_string(),
        }
    }
}

/// How the orchestrator hands OCR text to the remote parse service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelegationMode {
    /// No remote parsing; use the local rules pipeline only.
    LocalOnly,
    /// One parse-service call over the whole OCR text.
    FullText,
    /// Split into blocks first, one parse-service call per block.
    PerBlock,
}

impl Default for DelegationMode {
    fn default() -> Self {
        Self::LocalOnly
    }
}

/// Remote service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// OCR service endpoint (image in, text out).
    pub ocr_url: String,

    /// Per-block parse endpoint.
    pub parse_block_url: String,

    /// Whole-text parse endpoint.
    pub parse_text_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Parse delegation mode.
    pub delegation: DelegationMode,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            ocr_url: "http://localhost:3001/ocr".to_string(),
            parse_block_url: "http://localhost:3001/ocr/parse".to_string(),
            parse_text_url: "http://localhost:3001/ocr/gpt-parse".to_string(),
            timeout_secs: 30,
            delegation: DelegationMode::default(),
        }
    }
}

impl LarderConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
