//! Core library for kitchen-inventory invoice OCR processing.
//!
//! This crate provides:
//! - OCR line cleanup and item-line classification
//! - Line-item extraction (name, quantity, unit, price) from noisy text
//! - Block grouping and vertical-table layout reconstruction
//! - Fuzzy name correction against an inventory snapshot
//! - Clients for the remote OCR and parse services

pub mod error;
pub mod models;
pub mod parse;
pub mod remote;

pub use error::{LarderError, RemoteError, Result};
pub use models::{
    CandidateItem, DelegationMode, InventoryEntry, InventoryIndex, ItemStatus, LarderConfig,
    LlmItem, ParsedItem,
};
pub use parse::rules::{
    clean_line, correct_name, group_likely_item_blocks, is_likely_item_line, normalize_line,
    process_lines, split_into_blocks,
};
pub use parse::{parse_invoice_text, tag_status, InvoiceTextParser};
pub use remote::{LlmClient, OcrClient, RemoteParseOrchestrator};
