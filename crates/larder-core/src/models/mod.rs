//! Data models for invoice parsing and inventory matching.

pub mod config;
pub mod inventory;
pub mod item;

pub use config::{DelegationMode, LarderConfig, MatchingConfig, NormalizerConfig, RemoteConfig};
pub use inventory::{InventoryEntry, InventoryIndex};
pub use item::{CandidateItem, ItemStatus, LlmItem, ParsedItem};
