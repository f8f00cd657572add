//! Invoice text parsing pipeline.

mod pipeline;
pub mod rules;

pub use pipeline::{parse_invoice_text, tag_status, InvoiceTextParser};
