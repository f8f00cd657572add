//! Remote service boundary: OCR (image → text), LLM parsing
//! (text → structured items) and the orchestrator that sequences them.

mod llm;
mod ocr;
mod orchestrator;

pub use llm::{strip_code_fences, LlmClient};
pub use ocr::OcrClient;
pub use orchestrator::RemoteParseOrchestrator;
