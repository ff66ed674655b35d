pub mod plain_text_extractor;

pub use plain_text_extractor::PlainTextExtractor;

use std::path::Path;

use async_trait::async_trait;

use crate::errors::AppResult;

/// Turns a source file into UTF-8 text. Implementations fail with `ExtractionError` when a file
/// holds no extractable text (e.g. scanned pages).
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> AppResult<String>;
}
