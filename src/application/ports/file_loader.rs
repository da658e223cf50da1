use async_trait::async_trait;

use crate::domain::{Document, DocumentText};

/// Turns uploaded bytes into plain text.
///
/// An unreadable document is not an error: implementations return empty text
/// for it, the same as for a document with nothing to extract. Errors are kept
/// for failures that say nothing about the document itself.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<DocumentText, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
