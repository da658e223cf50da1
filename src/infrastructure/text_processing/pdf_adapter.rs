use async_trait::async_trait;
use lopdf::Document as PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, DocumentText};

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Per-page text in page order. Pages that fail to extract come back as `None`.
    fn extract_pages(data: &[u8]) -> Vec<Option<String>> {
        let doc = match PdfDocument::load_mem(data) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse PDF, treating as empty");
                return Vec::new();
            }
        };

        doc.get_pages()
            .into_keys()
            .map(|page_number| match doc.extract_text(&[page_number]) {
                // lopdf closes each text object with a newline; the page's last one is not page text.
                Ok(text) => Some(strip_page_terminator(text)),
                Err(e) => {
                    tracing::debug!(page_number, error = %e, "No text extracted from page");
                    None
                }
            })
            .collect()
    }
}

fn strip_page_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
    }
    text
}

/// Joins page texts with no separator, skipping pages without text, and trims the result.
pub fn concatenate_pages<I>(pages: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let joined: String = pages.into_iter().map(Option::unwrap_or_default).collect();
    joined.trim().to_string()
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<DocumentText, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let pages = tokio::task::spawn_blocking(move || Self::extract_pages(&bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?;

        let page_count = pages.len();
        let text = DocumentText::new(concatenate_pages(pages));

        tracing::info!(
            page_count,
            chars = text.char_count(),
            "PDF text extraction complete"
        );

        Ok(text)
    }
}
