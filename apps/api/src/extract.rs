//! Text extraction adapter: turns an uploaded file into document text.
//!
//! PDFs go through `pdf-extract` on the blocking pool; anything else must already
//! be UTF-8 text. The analysis core only ever sees the resulting string.

use anyhow::anyhow;
use tracing::debug;

use crate::errors::AppError;
use crate::profile::document::decode_document;

const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
}

impl DocumentFormat {
    /// PDF when the content type, the file name or the leading bytes say so.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>, bytes: &[u8]) -> Self {
        let by_type = content_type
            .map(|ct| ct.trim().eq_ignore_ascii_case("application/pdf"))
            .unwrap_or(false);
        let by_name = file_name
            .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
            .unwrap_or(false);

        if by_type || by_name || bytes.starts_with(PDF_MAGIC) {
            DocumentFormat::Pdf
        } else {
            DocumentFormat::PlainText
        }
    }
}

pub async fn extract_text(bytes: Vec<u8>, format: DocumentFormat) -> Result<String, AppError> {
    debug!(?format, size = bytes.len(), "Extracting document text");

    match format {
        DocumentFormat::PlainText => Ok(decode_document(&bytes)?),
        DocumentFormat::Pdf => {
            // pdf-extract is CPU-bound and synchronous.
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await
                .map_err(|e| AppError::Internal(anyhow!("PDF extraction task failed: {e}")))?
                .map_err(|e| AppError::Extraction(e.to_string()))
        }
    }
}
