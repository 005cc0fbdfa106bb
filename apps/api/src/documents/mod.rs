//! Document text extraction for uploaded resumes.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default
//! `FileTextExtractor` reads PDF and DOCX files from disk.

pub mod docx;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the document kind from a file name's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentKind::Pdf => ".pdf",
            DocumentKind::Docx => ".docx",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("Extraction timed out after {0:?}")]
    Timeout(Duration),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

/// Produces plain text from a document on disk.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractionError>;
}

/// Default extractor: `pdf-extract` for PDF, the zip container for DOCX.
/// Parsing runs on the blocking pool, bounded by `timeout`.
pub struct FileTextExtractor {
    timeout: Duration,
}

impl FileTextExtractor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl TextExtractor for FileTextExtractor {
    async fn extract(&self, path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
        let path: PathBuf = path.to_path_buf();
        let task = tokio::task::spawn_blocking(move || extract_blocking(&path, kind));

        let text = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| ExtractionError::Timeout(self.timeout))?
            .map_err(|e| ExtractionError::Task(e.to_string()))??;

        debug!("Extracted {} chars from {:?} document", text.len(), kind);
        Ok(text)
    }
}

fn extract_blocking(path: &Path, kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text(path).map_err(|e| ExtractionError::Pdf(e.to_string()))
        }
        DocumentKind::Docx => docx::extract_text(path),
    }
}

/// Writes an uploaded document to a temporary file carrying its extension,
/// on the blocking pool. The file is removed when the returned handle is
/// dropped.
pub async fn stage_upload(data: Bytes, kind: DocumentKind) -> std::io::Result<NamedTempFile> {
    tokio::task::spawn_blocking(move || save_upload(&data, kind))
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?
}

fn save_upload(data: &[u8], kind: DocumentKind) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(kind.extension())
        .tempfile()?;
    file.write_all(data)?;
    file.flush()?;
    Ok(file)
}
