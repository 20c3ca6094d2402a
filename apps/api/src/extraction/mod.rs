//! Text extraction — turns an uploaded resume into a single plain-text blob.
//!
//! The document kind is decided once, from the filename, when the upload is
//! wrapped in an `UploadedDocument`. PDFs are linearised page by page;
//! everything else is decoded as strict UTF-8.

use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod pdf;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not open PDF: {0}")]
    DocumentParse(String),

    #[error("resume is not valid UTF-8: {0}")]
    Decoding(#[from] std::string::FromUtf8Error),

    #[error("PDF text extraction did not finish within {secs}s")]
    Timeout { secs: u64 },
}

/// How the uploaded bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// `Pdf` for a `.pdf` suffix (any case); plain text for every other name,
    /// whatever the bytes or declared content type look like.
    pub fn from_filename(filename: Option<&str>) -> Self {
        match filename {
            Some(name) if name.to_ascii_lowercase().ends_with(".pdf") => DocumentKind::Pdf,
            _ => DocumentKind::PlainText,
        }
    }
}

/// A resume upload, owned by the request for the duration of extraction.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: Option<String>,
    pub kind: DocumentKind,
    pub bytes: Bytes,
}

impl UploadedDocument {
    pub fn new(filename: Option<String>, bytes: Bytes) -> Self {
        let kind = DocumentKind::from_filename(filename.as_deref());
        Self {
            filename,
            kind,
            bytes,
        }
    }
}

/// Extracts the resume text.
///
/// PDF parsing is CPU-bound and some malformed files make the parser panic or
/// spin, so it runs on the blocking pool under `deadline`. A panic is reported
/// as a parse error, an overrun as `Timeout`.
pub async fn extract_text(
    document: UploadedDocument,
    deadline: Duration,
) -> Result<String, ExtractError> {
    info!(
        "Extracting resume text: file={:?} kind={:?} bytes={}",
        document.filename,
        document.kind,
        document.bytes.len()
    );

    let text = match document.kind {
        DocumentKind::PlainText => decode_plain_text(&document.bytes)?,
        DocumentKind::Pdf => {
            let bytes = document.bytes;
            run_blocking(move || pdf::extract_pdf_text(&bytes), deadline).await?
        }
    };

    debug!("Extracted {} characters of resume text", text.chars().count());
    Ok(text)
}

/// Runs a parser on the blocking pool. The thread cannot be killed, so on
/// timeout it is left to finish in the background and its result dropped.
async fn run_blocking<F>(parse: F, deadline: Duration) -> Result<String, ExtractError>
where
    F: FnOnce() -> Result<String, ExtractError> + Send + 'static,
{
    let handle = tokio::task::spawn_blocking(parse);

    match tokio::time::timeout(deadline, handle).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) if e.is_panic() => Err(ExtractError::DocumentParse(
            "PDF parser crashed on this file".to_string(),
        )),
        Ok(Err(e)) => Err(ExtractError::DocumentParse(format!(
            "PDF extraction was cancelled: {e}"
        ))),
        Err(_) => {
            warn!("PDF extraction exceeded {}s", deadline.as_secs());
            Err(ExtractError::Timeout {
                secs: deadline.as_secs(),
            })
        }
    }
}

/// Byte-exact UTF-8 decoding. A leading BOM is kept.
pub fn decode_plain_text(bytes: &[u8]) -> Result<String, ExtractError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}
