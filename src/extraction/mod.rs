pub mod pdf;
pub mod plain;

use crate::error::{Error, Result};
use crate::models::{DocumentFormat, RawDocument};

pub use pdf::PdfPageExtractor;
pub use plain::PlainTextExtractor;

/// Trait for document text extraction backends.
pub trait PageExtractor: Send + Sync {
    /// Extract text from document bytes, one entry per page in document order.
    /// A page that yields no text is an empty string.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Extracts the plain text of a document, choosing the backend from its
/// declared extension.
pub fn extract_text(document: &RawDocument) -> Result<String> {
    let format = document.format().ok_or_else(|| {
        Error::Extraction(format!(
            "unsupported file extension '{}' for {}",
            document.extension, document.name
        ))
    })?;

    tracing::debug!("Extracting {} document {}", format, document.name);

    match format {
        DocumentFormat::Pdf => extract_with(&PdfPageExtractor, &document.bytes),
        DocumentFormat::PlainText => extract_with(&PlainTextExtractor, &document.bytes),
    }
}

/// Runs `extractor` and concatenates its pages without separators.
pub fn extract_with(extractor: &dyn PageExtractor, bytes: &[u8]) -> Result<String> {
    let pages = extractor.extract_pages(bytes)?;
    if pages.is_empty() {
        return Err(Error::Extraction("document has no pages".to_string()));
    }

    tracing::debug!(
        "Extracted {} page(s) with {} backend",
        pages.len(),
        extractor.backend_name()
    );

    Ok(pages.concat())
}
