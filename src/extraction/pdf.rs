use lopdf::Document;

use crate::error::{Error, Result};
use crate::extraction::PageExtractor;

pub struct PdfPageExtractor;

impl PageExtractor for PdfPageExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| Error::Extraction(format!("failed to load PDF: {}", e)))?;

        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());

        for page_num in pages.keys() {
            // A page whose content cannot be decoded contributes nothing.
            let text = doc.extract_text(&[*page_num]).unwrap_or_else(|e| {
                tracing::warn!("No text extracted from page {}: {}", page_num, e);
                String::new()
            });
            texts.push(text);
        }

        Ok(texts)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}
