use crate::error::{Error, Result};
use crate::extraction::PageExtractor;

/// UTF-8 text files are a single page; an empty file has none.
pub struct PlainTextExtractor;

impl PageExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let text = std::str::from_utf8(bytes)
            .map_err(|e| Error::Extraction(format!("text document is not valid UTF-8: {}", e)))?;

        Ok(vec![text.to_string()])
    }

    fn backend_name(&self) -> &str {
        "plain-text"
    }
}
