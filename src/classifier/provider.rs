use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Per-label confidences, each independent in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZeroShotOutput {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelevanceScore {
    pub score: f64,
}

/// Multi-label zero-shot classification: scores `text` against every label
/// independently.
#[async_trait]
pub trait ZeroShotClassifier: Send + Sync {
    async fn classify(&self, text: &str, labels: &[String]) -> Result<ZeroShotOutput>;
    fn name(&self) -> &str;
}

/// Relevance of a passage, as the top label's confidence in [0, 1].
///
/// Empty or whitespace-only text is valid input and must score 0.0.
#[async_trait]
pub trait RelevanceClassifier: Send + Sync {
    async fn score(&self, text: &str) -> Result<RelevanceScore>;
    fn name(&self) -> &str;
}
