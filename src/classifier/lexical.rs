use std::collections::HashSet;

use async_trait::async_trait;

use crate::classifier::provider::{
    RelevanceClassifier, RelevanceScore, ZeroShotClassifier, ZeroShotOutput,
};
use crate::error::Result;

/// Terms that signal hands-on professional work in an experience section.
const EXPERIENCE_SIGNALS: &[&str] = &[
    "architected", "built", "delivered", "designed", "developed", "engineer",
    "implemented", "improved", "launched", "led", "maintained", "managed",
    "mentored", "migrated", "optimized", "owned", "reduced", "responsible",
    "scaled", "shipped",
];

/// Distinct signal terms needed for a full relevance score.
const SIGNAL_SATURATION: usize = 8;

/// Offline keyword-overlap classifier.
///
/// A skill scores 1.0 when its tokens occur consecutively in the text,
/// otherwise the share of its tokens present. Relevance is the share of distinct
/// experience signal terms found, saturating at `SIGNAL_SATURATION`.
#[derive(Debug, Default, Clone)]
pub struct LexicalClassifier;

impl LexicalClassifier {
    pub fn new() -> Self {
        Self
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '+' || c == '#'))
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }

    fn label_score(text_tokens: &[String], token_set: &HashSet<String>, label: &str) -> f64 {
        let label_tokens = Self::tokenize(label);
        if label_tokens.is_empty() {
            return 0.0;
        }
        if text_tokens
            .windows(label_tokens.len())
            .any(|window| window == label_tokens.as_slice())
        {
            return 1.0;
        }

        let found = label_tokens.iter().filter(|t| token_set.contains(*t)).count();
        found as f64 / label_tokens.len() as f64
    }
}

#[async_trait]
impl ZeroShotClassifier for LexicalClassifier {
    async fn classify(&self, text: &str, labels: &[String]) -> Result<ZeroShotOutput> {
        let text_tokens = Self::tokenize(text);
        let token_set: HashSet<String> = text_tokens.iter().cloned().collect();

        let scores = labels
            .iter()
            .map(|label| Self::label_score(&text_tokens, &token_set, label))
            .collect();

        Ok(ZeroShotOutput {
            labels: labels.to_vec(),
            scores,
        })
    }

    fn name(&self) -> &str {
        "Lexical"
    }
}

#[async_trait]
impl RelevanceClassifier for LexicalClassifier {
    async fn score(&self, text: &str) -> Result<RelevanceScore> {
        let tokens: HashSet<String> = Self::tokenize(text).into_iter().collect();
        let hits = EXPERIENCE_SIGNALS
            .iter()
            .filter(|term| tokens.contains(**term))
            .count();

        Ok(RelevanceScore {
            score: (hits.min(SIGNAL_SATURATION)) as f64 / SIGNAL_SATURATION as f64,
        })
    }

    fn name(&self) -> &str {
        "Lexical"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_phrase_and_partial_matches() {
        let labels = vec![
            "Machine Learning".to_string(),
            "Rust".to_string(),
            "Google Cloud".to_string(),
            "C++".to_string(),
        ];
        let output = LexicalClassifier
            .classify("Applied machine learning in Rust and C++ on cloud infra", &labels)
            .await
            .unwrap();

        assert_eq!(output.labels, labels);
        assert_eq!(output.scores, vec![1.0, 1.0, 0.5, 1.0]);
    }

    #[tokio::test]
    async fn test_labels_match_on_token_boundaries() {
        let labels = vec!["Rust".to_string(), "Go".to_string(), "Node.js".to_string()];
        let output = LexicalClassifier
            .classify("A trusted, good teammate who ships Node.js APIs", &labels)
            .await
            .unwrap();

        assert_eq!(output.scores, vec![0.0, 0.0, 1.0]);
    }

    #[tokio::test]
    async fn test_relevance_empty_text() {
        let score = RelevanceClassifier::score(&LexicalClassifier, "").await.unwrap();
        assert_eq!(score.score, 0.0);
    }

    #[tokio::test]
    async fn test_relevance_saturates() {
        let text = "Led and managed a team. Designed, developed, built and shipped services; \
                    optimized, scaled and migrated databases. Mentored engineers.";
        let score = RelevanceClassifier::score(&LexicalClassifier, text).await.unwrap();
        assert_eq!(score.score, 1.0);
    }

    #[tokio::test]
    async fn test_relevance_partial() {
        let score = RelevanceClassifier::score(&LexicalClassifier, "I built and shipped a CLI")
            .await
            .unwrap();
        assert_eq!(score.score, 0.25);
    }
}
