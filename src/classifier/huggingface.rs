use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::classifier::parser::{
    parse_error_response, parse_relevance_response, parse_zero_shot_response,
};
use crate::classifier::provider::{
    RelevanceClassifier, RelevanceScore, ZeroShotClassifier, ZeroShotOutput,
};
use crate::config::{DEFAULT_HF_API_URL, DEFAULT_RELEVANCE_MODEL, DEFAULT_ZERO_SHOT_MODEL};
use crate::error::{Error, Result};

/// Hugging Face Inference API client serving both classification capabilities.
pub struct HuggingFaceClassifier {
    client: Client,
    api_token: String,
    base_url: String,
    zero_shot_model: String,
    relevance_model: String,
}

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [String],
    multi_label: bool,
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

impl HuggingFaceClassifier {
    pub fn new(api_token: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_token,
            base_url: DEFAULT_HF_API_URL.to_string(),
            zero_shot_model: DEFAULT_ZERO_SHOT_MODEL.to_string(),
            relevance_model: DEFAULT_RELEVANCE_MODEL.to_string(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_models(
        mut self,
        zero_shot_model: impl Into<String>,
        relevance_model: impl Into<String>,
    ) -> Self {
        self.zero_shot_model = zero_shot_model.into();
        self.relevance_model = relevance_model.into();
        self
    }

    fn model_url(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }

    async fn post<T: Serialize + ?Sized>(&self, model: &str, body: &T) -> Result<String> {
        let response = self
            .client
            .post(self.model_url(model))
            .bearer_auth(&self.api_token)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::ClassifierUnavailable(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::ClassifierUnavailable(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(parse_error_response(status.as_u16(), &text));
        }

        Ok(text)
    }
}

#[async_trait]
impl ZeroShotClassifier for HuggingFaceClassifier {
    async fn classify(&self, text: &str, labels: &[String]) -> Result<ZeroShotOutput> {
        tracing::debug!(
            "Zero-shot classifying {} chars against {} labels with {}",
            text.len(),
            labels.len(),
            self.zero_shot_model
        );

        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: labels,
                multi_label: true,
            },
        };

        let body = self.post(&self.zero_shot_model, &request).await?;
        parse_zero_shot_response(&body, labels)
    }

    fn name(&self) -> &str {
        "HuggingFace"
    }
}

#[async_trait]
impl RelevanceClassifier for HuggingFaceClassifier {
    async fn score(&self, text: &str) -> Result<RelevanceScore> {
        if text.trim().is_empty() {
            return Ok(RelevanceScore { score: 0.0 });
        }

        tracing::debug!(
            "Scoring relevance of {} chars with {}",
            text.len(),
            self.relevance_model
        );

        let request = ClassificationRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: false,
            },
        };

        let body = self.post(&self.relevance_model, &request).await?;
        parse_relevance_response(&body)
    }

    fn name(&self) -> &str {
        "HuggingFace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_url() {
        let classifier = HuggingFaceClassifier::new("token".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url("http://localhost:8080/models/");
        assert_eq!(
            classifier.model_url("facebook/bart-large-mnli"),
            "http://localhost:8080/models/facebook/bart-large-mnli"
        );
    }

    #[test]
    fn test_zero_shot_request_body() {
        let labels = vec!["Rust".to_string(), "Go".to_string()];
        let request = ZeroShotRequest {
            inputs: "text",
            parameters: ZeroShotParameters {
                candidate_labels: &labels,
                multi_label: true,
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["parameters"]["multi_label"], true);
        assert_eq!(value["parameters"]["candidate_labels"][1], "Go");
    }

    #[tokio::test]
    async fn test_empty_text_scores_zero_without_request() {
        // Unroutable base URL: any request would fail.
        let classifier = HuggingFaceClassifier::new("token".to_string(), Duration::from_millis(50))
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let score = RelevanceClassifier::score(&classifier, "  \n ").await.unwrap();
        assert_eq!(score.score, 0.0);
    }
}
