use std::sync::Arc;
use std::time::Duration;

use crate::classifier::{
    HuggingFaceClassifier, LexicalClassifier, RelevanceClassifier, ZeroShotClassifier,
};
use crate::config::{ClassifierBackend, Config};
use crate::error::{Error, Result};

/// The classification capabilities, built once per process and shared by
/// every analysis.
#[derive(Clone)]
pub struct Classifiers {
    pub zero_shot: Arc<dyn ZeroShotClassifier>,
    pub relevance: Arc<dyn RelevanceClassifier>,
}

impl Classifiers {
    pub fn new(
        zero_shot: Arc<dyn ZeroShotClassifier>,
        relevance: Arc<dyn RelevanceClassifier>,
    ) -> Self {
        Self {
            zero_shot,
            relevance,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        match config.classifier_backend {
            ClassifierBackend::HuggingFace => {
                let token = config.hf_api_token.clone().ok_or_else(|| {
                    Error::Config("HF_API_TOKEN environment variable not set".to_string())
                })?;

                let classifier = Arc::new(
                    HuggingFaceClassifier::new(
                        token,
                        Duration::from_secs(config.classifier_timeout_secs),
                    )?
                    .with_base_url(&config.hf_api_url)
                    .with_models(&config.zero_shot_model, &config.relevance_model),
                );

                tracing::info!(
                    "Using Hugging Face classifiers ({}, {})",
                    config.zero_shot_model,
                    config.relevance_model
                );
                Ok(Self::new(classifier.clone(), classifier))
            }
            ClassifierBackend::Lexical => {
                tracing::info!("Using offline lexical classifiers");
                Ok(Self::lexical())
            }
        }
    }

    pub fn lexical() -> Self {
        let classifier = Arc::new(LexicalClassifier::new());
        Self::new(classifier.clone(), classifier)
    }
}

impl std::fmt::Debug for Classifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifiers")
            .field("zero_shot", &self.zero_shot.name())
            .field("relevance", &self.relevance.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_huggingface_requires_token() {
        let config = Config::default();
        let err = Classifiers::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_huggingface_with_token() {
        let config = Config {
            hf_api_token: Some("hf_test".to_string()),
            ..Config::default()
        };
        let classifiers = Classifiers::from_config(&config).unwrap();
        assert_eq!(classifiers.zero_shot.name(), "HuggingFace");
        assert_eq!(classifiers.relevance.name(), "HuggingFace");
    }

    #[test]
    fn test_lexical_backend() {
        let config = Config {
            classifier_backend: ClassifierBackend::Lexical,
            ..Config::default()
        };
        let classifiers = Classifiers::from_config(&config).unwrap();
        assert_eq!(classifiers.zero_shot.name(), "Lexical");
    }
}
