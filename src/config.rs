use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::JobRequirement;

pub const DEFAULT_HF_API_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_ZERO_SHOT_MODEL: &str = "facebook/bart-large-mnli";
pub const DEFAULT_RELEVANCE_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    HuggingFace,
    Lexical,
}

impl std::str::FromStr for ClassifierBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(ClassifierBackend::HuggingFace),
            "lexical" | "offline" => Ok(ClassifierBackend::Lexical),
            other => Err(Error::Config(format!("Unknown classifier backend: {}", other))),
        }
    }
}

impl std::fmt::Display for ClassifierBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassifierBackend::HuggingFace => write!(f, "huggingface"),
            ClassifierBackend::Lexical => write!(f, "lexical"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub classifier_backend: ClassifierBackend,
    pub hf_api_token: Option<String>,
    pub hf_api_url: String,
    pub zero_shot_model: String,
    pub relevance_model: String,
    pub classifier_timeout_secs: u64,
    pub job_configs_path: String,
    pub concurrency_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let classifier_backend = env::var("CLASSIFIER_BACKEND")
            .ok()
            .map(|v| v.parse::<ClassifierBackend>())
            .transpose()?
            .unwrap_or(ClassifierBackend::HuggingFace);

        let hf_api_token = env::var("HF_API_TOKEN").ok().filter(|v| !v.trim().is_empty());

        let hf_api_url = env::var("HF_API_URL").unwrap_or_else(|_| DEFAULT_HF_API_URL.to_string());

        let zero_shot_model =
            env::var("ZERO_SHOT_MODEL").unwrap_or_else(|_| DEFAULT_ZERO_SHOT_MODEL.to_string());

        let relevance_model =
            env::var("RELEVANCE_MODEL").unwrap_or_else(|_| DEFAULT_RELEVANCE_MODEL.to_string());

        let classifier_timeout_secs = env::var("CLASSIFIER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        let job_configs_path =
            env::var("JOB_CONFIGS_PATH").unwrap_or_else(|_| "job_configs.json".to_string());

        let concurrency_limit = env::var("CONCURRENCY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v: &usize| *v > 0)
            .unwrap_or(4);

        Ok(Self {
            classifier_backend,
            hf_api_token,
            hf_api_url,
            zero_shot_model,
            relevance_model,
            classifier_timeout_secs,
            job_configs_path,
            concurrency_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            classifier_backend: ClassifierBackend::HuggingFace,
            hf_api_token: None,
            hf_api_url: DEFAULT_HF_API_URL.to_string(),
            zero_shot_model: DEFAULT_ZERO_SHOT_MODEL.to_string(),
            relevance_model: DEFAULT_RELEVANCE_MODEL.to_string(),
            classifier_timeout_secs: 60,
            job_configs_path: "job_configs.json".to_string(),
            concurrency_limit: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub concurrency_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { concurrency_limit: 4 }
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            concurrency_limit: config.concurrency_limit.max(1),
        }
    }
}

/// Loads the job catalog: a JSON object mapping job ids to requirement records.
pub fn load_job_configs(path: impl AsRef<Path>) -> Result<BTreeMap<String, JobRequirement>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        tracing::error!("{} not found", path.display());
        Error::Config(format!("Job configurations not found at {}: {}", path.display(), e))
    })?;

    parse_job_configs(&raw)
}

pub fn parse_job_configs(raw: &str) -> Result<BTreeMap<String, JobRequirement>> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Error parsing job configurations");
        Error::Config(format!("Error parsing job configurations: {}", e))
    })
}
