pub mod config;
pub mod error;
pub mod models;
pub mod extraction;
pub mod classifier;
pub mod analysis;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use extraction::extract_text;
pub use classifier::{Classifiers, HuggingFaceClassifier, LexicalClassifier};
pub use analysis::AnalysisPipeline;
