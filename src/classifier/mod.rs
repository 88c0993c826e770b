pub mod provider;
pub mod huggingface;
pub mod lexical;
pub mod parser;
pub mod factory;

pub use provider::{RelevanceClassifier, RelevanceScore, ZeroShotClassifier, ZeroShotOutput};
pub use huggingface::HuggingFaceClassifier;
pub use lexical::LexicalClassifier;
pub use factory::Classifiers;
