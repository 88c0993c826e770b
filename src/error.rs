use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to extract text from document: {0}")]
    Extraction(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    #[error("Classification model is loading, retry after {0} seconds")]
    ModelLoading(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::ModelLoading(_) | Error::ClassifierUnavailable(_))
    }

    /// Any failure originating in a classification capability.
    pub fn is_classification(&self) -> bool {
        matches!(
            self,
            Error::Classification(_) | Error::ClassifierUnavailable(_) | Error::ModelLoading(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(Error::ModelLoading(20).is_retryable());
        assert!(Error::ClassifierUnavailable("timeout".to_string()).is_retryable());
        assert!(!Error::Classification("label count mismatch".to_string()).is_retryable());
        assert!(!Error::Config("bad".to_string()).is_retryable());
    }

    #[test]
    fn test_classification_kind() {
        assert!(Error::ModelLoading(5).is_classification());
        assert!(Error::Classification("x".to_string()).is_classification());
        assert!(!Error::Extraction("corrupt".to_string()).is_classification());
    }
}
