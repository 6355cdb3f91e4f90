//! # Model Errors
//!
//! Error types for loading and running the cost model.

use thiserror::Error;

use crate::quote::QuoteError;

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised while loading, installing, or evaluating a model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Model file could not be read
    #[error("Failed to read model file '{path}': {message}")]
    Io { path: String, message: String },

    /// Model file is not valid JSON for the expected layout
    #[error("Malformed model file: {0}")]
    Parse(String),

    /// Model was trained on a different feature schema
    #[error("Feature mismatch: expected {expected:?}, model declares {found:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// Parameter arrays have the wrong length
    #[error("Invalid model shape: {0}")]
    Shape(String),

    /// A parameter or an output was NaN or infinite
    #[error("Non-finite value: {0}")]
    NonFinite(String),

    /// A model is already installed in the handle
    #[error("Model already installed")]
    AlreadyInstalled,
}

impl From<ModelError> for QuoteError {
    fn from(err: ModelError) -> Self {
        QuoteError::PredictionFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_quote_error() {
        let err: QuoteError = ModelError::NonFinite("prediction".into()).into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("prediction"));
    }
}
