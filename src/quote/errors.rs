//! # Quote Errors
//!
//! Error types surfaced by the quote pipeline. Every variant maps to the
//! uniform `{"error": ...}` response body at the HTTP boundary.

use thiserror::Error;

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Errors raised while validating, encoding, or scoring a quote request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    // ==================
    // Input Errors
    // ==================

    /// Smoker field did not normalize to "yes" or "no"
    #[error("Invalid input: '{0}' is not a valid smoker value (expected 'yes' or 'no')")]
    InvalidSmoker(String),

    /// A body measurement was zero, negative, or not finite
    #[error("Invalid input: {0}")]
    InvalidMeasurement(String),

    /// Request body could not be decoded into the expected schema
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    // ==================
    // Predictor Errors
    // ==================

    /// No model has been installed yet
    #[error("Model not loaded")]
    ModelNotReady,

    /// The predictor failed during inference
    #[error("Prediction failed: {0}")]
    PredictionFailed(String),
}

impl QuoteError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            QuoteError::InvalidSmoker(_) => 400,
            QuoteError::InvalidMeasurement(_) => 400,
            QuoteError::MalformedRequest(_) => 400,
            QuoteError::ModelNotReady => 503,
            QuoteError::PredictionFailed(_) => 500,
        }
    }

    /// Returns true if the caller sent bad input
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
