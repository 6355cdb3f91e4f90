//! Predictor boundary
//!
//! The service treats the model as a black box over a `FeatureVector`.
//! Callers guarantee the vector came from the encoder, so shape and order
//! are fixed by the type.

use serde::Serialize;

use super::errors::ModelResult;
use crate::quote::{FeatureVector, FEATURE_COUNT};

/// A loaded cost model
pub trait Predictor: Send + Sync {
    /// Returns the predicted annual insurance cost
    fn predict(&self, features: &FeatureVector) -> ModelResult<f64>;

    /// Exact per-feature attribution, for models that can provide one.
    ///
    /// Values are in vector order.
    fn attribute(&self, _features: &FeatureVector) -> Option<[f64; FEATURE_COUNT]> {
        None
    }

    /// Describes the model for the `/model` endpoint
    fn info(&self) -> ModelInfo;
}

/// Model metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInfo {
    pub kind: String,
    pub version: String,
    pub features: Vec<String>,
    /// SHA-256 of the model file, when loaded from disk
    pub fingerprint: Option<String>,
}
