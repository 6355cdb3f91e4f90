//! Linear regression cost model
//!
//! The training pipeline exports the fitted regression as JSON:
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "features": ["age", "bmi", "children", "smoker"],
//!   "intercept": -11676.83,
//!   "coefficients": [257.85, 321.85, 473.50, 23811.40],
//!   "baseline": [39.2, 30.66, 1.09, 0.2]
//! }
//! ```
//!
//! `features` must match the encoder order exactly. `baseline` (the
//! training-set feature means) is optional and defaults to zeros.

use serde::{Deserialize, Serialize};

use super::errors::{ModelError, ModelResult};
use super::predictor::{ModelInfo, Predictor};
use crate::quote::{Feature, FeatureVector, FEATURE_COUNT};

/// On-disk model layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub version: String,
    pub features: Vec<String>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub baseline: Option<Vec<f64>>,
}

/// Fitted linear model: `intercept + sum(coefficient_i * x_i)`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    version: String,
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
    baseline: [f64; FEATURE_COUNT],
    fingerprint: Option<String>,
}

impl LinearModel {
    /// Create a model directly from parameters
    pub fn new(
        version: impl Into<String>,
        intercept: f64,
        coefficients: [f64; FEATURE_COUNT],
    ) -> ModelResult<Self> {
        let model = Self {
            version: version.into(),
            intercept,
            coefficients,
            baseline: [0.0; FEATURE_COUNT],
            fingerprint: None,
        };
        model.check_finite()?;
        Ok(model)
    }

    /// Build a model from its exported file, checking the feature schema
    pub fn from_file(file: ModelFile) -> ModelResult<Self> {
        let expected: Vec<String> = Feature::ALL.iter().map(|f| f.as_str().to_string()).collect();
        if file.features != expected {
            return Err(ModelError::FeatureMismatch {
                expected,
                found: file.features,
            });
        }

        let coefficients = to_array("coefficients", &file.coefficients)?;
        let baseline = match file.baseline {
            Some(values) => to_array("baseline", &values)?,
            None => [0.0; FEATURE_COUNT],
        };

        let model = Self {
            version: file.version,
            intercept: file.intercept,
            coefficients,
            baseline,
            fingerprint: None,
        };
        model.check_finite()?;
        Ok(model)
    }

    pub fn with_fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    fn check_finite(&self) -> ModelResult<()> {
        if !self.intercept.is_finite() {
            return Err(ModelError::NonFinite("intercept".into()));
        }
        for feature in Feature::ALL {
            if !self.coefficients[feature.index()].is_finite() {
                return Err(ModelError::NonFinite(format!("coefficient for {}", feature)));
            }
            if !self.baseline[feature.index()].is_finite() {
                return Err(ModelError::NonFinite(format!("baseline for {}", feature)));
            }
        }
        Ok(())
    }
}

fn to_array(field: &str, values: &[f64]) -> ModelResult<[f64; FEATURE_COUNT]> {
    <[f64; FEATURE_COUNT]>::try_from(values).map_err(|_| {
        ModelError::Shape(format!(
            "{} has {} values, expected {}",
            field,
            values.len(),
            FEATURE_COUNT
        ))
    })
}

impl Predictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> ModelResult<f64> {
        let value = features
            .as_array()
            .iter()
            .zip(self.coefficients.iter())
            .fold(self.intercept, |acc, (x, w)| acc + x * w);

        if !value.is_finite() {
            return Err(ModelError::NonFinite("prediction".into()));
        }
        Ok(value)
    }

    fn attribute(&self, features: &FeatureVector) -> Option<[f64; FEATURE_COUNT]> {
        let mut out = [0.0; FEATURE_COUNT];
        for feature in Feature::ALL {
            let i = feature.index();
            out[i] = self.coefficients[i] * (features.get(feature) - self.baseline[i]);
        }
        Some(out)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            kind: "linear".to_string(),
            version: self.version.clone(),
            features: Feature::ALL.iter().map(|f| f.as_str().to_string()).collect(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}
