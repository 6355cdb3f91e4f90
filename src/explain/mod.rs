//! Feature contribution estimates
//!
//! Two explainers are available:
//!
//! - `HeuristicExplainer`: fixed closed-form weights, independent of the
//!   loaded model. An approximation for display purposes only.
//! - `ModelExplainer`: asks the predictor for its own additive attribution.
//!
//! Both return `Contributions`, serialized as a JSON object keyed by
//! feature name in vector order.

mod heuristic;
mod model;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::quote::{Feature, QuoteError, QuoteResult, ValidatedQuote, FEATURE_COUNT};

pub use heuristic::HeuristicExplainer;
pub use model::ModelExplainer;

/// Produces per-feature contributions for a validated quote
pub trait Explainer {
    fn explain(&self, quote: &ValidatedQuote) -> QuoteResult<Contributions>;
}

/// Which explainer the `/explain` endpoint uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplainerKind {
    #[default]
    Heuristic,
    Model,
}

impl ExplainerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExplainerKind::Heuristic => "heuristic",
            ExplainerKind::Model => "model",
        }
    }
}

/// Contribution of each feature to a prediction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contributions([f64; FEATURE_COUNT]);

impl Contributions {
    /// Every value must be finite; JSON has no encoding for NaN or infinity.
    pub fn new(values: [f64; FEATURE_COUNT]) -> QuoteResult<Self> {
        for feature in Feature::ALL {
            if !values[feature.index()].is_finite() {
                return Err(QuoteError::PredictionFailed(format!(
                    "contribution for {} is not finite",
                    feature
                )));
            }
        }
        Ok(Self(values))
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |f| (*f, self.0[f.index()]))
    }
}

impl Serialize for Contributions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (feature, value) in self.iter() {
            map.serialize_entry(feature.as_str(), &value)?;
        }
        map.end()
    }
}
