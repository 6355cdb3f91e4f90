//! Quote request and feature types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::QuoteError;

/// Number of slots in the model input vector
pub const FEATURE_COUNT: usize = 4;

/// Smoking status, the only categorical input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    /// Numeric encoding used by the trained model (1 = yes, 0 = no)
    pub fn bit(self) -> u8 {
        match self {
            Smoker::Yes => 1,
            Smoker::No => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Smoker::Yes => "yes",
            Smoker::No => "no",
        }
    }
}

impl FromStr for Smoker {
    type Err = QuoteError;

    /// Case-insensitive; surrounding whitespace is not stripped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Smoker::Yes),
            "no" => Ok(Smoker::No),
            _ => Err(QuoteError::InvalidSmoker(s.to_string())),
        }
    }
}

impl fmt::Display for Smoker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Model input features in the order the predictor consumes them
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    Age,
    Bmi,
    Children,
    Smoker,
}

impl Feature {
    /// All features, in vector order
    pub const ALL: [Feature; FEATURE_COUNT] =
        [Feature::Age, Feature::Bmi, Feature::Children, Feature::Smoker];

    /// Wire name used in model files and response bodies
    pub fn as_str(self) -> &'static str {
        match self {
            Feature::Age => "age",
            Feature::Bmi => "bmi",
            Feature::Children => "children",
            Feature::Smoker => "smoker",
        }
    }

    /// Slot of this feature in a `FeatureVector`
    pub fn index(self) -> usize {
        match self {
            Feature::Age => 0,
            Feature::Bmi => 1,
            Feature::Children => 2,
            Feature::Smoker => 3,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw quote request as received from a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsuranceQuoteRequest {
    /// Age in whole years
    pub age: i64,
    /// Body-mass index
    pub bmi: f64,
    /// Number of dependent children
    pub children: i64,
    /// "yes" or "no", any casing
    pub smoker: String,
}

impl InsuranceQuoteRequest {
    pub fn new(age: i64, bmi: f64, children: i64, smoker: impl Into<String>) -> Self {
        Self {
            age,
            bmi,
            children,
            smoker: smoker.into(),
        }
    }
}

/// A request whose categorical field has been parsed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedQuote {
    pub age: i64,
    pub bmi: f64,
    pub children: i64,
    pub smoker: Smoker,
}

/// Fixed-order numeric input `[age, bmi, children, smoker_bit]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }
}

/// Height and weight used to derive a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BmiRequest {
    pub height_cm: f64,
    pub weight_kg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoker_parse_case_insensitive() {
        assert_eq!("yes".parse::<Smoker>().unwrap(), Smoker::Yes);
        assert_eq!("YES".parse::<Smoker>().unwrap(), Smoker::Yes);
        assert_eq!("No".parse::<Smoker>().unwrap(), Smoker::No);
    }

    #[test]
    fn test_smoker_rejects_unknown() {
        let err = "maybe".parse::<Smoker>().unwrap_err();
        assert_eq!(err, QuoteError::InvalidSmoker("maybe".to_string()));
    }

    #[test]
    fn test_smoker_whitespace_not_stripped() {
        assert!(" yes".parse::<Smoker>().is_err());
    }

    #[test]
    fn test_feature_order() {
        let names: Vec<_> = Feature::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, vec!["age", "bmi", "children", "smoker"]);
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_request_deserializes() {
        let req: InsuranceQuoteRequest =
            serde_json::from_str(r#"{"age":30,"bmi":25.0,"children":0,"smoker":"no"}"#).unwrap();
        assert_eq!(req, InsuranceQuoteRequest::new(30, 25.0, 0, "no"));
    }

    #[test]
    fn test_request_rejects_float_age() {
        let result: Result<InsuranceQuoteRequest, _> =
            serde_json::from_str(r#"{"age":30.5,"bmi":25.0,"children":0,"smoker":"no"}"#);
        assert!(result.is_err());
    }
}
