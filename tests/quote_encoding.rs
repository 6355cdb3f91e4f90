//! Quote Encoding Tests
//!
//! Request validation and feature encoding:
//! - smoker accepts "yes"/"no" in any casing and nothing else
//! - vectors are always [age, bmi, children, smoker_bit]
//! - encoding is pure
//! - the fallback explainer follows its fixed weights

use insurance_quote::explain::{Explainer, HeuristicExplainer};
use insurance_quote::quote::{
    encode, encode_request, validate, Feature, InsuranceQuoteRequest, QuoteError, Smoker,
};

// =============================================================================
// Smoker Encoding
// =============================================================================

#[test]
fn test_all_casings_of_yes_encode_to_one() {
    for value in ["yes", "Yes", "YES", "yEs"] {
        let vector = encode_request(&InsuranceQuoteRequest::new(40, 27.0, 1, value)).unwrap();
        assert_eq!(vector.get(Feature::Smoker), 1.0, "smoker = {:?}", value);
    }
}

#[test]
fn test_all_casings_of_no_encode_to_zero() {
    for value in ["no", "No", "NO", "nO"] {
        let vector = encode_request(&InsuranceQuoteRequest::new(40, 27.0, 1, value)).unwrap();
        assert_eq!(vector.get(Feature::Smoker), 0.0, "smoker = {:?}", value);
    }
}

#[test]
fn test_unknown_smoker_values_are_errors() {
    for value in ["maybe", "y", "n", "true", "1", "", "yes ", "non"] {
        let result = validate(&InsuranceQuoteRequest::new(40, 27.0, 1, value));
        assert_eq!(
            result.unwrap_err(),
            QuoteError::InvalidSmoker(value.to_string()),
            "smoker = {:?}",
            value
        );
    }
}

// =============================================================================
// Vector Layout
// =============================================================================

#[test]
fn test_encode_non_smoker_example() {
    let vector = encode_request(&InsuranceQuoteRequest::new(30, 25.0, 0, "no")).unwrap();
    assert_eq!(vector.as_array(), &[30.0, 25.0, 0.0, 0.0]);
}

#[test]
fn test_encode_smoker_example() {
    let vector = encode_request(&InsuranceQuoteRequest::new(45, 32.5, 2, "Yes")).unwrap();
    assert_eq!(vector.as_array(), &[45.0, 32.5, 2.0, 1.0]);
}

#[test]
fn test_slots_follow_feature_order() {
    let quote = validate(&InsuranceQuoteRequest::new(61, 19.5, 4, "yes")).unwrap();
    let vector = encode(&quote);

    assert_eq!(vector.get(Feature::Age), 61.0);
    assert_eq!(vector.get(Feature::Bmi), 19.5);
    assert_eq!(vector.get(Feature::Children), 4.0);
    assert_eq!(vector.get(Feature::Smoker), 1.0);
}

#[test]
fn test_no_bounds_on_age_or_children() {
    let vector = encode_request(&InsuranceQuoteRequest::new(-1, 25.0, -2, "no")).unwrap();
    assert_eq!(vector.as_array(), &[-1.0, 25.0, -2.0, 0.0]);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_encode_is_deterministic() {
    let request = InsuranceQuoteRequest::new(33, 22.7, 1, "No");
    let first = encode_request(&request).unwrap();

    for _ in 0..100 {
        assert_eq!(encode_request(&request).unwrap(), first);
    }
}

#[test]
fn test_validate_does_not_mutate_request() {
    let request = InsuranceQuoteRequest::new(33, 22.7, 1, "YES");
    let before = request.clone();
    let quote = validate(&request).unwrap();

    assert_eq!(request, before);
    assert_eq!(quote.smoker, Smoker::Yes);
}

// =============================================================================
// Fallback Explainer
// =============================================================================

#[test]
fn test_fallback_explainer_example() {
    let quote = validate(&InsuranceQuoteRequest::new(30, 30.0, 1, "no")).unwrap();
    let contributions = HeuristicExplainer.explain(&quote).unwrap();

    let json = serde_json::to_value(contributions).unwrap();
    assert_eq!(json["age"].as_f64(), Some(7500.0));
    assert_eq!(json["bmi"].as_f64(), Some(2000.0));
    assert_eq!(json["children"].as_f64(), Some(500.0));
    assert_eq!(json["smoker"].as_f64(), Some(0.0));
}

#[test]
fn test_fallback_explainer_ignores_any_model() {
    // Same input, same output, no model involved
    let quote = validate(&InsuranceQuoteRequest::new(50, 35.0, 3, "yes")).unwrap();
    let a = HeuristicExplainer.explain(&quote).unwrap();
    let b = HeuristicExplainer::contributions(&quote).unwrap();

    assert_eq!(a, b);
    let total: f64 = a.iter().map(|(_, value)| value).sum();
    assert_eq!(total, 12500.0 + 4000.0 + 1500.0 + 20000.0);
}
