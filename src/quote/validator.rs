//! Quote request validation
//!
//! Type checks on `age`, `bmi` and `children` happen during deserialization.
//! This module handles what serde cannot: the categorical `smoker` field and
//! the physical measurements behind the BMI helper.

use super::errors::{QuoteError, QuoteResult};
use super::types::{BmiRequest, InsuranceQuoteRequest, Smoker, ValidatedQuote};

/// Validates a raw request into a `ValidatedQuote`.
///
/// `age` and `children` carry no explicit bounds.
pub fn validate(request: &InsuranceQuoteRequest) -> QuoteResult<ValidatedQuote> {
    let smoker: Smoker = request.smoker.parse()?;

    Ok(ValidatedQuote {
        age: request.age,
        bmi: request.bmi,
        children: request.children,
        smoker,
    })
}

/// Computes BMI from height in centimetres and weight in kilograms,
/// rounded to two decimals.
pub fn compute_bmi(request: &BmiRequest) -> QuoteResult<f64> {
    check_measurement("height_cm", request.height_cm)?;
    check_measurement("weight_kg", request.weight_kg)?;

    let height_m = request.height_cm / 100.0;
    let bmi = request.weight_kg / (height_m * height_m);

    Ok((bmi * 100.0).round() / 100.0)
}

fn check_measurement(field: &str, value: f64) -> QuoteResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(QuoteError::InvalidMeasurement(format!(
            "{} must be a positive number (got {})",
            field, value
        )));
    }
    Ok(())
}
