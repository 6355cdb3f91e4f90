//! Feature encoding
//!
//! Maps a validated quote onto the `[age, bmi, children, smoker_bit]`
//! vector. Pure: no state, same input gives the same vector.

use super::errors::QuoteResult;
use super::types::{FeatureVector, InsuranceQuoteRequest, ValidatedQuote};
use super::validator::validate;

/// Encodes a validated quote
pub fn encode(quote: &ValidatedQuote) -> FeatureVector {
    FeatureVector::new([
        quote.age as f64,
        quote.bmi,
        quote.children as f64,
        f64::from(quote.smoker.bit()),
    ])
}

/// Validates and encodes a raw request
pub fn encode_request(request: &InsuranceQuoteRequest) -> QuoteResult<FeatureVector> {
    let quote = validate(request)?;
    Ok(encode(&quote))
}
