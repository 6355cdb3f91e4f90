//! Quote request pipeline
//!
//! Turns a client request into the numeric vector the cost model consumes:
//!
//! 1. Deserialize (`age`, `children` as integers, `bmi` as a float)
//! 2. Parse `smoker` into the closed `Smoker` enum
//! 3. Encode as `[age, bmi, children, smoker_bit]`
//!
//! A `smoker` value other than "yes"/"no" (any casing) is rejected, never
//! defaulted.

mod encoder;
mod errors;
mod types;
mod validator;

pub use encoder::{encode, encode_request};
pub use errors::{QuoteError, QuoteResult};
pub use types::{
    BmiRequest, Feature, FeatureVector, InsuranceQuoteRequest, Smoker, ValidatedQuote,
    FEATURE_COUNT,
};
pub use validator::{compute_bmi, validate};
