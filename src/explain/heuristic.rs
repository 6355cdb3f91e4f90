//! Closed-form fallback explainer
//!
//! These weights are NOT derived from the loaded model. They give a rough,
//! deterministic picture of how each input tends to move a premium and must
//! not be presented as the model's own attribution:
//!
//! | feature  | contribution          |
//! |----------|-----------------------|
//! | age      | `age * 250`           |
//! | bmi      | `(bmi - 25) * 400`    |
//! | children | `children * 500`      |
//! | smoker   | `smoker_bit * 20000`  |

use super::{Contributions, Explainer};
use crate::quote::{QuoteResult, ValidatedQuote};

const AGE_WEIGHT: f64 = 250.0;
const BMI_REFERENCE: f64 = 25.0;
const BMI_WEIGHT: f64 = 400.0;
const CHILD_WEIGHT: f64 = 500.0;
const SMOKER_WEIGHT: f64 = 20000.0;

/// Approximate explainer with fixed weights
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExplainer;

impl HeuristicExplainer {
    /// Fails when a very large input overflows a contribution
    pub fn contributions(quote: &ValidatedQuote) -> QuoteResult<Contributions> {
        Contributions::new([
            quote.age as f64 * AGE_WEIGHT,
            (quote.bmi - BMI_REFERENCE) * BMI_WEIGHT,
            quote.children as f64 * CHILD_WEIGHT,
            f64::from(quote.smoker.bit()) * SMOKER_WEIGHT,
        ])
    }
}

impl Explainer for HeuristicExplainer {
    fn explain(&self, quote: &ValidatedQuote) -> QuoteResult<Contributions> {
        Self::contributions(quote)
    }
}
