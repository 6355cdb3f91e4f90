//! Explainer backed by the predictor's own attribution

use std::sync::Arc;

use super::{Contributions, Explainer};
use crate::model::Predictor;
use crate::quote::{encode, QuoteError, QuoteResult, ValidatedQuote};

/// Uses `Predictor::attribute` on the encoded quote
pub struct ModelExplainer {
    predictor: Arc<dyn Predictor>,
}

impl ModelExplainer {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }
}

impl Explainer for ModelExplainer {
    fn explain(&self, quote: &ValidatedQuote) -> QuoteResult<Contributions> {
        let features = encode(quote);
        self.predictor
            .attribute(&features)
            .ok_or_else(|| {
                QuoteError::PredictionFailed("model does not support attribution".into())
            })
            .and_then(Contributions::new)
    }
}
