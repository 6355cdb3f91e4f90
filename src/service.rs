//! Quote service
//!
//! Glue between the request pipeline and the injected model handle. Both
//! the HTTP routes and the CLI go through this type, so the order of checks
//! is the same everywhere: validate input first, then require the model.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::explain::{Contributions, Explainer, ExplainerKind, HeuristicExplainer, ModelExplainer};
use crate::model::{load_model, ModelHandle, ModelInfo, ModelResult, Predictor};
use crate::observability::{log_event_with_fields, Event};
use crate::quote::{encode, validate, InsuranceQuoteRequest, QuoteResult};

/// Where the model is in its lifecycle, as reported by `/health`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelStatus {
    /// Installed and serving
    Ready,
    /// Not installed yet, no load has failed
    Loading,
    /// The load failed; predictions stay unavailable until restart
    Failed,
}

impl ModelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelStatus::Ready => "ok",
            ModelStatus::Loading => "loading",
            ModelStatus::Failed => "unavailable",
        }
    }
}

/// Owns the model handle and the explainer choice
#[derive(Debug, Default)]
pub struct QuoteService {
    model: ModelHandle,
    explainer: ExplainerKind,
    load_error: OnceLock<String>,
}

impl QuoteService {
    /// Create a service with an empty model handle
    pub fn new(explainer: ExplainerKind) -> Self {
        Self {
            model: ModelHandle::new(),
            explainer,
            load_error: OnceLock::new(),
        }
    }

    /// Create a service with a model installed
    pub fn with_predictor(predictor: Arc<dyn Predictor>, explainer: ExplainerKind) -> Self {
        Self {
            model: ModelHandle::with_predictor(predictor),
            explainer,
            load_error: OnceLock::new(),
        }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    pub fn explainer(&self) -> ExplainerKind {
        self.explainer
    }

    pub fn model_status(&self) -> ModelStatus {
        if self.model.is_ready() {
            ModelStatus::Ready
        } else if self.load_error.get().is_some() {
            ModelStatus::Failed
        } else {
            ModelStatus::Loading
        }
    }

    /// Message of the failed load, if any
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.get().map(String::as_str)
    }

    /// Validate, encode, and score a request
    pub fn predict(&self, request: &InsuranceQuoteRequest) -> QuoteResult<f64> {
        let quote = validate(request)?;
        let features = encode(&quote);
        let predictor = self.model.get()?;
        Ok(predictor.predict(&features)?)
    }

    /// Per-feature contributions using the configured explainer
    pub fn explain(&self, request: &InsuranceQuoteRequest) -> QuoteResult<Contributions> {
        let quote = validate(request)?;
        match self.explainer {
            ExplainerKind::Heuristic => HeuristicExplainer.explain(&quote),
            ExplainerKind::Model => ModelExplainer::new(self.model.get()?).explain(&quote),
        }
    }

    /// Metadata of the installed model
    pub fn model_info(&self) -> QuoteResult<ModelInfo> {
        Ok(self.model.get()?.info())
    }

    /// Load a model file and install it into the handle
    pub fn install_from_path(&self, path: &Path) -> ModelResult<ModelInfo> {
        let path_str = path.display().to_string();
        log_event_with_fields(Event::ModelLoadBegin, &[("path", path_str.as_str())]);

        let result = load_model(path).and_then(|model| {
            let info = model.info();
            self.model.install(Arc::new(model))?;
            Ok(info)
        });

        match &result {
            Ok(info) => {
                let fingerprint = info.fingerprint.as_deref().unwrap_or("");
                log_event_with_fields(
                    Event::ModelLoaded,
                    &[
                        ("path", path_str.as_str()),
                        ("version", info.version.as_str()),
                        ("fingerprint", fingerprint),
                    ],
                );
            }
            Err(e) => {
                let message = e.to_string();
                log_event_with_fields(
                    Event::ModelLoadFailed,
                    &[("path", path_str.as_str()), ("error", message.as_str())],
                );
                // A second install over a ready model does not make it unavailable
                if !self.model.is_ready() {
                    let _ = self.load_error.set(message);
                }
            }
        }

        result
    }
}
