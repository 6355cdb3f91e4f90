//! Model handle
//!
//! Owns the loaded predictor. The slot is written exactly once, then only
//! read; requests that arrive before installation get `ModelNotReady`.

use std::sync::{Arc, OnceLock};

use super::errors::{ModelError, ModelResult};
use super::predictor::Predictor;
use crate::quote::{QuoteError, QuoteResult};

/// Write-once holder for the active predictor
#[derive(Default)]
pub struct ModelHandle {
    slot: OnceLock<Arc<dyn Predictor>>,
}

impl ModelHandle {
    /// Create an empty handle
    pub fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Create a handle that is ready immediately
    pub fn with_predictor(predictor: Arc<dyn Predictor>) -> Self {
        let handle = Self::new();
        // A fresh OnceLock cannot already be set
        let _ = handle.slot.set(predictor);
        handle
    }

    /// Install the predictor. Fails if one is already installed.
    pub fn install(&self, predictor: Arc<dyn Predictor>) -> ModelResult<()> {
        self.slot
            .set(predictor)
            .map_err(|_| ModelError::AlreadyInstalled)
    }

    /// Returns the installed predictor
    pub fn get(&self) -> QuoteResult<Arc<dyn Predictor>> {
        self.slot.get().cloned().ok_or(QuoteError::ModelNotReady)
    }

    pub fn is_ready(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("ready", &self.is_ready())
            .finish()
    }
}
