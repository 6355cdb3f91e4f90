//! Cost model subsystem
//!
//! - `Predictor`: the black-box boundary the request path depends on
//! - `LinearModel`: regression exported by the training pipeline
//! - `load_model`: reads and validates a model file
//! - `ModelHandle`: write-once slot injected into request handlers

mod errors;
mod handle;
mod linear;
mod loader;
mod predictor;

pub use errors::{ModelError, ModelResult};
pub use handle::ModelHandle;
pub use linear::{LinearModel, ModelFile};
pub use loader::{fingerprint, load_model};
pub use predictor::{ModelInfo, Predictor};
