//! Service configuration
//!
//! Loaded from an optional JSON file. Every field has a default, so `{}`
//! is a valid config:
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 8000,
//!   "cors_origins": ["http://localhost:3000"],
//!   "model_path": "models/insurance_model.json",
//!   "explainer": "heuristic"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::explain::ExplainerKind;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP listener binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed by CORS; empty allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Path of the exported model file
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Explainer used by `/explain`
    #[serde(default)]
    pub explainer: ExplainerKind,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> Vec<String> {
    // Quote form dev server
    vec!["http://localhost:3000".to_string()]
}

fn default_model_path() -> PathBuf {
    PathBuf::from("models/insurance_model.json")
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            model_path: default_model_path(),
            explainer: ExplainerKind::default(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: ServiceConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// `host:port` for the listener
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply command-line overrides, then re-validate
    pub fn with_overrides(
        mut self,
        port: Option<u16>,
        model_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(model_path) = model_path {
            self.model_path = model_path;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be > 0".into()));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".into()));
        }

        if self.model_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("model_path must not be empty".into()));
        }

        Ok(())
    }
}
