//! Model loader
//!
//! Reads an exported model from disk. Missing or malformed files are
//! reported as `ModelError`; the caller decides whether that is fatal.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::errors::{ModelError, ModelResult};
use super::linear::{LinearModel, ModelFile};

/// Loads a linear model file and tags it with the SHA-256 of its bytes.
pub fn load_model(path: &Path) -> ModelResult<LinearModel> {
    let bytes = fs::read(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let file: ModelFile =
        serde_json::from_slice(&bytes).map_err(|e| ModelError::Parse(e.to_string()))?;

    let model = LinearModel::from_file(file)?;
    Ok(model.with_fingerprint(fingerprint(&bytes)))
}

/// Hex-encoded SHA-256 digest
pub fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_known_value() {
        assert_eq!(
            fingerprint(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_model(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
