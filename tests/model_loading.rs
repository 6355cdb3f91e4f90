//! Model Loading Tests
//!
//! - Model files must declare the encoder's feature order
//! - Loaded models carry a SHA-256 fingerprint of their file
//! - The handle accepts exactly one model
//! - A model loaded on a blocking task becomes visible to the service

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use insurance_quote::cli::spawn_model_load;
use insurance_quote::explain::ExplainerKind;
use insurance_quote::model::{fingerprint, load_model, ModelError, ModelHandle, Predictor};
use insurance_quote::quote::{encode_request, InsuranceQuoteRequest, QuoteError};
use insurance_quote::service::QuoteService;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

const MODEL_JSON: &str = r#"{
    "version": "2.1.0",
    "features": ["age", "bmi", "children", "smoker"],
    "intercept": 1000.0,
    "coefficients": [100.0, 10.0, 50.0, 20000.0]
}"#;

fn write_model(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_valid_model() {
    let tmp = TempDir::new().unwrap();
    let path = write_model(&tmp, "model.json", MODEL_JSON);

    let model = load_model(&path).unwrap();
    let features = encode_request(&InsuranceQuoteRequest::new(30, 25.0, 0, "no")).unwrap();

    assert_eq!(model.predict(&features).unwrap(), 4250.0);
    assert_eq!(model.info().version, "2.1.0");
}

#[test]
fn test_fingerprint_matches_file_bytes() {
    let tmp = TempDir::new().unwrap();
    let path = write_model(&tmp, "model.json", MODEL_JSON);

    let model = load_model(&path).unwrap();
    assert_eq!(
        model.info().fingerprint,
        Some(fingerprint(MODEL_JSON.as_bytes()))
    );
}

#[test]
fn test_swapped_feature_order_rejected() {
    let tmp = TempDir::new().unwrap();
    let swapped = MODEL_JSON.replace(
        r#"["age", "bmi", "children", "smoker"]"#,
        r#"["bmi", "age", "children", "smoker"]"#,
    );
    let path = write_model(&tmp, "swapped.json", &swapped);

    let err = load_model(&path).unwrap_err();
    assert!(matches!(err, ModelError::FeatureMismatch { .. }));
}

#[test]
fn test_malformed_json_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_model(&tmp, "broken.json", "{ not json");

    assert!(matches!(load_model(&path), Err(ModelError::Parse(_))));
}

#[test]
fn test_missing_coefficient_rejected() {
    let tmp = TempDir::new().unwrap();
    let short = MODEL_JSON.replace("[100.0, 10.0, 50.0, 20000.0]", "[100.0, 10.0, 50.0]");
    let path = write_model(&tmp, "short.json", &short);

    assert!(matches!(load_model(&path), Err(ModelError::Shape(_))));
}

#[test]
fn test_bundled_model_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("models/insurance_model.json");
    let model = load_model(&path).unwrap();

    let non_smoker = encode_request(&InsuranceQuoteRequest::new(30, 25.0, 0, "no")).unwrap();
    let smoker = encode_request(&InsuranceQuoteRequest::new(30, 25.0, 0, "yes")).unwrap();

    let a = model.predict(&non_smoker).unwrap();
    let b = model.predict(&smoker).unwrap();
    assert!(b > a);
}

// =============================================================================
// Handle
// =============================================================================

#[test]
fn test_handle_accepts_one_model() {
    let tmp = TempDir::new().unwrap();
    let path = write_model(&tmp, "model.json", MODEL_JSON);

    let handle = ModelHandle::new();
    handle.install(Arc::new(load_model(&path).unwrap())).unwrap();

    let second = handle.install(Arc::new(load_model(&path).unwrap()));
    assert_eq!(second, Err(ModelError::AlreadyInstalled));
}

#[test]
fn test_failed_load_leaves_service_unready() {
    let tmp = TempDir::new().unwrap();
    let path = write_model(&tmp, "broken.json", "[]");

    let service = QuoteService::new(ExplainerKind::Heuristic);
    assert!(service.install_from_path(&path).is_err());

    let err = service
        .predict(&InsuranceQuoteRequest::new(30, 25.0, 0, "no"))
        .unwrap_err();
    assert_eq!(err, QuoteError::ModelNotReady);
}

// =============================================================================
// Startup Loading
// =============================================================================

#[tokio::test]
async fn test_background_load_installs_model() {
    let tmp = TempDir::new().unwrap();
    let path = write_model(&tmp, "model.json", MODEL_JSON);

    let service = Arc::new(QuoteService::new(ExplainerKind::Heuristic));
    assert!(!service.model().is_ready());

    spawn_model_load(Arc::clone(&service), path)
        .await
        .unwrap()
        .unwrap();

    assert!(service.model().is_ready());
    let cost = service
        .predict(&InsuranceQuoteRequest::new(30, 25.0, 0, "no"))
        .unwrap();
    assert_eq!(cost, 4250.0);
}

#[tokio::test]
async fn test_background_load_failure_is_reported() {
    let service = Arc::new(QuoteService::new(ExplainerKind::Heuristic));

    let result = spawn_model_load(Arc::clone(&service), PathBuf::from("/nonexistent/model.json"))
        .await
        .unwrap();

    assert!(matches!(result, Err(ModelError::Io { .. })));
    assert!(!service.model().is_ready());
}
