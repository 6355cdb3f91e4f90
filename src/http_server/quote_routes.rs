//! Quote HTTP Routes
//!
//! Prediction, explanation and BMI endpoints. Every failure, including a
//! body that does not match the request schema, is answered with
//! `{"error": "..."}`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    routing::post,
    Router,
};
use serde::Serialize;
use uuid::Uuid;

use super::state::AppState;
use crate::explain::Contributions;
use crate::observability::{log_event_with_fields, Event};
use crate::quote::{compute_bmi, BmiRequest, InsuranceQuoteRequest, QuoteError};

/// Quote routes with shared state
pub fn quote_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/explain", post(explain_handler))
        .route("/bmi", post(bmi_handler))
        .with_state(state)
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub predicted_insurance_cost: f64,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub contributions: Contributions,
}

#[derive(Debug, Serialize)]
pub struct BmiResponse {
    pub bmi: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&QuoteError> for ErrorResponse {
    fn from(err: &QuoteError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

/// Log the failure and turn it into an error response
pub(super) fn reject(request_id: &str, route: &str, err: QuoteError) -> HandlerError {
    let message = err.to_string();
    let event = if err.is_client_error() {
        Event::RequestRejected
    } else {
        Event::RequestFailed
    };
    log_event_with_fields(
        event,
        &[
            ("request_id", request_id),
            ("route", route),
            ("error", message.as_str()),
        ],
    );

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::from(&err)))
}

fn parse_body<T>(
    request_id: &str,
    route: &str,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, HandlerError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| reject(request_id, route, QuoteError::MalformedRequest(e.body_text())))
}

// ==================
// Handlers
// ==================

/// Predict handler
async fn predict_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsuranceQuoteRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, HandlerError> {
    let request_id = Uuid::new_v4().to_string();
    let request = parse_body(&request_id, "/predict", payload)?;

    let cost = state
        .service
        .predict(&request)
        .map_err(|e| reject(&request_id, "/predict", e))?;

    let rendered = format!("{:.2}", cost);
    log_event_with_fields(
        Event::PredictionServed,
        &[
            ("request_id", request_id.as_str()),
            ("predicted_insurance_cost", rendered.as_str()),
        ],
    );

    Ok(Json(PredictionResponse {
        predicted_insurance_cost: cost,
    }))
}

/// Explain handler
async fn explain_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<InsuranceQuoteRequest>, JsonRejection>,
) -> Result<Json<ExplainResponse>, HandlerError> {
    let request_id = Uuid::new_v4().to_string();
    let request = parse_body(&request_id, "/explain", payload)?;

    let contributions = state
        .service
        .explain(&request)
        .map_err(|e| reject(&request_id, "/explain", e))?;

    log_event_with_fields(
        Event::ExplainServed,
        &[
            ("request_id", request_id.as_str()),
            ("explainer", state.service.explainer().as_str()),
        ],
    );

    Ok(Json(ExplainResponse { contributions }))
}

/// BMI handler
async fn bmi_handler(
    payload: Result<Json<BmiRequest>, JsonRejection>,
) -> Result<Json<BmiResponse>, HandlerError> {
    let request_id = Uuid::new_v4().to_string();
    let request = parse_body(&request_id, "/bmi", payload)?;

    let bmi = compute_bmi(&request).map_err(|e| reject(&request_id, "/bmi", e))?;

    log_event_with_fields(Event::BmiServed, &[("request_id", request_id.as_str())]);

    Ok(Json(BmiResponse { bmi }))
}
