//! # HTTP Server Module
//!
//! Axum server exposing the quote service.
//!
//! # Endpoints
//!
//! - `GET /` - Banner
//! - `GET /health` - Health check, reports whether the model is loaded
//! - `GET /model` - Model metadata
//! - `POST /predict` - Predicted insurance cost
//! - `POST /explain` - Per-feature contributions
//! - `POST /bmi` - BMI from height and weight

pub mod observability_routes;
pub mod quote_routes;
pub mod server;
mod state;

pub use server::HttpServer;
pub use state::AppState;
