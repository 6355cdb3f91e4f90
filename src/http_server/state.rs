//! Shared router state

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::service::QuoteService;

/// State shared by every route
pub struct AppState {
    pub service: Arc<QuoteService>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service: Arc<QuoteService>) -> Self {
        Self {
            service,
            started_at: Utc::now(),
        }
    }
}
