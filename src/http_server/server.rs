//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::observability_routes::observability_routes;
use super::quote_routes::quote_routes;
use super::state::AppState;
use crate::config::ServiceConfig;
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::service::QuoteService;

/// HTTP server for the quote service
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a server around an existing service
    pub fn with_service(config: &ServiceConfig, service: Arc<QuoteService>) -> Self {
        Self {
            addr: config.socket_addr(),
            router: Self::build_router(&config.cors_origins, service),
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(cors_origins: &[String], service: Arc<QuoteService>) -> Router {
        let state = Arc::new(AppState::new(service));

        let cors = if cors_origins.is_empty() {
            // No origins configured: permissive, for local development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Root banner, health, model metadata
            .merge(observability_routes(state.clone()))
            // /predict, /explain, /bmi
            .merge(quote_routes(state))
            .layer(cors)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.addr.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.addr, e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        log_event_with_fields(Event::Serving, &[("addr", bound.as_str())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, run until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}
