//! CLI command implementations
//!
//! `serve` is the long-running mode. `predict` and `explain` are one-shot:
//! one JSON request on stdin, one JSON response on stdout. A model that
//! fails to load, unreadable input, and rejected requests are all written
//! as `{"error": ...}` before the process exits non-zero.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::config::ServiceConfig;
use crate::explain::ExplainerKind;
use crate::http_server::HttpServer;
use crate::model::ModelResult;
use crate::observability::{self, log_event, log_event_with_fields, Event};
use crate::quote::{InsuranceQuoteRequest, QuoteError, QuoteResult};
use crate::service::QuoteService;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request_from, write_error, write_json};

/// Parse arguments, initialize logging, and dispatch
pub fn run() -> CliResult<()> {
    observability::init();
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            model,
        } => serve(config.as_deref(), port, model),
        Command::Predict { model } => predict(&model),
        Command::Explain { model } => explain(model.as_deref()),
    }
}

/// Start the HTTP server
///
/// 1. Resolve configuration (file, then flag overrides)
/// 2. Bind the listener
/// 3. Load the model on a blocking task; requests before it lands get
///    "Model not loaded"
pub fn serve(
    config_path: Option<&Path>,
    port: Option<u16>,
    model: Option<PathBuf>,
) -> CliResult<()> {
    log_event(Event::BootStart);

    let config = ServiceConfig::load_or_default(config_path)?.with_overrides(port, model)?;

    let port_str = config.port.to_string();
    let model_str = config.model_path.display().to_string();
    log_event_with_fields(
        Event::ConfigLoaded,
        &[
            ("host", config.host.as_str()),
            ("port", port_str.as_str()),
            ("model_path", model_str.as_str()),
            ("explainer", config.explainer.as_str()),
        ],
    );

    let service = Arc::new(QuoteService::new(config.explainer));
    let server = HttpServer::with_service(&config, Arc::clone(&service));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async move {
        // Load failures are logged inside; the server keeps answering /health
        let _loader = spawn_model_load(service, config.model_path.clone());

        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load the model off the async workers and install it when ready
pub fn spawn_model_load(service: Arc<QuoteService>, path: PathBuf) -> JoinHandle<ModelResult<()>> {
    tokio::task::spawn_blocking(move || service.install_from_path(&path).map(|_| ()))
}

/// One-shot prediction
pub fn predict(model_path: &Path) -> CliResult<()> {
    let service = QuoteService::new(ExplainerKind::Heuristic);
    install(&service, model_path)?;

    let result = read_quote().and_then(|request| {
        service
            .predict(&request)
            .map(|cost| json!({ "predicted_insurance_cost": cost }))
    });
    respond(result)
}

/// One-shot explanation
pub fn explain(model_path: Option<&Path>) -> CliResult<()> {
    let service = match model_path {
        Some(path) => {
            let service = QuoteService::new(ExplainerKind::Model);
            install(&service, path)?;
            service
        }
        None => QuoteService::new(ExplainerKind::Heuristic),
    };

    let result = read_quote().and_then(|request| {
        service
            .explain(&request)
            .map(|contributions| json!({ "contributions": contributions }))
    });
    respond(result)
}

fn install(service: &QuoteService, path: &Path) -> CliResult<()> {
    if let Err(e) = service.install_from_path(path) {
        write_error(&e.to_string())?;
        return Err(e.into());
    }
    Ok(())
}

fn read_quote() -> QuoteResult<InsuranceQuoteRequest> {
    let stdin = io::stdin();
    read_quote_from(&mut stdin.lock())
}

/// Input that is not a quote request is a request error
fn read_quote_from<R: BufRead>(reader: &mut R) -> QuoteResult<InsuranceQuoteRequest> {
    read_request_from(reader).map_err(|e| QuoteError::MalformedRequest(e.message().to_string()))
}

fn respond(result: QuoteResult<Value>) -> CliResult<()> {
    match result {
        Ok(body) => write_json(&body),
        Err(e) => {
            write_error(&e.to_string())?;
            Err(e.into())
        }
    }
}
