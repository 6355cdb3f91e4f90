//! CLI module for the quote service
//!
//! Provides command-line interface for:
//! - serve: HTTP server
//! - predict: one-shot prediction from stdin
//! - explain: one-shot explanation from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{explain, predict, run, run_command, serve, spawn_model_load};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request_from, write_error, write_json};
