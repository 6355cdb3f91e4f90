//! CLI argument definitions using clap
//!
//! Commands:
//! - insurance-quote serve [--config <path>] [--port <port>] [--model <path>]
//! - insurance-quote predict [--model <path>]
//! - insurance-quote explain [--model <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Insurance cost prediction service
#[derive(Parser, Debug)]
#[command(name = "insurance-quote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Path to model file (overrides config)
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Predict the cost for one JSON request read from stdin
    Predict {
        /// Path to model file
        #[arg(long, default_value = "models/insurance_model.json")]
        model: PathBuf,
    },

    /// Explain one JSON request read from stdin
    ///
    /// Uses the fixed-weight heuristic unless a model is given.
    Explain {
        /// Path to model file; enables model attribution
        #[arg(long)]
        model: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["insurance-quote", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Command::Serve { config, port, model } => {
                assert!(config.is_none());
                assert_eq!(port, Some(9000));
                assert!(model.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_predict_default_model() {
        let cli = Cli::try_parse_from(["insurance-quote", "predict"]).unwrap();
        match cli.command {
            Command::Predict { model } => {
                assert_eq!(model, PathBuf::from("models/insurance_model.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
