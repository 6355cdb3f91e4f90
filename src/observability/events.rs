//! Observable service events
//!
//! Events are explicit and typed. Each one renders as an uppercase
//! identifier in the `event` field of a log line.

use std::fmt;

use super::logger::Severity;

/// Observable events in the quote service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration resolved
    ConfigLoaded,
    /// Listener bound, accepting requests
    Serving,
    /// Server stopped
    ShutdownComplete,

    // Model
    /// Model file read begins
    ModelLoadBegin,
    /// Model installed into the handle
    ModelLoaded,
    /// Model could not be loaded
    ModelLoadFailed,

    // Requests
    /// Prediction returned to a client
    PredictionServed,
    /// Explanation returned to a client
    ExplainServed,
    /// BMI computed for a client
    BmiServed,
    /// Request refused for bad input
    RequestRejected,
    /// Request failed on the server side
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "SERVICE_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "SERVICE_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::ModelLoadBegin => "MODEL_LOAD_BEGIN",
            Event::ModelLoaded => "MODEL_LOADED",
            Event::ModelLoadFailed => "MODEL_LOAD_FAILED",

            Event::PredictionServed => "PREDICTION_SERVED",
            Event::ExplainServed => "EXPLAIN_SERVED",
            Event::BmiServed => "BMI_SERVED",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ModelLoadFailed | Event::RequestFailed => Severity::Error,
            Event::RequestRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
