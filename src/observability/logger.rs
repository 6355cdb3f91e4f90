//! Structured JSON logging on top of the `log` facade
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Output goes through `env_logger`, filtered by `RUST_LOG`

use std::fmt;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Rejected input, recoverable issues
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Matching `log` level
    pub fn level(&self) -> log::Level {
        match self {
            Severity::Info => log::Level::Info,
            Severity::Warn => log::Level::Warn,
            Severity::Error => log::Level::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Initialize the global logger. Defaults to `info` unless `RUST_LOG` is set.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(false)
        .try_init();
}

/// Structured logger
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let level = severity.level();
        if log::log_enabled!(level) {
            log::log!(level, "{}", format_event(severity, event, fields));
        }
    }
}

/// Render one event as a single-line JSON object
pub fn format_event(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":");
    push_json_string(&mut output, event);
    output.push_str(",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted {
        output.push(',');
        push_json_string(&mut output, key);
        output.push(':');
        push_json_string(&mut output, value);
    }

    output.push('}');
    output
}

fn push_json_string(output: &mut String, s: &str) {
    // Serializing a &str cannot fail
    match serde_json::to_string(s) {
        Ok(quoted) => output.push_str(&quoted),
        Err(_) => output.push_str("\"\""),
    }
}
