//! Observability for the quote service
//!
//! - Structured logging (one JSON object per line)
//! - Typed lifecycle and request events
//!
//! # Usage
//!
//! ```ignore
//! use insurance_quote::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::ModelLoaded, &[("version", "1.0.0")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{format_event, init, Logger, Severity};

/// Log a lifecycle event
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
