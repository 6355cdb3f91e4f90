//! insurance-quote - insurance cost prediction over HTTP
//!
//! Validates quote requests, encodes them into the fixed-order feature
//! vector `[age, bmi, children, smoker_bit]`, and scores them with a
//! pre-trained model loaded at startup.

pub mod cli;
pub mod config;
pub mod explain;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod quote;
pub mod service;
