//! JSON I/O handling for CLI
//!
//! - Input: single JSON object via stdin
//! - Output: single JSON object via stdout
//! - UTF-8 only

use std::io::{self, BufRead, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Read one JSON request line from any reader
pub fn read_request_from<T: DeserializeOwned, R: BufRead>(reader: &mut R) -> CliResult<T> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return Err(CliError::io_error("Empty input"));
    }

    Ok(serde_json::from_str(&line)?)
}

/// Write a value as one JSON line to stdout
pub fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write `{"error": message}` to stdout
pub fn write_error(message: &str) -> CliResult<()> {
    write_json(&serde_json::json!({ "error": message }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::InsuranceQuoteRequest;
    use std::io::Cursor;

    #[test]
    fn test_read_request_from() {
        let mut input = Cursor::new(r#"{"age":30,"bmi":25.0,"children":0,"smoker":"no"}"#);
        let request: InsuranceQuoteRequest = read_request_from(&mut input).unwrap();
        assert_eq!(request.age, 30);
    }

    #[test]
    fn test_empty_input() {
        let mut input = Cursor::new("\n");
        let result: CliResult<InsuranceQuoteRequest> = read_request_from(&mut input);
        assert!(result.is_err());
    }
}
