//! Output formatting.
//!
//! Text mode prints exactly the response lines of the command protocol.
//! JSON mode prints one object per response line. Commands with no response
//! print nothing in either mode.

use nestkv_executor::{Error, Output, Value};
use serde::Serialize;

/// How responses are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Plain protocol text
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonLine<'a> {
    Value { value: Option<&'a Value> },
    Count { count: usize },
    Error { error: String },
}

/// Render a successful output; `None` when nothing should be printed.
pub fn format_output(output: &Output, mode: OutputMode) -> Option<String> {
    match mode {
        OutputMode::Text => match output {
            Output::Maybe(Some(v)) => Some(v.to_string()),
            Output::Maybe(None) => Some("NULL".to_string()),
            Output::Count(n) => Some(n.to_string()),
            Output::Unit | Output::End => None,
        },
        OutputMode::Json => match output {
            Output::Maybe(v) => Some(to_json(&JsonLine::Value { value: v.as_ref() })),
            Output::Count(n) => Some(to_json(&JsonLine::Count { count: *n })),
            Output::Unit | Output::End => None,
        },
    }
}

/// Render an interpreter error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Text => err.to_string(),
        OutputMode::Json => to_json(&JsonLine::Error {
            error: err.to_string(),
        }),
    }
}

fn to_json(line: &JsonLine<'_>) -> String {
    // Serializing these shapes cannot fail: only strings and integers.
    serde_json::to_string(line).unwrap_or_else(|e| format!("{{\"error\":\"{}\"}}", e))
}
