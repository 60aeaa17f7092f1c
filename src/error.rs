//! Structured error types for the vitae rendering crate.
//!
//! Rendering itself is infallible — overflow truncates, malformed dates
//! degrade to empty strings. Errors only arise at the edges: parsing JSON
//! input and checking stored output blobs.

use thiserror::Error;

/// The unified error type returned by the public JSON entry point.
#[derive(Debug, Error)]
pub enum VitaeError {
    /// JSON input failed to parse as a valid resume.
    #[error("failed to parse resume: {source}{}", hint_suffix(.hint))]
    Parse {
        #[source]
        source: serde_json::Error,
        hint: String,
    },
}

fn hint_suffix(hint: &str) -> String {
    if hint.is_empty() {
        String::new()
    } else {
        format!("\n  Hint: {hint}")
    }
}

impl From<serde_json::Error> for VitaeError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "Check for trailing commas, missing quotes, or unescaped characters.".to_string()
            }
            serde_json::error::Category::Data => {
                "The JSON is valid but doesn't match the resume schema. \
                 Check field names (camelCase) and types."
                    .to_string()
            }
            serde_json::error::Category::Eof => {
                "Unexpected end of input — is the JSON truncated?".to_string()
            }
            serde_json::error::Category::Io => String::new(),
        };
        VitaeError::Parse { source: e, hint }
    }
}
