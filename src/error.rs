//! Error handling for token replacement.
//!
//! Every condition is a user-input or environment error detected before any
//! write happens; none indicates a defect worth retrying, so all variants
//! propagate straight to the process boundary.

use thiserror::Error;

/// Errors raised while constructing or running a
/// [`TokenReplacer`](crate::TokenReplacer).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid arguments. Usage: toksub <file_path> <environment> [json_key_values]")]
    InvalidArguments,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid value source: {0}")]
    InvalidValueSource(#[from] serde_json::Error),

    #[error("Missing values for tokens: {}", tokens.join(", "))]
    MissingTokens { tokens: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tokens_lists_every_name_comma_joined() {
        let err = Error::MissingTokens {
            tokens: vec!["NAME".to_string(), "AGE".to_string()],
        };
        assert_eq!(err.to_string(), "Missing values for tokens: NAME, AGE");
    }

    #[test]
    fn invalid_arguments_names_the_usage() {
        let err = Error::InvalidArguments;
        assert!(err.to_string().contains("Usage: toksub"));
    }

    #[test]
    fn invalid_value_source_wraps_the_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = Error::InvalidValueSource(parse_err);
        assert!(err.to_string().starts_with("Invalid value source:"));
    }
}
