//! Key/value providers backing token resolution.
//!
//! The process environment is an implicit global store; hiding it behind
//! [`ValueSource`] lets the environment-variable and explicit-JSON variants
//! share one resolution algorithm and keeps tests off the real environment.

use std::collections::HashMap;

use crate::error::Result;

/// A source of replacement values, looked up by exact key.
pub trait ValueSource {
    /// Return the value for `key`, if the source has one.
    fn get(&self, key: &str) -> Option<String>;
}

/// Values read from process environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ValueSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Values supplied explicitly as a JSON object of string keys to string
/// values, e.g. `{"STAGING_NAME": "Seanster", "NAME": "Sean"}`.
#[derive(Debug, Clone, Default)]
pub struct JsonValues {
    values: HashMap<String, String>,
}

impl JsonValues {
    /// Parse a raw JSON argument.
    ///
    /// Anything other than an object mapping strings to strings (an array, a
    /// bare string, numeric values, nested objects) is rejected as
    /// [`InvalidValueSource`](crate::Error::InvalidValueSource).
    pub fn from_json(raw: &str) -> Result<Self> {
        let values: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { values })
    }
}

impl From<HashMap<String, String>> for JsonValues {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl ValueSource for JsonValues {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parses_a_flat_string_object() {
        let source = JsonValues::from_json(r#"{"NAME": "Sean", "AGE": "35"}"#).unwrap();
        assert_eq!(source.get("NAME"), Some("Sean".to_string()));
        assert_eq!(source.get("AGE"), Some("35".to_string()));
        assert_eq!(source.get("MISSING"), None);
    }

    #[test]
    fn rejects_malformed_json() {
        let result = JsonValues::from_json("{not json");
        assert!(matches!(result, Err(Error::InvalidValueSource(_))));
    }

    #[test]
    fn rejects_non_object_json() {
        let result = JsonValues::from_json(r#"["NAME", "Sean"]"#);
        assert!(matches!(result, Err(Error::InvalidValueSource(_))));
    }

    #[test]
    fn rejects_non_string_values() {
        let result = JsonValues::from_json(r#"{"AGE": 35}"#);
        assert!(matches!(result, Err(Error::InvalidValueSource(_))));
    }

    #[test]
    fn process_env_reads_real_variables() {
        std::env::set_var("TOKSUB_SOURCE_TEST_VAR", "present");
        assert_eq!(
            ProcessEnv.get("TOKSUB_SOURCE_TEST_VAR"),
            Some("present".to_string())
        );
        assert_eq!(ProcessEnv.get("TOKSUB_SOURCE_TEST_UNSET"), None);
        std::env::remove_var("TOKSUB_SOURCE_TEST_VAR");
    }
}
