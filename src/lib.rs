//! Template-token substitution for environment-specific config files.
//!
//! Reads a text file containing `{token}` placeholders, resolves each token
//! from a key/value source (process environment variables or an explicit JSON
//! object), and writes the substituted content back out. Resolution prefers
//! an environment-qualified key (`STAGING_NAME` for token `NAME` under the
//! `staging` environment) and falls back to the bare token name.
//!
//! `${name}` occurrences are escapes and are never substituted. A file whose
//! name carries the environment as a suffix (`config.staging`) is written
//! back to its base name (`config`) and the suffixed file is removed.
//!
//! # Example
//!
//! ```no_run
//! use toksub::{JsonValues, TokenReplacer};
//!
//! let source = JsonValues::from_json(r#"{"NAME": "Sean"}"#)?;
//! let replacer = TokenReplacer::new("config.staging", "staging", Box::new(source))?;
//! replacer.replace()?;
//! # Ok::<(), toksub::Error>(())
//! ```

pub mod error;
pub mod replacer;
pub mod source;
pub mod token;

pub use error::{Error, Result};
pub use replacer::TokenReplacer;
pub use source::{JsonValues, ProcessEnv, ValueSource};
