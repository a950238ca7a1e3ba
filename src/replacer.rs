//! The replacer itself: eager validation at construction, a single
//! `replace()` call to render and write.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::source::{JsonValues, ProcessEnv, ValueSource};
use crate::token::{discover_tokens, resolve, substitute_token};

/// Replaces `{token}` placeholders in one file.
///
/// Construction reads the file, discovers every token and resolves each one
/// up front; a token with no value under either the qualified or the bare key
/// fails the whole operation before anything is written. After a successful
/// construction, [`replace`](Self::replace) performs the write.
///
/// An instance covers exactly one file and is not reused.
pub struct TokenReplacer {
    file_path: PathBuf,
    environment: String,
    source: Box<dyn ValueSource>,
    tokens: Vec<String>,
}

impl TokenReplacer {
    /// Validate inputs and resolve every token in `file_path`.
    ///
    /// Fails with [`Error::FileNotFound`] when the path does not exist and
    /// with [`Error::MissingTokens`] when any discovered token has no value.
    /// Nothing on disk is mutated here.
    pub fn new(
        file_path: impl Into<PathBuf>,
        environment: impl Into<String>,
        source: Box<dyn ValueSource>,
    ) -> Result<Self> {
        let file_path = file_path.into();
        let environment = environment.into();

        if !file_path.exists() {
            return Err(Error::FileNotFound {
                path: file_path.display().to_string(),
            });
        }

        let content = fs::read_to_string(&file_path)?;
        let tokens = discover_tokens(&content);
        debug!(
            file = %file_path.display(),
            environment = %environment,
            count = tokens.len(),
            "discovered tokens"
        );

        let missing: Vec<String> = tokens
            .iter()
            .filter(|token| resolve(token, &environment, source.as_ref()).is_none())
            .cloned()
            .collect();
        if !missing.is_empty() {
            return Err(Error::MissingTokens { tokens: missing });
        }

        Ok(Self {
            file_path,
            environment,
            source,
            tokens,
        })
    }

    /// Build a replacer from positional CLI arguments.
    ///
    /// Two arguments (`<file_path> <environment>`) resolve values from
    /// process environment variables; three (`<file_path> <environment>
    /// <json_key_values>`) from the given JSON object. Any other arity is
    /// [`Error::InvalidArguments`], checked before the file is touched.
    ///
    /// The historical `<file_base> <environment>` shape is also accepted:
    /// when `<file_path>` does not exist but `<file_path>.<environment>`
    /// does, the suffixed file is used as the input.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let (path, environment, source): (&str, &str, Box<dyn ValueSource>) = match args {
            [path, environment] => (path.as_str(), environment.as_str(), Box::new(ProcessEnv)),
            [path, environment, json] => (
                path.as_str(),
                environment.as_str(),
                Box::new(JsonValues::from_json(json)?),
            ),
            _ => return Err(Error::InvalidArguments),
        };

        let mut file_path = PathBuf::from(path);
        if !file_path.exists() {
            let suffixed = PathBuf::from(format!("{path}.{environment}"));
            if suffixed.exists() {
                file_path = suffixed;
            }
        }

        Self::new(file_path, environment, source)
    }

    /// The tokens discovered at construction, in order of first appearance.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Where the substituted content will be written: the input path with the
    /// `.{environment}` suffix stripped, or the input path itself when it
    /// carries no suffix.
    pub fn final_path(&self) -> PathBuf {
        let path = self.file_path.to_string_lossy();
        let suffix = format!(".{}", self.environment);
        match path.strip_suffix(&suffix) {
            Some(base) => PathBuf::from(base),
            None => self.file_path.clone(),
        }
    }

    /// Substitute every discovered token and write the result.
    ///
    /// The file content is re-read here rather than reusing the buffer from
    /// construction, and each token's replacement re-scans the live buffer,
    /// so a value that itself contains brace-delimited text can be picked up
    /// by a later token. When the final path differs from the input path the
    /// suffixed input file is removed afterwards (render-and-rename, not a
    /// copy).
    pub fn replace(&self) -> Result<()> {
        let mut content = fs::read_to_string(&self.file_path)?;

        for token in &self.tokens {
            // Resolved once already at construction; the source is immutable
            // for the instance lifetime, so this cannot miss.
            let Some(value) = resolve(token, &self.environment, self.source.as_ref()) else {
                return Err(Error::MissingTokens {
                    tokens: vec![token.clone()],
                });
            };
            content = substitute_token(&content, token, &value);
        }

        let final_path = self.final_path();
        fs::write(&final_path, content)?;

        if final_path != self.file_path {
            fs::remove_file(&self.file_path)?;
            info!(
                from = %self.file_path.display(),
                to = %final_path.display(),
                "renamed environment-suffixed file"
            );
        }

        Ok(())
    }

    /// The input file path this replacer was constructed with.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}
