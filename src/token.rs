//! Token discovery and value resolution.
//!
//! Tokens are `{name}` occurrences where `name` is one or more word
//! characters. A `$` immediately before the opening brace marks the
//! occurrence as escaped: `${name}` is never discovered and never
//! substituted.

use regex::Regex;

use crate::source::ValueSource;

/// Matches `{name}` with an optional `$` prefix captured alongside it. The
/// regex crate has no lookbehind, so escaped occurrences are matched and
/// skipped by inspecting the first capture group.
fn token_pattern() -> Regex {
    Regex::new(r"(\$?)\{(\w+)\}").unwrap()
}

/// Scan `content` for tokens, in order of first appearance, deduplicated.
pub fn discover_tokens(content: &str) -> Vec<String> {
    let pattern = token_pattern();
    let mut tokens: Vec<String> = Vec::new();
    for cap in pattern.captures_iter(content) {
        if &cap[1] == "$" {
            continue;
        }
        let name = &cap[2];
        if !tokens.iter().any(|t| t.as_str() == name) {
            tokens.push(name.to_string());
        }
    }
    tokens
}

/// Build the environment-qualified lookup key, e.g. `staging` + `NAME` →
/// `STAGING_NAME`.
pub fn qualified_key(environment: &str, token: &str) -> String {
    format!("{}_{}", environment.to_uppercase(), token)
}

/// Resolve a token's replacement value: the qualified key wins, the bare
/// token name is the fallback, `None` means unresolvable.
pub fn resolve(token: &str, environment: &str, source: &dyn ValueSource) -> Option<String> {
    source
        .get(&qualified_key(environment, token))
        .or_else(|| source.get(token))
}

/// Replace every unescaped occurrence of `{token}` in `content` with `value`.
/// Escaped occurrences and other tokens pass through untouched.
pub fn substitute_token(content: &str, token: &str, value: &str) -> String {
    let pattern = token_pattern();
    let mut output = String::with_capacity(content.len());
    let mut last = 0;
    for cap in pattern.captures_iter(content) {
        if &cap[1] == "$" || &cap[2] != token {
            continue;
        }
        let matched = cap.get(0).expect("capture 0 always present");
        output.push_str(&content[last..matched.start()]);
        output.push_str(value);
        last = matched.end();
    }
    output.push_str(&content[last..]);
    output
}
