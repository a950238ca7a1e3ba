//! Positional-argument CLI for token replacement.
//!
//! # Usage
//!
//! ```bash
//! # Values from process environment variables
//! toksub config.staging staging
//!
//! # Values from an explicit JSON object
//! toksub config.staging staging '{"STAGING_NAME": "Seanster", "NAME": "Sean"}'
//! ```
//!
//! On success the substituted content is written to the path with the
//! `.{environment}` suffix stripped and the suffixed file is removed. Any
//! validation failure exits non-zero with a message naming the condition;
//! `RUST_LOG` controls tracing verbosity.

use std::process::ExitCode;

use colored::Colorize;
use toksub::TokenReplacer;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> toksub::Result<()> {
    TokenReplacer::from_args(args)?.replace()
}
