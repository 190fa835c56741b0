//! Command line input collector and output for seedpass
//!
//! Collects seeds and a length under the rules in [`config::SeedpassConfig`],
//! derives the password and renders it as plain text or JSON.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod prompt;

pub use cli::Cli;
pub use config::{OutputFormat, SeedpassConfig};
pub use prompt::{SeedPrompter, TerminalPrompter, collect_seeds};

use seedpass_common::{LoggingTransformer, Result, ensure};
use seedpass_password::{DerivedPassword, Password};
use serde::Serialize;
use zeroize::Zeroizing;

#[derive(Serialize)]
struct JsonOutput<'a> {
    password: &'a str,
    length: usize,
    seed_count: usize,
}

/// Run one derivation and return the text to print
///
/// Seeds come from the command line when given, otherwise from `prompter`.
///
/// # Errors
///
/// Configuration, validation and input errors; no password is produced.
pub async fn run<P: SeedPrompter + ?Sized>(
    cli: Cli,
    prompter: &mut P,
) -> Result<Zeroizing<String>> {
    let (config, source) = SeedpassConfig::load(cli.config.as_deref())?;
    LoggingTransformer::log_config_source(source.as_deref());

    let length = config.resolve_length(cli.length)?;
    let seeds = if cli.seeds.is_empty() {
        let count = config.resolve_word_count(cli.words)?;
        collect_seeds(prompter, count)?
    } else {
        seeds_from_args(cli.seeds, &config)?
    };
    let seed_count = seeds.len();

    tracing::debug!(seed_count, length, "seed input collected");

    let derived = Password::from_seeds(seeds.iter().cloned())
        .normalized()
        .with_length(length)
        .derive()
        .await;
    LoggingTransformer::log_derivation(seed_count, length, derived.is_ok());
    let password = derived?;

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };
    render(&password, seed_count, format)
}

/// Seeds given as arguments, wiped on drop and checked against the word range
fn seeds_from_args(args: Vec<String>, config: &SeedpassConfig) -> Result<Zeroizing<Vec<String>>> {
    let seeds = Zeroizing::new(args);
    ensure!(
        (config.min_words..=config.max_words).contains(&seeds.len()),
        validation,
        "{} seed words given; use between {} and {}",
        seeds.len(),
        config.min_words,
        config.max_words
    );
    Ok(seeds)
}

/// Format the password for stdout
///
/// # Errors
///
/// Fails only if JSON serialization fails.
pub fn render(
    password: &DerivedPassword,
    seed_count: usize,
    format: OutputFormat,
) -> Result<Zeroizing<String>> {
    match format {
        OutputFormat::Plain => Ok(Zeroizing::new(password.as_str().to_owned())),
        OutputFormat::Json => {
            let output = JsonOutput {
                password: password.as_str(),
                length: password.len(),
                seed_count,
            };
            Ok(Zeroizing::new(serde_json::to_string(&output)?))
        }
    }
}
