//! Command line definition

use clap::Parser;
use std::path::PathBuf;

/// Derive a reproducible password from ordered seed words
///
/// The same seed words in the same order and the same length always give the
/// same password. Nothing is stored or sent anywhere.
///
/// Seeds passed as arguments end up in shell history; omit them to be
/// prompted with hidden input instead.
///
/// Example usage:
///   seedpass correct horse battery
///   seedpass --length 16 --words 4
///   seedpass --json correct horse
#[derive(Debug, Parser)]
#[command(name = "seedpass", version)]
#[command(about = "Derive a reproducible password from ordered seed words")]
pub struct Cli {
    /// Seed words, in order (prompted for when omitted)
    pub seeds: Vec<String>,

    /// Password length; must be one of the configured lengths
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Number of seed words to prompt for; not used with argument seeds
    #[arg(short, long, conflicts_with = "seeds")]
    pub words: Option<usize>,

    /// Path to a JSON configuration file
    #[arg(long, env = "SEEDPASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print a JSON object instead of the bare password
    #[arg(long)]
    pub json: bool,
}
