//! Configuration file
//!
//! Looked up at `--config`, then `$SEEDPASS_CONFIG`, then
//! `<config dir>/seedpass/config.json`. Every field is optional.

use seedpass_common::{Error, Result, ensure};
use seedpass_password::MIN_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the derived password is written to stdout
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The password alone
    #[default]
    Plain,
    /// `{ "password", "length", "seed_count" }`
    Json,
}

/// Input rules and defaults for the command line
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedpassConfig {
    /// Length used when `--length` is not given
    #[serde(default = "default_length")]
    pub default_length: usize,
    /// Lengths the user may choose from
    #[serde(default = "default_allowed_lengths")]
    pub allowed_lengths: Vec<usize>,
    /// Seed words prompted for when `--words` is not given
    #[serde(default = "default_word_count")]
    pub default_word_count: usize,
    /// Fewest seed words accepted
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// Most seed words accepted
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Output format when `--json` is not given
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_length() -> usize {
    12
}

fn default_allowed_lengths() -> Vec<usize> {
    vec![8, 12, 16]
}

fn default_word_count() -> usize {
    3
}

fn default_min_words() -> usize {
    2
}

fn default_max_words() -> usize {
    4
}

impl Default for SeedpassConfig {
    fn default() -> Self {
        Self {
            default_length: default_length(),
            allowed_lengths: default_allowed_lengths(),
            default_word_count: default_word_count(),
            min_words: default_min_words(),
            max_words: default_max_words(),
            output: OutputFormat::default(),
        }
    }
}

impl SeedpassConfig {
    /// `<os config dir>/seedpass/config.json`, if the platform has one
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("seedpass").join("config.json"))
    }

    /// Load from `explicit`, else from the default path, else defaults
    ///
    /// Returns the config and the file it came from.
    ///
    /// # Errors
    ///
    /// Fails when an explicit file is missing, or any file found is
    /// unreadable, malformed or invalid.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => return Ok((Self::default(), None)),
            },
        };

        let config = Self::from_file(&path)?;
        Ok((config, Some(path)))
    }

    /// Read and validate a JSON config file
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::from(e).context(format!("reading {}", path.display())))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::from(e).context(format!("parsing {}", path.display())))?;
        config
            .validate()
            .map_err(|e| e.context(format!("validating {}", path.display())))?;
        Ok(config)
    }

    /// Check the rules are consistent with each other
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first inconsistency.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.allowed_lengths.is_empty(),
            configuration,
            "allowed_lengths must not be empty"
        );
        if let Some(&short) = self.allowed_lengths.iter().find(|&&l| l < MIN_LENGTH) {
            seedpass_common::bail!(
                configuration,
                "allowed length {} is below the minimum of {}",
                short,
                MIN_LENGTH
            );
        }
        ensure!(
            self.allowed_lengths.contains(&self.default_length),
            configuration,
            "default_length {} is not one of allowed_lengths {:?}",
            self.default_length,
            self.allowed_lengths
        );
        ensure!(self.min_words > 0, configuration, "min_words must be at least 1");
        ensure!(
            self.min_words <= self.max_words,
            configuration,
            "min_words {} exceeds max_words {}",
            self.min_words,
            self.max_words
        );
        ensure!(
            (self.min_words..=self.max_words).contains(&self.default_word_count),
            configuration,
            "default_word_count {} is outside {}..={}",
            self.default_word_count,
            self.min_words,
            self.max_words
        );
        Ok(())
    }

    /// Requested length, or the default, checked against `allowed_lengths`
    ///
    /// # Errors
    ///
    /// Returns a validation error for a length that is not allowed.
    pub fn resolve_length(&self, requested: Option<usize>) -> Result<usize> {
        let length = requested.unwrap_or(self.default_length);
        ensure!(
            self.allowed_lengths.contains(&length),
            validation,
            "length {} is not allowed; choose one of {:?}",
            length,
            self.allowed_lengths
        );
        Ok(length)
    }

    /// Requested seed count, or the default, checked against the word range
    ///
    /// # Errors
    ///
    /// Returns a validation error for a count outside `min_words..=max_words`.
    pub fn resolve_word_count(&self, requested: Option<usize>) -> Result<usize> {
        let count = requested.unwrap_or(self.default_word_count);
        ensure!(
            (self.min_words..=self.max_words).contains(&count),
            validation,
            "{} seed words requested; use between {} and {}",
            count,
            self.min_words,
            self.max_words
        );
        Ok(count)
    }
}
