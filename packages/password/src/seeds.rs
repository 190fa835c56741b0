//! Ordered seed words and their combined form

use crate::{PasswordError, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Separator placed between seeds before hashing
///
/// Changing it changes every derived password.
pub const SEED_DELIMITER: &str = "|||";

/// Validated, ordered seed words
///
/// Holds at least one seed and no blank seed. Seeds are stored exactly as
/// given; use [`SeedList::normalized`] to trim them first. Contents are wiped
/// on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SeedList {
    seeds: Vec<String>,
}

impl SeedList {
    /// Validate seeds without altering them
    ///
    /// # Errors
    ///
    /// - `PasswordError::EmptySeedList` when no seed is given
    /// - `PasswordError::BlankSeed` for the first empty or whitespace-only seed
    pub fn new<I, S>(seeds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seeds: Zeroizing<Vec<String>> =
            Zeroizing::new(seeds.into_iter().map(Into::into).collect());

        if seeds.is_empty() {
            return Err(PasswordError::EmptySeedList);
        }
        if let Some(index) = seeds.iter().position(|seed| seed.trim().is_empty()) {
            return Err(PasswordError::BlankSeed {
                position: index + 1,
            });
        }

        Ok(Self {
            seeds: std::mem::take(&mut *seeds),
        })
    }

    /// Trim surrounding whitespace from every seed, then validate
    ///
    /// # Errors
    ///
    /// Same as [`SeedList::new`].
    pub fn normalized<I, S>(seeds: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trimmed: Zeroizing<Vec<String>> = Zeroizing::new(
            seeds
                .into_iter()
                .map(|seed| seed.as_ref().trim().to_owned())
                .collect(),
        );
        Self::new(trimmed.iter().cloned())
    }

    /// Number of seeds
    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// Always `false`; a `SeedList` holds at least one seed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }

    /// Seeds in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.seeds.iter().map(String::as_str)
    }

    /// Seeds joined with [`SEED_DELIMITER`]
    #[must_use]
    pub fn combine(&self) -> Zeroizing<String> {
        Zeroizing::new(self.seeds.join(SEED_DELIMITER))
    }
}

impl fmt::Debug for SeedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedList")
            .field("count", &self.seeds.len())
            .finish_non_exhaustive()
    }
}
