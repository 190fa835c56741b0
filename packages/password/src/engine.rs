//! Deterministic derivation engine
//!
//! `seeds -> "|||"-joined -> SHA-256 -> class guarantees -> fill -> shuffle`.
//!
//! Every step is a pure function of the digest and the requested length.
//! Nothing here logs, touches I/O or consults a random source.

use crate::charset::{CharacterClass, pick_any};
use crate::{DerivedPassword, PasswordError, Result, SeedList};
use seedpass_hashing::{SHA256_DIGEST_LEN, sha256_digest};
use zeroize::Zeroizing;

/// Shortest password that can hold one character of every class
pub const MIN_LENGTH: usize = CharacterClass::ALL.len();

/// SHA-256 digest of the combined seeds
pub type SeedDigest = [u8; SHA256_DIGEST_LEN];

/// Derive the password for `seeds` at `length`
///
/// # Errors
///
/// Returns `PasswordError::LengthBelowMinimum` when `length < MIN_LENGTH`.
pub fn derive_password(seeds: &SeedList, length: usize) -> Result<DerivedPassword> {
    check_length(length)?;

    let combined = seeds.combine();
    let digest = Zeroizing::new(sha256_digest(combined.as_bytes()));

    Ok(arrange(&digest, length))
}

/// Derive the password from an already computed seed digest
///
/// # Errors
///
/// Returns `PasswordError::LengthBelowMinimum` when `length < MIN_LENGTH`.
pub fn derive_from_digest(digest: &SeedDigest, length: usize) -> Result<DerivedPassword> {
    check_length(length)?;
    Ok(arrange(digest, length))
}

/// Reject lengths that cannot carry the class guarantee
///
/// # Errors
///
/// Returns `PasswordError::LengthBelowMinimum` when `length < MIN_LENGTH`.
pub fn check_length(length: usize) -> Result<()> {
    if length < MIN_LENGTH {
        return Err(PasswordError::LengthBelowMinimum {
            minimum: MIN_LENGTH,
            requested: length,
        });
    }
    Ok(())
}

/// Build and permute the password; `length` must already be checked
pub(crate) fn arrange(digest: &SeedDigest, length: usize) -> DerivedPassword {
    let mut chars = Zeroizing::new(Vec::with_capacity(length));

    // Positions 0..4 hold one character of each class, in class order.
    chars.extend(
        CharacterClass::ALL
            .iter()
            .zip(digest.iter())
            .map(|(class, &byte)| class.pick(byte)),
    );

    // Past the end of the digest, bytes are reused cyclically.
    chars.extend((MIN_LENGTH..length).map(|i| pick_any(digest[i % SHA256_DIGEST_LEN])));

    shuffle(&mut chars, digest);

    DerivedPassword::from_ascii(&chars)
}

/// Fisher-Yates walk with the swap index taken from the digest
fn shuffle(chars: &mut [u8], digest: &SeedDigest) {
    for i in (1..chars.len()).rev() {
        let hash_index = (i % SHA256_DIGEST_LEN + usize::from(digest[i % SHA256_DIGEST_LEN]))
            % SHA256_DIGEST_LEN;
        let j = (usize::from(digest[hash_index])
            + usize::from(digest[(hash_index + 1) % SHA256_DIGEST_LEN]))
            % (i + 1);
        chars.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_digest() -> SeedDigest {
        let mut digest = [0u8; SHA256_DIGEST_LEN];
        for (i, byte) in digest.iter_mut().enumerate() {
            *byte = u8::try_from(i).unwrap_or_default();
        }
        digest
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let digest = counting_digest();
        let mut chars: Vec<u8> = (0u8..40).collect();
        shuffle(&mut chars, &digest);

        let mut sorted = chars.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0u8..40).collect::<Vec<_>>());
        assert_ne!(chars, (0u8..40).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_of_single_char_is_noop() {
        let mut chars = vec![b'x'];
        shuffle(&mut chars, &counting_digest());
        assert_eq!(chars, b"x");
    }

    #[test]
    fn zero_digest_arrangement() {
        // All-zero digest: guarantees are a, A, 0, ! and every fill is 'a'.
        // Every swap index is 0.
        let password = arrange(&[0u8; SHA256_DIGEST_LEN], 6);
        assert_eq!(password.as_str(), "A0!aaa");
    }

    #[test]
    fn check_length_floor() {
        assert!(check_length(MIN_LENGTH).is_ok());
        assert!(matches!(
            check_length(3),
            Err(PasswordError::LengthBelowMinimum {
                minimum: 4,
                requested: 3
            })
        ));
        assert!(check_length(0).is_err());
    }
}
