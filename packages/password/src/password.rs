//! Derived password value

use crate::charset::CharacterClass;
use std::fmt;
use zeroize::Zeroizing;

/// A derived password, wiped from memory on drop
///
/// `Debug` output is redacted; use [`DerivedPassword::as_str`] to read it.
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedPassword(Zeroizing<String>);

impl DerivedPassword {
    pub(crate) fn from_ascii(chars: &[u8]) -> Self {
        let mut password = Zeroizing::new(String::with_capacity(chars.len()));
        password.extend(chars.iter().map(|&byte| char::from(byte)));
        Self(password)
    }

    /// The password text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (all ASCII, so also the byte length)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the password is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every character class occurs at least once
    #[must_use]
    pub fn covers_all_classes(&self) -> bool {
        CharacterClass::ALL
            .iter()
            .all(|&class| self.0.chars().any(|c| CharacterClass::of(c) == Some(class)))
    }
}

impl AsRef<str> for DerivedPassword {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for DerivedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedPassword(<{} chars redacted>)", self.len())
    }
}

impl seedpass_common::NotResult for DerivedPassword {}
