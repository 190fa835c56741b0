//! Character classes a derived password is drawn from
//!
//! The alphabets and their order are part of the derivation protocol:
//! reordering any of them changes every password.

/// Lowercase ASCII letters
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits
pub const DIGITS: &[u8] = b"0123456789";

/// Symbols
pub const SYMBOLS: &[u8] = b"!@#$%&*-+=?";

/// All four classes concatenated in class order
pub const ALL_CHARS: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*-+=?";

/// One of the four disjoint character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// `a-z`
    Lowercase,
    /// `A-Z`
    Uppercase,
    /// `0-9`
    Digit,
    /// `!@#$%&*-+=?`
    Symbol,
}

impl CharacterClass {
    /// Every class, in the order their guaranteed characters are placed
    pub const ALL: [Self; 4] = [Self::Lowercase, Self::Uppercase, Self::Digit, Self::Symbol];

    /// The characters of this class
    #[must_use]
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    /// Class of `c`, or `None` when it is outside the password alphabet
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;
        Self::ALL
            .into_iter()
            .find(|class| class.alphabet().contains(&byte))
    }

    /// Character of this class selected by a digest byte
    pub(crate) fn pick(self, byte: u8) -> u8 {
        pick(self.alphabet(), byte)
    }
}

/// Character of the full alphabet selected by a digest byte
pub(crate) fn pick_any(byte: u8) -> u8 {
    pick(ALL_CHARS, byte)
}

fn pick(alphabet: &[u8], byte: u8) -> u8 {
    alphabet[usize::from(byte) % alphabet.len()]
}
