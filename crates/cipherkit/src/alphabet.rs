//! Alphabet and charset configuration types.

use crate::error::CryptoError;
use serde::Deserialize;
use std::fmt;

/// Decimal digits.
pub const DECIMAL_CHARSET: &str = "0123456789";

/// Hexadecimal digits, lowercase.
pub const HEX_CHARSET: &str = "0123456789abcdef";

/// Digits and lowercase letters.
pub const BASE36_CHARSET: &str = "0123456789abcdefghijklmnopqrstuvwxyz";

/// Digits, uppercase letters, lowercase letters.
pub const BASE62_CHARSET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// An ordered set of unique characters defining a numeral base.
///
/// Character position defines digit value: `alphabet[0]` is the zero digit.
/// Validation happens once at construction, so every other component can
/// treat an `Alphabet` as proof of a well-formed charset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Alphabet {
    chars: Vec<char>,
    source: String,
}

impl Alphabet {
    /// Validates `charset` and wraps it as an [`Alphabet`].
    ///
    /// # Errors
    /// * [`CryptoError::InvalidAlphabet`] if the charset is shorter than two
    ///   characters or contains a duplicate.
    pub fn new(charset: impl AsRef<str>) -> Result<Self, CryptoError> {
        let source = charset.as_ref().to_owned();
        let chars: Vec<char> = source.chars().collect();

        if chars.len() < 2 {
            return Err(CryptoError::InvalidAlphabet {
                message: format!(
                    "alphabet needs at least 2 characters, got {}",
                    chars.len()
                )
                .into(),
            });
        }

        for (index, ch) in chars.iter().enumerate() {
            if chars[..index].contains(ch) {
                return Err(CryptoError::InvalidAlphabet {
                    message: format!("duplicate character {ch:?}").into(),
                });
            }
        }

        Ok(Self { chars, source })
    }

    /// Number of characters, i.e. the numeral base.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Character carrying digit value `value`.
    ///
    /// # Panics
    /// If `value >= self.len()`. Internal callers always reduce modulo
    /// [`Alphabet::len`] first.
    #[must_use]
    pub fn char_at(&self, value: usize) -> char {
        self.chars[value]
    }

    /// Digit value of `ch`, or `None` when `ch` is not in this alphabet.
    #[must_use]
    pub fn digit_value(&self, ch: char) -> Option<usize> {
        self.chars.iter().position(|&c| c == ch)
    }

    /// `true` when `ch` is a member of this alphabet.
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.digit_value(ch).is_some()
    }

    /// The charset as originally supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = CryptoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = CryptoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The four named alphabets supplied to charset-aware operations.
///
/// Immutable once built. Deserializing a partial mapping fills the missing
/// keys from the standard set, which gives file-based configuration the same
/// merge-over-defaults semantics as [`crate::CipherKitBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Charsets {
    pub decimal: Alphabet,
    pub hex: Alphabet,
    pub base36: Alphabet,
    pub base62: Alphabet,
}

impl Charsets {
    /// The standard charset set: decimal, hex, base36, and base62.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            decimal: Alphabet::new(DECIMAL_CHARSET).expect("standard decimal charset is valid"),
            hex: Alphabet::new(HEX_CHARSET).expect("standard hex charset is valid"),
            base36: Alphabet::new(BASE36_CHARSET).expect("standard base36 charset is valid"),
            base62: Alphabet::new(BASE62_CHARSET).expect("standard base62 charset is valid"),
        }
    }
}

impl Default for Charsets {
    fn default() -> Self {
        Self::standard()
    }
}
