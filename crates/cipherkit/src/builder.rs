use tracing::debug;

use crate::alphabet::{Alphabet, Charsets};
use crate::engine::CipherKit;
use crate::error::CryptoError;

/// A builder merging caller charset overrides over the standard defaults.
///
/// Overrides are validated as they are supplied, so [`CipherKitBuilder::build`]
/// cannot fail and the resulting [`CipherKit`] holds only well-formed
/// alphabets.
///
/// ### Example
/// ```rust
/// use cipherkit::prelude::*;
///
/// # fn main() -> Result<(), CryptoError> {
/// let kit = CipherKit::builder()
///     .base62("0123456789ABCDEFGHJKMNPQRSTVWXYZabcdefghjkmnpqrstvwxyz")?
///     .build();
///
/// assert_eq!(kit.charsets().base62.len(), 54);
/// assert_eq!(kit.charsets().decimal.len(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct CipherKitBuilder {
    decimal: Option<Alphabet>,
    hex: Option<Alphabet>,
    base36: Option<Alphabet>,
    base62: Option<Alphabet>,
}

impl CipherKitBuilder {
    /// Creates a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the decimal alphabet.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidAlphabet`] if `charset` is too short or has
    ///   duplicate characters.
    pub fn decimal(mut self, charset: impl AsRef<str>) -> Result<Self, CryptoError> {
        self.decimal = Some(Alphabet::new(charset)?);
        Ok(self)
    }

    /// Overrides the hexadecimal alphabet.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidAlphabet`] if `charset` is too short or has
    ///   duplicate characters.
    pub fn hex(mut self, charset: impl AsRef<str>) -> Result<Self, CryptoError> {
        self.hex = Some(Alphabet::new(charset)?);
        Ok(self)
    }

    /// Overrides the base-36 alphabet.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidAlphabet`] if `charset` is too short or has
    ///   duplicate characters.
    pub fn base36(mut self, charset: impl AsRef<str>) -> Result<Self, CryptoError> {
        self.base36 = Some(Alphabet::new(charset)?);
        Ok(self)
    }

    /// Overrides the base-62 alphabet.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidAlphabet`] if `charset` is too short or has
    ///   duplicate characters.
    pub fn base62(mut self, charset: impl AsRef<str>) -> Result<Self, CryptoError> {
        self.base62 = Some(Alphabet::new(charset)?);
        Ok(self)
    }

    /// Finalizes the charset configuration and returns the kit.
    ///
    /// Keys without an override keep their standard value.
    #[must_use]
    pub fn build(self) -> CipherKit {
        let overridden = self.decimal.is_some()
            || self.hex.is_some()
            || self.base36.is_some()
            || self.base62.is_some();

        let defaults = Charsets::standard();
        let charsets = Charsets {
            decimal: self.decimal.unwrap_or(defaults.decimal),
            hex: self.hex.unwrap_or(defaults.hex),
            base36: self.base36.unwrap_or(defaults.base36),
            base62: self.base62.unwrap_or(defaults.base62),
        };

        if overridden {
            debug!("charset overrides applied over standard defaults");
        }

        CipherKit::with_charsets(charsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::BASE36_CHARSET;

    #[test]
    fn no_overrides_yields_standard_charsets() {
        let kit = CipherKitBuilder::new().build();
        assert_eq!(*kit.charsets(), Charsets::standard());
    }

    #[test]
    fn override_replaces_one_key_and_keeps_the_rest() {
        let kit = CipherKit::builder().base62("01").unwrap().build();
        assert_eq!(kit.charsets().base62.as_str(), "01");
        assert_eq!(kit.charsets().base36.as_str(), BASE36_CHARSET);
    }

    #[test]
    fn invalid_override_is_rejected_at_set_time() {
        let result = CipherKit::builder().hex("00");
        assert!(matches!(result, Err(CryptoError::InvalidAlphabet { .. })));
    }
}
