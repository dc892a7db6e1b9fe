use std::sync::Arc;
use uuid::Uuid;

use crate::alphabet::{Alphabet, Charsets};
use crate::builder::CipherKitBuilder;
use crate::convert::convert;
use crate::error::CryptoError;
use crate::random::random_string;

/// Fixed output length of [`CipherKit::short_uuid`]. A 128-bit value needs
/// at most 25 base-36 digits.
const SHORT_UUID_LEN: usize = 25;

/// Charset-aware operations over an immutable charset configuration.
///
/// `CipherKit` wraps its [`Charsets`] in an [`Arc`], making it cheaply
/// clonable and safe to share across threads or asynchronous tasks. All
/// operations are synchronous and keep no state between calls; the only
/// shared data is the read-only charset configuration fixed at build time.
///
/// ### Example
/// ```rust
/// use cipherkit::prelude::*;
///
/// # fn main() -> Result<(), CryptoError> {
/// let kit = CipherKit::new();
///
/// // Base-36 timestamp identifier, padded with secure randomness.
/// let id = kit.time_ordered_id(1_593_878_946, Some(16), None)?;
/// assert!(id.starts_with("qcycv6"));
/// assert_eq!(id.len(), 16);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CipherKit {
    inner: Arc<Charsets>,
}

impl Default for CipherKit {
    fn default() -> Self {
        Self::new()
    }
}

impl CipherKit {
    /// Returns a new [`CipherKitBuilder`] for charset overrides.
    #[must_use]
    pub fn builder() -> CipherKitBuilder {
        CipherKitBuilder::new()
    }

    /// A kit over the standard charsets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_charsets(Charsets::standard())
    }

    /// A kit over an explicit, already-validated charset configuration.
    #[must_use]
    pub fn with_charsets(charsets: Charsets) -> Self {
        Self { inner: Arc::new(charsets) }
    }

    /// The charset configuration this kit operates on.
    #[must_use]
    pub fn charsets(&self) -> &Charsets {
        &self.inner
    }

    /// Generates a time-ordered identifier: the base-36 encoding of
    /// `unix_time` (seconds), optionally re-based onto a custom epoch and
    /// padded to `min_length` with secure base-36 randomness.
    ///
    /// The time prefix is not left-padded, so strict lexicographic
    /// sortability only holds between identifiers whose encoded times have
    /// equal length; callers needing it across magnitudes must fix the
    /// time width themselves.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidTime`] if the epoch-shifted time is negative.
    /// * [`CryptoError::EntropyUnavailable`] if random padding is requested
    ///   and the OS entropy source fails.
    pub fn time_ordered_id(
        &self,
        unix_time: i64,
        min_length: Option<usize>,
        epoch_offset: Option<i64>,
    ) -> Result<String, CryptoError> {
        let effective = epoch_offset.map_or(unix_time, |offset| unix_time - offset);
        if effective < 0 {
            return Err(CryptoError::InvalidTime { effective });
        }

        let charsets = self.charsets();
        let mut id = convert(&charsets.decimal, &charsets.base36, &effective.to_string())?;

        if let Some(min_length) = min_length {
            if id.len() < min_length {
                id.push_str(&random_string(&charsets.base36, min_length - id.len())?);
            }
        }

        Ok(id)
    }

    /// Base-36 rendering of an integer, via the configured alphabets.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidDigit`] if the configured decimal alphabet
    ///   cannot express `num`'s decimal rendering (possible only with a
    ///   non-standard override).
    pub fn int_to_base36(&self, num: u64) -> Result<String, CryptoError> {
        let charsets = self.charsets();
        convert(&charsets.decimal, &charsets.base36, &num.to_string())
    }

    /// Integer value of a base-36 numeral string.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidDigit`] if `input` has characters outside the
    ///   base-36 alphabet.
    /// * [`CryptoError::InvalidEncoding`] if the value exceeds the unsigned
    ///   64-bit range.
    pub fn base36_to_int(&self, input: &str) -> Result<u64, CryptoError> {
        let charsets = self.charsets();
        let decimal = convert(&charsets.base36, &charsets.decimal, input)?;
        decimal.parse().map_err(|_| CryptoError::InvalidEncoding {
            message: format!("base36 value {input:?} exceeds the 64-bit range").into(),
        })
    }

    /// 25-character base-36 rendering of a fresh UUIDv4.
    ///
    /// The UUID bytes are hex-encoded, converted hex→base36, and
    /// right-padded with the base-36 zero digit to a fixed width.
    ///
    /// # Errors
    /// * [`CryptoError::InvalidDigit`] only with a hex alphabet override
    ///   that cannot express lowercase hex.
    pub fn short_uuid(&self) -> Result<String, CryptoError> {
        let charsets = self.charsets();
        let hex_form = hex::encode(Uuid::new_v4().as_bytes());
        let mut short = convert(&charsets.hex, &charsets.base36, &hex_form)?;

        while short.len() < SHORT_UUID_LEN {
            short.push(charsets.base36.char_at(0));
        }

        Ok(short)
    }

    /// Generates `length` characters drawn from `alphabet` using the OS
    /// secure random source. See [`crate::random_string`].
    ///
    /// # Errors
    /// * [`CryptoError::EntropyUnavailable`] if the OS entropy source fails.
    #[allow(clippy::unused_self)]
    pub fn random_string(
        &self,
        alphabet: &Alphabet,
        length: usize,
    ) -> Result<String, CryptoError> {
        random_string(alphabet, length)
    }
}

/// Random UUIDv4 in canonical hyphenated form.
#[must_use]
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_time_without_padding() {
        let kit = CipherKit::new();
        assert_eq!(kit.time_ordered_id(1_593_878_946, None, None).unwrap(), "qcycv6");
    }

    #[test]
    fn pads_to_min_length_with_base36_randomness() {
        let kit = CipherKit::new();
        let id = kit.time_ordered_id(1_593_878_946, Some(16), None).unwrap();
        assert_eq!(id.len(), 16);
        assert!(id.starts_with("qcycv6"));
        assert!(id.chars().all(|ch| kit.charsets().base36.contains(ch)));
    }

    #[test]
    fn min_length_shorter_than_time_adds_nothing() {
        let kit = CipherKit::new();
        assert_eq!(kit.time_ordered_id(1_593_878_946, Some(3), None).unwrap(), "qcycv6");
    }

    #[test]
    fn epoch_offset_shortens_encoded_time() {
        let kit = CipherKit::new();
        // Epoch zero at 2020-01-01T00:00:00Z.
        let id = kit.time_ordered_id(1_593_878_946, None, Some(1_577_836_800)).unwrap();
        assert_eq!(id, "9ju76");
    }

    #[test]
    fn negative_effective_time_is_rejected() {
        let kit = CipherKit::new();
        let result = kit.time_ordered_id(100, None, Some(200));
        assert!(matches!(result, Err(CryptoError::InvalidTime { effective: -100 })));
    }

    #[test]
    fn time_prefixes_order_for_equal_lengths() {
        let kit = CipherKit::new();
        let earlier = kit.time_ordered_id(1_593_878_946, None, None).unwrap();
        let later = kit.time_ordered_id(1_593_878_999, None, None).unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn int_and_base36_wrappers_are_inverse() {
        let kit = CipherKit::new();
        assert_eq!(kit.int_to_base36(12_345_678).unwrap(), "7clzi");
        assert_eq!(kit.base36_to_int("7clzi").unwrap(), 12_345_678);
        assert_eq!(kit.base36_to_int("0").unwrap(), 0);
    }

    #[test]
    fn base36_to_int_rejects_oversized_values() {
        let kit = CipherKit::new();
        // 26 base-36 digits is past u64 (and past u128).
        let result = kit.base36_to_int(&"z".repeat(26));
        assert!(matches!(result, Err(CryptoError::InvalidEncoding { .. })));
    }

    #[test]
    fn uuid_is_canonical() {
        let value = uuid();
        assert_eq!(value.len(), 36);
        assert_eq!(value.chars().filter(|&ch| ch == '-').count(), 4);
    }

    #[test]
    fn short_uuid_is_fixed_width_base36() {
        let kit = CipherKit::new();
        let short = kit.short_uuid().unwrap();
        assert_eq!(short.len(), 25);
        assert!(short.chars().all(|ch| kit.charsets().base36.contains(ch)));
    }

    #[test]
    fn short_uuids_differ() {
        let kit = CipherKit::new();
        assert_ne!(kit.short_uuid().unwrap(), kit.short_uuid().unwrap());
    }
}
