//! # Crypto Errors
//!
//! This module defines the [`CryptoError`] enum used throughout the crate for
//! reporting alphabet, conversion, entropy, and cipher failures.

use std::borrow::Cow;

/// A specialized error enum for cipherkit failures.
///
/// Every error is raised synchronously at the point of detection. Nothing is
/// retried internally and no partial results are returned on failure.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The alphabet has fewer than two characters or contains duplicates.
    #[error("Invalid alphabet: {message}")]
    InvalidAlphabet { message: Cow<'static, str> },

    /// A numeral string contains a character outside its source alphabet.
    #[error("Invalid digit {digit:?} for alphabet {alphabet:?}")]
    InvalidDigit { digit: char, alphabet: String },

    /// The effective timestamp is negative and cannot be encoded.
    ///
    /// Happens when an epoch offset is later than the supplied time.
    #[error("Invalid time: effective timestamp {effective} is negative")]
    InvalidTime { effective: i64 },

    /// The secure random source failed to supply entropy.
    ///
    /// Never degraded to a non-secure source.
    #[error("Entropy unavailable: {message}")]
    EntropyUnavailable { message: Cow<'static, str> },

    /// Malformed hex, wrong block length, or invalid padding after decryption.
    #[error("Decryption failed: {message}")]
    DecryptionFailed { message: Cow<'static, str> },

    /// Input that is not valid base64, or not valid UTF-8 once decoded.
    #[error("Invalid encoding: {message}")]
    InvalidEncoding { message: Cow<'static, str> },
}
