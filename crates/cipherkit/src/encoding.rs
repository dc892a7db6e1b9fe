//! Base64 surfaces: the URL-safe transform and plain string conversions.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::CryptoError;

/// Converts a standard base64 string to URL-safe base64.
///
/// Strips `=` padding and swaps `/` for `_` and `+` for `-`. No
/// cryptographic property; purely a character transform.
#[must_use]
pub fn url_encode_base64(input: &str) -> String {
    input
        .chars()
        .filter(|&ch| ch != '=')
        .map(|ch| match ch {
            '/' => '_',
            '+' => '-',
            other => other,
        })
        .collect()
}

/// Converts a URL-safe base64 string back to standard base64.
///
/// Reverses the character substitutions, then re-adds `=` until the length
/// is a multiple of 4. The pad count comes from `length % 4`, not `% 3`;
/// base64 output length is block-of-4 aligned and re-padding from the input
/// byte grouping is not a valid inverse. Empty input passes through
/// unchanged.
#[must_use]
pub fn url_decode_base64(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let mut out: String = input
        .chars()
        .map(|ch| match ch {
            '_' => '/',
            '-' => '+',
            other => other,
        })
        .collect();

    let pad = (4 - out.len() % 4) % 4;
    for _ in 0..pad {
        out.push('=');
    }

    out
}

/// Standard base64 of arbitrary bytes.
#[must_use]
pub fn to_base64(input: impl AsRef<[u8]>) -> String {
    STANDARD.encode(input)
}

/// Decodes standard base64 into a UTF-8 string.
///
/// # Errors
/// * [`CryptoError::InvalidEncoding`] if `input` is not valid base64 or the
///   decoded bytes are not valid UTF-8.
pub fn from_base64(input: &str) -> Result<String, CryptoError> {
    let bytes = STANDARD
        .decode(input)
        .map_err(|err| CryptoError::InvalidEncoding {
            message: format!("invalid base64: {err}").into(),
        })?;

    String::from_utf8(bytes).map_err(|_| CryptoError::InvalidEncoding {
        message: "decoded bytes are not valid UTF-8".into(),
    })
}
