//! Arbitrary-base numeral conversion between alphabets.

use crate::alphabet::Alphabet;
use crate::error::CryptoError;

/// Re-expresses `input`, a numeral in `from`'s base, as a numeral in `to`'s
/// base.
///
/// The value is treated as an arbitrary-precision non-negative integer, so
/// inputs may exceed the native 64-bit range (a full UUID in hex converts
/// fine). Leading zero digits collapse under standard positional rules: the
/// result is the minimum number of digits needed for the value, except that
/// zero (including an all-zero or empty input) becomes the single zero digit
/// of the target alphabet.
///
/// Pure and deterministic, no side effects.
///
/// # Errors
/// * [`CryptoError::InvalidDigit`] if `input` contains a character not
///   present in `from`.
pub fn convert(from: &Alphabet, to: &Alphabet, input: &str) -> Result<String, CryptoError> {
    let src_base = from.len();
    let dst_base = to.len();

    let mut digits = Vec::with_capacity(input.len());
    for ch in input.chars() {
        let value = from.digit_value(ch).ok_or_else(|| CryptoError::InvalidDigit {
            digit: ch,
            alphabet: from.as_str().to_owned(),
        })?;
        digits.push(value);
    }

    // Long division: each pass divides the whole digit vector by the target
    // base and emits one output digit, least significant first.
    let mut out = Vec::new();
    while digits.iter().any(|&d| d != 0) {
        let mut next = Vec::with_capacity(digits.len());
        let mut rem = 0usize;
        for &digit in &digits {
            let acc = rem * src_base + digit;
            let quot = acc / dst_base;
            rem = acc % dst_base;
            if !next.is_empty() || quot != 0 {
                next.push(quot);
            }
        }
        out.push(to.char_at(rem));
        digits = next;
    }

    if out.is_empty() {
        out.push(to.char_at(0));
    }

    Ok(out.iter().rev().collect())
}
