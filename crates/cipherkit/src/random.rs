//! Charset-constrained random string generation from the OS entropy source.

use crate::alphabet::Alphabet;
use crate::error::CryptoError;

/// Generates `length` characters drawn from `alphabet`, seeded by the OS
/// secure random source.
///
/// Selection accumulates a running cursor over the random bytes
/// (`cursor += byte[i]`, character = `alphabet[cursor % len]`). The cursor is
/// carried across positions, never reset; this spreads correlation across
/// positions when the alphabet size does not divide 256. The accumulation is
/// part of the output contract and must not be replaced with independent
/// per-byte reduction.
///
/// # Errors
/// * [`CryptoError::EntropyUnavailable`] if the OS entropy source fails.
///   There is no fallback to non-secure randomness.
pub fn random_string(alphabet: &Alphabet, length: usize) -> Result<String, CryptoError> {
    let mut buf = vec![0u8; length];
    getrandom::fill(&mut buf).map_err(|err| CryptoError::EntropyUnavailable {
        message: format!("system random source failed: {err}").into(),
    })?;

    Ok(spread(alphabet, &buf))
}

/// Maps raw random bytes onto `alphabet` with the running-cursor rule.
fn spread(alphabet: &Alphabet, bytes: &[u8]) -> String {
    let base = alphabet.len() as u64;
    let mut cursor = 0u64;
    let mut out = String::with_capacity(bytes.len());

    for &byte in bytes {
        cursor += u64::from(byte);
        out.push(alphabet.char_at((cursor % base) as usize));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{BASE36_CHARSET, Charsets};

    #[test]
    fn spread_carries_cursor_across_positions() {
        let alphabet = Alphabet::new("ab").unwrap();
        // cursor: 1, 2, 3 -> b, a, b
        assert_eq!(spread(&alphabet, &[1, 1, 1]), "bab");
    }

    #[test]
    fn spread_known_base36_mapping() {
        let alphabet = Alphabet::new(BASE36_CHARSET).unwrap();
        // cursor: 10 -> 'a', 30 -> 'u', 285 % 36 = 33 -> 'x'
        assert_eq!(spread(&alphabet, &[10, 20, 255]), "aux");
    }

    #[test]
    fn spread_of_no_bytes_is_empty() {
        let alphabet = Alphabet::new("ab").unwrap();
        assert_eq!(spread(&alphabet, &[]), "");
    }

    #[test]
    fn output_has_requested_length_and_charset() {
        let charsets = Charsets::standard();
        for length in [0usize, 1, 7, 64, 513] {
            let value = random_string(&charsets.base62, length).unwrap();
            assert_eq!(value.chars().count(), length);
            assert!(value.chars().all(|ch| charsets.base62.contains(ch)));
        }
    }
}
