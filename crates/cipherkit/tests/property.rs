use cipherkit::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn convert_roundtrips_value_between_alphabets(value in any::<u128>()) {
        let charsets = Charsets::standard();

        let decimal = value.to_string();
        let b36 = convert(&charsets.decimal, &charsets.base36, &decimal).unwrap();
        let b62 = convert(&charsets.base36, &charsets.base62, &b36).unwrap();
        let back = convert(&charsets.base62, &charsets.decimal, &b62).unwrap();

        prop_assert_eq!(back, decimal);
    }

    #[test]
    fn convert_collapses_leading_zeros_on_roundtrip(digits in "[0-9]{1,40}") {
        let charsets = Charsets::standard();

        let hex = convert(&charsets.decimal, &charsets.hex, &digits).unwrap();
        let back = convert(&charsets.hex, &charsets.decimal, &hex).unwrap();

        let canonical = digits.trim_start_matches('0');
        let canonical = if canonical.is_empty() { "0" } else { canonical };
        prop_assert_eq!(back, canonical);
    }

    #[test]
    fn cipher_roundtrips_arbitrary_strings(plaintext in ".*", passphrase in ".{0,64}") {
        for scheme in [CipherScheme::Current, CipherScheme::Legacy] {
            let ciphertext = encrypt(&plaintext, &passphrase, scheme);
            let decrypted = decrypt(&ciphertext, &passphrase, scheme).unwrap();
            prop_assert_eq!(&decrypted, &plaintext);
        }
    }

    #[test]
    fn ciphertext_is_lowercase_hex_and_block_aligned(plaintext in ".{0,100}") {
        let ciphertext = encrypt(&plaintext, "key", CipherScheme::Current);

        // 16-byte blocks, two hex chars per byte.
        prop_assert_eq!(ciphertext.len() % 32, 0);
        prop_assert!(!ciphertext.is_empty());
        prop_assert!(ciphertext.chars().all(|ch| ch.is_ascii_hexdigit() && !ch.is_ascii_uppercase()));
    }

    #[test]
    fn url_base64_roundtrips(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = to_base64(&bytes);
        let url_safe = url_encode_base64(&encoded);

        prop_assert!(!url_safe.contains('=') && !url_safe.contains('/') && !url_safe.contains('+'));
        prop_assert_eq!(url_decode_base64(&url_safe), encoded);
    }

    #[test]
    fn random_string_is_total_over_lengths(length in 0usize..512) {
        let charsets = Charsets::standard();
        let value = random_string(&charsets.base36, length).unwrap();

        prop_assert_eq!(value.len(), length);
        prop_assert!(value.chars().all(|ch| charsets.base36.contains(ch)));
    }

    #[test]
    fn identifier_prefix_always_encodes_the_time(
        time in 0i64..4_000_000_000,
        min_length in proptest::option::of(0usize..40),
    ) {
        let kit = CipherKit::new();

        let id = kit.time_ordered_id(time, min_length, None).unwrap();
        let bare = kit.time_ordered_id(time, None, None).unwrap();

        prop_assert!(id.starts_with(&bare));
        if let Some(min) = min_length {
            prop_assert!(id.len() >= min);
        }
    }
}
