//! Plain digest helpers: MD5 and keyed HMAC-SHA256 hex digests.

use hmac::{Hmac, Mac};
use md5::{Digest, Md5};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// MD5 hex digest of a string. 32 hex characters.
#[must_use]
pub fn md5_hex(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Keyed HMAC-SHA256 hex digest of a string. 64 hex characters.
///
/// A missing secret hashes under the empty key.
#[must_use]
pub fn hmac_sha256_hex(input: &str, secret: Option<&str>) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.unwrap_or_default().as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(input.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_known_answer() {
        assert_eq!(
            md5_hex("Hello-World 123"),
            "ebb916ce1852817405f22075a89096a9"
        );
    }

    #[test]
    fn hmac_sha256_known_answer() {
        assert_eq!(
            hmac_sha256_hex("Hello-World 123", Some("My-Key 123")),
            "de50d3464d0ded8050cf8a3fb41d654541c6e212bd9d3549b43ee99876cf42f8"
        );
    }

    #[test]
    fn missing_secret_uses_empty_key() {
        let implicit = hmac_sha256_hex("Hello-World 123", None);
        let explicit = hmac_sha256_hex("Hello-World 123", Some(""));
        assert_eq!(implicit, explicit);
        assert_eq!(
            implicit,
            "12530f7f33d893e8e8953be77b7daac6d21c85afc30e640f0bc07a383f46cc1d"
        );
    }
}
