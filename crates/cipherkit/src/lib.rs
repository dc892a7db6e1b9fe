//! Charset-aware cryptographic and encoding primitives.
//!
//! This crate bundles a small utility surface: charset-constrained secure
//! random strings, time-ordered base-36 identifiers, arbitrary-base numeral
//! conversion between alphabets, MD5/HMAC-SHA256 digest helpers,
//! AES-128-CBC string encryption under two passphrase-derivation schemes,
//! and URL-safe base64 transforms. Everything is synchronous, stateless
//! between calls, and safe to use concurrently; the only shared data is the
//! immutable charset configuration held by [`CipherKit`].
//!
//! ## Cipher determinism
//!
//! [`encrypt`] derives both the key and the initialization vector from the
//! passphrase alone, so encrypting the same plaintext under the same
//! passphrase always yields the same ciphertext. That is a confidentiality
//! weakness preserved deliberately for compatibility with existing data,
//! and none of the schemes authenticate the ciphertext. Compose these
//! primitives with integrity and key management of your own; this crate
//! does not manage key lifecycle, storage, or session security.
//!
//! ## Legacy scheme
//!
//! [`CipherScheme::Legacy`] reproduces the implicit key/IV derivation of
//! the historical crypto library and exists only so previously produced
//! ciphertext stays readable. Use [`CipherScheme::Current`] for new data.
//! Ciphertext carries no scheme tag; callers must remember which scheme
//! produced a value.
//!
//! ## Example
//!
//! ```rust
//! use cipherkit::prelude::*;
//!
//! # fn main() -> Result<(), CryptoError> {
//! let kit = CipherKit::builder().build();
//!
//! // Time-ordered identifier with random base-36 padding.
//! let id = kit.time_ordered_id(1_593_878_946, Some(16), None)?;
//! assert!(id.starts_with("qcycv6"));
//!
//! // Arbitrary-base conversion over the configured alphabets.
//! let charsets = kit.charsets();
//! assert_eq!(convert(&charsets.decimal, &charsets.base36, "12345678")?, "7clzi");
//!
//! // Deterministic AES-128-CBC under the current derivation scheme.
//! let ciphertext = encrypt("Hello-World 123", "My-Key 123", CipherScheme::Current);
//! assert_eq!(decrypt(&ciphertext, "My-Key 123", CipherScheme::Current)?, "Hello-World 123");
//! # Ok(())
//! # }
//! ```

mod alphabet;
mod builder;
mod cipher;
mod convert;
mod encoding;
mod engine;
mod error;
mod hash;
mod random;

pub use alphabet::{
    Alphabet, BASE36_CHARSET, BASE62_CHARSET, Charsets, DECIMAL_CHARSET, HEX_CHARSET,
};
pub use builder::CipherKitBuilder;
pub use cipher::{CipherScheme, decrypt, encrypt};
pub use convert::convert;
pub use encoding::{from_base64, to_base64, url_decode_base64, url_encode_base64};
pub use engine::{CipherKit, uuid};
pub use error::CryptoError;
pub use hash::{hmac_sha256_hex, md5_hex};
pub use random::random_string;

pub mod prelude {
    pub use crate::alphabet::{Alphabet, Charsets};
    pub use crate::builder::CipherKitBuilder;
    pub use crate::cipher::{CipherScheme, decrypt, encrypt};
    pub use crate::convert::convert;
    pub use crate::encoding::{from_base64, to_base64, url_decode_base64, url_encode_base64};
    pub use crate::engine::{CipherKit, uuid};
    pub use crate::error::CryptoError;
    pub use crate::hash::{hmac_sha256_hex, md5_hex};
    pub use crate::random::random_string;
}
