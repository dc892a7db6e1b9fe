//! AES-128-CBC string encryption under passphrase-derived key material.
//!
//! Both schemes derive the key *and* the initialization vector from the
//! passphrase alone, so encryption is deterministic: the same plaintext and
//! passphrase always produce the same ciphertext. That property is preserved
//! for wire compatibility with existing data; see the crate-level docs for
//! what it costs.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// AES block size in bytes.
const BLOCK_LEN: usize = 16;

/// AES-128 key length in bytes.
const KEY_LEN: usize = 16;

/// CBC initialization vector length in bytes.
const IV_LEN: usize = 16;

/// Which key/IV derivation produced (or will produce) a ciphertext.
///
/// Ciphertexts are bare hex with no scheme tag. The caller must remember
/// which scheme encrypted a value and pass the same variant to [`decrypt`];
/// the enum exists to force call sites to state that intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherScheme {
    /// Explicit derivation: `key = MD5(passphrase)`,
    /// `iv = MD5(key || passphrase)`. Use this for new data.
    Current,
    /// The implicit single-round derivation of the historical crypto
    /// library. Retained only so previously produced ciphertext stays
    /// readable.
    Legacy,
}

/// Passphrase-derived key and IV, cleared from memory on drop.
///
/// Lives only for the duration of one encrypt/decrypt call, never cached.
#[derive(Zeroize, ZeroizeOnDrop)]
struct KeyMaterial {
    key: [u8; KEY_LEN],
    iv: [u8; IV_LEN],
}

impl CipherScheme {
    fn derive(self, passphrase: &[u8]) -> KeyMaterial {
        match self {
            Self::Current => {
                let key: [u8; KEY_LEN] = Md5::digest(passphrase).into();
                let iv: [u8; IV_LEN] = Md5::new()
                    .chain_update(key)
                    .chain_update(passphrase)
                    .finalize()
                    .into();
                KeyMaterial { key, iv }
            }
            Self::Legacy => {
                // OpenSSL EVP_BytesToKey with MD5, no salt, one round: for a
                // 16-byte key plus 16-byte IV this emits exactly two digest
                // blocks, D1 = MD5(passphrase) and D2 = MD5(D1 || passphrase).
                // Validated against ciphertext recorded from the legacy
                // system; treat as opaque and do not "fix".
                let d1: [u8; KEY_LEN] = Md5::digest(passphrase).into();
                let d2: [u8; IV_LEN] = Md5::new()
                    .chain_update(d1)
                    .chain_update(passphrase)
                    .finalize()
                    .into();
                KeyMaterial { key: d1, iv: d2 }
            }
        }
    }
}

/// Encrypts the UTF-8 bytes of `plaintext` under `passphrase`, returning
/// lowercase hex ciphertext.
///
/// AES-128-CBC with PKCS#7 padding. Deterministic per scheme: the IV is
/// derived, not random, so identical inputs yield identical ciphertext and
/// no integrity is provided. Callers needing semantic security or
/// authentication must layer those on top.
#[must_use]
pub fn encrypt(plaintext: &str, passphrase: &str, scheme: CipherScheme) -> String {
    let material = scheme.derive(passphrase.as_bytes());

    let ciphertext = Aes128CbcEnc::new(&material.key.into(), &material.iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    hex::encode(ciphertext)
}

/// Decrypts hex ciphertext produced by [`encrypt`] under the same
/// `passphrase` and `scheme`.
///
/// # Errors
/// * [`CryptoError::DecryptionFailed`] if the ciphertext is not valid hex,
///   is empty or not a whole number of cipher blocks, fails PKCS#7
///   unpadding, or does not decrypt to valid UTF-8.
pub fn decrypt(
    ciphertext: &str,
    passphrase: &str,
    scheme: CipherScheme,
) -> Result<String, CryptoError> {
    let bytes = hex::decode(ciphertext).map_err(|_| CryptoError::DecryptionFailed {
        message: "ciphertext is not valid hex".into(),
    })?;

    if bytes.is_empty() || bytes.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::DecryptionFailed {
            message: format!(
                "ciphertext length {} is not a positive multiple of the cipher block size",
                bytes.len()
            )
            .into(),
        });
    }

    let material = scheme.derive(passphrase.as_bytes());

    let plaintext = Aes128CbcDec::new(&material.key.into(), &material.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&bytes)
        .map_err(|_| CryptoError::DecryptionFailed {
            message: "padding is invalid after decryption".into(),
        })?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailed {
        message: "decrypted bytes are not valid UTF-8".into(),
    })
}
