// ## src/crypto/kdf.rs

//! crypto/kdf.rs
//! Password-based key derivation: PBKDF2-HMAC-SHA256, 16-byte salt, 32-byte key.
//!
//! Design:
//! - key = PBKDF2(HMAC-SHA256, password, salt, iterations, 32)
//! - Deterministic: decrypt recomputes the key from the salt stored in the blob.
//!
//! Security notes:
//! - The salt must be fresh per blob (see `crypto::random`).
//! - The iteration count is the only brute-force cost; never lower the default
//!   for data at rest.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::constants::{KEY_LEN_32, SALT_LEN};
use crate::crypto::types::{CryptoError, DerivedKey, KdfParams};

/// Derive the 32-byte AES key with the default work factor.
///
/// Errors:
/// - `salt` not exactly `SALT_LEN` bytes -> `CryptoError::InvalidSaltLength`.
#[inline]
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<DerivedKey, CryptoError> {
    derive_key_with(password, salt, &KdfParams::default())
}

/// Derive the 32-byte AES key with explicit parameters.
pub fn derive_key_with(
    password: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<DerivedKey, CryptoError> {
    if salt.len() != SALT_LEN {
        return Err(CryptoError::InvalidSaltLength {
            expected: SALT_LEN,
            actual: salt.len(),
        });
    }
    params.validate()?;

    let mut key = Zeroizing::new([0u8; KEY_LEN_32]);
    pbkdf2_hmac::<Sha256>(password, salt, params.iterations, &mut key[..]);
    Ok(key)
}
