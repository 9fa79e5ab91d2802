// ## 📂 File: `src/crypto/types.rs`

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroizing;

use crate::constants::{KEY_LEN_32, PBKDF2_ITERATIONS};

/// 32-byte AES-256 key, wiped from memory on drop.
pub type DerivedKey = Zeroizing<[u8; KEY_LEN_32]>;

/// Key-derivation parameters.
///
/// The blob does not record them: a blob only opens with the params it was sealed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    /// PBKDF2 iteration count.
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self { iterations: PBKDF2_ITERATIONS }
    }
}

impl KdfParams {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn validate(&self) -> Result<(), CryptoError> {
        if self.iterations == 0 {
            return Err(CryptoError::InvalidIterations);
        }
        Ok(())
    }
}

/// Errors raised by the KDF, the block cipher and the random source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Salt handed to the KDF is not `SALT_LEN` bytes.
    #[error("invalid salt length: expected={expected}, actual={actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    /// Key handed to the cipher is not `KEY_LEN_32` bytes.
    #[error("invalid key length: expected={expected}, actual={actual}")]
    InvalidKeyLen { expected: usize, actual: usize },

    /// IV handed to the cipher is not `IV_LEN` bytes.
    #[error("invalid IV length: expected={expected}, actual={actual}")]
    InvalidIvLen { expected: usize, actual: usize },

    /// Ciphertext is empty or not block aligned.
    #[error("ciphertext length {len} is not a non-zero multiple of {block}")]
    UnalignedCiphertext { len: usize, block: usize },

    /// PKCS#7 padding did not validate after decryption.
    #[error("wrong password or corrupted data")]
    InvalidPadding,

    /// PBKDF2 with zero rounds is not a KDF.
    #[error("KDF iteration count must be at least 1")]
    InvalidIterations,

    /// The secure random source failed.
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),
}
