// ## 📂 File: `src/envelope/types.rs`

//! envelope/types.rs
//! In-memory view of an encrypted blob.
//!
//! Wire layout (bit-exact, no version byte, no length prefix, no tag):
//! - 0..16   salt
//! - 16..32  IV
//! - 32..end AES-256-CBC ciphertext, PKCS#7 padded, non-zero multiple of 16

use std::fmt;
use thiserror::Error;

use crate::constants::{BLOCK_LEN, HEADER_LEN, IV_LEN, SALT_LEN};
use crate::utils::fmt_bytes;

/// Parsed blob: clear-text salt and IV plus the ciphertext body.
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: [u8; SALT_LEN],
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(salt: [u8; SALT_LEN], iv: [u8; IV_LEN], ciphertext: Vec<u8>) -> Self {
        Self { salt, iv, ciphertext }
    }

    /// Length of the encoded blob.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len()
    }

    /// Number of cipher blocks in the body.
    pub fn blocks(&self) -> usize {
        self.ciphertext.len() / BLOCK_LEN
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelope")
            .field("salt", &hex::encode(self.salt))
            .field("iv", &hex::encode(self.iv))
            .field("ciphertext", &fmt_bytes(&self.ciphertext, 8))
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}

/// Framing errors. All of them mean "cannot decrypt, data corrupted or truncated".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    /// Fewer bytes than the clear-text salt + IV prefix.
    #[error("blob too short: have={have}, need at least {need}")]
    TooShort { have: usize, need: usize },

    /// Nothing after the salt + IV prefix.
    #[error("blob has no ciphertext after the {header}-byte header")]
    EmptyCiphertext { header: usize },

    /// Ciphertext body is not block aligned.
    #[error("ciphertext length {len} is not a multiple of the {block}-byte block size")]
    Unaligned { len: usize, block: usize },
}
