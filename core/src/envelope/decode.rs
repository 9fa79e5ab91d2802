// ## 📂 File: `src/envelope/decode.rs`
//! src/envelope/decode.rs
//!
//! Design notes:
//! - Structural checks only: length and block alignment.
//! - Runs before key derivation so truncated input never pays the KDF cost.
//! - Field order must match `encode.rs` exactly.

use crate::constants::{BLOCK_LEN, HEADER_LEN, IV_LEN, SALT_LEN};
use crate::envelope::types::{Envelope, EnvelopeError};

/// Split a blob into salt, IV and ciphertext.
///
/// # Returns
/// - `Err(TooShort)` if `buf` is shorter than `HEADER_LEN`.
/// - `Err(EmptyCiphertext)` if nothing follows the header.
/// - `Err(Unaligned)` if the body is not a multiple of `BLOCK_LEN`.
pub fn decode_envelope(buf: &[u8]) -> Result<Envelope, EnvelopeError> {
    if buf.len() < HEADER_LEN {
        return Err(EnvelopeError::TooShort { have: buf.len(), need: HEADER_LEN });
    }

    let (salt_bytes, rest) = buf.split_at(SALT_LEN);
    let (iv_bytes, body) = rest.split_at(IV_LEN);

    if body.is_empty() {
        return Err(EnvelopeError::EmptyCiphertext { header: HEADER_LEN });
    }
    if body.len() % BLOCK_LEN != 0 {
        return Err(EnvelopeError::Unaligned { len: body.len(), block: BLOCK_LEN });
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(salt_bytes);
    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);

    Ok(Envelope::new(salt, iv, body.to_vec()))
}
