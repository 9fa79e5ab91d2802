// ## 📂 File: `src/utils.rs`

use crate::constants::{BLOCK_LEN, HEADER_LEN, MARKER_LEN};

/// Length of `len` bytes after PKCS#7 padding.
/// Always adds between 1 and `BLOCK_LEN` bytes, so an aligned input grows by a full block.
#[inline]
pub fn padded_len(len: usize) -> usize {
    (len / BLOCK_LEN + 1) * BLOCK_LEN
}

/// Total blob length produced when sealing `plaintext_len` bytes.
///
/// `HEADER_LEN + padded_len(MARKER_LEN + plaintext_len)`
#[inline]
pub fn sealed_len(plaintext_len: usize) -> usize {
    HEADER_LEN + padded_len(MARKER_LEN + plaintext_len)
}

/// Short hex preview for logs: at most `max` bytes, with an ellipsis when truncated.
pub fn fmt_bytes(bytes: &[u8], max: usize) -> String {
    if bytes.len() <= max {
        hex::encode(bytes)
    } else {
        format!("{}..", hex::encode(&bytes[..max]))
    }
}
