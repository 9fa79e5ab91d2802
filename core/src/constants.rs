// ## 📂 File: `src/constants.rs`

//! Format constants shared by the KDF, the cipher and the blob framing.
//!
//! Every value here is part of the on-disk format. Changing any of them
//! makes previously written blobs undecryptable (the blob carries no version).

/// Salt length in bytes, stored in clear at offset 0..16.
pub const SALT_LEN: usize = 16;

/// AES-CBC initialization vector length, stored in clear at offset 16..32.
pub const IV_LEN: usize = 16;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES-256 key length.
pub const KEY_LEN_32: usize = 32;

/// Clear-text prefix of every blob: salt || iv.
pub const HEADER_LEN: usize = SALT_LEN + IV_LEN;

/// PBKDF2-HMAC-SHA256 work factor for the default format.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Marker prepended to the plaintext before padding.
/// Finding it after decryption means the key (and so the password) was right.
pub const MARKER: [u8; 7] = *b"__SLE__";

/// Marker length in bytes.
pub const MARKER_LEN: usize = MARKER.len();
