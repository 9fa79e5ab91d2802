use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::crypto::CryptoError;
use crate::envelope::EnvelopeError;

/// Message shared by every "the key did not open this blob" failure.
pub const DECRYPTION_FAILED_MSG: &str = "wrong password or corrupted data";

/// Unified engine error.
/// - `From<T>` impls let `?` lift crypto and framing errors.
/// - `InvalidPadding` and `AuthenticationFailed` are deliberately reported alike;
///   callers cannot tell a wrong password from corrupted ciphertext.
#[derive(Debug, Error)]
pub enum SleError {
    /// Salt handed to key derivation is not 16 bytes.
    #[error("invalid salt length: expected={expected}, actual={actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    /// Blob is truncated or its ciphertext is not block aligned.
    #[error("cannot decrypt, data corrupted or truncated: {0}")]
    MalformedBlob(EnvelopeError),

    /// PKCS#7 padding rejected after decryption.
    #[error("{}", DECRYPTION_FAILED_MSG)]
    InvalidPadding,

    /// Padding was fine but the marker is missing.
    #[error("{}", DECRYPTION_FAILED_MSG)]
    AuthenticationFailed,

    /// `IoError`: storage read/write failure, original cause kept.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The secure random source failed. Not recoverable by retrying the call.
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    /// Any other primitive failure (key/IV length, KDF params).
    #[error("crypto error: {0}")]
    Crypto(CryptoError),
}

impl SleError {
    /// True for the two "wrong password or corrupted data" outcomes.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(self, SleError::InvalidPadding | SleError::AuthenticationFailed)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SleError::Io { path: path.into(), source }
    }
}

impl From<CryptoError> for SleError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidSaltLength { expected, actual } => {
                SleError::InvalidSaltLength { expected, actual }
            }
            CryptoError::InvalidPadding => SleError::InvalidPadding,
            CryptoError::RandomSource(msg) => SleError::RandomSource(msg),
            // Only reachable if framing was bypassed; same meaning as a framing error.
            CryptoError::UnalignedCiphertext { len, block } => {
                SleError::MalformedBlob(EnvelopeError::Unaligned { len, block })
            }
            other => SleError::Crypto(other),
        }
    }
}

impl From<EnvelopeError> for SleError {
    fn from(e: EnvelopeError) -> Self {
        SleError::MalformedBlob(e)
    }
}
