//! sle-core
//!
//! Password-based envelope encryption.
//! PBKDF2-HMAC-SHA256 key derivation, AES-256-CBC with PKCS#7 padding,
//! and a marker check to detect a wrong password.
//!
//! Blob: `salt (16) || iv (16) || ciphertext`.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

pub mod crypto;
pub mod envelope;
pub mod telemetry;

// Engine
pub mod sle;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::crypto::{derive_key, derive_key_with, DerivedKey, KdfParams};
    pub use crate::sle::{decrypt, encrypt, Sle};
    pub use crate::telemetry::{Stage, TelemetrySnapshot};
    pub use crate::types::SleError;
}

pub use crypto::{derive_key, KdfParams};
pub use sle::{decrypt, encrypt, Sle};
pub use types::SleError;
