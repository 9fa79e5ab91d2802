// ## 📂 File: `src/sle/mod.rs`

//! src/sle/mod.rs
//! Cipher envelope: password in, self-contained blob out, and back.
//!
//! Seal:
//! 1. fresh 16-byte salt and 16-byte IV from a CSPRNG
//! 2. key = PBKDF2-HMAC-SHA256(password, salt)
//! 3. AES-256-CBC(key, iv, PKCS#7(MARKER || plaintext))
//! 4. blob = salt || iv || ciphertext
//!
//! Open reverses it and fails closed: framing -> padding -> marker.
//! Calls share no state; one `Sle` may be used from many threads at once.

pub mod file;

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::constants::{MARKER, MARKER_LEN};
use crate::crypto::{decrypt_cbc, derive_key_with, encrypt_cbc, salt_and_iv, DerivedKey, KdfParams};
use crate::envelope::{decode_envelope, encode_envelope, Envelope};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::SleError;
use crate::utils::fmt_bytes;

pub use file::*;

/// Password-bound encryption engine.
///
/// Holds only the password and KDF parameters; every call derives its own key
/// from its own salt.
#[derive(Clone)]
pub struct Sle {
    password: Zeroizing<Vec<u8>>,
    params: KdfParams,
}

impl fmt::Debug for Sle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sle")
            .field("password", &format_args!("[REDACTED {} bytes]", self.password.len()))
            .field("params", &self.params)
            .finish()
    }
}

impl Sle {
    /// Engine with the default (interoperable) KDF parameters.
    pub fn new(password: impl Into<Vec<u8>>) -> Self {
        Self::with_params(password, KdfParams::default())
    }

    pub fn with_params(password: impl Into<Vec<u8>>, params: KdfParams) -> Self {
        Self {
            password: Zeroizing::new(password.into()),
            params,
        }
    }

    /// Derive the key this engine would use for `salt`.
    pub fn derive_key(&self, salt: &[u8]) -> Result<DerivedKey, SleError> {
        Ok(derive_key_with(&self.password, salt, &self.params)?)
    }

    /// Encrypt `plaintext` into `salt || iv || ciphertext`.
    ///
    /// Two calls with the same input produce different blobs.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, SleError> {
        self.encrypt_with_rng(&mut OsRng, plaintext)
    }

    /// Encrypt drawing salt and IV from `rng` instead of the OS CSPRNG.
    pub fn encrypt_with_rng<R>(&self, rng: &mut R, plaintext: &[u8]) -> Result<Vec<u8>, SleError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let (blob, _) = self.seal_with(rng, plaintext)?;
        Ok(blob)
    }

    /// Encrypt and report counters and stage timings.
    pub fn encrypt_with_telemetry(
        &self,
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, TelemetrySnapshot), SleError> {
        self.seal_with(&mut OsRng, plaintext)
    }

    /// Recover the plaintext from a blob produced by `encrypt`.
    ///
    /// Errors:
    /// - `MalformedBlob`: shorter than 32 bytes, or ciphertext empty / unaligned
    /// - `InvalidPadding` / `AuthenticationFailed`: wrong password or corrupted data
    pub fn decrypt(&self, blob: &[u8]) -> Result<Vec<u8>, SleError> {
        let (plaintext, _) = self.decrypt_with_telemetry(blob)?;
        Ok(plaintext)
    }

    /// Decrypt and report counters and stage timings.
    pub fn decrypt_with_telemetry(
        &self,
        blob: &[u8],
    ) -> Result<(Vec<u8>, TelemetrySnapshot), SleError> {
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters::default();

        let plaintext = match self.open(blob, &mut timer, &mut counters) {
            Ok(pt) => pt,
            Err(e) => {
                warn!(blob_len = blob.len(), error = %e, "decryption rejected");
                return Err(e);
            }
        };

        timer.finish();
        Ok((plaintext, TelemetrySnapshot::from(&counters, &timer)))
    }

    fn seal_with<R>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<(Vec<u8>, TelemetrySnapshot), SleError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut timer = TelemetryTimer::new();
        let mut counters = TelemetryCounters::default();
        let blob = self.seal(rng, plaintext, &mut timer, &mut counters)?;
        timer.finish();
        Ok((blob, TelemetrySnapshot::from(&counters, &timer)))
    }

    pub(crate) fn seal<R>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        timer: &mut TelemetryTimer,
        counters: &mut TelemetryCounters,
    ) -> Result<Vec<u8>, SleError>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let (salt, iv) = timer.time(Stage::Random, || salt_and_iv(rng))?;
        let key = timer.time(Stage::DeriveKey, || self.derive_key(&salt))?;

        let mut framed = Zeroizing::new(Vec::with_capacity(MARKER_LEN + plaintext.len()));
        framed.extend_from_slice(&MARKER);
        framed.extend_from_slice(plaintext);

        let ciphertext = timer.time(Stage::Encrypt, || encrypt_cbc(&key[..], &iv, &framed))?;
        counters.add_encrypt(plaintext.len(), ciphertext.len());

        let envelope = Envelope::new(salt, iv, ciphertext);
        let blob = timer.time(Stage::Encode, || encode_envelope(&envelope));

        debug!(
            plaintext_len = plaintext.len(),
            blob_len = blob.len(),
            salt = %fmt_bytes(&salt, 4),
            "sealed blob"
        );
        Ok(blob)
    }

    pub(crate) fn open(
        &self,
        blob: &[u8],
        timer: &mut TelemetryTimer,
        counters: &mut TelemetryCounters,
    ) -> Result<Vec<u8>, SleError> {
        // Structure first: malformed input never reaches the KDF.
        let envelope = timer.time(Stage::Decode, || decode_envelope(blob))?;
        let key = timer.time(Stage::DeriveKey, || self.derive_key(&envelope.salt))?;

        let framed = Zeroizing::new(timer.time(Stage::Decrypt, || {
            decrypt_cbc(&key[..], &envelope.iv, &envelope.ciphertext)
        })?);

        let plaintext = timer.time(Stage::Verify, || strip_marker(&framed))?;
        counters.add_decrypt(plaintext.len(), envelope.ciphertext.len());

        debug!(
            blob_len = blob.len(),
            plaintext_len = plaintext.len(),
            salt = %fmt_bytes(&envelope.salt, 4),
            "opened blob"
        );
        Ok(plaintext)
    }
}

/// Return the bytes after `MARKER`, or `AuthenticationFailed` if it is absent.
fn strip_marker(framed: &[u8]) -> Result<Vec<u8>, SleError> {
    framed
        .strip_prefix(&MARKER[..])
        .map(<[u8]>::to_vec)
        .ok_or(SleError::AuthenticationFailed)
}

/// One-shot encrypt with the default KDF parameters.
pub fn encrypt(password: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, SleError> {
    Sle::new(password).encrypt(plaintext)
}

/// One-shot decrypt with the default KDF parameters.
pub fn decrypt(password: &[u8], blob: &[u8]) -> Result<Vec<u8>, SleError> {
    Sle::new(password).decrypt(blob)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_marker_requires_exact_prefix() {
        assert_eq!(strip_marker(b"__SLE__abc").unwrap(), b"abc".to_vec());
        assert_eq!(strip_marker(b"__SLE__").unwrap(), Vec::<u8>::new());
        assert!(matches!(strip_marker(b"__SLX__abc"), Err(SleError::AuthenticationFailed)));
        assert!(matches!(strip_marker(b"__SL"), Err(SleError::AuthenticationFailed)));
    }

    #[test]
    fn debug_redacts_password() {
        let sle = Sle::new(b"hunter2".to_vec());
        let dbg = format!("{:?}", sle);
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("REDACTED 7 bytes"));
    }
}
