// ## 📂 File: `src/crypto/random.rs`

//! Fresh salt and IV material.
//!
//! - Production path draws from the OS CSPRNG (`OsRng`).
//! - Callers may inject any `RngCore + CryptoRng`, e.g. a seeded `StdRng` in tests.
//! - Salt and IV are never reused: every seal draws both anew.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::constants::{IV_LEN, SALT_LEN};
use crate::crypto::types::CryptoError;

/// Fill a fixed-size array from `rng`, surfacing RNG failure instead of panicking.
#[inline]
pub fn random_array<const N: usize, R>(rng: &mut R) -> Result<[u8; N], CryptoError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut buf = [0u8; N];
    rng.try_fill_bytes(&mut buf)
        .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
    Ok(buf)
}

/// Draw a (salt, iv) pair from `rng`.
pub fn salt_and_iv<R>(rng: &mut R) -> Result<([u8; SALT_LEN], [u8; IV_LEN]), CryptoError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let salt = random_array::<SALT_LEN, R>(rng)?;
    let iv = random_array::<IV_LEN, R>(rng)?;
    Ok((salt, iv))
}

/// Salt from the OS CSPRNG.
pub fn generate_salt() -> Result<[u8; SALT_LEN], CryptoError> {
    random_array::<SALT_LEN, _>(&mut OsRng)
}

/// IV from the OS CSPRNG.
pub fn generate_iv() -> Result<[u8; IV_LEN], CryptoError> {
    random_array::<IV_LEN, _>(&mut OsRng)
}
