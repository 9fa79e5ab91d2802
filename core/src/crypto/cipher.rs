// ## 📂 File: `src/crypto/cipher.rs`

//! src/crypto/cipher.rs
//! AES-256-CBC with PKCS#7 padding.
//!
//! Design notes:
//! - 32-byte key, 16-byte IV, 16-byte blocks.
//! - Padding always adds 1..=16 bytes, so ciphertext is never empty.
//! - There is no tag: a bad key shows up as `InvalidPadding` here or as a
//!   missing marker one layer up.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::constants::{BLOCK_LEN, IV_LEN, KEY_LEN_32};
use crate::crypto::types::CryptoError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn check_key_iv(key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
    if key.len() != KEY_LEN_32 {
        return Err(CryptoError::InvalidKeyLen {
            expected: KEY_LEN_32,
            actual: key.len(),
        });
    }
    if iv.len() != IV_LEN {
        return Err(CryptoError::InvalidIvLen {
            expected: IV_LEN,
            actual: iv.len(),
        });
    }
    Ok(())
}

/// Pad `plaintext` with PKCS#7 and encrypt it in CBC mode.
pub fn encrypt_cbc(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_key_iv(key, iv)?;
    let enc = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    Ok(enc.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt CBC `ciphertext` and strip PKCS#7 padding.
///
/// Errors:
/// - empty or unaligned ciphertext -> `UnalignedCiphertext`
/// - malformed trailing pad -> `InvalidPadding`
pub fn decrypt_cbc(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_key_iv(key, iv)?;
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(CryptoError::UnalignedCiphertext {
            len: ciphertext.len(),
            block: BLOCK_LEN,
        });
    }
    let dec = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| CryptoError::InvalidKeyLen {
        expected: KEY_LEN_32,
        actual: key.len(),
    })?;
    dec.decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::InvalidPadding)
}
