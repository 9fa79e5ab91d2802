// ## 📂 File: `src/envelope/encode.rs`

use crate::envelope::types::Envelope;

/// Serialize `salt || iv || ciphertext`.
#[inline]
pub fn encode_envelope(env: &Envelope) -> Vec<u8> {
    let mut out = Vec::with_capacity(env.encoded_len());
    out.extend_from_slice(&env.salt);
    out.extend_from_slice(&env.iv);
    out.extend_from_slice(&env.ciphertext);

    debug_assert_eq!(out.len(), env.encoded_len());
    out
}
