// Framing tests: bit-exact layout and structural rejection.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sle_core::constants::{BLOCK_LEN, HEADER_LEN};
    use sle_core::envelope::{decode_envelope, encode_envelope, Envelope, EnvelopeError};

    fn sample() -> Envelope {
        Envelope::new([0x11; 16], [0x22; 16], vec![0x33; 32])
    }

    #[test]
    fn layout_is_salt_iv_ciphertext() {
        let blob = encode_envelope(&sample());
        assert_eq!(blob.len(), 64);
        assert_eq!(&blob[0..16], &[0x11; 16]);
        assert_eq!(&blob[16..32], &[0x22; 16]);
        assert_eq!(&blob[32..], &[0x33; 32][..]);
        assert_eq!(sample().encoded_len(), 64);
        assert_eq!(sample().blocks(), 2);
    }

    #[test]
    fn decode_splits_at_fixed_offsets() {
        let env = decode_envelope(&encode_envelope(&sample())).unwrap();
        assert_eq!(env, sample());
    }

    #[test]
    fn too_short_blob_rejected() {
        for len in [0usize, 1, 16, 31] {
            let err = decode_envelope(&vec![0u8; len]).unwrap_err();
            assert_eq!(err, EnvelopeError::TooShort { have: len, need: HEADER_LEN });
        }
    }

    #[test]
    fn header_only_blob_rejected() {
        let err = decode_envelope(&[0u8; HEADER_LEN]).unwrap_err();
        assert_eq!(err, EnvelopeError::EmptyCiphertext { header: HEADER_LEN });
    }

    #[test]
    fn unaligned_body_rejected() {
        let err = decode_envelope(&[0u8; HEADER_LEN + 17]).unwrap_err();
        assert_eq!(err, EnvelopeError::Unaligned { len: 17, block: BLOCK_LEN });
    }

    #[test]
    fn debug_output_is_hex_preview() {
        let dbg = format!("{:?}", sample());
        assert!(dbg.contains("11111111111111111111111111111111"));
        assert!(dbg.contains("ciphertext_len: 32"));
    }

    proptest! {
        #[test]
        fn prop_decode_accepts_only_aligned_bodies(len in 0usize..200) {
            let res = decode_envelope(&vec![0u8; len]);
            let body = len.saturating_sub(HEADER_LEN);
            if len >= HEADER_LEN && body > 0 && body % BLOCK_LEN == 0 {
                prop_assert_eq!(res.unwrap().ciphertext.len(), body);
            } else {
                prop_assert!(res.is_err());
            }
        }
    }
}
