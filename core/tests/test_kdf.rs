#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sle_core::constants::{KEY_LEN_32, PBKDF2_ITERATIONS, SALT_LEN};
    use sle_core::crypto::{derive_key, derive_key_with, CryptoError, KdfParams};

    fn fast() -> KdfParams {
        KdfParams::new(1_000)
    }

    #[test]
    fn default_params_use_100k_iterations() {
        assert_eq!(KdfParams::default().iterations, PBKDF2_ITERATIONS);
        assert_eq!(PBKDF2_ITERATIONS, 100_000);
    }

    #[test]
    fn derive_key_is_deterministic() {
        let salt = [7u8; SALT_LEN];
        let k1 = derive_key(b"correct-horse", &salt).unwrap();
        let k2 = derive_key(b"correct-horse", &salt).unwrap();
        assert_eq!(k1.len(), KEY_LEN_32);
        assert_eq!(*k1, *k2);
    }

    // PBKDF2-HMAC-SHA256, 100_000 rounds, salt 00..0f: fixed by the blob format.
    #[test]
    fn derive_key_known_answer() {
        let salt: [u8; SALT_LEN] = core::array::from_fn(|i| i as u8);
        let key = derive_key(b"correct-horse", &salt).unwrap();
        assert_eq!(
            hex::encode(*key),
            "320750f50df8f0086e0cf09e97d0802f5b31754896053352151addbe6a458115"
        );
    }

    #[test]
    fn derive_key_matches_explicit_default_params() {
        let salt = [3u8; SALT_LEN];
        let k1 = derive_key(b"pw", &salt).unwrap();
        let k2 = derive_key_with(b"pw", &salt, &KdfParams::default()).unwrap();
        assert_eq!(*k1, *k2);
    }

    #[test]
    fn iteration_count_changes_key() {
        let salt = [1u8; SALT_LEN];
        let k1 = derive_key_with(b"pw", &salt, &KdfParams::new(1_000)).unwrap();
        let k2 = derive_key_with(b"pw", &salt, &KdfParams::new(1_001)).unwrap();
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn different_passwords_different_keys() {
        let salt = [9u8; SALT_LEN];
        let k1 = derive_key_with(b"alpha", &salt, &fast()).unwrap();
        let k2 = derive_key_with(b"bravo", &salt, &fast()).unwrap();
        assert_ne!(*k1, *k2);
    }

    #[test]
    fn empty_password_is_accepted() {
        let salt = [5u8; SALT_LEN];
        let key = derive_key_with(b"", &salt, &fast()).unwrap();
        assert_eq!(key.len(), KEY_LEN_32);
    }

    #[test]
    fn zero_iterations_rejected() {
        let err = derive_key_with(b"pw", &[1u8; SALT_LEN], &KdfParams::new(0)).unwrap_err();
        assert_eq!(err, CryptoError::InvalidIterations);
    }

    #[test]
    fn short_and_long_salts_rejected() {
        for len in [0usize, 1, 15, 17, 32] {
            let salt = vec![0xAB; len];
            let err = derive_key(b"pw", &salt).unwrap_err();
            assert_eq!(err, CryptoError::InvalidSaltLength { expected: SALT_LEN, actual: len });
        }
    }

    #[test]
    fn kdf_params_roundtrip_through_json() {
        let params = KdfParams::new(250_000);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"iterations":250000}"#);
        let back: KdfParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back, params);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_salt_length_enforced(salt in proptest::collection::vec(any::<u8>(), 0..64)) {
            let res = derive_key_with(b"pw", &salt, &fast());
            if salt.len() == SALT_LEN {
                prop_assert!(res.is_ok());
            } else {
                let is_salt_len_error = matches!(res, Err(CryptoError::InvalidSaltLength { .. }));
                prop_assert!(is_salt_len_error);
            }
        }

        #[test]
        fn prop_different_salts_different_keys(s1 in any::<[u8; 16]>(), s2 in any::<[u8; 16]>()) {
            let k1 = derive_key_with(b"pw", &s1, &fast()).unwrap();
            let k2 = derive_key_with(b"pw", &s2, &fast()).unwrap();
            if s1 != s2 {
                prop_assert_ne!(*k1, *k2);
            } else {
                prop_assert_eq!(*k1, *k2);
            }
        }
    }
}
