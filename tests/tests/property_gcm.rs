//! Property-based tests for AES-256-GCM

use aesgard_api::Error;
use aesgard_symmetric::Aes256Cipher;
use proptest::prelude::*;

proptest! {
    #[test]
    fn gcm_roundtrip(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 0..=200),
        aad in prop::collection::vec(any::<u8>(), 0..=64)
    ) {
        let cipher = Aes256Cipher::new(&key).unwrap();
        let sealed = cipher.encrypt_gcm(&data, &aad).unwrap();
        prop_assert_eq!(sealed.len(), 12 + data.len() + 16);
        prop_assert_eq!(cipher.decrypt_gcm(&sealed, &aad).unwrap(), data);
    }

    #[test]
    fn gcm_detects_any_bit_flip(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 0..=64),
        aad in prop::collection::vec(any::<u8>(), 0..=32),
        position in any::<prop::sample::Index>(),
        bit in 0u8..8
    ) {
        let cipher = Aes256Cipher::new(&key).unwrap();
        let mut sealed = cipher.encrypt_gcm(&data, &aad).unwrap();

        let i = position.index(sealed.len());
        sealed[i] ^= 1 << bit;

        let result = cipher.decrypt_gcm(&sealed, &aad);
        let is_auth_failure = matches!(result, Err(Error::AuthenticationFailure { .. }));
        prop_assert!(is_auth_failure);
    }

    #[test]
    fn gcm_detects_aad_change(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 0..=64),
        aad in prop::collection::vec(any::<u8>(), 1..=32),
        position in any::<prop::sample::Index>()
    ) {
        let cipher = Aes256Cipher::new(&key).unwrap();
        let sealed = cipher.encrypt_gcm(&data, &aad).unwrap();

        let mut altered = aad.clone();
        let i = position.index(altered.len());
        altered[i] ^= 0x01;

        prop_assert!(cipher.decrypt_gcm(&sealed, &altered).is_err());
    }

    #[test]
    fn gcm_rejects_truncated_input(
        key in any::<[u8; 32]>(),
        len in 0usize..28
    ) {
        let cipher = Aes256Cipher::new(&key).unwrap();
        let result = cipher.decrypt_gcm(&vec![0u8; len], &[]);
        let is_too_short = matches!(result, Err(Error::CiphertextTooShort { .. }));
        prop_assert!(is_too_short);
    }
}
