//! Property-based tests for AES-256-CBC

use aesgard_algorithms::block::aes::Aes256;
use aesgard_algorithms::block::modes::cbc::Cbc;
use aesgard_algorithms::block::BlockCipher;
use aesgard_algorithms::types::{Nonce, SecretBytes};
use aesgard_algorithms::Padding;
use aesgard_symmetric::Aes256Cipher;
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes (AES block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 16..=256).prop_map(|mut v| {
        v.truncate(v.len() / 16 * 16);
        v
    })
}

proptest! {
    #[test]
    fn aes256_cbc_roundtrip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let cipher = Aes256::new(&SecretBytes::<32>::new(key));
        let cbc = Cbc::new(&cipher, &Nonce::<16>::new(iv));

        let ciphertext = cbc.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(cbc.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 32]>(),
        key2 in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        prop_assume!(key1 != key2);
        let nonce = Nonce::<16>::new(iv);

        let cipher1 = Aes256::new(&SecretBytes::new(key1));
        let cipher2 = Aes256::new(&SecretBytes::new(key2));
        let ct1 = Cbc::new(&cipher1, &nonce).encrypt(&data).unwrap();
        let ct2 = Cbc::new(&cipher2, &nonce).encrypt(&data).unwrap();

        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn different_ivs_produce_different_ciphertexts(
        key in any::<[u8; 32]>(),
        iv1 in any::<[u8; 16]>(),
        iv2 in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        prop_assume!(iv1 != iv2);
        let cipher = Aes256::new(&SecretBytes::new(key));

        let ct1 = Cbc::new(&cipher, &Nonce::<16>::new(iv1)).encrypt(&data).unwrap();
        let ct2 = Cbc::new(&cipher, &Nonce::<16>::new(iv2)).encrypt(&data).unwrap();

        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn padded_cbc_roundtrip_any_length(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 0..=300)
    ) {
        let cipher = Aes256Cipher::new(&key).unwrap();
        let wire = cipher.encrypt_cbc(&data, Padding::Pkcs7).unwrap();

        // IV plus between one and sixteen bytes of padding
        let expected_len = 16 + (data.len() / 16 + 1) * 16;
        prop_assert_eq!(wire.len(), expected_len);
        prop_assert_eq!(cipher.decrypt_cbc(&wire, Padding::Pkcs7).unwrap(), data);
    }

    #[test]
    fn first_block_change_propagates(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
        flip in 0usize..16
    ) {
        let cipher = Aes256::new(&SecretBytes::new(key));
        let cbc = Cbc::new(&cipher, &Nonce::<16>::new(iv));

        let mut altered = data.clone();
        altered[flip] ^= 0x01;

        let ct1 = cbc.encrypt(&data).unwrap();
        let ct2 = cbc.encrypt(&altered).unwrap();

        // Every ciphertext block depends on the first plaintext block
        for (a, b) in ct1.chunks(16).zip(ct2.chunks(16)) {
            prop_assert_ne!(a, b);
        }
    }
}
