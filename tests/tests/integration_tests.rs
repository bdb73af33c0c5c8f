//! Cross-crate tests: the high-level cipher against the primitive layer
//! and the published NIST vectors

use aesgard::prelude::*;
use aesgard_algorithms::block::aes::{key_schedule, sbox};
use aesgard_algorithms::{gf256, CounterBlock};
use aesgard_tests::vectors::{fips197, sp800_38a, GCM_CASES};
use aesgard_tests::{test_rng, unhex};

fn nist_cipher() -> Aes256Cipher {
    Aes256Cipher::new(&unhex(sp800_38a::KEY)).unwrap()
}

fn with_iv(iv_hex: &str, body_hex: &str) -> Vec<u8> {
    let mut input = unhex(iv_hex);
    input.extend(unhex(body_hex));
    input
}

#[test]
fn test_block_known_answer() {
    let cipher = Aes256Cipher::new(&unhex(fips197::KEY)).unwrap();
    let ct = cipher.encrypt_block(&unhex(fips197::PLAINTEXT)).unwrap();
    assert_eq!(ct.to_vec(), unhex(fips197::CIPHERTEXT));
    assert_eq!(cipher.decrypt_block(&ct).unwrap().to_vec(), unhex(fips197::PLAINTEXT));
}

#[test]
fn test_ecb_known_answer() {
    let cipher = nist_cipher();
    let pt = unhex(sp800_38a::PLAINTEXT);

    // PKCS#7 adds one full block after the four vector blocks
    let ct = cipher.encrypt_ecb(&pt, Padding::Pkcs7).unwrap();
    assert_eq!(ct.len(), 80);
    assert_eq!(ct[..64], unhex(sp800_38a::ECB)[..]);
    assert_eq!(cipher.decrypt_ecb(&ct, Padding::Pkcs7).unwrap(), pt);
}

#[test]
fn test_cbc_known_answer_through_wire_format() {
    let cipher = nist_cipher();
    // The vector plaintext has no trailing zeros, so zero unpadding is a no-op
    let input = with_iv(sp800_38a::IV, sp800_38a::CBC);
    assert_eq!(
        cipher.decrypt_cbc(&input, Padding::Zero).unwrap(),
        unhex(sp800_38a::PLAINTEXT)
    );
}

#[test]
fn test_cfb_known_answers_through_wire_format() {
    let cipher = nist_cipher();
    let pt = unhex(sp800_38a::PLAINTEXT);

    let input = with_iv(sp800_38a::IV, sp800_38a::CFB128);
    assert_eq!(cipher.decrypt_cfb(&input, 16).unwrap(), pt);

    let input = with_iv(sp800_38a::IV, sp800_38a::CFB8);
    assert_eq!(cipher.decrypt_cfb(&input, 1).unwrap(), pt);
}

#[test]
fn test_ofb_known_answer_through_wire_format() {
    let cipher = nist_cipher();
    let input = with_iv(sp800_38a::IV, sp800_38a::OFB);
    assert_eq!(cipher.decrypt_ofb(&input).unwrap(), unhex(sp800_38a::PLAINTEXT));
}

#[test]
fn test_ctr_known_answer_on_primitive() {
    let key = SecretBytes::<32>::from_slice(&unhex(sp800_38a::KEY)).unwrap();
    let aes = Aes256::new(&key);
    let mut initial = [0u8; 16];
    initial.copy_from_slice(&unhex(sp800_38a::INITIAL_COUNTER));

    let ctr = Ctr::from_counter_block(&aes, &initial);
    assert_eq!(
        ctr.encrypt(&unhex(sp800_38a::PLAINTEXT)).unwrap(),
        unhex(sp800_38a::CTR)
    );
    assert_eq!(CounterBlock::from_block(&initial).to_block(), initial);
}

#[test]
fn test_high_level_ctr_matches_primitive() {
    let cipher = nist_cipher();
    let aes = Aes256::from_slice(&unhex(sp800_38a::KEY)).unwrap();
    let pt = unhex(sp800_38a::PLAINTEXT);

    let wire = cipher.encrypt_ctr_with_rng(&pt, &mut test_rng(5)).unwrap();
    let nonce = Nonce::<12>::from_slice(&wire[..12]).unwrap();

    // The counter starts at zero under the prepended nonce
    assert_eq!(Ctr::new(&aes, &nonce).encrypt(&pt).unwrap(), wire[12..]);
    assert_eq!(
        Ctr::with_counter(&aes, &nonce, 0).encrypt(&pt).unwrap(),
        wire[12..]
    );
}

#[test]
fn test_high_level_cbc_matches_primitive() {
    let cipher = nist_cipher();
    let aes = Aes256::from_slice(&unhex(sp800_38a::KEY)).unwrap();
    let pt: Vec<u8> = (0u8..40).collect();

    let wire = cipher
        .encrypt_cbc_with_rng(&pt, Padding::Pkcs7, &mut test_rng(8))
        .unwrap();
    let iv = Nonce::<16>::from_slice(&wire[..16]).unwrap();
    let expected = Cbc::new(&aes, &iv).encrypt(&Padding::Pkcs7.pad(&pt)).unwrap();
    assert_eq!(wire[16..], expected[..]);
}

#[test]
fn test_gcm_known_answers() {
    for case in GCM_CASES {
        let cipher = Aes256Cipher::new(&unhex(case.key)).unwrap();
        let aad = unhex(case.aad);

        let mut wire = unhex(case.iv);
        wire.extend(unhex(case.ciphertext));
        wire.extend(unhex(case.tag));
        assert_eq!(
            cipher.decrypt_gcm(&wire, &aad).unwrap(),
            unhex(case.plaintext),
            "{}",
            case.name
        );

        let aes = Aes256::from_slice(&unhex(case.key)).unwrap();
        let nonce = Nonce::<12>::from_slice(&unhex(case.iv)).unwrap();
        let sealed = Gcm::new(&aes, &nonce)
            .unwrap()
            .encrypt(&unhex(case.plaintext), &aad)
            .unwrap();
        assert_eq!(sealed, wire[12..], "{}", case.name);

        let tag = cipher.gmac(&unhex(case.ciphertext), &aad, &nonce).unwrap();
        assert_eq!(tag.to_vec(), unhex(case.tag), "{}", case.name);
    }
}

#[test]
fn test_errors_pass_through_unchanged() {
    let cipher = nist_cipher();

    assert!(matches!(
        Aes256Cipher::new(&[0u8; 16]),
        Err(Error::InvalidKeySize {
            expected: 32,
            actual: 16
        })
    ));
    assert!(matches!(
        cipher.decrypt_cbc(&[0u8; 33], Padding::Pkcs7),
        Err(Error::InvalidBlockSize { .. })
    ));
    assert!(matches!(
        cipher.encrypt_cfb(b"x", 17),
        Err(Error::InvalidSegmentSize { size: 17 })
    ));
    assert!(matches!(
        cipher.decrypt_gcm(&[0u8; 27], &[]),
        Err(Error::CiphertextTooShort { .. })
    ));
    assert!(matches!(
        cipher.decrypt_gcm(&[0u8; 28], &[]),
        Err(Error::AuthenticationFailure { .. })
    ));
}

#[test]
fn test_error_messages() {
    let err = Aes256Cipher::new(&[0u8; 16]).err().unwrap();
    assert_eq!(err.to_string(), "invalid key size: expected 32 bytes, got 16");

    let err = Padding::Pkcs7.unpad(&[0u8; 16]).unwrap_err();
    assert_eq!(err.to_string(), "invalid PKCS#7 padding");
}

#[test]
fn test_ecb_scenario_key_and_111_bytes() {
    let cipher = Aes256Cipher::new(b"supersecretkeythathastobe32bytes").unwrap();
    let plaintext: Vec<u8> = (0..111u8).map(|i| i.wrapping_mul(37)).collect();

    let ciphertext = cipher.encrypt_ecb(&plaintext, Padding::Pkcs7).unwrap();
    assert_eq!(ciphertext.len(), 112);
    assert_eq!(cipher.decrypt_ecb(&ciphertext, Padding::Pkcs7).unwrap(), plaintext);
}

#[test]
fn test_static_tables_and_schedule() {
    assert_eq!(sbox::SBOX[0], 0x63);
    assert_eq!(sbox::INV_SBOX[0x63], 0);
    assert_eq!(*sbox::SBOX, sbox::generate_sbox());
    assert_eq!(*sbox::INV_SBOX, sbox::generate_inv_sbox());

    let schedule = key_schedule::expand_key(&unhex(fips197::KEY)).unwrap();
    assert_eq!(schedule.len(), 240);
    assert_eq!(schedule.as_bytes()[..32], unhex(fips197::KEY)[..]);
    assert_eq!(key_schedule::rcon(0), 0);
    assert_eq!(key_schedule::rcon(7), 0x40);

    assert_eq!(gf256::mul(0x57, 0x83), 0xc1);
    assert_eq!(gf256::add(0x57, 0x83), 0xd4);
}

#[test]
fn test_secret_types_redact_debug() {
    let key = Aes256Key::derive_from_secret(b"debug");
    assert!(!format!("{:?}", key).contains(&hex::encode(key.as_bytes())));

    let secret = SecretBytes::<32>::new([0xAB; 32]);
    assert!(!format!("{:?}", secret).contains("ab"));
}
