//! Known-answer vectors for AES-256
//!
//! Block vectors are from FIPS-197 Appendix C.3. Mode vectors are from
//! NIST SP 800-38A Appendix F (AES-256 variants) and share one key and one
//! four-block plaintext. GCM vectors are SP 800-38D test cases 13 to 16.

/// FIPS-197 C.3
pub mod fips197 {
    pub const KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
    pub const PLAINTEXT: &str = "00112233445566778899aabbccddeeff";
    pub const CIPHERTEXT: &str = "8ea2b7ca516745bfeafc49904b496089";
}

/// SP 800-38A, AES-256
pub mod sp800_38a {
    pub const KEY: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
    pub const IV: &str = "000102030405060708090a0b0c0d0e0f";
    pub const INITIAL_COUNTER: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";
    pub const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a\
                                 ae2d8a571e03ac9c9eb76fac45af8e51\
                                 30c81c46a35ce411e5fbc1191a0a52ef\
                                 f69f2445df4f9b17ad2b417be66c3710";

    /// F.1.5
    pub const ECB: &str = "f3eed1bdb5d2a03c064b5a7e3db181f8\
                           591ccb10d410ed26dc5ba74a31362870\
                           b6ed21b99ca6f4f9f153e7b1beafed1d\
                           23304b7a39f9f3ff067d8d8f9e24ecc7";
    /// F.2.5
    pub const CBC: &str = "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
                           9cfc4e967edb808d679f777bc6702c7d\
                           39f23369a9d9bacfa530e26304231461\
                           b2eb05e2c39be9fcda6c19078c6a9d1b";
    /// F.3.13, extended over the full plaintext
    pub const CFB8: &str = "dc1f1a8520a64db55fcc8ac554844e88\
                            9700adc6e10c63cf2d8cd2d8ce668f3e\
                            b9191719c47444fb43bff9b9883c2cd0\
                            51120402009f974998c89d195722a75b";
    /// F.3.17
    pub const CFB128: &str = "dc7e84bfda79164b7ecd8486985d3860\
                              39ffed143b28b1c832113c6331e5407b\
                              df10132415e54b92a13ed0a8267ae2f9\
                              75a385741ab9cef82031623d55b1e471";
    /// F.4.5
    pub const OFB: &str = "dc7e84bfda79164b7ecd8486985d3860\
                           4febdc6740d20b3ac88f6ad82a4fb08d\
                           71ab47a086e86eedf39d1c5bba97c408\
                           0126141d67f37be8538f5a8be740e484";
    /// F.5.5
    pub const CTR: &str = "601ec313775789a5b7a7f504bbf3d228\
                           f443e3ca4d62b59aca84e990cacaf5c5\
                           2b0930daa23de94ce87017ba2d84988d\
                           dfc9c58db67aada613c2dd08457941a6";
}

/// One SP 800-38D test case
pub struct GcmCase {
    pub name: &'static str,
    pub key: &'static str,
    pub iv: &'static str,
    pub aad: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
    pub tag: &'static str,
}

const GCM_KEY: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308";
const GCM_IV: &str = "cafebabefacedbaddecaf888";

/// SP 800-38D test cases 13 to 16 (AES-256, 96-bit IV)
pub const GCM_CASES: &[GcmCase] = &[
    GcmCase {
        name: "case 13",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        iv: "000000000000000000000000",
        aad: "",
        plaintext: "",
        ciphertext: "",
        tag: "530f8afbc74536b9a963b4f1c4cb738b",
    },
    GcmCase {
        name: "case 14",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        iv: "000000000000000000000000",
        aad: "",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "cea7403d4d606b6e074ec5d3baf39d18",
        tag: "d0d1c8a799996bf0265b98b5d48ab919",
    },
    GcmCase {
        name: "case 15",
        key: GCM_KEY,
        iv: GCM_IV,
        aad: "",
        plaintext: "d9313225f88406e5a55909c5aff5269a\
                    86a7a9531534f7da2e4c303d8a318a72\
                    1c3c0c95956809532fcf0e2449a6b525\
                    b16aedf5aa0de657ba637b391aafd255",
        ciphertext: "522dc1f099567d07f47f37a32a84427d\
                     643a8cdcbfe5c0c97598a2bd2555d1aa\
                     8cb08e48590dbb3da7b08b1056828838\
                     c5f61e6393ba7a0abcc9f662898015ad",
        tag: "b094dac5d93471bdec1a502270e3cc6c",
    },
    GcmCase {
        name: "case 16",
        key: GCM_KEY,
        iv: GCM_IV,
        aad: "feedfacedeadbeeffeedfacedeadbeefabaddad2",
        plaintext: "d9313225f88406e5a55909c5aff5269a\
                    86a7a9531534f7da2e4c303d8a318a72\
                    1c3c0c95956809532fcf0e2449a6b525\
                    b16aedf5aa0de657ba637b39",
        ciphertext: "522dc1f099567d07f47f37a32a84427d\
                     643a8cdcbfe5c0c97598a2bd2555d1aa\
                     8cb08e48590dbb3da7b08b1056828838\
                     c5f61e6393ba7a0abcc9f662",
        tag: "76fc6ece0f4e1768cddf8853bb2d551b",
    },
];
