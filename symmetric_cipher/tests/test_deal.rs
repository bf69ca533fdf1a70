use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_traits::{KeyExpansion, SymmetricCipher};
use symmetric_cipher::crypto::cipher_types::{CipherError, CipherMode, PaddingMode};
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::deal_key_expansion::DealKeyExpansion;

#[test]
fn test_deal_key_schedule_round_counts() {
    for (key_length, expected_rounds) in [(16, 6), (24, 6), (32, 8)] {
        let expansion = DealKeyExpansion::new(key_length).unwrap();
        let round_keys = expansion
            .generate_round_keys(&vec![0u8; key_length])
            .unwrap();

        assert_eq!(round_keys.len(), expected_rounds, "key length {key_length}");
        assert!(round_keys.iter().all(|k| k.len() == 8));
    }
}

#[test]
fn test_deal_key_schedule_is_deterministic_and_varies_by_round() {
    let expansion = DealKeyExpansion::new(16).unwrap();
    let key = [0x42u8; 16];

    let first = expansion.generate_round_keys(&key).unwrap();
    let second = expansion.generate_round_keys(&key).unwrap();
    assert_eq!(first, second);

    // раундовая константа r+1 разводит одинаковые блоки ключа
    assert_ne!(first[0], first[2]);
}

#[test]
fn test_deal_key_schedule_rejects_bad_length() {
    assert!(matches!(
        DealKeyExpansion::new(20).unwrap_err(),
        CipherError::UnsupportedKeySize { got: 20 }
    ));

    let expansion = DealKeyExpansion::new(16).unwrap();
    let err = expansion.generate_round_keys(&[0u8; 24]).unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidKeySize { got: 24, expected: 16 }
    ));
}

#[test]
fn test_deal_block_roundtrip_all_key_sizes() {
    let mut rng = StdRng::seed_from_u64(0x0DEA_1000);

    for key_length in [16, 24, 32] {
        let mut key = vec![0u8; key_length];
        rng.fill_bytes(&mut key);
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);

        let mut deal = DEAL::new(key_length).unwrap();
        deal.set_key(&key).unwrap();

        let encrypted = deal.encrypt_block(&block).unwrap();
        assert_ne!(encrypted, block.to_vec());
        assert_eq!(deal.decrypt_block(&encrypted).unwrap(), block.to_vec());
    }
}

#[test]
fn test_deal_rejects_bad_key_and_block() {
    let mut deal = DEAL::new(16).unwrap();
    assert!(matches!(
        deal.set_key(&[0u8; 24]).unwrap_err(),
        CipherError::InvalidKeySize { got: 24, expected: 16 }
    ));

    deal.set_key(&[0u8; 16]).unwrap();
    assert!(matches!(
        deal.encrypt_block(&[0u8; 8]).unwrap_err(),
        CipherError::InvalidBlockSize { got: 8, expected: 16 }
    ));
}

#[test]
fn test_deal128_cbc_pkcs7_roundtrip() {
    let ctx = CipherContext::new(
        Box::new(DEAL::new(16).unwrap()),
        &[0u8; 16],
        CipherMode::CBC,
        PaddingMode::PKCS7,
        &[0u8; 16],
        16,
        false,
    )
    .unwrap();

    let plaintext = b"DEAL test";
    let ciphertext = ctx.encrypt(plaintext).unwrap();
    assert_eq!(ciphertext.len(), 16);

    let decrypted = ctx.decrypt(&ciphertext).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn test_deal256_ofb_ansi_roundtrip_1000_bytes() {
    let mut rng = StdRng::seed_from_u64(0x0DEA_1256);
    let mut key = [0u8; 32];
    rng.fill_bytes(&mut key);
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);
    let mut plaintext = vec![0u8; 1000];
    rng.fill_bytes(&mut plaintext);

    let ctx = CipherContext::new(
        Box::new(DEAL::new(32).unwrap()),
        &key,
        CipherMode::OFB,
        PaddingMode::ANSI_X923,
        &iv,
        16,
        false,
    )
    .unwrap();

    let ciphertext = ctx.encrypt(&plaintext).unwrap();
    assert_eq!(ctx.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_deal_ecb_parallel_matches_sequential() {
    // параллельный ECB гоняет DES-пул раундовой функции из многих потоков
    let mut rng = StdRng::seed_from_u64(0x0DEA_1EBC);
    let mut key = [0u8; 16];
    rng.fill_bytes(&mut key);
    let mut plaintext = vec![0u8; 16 * 33];
    rng.fill_bytes(&mut plaintext);

    let make_ctx = |parallel| {
        CipherContext::new(
            Box::new(DEAL::new(16).unwrap()),
            &key,
            CipherMode::ECB,
            PaddingMode::PKCS7,
            &[],
            16,
            parallel,
        )
        .unwrap()
    };

    let sequential = make_ctx(false).encrypt(&plaintext).unwrap();
    let parallel = make_ctx(true).encrypt(&plaintext).unwrap();
    assert_eq!(sequential, parallel);

    assert_eq!(make_ctx(true).decrypt(&parallel).unwrap(), plaintext);
}
