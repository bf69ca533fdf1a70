use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherError, CipherMode, PaddingMode};
use symmetric_cipher::crypto::des::DES;

const MODES: [CipherMode; 7] = [
    CipherMode::ECB,
    CipherMode::CBC,
    CipherMode::PCBC,
    CipherMode::CFB,
    CipherMode::OFB,
    CipherMode::CTR,
    CipherMode::RandomDelta,
];

const PADDINGS: [PaddingMode; 4] = [
    PaddingMode::Zeros,
    PaddingMode::ANSI_X923,
    PaddingMode::PKCS7,
    PaddingMode::ISO10126,
];

fn des_context(mode: CipherMode, padding: PaddingMode, parallel: bool) -> CipherContext {
    CipherContext::new(
        Box::new(DES::new().unwrap()),
        b"des key!",
        mode,
        padding,
        &[0xA5u8; 8],
        8,
        parallel,
    )
    .unwrap()
}

#[test]
fn test_roundtrip_every_mode_and_padding() {
    // все режимы × все набивки × длины до 2·block_size + 1;
    // байты ненулевые, чтобы набивка Zeros была обратима
    for mode in MODES {
        for padding in PADDINGS {
            let ctx = des_context(mode, padding, false);
            for len in 1..=17usize {
                let plaintext: Vec<u8> = (0..len).map(|i| (i % 255 + 1) as u8).collect();

                let ciphertext = ctx.encrypt(&plaintext).unwrap();
                let decrypted = ctx.decrypt(&ciphertext).unwrap();
                assert_eq!(decrypted, plaintext, "{mode:?}/{padding:?} len {len}");
            }
        }
    }
}

#[test]
fn test_empty_input_roundtrip() {
    for mode in MODES {
        let ctx = des_context(mode, PaddingMode::PKCS7, false);
        let ciphertext = ctx.encrypt(&[]).unwrap();
        // пустой вход всё равно даёт целый блок набивки
        assert!(!ciphertext.is_empty());
        assert_eq!(ctx.decrypt(&ciphertext).unwrap(), Vec::<u8>::new(), "{mode:?}");
    }
}

#[test]
fn test_parallel_matches_sequential_ecb_and_ctr() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let mut plaintext = vec![0u8; 8 * 37 + 3];
    rng.fill_bytes(&mut plaintext);

    for mode in [CipherMode::ECB, CipherMode::CTR] {
        let sequential = des_context(mode, PaddingMode::PKCS7, false);
        let parallel = des_context(mode, PaddingMode::PKCS7, true);

        let ct_seq = sequential.encrypt(&plaintext).unwrap();
        let ct_par = parallel.encrypt(&plaintext).unwrap();
        assert_eq!(ct_seq, ct_par, "{mode:?} encrypt");

        assert_eq!(sequential.decrypt(&ct_par).unwrap(), plaintext, "{mode:?}");
        assert_eq!(parallel.decrypt(&ct_par).unwrap(), plaintext, "{mode:?}");
    }
}

#[test]
fn test_ofb_and_ctr_encrypt_twice_is_identity() {
    // E(E(x)) = x на выровненном входе: набивка Zeros лишь дописывает
    // нулевой блок, первые len(x) байт возвращаются в исходный вид
    for mode in [CipherMode::OFB, CipherMode::CTR] {
        let ctx = des_context(mode, PaddingMode::Zeros, false);
        let plaintext: Vec<u8> = (1..=16).collect();

        let once = ctx.encrypt(&plaintext).unwrap();
        let twice = ctx.encrypt(&once).unwrap();
        assert_eq!(&twice[..plaintext.len()], &plaintext[..], "{mode:?}");
    }
}

#[test]
fn test_random_delta_layout_and_roundtrip() {
    let ctx = des_context(CipherMode::RandomDelta, PaddingMode::PKCS7, false);
    let plaintext = [0x11u8; 32];

    // 32 байта + 8 набивки, каждый блок несёт перед собой свою дельту
    let ciphertext = ctx.encrypt(&plaintext).unwrap();
    assert_eq!(ciphertext.len(), 2 * (32 + 8));

    assert_eq!(ctx.decrypt(&ciphertext).unwrap(), plaintext);

    // свежие дельты на каждый вызов
    let again = ctx.encrypt(&plaintext).unwrap();
    assert_ne!(ciphertext, again);
    assert_eq!(ctx.decrypt(&again).unwrap(), plaintext);
}

#[test]
fn test_decrypt_rejects_bad_stride() {
    let ctx = des_context(CipherMode::CBC, PaddingMode::PKCS7, false);
    let err = ctx.decrypt(&[0u8; 12]).unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidCiphertextLength { len: 12, stride: 8 }
    ));

    // для RandomDelta шаг — два блока
    let ctx = des_context(CipherMode::RandomDelta, PaddingMode::PKCS7, false);
    let err = ctx.decrypt(&[0u8; 24]).unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidCiphertextLength { len: 24, stride: 16 }
    ));
}

#[test]
fn test_iv_length_is_validated() {
    let err = CipherContext::new(
        Box::new(DES::new().unwrap()),
        b"des key!",
        CipherMode::CBC,
        PaddingMode::PKCS7,
        &[0u8; 5],
        8,
        false,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidIvLength { got: 5, expected: 8 }
    ));

    // ECB игнорирует IV, пустой IV для CBC заменяется нулевым
    for (mode, iv) in [(CipherMode::ECB, &[0u8; 3][..]), (CipherMode::CBC, &[])] {
        CipherContext::new(
            Box::new(DES::new().unwrap()),
            b"des key!",
            mode,
            PaddingMode::PKCS7,
            iv,
            8,
            false,
        )
        .unwrap();
    }
}

#[test]
fn test_block_size_must_match_cipher() {
    let err = CipherContext::new(
        Box::new(DES::new().unwrap()),
        b"des key!",
        CipherMode::ECB,
        PaddingMode::PKCS7,
        &[],
        16,
        false,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CipherError::InvalidBlockSize { got: 16, expected: 8 }
    ));
}

#[test]
fn test_set_key_changes_ciphertext() {
    let mut ctx = des_context(CipherMode::ECB, PaddingMode::PKCS7, false);
    let plaintext = b"attack at dawn";

    let before = ctx.encrypt(plaintext).unwrap();
    ctx.set_key(b"other k!").unwrap();
    let after = ctx.encrypt(plaintext).unwrap();

    assert_ne!(before, after);
    assert_eq!(ctx.decrypt(&after).unwrap(), plaintext);
}

#[test]
fn test_set_key_fails_on_shared_cipher() {
    let mut ctx = des_context(CipherMode::ECB, PaddingMode::PKCS7, false);
    let _clone = ctx.clone();

    let err = ctx.set_key(b"other k!").unwrap_err();
    assert!(matches!(err, CipherError::CipherInUse));
}

#[test]
fn test_set_mode_and_padding() {
    let mut ctx = des_context(CipherMode::ECB, PaddingMode::PKCS7, false);
    ctx.set_mode(CipherMode::CBC);
    ctx.set_iv(&[1u8; 8]).unwrap();
    ctx.set_padding_mode(PaddingMode::ANSI_X923);

    assert_eq!(ctx.mode(), CipherMode::CBC);
    let plaintext = b"mode switch";
    let ciphertext = ctx.encrypt(plaintext).unwrap();
    assert_eq!(ctx.decrypt(&ciphertext).unwrap(), plaintext);

    assert!(matches!(
        ctx.set_iv(&[1u8; 4]).unwrap_err(),
        CipherError::InvalidIvLength { got: 4, expected: 8 }
    ));
}

#[test]
fn test_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plain.bin");
    let encrypted = dir.path().join("cipher.bin");
    let restored = dir.path().join("restored.bin");

    let mut rng = StdRng::seed_from_u64(0xF11E);
    let mut data = vec![0u8; 4096 + 5];
    rng.fill_bytes(&mut data);
    std::fs::write(&input, &data).unwrap();

    let ctx = des_context(CipherMode::CBC, PaddingMode::PKCS7, false);
    ctx.encrypt_file(&input, &encrypted).unwrap();
    ctx.decrypt_file(&encrypted, &restored).unwrap();

    assert_eq!(std::fs::read(&restored).unwrap(), data);
}

quickcheck! {
    fn prop_cbc_pkcs7_roundtrip(data: Vec<u8>) -> bool {
        let ctx = des_context(CipherMode::CBC, PaddingMode::PKCS7, false);
        let ciphertext = ctx.encrypt(&data).unwrap();
        ctx.decrypt(&ciphertext).unwrap() == data
    }

    fn prop_ctr_parallel_roundtrip(data: Vec<u8>) -> bool {
        let ctx = des_context(CipherMode::CTR, PaddingMode::PKCS7, true);
        let ciphertext = ctx.encrypt(&data).unwrap();
        ctx.decrypt(&ciphertext).unwrap() == data
    }
}
