use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::deal::DEAL;
use symmetric_cipher::crypto::des::DES;
use symmetric_cipher::crypto::utils::generate_random_bytes;

fn hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog.";
    let data = text.as_bytes();

    // === DES ===
    let mut des_key = [0u8; 8];
    generate_random_bytes(&mut des_key)?;
    let mut iv = [0u8; 8];
    generate_random_bytes(&mut iv)?;

    let ctx = CipherContext::new(
        Box::new(DES::new()?),
        &des_key,
        CipherMode::CBC,
        PaddingMode::PKCS7,
        &iv,
        8,
        false,
    )?;

    let encrypted = ctx.encrypt(data)?;
    println!("DES  CBC/PKCS7: {}", hex(&encrypted));
    assert_eq!(ctx.decrypt(&encrypted)?, data);

    // === DEAL ===
    let mut deal_key = [0u8; 24];
    generate_random_bytes(&mut deal_key)?;
    let mut iv = [0u8; 16];
    generate_random_bytes(&mut iv)?;

    let ctx = CipherContext::new(
        Box::new(DEAL::new(24)?),
        &deal_key,
        CipherMode::CTR,
        PaddingMode::ANSI_X923,
        &iv,
        16,
        true,
    )?;

    let encrypted = ctx.encrypt(data)?;
    println!("DEAL CTR/X.923: {}", hex(&encrypted));
    assert_eq!(ctx.decrypt(&encrypted)?, data);

    Ok(())
}
