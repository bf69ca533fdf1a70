use rijndael::gf::irreducible::list_irreducibles;
use rijndael::rijndael::cipher::Rijndael;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::utils::generate_random_bytes;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let irreducibles = list_irreducibles();
    println!("неприводимых многочленов степени 8: {}", irreducibles.len());

    let mut key = [0u8; 16];
    generate_random_bytes(&mut key)?;
    let mut iv = [0u8; 16];
    generate_random_bytes(&mut iv)?;

    // Rijndael под нестандартным модулем 0x1D
    let ctx = CipherContext::new(
        Box::new(Rijndael::new(16, 16, 0x1D)?),
        &key,
        CipherMode::CBC,
        PaddingMode::PKCS7,
        &iv,
        16,
        false,
    )?;

    let message = b"Rijndael over a configurable field";
    let encrypted = ctx.encrypt(message)?;
    let decrypted = ctx.decrypt(&encrypted)?;
    assert_eq!(decrypted, message);

    println!("шифртекст {} байт, расшифровка совпала", encrypted.len());
    Ok(())
}
