use std::env;
use symmetric_cipher::crypto::cipher_context::CipherContext;
use symmetric_cipher::crypto::cipher_types::{CipherMode, PaddingMode};
use symmetric_cipher::crypto::des::DES;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let (input, output) = match (args.next(), args.next()) {
        (Some(input), Some(output)) => (input, output),
        _ => {
            eprintln!("usage: encrypt_file <input> <output>");
            std::process::exit(2);
        }
    };

    let ctx = CipherContext::new(
        Box::new(DES::new()?),
        b"file key",
        CipherMode::CBC,
        PaddingMode::PKCS7,
        &[0u8; 8],
        8,
        false,
    )?;

    ctx.encrypt_file(&input, &output)?;
    println!("encrypted {input} -> {output}");
    Ok(())
}
