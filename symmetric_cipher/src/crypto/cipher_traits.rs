use crate::crypto::cipher_types::CipherError;

/// Расписание ключей: из мастер-ключа получает список раундовых ключей.
pub trait KeyExpansion {
    fn generate_round_keys(&self, master_key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError>;
}

/// Раундовое преобразование F(block, round_key).
pub trait EncryptionTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// Блочный шифр, каким его видит драйвер режимов.
///
/// `encrypt_block`/`decrypt_block` принимают `&self` и после `set_key`
/// читают только неизменяемое расписание раундовых ключей, поэтому их
/// можно звать из нескольких потоков одновременно.
pub trait SymmetricCipher {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError>;
    fn encrypt_block(&self, plain_block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, cipher_block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn block_size(&self) -> usize;
}
