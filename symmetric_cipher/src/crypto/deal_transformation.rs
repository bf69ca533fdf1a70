use crate::crypto::cipher_traits::{EncryptionTransformation, SymmetricCipher};
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des::{DES, DES_BLOCK_SIZE, DES_KEY_SIZE};
use std::sync::{Mutex, PoisonError};

/// Раундовая функция DEAL: DES-шифрование 64-битной половины блока
/// раундовым ключом.
///
/// `set_key` у DES мутирует расписание раундовых ключей, поэтому два
/// потока не могут делить один экземпляр. Пул — неограниченный свободный
/// список: под нагрузкой каждый поток получает собственный DES, после
/// раунда экземпляр возвращается в список.
pub struct DealTransformation {
    des_pool: Mutex<Vec<DES>>,
}

impl DealTransformation {
    pub fn new() -> Result<Self, CipherError> {
        Ok(DealTransformation {
            des_pool: Mutex::new(vec![DES::new()?]),
        })
    }

    fn checkout(&self) -> Result<DES, CipherError> {
        let mut pool = self.des_pool.lock().unwrap_or_else(PoisonError::into_inner);
        match pool.pop() {
            Some(des) => Ok(des),
            None => DES::new(),
        }
    }

    fn checkin(&self, des: DES) {
        self.des_pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(des);
    }
}

impl EncryptionTransformation for DealTransformation {
    fn transform(&self, input_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if input_block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                got: input_block.len(),
                expected: DES_BLOCK_SIZE,
            });
        }
        if round_key.len() != DES_KEY_SIZE {
            return Err(CipherError::InvalidRoundKey {
                got: round_key.len(),
                expected: DES_KEY_SIZE,
            });
        }

        let mut des = self.checkout()?;
        des.set_key(round_key)?;
        let output = des.encrypt_block(input_block);
        self.checkin(des);
        output
    }
}
