use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::deal_key_expansion::DealKeyExpansion;
use crate::crypto::deal_transformation::DealTransformation;
use crate::crypto::feistel_network::FeistelNetwork;
use std::sync::Arc;

pub const DEAL_BLOCK_SIZE: usize = 16;

/// DEAL: 128-битная сеть Фейстеля, раундовая функция которой — полный DES.
/// Шесть раундов для ключей 128/192 бита, восемь для 256.
pub struct DEAL {
    feistel: FeistelNetwork,
    key_length: usize,
}

impl DEAL {
    pub fn new(key_length: usize) -> Result<Self, CipherError> {
        let key_expansion = DealKeyExpansion::new(key_length)?;
        let num_rounds = key_expansion.num_rounds();
        let transformation = DealTransformation::new()?;

        let feistel = FeistelNetwork::new(
            Arc::new(key_expansion),
            Arc::new(transformation),
            DEAL_BLOCK_SIZE,
            num_rounds,
        )?;

        Ok(DEAL {
            feistel,
            key_length,
        })
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }
}

impl SymmetricCipher for DEAL {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != self.key_length {
            return Err(CipherError::InvalidKeySize {
                got: key.len(),
                expected: self.key_length,
            });
        }
        self.feistel.set_key(key)
    }

    fn encrypt_block(&self, plain_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.feistel.encrypt_block(plain_block)
    }

    fn decrypt_block(&self, cipher_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.feistel.decrypt_block(cipher_block)
    }

    fn block_size(&self) -> usize {
        DEAL_BLOCK_SIZE
    }
}
