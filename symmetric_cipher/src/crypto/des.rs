use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des_key_expansion::DesKeyExpansion;
use crate::crypto::des_tables::{FP, IP};
use crate::crypto::des_transformation::DesTransformation;
use crate::crypto::feistel_network::FeistelNetwork;
use crate::crypto::utils::permute_bits;
use std::sync::Arc;

pub const DES_BLOCK_SIZE: usize = 8;
pub const DES_KEY_SIZE: usize = 8;
const DES_ROUNDS: usize = 16;

/// DES: IP → 16 раундов сети Фейстеля → FP.
#[derive(Clone)]
pub struct DES {
    feistel: FeistelNetwork,
}

impl DES {
    pub fn new() -> Result<Self, CipherError> {
        let feistel = FeistelNetwork::new(
            Arc::new(DesKeyExpansion),
            Arc::new(DesTransformation),
            DES_BLOCK_SIZE,
            DES_ROUNDS,
        )?;
        Ok(DES { feistel })
    }
}

impl SymmetricCipher for DES {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != DES_KEY_SIZE {
            return Err(CipherError::InvalidKeySize {
                got: key.len(),
                expected: DES_KEY_SIZE,
            });
        }
        self.feistel.set_key(key)
    }

    fn encrypt_block(&self, plain_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        if plain_block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                got: plain_block.len(),
                expected: DES_BLOCK_SIZE,
            });
        }

        let permuted = permute_bits(plain_block, &IP, false, 1)?;
        let feistel_output = self.feistel.encrypt_block(&permuted)?;
        permute_bits(&feistel_output, &FP, false, 1)
    }

    fn decrypt_block(&self, cipher_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        if cipher_block.len() != DES_BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                got: cipher_block.len(),
                expected: DES_BLOCK_SIZE,
            });
        }

        let permuted = permute_bits(cipher_block, &IP, false, 1)?;
        let feistel_output = self.feistel.decrypt_block(&permuted)?;
        permute_bits(&feistel_output, &FP, false, 1)
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }
}
