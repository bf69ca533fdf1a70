use crate::crypto::cipher_traits::{EncryptionTransformation, KeyExpansion};
use crate::crypto::cipher_types::CipherError;
use crate::crypto::utils::xor_blocks;
use std::fmt;
use std::sync::Arc;

/// Обобщённая сеть Фейстеля над расписанием ключей и раундовой функцией.
///
/// После последнего раунда половины не меняются местами — так устроены
/// DES и DEAL, и расшифрование просто идёт по раундам в обратном порядке.
#[derive(Clone)]
pub struct FeistelNetwork {
    key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
    transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
    block_size: usize,
    rounds: usize,
    current_key: Vec<u8>,
    round_keys: Vec<Vec<u8>>,
}

impl fmt::Debug for FeistelNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeistelNetwork")
            .field("block_size", &self.block_size)
            .field("rounds", &self.rounds)
            .field("current_key", &self.current_key)
            .field("round_keys", &self.round_keys)
            .finish()
    }
}

impl FeistelNetwork {
    pub fn new(
        key_expansion: Arc<dyn KeyExpansion + Send + Sync>,
        transformation: Arc<dyn EncryptionTransformation + Send + Sync>,
        block_size: usize,
        rounds: usize,
    ) -> Result<Self, CipherError> {
        if block_size == 0 || block_size % 2 != 0 {
            return Err(CipherError::OddBlockSize { size: block_size });
        }

        Ok(FeistelNetwork {
            key_expansion,
            transformation,
            block_size,
            rounds,
            current_key: Vec::new(),
            round_keys: Vec::new(),
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        let round_keys = self.key_expansion.generate_round_keys(key)?;
        if round_keys.len() < self.rounds {
            return Err(CipherError::InsufficientRoundKeys {
                got: round_keys.len(),
                need: self.rounds,
            });
        }

        self.current_key = key.to_vec();
        self.round_keys = round_keys;
        Ok(())
    }

    fn check_block(&self, block: &[u8]) -> Result<(), CipherError> {
        if block.len() != self.block_size {
            return Err(CipherError::InvalidBlockSize {
                got: block.len(),
                expected: self.block_size,
            });
        }
        if self.round_keys.is_empty() {
            return Err(CipherError::KeyNotSet);
        }
        Ok(())
    }

    /// L_{r+1} = R_r, R_{r+1} = L_r ⊕ F(R_r, K_r); без финального обмена.
    pub fn encrypt_block(&self, plain_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(plain_block)?;

        let half = self.block_size / 2;
        let mut left = plain_block[..half].to_vec();
        let mut right = plain_block[half..].to_vec();

        for round in 0..self.rounds {
            let function_output = self
                .transformation
                .transform(&right, &self.round_keys[round])?;
            let new_right = xor_blocks(&left, &function_output);
            left = right;
            right = new_right;
        }

        Ok([left, right].concat())
    }

    /// Обратный ход: раунды в обратном порядке, роли половин зеркальны.
    pub fn decrypt_block(&self, cipher_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(cipher_block)?;

        let half = self.block_size / 2;
        let mut left = cipher_block[..half].to_vec();
        let mut right = cipher_block[half..].to_vec();

        for round in (0..self.rounds).rev() {
            let function_output = self
                .transformation
                .transform(&left, &self.round_keys[round])?;
            let new_left = xor_blocks(&right, &function_output);
            right = left;
            left = new_left;
        }

        Ok([left, right].concat())
    }
}
