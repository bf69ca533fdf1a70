use crate::crypto::cipher_traits::{KeyExpansion, SymmetricCipher};
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des::{DES, DES_BLOCK_SIZE};

/// Фиксированный DES-ключ расписания DEAL.
pub const DEAL_FIXED_KEY: [u8; 8] = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

/// Расписание ключей DEAL.
///
/// Мастер-ключ режется на 64-битные блоки (короткий хвост дополняется
/// нулями), блок раунда r XOR-ится побайтово с константой r+1 и
/// шифруется DES под фиксированным ключом. Совместимость с другими
/// реализациями DEAL не заявляется.
#[derive(Debug)]
pub struct DealKeyExpansion {
    key_length: usize,
    num_rounds: usize,
}

impl DealKeyExpansion {
    pub fn new(key_length: usize) -> Result<Self, CipherError> {
        if !matches!(key_length, 16 | 24 | 32) {
            return Err(CipherError::UnsupportedKeySize { got: key_length });
        }

        let num_rounds = if key_length == 32 { 8 } else { 6 };
        Ok(DealKeyExpansion {
            key_length,
            num_rounds,
        })
    }

    pub fn num_rounds(&self) -> usize {
        self.num_rounds
    }
}

impl KeyExpansion for DealKeyExpansion {
    fn generate_round_keys(&self, master_key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        if master_key.len() != self.key_length {
            return Err(CipherError::InvalidKeySize {
                got: master_key.len(),
                expected: self.key_length,
            });
        }

        let key_blocks: Vec<[u8; DES_BLOCK_SIZE]> = master_key
            .chunks(DES_BLOCK_SIZE)
            .map(|chunk| {
                let mut block = [0u8; DES_BLOCK_SIZE];
                block[..chunk.len()].copy_from_slice(chunk);
                block
            })
            .collect();

        let mut des = DES::new()?;
        des.set_key(&DEAL_FIXED_KEY)?;

        let mut round_keys = Vec::with_capacity(self.num_rounds);
        for round in 0..self.num_rounds {
            let mut block = key_blocks[round % key_blocks.len()];
            for byte in block.iter_mut() {
                *byte ^= (round + 1) as u8;
            }
            round_keys.push(des.encrypt_block(&block)?);
        }

        Ok(round_keys)
    }
}
