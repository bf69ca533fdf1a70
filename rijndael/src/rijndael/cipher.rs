use crate::gf::arithmetic::multiply_simple;
use crate::gf::irreducible::is_irreducible;
use crate::rijndael::key_schedule::expand_key;
use crate::rijndael::sbox::derive_sboxes;
use log::warn;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::cipher_types::CipherError;

/// Rijndael с настраиваемым модулем GF(2⁸).
///
/// Модуль параметризует только пару S-боксов: MixColumns и раундовые
/// константы, как и в исходной реализации, всегда считают по
/// стандартному 0x1B. Для блоков 24 и 32 байта ShiftRows сдвигает лишь
/// первые 16 байт состояния, хвост не трогает — шифр согласован сам с
/// собой, но с таблицей смещений Rijndael для широких блоков не
/// совместим.
#[derive(Debug)]
pub struct Rijndael {
    block_size: usize,
    key_size: usize,
    rounds: usize,
    modulus: u8,
    sbox: [u8; 256],
    inv_sbox: [u8; 256],
    round_keys: Vec<Vec<u8>>,
}

impl Rijndael {
    pub fn new(block_size: usize, key_size: usize, modulus: u8) -> Result<Self, CipherError> {
        if !matches!(block_size, 16 | 24 | 32) {
            return Err(CipherError::UnsupportedBlockSize { got: block_size });
        }
        if !matches!(key_size, 16 | 24 | 32) {
            return Err(CipherError::UnsupportedKeySize { got: key_size });
        }

        if !is_irreducible(modulus) {
            warn!("modulus 0x{modulus:02x} is reducible, GF(2^8) inversion is degenerate");
        }

        let rounds = match key_size {
            16 => 10,
            24 => 12,
            _ => 14,
        };

        let (sbox, inv_sbox) = derive_sboxes(modulus);

        Ok(Rijndael {
            block_size,
            key_size,
            rounds,
            modulus,
            sbox,
            inv_sbox,
            round_keys: Vec::new(),
        })
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn modulus(&self) -> u8 {
        self.modulus
    }

    pub fn sbox(&self) -> &[u8; 256] {
        &self.sbox
    }

    pub fn inv_sbox(&self) -> &[u8; 256] {
        &self.inv_sbox
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

    fn sub_bytes(&self, state: &mut [u8]) {
        for byte in state.iter_mut() {
            *byte = self.sbox[*byte as usize];
        }
    }

    fn inv_sub_bytes(&self, state: &mut [u8]) {
        for byte in state.iter_mut() {
            *byte = self.inv_sbox[*byte as usize];
        }
    }

    fn shift_rows(&self, state: &mut [u8]) {
        // строка 1: циклический сдвиг на 1
        let tmp = state[1];
        state[1] = state[5];
        state[5] = state[9];
        state[9] = state[13];
        state[13] = tmp;

        // строка 2: сдвиг на 2
        state.swap(2, 10);
        state.swap(6, 14);

        // строка 3: сдвиг на 3
        let tmp = state[15];
        state[15] = state[11];
        state[11] = state[7];
        state[7] = state[3];
        state[3] = tmp;
    }

    fn inv_shift_rows(&self, state: &mut [u8]) {
        let tmp = state[13];
        state[13] = state[9];
        state[9] = state[5];
        state[5] = state[1];
        state[1] = tmp;

        state.swap(2, 10);
        state.swap(6, 14);

        let tmp = state[3];
        state[3] = state[7];
        state[7] = state[11];
        state[11] = state[15];
        state[15] = tmp;
    }

    fn mix_columns(&self, state: &mut [u8]) {
        for column in state.chunks_exact_mut(4) {
            let (s0, s1, s2, s3) = (column[0], column[1], column[2], column[3]);

            column[0] = multiply_simple(0x02, s0) ^ multiply_simple(0x03, s1) ^ s2 ^ s3;
            column[1] = s0 ^ multiply_simple(0x02, s1) ^ multiply_simple(0x03, s2) ^ s3;
            column[2] = s0 ^ s1 ^ multiply_simple(0x02, s2) ^ multiply_simple(0x03, s3);
            column[3] = multiply_simple(0x03, s0) ^ s1 ^ s2 ^ multiply_simple(0x02, s3);
        }
    }

    fn inv_mix_columns(&self, state: &mut [u8]) {
        for column in state.chunks_exact_mut(4) {
            let (s0, s1, s2, s3) = (column[0], column[1], column[2], column[3]);

            column[0] = multiply_simple(0x0e, s0)
                ^ multiply_simple(0x0b, s1)
                ^ multiply_simple(0x0d, s2)
                ^ multiply_simple(0x09, s3);
            column[1] = multiply_simple(0x09, s0)
                ^ multiply_simple(0x0e, s1)
                ^ multiply_simple(0x0b, s2)
                ^ multiply_simple(0x0d, s3);
            column[2] = multiply_simple(0x0d, s0)
                ^ multiply_simple(0x09, s1)
                ^ multiply_simple(0x0e, s2)
                ^ multiply_simple(0x0b, s3);
            column[3] = multiply_simple(0x0b, s0)
                ^ multiply_simple(0x0d, s1)
                ^ multiply_simple(0x09, s2)
                ^ multiply_simple(0x0e, s3);
        }
    }

    fn add_round_key(&self, state: &mut [u8], round_key: &[u8]) {
        for (byte, key_byte) in state.iter_mut().zip(round_key.iter()) {
            *byte ^= key_byte;
        }
    }
}

impl SymmetricCipher for Rijndael {
    fn set_key(&mut self, key: &[u8]) -> Result<(), CipherError> {
        if key.len() != self.key_size {
            return Err(CipherError::InvalidKeySize {
                got: key.len(),
                expected: self.key_size,
            });
        }

        self.round_keys = expand_key(key, &self.sbox, self.block_size, self.rounds);
        Ok(())
    }

    fn encrypt_block(&self, plain_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(plain_block)?;

        let mut state = plain_block.to_vec();
        self.add_round_key(&mut state, &self.round_keys[0]);

        for round in 1..self.rounds {
            self.sub_bytes(&mut state);
            self.shift_rows(&mut state);
            self.mix_columns(&mut state);
            self.add_round_key(&mut state, &self.round_keys[round]);
        }

        // финальный раунд без MixColumns
        self.sub_bytes(&mut state);
        self.shift_rows(&mut state);
        self.add_round_key(&mut state, &self.round_keys[self.rounds]);

        Ok(state)
    }

    fn decrypt_block(&self, cipher_block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check_block(cipher_block)?;

        let mut state = cipher_block.to_vec();
        self.add_round_key(&mut state, &self.round_keys[self.rounds]);
        self.inv_shift_rows(&mut state);
        self.inv_sub_bytes(&mut state);

        for round in (1..self.rounds).rev() {
            self.add_round_key(&mut state, &self.round_keys[round]);
            self.inv_mix_columns(&mut state);
            self.inv_shift_rows(&mut state);
            self.inv_sub_bytes(&mut state);
        }

        self.add_round_key(&mut state, &self.round_keys[0]);
        Ok(state)
    }

    fn block_size(&self) -> usize {
        self.block_size
    }
}
