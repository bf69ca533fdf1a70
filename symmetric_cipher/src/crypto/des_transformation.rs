use crate::crypto::cipher_traits::EncryptionTransformation;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des_tables::{E, P, S_BOXES};
use crate::crypto::utils::{permute_bits, xor_blocks};

/// Функция F сети Фейстеля DES: расширение E, XOR с раундовым ключом,
/// восемь S-блоков, перестановка P.
pub struct DesTransformation;

/// Бит `pos` при нумерации от старшего бита байта.
fn get_bit(data: &[u8], pos: usize) -> u8 {
    (data[pos / 8] >> (7 - pos % 8)) & 1
}

fn set_next_4_bits(dest: &mut [u8; 4], value: u8, start_bit: usize) {
    for i in 0..4 {
        let bit = (value >> (3 - i)) & 1;
        let pos = start_bit + i;
        dest[pos / 8] |= bit << (7 - pos % 8);
    }
}

impl EncryptionTransformation for DesTransformation {
    fn transform(&self, r_block: &[u8], round_key: &[u8]) -> Result<Vec<u8>, CipherError> {
        if r_block.len() != 4 {
            return Err(CipherError::InvalidBlockSize {
                got: r_block.len(),
                expected: 4,
            });
        }
        if round_key.len() != 6 {
            return Err(CipherError::InvalidRoundKey {
                got: round_key.len(),
                expected: 6,
            });
        }

        let expanded = permute_bits(r_block, &E, false, 1)?;
        let mixed = xor_blocks(&expanded, round_key);

        // Восемь групп по 6 бит: строка — крайние биты, столбец — средние
        let mut substituted = [0u8; 4];
        for box_index in 0..8 {
            let start = box_index * 6;
            let row = (get_bit(&mixed, start) << 1) | get_bit(&mixed, start + 5);
            let mut column = 0u8;
            for j in 1..5 {
                column = (column << 1) | get_bit(&mixed, start + j);
            }

            let value = S_BOXES[box_index][row as usize * 16 + column as usize];
            set_next_4_bits(&mut substituted, value, box_index * 4);
        }

        permute_bits(&substituted, &P, false, 1)
    }
}
