use crate::crypto::cipher_traits::KeyExpansion;
use crate::crypto::cipher_types::CipherError;
use crate::crypto::des_tables::{PC1, PC2, SHIFT_SCHEDULE};
use crate::crypto::utils::{bits_to_bytes, bytes_to_bits, permute_bits};
use bitvec::prelude::{BitSlice, BitVec};

pub struct DesKeyExpansion;

const HALF_BITS: u32 = 28;
const HALF_MASK: u32 = 0x0FFF_FFFF;

/// Циклический сдвиг влево 28-битной половинки.
/// Половинка живёт в младших 28 битах u32, сдвиг обязан оставаться в них.
fn rotate_left_28(value: u32, shift: u32) -> u32 {
    ((value << shift) | (value >> (HALF_BITS - shift))) & HALF_MASK
}

fn pack_28(bits: &BitSlice) -> u32 {
    bits.iter()
        .by_vals()
        .fold(0u32, |acc, bit| (acc << 1) | bit as u32)
}

fn unpack_28(value: u32, out: &mut BitVec) {
    for i in (0..HALF_BITS).rev() {
        out.push((value >> i) & 1 != 0);
    }
}

impl KeyExpansion for DesKeyExpansion {
    fn generate_round_keys(&self, master_key: &[u8]) -> Result<Vec<Vec<u8>>, CipherError> {
        if master_key.len() != 8 {
            return Err(CipherError::InvalidKeySize {
                got: master_key.len(),
                expected: 8,
            });
        }

        // PC-1: 64 бита ключа → 56, биты чётности отброшены
        let permuted = permute_bits(master_key, &PC1, false, 1)?;
        let bits = bytes_to_bits(&permuted);

        // Разбиваем на C и D (по 28 бит)
        let mut c = pack_28(&bits[..28]);
        let mut d = pack_28(&bits[28..56]);

        let mut round_keys = Vec::with_capacity(SHIFT_SCHEDULE.len());
        for &shift in SHIFT_SCHEDULE.iter() {
            c = rotate_left_28(c, shift);
            d = rotate_left_28(d, shift);

            let mut cd = BitVec::with_capacity(56);
            unpack_28(c, &mut cd);
            unpack_28(d, &mut cd);

            // PC-2: 56 → 48 бит раундового ключа
            let cd_bytes = bits_to_bytes(&cd);
            round_keys.push(permute_bits(&cd_bytes, &PC2, false, 1)?);
        }

        Ok(round_keys)
    }
}
