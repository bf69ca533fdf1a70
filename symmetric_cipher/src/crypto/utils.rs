use crate::crypto::cipher_types::{CipherError, PaddingMode};
use bitvec::prelude::BitVec;
use log::warn;
use rand::rngs::OsRng;
use rand::TryRngCore;

/// Переставляет биты `value` по правилу `rule`.
///
/// `rule[i]` — номер исходного бита для выходного бита `i`, отсчёт от
/// `start_bit` (таблицы DES нумеруют биты с единицы). Ориентация внутри
/// байта одна и та же для входа и выхода: `index_from_lsb == false`
/// означает, что бит 0 — старший бит байта, как в FIPS 46-3.
pub fn permute_bits(
    value: &[u8],
    rule: &[usize],
    index_from_lsb: bool,
    start_bit: usize,
) -> Result<Vec<u8>, CipherError> {
    let bit_count = value.len() * 8;
    let mut result = vec![0u8; rule.len().div_ceil(8)];

    for (i, &pos) in rule.iter().enumerate() {
        let source_pos = pos
            .checked_sub(start_bit)
            .filter(|&p| p < bit_count)
            .ok_or(CipherError::PermutationOutOfRange {
                position: pos,
                bits: bit_count,
            })?;

        let source_bit = if index_from_lsb {
            source_pos % 8
        } else {
            7 - source_pos % 8
        };
        let bit = (value[source_pos / 8] >> source_bit) & 1;

        let dest_bit = if index_from_lsb { i % 8 } else { 7 - i % 8 };
        result[i / 8] |= bit << dest_bit;
    }

    Ok(result)
}

/// Раскладывает байты в биты, старший бит первым.
pub fn bytes_to_bits(input: &[u8]) -> BitVec {
    let mut bits = BitVec::with_capacity(input.len() * 8);
    for &byte in input {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 != 0);
        }
    }
    bits
}

/// Собирает биты обратно в байты, старший бит первым.
pub fn bits_to_bytes(bits: &BitVec) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, bit) in chunk.iter().enumerate() {
            if *bit {
                byte |= 1 << (7 - i);
            }
        }
        bytes.push(byte);
    }
    bytes
}

/// XOR двух блоков; результат длиной в меньший из них.
pub fn xor_blocks(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Инкремент счётчика CTR: big-endian, перенос от младшего байта к старшему.
pub fn increment_counter(counter: &mut [u8]) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

/// Криптографически стойкие случайные байты.
pub fn generate_random_bytes(buf: &mut [u8]) -> Result<(), CipherError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CipherError::RandomSource(e.to_string()))
}

/// Дополняет данные до кратности размеру блока.
///
/// Длина набивки всегда в диапазоне `[1, block_size]`: выровненные данные
/// получают целый дополнительный блок, иначе снять набивку было бы нельзя.
pub fn apply_padding(
    data: &[u8],
    block_size: usize,
    padding: PaddingMode,
) -> Result<Vec<u8>, CipherError> {
    let padding_length = block_size - data.len() % block_size;

    let mut padded = Vec::with_capacity(data.len() + padding_length);
    padded.extend_from_slice(data);

    match padding {
        PaddingMode::Zeros => {
            padded.resize(data.len() + padding_length, 0);
        }
        PaddingMode::PKCS7 => {
            padded.extend(std::iter::repeat(padding_length as u8).take(padding_length));
        }
        PaddingMode::ANSI_X923 => {
            padded.resize(data.len() + padding_length - 1, 0);
            padded.push(padding_length as u8);
        }
        PaddingMode::ISO10126 => {
            let mut random_tail = vec![0u8; padding_length - 1];
            generate_random_bytes(&mut random_tail)?;
            padded.extend_from_slice(&random_tail);
            padded.push(padding_length as u8);
        }
    }

    Ok(padded)
}

/// Снимает набивку с конца расшифрованных данных.
///
/// Поведение разрешающее: некорректная структура PKCS7/ANSI X.923 не
/// считается ошибкой, данные возвращаются как есть.
pub fn remove_padding(data: &[u8], block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let Some(&last_byte) = data.last() else {
        return Vec::new();
    };

    if padding == PaddingMode::Zeros {
        let end = data.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        return data[..end].to_vec();
    }

    let pad_len = last_byte as usize;
    if pad_len == 0 || pad_len > block_size || pad_len > data.len() {
        warn!("implausible padding length {pad_len}, data left unchanged");
        return data.to_vec();
    }

    match padding {
        PaddingMode::PKCS7 => {
            if data[data.len() - pad_len..].iter().all(|&b| b == last_byte) {
                data[..data.len() - pad_len].to_vec()
            } else {
                warn!("malformed PKCS7 padding, data left unchanged");
                data.to_vec()
            }
        }
        PaddingMode::ANSI_X923 => {
            if data[data.len() - pad_len..data.len() - 1].iter().all(|&b| b == 0) {
                data[..data.len() - pad_len].to_vec()
            } else {
                warn!("malformed ANSI X.923 padding, data left unchanged");
                data.to_vec()
            }
        }
        PaddingMode::ISO10126 => data[..data.len() - pad_len].to_vec(),
        PaddingMode::Zeros => unreachable!("handled above"),
    }
}
