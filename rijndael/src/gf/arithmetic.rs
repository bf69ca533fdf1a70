//! Арифметика в GF(2⁸). Модуль — младшие 8 бит многочлена степени 8,
//! старший коэффициент подразумевается: 0x1B означает x⁸+x⁴+x³+x+1.

use symmetric_cipher::crypto::cipher_types::CipherError;

/// Стандартный модуль AES.
pub const AES_POLY: u8 = 0x1B;

/// Сложение в GF(2⁸) — побитовый XOR.
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Умножение «крестьянским» алгоритмом по заданному модулю.
pub fn multiply(mut a: u8, mut b: u8, modulus: u8) -> u8 {
    let mut result = 0u8;

    for _ in 0..8 {
        if b & 1 != 0 {
            result ^= a;
        }

        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= modulus;
        }

        b >>= 1;
    }

    result
}

/// Умножение по фиксированному модулю AES.
pub fn multiply_simple(a: u8, b: u8) -> u8 {
    multiply(a, b, AES_POLY)
}

/// Обратный элемент перебором. Для учебного ядра этого достаточно;
/// постоянное время не требуется.
pub fn inverse(a: u8, modulus: u8) -> Result<u8, CipherError> {
    if a == 0 {
        return Err(CipherError::ZeroInverse);
    }

    (1..=255u8)
        .find(|&candidate| multiply(a, candidate, modulus) == 1)
        .ok_or(CipherError::NoInverse { value: a, modulus })
}
