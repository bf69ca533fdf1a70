use crate::gf::arithmetic::inverse;

/// Константа аффинного преобразования из FIPS 197.
const AFFINE_C: u8 = 0x63;

/// Аффинное преобразование S-бокса: b ⊕ (b⋙4) ⊕ (b⋙5) ⊕ (b⋙6) ⊕ (b⋙7) ⊕ c
/// поразрядно, с циклическим сдвигом аргумента между битами.
fn affine_transform(mut b: u8) -> u8 {
    let mut result = 0u8;

    for i in 0..8 {
        let bit = b ^ (b >> 4) ^ (b >> 5) ^ (b >> 6) ^ (b >> 7);
        result |= ((bit ^ (AFFINE_C >> i)) & 1) << i;
        b = b.rotate_right(1);
    }

    result
}

/// Строит S-бокс и обратный S-бокс для заданного модуля GF(2⁸).
///
/// sbox[0] = 0x63 по определению; для остальных входов берётся обратный
/// элемент по модулю и применяется аффинное преобразование. Обратный
/// бокс — поточечная инверсия прямого.
pub fn derive_sboxes(modulus: u8) -> ([u8; 256], [u8; 256]) {
    let mut sbox = [0u8; 256];
    sbox[0] = AFFINE_C;
    for i in 1..256 {
        let inv = inverse(i as u8, modulus).unwrap_or(0);
        sbox[i] = affine_transform(inv);
    }

    let mut inv_sbox = [0u8; 256];
    for (i, &value) in sbox.iter().enumerate() {
        inv_sbox[value as usize] = i as u8;
    }

    (sbox, inv_sbox)
}
