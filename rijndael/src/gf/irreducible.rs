//! Проверка неприводимости многочленов степени 8 над GF(2).
//!
//! Многочлен степени 8 неприводим тогда и только тогда, когда
//! gcd(x^(2^k) − x, f) = 1 для k = 1..4: любой делитель f имеет
//! множитель степени не выше 4, а x^(2^k) − x — произведение всех
//! неприводимых многочленов степеней, делящих k.

/// Степень ненулевого многочлена в битовом представлении.
fn degree(p: u32) -> u32 {
    31 - p.leading_zeros()
}

/// Остаток от деления многочленов над GF(2).
fn poly_rem(mut a: u32, m: u32) -> u32 {
    let dm = degree(m);
    while a != 0 && degree(a) >= dm {
        a ^= m << (degree(a) - dm);
    }
    a
}

/// Умножение по модулю `m`.
fn poly_mulmod(a: u32, b: u32, m: u32) -> u32 {
    let mut product = 0u32;
    for i in 0..16 {
        if (b >> i) & 1 == 1 {
            product ^= a << i;
        }
    }
    poly_rem(product, m)
}

fn poly_gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = poly_rem(a, b);
        a = b;
        b = r;
    }
    a
}

/// Неприводим ли многочлен x⁸ + (младшие биты из `modulus`).
pub fn is_irreducible(modulus: u8) -> bool {
    let f = 0x100u32 | modulus as u32;
    const X: u32 = 0b10;

    let mut x_pow = X; // x^(2^0)
    for _ in 1..=4 {
        x_pow = poly_mulmod(x_pow, x_pow, f); // x^(2^k) mod f
        if poly_gcd(x_pow ^ X, f) != 1 {
            return false;
        }
    }
    true
}

/// Все неприводимые многочлены степени 8; их ровно 30.
pub fn list_irreducibles() -> Vec<u8> {
    (0u16..256)
        .map(|m| m as u8)
        .filter(|&m| is_irreducible(m))
        .collect()
}
