use crate::gf::arithmetic::multiply_simple;

/// Раундовая константа Rcon[round]: степени 0x02 по модулю AES.
fn rcon(round: usize) -> u8 {
    let mut value = 1u8;
    for _ in 1..round {
        value = multiply_simple(value, 0x02);
    }
    value
}

/// Развёртка ключа по рекуррентности FIPS 197 над 32-битными словами.
///
/// Возвращает `rounds + 1` раундовых ключей по `block_size` байт.
/// S-бокс передаётся снаружи: он зависит от настроенного модуля шифра,
/// раундовые же константы всегда считаются по стандартному 0x1B.
pub fn expand_key(
    master_key: &[u8],
    sbox: &[u8; 256],
    block_size: usize,
    rounds: usize,
) -> Vec<Vec<u8>> {
    let nk = master_key.len() / 4;
    let nb = block_size / 4;
    let total_words = nb * (rounds + 1);

    let mut words: Vec<[u8; 4]> = Vec::with_capacity(total_words);
    for chunk in master_key.chunks_exact(4) {
        words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total_words {
        let mut temp = words[i - 1];

        if i % nk == 0 {
            // RotWord + SubWord + Rcon
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = sbox[*byte as usize];
            }
            temp[0] ^= rcon(i / nk);
        } else if nk > 6 && i % nk == 4 {
            // Для 256-битных ключей — дополнительный SubWord
            for byte in temp.iter_mut() {
                *byte = sbox[*byte as usize];
            }
        }

        let prev = words[i - nk];
        words.push([
            prev[0] ^ temp[0],
            prev[1] ^ temp[1],
            prev[2] ^ temp[2],
            prev[3] ^ temp[3],
        ]);
    }

    words
        .chunks(nb)
        .map(|round_words| round_words.iter().flatten().copied().collect())
        .collect()
}
