use rijndael::gf::irreducible::{is_irreducible, list_irreducibles};

#[test]
fn test_standard_aes_modulus_is_irreducible() {
    assert!(is_irreducible(0x1B));
}

#[test]
fn test_known_reducibles_rejected() {
    // x⁸ = x·x·…
    assert!(!is_irreducible(0x00));
    // x⁸+x⁴+1 = (x⁴+x²+1)²
    assert!(!is_irreducible(0x11));
    // чётный младший байт означает делимость на x
    assert!(!is_irreducible(0x1C));
}

#[test]
fn test_exactly_thirty_irreducibles_of_degree_8() {
    let polys = list_irreducibles();
    assert_eq!(polys.len(), 30);

    assert!(polys.contains(&0x1B));
    assert!(polys.contains(&0x1D));
    // свободный член обязателен, иначе делится на x
    assert!(polys.iter().all(|&p| p & 1 == 1));
}

#[test]
fn test_list_agrees_with_predicate() {
    let polys = list_irreducibles();
    for m in 0..=255u8 {
        assert_eq!(polys.contains(&m), is_irreducible(m), "modulus 0x{m:02x}");
    }
}
