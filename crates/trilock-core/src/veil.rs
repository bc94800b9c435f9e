//! The veil cipher — build-time string concealment.
//!
//! This is NOT a cryptographically secure cipher. Its only job is to keep
//! banner and outcome strings out of `strings`-style static analysis. Each
//! challenge binary uses its own `(key, step)` pair, so a mask recovered
//! from one binary tells an attacker nothing about the others.

/// Conceal plaintext: `out[i] = in[i] ^ key ^ (i % step)`.
///
/// `step` must be non-zero (the builders pass 3, 7 or 13).
pub fn conceal(plain: &[u8], key: u8, step: u8) -> Vec<u8> {
    debug_assert!(step != 0, "veil step must be non-zero");
    plain
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ key ^ (i % step as usize) as u8)
        .collect()
}

/// Reverse of [`conceal`]. The cipher is an involution, so this is the
/// same masking pass applied a second time.
pub fn unveil(cipher: &[u8], key: u8, step: u8) -> Vec<u8> {
    conceal(cipher, key, step)
}
