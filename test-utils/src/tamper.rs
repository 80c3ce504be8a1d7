use crate::random::Rng;

/// Returns a copy of `bytes` with exactly one bit flipped at a random
/// position, so that the result is guaranteed to differ.
pub fn tamper_bytes<const N: usize>(rng: &mut impl Rng, bytes: &[u8; N]) -> [u8; N] {
    let mut tampered = *bytes;
    let bit_idx = rng.random_range(0..N * 8);
    tampered[bit_idx / 8] ^= 1 << (bit_idx % 8);
    tampered
}
