//! Random sources for generation.
//!
//! Every generator function takes `&mut R where R: Rng`; nothing in the
//! engine reaches for a global source. Callers that want reproducible output
//! derive a stream per purpose with [`rng_for`].

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Create a deterministic RNG from a seed, a scope name and a salt.
///
/// The stream is seeded from the BLAKE3 hash of `seed || 0 || scope || 0 || salt`,
/// so different scopes (e.g. state vs. melody) never share draws.
pub fn rng_for(seed: u32, scope: &str, salt: &str) -> Pcg32 {
    let mut input = Vec::with_capacity(4 + scope.len() + salt.len() + 2);
    input.extend_from_slice(&seed.to_le_bytes());
    input.push(0);
    input.extend_from_slice(scope.as_bytes());
    input.push(0);
    input.extend_from_slice(salt.as_bytes());

    let hash = blake3::hash(&input);
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&hash.as_bytes()[0..4]);
    let derived = u32::from_le_bytes(bytes);
    let seed64 = (derived as u64) | ((derived as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// An unseeded generator for production use.
pub fn entropy_rng() -> Pcg32 {
    Pcg32::from_entropy()
}

/// Uniform choice from a slice.
pub(crate) fn choose<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    items.choose(rng)
}

/// True with probability `p`.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// Uniform float in `[min, max)`; returns `min` for an empty range.
pub(crate) fn sample_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> f64 {
    min + rng.gen::<f64>() * (max - min)
}
