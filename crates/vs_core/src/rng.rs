// crates/vs_core/src/rng.rs
//
// Seedable RNG for the Reference Data Table fallback (regions without a fixed
// baseline cost). Integer-only draws; unbiased ranges via rejection sampling.
//
// • An explicit `u64` seed makes a run reproducible: the seed maps to the
//   ChaCha20 32-byte seed as little-endian bytes in the first 8 positions, the
//   remaining 24 bytes zero.
// • Without a seed the stream is keyed from OS entropy; the drawn seed is kept
//   so a host can echo it and replay the run.

use rand_chacha::ChaCha20Rng;
use rand_core::{OsRng, RngCore, SeedableRng};

/// Deterministic RNG for fallback baseline costs.
#[derive(Debug, Clone)]
pub struct FallbackRng {
    rng: ChaCha20Rng,
    seed: u64,
    words_consumed: u64,
}

impl FallbackRng {
    /// Construct from a 64-bit seed.
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self {
            rng: ChaCha20Rng::from_seed(seed32),
            seed,
            words_consumed: 0,
        }
    }

    /// Seed from OS entropy. The chosen seed is observable through [`seed`](Self::seed).
    pub fn from_entropy() -> Self {
        Self::from_seed_u64(OsRng.next_u64())
    }

    /// The seed this stream was built from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of 64-bit words drawn so far (rejected draws included).
    #[inline]
    pub fn words_consumed(&self) -> u64 {
        self.words_consumed
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }

    /// Unbiased integer in [0, n). Returns `None` if `n == 0`.
    ///
    /// Accept `x` if `x >= 2^64 mod n`; then `x % n` is uniform.
    #[inline]
    pub fn gen_range(&mut self, n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return Some(x % n);
            }
        }
    }

    /// Unbiased integer in [lo, hi). Returns `lo` when the range is empty.
    #[inline]
    pub fn gen_between(&mut self, lo: u32, hi: u32) -> u32 {
        match self.gen_range(u64::from(hi.saturating_sub(lo))) {
            Some(off) => lo + off as u32,
            None => lo,
        }
    }
}
