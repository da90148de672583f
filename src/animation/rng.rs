/// Source of uniformly distributed numbers in `[0, 1)`.
///
/// Transition durations are randomized through this trait so callers can inject a fixed or
/// seeded source.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_f64_01(&mut self) -> f64;
}

/// Deterministic SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for Rng64 {
    fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Sample uniformly from `[lo, hi)`.
pub fn random_range(src: &mut dyn RandomSource, lo: f64, hi: f64) -> f64 {
    let t = src.next_f64_01().clamp(0.0, 1.0);
    lo + (hi - lo) * t
}

#[cfg(test)]
#[path = "../../tests/unit/animation/rng.rs"]
mod tests;
