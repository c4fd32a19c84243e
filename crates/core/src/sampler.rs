//! Golden-ratio integer sampler over a seedable Xorshift64 source.
//!
//! Every draw takes a fresh uniform fraction, offsets it by the golden-ratio
//! conjugate modulo 1, and maps the result into an inclusive integer range.
//! No fractional state is carried between draws; the only state is the
//! underlying generator, so a seeded sampler replays the same values.

/// Conjugate of the golden ratio, `1 / phi`.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is a fixed point of the algorithm and is replaced with a
/// non-zero fallback.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform fraction in [0, 1) built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Draws well-spread integers from inclusive ranges.
#[derive(Debug, Clone)]
pub struct GoldenSampler {
    rng: Xorshift64,
}

impl GoldenSampler {
    /// Creates a reproducible sampler.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xorshift64::new(seed),
        }
    }

    /// Creates a sampler seeded from the thread-local OS-backed RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Samples an integer in `[low, high]` (both inclusive).
    ///
    /// Computes `low + floor(r * (high + 1 - low))` where
    /// `r = (uniform + GOLDEN_RATIO_CONJUGATE) mod 1`. Reversed bounds are
    /// swapped, and a degenerate range returns its single value.
    pub fn sample_within(&mut self, low: i32, high: i32) -> i32 {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let r = (self.rng.next_f64() + GOLDEN_RATIO_CONJUGATE) % 1.0;
        let span = f64::from(high) - f64::from(low) + 1.0;
        let offset = (r * span).floor() as i32;
        // r * span can round up to span for r just below 1
        (low + offset).min(high)
    }
}
