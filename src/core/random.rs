//! xorshift32 random source
//!
//! Small and deterministic for a given seed, which keeps simulation tests
//! reproducible. Browser builds seed from `Math.random()`.

const DEFAULT_SEED: u32 = 12345;
const U32_RANGE: f64 = 4_294_967_296.0;

/// Random number generator (xorshift32)
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

impl Rng {
    /// Zero is a fixed point of xorshift, so it is replaced by the default seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    pub fn from_entropy() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new((js_sys::Math::random() * U32_RANGE) as u32)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos())
                .unwrap_or(DEFAULT_SEED);
            Self::new(nanos)
        }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        xorshift32(&mut self.state)
    }

    /// Uniform sample in the open interval (0, 1)
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        // xorshift32 never yields 0, so the result is strictly positive
        self.next_u32() as f64 / U32_RANGE
    }

    /// Uniform sample in `[0, extent)`; zero or negative extents yield 0
    #[inline]
    pub fn below(&mut self, extent: f64) -> f64 {
        if extent > 0.0 {
            self.next_f64() * extent
        } else {
            0.0
        }
    }

    /// Uniform sample in the open interval (low, high)
    #[inline]
    pub fn between(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_f64() * (high - low)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = Rng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::new(99);
        let mut b = Rng::new(99);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn samples_stay_in_range() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let u = rng.next_f64();
            assert!(u > 0.0 && u < 1.0);
            let x = rng.below(800.0);
            assert!((0.0..800.0).contains(&x));
            let life = rng.between(100.0, 300.0);
            assert!(life > 100.0 && life < 300.0);
        }
        assert_eq!(rng.below(0.0), 0.0);
    }
}
