//! PRNG for simulated statistic values. Uses SplitMix64 for good statistical
//! quality with trivial state. Deterministic: same seed produces the same
//! sequence. Not cryptographically secure.

const SPLITMIX64_GOLDEN: u64 = 0x9e3779b97f4a7c15;
const SPLITMIX64_M1: u64 = 0xbf58476d1ce4e5b9;
const SPLITMIX64_M2: u64 = 0x94d049bb133111eb;

#[derive(Debug, Clone, Copy)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(SPLITMIX64_GOLDEN);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(SPLITMIX64_M1);
        z = (z ^ (z >> 27)).wrapping_mul(SPLITMIX64_M2);
        z ^ (z >> 31)
    }

    /// Uniform draw in [lo, hi). Uses the top 53 bits for a full-precision
    /// f64 in [0, 1).
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

/// Round to two decimal places (half away from zero, like f64::round).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix64_deterministic() {
        let mut a = Rng::new(7);
        let mut b = Rng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn splitmix64_different_seeds_differ() {
        let mut a = Rng::new(1);
        let mut b = Rng::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = Rng::new(42);
        for _ in 0..10_000 {
            let v = rng.uniform(10.0, 100.0);
            assert!((10.0..100.0).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(43.267), 43.27);
        assert_eq!(round2(10.0), 10.0);
        assert_eq!(round2(99.994999), 99.99);
    }

    #[test]
    fn round2_is_idempotent() {
        let mut rng = Rng::new(3);
        for _ in 0..1_000 {
            let v = round2(rng.uniform(10.0, 100.0));
            assert_eq!(round2(v), v);
        }
    }
}
