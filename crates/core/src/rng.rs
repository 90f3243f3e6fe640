//! Seeded random stream shared by every generation component.
//!
//! All draws (integers, floats, shuffles, sampling) are pure functions of the
//! seed and the order in which they are requested.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
    seed: u32,
}

impl RandomSource {
    pub fn new(seed: u32) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(u64::from(seed)), seed }
    }

    /// Restart the stream from `seed`, discarding all prior state.
    pub fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    /// Uniform integer in `0..bound`. Returns 0 when `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        let bound = bound as u64;
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let value = self.rng.next_u64();
            if value < zone {
                return (value % bound) as usize;
            }
        }
    }

    /// Uniform integer in `min..=max`.
    pub fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min <= max);
        min + self.below(max - min + 1)
    }

    /// Uniform float in `[0, 1)` built from the top 53 bits of one draw.
    pub fn unit_f64(&mut self) -> f64 {
        (self.rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit_f64() < probability
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.below(items.len())])
        }
    }

    /// Draw `count` items independently, so repeats are allowed.
    pub fn sample_with_replacement<T: Clone>(&mut self, items: &[T], count: usize) -> Vec<T> {
        if items.is_empty() {
            return Vec::new();
        }
        (0..count).map(|_| items[self.below(items.len())].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_seeds_produce_identical_streams() {
        let mut left = RandomSource::new(42);
        let mut right = RandomSource::new(42);
        for _ in 0..64 {
            assert_eq!(left.next_u64(), right.next_u64());
        }
    }

    #[test]
    fn reseed_restarts_the_stream() {
        let mut rng = RandomSource::new(7);
        let first: Vec<usize> = (0..8).map(|_| rng.below(1000)).collect();
        rng.reseed(7);
        let second: Vec<usize> = (0..8).map(|_| rng.below(1000)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn range_inclusive_stays_inside_requested_bounds() {
        let mut rng = RandomSource::new(12_345);
        for _ in 0..500 {
            let value = rng.range_inclusive(7, 13);
            assert!((7..=13).contains(&value));
        }
    }

    #[test]
    fn unit_float_is_half_open() {
        let mut rng = RandomSource::new(3);
        for _ in 0..1000 {
            let value = rng.unit_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = RandomSource::new(99);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn sampling_from_empty_pool_yields_nothing() {
        let mut rng = RandomSource::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.sample_with_replacement(&empty, 5).is_empty());
        assert!(rng.choose(&empty).is_none());
    }
}
