//! Uniform size distribution
//!
//! Every size in the configured range is equally likely. Uses the
//! xoshiro256++ PRNG, which is fast and statistically sound but not
//! cryptographically secure.
//!
//! # Example
//!
//! ```
//! use bulkgen::distribution::{SizeDistribution, uniform::UniformSizes};
//!
//! let mut sizes = UniformSizes::with_seed(7);
//! for _ in 0..10 {
//!     let size_mb = sizes.next_size_mb(2, 4);
//!     assert!((2..=4).contains(&size_mb));
//! }
//! ```

use super::SizeDistribution;
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Uniform inclusive size distribution
pub struct UniformSizes {
    rng: Xoshiro256PlusPlus,
}

impl UniformSizes {
    /// Create a new uniform distribution with random seed
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_entropy(),
        }
    }

    /// Create a new uniform distribution with specific seed
    ///
    /// Useful for reproducible runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for UniformSizes {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeDistribution for UniformSizes {
    #[inline]
    fn next_size_mb(&mut self, min_mb: u64, max_mb: u64) -> u64 {
        if min_mb >= max_mb {
            return min_mb;
        }
        self.rng.gen_range(min_mb..=max_mb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sizes_in_range() {
        let mut sizes = UniformSizes::new();

        for _ in 0..1000 {
            let size = sizes.next_size_mb(1, 50);
            assert!((1..=50).contains(&size), "size {} out of range", size);
        }
    }

    #[test]
    fn test_uniform_sizes_degenerate_range() {
        let mut sizes = UniformSizes::new();
        for _ in 0..10 {
            assert_eq!(sizes.next_size_mb(3, 3), 3);
        }
    }

    #[test]
    fn test_uniform_sizes_seeded() {
        let mut a = UniformSizes::with_seed(12345);
        let mut b = UniformSizes::with_seed(12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(a.next_size_mb(1, 50), b.next_size_mb(1, 50));
        }
    }

    #[test]
    fn test_uniform_sizes_hit_both_bounds() {
        let mut sizes = UniformSizes::with_seed(42);
        let mut seen = [false; 4];

        for _ in 0..1000 {
            let size = sizes.next_size_mb(1, 4);
            seen[(size - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "inclusive range not covered: {:?}", seen);
    }

    #[test]
    fn test_uniform_sizes_coverage() {
        let mut sizes = UniformSizes::with_seed(42);
        let mut buckets = vec![0u32; 10];

        for _ in 0..10000 {
            let size = sizes.next_size_mb(1, 10);
            buckets[(size - 1) as usize] += 1;
        }

        // Each bucket should have roughly 1000 samples; allow 20% deviation
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }
}
