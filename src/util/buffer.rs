//! Chunk buffer for random file contents
//!
//! Files are written one chunk at a time so peak memory stays at a single
//! chunk regardless of file size. Every chunk handed out is refilled with
//! fresh pseudo-random bytes, so no two chunks of a file repeat.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Reusable buffer that yields freshly randomized chunks
///
/// Uses the xoshiro256++ PRNG: fast, with good statistical properties,
/// and not cryptographically secure (none is required here).
pub struct ChunkBuffer {
    data: Vec<u8>,
    rng: Xoshiro256PlusPlus,
}

impl ChunkBuffer {
    /// Create a chunk buffer seeded from system entropy
    ///
    /// # Panics
    /// Panics if `chunk_size` is 0
    pub fn new(chunk_size: usize) -> Self {
        Self::with_rng(chunk_size, Xoshiro256PlusPlus::from_entropy())
    }

    /// Create a chunk buffer with a fixed seed
    ///
    /// Useful for reproducible runs and tests.
    pub fn with_seed(chunk_size: usize, seed: u64) -> Self {
        Self::with_rng(chunk_size, Xoshiro256PlusPlus::seed_from_u64(seed))
    }

    fn with_rng(chunk_size: usize, rng: Xoshiro256PlusPlus) -> Self {
        assert!(chunk_size > 0, "Chunk size must be greater than 0");
        Self {
            data: vec![0u8; chunk_size],
            rng,
        }
    }

    /// Maximum number of bytes a single chunk can hold
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Generate the next chunk of random data
    ///
    /// Returns `min(len, capacity)` bytes, all freshly generated.
    pub fn next_chunk(&mut self, len: usize) -> &[u8] {
        let len = len.min(self.data.len());
        let chunk = &mut self.data[..len];
        self.rng.fill_bytes(chunk);
        chunk
    }
}
