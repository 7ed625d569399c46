//! File size distributions
//!
//! A size distribution picks the size, in whole megabytes, of each generated
//! file. The generator owns one distribution for the whole run and draws
//! from it once per file.
//!
//! # Example
//!
//! ```
//! use bulkgen::distribution::{SizeDistribution, uniform::UniformSizes};
//!
//! let mut sizes = UniformSizes::new();
//! let size_mb = sizes.next_size_mb(1, 50);
//! assert!((1..=50).contains(&size_mb));
//! ```

/// Distribution trait for file size selection
///
/// Implementations must return a value in `[min_mb, max_mb]` inclusive.
/// Callers guarantee `min_mb <= max_mb`.
pub trait SizeDistribution: Send {
    /// Draw the next file size in megabytes
    fn next_size_mb(&mut self, min_mb: u64, max_mb: u64) -> u64;
}

pub mod uniform;
