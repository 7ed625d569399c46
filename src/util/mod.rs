//! Utility modules

pub mod buffer;
pub mod units;
pub mod verification;
