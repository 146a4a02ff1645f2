//! Fixed first-order filter bank for IMU signal conditioning
//!
//! Smooths raw accelerometer and gyro samples before they reach the
//! orientation estimator and stabilization control loop. Designed for
//! small embedded controllers running fixed-rate sensor tasks.
//!
//! Key constraints:
//! - No heap allocation anywhere
//! - No branching in the per-sample hot path
//! - Deterministic, bounded-time operations only
//!
//! ```no_run
//! use imucond_core::{ChannelId, FilterBank};
//! use imucond_core::constants::physics::STANDARD_GRAVITY_M_PER_S2;
//!
//! let mut bank = FilterBank::new(STANDARD_GRAVITY_M_PER_S2);
//!
//! // Inside the 500 Hz sensor task:
//! let smoothed = bank.apply(ChannelId::AccelX500Hz, 0.12);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bank;
pub mod channel;
pub mod constants;
pub mod errors;
pub mod filter;
pub mod gains;

// Public API
pub use bank::FilterBank;
pub use channel::{ChannelId, ChannelSpec, RateClass, Seed, CHANNELS};
pub use errors::{FilterError, FilterResult};
pub use filter::FirstOrderFilter;
pub use gains::FilterGains;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
