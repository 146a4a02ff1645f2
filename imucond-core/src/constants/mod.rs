//! Constants for the filter bank
//!
//! Centralized, documented constants used throughout the crate. The filter
//! bank is configured entirely at compile time; these modules are that
//! configuration.
//!
//! ## Organization
//!
//! - **Physics**: physical constants consumed by callers (gravity seed)
//! - **Timing**: time constants and sample periods for the two rate classes
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Include units in constant names
//! 3. Reference the standard or datasheet a value comes from

/// Physical constants relevant to inertial sensing.
pub mod physics;

/// Filter time constants and sample timing for the rate classes.
pub mod timing;

// Re-export commonly used constants for convenience
pub use physics::STANDARD_GRAVITY_M_PER_S2;

pub use timing::{
    LOWPASS_TAU_S,
    FAST_SAMPLE_PERIOD_S, FAST_SAMPLE_RATE_HZ,
    SLOW_SAMPLE_PERIOD_S, SLOW_SAMPLE_RATE_HZ,
};
