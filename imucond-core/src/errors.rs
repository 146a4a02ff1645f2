//! Error Types for Filter Design Failures
//!
//! ## Design Philosophy
//!
//! The error surface of this crate is deliberately small and lives entirely
//! at configuration time:
//!
//! 1. **Hot path is total**: the per-sample recurrence never validates its
//!    input and never fails. A filter cannot exist without valid gains, so
//!    there is no "uninitialized state" error to report at runtime.
//!
//! 2. **Small Size**: error variants carry only the offending value inline -
//!    no String, no heap allocation. Errors implement Copy.
//!
//! 3. **Actionable Information**: each variant names the design parameter
//!    that was rejected, so a bad channel table entry or custom design is
//!    caught where it is written, not where samples flow.
//!
//! Non-finite raw samples are not an error here: the sensor layer owns
//! input sanity, and a NaN fed to the recurrence simply poisons that
//! channel until it is reset.

use thiserror_no_std::Error;

/// Result type for filter design operations
pub type FilterResult<T> = Result<T, FilterError>;

/// Filter design errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FilterError {
    /// Time constant must be finite and strictly positive
    #[error("Time constant {tau_s}s is not a valid smoothing strength")]
    InvalidTimeConstant {
        /// The rejected time constant in seconds
        tau_s: f32,
    },

    /// Sample period must be finite and strictly positive
    #[error("Sample period {period_s}s is not a valid sampling interval")]
    InvalidSamplePeriod {
        /// The rejected sample period in seconds
        period_s: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for FilterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidTimeConstant { tau_s } =>
                defmt::write!(fmt, "Invalid time constant {}s", tau_s),
            Self::InvalidSamplePeriod { period_s } =>
                defmt::write!(fmt, "Invalid sample period {}s", period_s),
        }
    }
}
