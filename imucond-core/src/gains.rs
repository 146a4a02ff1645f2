//! Recurrence Gain Derivation
//!
//! ## Overview
//!
//! Derives the three recurrence gains of a first-order digital low-pass
//! filter from a continuous-time design pair: the time constant `TAU`
//! (smoothing strength, seconds) and the sample period `T` (seconds).
//! The derivation is the bilinear-transform discretization of the analog
//! single-pole low-pass:
//!
//! ```text
//! A  = 2 * TAU / T
//!
//! Low Pass:
//! g1 = 1 / (1 + A)
//! g2 = 1 / (1 + A)
//! g3 = (1 - A) / (1 + A)
//! ```
//!
//! The matching high-pass gains fall out of the same transform and are
//! recorded here for reference, but no channel in the bank uses them and
//! this crate does not implement them:
//!
//! ```text
//! High Pass:
//! g1 =  A / (1 + A)
//! g2 = -A / (1 + A)
//! g3 = (1 - A) / (1 + A)
//! ```
//!
//! ## Design Rationale
//!
//! Gains are derived once, at configuration time, and cached in the filter
//! state rather than recomputed per sample. Validation of the design pair
//! happens here too, so the per-sample recurrence stays branch-free: a
//! [`FilterGains`] value that exists is always the product of a valid
//! `(TAU, T)` pair or of the built-in channel table.

use crate::errors::{FilterError, FilterResult};

/// Recurrence gains of one first-order low-pass filter.
///
/// Immutable once derived; the filter state holds a copy and there is no
/// way to mutate it afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterGains {
    g1: f32,
    g2: f32,
    g3: f32,
}

impl FilterGains {
    /// Derive low-pass gains from a time constant and sample period.
    ///
    /// Rejects non-finite or non-positive design parameters. A zero or
    /// negative `TAU` would place the discrete pole on or outside the unit
    /// circle; a zero or negative `T` is not a sampling interval.
    pub fn lowpass(tau_s: f32, period_s: f32) -> FilterResult<Self> {
        if !tau_s.is_finite() || tau_s <= 0.0 {
            return Err(FilterError::InvalidTimeConstant { tau_s });
        }
        if !period_s.is_finite() || period_s <= 0.0 {
            return Err(FilterError::InvalidSamplePeriod { period_s });
        }

        Ok(Self::derive_lowpass(tau_s, period_s))
    }

    /// Pure derivation, used directly for the static channel table whose
    /// entries are known-valid compile-time constants.
    pub(crate) fn derive_lowpass(tau_s: f32, period_s: f32) -> Self {
        let a = 2.0 * tau_s / period_s;

        Self {
            g1: 1.0 / (1.0 + a),
            g2: 1.0 / (1.0 + a),
            g3: (1.0 - a) / (1.0 + a),
        }
    }

    /// Gain applied to the current raw sample.
    pub const fn g1(&self) -> f32 {
        self.g1
    }

    /// Gain applied to the previous raw sample.
    pub const fn g2(&self) -> f32 {
        self.g2
    }

    /// Gain applied to the previous filtered output (subtracted).
    pub const fn g3(&self) -> f32 {
        self.g3
    }

    /// Steady-state gain of the recurrence at DC.
    ///
    /// `(g1 + g2) / (1 + g3)`; algebraically exactly 1.0 for the low-pass
    /// derivation. Exposed for diagnostics and tests.
    pub fn dc_gain(&self) -> f32 {
        (self.g1 + self.g2) / (1.0 + self.g3)
    }
}
