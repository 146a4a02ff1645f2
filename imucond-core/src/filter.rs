//! Single-Channel Filter Engine
//!
//! One [`FirstOrderFilter`] is the persistent state of one channel: its
//! derived gains plus the last raw sample and last filtered output. The
//! engine itself is the two-line recurrence in [`FirstOrderFilter::apply`];
//! everything else is construction and reset.
//!
//! The state cannot be built without gains and an initial condition, so
//! "filtering with uninitialized state" is unrepresentable rather than
//! checked per sample.

use crate::gains::FilterGains;

/// Persistent state of one first-order low-pass channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderFilter {
    gains: FilterGains,
    previous_input: f32,
    previous_output: f32,
}

impl FirstOrderFilter {
    /// Create a filter with the given gains, seeding the recurrence history
    /// with `initial`.
    ///
    /// Seeding both history fields with the expected steady-state reading
    /// (e.g. −1 g for a vertical accelerometer at rest) avoids a startup
    /// transient where the output ramps from zero to the true value.
    pub const fn new(gains: FilterGains, initial: f32) -> Self {
        Self {
            gains,
            previous_input: initial,
            previous_output: initial,
        }
    }

    /// Advance the filter by exactly one sample.
    ///
    /// Computes `g1*raw + g2*previous_input - g3*previous_output`, then
    /// records `raw` and the result as the new history. Total function:
    /// accepts any finite input, never branches. Caller must serialize
    /// calls in sample arrival order; the `&mut` borrow enforces a single
    /// writer at a time.
    pub fn apply(&mut self, raw: f32) -> f32 {
        let output = self.gains.g1() * raw
            + self.gains.g2() * self.previous_input
            - self.gains.g3() * self.previous_output;

        self.previous_input = raw;
        self.previous_output = output;

        output
    }

    /// Discard history and restore the given initial condition.
    ///
    /// Gains are untouched; only the recurrence history resets.
    pub fn reset(&mut self, initial: f32) {
        self.previous_input = initial;
        self.previous_output = initial;
    }

    /// Last filtered output produced by this channel.
    pub const fn output(&self) -> f32 {
        self.previous_output
    }

    /// The recurrence gains this channel was built with.
    pub const fn gains(&self) -> FilterGains {
        self.gains
    }
}
