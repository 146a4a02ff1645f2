//! Filter Bank Registry
//!
//! ## Overview
//!
//! [`FilterBank`] owns the persistent state of all nine channels as one
//! explicitly constructed object. It replaces the usual firmware pattern of
//! a process-global state array: build the bank once at startup, after the
//! gravity constant is known, and hand `&mut` access to the rate tasks that
//! feed it.
//!
//! ```text
//! sensor task ──raw sample──→ bank.apply(channel, raw) ──→ estimator
//!                                   │
//!                            mutates only that
//!                            channel's history
//! ```
//!
//! ## Concurrency
//!
//! The bank provides no locking. Per-channel sample ordering is the
//! caller's duty, and Rust's borrow rules supply the
//! single-writer-at-a-time guarantee the recurrence needs: whoever holds
//! the `&mut` advances the filter, nobody else can. Channels are disjoint
//! array slots, so splitting the bank per task (or wrapping it in a short
//! critical section on preemptive targets) coordinates nothing beyond the
//! borrow itself.

use crate::{
    channel::{ChannelId, CHANNELS},
    filter::FirstOrderFilter,
    gains::FilterGains,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Owned registry of all channel filter states.
#[derive(Debug, Clone)]
pub struct FilterBank {
    filters: [FirstOrderFilter; ChannelId::COUNT],
}

impl FilterBank {
    /// Build and initialize every channel in the bank.
    ///
    /// Derives each channel's gains from its registry entry and seeds its
    /// recurrence history: zero everywhere except the two vertical
    /// accelerometer channels, which start at `-accel_one_g`.
    ///
    /// `accel_one_g` is the gravity magnitude of the surrounding system
    /// (conventionally
    /// [`STANDARD_GRAVITY_M_PER_S2`](crate::constants::physics::STANDARD_GRAVITY_M_PER_S2),
    /// but the bank never assumes a value). Call once during startup,
    /// before the first sample reaches [`FilterBank::apply`].
    pub fn new(accel_one_g: f32) -> Self {
        let filters = core::array::from_fn(|i| {
            let spec = &CHANNELS[i];
            let gains = FilterGains::derive_lowpass(spec.tau_s, spec.sample_period_s);
            FirstOrderFilter::new(gains, spec.seed.resolve(accel_one_g))
        });

        log_debug!(
            "filter bank initialized: {} channels, vertical accel seeded at {}",
            ChannelId::COUNT,
            -accel_one_g
        );

        Self { filters }
    }

    /// Advance one channel by one sample, returning the filtered value.
    ///
    /// Channels are independent: this touches no state but the slot named
    /// by `id`, and different channels may be advanced in any order.
    pub fn apply(&mut self, id: ChannelId, raw: f32) -> f32 {
        self.filters[id.index()].apply(raw)
    }

    /// Cold-restart the whole bank.
    ///
    /// Restores every channel's documented initial condition, discarding
    /// all recurrence history. Equivalent to rebuilding the bank; must not
    /// race an in-flight [`FilterBank::apply`] (the `&mut` borrow already
    /// rules that out within safe code).
    pub fn reset(&mut self, accel_one_g: f32) {
        for (filter, spec) in self.filters.iter_mut().zip(&CHANNELS) {
            filter.reset(spec.seed.resolve(accel_one_g));
        }

        log_debug!("filter bank reset, history discarded");
    }

    /// Shared access to one channel's state.
    pub fn filter(&self, id: ChannelId) -> &FirstOrderFilter {
        &self.filters[id.index()]
    }

    /// Exclusive access to one channel's state, for a task that owns the
    /// channel and wants to drive it directly.
    pub fn filter_mut(&mut self, id: ChannelId) -> &mut FirstOrderFilter {
        &mut self.filters[id.index()]
    }
}
