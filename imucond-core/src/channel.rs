//! Channel Registry
//!
//! ## Overview
//!
//! Every physical signal the bank conditions is one *channel*: a (signal,
//! sample rate) pair with its own persistent filter state. The set is
//! closed at compile time and enumerated by [`ChannelId`]; the static
//! [`CHANNELS`] table is the single source of truth for each channel's
//! design parameters and initial condition.
//!
//! Nine channels feed two fixed-rate tasks:
//!
//! ```text
//! 500 Hz task ──→ AccelX/Y/Z500Hz, GyroRoll/Pitch/Yaw500Hz
//! 100 Hz task ──→ AccelX/Y/Z100Hz
//! ```
//!
//! Adding or removing a channel, or moving one to a different rate class,
//! is a one-line change to the table; gain derivation and the recurrence
//! engine never change.

use crate::constants::timing::{
    FAST_SAMPLE_PERIOD_S, FAST_SAMPLE_RATE_HZ, LOWPASS_TAU_S,
    SLOW_SAMPLE_PERIOD_S, SLOW_SAMPLE_RATE_HZ,
};

/// Identity of one filter channel.
///
/// Doubles as the dense index into the bank's state array: discriminants
/// follow table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ChannelId {
    /// Accelerometer X axis, 500 Hz task
    AccelX500Hz = 0,
    /// Accelerometer Y axis, 500 Hz task
    AccelY500Hz = 1,
    /// Accelerometer Z (vertical) axis, 500 Hz task
    AccelZ500Hz = 2,
    /// Gyro roll rate, 500 Hz task
    GyroRoll500Hz = 3,
    /// Gyro pitch rate, 500 Hz task
    GyroPitch500Hz = 4,
    /// Gyro yaw rate, 500 Hz task
    GyroYaw500Hz = 5,
    /// Accelerometer X axis, 100 Hz task
    AccelX100Hz = 6,
    /// Accelerometer Y axis, 100 Hz task
    AccelY100Hz = 7,
    /// Accelerometer Z (vertical) axis, 100 Hz task
    AccelZ100Hz = 8,
}

impl ChannelId {
    /// Number of channels in the bank.
    pub const COUNT: usize = 9;

    /// All channels, in table order.
    pub const ALL: [ChannelId; Self::COUNT] = [
        ChannelId::AccelX500Hz,
        ChannelId::AccelY500Hz,
        ChannelId::AccelZ500Hz,
        ChannelId::GyroRoll500Hz,
        ChannelId::GyroPitch500Hz,
        ChannelId::GyroYaw500Hz,
        ChannelId::AccelX100Hz,
        ChannelId::AccelY100Hz,
        ChannelId::AccelZ100Hz,
    ];

    /// Dense index of this channel in the bank's state array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Which fixed-rate task feeds this channel.
    pub const fn rate(self) -> RateClass {
        match self {
            ChannelId::AccelX500Hz
            | ChannelId::AccelY500Hz
            | ChannelId::AccelZ500Hz
            | ChannelId::GyroRoll500Hz
            | ChannelId::GyroPitch500Hz
            | ChannelId::GyroYaw500Hz => RateClass::Hz500,
            ChannelId::AccelX100Hz
            | ChannelId::AccelY100Hz
            | ChannelId::AccelZ100Hz => RateClass::Hz100,
        }
    }

    /// Get human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            ChannelId::AccelX500Hz => "accel_x_500hz",
            ChannelId::AccelY500Hz => "accel_y_500hz",
            ChannelId::AccelZ500Hz => "accel_z_500hz",
            ChannelId::GyroRoll500Hz => "gyro_roll_500hz",
            ChannelId::GyroPitch500Hz => "gyro_pitch_500hz",
            ChannelId::GyroYaw500Hz => "gyro_yaw_500hz",
            ChannelId::AccelX100Hz => "accel_x_100hz",
            ChannelId::AccelY100Hz => "accel_y_100hz",
            ChannelId::AccelZ100Hz => "accel_z_100hz",
        }
    }
}

/// The two fixed sample-rate classes of the surrounding control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RateClass {
    /// Inner-loop task, one sample every 2 ms
    Hz500,
    /// Outer-loop task, one sample every 10 ms
    Hz100,
}

impl RateClass {
    /// Sample period of this class in seconds.
    pub const fn sample_period_s(self) -> f32 {
        match self {
            RateClass::Hz500 => FAST_SAMPLE_PERIOD_S,
            RateClass::Hz100 => SLOW_SAMPLE_PERIOD_S,
        }
    }

    /// Sample rate of this class in Hz.
    pub const fn sample_rate_hz(self) -> f32 {
        match self {
            RateClass::Hz500 => FAST_SAMPLE_RATE_HZ,
            RateClass::Hz100 => SLOW_SAMPLE_RATE_HZ,
        }
    }
}

/// Initial-condition selector for a channel's recurrence history.
///
/// The gravity magnitude itself is injected when the bank is built; the
/// table only records *which* channels are seeded with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Seed {
    /// History starts at zero (signals centered on zero at rest)
    Zero,
    /// History starts at the negative of the injected gravity magnitude
    ///
    /// The vertical accelerometer axis reads a steady −1 g at rest under
    /// the control loop's sign convention; seeding with that value skips
    /// the ramp-from-zero startup transient.
    NegOneG,
}

impl Seed {
    /// Resolve the seed against the injected gravity magnitude.
    pub const fn resolve(self, accel_one_g: f32) -> f32 {
        match self {
            Seed::Zero => 0.0,
            Seed::NegOneG => -accel_one_g,
        }
    }
}

/// Design parameters of one channel: where its gains come from and how its
/// history is seeded.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelSpec {
    /// Channel this entry configures
    pub id: ChannelId,
    /// Filter time constant in seconds
    pub tau_s: f32,
    /// Sample period in seconds (inverse of the feeding task's rate)
    pub sample_period_s: f32,
    /// Initial-condition selector
    pub seed: Seed,
}

const fn spec(id: ChannelId, seed: Seed) -> ChannelSpec {
    ChannelSpec {
        id,
        tau_s: LOWPASS_TAU_S,
        sample_period_s: id.rate().sample_period_s(),
        seed,
    }
}

/// The channel registry: one entry per [`ChannelId`], in index order.
pub static CHANNELS: [ChannelSpec; ChannelId::COUNT] = [
    spec(ChannelId::AccelX500Hz, Seed::Zero),
    spec(ChannelId::AccelY500Hz, Seed::Zero),
    spec(ChannelId::AccelZ500Hz, Seed::NegOneG),
    spec(ChannelId::GyroRoll500Hz, Seed::Zero),
    spec(ChannelId::GyroPitch500Hz, Seed::Zero),
    spec(ChannelId::GyroYaw500Hz, Seed::Zero),
    spec(ChannelId::AccelX100Hz, Seed::Zero),
    spec(ChannelId::AccelY100Hz, Seed::Zero),
    spec(ChannelId::AccelZ100Hz, Seed::NegOneG),
];

impl ChannelId {
    /// This channel's entry in the registry table.
    pub fn spec(self) -> &'static ChannelSpec {
        &CHANNELS[self.index()]
    }
}
