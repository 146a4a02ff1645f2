//! Filter Timing Constants
//!
//! Time constants and sample periods for the two fixed-rate sensor tasks
//! that feed the filter bank. Changing a channel's cutoff or rate means
//! changing a value here and letting initialization re-derive the gains;
//! there is no runtime reconfiguration surface.

// ===== SMOOTHING STRENGTH =====

/// Low-pass filter time constant (seconds).
///
/// Every channel in the bank shares this smoothing strength. At 0.05 s the
/// filter settles to ~63% of a step within 25 samples at 500 Hz, enough to
/// suppress vibration-band noise without adding phase lag the attitude
/// estimator would notice.
///
/// Source: bench tuning against the stabilization loop bandwidth
pub const LOWPASS_TAU_S: f32 = 0.05;

// ===== RATE CLASSES =====

/// Sample period of the fast sensor task (seconds).
///
/// The 500 Hz class: gyro rates and primary accelerometer axes, sampled
/// every 2 ms in the inner control loop.
pub const FAST_SAMPLE_PERIOD_S: f32 = 0.002;

/// Sample rate of the fast sensor task (Hz).
pub const FAST_SAMPLE_RATE_HZ: f32 = 500.0;

/// Sample period of the slow sensor task (seconds).
///
/// The 100 Hz class: the secondary accelerometer path consumed by the
/// outer estimation loop, sampled every 10 ms.
pub const SLOW_SAMPLE_PERIOD_S: f32 = 0.01;

/// Sample rate of the slow sensor task (Hz).
pub const SLOW_SAMPLE_RATE_HZ: f32 = 100.0;
