//! Physical Constants for Inertial Sensing
//!
//! Values consumed by callers of the filter bank. The bank itself never
//! reads these implicitly: the gravity magnitude used to seed the vertical
//! accelerometer channels is injected at construction, and this module only
//! supplies the conventional value to inject.

/// Standard gravity acceleration magnitude (m/s²).
///
/// The conventional value of Earth's gravitational acceleration, used to
/// pre-load the vertical accelerometer channels so the filter history
/// starts at the reading a level, stationary sensor actually produces.
///
/// Under the sign convention of the surrounding control loop the vertical
/// axis reads −1 g at rest, so the seed is the *negative* of this value.
///
/// Source: ISO 80000-3, CODATA standard acceleration of gravity
pub const STANDARD_GRAVITY_M_PER_S2: f32 = 9.80665;
