//! Integration tests for the filter bank
//!
//! Exercises the bank end to end the way the firmware's rate tasks would:
//! - Coefficient derivation for both rate classes
//! - Startup seeding and the vertical-accelerometer gravity preload
//! - Step response and settling toward unity DC gain
//! - Determinism and channel isolation across interleaved tasks

use imucond_core::{ChannelId, FilterBank, FilterGains, RateClass};
use imucond_core::constants::physics::STANDARD_GRAVITY_M_PER_S2;
use imucond_core::constants::timing::LOWPASS_TAU_S;

use proptest::prelude::*;

const ONE_G: f32 = STANDARD_GRAVITY_M_PER_S2;

#[test]
fn derived_gains_match_both_rate_classes() {
    // TAU = 0.05s, T = 0.002s => A = 50
    let fast = FilterGains::lowpass(0.05, 0.002).unwrap();
    assert!((fast.g1() - 0.019608).abs() < 1e-6);
    assert!((fast.g2() - 0.019608).abs() < 1e-6);
    assert!((fast.g3() - (-0.960784)).abs() < 1e-6);

    // TAU = 0.05s, T = 0.01s => A = 10
    let slow = FilterGains::lowpass(0.05, 0.01).unwrap();
    assert!((slow.g1() - 0.090909).abs() < 1e-6);
    assert!((slow.g2() - 0.090909).abs() < 1e-6);
    assert!((slow.g3() - (-0.818182)).abs() < 1e-6);
}

#[test]
fn vertical_accel_startup_scenario() {
    let mut bank = FilterBank::new(ONE_G);

    // At rest the vertical axis reads a steady -1 g; with the history
    // preloaded, the first sample passes through unchanged.
    let settled = bank.apply(ChannelId::AccelZ500Hz, -ONE_G);
    assert!((settled - (-ONE_G)).abs() < 1e-4);
    assert!((bank.filter(ChannelId::AccelZ500Hz).output() - (-ONE_G)).abs() < 1e-4);

    // A tilt changes the reading; the filter moves toward it without
    // jumping.
    let smoothed = bank.apply(ChannelId::AccelZ500Hz, -9.0);
    assert!(smoothed > -ONE_G && smoothed < -9.0);
}

#[test]
fn step_response_settles_to_unity_gain() {
    let mut bank = FilterBank::new(ONE_G);
    let target = 0.35; // rad/s step on the yaw gyro

    // Settling budget scales with TAU/T: ten time constants is plenty.
    let period = RateClass::Hz500.sample_period_s();
    let iterations = (10.0 * LOWPASS_TAU_S / period) as usize;

    let mut output = 0.0;
    for _ in 0..iterations {
        output = bank.apply(ChannelId::GyroYaw500Hz, target);
    }
    assert!((output - target).abs() < 1e-3 * target.abs());

    // Same property on the slow class, fewer samples needed.
    let period = RateClass::Hz100.sample_period_s();
    let iterations = (10.0 * LOWPASS_TAU_S / period) as usize;

    let mut output = 0.0;
    for _ in 0..iterations {
        output = bank.apply(ChannelId::AccelX100Hz, target);
    }
    assert!((output - target).abs() < 1e-3 * target.abs());
}

#[test]
fn interleaved_tasks_do_not_interfere() {
    // Run the 500 Hz and 100 Hz tasks interleaved the way the scheduler
    // would (five fast ticks per slow tick) and compare against a bank
    // that ran each channel alone.
    let mut shared = FilterBank::new(ONE_G);
    let mut solo_fast = FilterBank::new(ONE_G);
    let mut solo_slow = FilterBank::new(ONE_G);

    for tick in 0..500u32 {
        let fast_sample = (tick % 7) as f32 * 0.1 - 0.3;
        let a = shared.apply(ChannelId::GyroRoll500Hz, fast_sample);
        let b = solo_fast.apply(ChannelId::GyroRoll500Hz, fast_sample);
        assert_eq!(a, b);

        if tick % 5 == 0 {
            let slow_sample = -ONE_G + (tick % 11) as f32 * 0.05;
            let a = shared.apply(ChannelId::AccelZ100Hz, slow_sample);
            let b = solo_slow.apply(ChannelId::AccelZ100Hz, slow_sample);
            assert_eq!(a, b);
        }
    }
}

#[test]
fn reset_restores_documented_seeds() {
    let mut bank = FilterBank::new(ONE_G);

    for id in ChannelId::ALL {
        for _ in 0..20 {
            bank.apply(id, 2.5);
        }
    }

    bank.reset(ONE_G);

    for id in ChannelId::ALL {
        let expected = match id {
            ChannelId::AccelZ500Hz | ChannelId::AccelZ100Hz => -ONE_G,
            _ => 0.0,
        };
        assert_eq!(bank.filter(id).output(), expected, "{}", id.name());
    }
}

proptest! {
    #[test]
    fn identical_input_sequences_are_deterministic(
        inputs in proptest::collection::vec(-100.0f32..100.0, 1..256)
    ) {
        let mut first = FilterBank::new(ONE_G);
        let mut second = FilterBank::new(ONE_G);

        for &raw in &inputs {
            let a = first.apply(ChannelId::AccelY500Hz, raw);
            let b = second.apply(ChannelId::AccelY500Hz, raw);
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn constant_input_converges_everywhere(x in -50.0f32..50.0) {
        let mut bank = FilterBank::new(ONE_G);

        for id in ChannelId::ALL {
            let iterations =
                (10.0 * LOWPASS_TAU_S / id.rate().sample_period_s()) as usize;

            let mut output = 0.0;
            for _ in 0..iterations {
                output = bank.apply(id, x);
            }
            prop_assert!((output - x).abs() < 1e-3 * x.abs().max(1.0));
        }
    }
}
