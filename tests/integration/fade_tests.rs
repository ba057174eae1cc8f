//! Integration tests: Blinker::fade brightness curve and cycle boundaries.

use blinker::BoundsError;

use crate::mock_hw::make_blinker;

#[test]
fn default_bounds_cover_full_range() {
    let (mut led, clock) = make_blinker(1000);
    clock.set(0);
    led.fade();
    clock.set(500);
    led.fade();
    assert_eq!(led.port().analog_levels(), vec![0, 255]);
}

#[test]
fn accepted_bounds_shape_the_curve() {
    let (mut led, clock) = make_blinker(1000);
    assert_eq!(led.set_fade_bounds(0, 255), Ok(()));
    assert_eq!(led.set_fade_bounds(20, 220), Ok(()));
    for t in [0, 500] {
        clock.set(t);
        led.fade();
    }
    assert_eq!(led.port().analog_levels(), vec![20, 220]);
}

#[test]
fn rejected_bounds_leave_curve_unchanged() {
    let (mut led, clock) = make_blinker(1000);
    assert_eq!(
        led.set_fade_bounds(50, 40),
        Err(BoundsError::Inverted { min: 50, max: 40 })
    );
    assert!(matches!(
        led.set_fade_bounds(-5, 100),
        Err(BoundsError::OutOfRange { .. })
    ));
    clock.set(500);
    led.fade();
    assert_eq!(led.port().analog_levels(), vec![255]);
}

#[test]
fn brightness_rises_then_falls_within_a_cycle() {
    let (mut led, clock) = make_blinker(1000);
    for t in (0..=1000).step_by(100) {
        clock.set(t);
        led.fade();
    }
    let levels = led.port().analog_levels();
    assert!(levels[..=5].windows(2).all(|w| w[0] <= w[1]), "{levels:?}");
    assert!(levels[5..].windows(2).all(|w| w[0] >= w[1]), "{levels:?}");
}

#[test]
fn cycle_boundary_reported_once_per_period() {
    let (mut led, clock) = make_blinker(1000);
    let mut boundaries = 0;
    for _ in 0..300 {
        clock.advance(10);
        if led.fade() {
            boundaries += 1;
        }
    }
    assert_eq!(boundaries, 3);
    assert_eq!(led.port().write_count(), 300);
}

#[test]
fn boundary_flips_logical_state() {
    let (mut led, clock) = make_blinker(400);
    assert!(!led.state());
    clock.set(400);
    assert!(led.fade());
    assert!(led.state());
}
