//! Integration tests: enable / disable / off semantics.

use blinker::{Mode, PinState};

use crate::mock_hw::{LED, PortCall, make_blinker};

#[test]
fn disabled_polls_never_write() {
    let (mut led, clock) = make_blinker(1000);
    led.disable();
    let writes = led.port().write_count();
    for _ in 0..20 {
        clock.advance(250);
        assert!(!led.blink());
        assert!(!led.fade());
        assert!(!led.poll(Mode::Fade));
    }
    assert_eq!(led.port().write_count(), writes);
}

#[test]
fn disable_forces_line_low() {
    let (mut led, _clock) = make_blinker(1000);
    led.disable();
    assert!(!led.is_enabled());
    assert_eq!(led.port().last_call(), Some(&PortCall::Digital(LED, PinState::Low)));
}

#[test]
fn enable_resumes_without_catch_up_suppression() {
    let (mut led, clock) = make_blinker(1000);
    clock.set(500);
    assert!(led.blink());
    led.disable();
    clock.set(60_000);
    led.enable();
    assert!(led.is_enabled());
    assert!(led.blink(), "pause longer than half-period must toggle at once");
}

#[test]
fn enable_resumes_fade_with_immediate_boundary() {
    let (mut led, clock) = make_blinker(1000);
    led.disable();
    clock.set(10_000);
    led.enable();
    assert!(led.fade());
}

#[test]
fn off_does_not_disable() {
    let (mut led, clock) = make_blinker(1000);
    led.off();
    assert!(led.is_enabled());
    assert_eq!(led.port().last_call(), Some(&PortCall::Digital(LED, PinState::Low)));
    clock.set(500);
    assert!(led.blink());
}
