//! Integration tests: Blinker::blink square wave timing.

use blinker::adapters::hal::HalPinPort;
use blinker::adapters::time::ManualClock;
use blinker::{Blinker, PinState};

use crate::mock_hw::{LED, PortCall, make_blinker};

#[test]
fn begin_configures_the_channel_once() {
    let (led, _clock) = make_blinker(1000);
    assert_eq!(led.port().calls, vec![PortCall::Configure(LED)]);
}

#[test]
fn half_period_spacing_alternates_every_call() {
    let (mut led, clock) = make_blinker(1000);
    for _ in 0..6 {
        clock.advance(500);
        assert!(led.blink(), "edge expected every half-period");
    }
    assert_eq!(
        led.port().digital_levels(),
        vec![
            PinState::Low,
            PinState::High,
            PinState::Low,
            PinState::High,
            PinState::Low,
            PinState::High,
        ]
    );
}

#[test]
fn shorter_spacing_never_writes() {
    let (mut led, clock) = make_blinker(1000);
    clock.set(500);
    assert!(led.blink());
    let writes = led.port().write_count();
    for _ in 0..4 {
        clock.advance(100);
        assert!(!led.blink());
    }
    assert_eq!(led.port().write_count(), writes);
}

#[test]
fn initial_state_is_first_level_written() {
    let clock = ManualClock::new();
    let mut led = Blinker::with_period(crate::mock_hw::MockPort::new(), clock.clone(), LED, 200, true);
    clock.set(100);
    assert!(led.blink());
    assert_eq!(led.port().last_call(), Some(&PortCall::Digital(LED, PinState::High)));
}

#[test]
fn late_poll_toggles_once_and_rebases_phase() {
    let (mut led, clock) = make_blinker(1000);
    clock.set(5_000);
    assert!(led.blink());
    assert!(!led.blink(), "phase rebased to the late poll");
    clock.set(5_499);
    assert!(!led.blink());
    clock.set(5_500);
    assert!(led.blink());
}

#[test]
fn period_change_takes_effect_next_poll() {
    let (mut led, clock) = make_blinker(1000);
    led.set_period(100);
    assert_eq!(led.period(), 100);
    clock.set(50);
    assert!(led.blink());
}

#[test]
fn drives_an_embedded_hal_pin() {
    #[derive(Default)]
    struct Pin {
        history: Vec<bool>,
    }
    impl embedded_hal::digital::ErrorType for Pin {
        type Error = core::convert::Infallible;
    }
    impl embedded_hal::digital::OutputPin for Pin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.history.push(false);
            Ok(())
        }
        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.history.push(true);
            Ok(())
        }
    }

    let clock = ManualClock::new();
    let mut led = Blinker::new(HalPinPort::new(LED, Pin::default()), clock.clone(), LED);
    led.begin();
    for _ in 0..3 {
        clock.advance(500);
        led.blink();
    }
    let (port, _) = led.into_parts();
    assert_eq!(port.release().history, vec![false, true, false]);
}
