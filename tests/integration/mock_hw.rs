//! Mock output adapter for integration tests.
//!
//! Records every port call so tests can assert on the full write history
//! without touching real GPIO/PWM registers.

use blinker::adapters::time::ManualClock;
use blinker::{Blinker, ChannelId, OutputPort, PinState};

pub const LED: ChannelId = ChannelId(13);

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCall {
    Configure(ChannelId),
    Digital(ChannelId, PinState),
    Analog(ChannelId, u8),
}

// ── MockPort ──────────────────────────────────────────────────

pub struct MockPort {
    pub calls: Vec<PortCall>,
}

#[allow(dead_code)]
impl MockPort {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    pub fn last_call(&self) -> Option<&PortCall> {
        self.calls.last()
    }

    pub fn digital_levels(&self) -> Vec<PinState> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Digital(_, level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn analog_levels(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Analog(_, level) => Some(*level),
                _ => None,
            })
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| !matches!(c, PortCall::Configure(_)))
            .count()
    }
}

impl Default for MockPort {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort for MockPort {
    fn configure_output(&mut self, channel: ChannelId) {
        self.calls.push(PortCall::Configure(channel));
    }

    fn write_digital(&mut self, channel: ChannelId, level: PinState) {
        self.calls.push(PortCall::Digital(channel, level));
    }

    fn write_analog(&mut self, channel: ChannelId, level: u8) {
        self.calls.push(PortCall::Analog(channel, level));
    }
}

// ── Fixtures ──────────────────────────────────────────────────

#[allow(dead_code)]
pub fn make_blinker(period_ms: u32) -> (Blinker<MockPort, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut led = Blinker::with_period(MockPort::new(), clock.clone(), LED, period_ms, false);
    led.begin();
    (led, clock)
}
