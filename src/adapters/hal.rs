//! `embedded-hal` 1.0 adapters.
//!
//! Lets the driver run on any HAL that hands out typed output pins:
//!
//! | Adapter        | Wraps          | Digital write          | Analog write            |
//! |----------------|----------------|------------------------|-------------------------|
//! | `HalPwmPort`   | `SetDutyCycle` | fully on / fully off   | `level / 255` of max    |
//! | `HalPinPort`   | `OutputPin`    | `set_state`            | high when `level >= 128`|
//!
//! Each adapter owns exactly one line and answers to one [`ChannelId`];
//! writes addressed to any other id are dropped with a warning.  HAL errors
//! are logged, not returned.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;
use log::{debug, warn};

use crate::ports::{ChannelId, OutputPort, PinState};

/// Analog levels at or above this drive a plain GPIO high.
pub const DIGITAL_THRESHOLD: u8 = 128;

// ── PWM-capable line ─────────────────────────────────────────

pub struct HalPwmPort<W> {
    channel: ChannelId,
    pwm: W,
}

impl<W: SetDutyCycle> HalPwmPort<W> {
    pub fn new(channel: ChannelId, pwm: W) -> Self {
        Self { channel, pwm }
    }

    pub fn inner(&self) -> &W {
        &self.pwm
    }

    pub fn release(self) -> W {
        self.pwm
    }

    fn owns(&self, channel: ChannelId) -> bool {
        if channel == self.channel {
            true
        } else {
            warn!("hal: {} write ignored, adapter drives {}", channel, self.channel);
            false
        }
    }
}

impl<W: SetDutyCycle> OutputPort for HalPwmPort<W> {
    fn configure_output(&mut self, channel: ChannelId) {
        if self.owns(channel) {
            debug!("hal: {} ready (max duty {})", channel, self.pwm.max_duty_cycle());
        }
    }

    fn write_digital(&mut self, channel: ChannelId, level: PinState) {
        if !self.owns(channel) {
            return;
        }
        let result = match level {
            PinState::High => self.pwm.set_duty_cycle_fully_on(),
            PinState::Low => self.pwm.set_duty_cycle_fully_off(),
        };
        if let Err(e) = result {
            warn!("hal: {} duty write failed: {:?}", channel, e);
        }
    }

    fn write_analog(&mut self, channel: ChannelId, level: u8) {
        if !self.owns(channel) {
            return;
        }
        if let Err(e) = self
            .pwm
            .set_duty_cycle_fraction(u16::from(level), u16::from(u8::MAX))
        {
            warn!("hal: {} duty write failed: {:?}", channel, e);
        }
    }
}

// ── Plain GPIO line ──────────────────────────────────────────

pub struct HalPinPort<O> {
    channel: ChannelId,
    pin: O,
}

impl<O: OutputPin> HalPinPort<O> {
    pub fn new(channel: ChannelId, pin: O) -> Self {
        Self { channel, pin }
    }

    pub fn inner(&self) -> &O {
        &self.pin
    }

    pub fn release(self) -> O {
        self.pin
    }

    fn set(&mut self, channel: ChannelId, level: PinState) {
        if channel != self.channel {
            warn!("hal: {} write ignored, adapter drives {}", channel, self.channel);
            return;
        }
        if let Err(e) = self.pin.set_state(level) {
            warn!("hal: {} pin write failed: {:?}", channel, e);
        }
    }
}

impl<O: OutputPin> OutputPort for HalPinPort<O> {
    fn configure_output(&mut self, channel: ChannelId) {
        // A typed embedded-hal output pin is already in output mode.
        debug!("hal: {} ready", channel);
    }

    fn write_digital(&mut self, channel: ChannelId, level: PinState) {
        self.set(channel, level);
    }

    fn write_analog(&mut self, channel: ChannelId, level: u8) {
        self.set(channel, PinState::from(level >= DIGITAL_THRESHOLD));
    }
}
