//! Non-blocking blink / fade driver for one output channel.
//!
//! The caller polls [`Blinker::blink`] or [`Blinker::fade`] from its main
//! loop as often as it likes; every call is O(1) and never waits.  All
//! timing is derived from the elapsed time since the last recorded
//! transition, read from the injected [`Clock`].
//!
//! ## Modes
//!
//! | Mode  | Output write            | Transition at         | Returns true when      |
//! |-------|-------------------------|-----------------------|------------------------|
//! | Blink | digital, on edges only  | `elapsed >= period/2` | the level just flipped |
//! | Fade  | analog, every poll      | `elapsed >= period`   | a cycle just ended     |
//!
//! ## Enable / disable
//!
//! Disabling forces the line low and turns both polls into no-ops.
//! Re-enabling does not reset the phase reference, so the first poll after
//! a long pause reports a transition straight away.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::{BlinkerConfig, DEFAULT_PERIOD_MS};
use crate::drivers::fade::{self, FadeBounds};
use crate::error::{BoundsError, Error};
use crate::ports::{ChannelId, Clock, OutputPort, PinState};

/// Output mode selected by [`Blinker::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Square wave, half-period `period_ms / 2`.
    #[default]
    Blink,
    /// Raised-cosine brightness ramp, one cycle per `period_ms`.
    Fade,
}

/// Blink / fade state for one output line, driven through port `P` and
/// timed by clock `C`.
pub struct Blinker<P, C> {
    port: P,
    clock: C,
    channel: ChannelId,
    period_ms: u32,
    state: bool,
    enabled: bool,
    last_transition_ms: u64,
    bounds: FadeBounds,
}

impl<P: OutputPort, C: Clock> Blinker<P, C> {
    /// Driver with a 1 s period, starting low.
    pub fn new(port: P, clock: C, channel: ChannelId) -> Self {
        Self::with_period(port, clock, channel, DEFAULT_PERIOD_MS, false)
    }

    /// Driver with an explicit period; `initial_state` is the level the
    /// first blink edge writes.
    pub fn with_period(
        port: P,
        clock: C,
        channel: ChannelId,
        period_ms: u32,
        initial_state: bool,
    ) -> Self {
        Self {
            port,
            clock,
            channel,
            period_ms,
            state: initial_state,
            enabled: true,
            last_transition_ms: 0,
            bounds: FadeBounds::FULL,
        }
    }

    /// Build a driver from a validated [`BlinkerConfig`].
    pub fn from_config(
        port: P,
        clock: C,
        channel: ChannelId,
        config: &BlinkerConfig,
    ) -> Result<Self, Error> {
        config.validate()?;
        let mut blinker =
            Self::with_period(port, clock, channel, config.period_ms, config.initial_state);
        blinker.bounds = config.fade_bounds()?;
        Ok(blinker)
    }

    /// Configure the channel as an output.  Call once before polling.
    pub fn begin(&mut self) {
        self.port.configure_output(self.channel);
        debug!(
            "blinker {}: output configured (period={}ms)",
            self.channel, self.period_ms
        );
    }

    /// Advance the square wave.  Returns `true` when the level was written.
    pub fn blink(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let now = self.clock.now_ms();
        if self.elapsed_since_transition(now) >= u64::from(self.period_ms / 2) {
            self.port
                .write_digital(self.channel, PinState::from(self.state));
            trace!("blinker {}: edge -> {}", self.channel, self.state);
            self.last_transition_ms = now;
            self.state = !self.state;
            return true;
        }
        false
    }

    /// Write the current fade brightness.  Returns `true` when a full cycle
    /// boundary was crossed on this call.
    pub fn fade(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let now = self.clock.now_ms();
        let elapsed = self.elapsed_since_transition(now);
        let brightness = fade::brightness_at(elapsed, self.period_ms, self.bounds);
        self.port.write_analog(self.channel, brightness);

        if elapsed >= u64::from(self.period_ms) {
            trace!("blinker {}: fade cycle complete", self.channel);
            self.last_transition_ms = now;
            self.state = !self.state;
            return true;
        }
        false
    }

    /// Dispatch to [`blink`](Self::blink) or [`fade`](Self::fade).
    pub fn poll(&mut self, mode: Mode) -> bool {
        match mode {
            Mode::Blink => self.blink(),
            Mode::Fade => self.fade(),
        }
    }

    /// Set the fade range.  On error the previous bounds are kept.
    pub fn set_fade_bounds(&mut self, min: i32, max: i32) -> Result<(), BoundsError> {
        match FadeBounds::new(min, max) {
            Ok(bounds) => {
                self.bounds = bounds;
                Ok(())
            }
            Err(e) => {
                warn!("blinker {}: fade bounds rejected: {}", self.channel, e);
                Err(e)
            }
        }
    }

    pub fn fade_bounds(&self) -> FadeBounds {
        self.bounds
    }

    /// No validation; a zero period makes every poll a transition.
    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = period_ms;
    }

    pub fn period(&self) -> u32 {
        self.period_ms
    }

    /// Drive the line low now.  Leaves phase and enable state alone.
    pub fn off(&mut self) {
        self.port.write_digital(self.channel, PinState::Low);
    }

    pub fn disable(&mut self) {
        self.enabled = false;
        self.off();
        debug!("blinker {}: disabled", self.channel);
    }

    pub fn enable(&mut self) {
        self.enabled = true;
        debug!("blinker {}: enabled", self.channel);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Logical phase: the level the next blink edge will write.
    pub fn state(&self) -> bool {
        self.state
    }

    pub fn channel(&self) -> ChannelId {
        self.channel
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Give back the port and clock.
    pub fn into_parts(self) -> (P, C) {
        (self.port, self.clock)
    }

    fn elapsed_since_transition(&self, now: u64) -> u64 {
        now.wrapping_sub(self.last_transition_ms)
    }
}
