//! Port traits — the boundary between the blink/fade logic and the platform.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Blinker (domain)
//! ```
//!
//! The [`Blinker`](crate::drivers::blinker::Blinker) consumes these via
//! generics, so the state machine never touches hardware directly.  Both
//! ports are infallible from the domain's point of view: adapters log
//! hardware failures rather than returning them.

pub use embedded_hal::digital::PinState;

/// Opaque identifier of an output line, handed through to the [`OutputPort`].
///
/// What the number means (GPIO number, LEDC channel, board LED index) is
/// decided by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub u8);

impl From<u8> for ChannelId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ch{}", self.0)
    }
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: platform timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.
pub trait Clock {
    /// Milliseconds since an arbitrary epoch (usually boot).
    /// Must never decrease between calls.
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → GPIO / PWM)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to drive an output line.
pub trait OutputPort {
    /// Mark `channel` for output use.
    fn configure_output(&mut self, channel: ChannelId);

    /// Drive `channel` fully high or low.
    fn write_digital(&mut self, channel: ChannelId, level: PinState);

    /// Drive `channel` with an 8-bit duty (0 = off, 255 = fully on).
    fn write_analog(&mut self, channel: ChannelId, level: u8);
}

impl<P: OutputPort + ?Sized> OutputPort for &mut P {
    fn configure_output(&mut self, channel: ChannelId) {
        (**self).configure_output(channel);
    }

    fn write_digital(&mut self, channel: ChannelId, level: PinState) {
        (**self).write_digital(channel, level);
    }

    fn write_analog(&mut self, channel: ChannelId, level: u8) {
        (**self).write_analog(channel, level);
    }
}
