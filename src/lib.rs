//! Blinker — non-blocking blink and cosine-fade driver for one output line.
//!
//! Exposes the pure-logic driver for integration testing and reuse. All
//! ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod ports;

pub use config::BlinkerConfig;
pub use drivers::blinker::{Blinker, Mode};
pub use drivers::fade::FadeBounds;
pub use error::{BoundsError, ConfigError, Error, Result};
pub use ports::{ChannelId, Clock, OutputPort, PinState};
