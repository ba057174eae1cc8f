//! Blinker configuration parameters
//!
//! Construction-time settings for one channel.  The driver never loads these
//! itself; a caller builds one (or deserialises it from wherever it keeps
//! settings) and hands it to [`Blinker::from_config`].
//!
//! [`Blinker::from_config`]: crate::drivers::blinker::Blinker::from_config

use serde::{Deserialize, Serialize};

use crate::drivers::blinker::Mode;
use crate::drivers::fade::FadeBounds;
use crate::error::ConfigError;

/// Default full-cycle duration.
pub const DEFAULT_PERIOD_MS: u32 = 1000;

/// Per-channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlinkerConfig {
    /// Full on/off (or dark/bright/dark) cycle in milliseconds
    pub period_ms: u32,
    /// Level written on the first blink edge
    pub initial_state: bool,
    /// Fade curve floor (0-254)
    pub fade_min: u8,
    /// Fade curve ceiling (1-255)
    pub fade_max: u8,
    /// Which poll the main loop drives
    pub mode: Mode,
}

impl Default for BlinkerConfig {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
            initial_state: false,
            fade_min: 0,
            fade_max: 255,
            mode: Mode::Blink,
        }
    }
}

impl BlinkerConfig {
    /// Reject values the driver would otherwise accept but misbehave on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period_ms == 0 {
            return Err(ConfigError::ValidationFailed("period_ms must be > 0"));
        }
        if self.fade_min >= self.fade_max {
            return Err(ConfigError::ValidationFailed(
                "fade_min must be below fade_max",
            ));
        }
        Ok(())
    }

    /// Fade bounds described by this config.
    pub fn fade_bounds(&self) -> Result<FadeBounds, ConfigError> {
        FadeBounds::new(i32::from(self.fade_min), i32::from(self.fade_max))
            .map_err(|_| ConfigError::ValidationFailed("fade_min must be below fade_max"))
    }
}
