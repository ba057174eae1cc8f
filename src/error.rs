//! Unified error types for the blinker driver.
//!
//! A single `Error` enum that every fallible operation converts into, so a
//! caller juggling several channels can handle failures uniformly.  All
//! variants are `Copy` and carry no heap data.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A fade-bounds pair was rejected.
    Bounds(BoundsError),
    /// A configuration failed validation.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounds(e) => write!(f, "fade bounds: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Fade bounds errors
// ---------------------------------------------------------------------------

/// Why a `(min, max)` brightness pair was refused.
///
/// The stored bounds are never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    /// `min` is negative or `max` exceeds 255.
    OutOfRange { min: i32, max: i32 },
    /// `min` is not strictly below `max`.
    Inverted { min: i32, max: i32 },
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { min, max } => {
                write!(f, "[{min}, {max}] outside 0..=255")
            }
            Self::Inverted { min, max } => write!(f, "min {min} must be below max {max}"),
        }
    }
}

impl core::error::Error for BoundsError {}

impl From<BoundsError> for Error {
    fn from(e: BoundsError) -> Self {
        Self::Bounds(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` names the field and the rule it broke.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
