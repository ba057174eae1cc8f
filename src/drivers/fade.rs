//! Fade bounds and the cosine brightness curve.
//!
//! One full cosine period spans `period_ms`:
//!
//! ```text
//!   max ┤        ╭──╮
//!       │      ╭╯    ╰╮
//!       │    ╭╯        ╰╮
//!   min ┤──╯              ╰──
//!       0      P/2        P
//! ```
//!
//! The phase is not wrapped, so a late poll simply lands further along the
//! curve.  The output still stays within `[min, max]` because the raised
//! cosine never leaves `[0, 1]`.

use core::f32::consts::PI;

use crate::error::BoundsError;

/// Brightness range the fade curve is scaled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeBounds {
    min: u8,
    max: u8,
}

impl FadeBounds {
    /// Full 8-bit range, `[0, 255]`.
    pub const FULL: Self = Self { min: 0, max: 255 };

    /// Validate a caller-supplied pair.
    ///
    /// Accepts `0 <= min < max <= 255`.  That rule already implies
    /// `max >= 1` and `min <= 254`.
    pub fn new(min: i32, max: i32) -> Result<Self, BoundsError> {
        if min < 0 || max > 255 {
            return Err(BoundsError::OutOfRange { min, max });
        }
        if min >= max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self {
            min: min as u8,
            max: max as u8,
        })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// `max - min`, always at least 1.
    pub fn span(&self) -> u8 {
        self.max - self.min
    }

    pub fn contains(&self, level: u8) -> bool {
        (self.min..=self.max).contains(&level)
    }
}

impl Default for FadeBounds {
    fn default() -> Self {
        Self::FULL
    }
}

/// Brightness `elapsed_ms` into a fade cycle of `period_ms`.
///
/// `round(((1 - cos(2πx)) / 2) * (max - min) + min)` with
/// `x = elapsed_ms / period_ms`.  A zero period pins the phase at 0.
pub fn brightness_at(elapsed_ms: u64, period_ms: u32, bounds: FadeBounds) -> u8 {
    let x = if period_ms == 0 {
        0.0
    } else {
        elapsed_ms as f32 / period_ms as f32
    };
    let level = (1.0 - (2.0 * PI * x).cos()) / 2.0;
    let scaled = level * f32::from(bounds.span()) + f32::from(bounds.min);
    scaled
        .round()
        .clamp(f32::from(bounds.min), f32::from(bounds.max)) as u8
}
