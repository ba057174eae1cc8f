//! Pin and LEDC assignments for the ESP32-S3 demo board.
//!
//! Single source of truth for the demo binary and the GPIO/LEDC adapter.
//! Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// GPIO driving the on-board status LED (active HIGH).
pub const STATUS_LED_GPIO: u8 = 21;

// ---------------------------------------------------------------------------
// LEDC PWM
// ---------------------------------------------------------------------------

/// LEDC timer shared by every output channel.
pub const LEDC_TIMER: u32 = 0;
/// Duty resolution in bits.  Analog levels are 0-255, so 8 bits.
pub const LEDC_DUTY_BITS: u32 = 8;
/// PWM carrier frequency, well above visible flicker.
pub const LED_PWM_FREQ_HZ: u32 = 5_000;

// ---------------------------------------------------------------------------
// Main loop
// ---------------------------------------------------------------------------

/// Delay between polls in the demo loop.
pub const POLL_INTERVAL_MS: u32 = 10;
