//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements   | Connects to                       |
//! |------------|--------------|-----------------------------------|
//! | `hardware` | OutputPort   | ESP32 GPIO + LEDC PWM             |
//! | `hal`      | OutputPort   | any embedded-hal 1.0 pin / PWM    |
//! | `time`     | Clock        | ESP32 system timer / host Instant |

pub mod hal;
pub mod hardware;
pub mod time;
