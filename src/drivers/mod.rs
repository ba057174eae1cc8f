//! Output drivers and the brightness curve they share.

pub mod blinker;
pub mod fade;
