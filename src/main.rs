//! Blinker demo firmware — ESP32-S3 status LED.
//!
//! ```text
//!   MonotonicClock ──▶ Blinker ──▶ GpioLedcPort ──▶ LEDC CH0 ──▶ LED
//! ```
//!
//! Alternates between blink and fade every `CYCLES_PER_MODE` completed
//! cycles, polling every `POLL_INTERVAL_MS`.
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use log::info;

use blinker::adapters::hardware::GpioLedcPort;
use blinker::adapters::time::MonotonicClock;
use blinker::pins;
use blinker::{Blinker, BlinkerConfig, ChannelId, Mode};

const CYCLES_PER_MODE: u32 = 10;

fn main() -> Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Blinker v{}", env!("CARGO_PKG_VERSION"));

    let config = BlinkerConfig {
        period_ms: 2_000,
        fade_min: 4,
        ..Default::default()
    };
    let mut led = Blinker::from_config(
        GpioLedcPort::new(),
        MonotonicClock::new(),
        ChannelId(pins::STATUS_LED_GPIO),
        &config,
    )?;
    led.begin();

    let mut mode = config.mode;
    let mut cycles = 0u32;
    info!("Entering poll loop ({:?}, period={}ms)", mode, led.period());

    loop {
        if led.poll(mode) {
            // Blink reports every half-period edge; count whole cycles.
            cycles += match mode {
                Mode::Blink => u32::from(!led.state()),
                Mode::Fade => 1,
            };
        }
        if cycles >= CYCLES_PER_MODE {
            cycles = 0;
            mode = match mode {
                Mode::Blink => Mode::Fade,
                Mode::Fade => Mode::Blink,
            };
            info!("Switching to {:?}", mode);
        }
        FreeRtos::delay_ms(pins::POLL_INTERVAL_MS);
    }
}
