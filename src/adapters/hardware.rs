//! GPIO + LEDC output adapter — bridges ESP32 peripherals to [`OutputPort`].
//!
//! Each configured channel id is a GPIO number.  `configure_output` sets the
//! pin up as an output and routes it through the next free LEDC channel, all
//! sharing one 8-bit low-speed timer.  Once a pin is routed to LEDC the GPIO
//! level register no longer drives it, so digital writes are issued as 0 %
//! or 100 % duty on the same LEDC channel.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: raw `esp_idf_svc::sys` GPIO and LEDC calls.
//! On host/test: remembers the last level written per channel in memory,
//! and can be told to fail duty writes with a given return code.
//!
//! Hardware return codes are logged, never propagated; the port is
//! infallible from the driver's point of view.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
use log::{info, warn};

use crate::pins;
use crate::ports::{ChannelId, OutputPort, PinState};

/// Number of low-speed LEDC channels on the ESP32-S3.
pub const LEDC_CHANNELS: usize = 8;

/// Duty value for a fully-on output at 8-bit resolution.
const FULL_DUTY: u32 = 1 << pins::LEDC_DUTY_BITS;

/// Analog 255 must reach `FULL_DUTY`, not one step short of it.
/// Every other level maps to itself.
fn analog_to_duty(level: u8) -> u32 {
    u32::from(level) * FULL_DUTY / u32::from(u8::MAX)
}

/// Exact inverse of [`analog_to_duty`].
fn duty_to_level(duty: u32) -> u8 {
    duty.min(u32::from(u8::MAX)) as u8
}

// ── Error type ────────────────────────────────────────────────

/// Errors raised while talking to GPIO / LEDC.  Logged by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwError {
    GpioConfigFailed(i32),
    LedcTimerFailed(i32),
    LedcChannelFailed(i32),
    LedcWriteFailed(i32),
    NoFreeLedcChannel,
    NotConfigured(ChannelId),
}

impl core::fmt::Display for HwError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::LedcTimerFailed(rc) => write!(f, "LEDC timer config failed (rc={})", rc),
            Self::LedcChannelFailed(rc) => write!(f, "LEDC channel config failed (rc={})", rc),
            Self::LedcWriteFailed(rc) => write!(f, "LEDC duty write failed (rc={})", rc),
            Self::NoFreeLedcChannel => write!(f, "all LEDC channels in use"),
            Self::NotConfigured(ch) => write!(f, "{} was never configured", ch),
        }
    }
}

// ── Adapter ───────────────────────────────────────────────────

/// Output port backed by ESP32 GPIO + LEDC (or an in-memory simulation).
pub struct GpioLedcPort {
    /// LEDC channel `i` drives `assigned[i]`.
    assigned: [Option<ChannelId>; LEDC_CHANNELS],
    timer_ready: bool,
    /// Last duty written per LEDC channel, 0..=`FULL_DUTY`.
    duty: [u32; LEDC_CHANNELS],
    #[cfg(not(target_os = "espidf"))]
    write_fault: Option<i32>,
}

impl Default for GpioLedcPort {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioLedcPort {
    pub fn new() -> Self {
        Self {
            assigned: [None; LEDC_CHANNELS],
            timer_ready: false,
            duty: [0; LEDC_CHANNELS],
            #[cfg(not(target_os = "espidf"))]
            write_fault: None,
        }
    }

    /// Make every following duty write fail with `rc` (`None` heals it).
    #[cfg(not(target_os = "espidf"))]
    pub fn simulate_write_fault(&mut self, rc: Option<i32>) {
        self.write_fault = rc;
    }

    /// LEDC channel index routed to `channel`, if configured.
    pub fn ledc_channel(&self, channel: ChannelId) -> Option<usize> {
        self.assigned.iter().position(|a| *a == Some(channel))
    }

    /// Last duty written to `channel`, scaled back to 0..=255.
    pub fn level(&self, channel: ChannelId) -> Option<u8> {
        self.ledc_channel(channel)
            .map(|idx| duty_to_level(self.duty[idx]))
    }

    fn try_configure(&mut self, channel: ChannelId) -> Result<usize, HwError> {
        if let Some(idx) = self.ledc_channel(channel) {
            return Ok(idx);
        }
        let idx = self
            .assigned
            .iter()
            .position(Option::is_none)
            .ok_or(HwError::NoFreeLedcChannel)?;

        if !self.timer_ready {
            init_timer()?;
            self.timer_ready = true;
        }
        init_channel(channel, idx)?;

        self.assigned[idx] = Some(channel);
        self.duty[idx] = 0;
        info!("hw: {} routed to LEDC CH{}", channel, idx);
        Ok(idx)
    }

    fn set_duty(&mut self, channel: ChannelId, duty: u32) {
        let Some(idx) = self.ledc_channel(channel) else {
            warn!("hw: write dropped: {}", HwError::NotConfigured(channel));
            return;
        };
        if let Err(e) = self.ledc_write(idx, duty) {
            warn!("hw: {} write failed: {}", channel, e);
            return;
        }
        self.duty[idx] = duty;
    }

    #[cfg(target_os = "espidf")]
    fn ledc_write(&self, idx: usize, duty: u32) -> Result<(), HwError> {
        // SAFETY: LEDC channel `idx` was configured in init_channel(); duty
        // register writes come only from the owning task.
        let ret = unsafe {
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, idx as ledc_channel_t, duty)
        };
        if ret != ESP_OK as i32 {
            return Err(HwError::LedcWriteFailed(ret));
        }
        // SAFETY: as above.
        let ret = unsafe { ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, idx as ledc_channel_t) };
        if ret != ESP_OK as i32 {
            return Err(HwError::LedcWriteFailed(ret));
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn ledc_write(&self, _idx: usize, _duty: u32) -> Result<(), HwError> {
        match self.write_fault {
            Some(rc) => Err(HwError::LedcWriteFailed(rc)),
            None => Ok(()),
        }
    }
}

impl OutputPort for GpioLedcPort {
    fn configure_output(&mut self, channel: ChannelId) {
        if let Err(e) = self.try_configure(channel) {
            warn!("hw: configure {} failed: {}", channel, e);
        }
    }

    fn write_digital(&mut self, channel: ChannelId, level: PinState) {
        let duty = match level {
            PinState::High => FULL_DUTY,
            PinState::Low => 0,
        };
        self.set_duty(channel, duty);
    }

    fn write_analog(&mut self, channel: ChannelId, level: u8) {
        self.set_duty(channel, analog_to_duty(level));
    }
}

// ── Platform calls ────────────────────────────────────────────

#[cfg(target_os = "espidf")]
fn init_timer() -> Result<(), HwError> {
    let timer = ledc_timer_config_t {
        speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
        timer_num: pins::LEDC_TIMER,
        duty_resolution: pins::LEDC_DUTY_BITS,
        freq_hz: pins::LED_PWM_FREQ_HZ,
        clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
        ..Default::default()
    };
    // SAFETY: plain register configuration from the single owning task.
    let ret = unsafe { ledc_timer_config(&timer) };
    if ret != ESP_OK as i32 {
        return Err(HwError::LedcTimerFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_timer() -> Result<(), HwError> {
    info!("hw(sim): LEDC timer init skipped");
    Ok(())
}

#[cfg(target_os = "espidf")]
fn init_channel(channel: ChannelId, idx: usize) -> Result<(), HwError> {
    let gpio = i32::from(channel.0);
    let cfg = gpio_config_t {
        pin_bit_mask: 1u64 << gpio,
        mode: gpio_mode_t_GPIO_MODE_OUTPUT,
        pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
        pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
        intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
    };
    // SAFETY: the caller owns this pin exclusively; single-task access.
    let ret = unsafe { gpio_config(&cfg) };
    if ret != ESP_OK as i32 {
        return Err(HwError::GpioConfigFailed(ret));
    }

    // SAFETY: as above; the timer was configured by init_timer().
    let ret = unsafe {
        ledc_channel_config(&ledc_channel_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            channel: idx as ledc_channel_t,
            timer_sel: pins::LEDC_TIMER,
            gpio_num: gpio,
            duty: 0,
            hpoint: 0,
            ..Default::default()
        })
    };
    if ret != ESP_OK as i32 {
        return Err(HwError::LedcChannelFailed(ret));
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
fn init_channel(_channel: ChannelId, _idx: usize) -> Result<(), HwError> {
    Ok(())
}
