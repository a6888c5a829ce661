//! Sampling-Layer Conversions
//!
//! Pure helpers a sampling layer applies to raw converter output before it
//! reaches classification. The classifier itself never touches a reading -
//! it compares whatever it is handed - so clamping and width reduction live
//! here, on the caller's side of the boundary.
//!
//! All functions are pure, allocation-free, and safe to call from interrupt
//! context.

use crate::constants::{ADC_10BIT_MAX, ADC_CENTER};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Convert an 8-bit reading to a 0-100 percentage.
///
/// Widened to 16 bits internally so `value * 100` cannot overflow.
pub fn to_percent(value: u8) -> u8 {
    (u16::from(value) * 100 / 255) as u8
}

/// Reduce a raw 10-bit sample to an 8-bit reading.
///
/// Drops the two least significant bits, matching a left-adjusted converter
/// read. Values above the 10-bit domain indicate a wiring or driver fault;
/// they are clamped to the maximum and reported through the optional logger.
pub fn from_10bit(raw: u16) -> u8 {
    if raw > ADC_10BIT_MAX {
        log_warn!("10-bit sample {} above domain, clamping", raw);
        return (ADC_10BIT_MAX >> 2) as u8;
    }
    (raw >> 2) as u8
}

/// Convert an 8-bit reading to a signed offset from the nominal center.
///
/// Yields -128 at full deflection one way, +127 the other.
pub fn to_signed(value: u8) -> i16 {
    i16::from(value) - i16::from(ADC_CENTER)
}
