//! Error Types for Threshold Configuration Checks
//!
//! Classification itself never fails: every pair of integer readings maps to
//! exactly one direction, so there is no error path in the hot loop. The only
//! thing that can be wrong is a threshold set whose bands are inverted, and
//! that is reported by the opt-in [`Thresholds::validate`] check rather than
//! by the classifier.
//!
//! Errors follow the same constraints as the rest of the crate:
//!
//! 1. **Small and Copy**: inline scalar payloads only, cheap to return and to
//!    park in a queue on an embedded target.
//! 2. **No heap allocation**: `&'static str` for axis names, never `String`.
//!
//! [`Thresholds::validate`]: crate::config::Thresholds::validate

use thiserror_no_std::Error;

/// Result type for configuration checks
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Threshold configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Dead-zone band has its minimum above its maximum
    #[error("center band inverted on {axis} axis: min {min} > max {max}")]
    CenterBandInverted {
        /// Axis label ("X" or "Y")
        axis: &'static str,
        /// Configured lower bound of the band
        min: u8,
        /// Configured upper bound of the band
        max: u8,
    },

    /// Opposing cardinal thresholds cross each other
    #[error("cardinal thresholds inverted on {axis} axis: low {low} >= high {high}")]
    CardinalBoundsInverted {
        /// Axis label ("X" or "Y")
        axis: &'static str,
        /// Threshold that should sit below `high` (south/west side)
        low: u8,
        /// Threshold that should sit above `low` (north/east side)
        high: u8,
    },

    /// Diagonal corner window is inverted
    #[error("diagonal window inverted: low {low} >= high {high}")]
    DiagonalWindowInverted {
        /// Low-corner threshold
        low: u8,
        /// High-corner threshold
        high: u8,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::CenterBandInverted { axis, min, max } =>
                defmt::write!(fmt, "{} center band inverted: {} > {}", axis, min, max),
            Self::CardinalBoundsInverted { axis, low, high } =>
                defmt::write!(fmt, "{} cardinal thresholds inverted: {} >= {}", axis, low, high),
            Self::DiagonalWindowInverted { low, high } =>
                defmt::write!(fmt, "diagonal window inverted: {} >= {}", low, high),
        }
    }
}
