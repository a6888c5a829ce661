//! Zone Threshold Configuration
//!
//! A [`Thresholds`] value carries the ten bounds that carve the 2D reading
//! space into zones. It is built once at startup, passed by value, and never
//! mutated afterwards - no process-wide constants, so two sticks with
//! different mechanical wear can each run their own calibration.
//!
//! The classifier takes whatever bounds it is given and evaluates its rules
//! in a fixed order, so even a nonsensical configuration produces a
//! deterministic direction. Call [`Thresholds::validate`] at startup if you
//! want inverted bands reported instead of silently tolerated.

use crate::constants::{
    DEFAULT_CENTER_X_MAX, DEFAULT_CENTER_X_MIN, DEFAULT_CENTER_Y_MAX, DEFAULT_CENTER_Y_MIN,
    DEFAULT_DIAGONAL_HIGH, DEFAULT_DIAGONAL_LOW, DEFAULT_EAST_X, DEFAULT_NORTH_Y,
    DEFAULT_SOUTH_Y, DEFAULT_WEST_X,
};
use crate::errors::{ConfigError, ConfigResult};

/// Threshold set delimiting the nine direction zones
///
/// All bounds live in the 8-bit reading domain. Fields are public so a
/// calibration can be written as a struct literal, typically spread over
/// [`Thresholds::default`]:
///
/// ```
/// use joyzone_core::Thresholds;
///
/// let worn_stick = Thresholds {
///     center_x_min: 60,
///     center_x_max: 190,
///     ..Thresholds::default()
/// };
/// assert!(worn_stick.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    /// Y at or above this is North territory
    pub north_y: u8,
    /// Y at or below this is South territory
    pub south_y: u8,
    /// X at or above this is East territory
    pub east_x: u8,
    /// X at or below this is West territory
    pub west_x: u8,
    /// Dead-zone lower X bound, inclusive
    pub center_x_min: u8,
    /// Dead-zone upper X bound, inclusive
    pub center_x_max: u8,
    /// Dead-zone lower Y bound, inclusive
    pub center_y_min: u8,
    /// Dead-zone upper Y bound, inclusive
    pub center_y_max: u8,
    /// Strict lower bound for high-corner (NE/SE X, NE Y) tests
    pub diagonal_high: u8,
    /// Strict upper bound for low-corner tests
    pub diagonal_low: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            north_y: DEFAULT_NORTH_Y,
            south_y: DEFAULT_SOUTH_Y,
            east_x: DEFAULT_EAST_X,
            west_x: DEFAULT_WEST_X,
            center_x_min: DEFAULT_CENTER_X_MIN,
            center_x_max: DEFAULT_CENTER_X_MAX,
            center_y_min: DEFAULT_CENTER_Y_MIN,
            center_y_max: DEFAULT_CENTER_Y_MAX,
            diagonal_high: DEFAULT_DIAGONAL_HIGH,
            diagonal_low: DEFAULT_DIAGONAL_LOW,
        }
    }
}

impl Thresholds {
    /// Check that every band is well-formed.
    ///
    /// Reports the first violation found: an inverted dead-zone band, crossed
    /// cardinal thresholds, or an inverted diagonal window. The classifier
    /// does not run this - a violating configuration still classifies
    /// deterministically, just not sensibly.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.center_x_min >= self.center_x_max {
            return Err(ConfigError::CenterBandInverted {
                axis: "X",
                min: self.center_x_min,
                max: self.center_x_max,
            });
        }
        if self.center_y_min >= self.center_y_max {
            return Err(ConfigError::CenterBandInverted {
                axis: "Y",
                min: self.center_y_min,
                max: self.center_y_max,
            });
        }
        if self.south_y >= self.north_y {
            return Err(ConfigError::CardinalBoundsInverted {
                axis: "Y",
                low: self.south_y,
                high: self.north_y,
            });
        }
        if self.west_x >= self.east_x {
            return Err(ConfigError::CardinalBoundsInverted {
                axis: "X",
                low: self.west_x,
                high: self.east_x,
            });
        }
        if self.diagonal_low >= self.diagonal_high {
            return Err(ConfigError::DiagonalWindowInverted {
                low: self.diagonal_low,
                high: self.diagonal_high,
            });
        }
        Ok(())
    }
}
