//! ADC Domain and Default Zone Thresholds
//!
//! This module defines the reading domain for 8-bit analog-to-digital
//! conversion and the default threshold values the zone map is calibrated
//! against. The defaults are the contract other collaborators (display
//! drivers, visualization tooling, hardware wiring) are built around, so
//! changing them shifts zones on every device in the field.
//!
//! Zone orientation for raw readings:
//!
//! ```text
//!     Y=255 (North)
//!        |
//!  X=0 --+-- X=255
//! (West) |   (East)
//!     Y=0 (South)
//! ```

// ===== ADC READING DOMAIN =====

/// Minimum 8-bit ADC reading.
pub const ADC_MIN: u8 = 0;

/// Maximum 8-bit ADC reading.
///
/// Also the domain bound used to derive the NorthWest corner's Y test
/// (`ADC_MAX - diagonal_low`).
pub const ADC_MAX: u8 = 255;

/// Nominal reading for a stick at rest on either axis.
///
/// Real sticks rarely report exactly this value, which is why the dead
/// zone is a band rather than a point.
pub const ADC_CENTER: u8 = 128;

/// Maximum raw value from a 10-bit conversion, before reduction to 8 bits.
///
/// Source: AVR ADC in full-resolution mode (ATmega16/32 class parts).
pub const ADC_10BIT_MAX: u16 = 1023;

// ===== CARDINAL DIRECTION THRESHOLDS =====

/// Y readings at or above this classify as North (with X near center).
pub const DEFAULT_NORTH_Y: u8 = 240;

/// Y readings at or below this classify as South (with X near center).
pub const DEFAULT_SOUTH_Y: u8 = 50;

/// X readings at or above this classify as East (with Y near center).
pub const DEFAULT_EAST_X: u8 = 240;

/// X readings at or below this classify as West (with Y near center).
pub const DEFAULT_WEST_X: u8 = 70;

// ===== CENTER ZONE (DEAD ZONE) =====

/// Lower X bound of the dead zone, inclusive.
pub const DEFAULT_CENTER_X_MIN: u8 = 70;

/// Upper X bound of the dead zone, inclusive.
pub const DEFAULT_CENTER_X_MAX: u8 = 180;

/// Lower Y bound of the dead zone, inclusive.
///
/// The Y band is narrower than the X band; the sticks this map was
/// calibrated for sit mechanically low on the Y axis.
pub const DEFAULT_CENTER_Y_MIN: u8 = 110;

/// Upper Y bound of the dead zone, inclusive.
pub const DEFAULT_CENTER_Y_MAX: u8 = 160;

// ===== DIAGONAL DETECTION =====

/// Readings strictly above this on both axes land in a high corner.
pub const DEFAULT_DIAGONAL_HIGH: u8 = 230;

/// Readings strictly below this on both axes land in a low corner.
pub const DEFAULT_DIAGONAL_LOW: u8 = 50;
