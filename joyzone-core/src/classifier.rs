//! Threshold-Based Zone Classification
//!
//! Maps a 2-axis reading onto one of nine directions by testing zones in a
//! fixed precedence order. The zones are allowed to overlap geometrically;
//! the order is what makes the result deterministic:
//!
//! 1. **Dead zone** - a stick at rest must read Center no matter what the
//!    other rules would say, so this test runs first and wins outright.
//! 2. **Diagonals** - strict corner tests. These run before the cardinals so
//!    a corner position that also satisfies a cardinal's near-center band
//!    still reads as a corner.
//! 3. **Cardinals** - inclusive threshold on the primary axis, the other
//!    axis held inside the center band.
//! 4. **Fallback** - anything left is Center, which makes the function total:
//!    every integer pair maps to exactly one direction.
//!
//! Classification is pure and stateless: no I/O, no allocation, no retained
//! position. A [`ZoneClassifier`] can be shared freely across threads or
//! called from an interrupt handler, and runs comfortably inside a single
//! polling cycle on an MCU.
//!
//! ```
//! use joyzone_core::{Direction, Position, ZoneClassifier};
//!
//! let classifier = ZoneClassifier::default();
//! assert_eq!(classifier.classify(Position::new(128, 135)), Direction::Center);
//! assert_eq!(classifier.classify(Position::new(250, 250)), Direction::NorthEast);
//! ```

use crate::adc;
use crate::config::Thresholds;
use crate::constants::{ADC_MAX, ADC_MIN};
use crate::direction::{Direction, Position};

/// Stateless direction classifier over an immutable threshold set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoneClassifier {
    thresholds: Thresholds,
}

impl ZoneClassifier {
    /// Classifier over the given calibration.
    pub const fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// The calibration this classifier evaluates against.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// True iff the position sits inside the dead zone.
    ///
    /// Both bounds of both bands are inclusive, so the corners of the center
    /// box belong to it.
    pub fn is_centered(&self, pos: Position) -> bool {
        let t = &self.thresholds;
        i16::from(t.center_x_min) <= pos.x
            && pos.x <= i16::from(t.center_x_max)
            && i16::from(t.center_y_min) <= pos.y
            && pos.y <= i16::from(t.center_y_max)
    }

    /// Classify a reading into one of the nine directions.
    ///
    /// First matching rule wins; later rules are not evaluated. Never fails
    /// and never panics, for any `i16` pair - out-of-domain readings are
    /// compared as-is, and clamping (if wanted) belongs to the sampling
    /// layer feeding this function.
    pub fn classify(&self, pos: Position) -> Direction {
        let t = &self.thresholds;
        let (x, y) = (pos.x, pos.y);

        // Dead zone overrides everything else.
        if self.is_centered(pos) {
            return Direction::Center;
        }

        let diag_high = i16::from(t.diagonal_high);
        let diag_low = i16::from(t.diagonal_low);

        // Corners use strict comparisons against the diagonal window.
        if x > diag_high && y > diag_high {
            return Direction::NorthEast;
        }
        // The NorthWest Y bound is derived from the domain maximum rather
        // than configured separately; it is not a calibration knob.
        if x < diag_low && y > i16::from(ADC_MAX) - diag_low {
            return Direction::NorthWest;
        }
        if x > diag_high && y < diag_low {
            return Direction::SouthEast;
        }
        if x < diag_low && y < diag_low {
            return Direction::SouthWest;
        }

        // Cardinals: primary axis past its threshold (inclusive), the
        // perpendicular axis held near center.
        if y >= i16::from(t.north_y)
            && x >= i16::from(t.center_x_min)
            && x <= i16::from(t.center_x_max)
        {
            return Direction::North;
        }
        if y <= i16::from(t.south_y)
            && x >= i16::from(t.center_x_min)
            && x <= i16::from(t.center_x_max)
        {
            return Direction::South;
        }
        // East/West cap the Y axis with `center_x_max`, not `center_y_max`.
        // Deployed zone maps were calibrated against exactly this, so it
        // stays; with the default calibration the two bands only differ
        // between 160 and 180.
        if x >= i16::from(t.east_x)
            && y >= i16::from(t.center_y_min)
            && y <= i16::from(t.center_x_max)
        {
            return Direction::East;
        }
        if x <= i16::from(t.west_x)
            && y >= i16::from(t.center_y_min)
            && y <= i16::from(t.center_x_max)
        {
            return Direction::West;
        }

        // Nothing matched: treat as at rest.
        Direction::Center
    }

    /// Classification bundled with display-ready percentages.
    ///
    /// For the report the reading is clamped into the 8-bit domain before
    /// the percentage conversion; the direction is computed from the
    /// unclamped reading, same as [`classify`](Self::classify).
    pub fn report(&self, pos: Position) -> PositionReport {
        PositionReport {
            x: pos.x,
            y: pos.y,
            x_percent: adc::to_percent(clamp_to_domain(pos.x)),
            y_percent: adc::to_percent(clamp_to_domain(pos.y)),
            direction: self.classify(pos),
        }
    }
}

/// Snapshot of one reading prepared for a display collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionReport {
    /// Raw X reading as supplied
    pub x: i16,
    /// Raw Y reading as supplied
    pub y: i16,
    /// X deflection as 0-100, from the domain-clamped reading
    pub x_percent: u8,
    /// Y deflection as 0-100, from the domain-clamped reading
    pub y_percent: u8,
    /// Classified direction
    pub direction: Direction,
}

fn clamp_to_domain(value: i16) -> u8 {
    value.clamp(i16::from(ADC_MIN), i16::from(ADC_MAX)) as u8
}
