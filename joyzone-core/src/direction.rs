//! Directions and Positions
//!
//! [`Direction`] is the closed set of nine symbolic outputs: center, the four
//! cardinals, and the four diagonals. [`Position`] is the caller-owned pair of
//! axis readings fed into classification.
//!
//! Positions carry `i16` axes rather than `u8`. Nominal readings are 8-bit,
//! but the classifier is total over anything an unvalidated caller supplies:
//! raw 10-bit samples, center-relative signed values, garbage. Every such
//! input still compares cleanly against the thresholds and lands in exactly
//! one zone, so widening the type here is what keeps the hot path free of
//! range checks.

/// One of the nine symbolic stick directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Stick at rest in the dead zone
    Center,
    /// Up
    North,
    /// Down
    South,
    /// Right
    East,
    /// Left
    West,
    /// Up-right corner
    NorthEast,
    /// Up-left corner
    NorthWest,
    /// Down-right corner
    SouthEast,
    /// Down-left corner
    SouthWest,
}

impl Direction {
    /// Every direction, in declaration order
    pub const ALL: [Direction; 9] = [
        Direction::Center,
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Short display code for this direction ("C", "N", ..., "SW").
    ///
    /// Fits a character display cell pair; the match is exhaustive so adding
    /// a variant without a code fails to compile.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Center => "C",
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        }
    }

    /// True for the four corner directions.
    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NorthEast
                | Direction::NorthWest
                | Direction::SouthEast
                | Direction::SouthWest
        )
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str());
    }
}

/// A single 2-axis reading, caller-owned and passed by value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// X-axis reading (nominally 0-255)
    pub x: i16,
    /// Y-axis reading (nominally 0-255)
    pub y: i16,
}

impl Position {
    /// Position from raw axis readings.
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl From<(u8, u8)> for Position {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(i16::from(x), i16::from(y))
    }
}

impl From<(i16, i16)> for Position {
    fn from((x, y): (i16, i16)) -> Self {
        Self::new(x, y)
    }
}
