//! Position Sources
//!
//! Where readings come from is caller territory - a hardware ADC, a replayed
//! capture, a test vector. [`PositionSource`] is the seam between that world
//! and classification, expressed with [`nb`] so a driver wrapping a
//! conversion-in-progress ADC can return `WouldBlock` instead of spinning
//! inside the trait.
//!
//! [`SimulatedSource`] is the host-side implementation: it walks a fixed
//! sample table, which is how the classification sweeps in the test suite
//! and any PC-side tooling feed the classifier without hardware attached.

use thiserror_no_std::Error;

use crate::direction::Position;

/// Supplier of 2-axis readings
///
/// Implementations own the sampling details (channel selection, conversion
/// waits, width reduction). The blanket [`read`](Self::read) helper busy-waits
/// on `WouldBlock`, which is the right behavior for a conversion that
/// completes within a polling cycle.
pub trait PositionSource {
    /// Error the underlying sampler can report
    type Error;

    /// Attempt to produce the next reading without blocking.
    fn try_read(&mut self) -> nb::Result<Position, Self::Error>;

    /// Produce the next reading, spinning through `WouldBlock`.
    fn read(&mut self) -> Result<Position, Self::Error> {
        nb::block!(self.try_read())
    }
}

/// Simulated source ran out of samples
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("simulated source has no more samples")]
pub struct SourceExhausted;

/// Replay source over a fixed table of 8-bit readings
///
/// ```
/// use joyzone_core::{PositionSource, SimulatedSource, ZoneClassifier, Direction};
///
/// let mut source = SimulatedSource::new(&[(128, 135), (250, 250)]);
/// let classifier = ZoneClassifier::default();
///
/// assert_eq!(classifier.classify(source.read().unwrap()), Direction::Center);
/// assert_eq!(classifier.classify(source.read().unwrap()), Direction::NorthEast);
/// assert!(source.read().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedSource<'a> {
    samples: &'a [(u8, u8)],
    cursor: usize,
}

impl<'a> SimulatedSource<'a> {
    /// Source that yields `samples` in order, then reports exhaustion.
    pub const fn new(samples: &'a [(u8, u8)]) -> Self {
        Self { samples, cursor: 0 }
    }

    /// Number of samples not yet read.
    pub fn remaining(&self) -> usize {
        self.samples.len() - self.cursor
    }
}

impl PositionSource for SimulatedSource<'_> {
    type Error = SourceExhausted;

    fn try_read(&mut self) -> nb::Result<Position, Self::Error> {
        match self.samples.get(self.cursor) {
            Some(&sample) => {
                self.cursor += 1;
                Ok(Position::from(sample))
            }
            None => Err(nb::Error::Other(SourceExhausted)),
        }
    }
}
