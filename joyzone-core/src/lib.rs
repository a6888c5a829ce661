//! Zone classification engine for joyzone
//!
//! Turns a pair of 8-bit analog stick readings into one of nine symbolic
//! directions (center, four cardinals, four diagonals) using an ordered set
//! of threshold zones. Designed for joystick-driven control interfaces on
//! small targets.
//!
//! Key constraints:
//! - `no_std` by default, `std` behind a feature
//! - No heap allocation anywhere
//! - Classification finishes within a single polling cycle
//!
//! ```
//! use joyzone_core::{Direction, Position, ZoneClassifier};
//!
//! let classifier = ZoneClassifier::default();
//!
//! match classifier.classify(Position::new(128, 250)) {
//!     Direction::North => {}, // stick pushed up
//!     _ => {},
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod adc;
pub mod classifier;
pub mod config;
pub mod constants;
pub mod direction;
pub mod errors;
pub mod source;

// Public API
pub use classifier::{PositionReport, ZoneClassifier};
pub use config::Thresholds;
pub use direction::{Direction, Position};
pub use errors::{ConfigError, ConfigResult};
pub use source::{PositionSource, SimulatedSource};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
