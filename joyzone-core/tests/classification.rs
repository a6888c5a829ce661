//! Classification Integration Tests
//!
//! End-to-end checks of the zone map under the default calibration: full-axis
//! sweeps, a rotation around the rim of the stick's travel, boundary
//! exactness at every threshold edge, and replay through a simulated source.

use joyzone_core::{
    Direction, Position, PositionSource, SimulatedSource, Thresholds, ZoneClassifier,
};

// ===== SWEEP TEST CONSTANTS =====

/// X held inside the center band while sweeping Y.
const CENTERED_X: i16 = 128;

/// Y held inside the center band while sweeping X.
const CENTERED_Y: i16 = 135;

/// Sweep the full Y axis with X centered.
///
/// Only three zones are reachable on this line: South below its threshold,
/// North at or above its threshold, Center everywhere else (including the
/// gaps between the cardinal thresholds and the dead zone, which fall
/// through to the fallback).
#[test]
fn y_axis_sweep_with_x_centered() {
    let classifier = ZoneClassifier::default();
    let t = *classifier.thresholds();

    for y in 0..=255i16 {
        let expected = if y <= i16::from(t.south_y) {
            Direction::South
        } else if y >= i16::from(t.north_y) {
            Direction::North
        } else {
            Direction::Center
        };
        assert_eq!(
            classifier.classify(Position::new(CENTERED_X, y)),
            expected,
            "y = {y}"
        );
    }
}

/// Sweep the full X axis with Y centered.
///
/// West requires the reading to sit left of the dead zone, whose lower X
/// bound equals the West threshold, so West only appears strictly below it.
#[test]
fn x_axis_sweep_with_y_centered() {
    let classifier = ZoneClassifier::default();
    let t = *classifier.thresholds();

    for x in 0..=255i16 {
        let expected = if x < i16::from(t.center_x_min) {
            Direction::West
        } else if x >= i16::from(t.east_x) {
            Direction::East
        } else {
            Direction::Center
        };
        assert_eq!(
            classifier.classify(Position::new(x, CENTERED_Y)),
            expected,
            "x = {x}"
        );
    }
}

/// Walk the rim of the stick's travel through all eight deflections.
#[test]
fn full_rotation() {
    let classifier = ZoneClassifier::default();
    let rotation = [
        ((128, 250), Direction::North),
        ((250, 250), Direction::NorthEast),
        ((250, 135), Direction::East),
        ((250, 20), Direction::SouthEast),
        ((128, 20), Direction::South),
        ((10, 10), Direction::SouthWest),
        ((10, 135), Direction::West),
        ((10, 250), Direction::NorthWest),
    ];

    for ((x, y), expected) in rotation {
        assert_eq!(
            classifier.classify(Position::new(x, y)),
            expected,
            "({x}, {y})"
        );
    }
}

/// Every documented boundary, one reading on each side.
#[test]
fn threshold_edges() {
    let classifier = ZoneClassifier::default();
    let cases = [
        // Center box corners are inside the dead zone.
        ((70, 110), Direction::Center),
        ((180, 160), Direction::Center),
        ((69, 135), Direction::West),
        ((181, 135), Direction::Center), // between the dead zone and East
        // North threshold is inclusive.
        ((128, 240), Direction::North),
        ((128, 239), Direction::Center),
        // South threshold is inclusive.
        ((128, 50), Direction::South),
        ((128, 51), Direction::Center),
        // Diagonal window is strict on both sides.
        ((231, 231), Direction::NorthEast),
        ((230, 231), Direction::Center),
        ((49, 49), Direction::SouthWest),
        // x == diagonal_low misses the corner, and 50 is also left of the
        // center X band, so South cannot claim it either.
        ((50, 49), Direction::Center),
        ((70, 49), Direction::South),
        // Domain extremes.
        ((0, 0), Direction::SouthWest),
        ((255, 255), Direction::NorthEast),
        ((0, 255), Direction::NorthWest),
        ((255, 0), Direction::SouthEast),
    ];

    for ((x, y), expected) in cases {
        assert_eq!(
            classifier.classify(Position::new(x, y)),
            expected,
            "({x}, {y})"
        );
    }
}

/// Small jitter inside the dead zone never escapes it.
#[test]
fn center_zone_stability() {
    let classifier = ZoneClassifier::default();
    let jitter = [
        (128, 135),
        (125, 132),
        (131, 138),
        (126, 134),
        (130, 136),
    ];
    for (x, y) in jitter {
        assert_eq!(classifier.classify(Position::new(x, y)), Direction::Center);
    }
}

/// Degenerate calibration where no rule can fire still yields Center.
#[test]
fn fallback_reachable_with_degenerate_thresholds() {
    let unreachable = Thresholds {
        north_y: 255,
        south_y: 0,
        east_x: 255,
        west_x: 0,
        center_x_min: 255,
        center_x_max: 0,
        center_y_min: 255,
        center_y_max: 0,
        diagonal_high: 255,
        diagonal_low: 0,
    };
    // Not a sane calibration, and validate says so.
    assert!(unreachable.validate().is_err());

    let classifier = ZoneClassifier::new(unreachable);
    for pos in [(128i16, 128i16), (1, 1), (254, 254), (255, 255), (0, 0)] {
        assert_eq!(
            classifier.classify(Position::from(pos)),
            Direction::Center,
            "{pos:?}"
        );
    }
}

/// Replay a capture through the source seam and classify each reading.
#[test]
fn classify_replayed_capture() {
    const CAPTURE: &[(u8, u8)] = &[
        (128, 135), // at rest
        (128, 250), // pushed up
        (250, 250), // rolled into the corner
        (250, 135), // eased right
        (128, 135), // released
    ];
    let expected = [
        Direction::Center,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::Center,
    ];

    let classifier = ZoneClassifier::default();
    let mut source = SimulatedSource::new(CAPTURE);

    for want in expected {
        let pos = source.read().expect("capture not exhausted");
        assert_eq!(classifier.classify(pos), want);
    }
    assert!(source.read().is_err());
}

/// The short display codes survive a full rotation unchanged.
#[test]
fn display_codes_for_rotation() {
    let classifier = ZoneClassifier::default();
    let expected = [
        ((128, 135), "C"),
        ((128, 250), "N"),
        ((128, 20), "S"),
        ((250, 135), "E"),
        ((10, 135), "W"),
        ((250, 250), "NE"),
        ((10, 250), "NW"),
        ((250, 10), "SE"),
        ((10, 10), "SW"),
    ];
    for ((x, y), code) in expected {
        assert_eq!(classifier.classify(Position::new(x, y)).as_str(), code);
    }
}
