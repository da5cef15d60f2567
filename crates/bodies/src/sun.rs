//! Fast solar position.
//!
//! A two-harmonic equation of centre on a mean anomaly that is linear in
//! time. Good to roughly 20–30 arcminutes, which is plenty for sunrise and
//! twilight work and for lunar phase geometry.

use lunisolar_core::constants::{ARCSECONDS_PER_TURN, FULL_CIRCLE};
use lunisolar_core::units::fractional;
use lunisolar_core::{Cartesian3, Spherical};

use crate::frames;

/// Nominal Earth–Sun distance used for the full-distance form (km).
pub const NOMINAL_DISTANCE_KM: f64 = 149_598_000.0;

/// Mean anomaly in radians, reduced to one turn.
pub fn mean_anomaly(century: f64) -> f64 {
    FULL_CIRCLE * fractional(0.993_133 + 99.997_361 * century)
}

/// Geocentric ecliptic longitude in radians, reduced to one turn.
pub fn ecliptic_longitude(century: f64) -> f64 {
    let m = mean_anomaly(century);
    let turns = 0.785_945_3
        + (m / FULL_CIRCLE)
        + ((6_893.0 * m.sin() + 72.0 * (2.0 * m).sin() + 6_191.2 * century) / ARCSECONDS_PER_TURN);
    FULL_CIRCLE * fractional(turns)
}

/// Geocentric ecliptic position at the nominal distance (km).
pub fn position(century: f64) -> Cartesian3 {
    at_radius(century, NOMINAL_DISTANCE_KM)
}

/// Geocentric ecliptic unit vector.
pub fn direction(century: f64) -> Cartesian3 {
    at_radius(century, 1.0)
}

pub fn equatorial_position(century: f64) -> Spherical {
    frames::equatorial_coordinates(position(century), century)
}

pub fn equatorial_direction(century: f64) -> Spherical {
    frames::equatorial_coordinates(direction(century), century)
}

fn at_radius(century: f64, radius: f64) -> Cartesian3 {
    Spherical::new(ecliptic_longitude(century), 0.0, radius).to_cartesian()
}
