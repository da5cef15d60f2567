//! Ecliptic ↔ equatorial frame rotation.

use lunisolar_core::units::rad_from_deg;
use lunisolar_core::{Cartesian3, Matrix4, Spherical};

/// Mean obliquity of the ecliptic in degrees for a Julian century.
pub fn mean_obliquity_deg(century: f64) -> f64 {
    23.439_291_11 - (46.8150 + (0.000_59 - 0.001_813 * century) * century) * century / 3_600.0
}

/// Rotation taking equatorial coordinates into the ecliptic frame.
pub fn equatorial_to_ecliptic(century: f64) -> Matrix4 {
    Matrix4::rotation_x(rad_from_deg(mean_obliquity_deg(century)))
}

/// Rotation taking ecliptic coordinates into the equatorial frame.
///
/// Always the transpose of [`equatorial_to_ecliptic`], so the two directions
/// stay exact inverses of each other.
pub fn ecliptic_to_equatorial(century: f64) -> Matrix4 {
    equatorial_to_ecliptic(century).transposed()
}

pub fn to_equatorial(ecliptic: Cartesian3, century: f64) -> Cartesian3 {
    ecliptic_to_equatorial(century) * ecliptic
}

pub fn to_ecliptic(equatorial: Cartesian3, century: f64) -> Cartesian3 {
    equatorial_to_ecliptic(century) * equatorial
}

/// Right ascension / declination of an ecliptic vector.
pub fn equatorial_coordinates(ecliptic: Cartesian3, century: f64) -> Spherical {
    Spherical::from_cartesian(&to_equatorial(ecliptic, century))
}
