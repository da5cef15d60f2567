//! Altitude of a body above the observer's horizon.

use std::f64::consts::{FRAC_PI_2, PI};

use lunisolar_bodies::Body;
use lunisolar_core::time::{century_from_j2000, gmst_angle};
use lunisolar_core::units::normalize_radians;
use lunisolar_core::{Matrix4, Spherical};

use crate::location::GeographicLocation;

/// Local hour angle τ in radians: sidereal angle plus longitude minus RA.
///
/// Not reduced to a single turn.
pub fn local_hour_angle(days: f64, equatorial: &Spherical, location: &GeographicLocation) -> f64 {
    gmst_angle(days) + location.lambda() - equatorial.lon
}

/// Sine of the altitude of an equatorial direction seen from `location`.
pub fn sin_altitude_of(days: f64, equatorial: &Spherical, location: &GeographicLocation) -> f64 {
    let tau = local_hour_angle(days, equatorial, location);
    let dec = equatorial.lat;
    location.sin_phi() * dec.sin() + location.cos_phi() * dec.cos() * tau.cos()
}

/// Sine of the altitude of `body` at `days`.
pub fn sin_altitude(body: Body, days: f64, location: &GeographicLocation) -> f64 {
    let equatorial = body.equatorial_direction(century_from_j2000(days));
    sin_altitude_of(days, &equatorial, location)
}

/// Azimuth and altitude of `body` on the unit sphere.
///
/// Azimuth is measured from north through east and lies in `[0, 2π)`.
pub fn horizontal_position(body: Body, days: f64, location: &GeographicLocation) -> Spherical {
    let equatorial = body.equatorial_direction(century_from_j2000(days));
    let tau = local_hour_angle(days, &equatorial, location);

    // x toward the meridian, y toward the west point, z toward the pole
    let hour_frame = Spherical::new(tau, equatorial.lat, 1.0).to_cartesian();
    let horizon = Matrix4::rotation_y(FRAC_PI_2 - location.phi()) * hour_frame;
    let south_based = Spherical::from_cartesian(&horizon);

    Spherical::new(normalize_radians(south_based.lon + PI), south_based.lat, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lunisolar_core::units::rad_from_deg;

    #[test]
    fn on_meridian_altitude_matches_colatitude_rule() {
        // A star on the local meridian culminates at 90 - |lat - dec|.
        let location = GeographicLocation::new(10.0, 40.0);
        let days = 1_234.25;
        let ra = gmst_angle(days) + location.lambda();
        let equatorial = Spherical::new(ra, rad_from_deg(15.0), 1.0);
        assert_abs_diff_eq!(local_hour_angle(days, &equatorial, &location), 0.0, epsilon = 1e-12);
        let expected = rad_from_deg(65.0).sin();
        assert_abs_diff_eq!(sin_altitude_of(days, &equatorial, &location), expected, epsilon = 1e-12);
    }

    #[test]
    fn pole_star_altitude_equals_latitude() {
        let location = GeographicLocation::new(-70.0, 52.0);
        let pole = Spherical::new(0.3, FRAC_PI_2, 1.0);
        for days in [0.0, 100.3, 6_725.9] {
            let s = sin_altitude_of(days, &pole, &location);
            assert_abs_diff_eq!(s, location.sin_phi(), epsilon = 1e-12);
        }
    }

    #[test]
    fn sin_altitude_stays_in_range() {
        let location = GeographicLocation::new(-122.3321, 47.6062);
        for step in 0..48 {
            let days = 6_726.0 + step as f64 / 48.0;
            for body in Body::ALL {
                let s = sin_altitude(body, days, &location);
                assert!((-1.0..=1.0).contains(&s), "{body}: {s}");
            }
        }
    }

    #[test]
    fn horizontal_position_agrees_with_altitude_function() {
        let location = GeographicLocation::new(-122.3321, 47.6062);
        for step in 0..24 {
            let days = 6_726.0 + step as f64 / 24.0;
            for body in Body::ALL {
                let horizontal = horizontal_position(body, days, &location);
                assert_abs_diff_eq!(
                    horizontal.lat.sin(),
                    sin_altitude(body, days, &location),
                    epsilon = 1e-12
                );
                assert!((0.0..std::f64::consts::TAU).contains(&horizontal.lon));
            }
        }
    }

    #[test]
    fn culminating_body_sits_due_south_or_north() {
        let location = GeographicLocation::new(0.0, 40.0);
        let days = 500.0;
        let ra = gmst_angle(days) + location.lambda();

        // Hour angle zero with declination below the latitude: due south.
        let southern = Spherical::new(ra, rad_from_deg(-10.0), 1.0);
        let tau = local_hour_angle(days, &southern, &location);
        let v = Spherical::new(tau, southern.lat, 1.0).to_cartesian();
        let h = Spherical::from_cartesian(&(Matrix4::rotation_y(FRAC_PI_2 - location.phi()) * v));
        assert_abs_diff_eq!(normalize_radians(h.lon + PI), PI, epsilon = 1e-9);
        assert_abs_diff_eq!(h.altitude_deg(), 40.0, epsilon = 1e-9);
    }
}
