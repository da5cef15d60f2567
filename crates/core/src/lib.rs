//! Core units, constants, and shared primitives for the lunisolar workspace.

pub mod matrix;
pub mod time;
pub mod vector;

pub use matrix::Matrix4;
pub use vector::{Cartesian3, Spherical};

/// Physical and calendrical constants (SI units unless stated otherwise).
pub mod constants {
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Hours per day.
    pub const HOURS_PER_DAY: f64 = 24.0;
    /// Days in one Julian century.
    pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
    /// Arcseconds in one full turn.
    pub const ARCSECONDS_PER_TURN: f64 = 1_296_000.0;
    /// One full turn in radians.
    pub const FULL_CIRCLE: f64 = std::f64::consts::TAU;
}

/// Angle conversion helpers. Angles are radians unless the name says otherwise.
pub mod units {
    use super::constants::FULL_CIRCLE;

    /// Convert radians to degrees.
    #[inline]
    pub fn deg_from_rad(rad: f64) -> f64 {
        rad * 180.0 / std::f64::consts::PI
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn rad_from_deg(deg: f64) -> f64 {
        deg * std::f64::consts::PI / 180.0
    }

    /// Convert arcminutes to radians.
    #[inline]
    pub fn rad_from_arcminutes(arcmin: f64) -> f64 {
        rad_from_deg(arcmin / 60.0)
    }

    /// Convert arcseconds to radians.
    #[inline]
    pub fn rad_from_arcseconds(arcsec: f64) -> f64 {
        rad_from_deg(arcsec / 3_600.0)
    }

    /// Fractional part measured from the floor, so the result is always in `[0, 1)`.
    #[inline]
    pub fn fractional(value: f64) -> f64 {
        value - value.floor()
    }

    /// Wrap an angle into `[0, 2π)`.
    #[inline]
    pub fn normalize_radians(rad: f64) -> f64 {
        rad.rem_euclid(FULL_CIRCLE)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_relative_eq;

        #[test]
        fn degree_radian_round_trip() {
            for deg in [-270.0, -45.0, 0.0, 12.5, 90.0, 359.0] {
                assert_relative_eq!(deg_from_rad(rad_from_deg(deg)), deg, epsilon = 1e-12);
            }
            assert_relative_eq!(rad_from_arcseconds(3_600.0), rad_from_deg(1.0));
            assert_relative_eq!(rad_from_arcminutes(-50.0), rad_from_deg(-50.0 / 60.0));
        }

        #[test]
        fn fractional_is_floor_based() {
            assert_relative_eq!(fractional(2.25), 0.25);
            assert_relative_eq!(fractional(-0.25), 0.75);
            assert_eq!(fractional(3.0), 0.0);
        }

        #[test]
        fn normalize_wraps_negative_angles() {
            use std::f64::consts::{FRAC_PI_2, PI};
            assert_relative_eq!(normalize_radians(-FRAC_PI_2), 1.5 * PI);
            assert_relative_eq!(normalize_radians(1.0), 1.0);
            assert_relative_eq!(normalize_radians(FULL_CIRCLE + 0.5), 0.5, epsilon = 1e-15);
        }
    }
}
