//! Lunar phase geometry from the Sun–Earth–Moon triangle.

use lunisolar_core::time::century_from_j2000;

use crate::{moon, sun};

/// Illuminated fraction of the lunar disk and the Sun–Moon–Earth phase angle.
///
/// The phase angle only spans `[0, π]`, so it cannot tell a waxing Moon from
/// a waning one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    /// Illuminated fraction `k`, 0 (new) to 1 (full).
    pub fraction: f64,
    /// Phase angle `φ` in radians.
    pub phase_angle: f64,
}

impl Illumination {
    pub fn phase_angle_deg(&self) -> f64 {
        self.phase_angle.to_degrees()
    }
}

/// Lunar illumination for a Julian century.
///
/// Side lengths come from the nominal-distance positions; the phase angle
/// follows from the law of cosines. A zero Earth–Moon or Sun–Moon distance
/// is outside the model and yields NaN.
pub fn moon_illumination(century: f64) -> Illumination {
    let moon_pos = moon::position(century);
    let earth_pos = sun::position(century).negated();
    let sun_moon = earth_pos + moon_pos;

    let r = sun_moon.norm();
    let re = earth_pos.norm();
    let d = moon_pos.norm();

    let cos_phi = (d * d + r * r - re * re) / (2.0 * d * r);
    Illumination {
        fraction: 0.5 * (1.0 + cos_phi),
        phase_angle: cos_phi.acos(),
    }
}

/// [`moon_illumination`] for a J2000 day count.
pub fn moon_illumination_at(days: f64) -> Illumination {
    moon_illumination(century_from_j2000(days))
}
