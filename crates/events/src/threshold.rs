use std::fmt;

use lunisolar_core::units::{rad_from_arcminutes, rad_from_deg};

/// Altitude that defines a rise or set event.
///
/// Sunrise includes refraction and the solar semi-diameter; Moonrise adds the
/// lunar parallax; PlanetRise is refraction alone for point sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseThreshold {
    Sunrise,
    CivilTwilight,
    NauticalTwilight,
    AstronomicalTwilight,
    Moonrise,
    PlanetRise,
}

impl RiseThreshold {
    pub const ALL: [RiseThreshold; 6] = [
        RiseThreshold::Sunrise,
        RiseThreshold::CivilTwilight,
        RiseThreshold::NauticalTwilight,
        RiseThreshold::AstronomicalTwilight,
        RiseThreshold::Moonrise,
        RiseThreshold::PlanetRise,
    ];

    /// Threshold altitude in radians.
    pub fn altitude(self) -> f64 {
        match self {
            RiseThreshold::Sunrise => rad_from_arcminutes(-50.0),
            RiseThreshold::CivilTwilight => rad_from_deg(-6.0),
            RiseThreshold::NauticalTwilight => rad_from_deg(-12.0),
            RiseThreshold::AstronomicalTwilight => rad_from_deg(-18.0),
            RiseThreshold::Moonrise => rad_from_arcminutes(8.0),
            RiseThreshold::PlanetRise => rad_from_arcminutes(-34.0),
        }
    }

    pub fn altitude_deg(self) -> f64 {
        self.altitude().to_degrees()
    }

    /// `sin h₀`, the value the altitude sine is compared against.
    pub fn sin_altitude(self) -> f64 {
        self.altitude().sin()
    }

    pub fn label(self) -> &'static str {
        match self {
            RiseThreshold::Sunrise => "sunrise",
            RiseThreshold::CivilTwilight => "civil twilight",
            RiseThreshold::NauticalTwilight => "nautical twilight",
            RiseThreshold::AstronomicalTwilight => "astronomical twilight",
            RiseThreshold::Moonrise => "moonrise",
            RiseThreshold::PlanetRise => "planet rise",
        }
    }
}

impl fmt::Display for RiseThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
