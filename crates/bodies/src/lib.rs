//! Fast Sun and Moon ephemerides.
//!
//! Both bodies are modelled with short trigonometric series in Julian
//! centuries since J2000.0. They are good to a fraction of a degree, which is
//! enough for rise/set times and lunar phase but not for eclipse work.

pub mod frames;
pub mod illumination;
pub mod moon;
pub mod sun;

use std::fmt;
use std::str::FromStr;

use lunisolar_core::time::century_from_j2000;
use lunisolar_core::{Cartesian3, Spherical};
use thiserror::Error;

pub use illumination::{Illumination, moon_illumination, moon_illumination_at};

/// A body with a fast position model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Raised when a body name cannot be parsed.
#[derive(Debug, Error)]
#[error("unknown body '{0}' (expected 'sun' or 'moon')")]
pub struct UnknownBody(pub String);

impl Body {
    pub const ALL: [Body; 2] = [Body::Sun, Body::Moon];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
        }
    }

    /// Geocentric ecliptic position in kilometres at nominal distance.
    pub fn position(self, century: f64) -> Cartesian3 {
        match self {
            Body::Sun => sun::position(century),
            Body::Moon => moon::position(century),
        }
    }

    /// Geocentric ecliptic unit vector.
    pub fn direction(self, century: f64) -> Cartesian3 {
        match self {
            Body::Sun => sun::direction(century),
            Body::Moon => moon::direction(century),
        }
    }

    /// Right ascension / declination with the nominal distance as radius.
    pub fn equatorial_position(self, century: f64) -> Spherical {
        frames::equatorial_coordinates(self.position(century), century)
    }

    /// Right ascension / declination on the unit sphere.
    pub fn equatorial_direction(self, century: f64) -> Spherical {
        frames::equatorial_coordinates(self.direction(century), century)
    }

    /// [`Body::equatorial_position`] for a J2000 day count.
    pub fn equatorial_position_at(self, days: f64) -> Spherical {
        self.equatorial_position(century_from_j2000(days))
    }

    /// [`Body::equatorial_direction`] for a J2000 day count.
    pub fn equatorial_direction_at(self, days: f64) -> Spherical {
        self.equatorial_direction(century_from_j2000(days))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = UnknownBody;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" | "sol" => Ok(Body::Sun),
            "moon" | "luna" => Ok(Body::Moon),
            _ => Err(UnknownBody(s.to_string())),
        }
    }
}
