//! Cartesian and spherical coordinate values.

use std::ops::{Add, Neg, Sub};

use crate::units::{deg_from_rad, normalize_radians, rad_from_deg};

/// Three-component Cartesian vector, kilometres or unit-sphere depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// The same vector pointing the other way.
    #[inline]
    pub fn negated(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    /// Convert a spherical coordinate to Cartesian form.
    pub fn from_spherical(coords: &Spherical) -> Self {
        let radius = coords.radius;
        Self::new(
            radius * (coords.lat.cos() * coords.lon.cos()),
            radius * (coords.lat.cos() * coords.lon.sin()),
            radius * coords.lat.sin(),
        )
    }
}

impl Add for Cartesian3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Cartesian3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Cartesian3 {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Cartesian3> for [f64; 3] {
    fn from(v: Cartesian3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<Spherical> for Cartesian3 {
    fn from(coords: Spherical) -> Self {
        Self::from_spherical(&coords)
    }
}

/// Longitude-like angle, latitude-like angle, and radius.
///
/// One value type serves both the equatorial frame (right ascension,
/// declination) and the horizontal frame (azimuth, altitude). The frame is
/// implied by the constructor that built the value and the accessors used to
/// read it; nothing is stored to tag it. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub lon: f64,
    pub lat: f64,
    pub radius: f64,
}

impl Spherical {
    #[inline]
    pub const fn new(lon: f64, lat: f64, radius: f64) -> Self {
        Self { lon, lat, radius }
    }

    /// Build from right ascension and declination in degrees.
    pub fn equatorial(right_ascension_deg: f64, declination_deg: f64, radius: f64) -> Self {
        Self::new(rad_from_deg(right_ascension_deg), rad_from_deg(declination_deg), radius)
    }

    /// Build from azimuth and altitude in degrees.
    pub fn horizontal(azimuth_deg: f64, altitude_deg: f64, radius: f64) -> Self {
        Self::new(rad_from_deg(azimuth_deg), rad_from_deg(altitude_deg), radius)
    }

    /// Convert a Cartesian vector. On the polar axis the longitude is 0.
    pub fn from_cartesian(v: &Cartesian3) -> Self {
        // rho is the length of the projection onto the x-y plane
        let rho_squared = v.x * v.x + v.y * v.y;
        Self {
            radius: (rho_squared + v.z * v.z).sqrt(),
            lon: v.y.atan2(v.x),
            lat: v.z.atan2(rho_squared.sqrt()),
        }
    }

    /// Right ascension in degrees, wrapped into `[0, 360)`.
    pub fn right_ascension_deg(&self) -> f64 {
        deg_from_rad(normalize_radians(self.lon))
    }

    /// Declination in degrees.
    pub fn declination_deg(&self) -> f64 {
        deg_from_rad(self.lat)
    }

    /// Azimuth in degrees, signed as stored (`atan2` range for converted vectors).
    pub fn azimuth_deg(&self) -> f64 {
        deg_from_rad(self.lon)
    }

    /// Altitude in degrees.
    pub fn altitude_deg(&self) -> f64 {
        deg_from_rad(self.lat)
    }

    pub fn to_cartesian(&self) -> Cartesian3 {
        Cartesian3::from_spherical(self)
    }
}

impl From<Cartesian3> for Spherical {
    fn from(v: Cartesian3) -> Self {
        Self::from_cartesian(&v)
    }
}
