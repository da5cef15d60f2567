use lunisolar_core::units::rad_from_deg;

/// Observer position on the Earth's surface. Longitude is east-positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeographicLocation {
    pub longitude_deg: f64,
    pub latitude_deg: f64,
}

impl GeographicLocation {
    pub const fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
        }
    }

    /// Sine of the geographic latitude.
    #[inline]
    pub fn sin_phi(&self) -> f64 {
        rad_from_deg(self.latitude_deg).sin()
    }

    /// Cosine of the geographic latitude.
    #[inline]
    pub fn cos_phi(&self) -> f64 {
        rad_from_deg(self.latitude_deg).cos()
    }

    /// Longitude in radians.
    #[inline]
    pub fn lambda(&self) -> f64 {
        rad_from_deg(self.longitude_deg)
    }

    /// Latitude in radians.
    #[inline]
    pub fn phi(&self) -> f64 {
        rad_from_deg(self.latitude_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn derived_quantities() {
        let seattle = GeographicLocation::new(-122.3321, 47.6062);
        assert_abs_diff_eq!(seattle.sin_phi(), 47.6062_f64.to_radians().sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(seattle.cos_phi(), 47.6062_f64.to_radians().cos(), epsilon = 1e-15);
        assert_abs_diff_eq!(seattle.lambda(), -2.135_098, epsilon = 1e-6);

        let pole = GeographicLocation::new(0.0, 90.0);
        assert_abs_diff_eq!(pole.sin_phi(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(pole.cos_phi(), 0.0, epsilon = 1e-15);
    }
}
