//! Parabola through three equally spaced samples.
//!
//! Samples sit at x = −1, 0, +1 (one hour apart). Every root of the fitted
//! parabola inside that interval is reported, even when the three samples
//! share a sign.

/// Below this curvature the three samples are treated as a straight line.
pub const DEGENERATE_CURVATURE: f64 = 1e-12;

/// Roots of a fit that lie within `[−1, 1]`, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roots {
    None,
    One(f64),
    Two(f64, f64),
}

impl Roots {
    fn from_candidates(first: f64, second: f64) -> Self {
        match (first.abs() <= 1.0, second.abs() <= 1.0) {
            (true, true) => Roots::Two(first, second),
            (true, false) => Roots::One(first),
            (false, true) => Roots::One(second),
            (false, false) => Roots::None,
        }
    }
}

/// `y(x) = a·x² + b·x + c` through `(−1, y₋)`, `(0, y₀)`, `(1, y₊)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl QuadraticFit {
    pub fn through(y_minus: f64, y_zero: f64, y_plus: f64) -> Self {
        Self {
            a: 0.5 * (y_plus + y_minus) - y_zero,
            b: 0.5 * (y_plus - y_minus),
            c: y_zero,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.a.abs() < DEGENERATE_CURVATURE
    }

    pub fn value_at(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Vertex `(xe, ye)`; `None` for a straight line.
    pub fn extremum(&self) -> Option<(f64, f64)> {
        if self.is_degenerate() {
            return None;
        }
        let xe = -self.b / (2.0 * self.a);
        let ye = (self.a * xe + self.b) * xe + self.c;
        Some((xe, ye))
    }

    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    pub fn roots(&self) -> Roots {
        let Some((xe, _)) = self.extremum() else {
            return self.linear_root();
        };

        let disc = self.discriminant();
        if disc < 0.0 {
            return Roots::None;
        }
        let dx = 0.5 * disc.sqrt() / self.a.abs();
        Roots::from_candidates(xe - dx, xe + dx)
    }

    fn linear_root(&self) -> Roots {
        if self.b == 0.0 {
            return Roots::None;
        }
        let x = -self.c / self.b;
        if x.abs() <= 1.0 { Roots::One(x) } else { Roots::None }
    }
}
