//! 4×4 homogeneous transforms (rotation and translation blocks only).
//!
//! Single-axis rotations use the passive convention: the matrix re-expresses a
//! fixed vector in axes rotated by the given angle. Applying a transform is
//! written `matrix * vector`; `vector * matrix` is accepted as an alias and
//! produces the same result.

use std::ops::{Index, Mul};

use crate::vector::Cartesian3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    rows: [[f64; 4]; 4],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4 {
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Build from explicit row-major data.
    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::IDENTITY;
        m.rows[0][3] = x;
        m.rows[1][3] = y;
        m.rows[2][3] = z;
        m
    }

    pub fn from_translation(offset: Cartesian3) -> Self {
        Self::translation(offset.x, offset.y, offset.z)
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.rows[1][1] = c;
        m.rows[1][2] = s;
        m.rows[2][1] = -s;
        m.rows[2][2] = c;
        m
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.rows[0][0] = c;
        m.rows[0][2] = -s;
        m.rows[2][0] = s;
        m.rows[2][2] = c;
        m
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::IDENTITY;
        m.rows[0][0] = c;
        m.rows[0][1] = s;
        m.rows[1][0] = -s;
        m.rows[1][1] = c;
        m
    }

    /// Swap rows and columns. For a pure rotation this is the inverse.
    pub fn transposed(&self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (r, row) in self.rows.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                out[c][r] = *value;
            }
        }
        Self { rows: out }
    }

    pub fn row(&self, index: usize) -> [f64; 4] {
        self.rows[index]
    }

    /// Apply the transform to a point; the translation column is always added.
    pub fn transform(&self, v: &Cartesian3) -> Cartesian3 {
        let m = &self.rows;
        Cartesian3::new(
            v.x * m[0][0] + v.y * m[0][1] + v.z * m[0][2] + m[0][3],
            v.x * m[1][0] + v.y * m[1][1] + v.z * m[1][2] + m[1][3],
            v.x * m[2][0] + v.y * m[2][1] + v.z * m[2][2] + m[2][3],
        )
    }
}

impl Index<(usize, usize)> for Matrix4 {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.rows[row][col]
    }
}

impl Mul<Cartesian3> for Matrix4 {
    type Output = Cartesian3;

    fn mul(self, rhs: Cartesian3) -> Cartesian3 {
        self.transform(&rhs)
    }
}

impl Mul<Matrix4> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, rhs: Matrix4) -> Cartesian3 {
        rhs * self
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut out = [[0.0; 4]; 4];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.rows[r][k] * rhs.rows[k][c]).sum();
            }
        }
        Matrix4 { rows: out }
    }
}
