#[allow(unused_imports)]
use crate::prelude::*;

use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, Mul};

/// A 2D affine transform: a row-major 2x2 linear part plus a translation.
///
/// `a * b` composes so that `(a * b) * p == a * (b * p)`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Matrix {
    #[must_use]
    pub fn identity() -> Matrix {
        Matrix { m11: 1.0, m12: 0.0, m21: 0.0, m22: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }

    #[must_use]
    pub fn zeroed() -> Matrix {
        Matrix { m11: 0.0, m12: 0.0, m21: 0.0, m22: 0.0, offset_x: 0.0, offset_y: 0.0 }
    }

    #[must_use]
    pub fn translation(offset_x: f64, offset_y: f64) -> Matrix {
        Matrix { offset_x, offset_y, ..Matrix::identity() }
    }

    /// Counterclockwise rotation about the origin.
    #[must_use]
    pub fn rotation(radians: f64) -> Matrix {
        let (sin, cos) = radians.sin_cos();
        Matrix { m11: cos, m12: -sin, m21: sin, m22: cos, offset_x: 0.0, offset_y: 0.0 }
    }

    #[must_use]
    pub fn scaling(scale_x: f64, scale_y: f64) -> Matrix {
        Matrix { m11: scale_x, m22: scale_y, ..Matrix::zeroed() }
    }

    pub fn determinant(&self) -> f64 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    pub fn is_identity(&self) -> bool {
        *self == Matrix::identity()
    }

    /// Checks if the matrix is approximately equal to another matrix, within
    /// [`APPROX_EPSILON`] per component.
    pub fn almost_eq(&self, rhs: &Matrix) -> bool {
        (self.m11 - rhs.m11).abs() < APPROX_EPSILON
            && (self.m12 - rhs.m12).abs() < APPROX_EPSILON
            && (self.m21 - rhs.m21).abs() < APPROX_EPSILON
            && (self.m22 - rhs.m22).abs() < APPROX_EPSILON
            && (self.offset_x - rhs.offset_x).abs() < APPROX_EPSILON
            && (self.offset_y - rhs.offset_y).abs() < APPROX_EPSILON
    }

    #[must_use]
    pub fn transform_point(&self, point: Point) -> Point {
        Point::new(
            self.m11 * point.x() + self.m12 * point.y() + self.offset_x,
            self.m21 * point.x() + self.m22 * point.y() + self.offset_y,
        )
    }

    /// Applies the linear part only; translation does not affect directions.
    #[must_use]
    pub fn transform_vector(&self, vector: Vector) -> Vector {
        Vector::new(
            self.m11 * vector.x() + self.m12 * vector.y(),
            self.m21 * vector.x() + self.m22 * vector.y(),
        )
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        Matrix {
            m11: self.m11 * rhs.m11 + self.m12 * rhs.m21,
            m12: self.m11 * rhs.m12 + self.m12 * rhs.m22,
            m21: self.m21 * rhs.m11 + self.m22 * rhs.m21,
            m22: self.m21 * rhs.m12 + self.m22 * rhs.m22,
            offset_x: self.m11 * rhs.offset_x + self.m12 * rhs.offset_y + self.offset_x,
            offset_y: self.m21 * rhs.offset_x + self.m22 * rhs.offset_y + self.offset_y,
        }
    }
}

impl Mul<Point> for Matrix {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        self.transform_point(rhs)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        self.transform_vector(rhs)
    }
}

impl Add<Matrix> for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        Matrix {
            m11: self.m11 + rhs.m11,
            m12: self.m12 + rhs.m12,
            m21: self.m21 + rhs.m21,
            m22: self.m22 + rhs.m22,
            offset_x: self.offset_x + rhs.offset_x,
            offset_y: self.offset_y + rhs.offset_y,
        }
    }
}

impl One for Matrix {
    fn one() -> Matrix {
        Matrix::identity()
    }
}

impl Zero for Matrix {
    fn zero() -> Matrix {
        Matrix::zeroed()
    }
    fn is_zero(&self) -> bool {
        *self == Matrix::zeroed()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} | {}; {} {} | {}]",
            self.m11, self.m12, self.offset_x, self.m21, self.m22, self.offset_y
        )
    }
}
