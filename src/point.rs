#[allow(unused_imports)]
use crate::prelude::*;

use crate::lane::F64x2;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, Sub};

/// A position in the plane.
///
/// Same representation as [`Vector`], but semantically a position rather than
/// a displacement: `Point - Point = Vector` and `Point ± Vector = Point`.
///
/// Geometric queries that have no answer (parallel lines, out-of-bounds
/// intersections) report it with the [`undefined`](Point::undefined) NaN
/// sentinel rather than an error; test for it with
/// [`is_undefined`](Point::is_undefined).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    v: F64x2,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Point {
        Point { v: F64x2::new(x, y) }
    }
    #[must_use]
    pub fn zero() -> Point {
        Point::new(0.0, 0.0)
    }

    /// The "no meaningful answer" sentinel: both coordinates NaN.
    ///
    /// Note that NaN is unequal to itself, so compare with
    /// [`is_undefined`](Point::is_undefined), not `==`.
    #[must_use]
    pub fn undefined() -> Point {
        Point::new(f64::NAN, f64::NAN)
    }

    pub fn is_undefined(&self) -> bool {
        self.x().is_nan() || self.y().is_nan()
    }

    pub(crate) fn from_lanes(v: F64x2) -> Point {
        Point { v }
    }
    pub(crate) fn lanes(&self) -> F64x2 {
        self.v
    }

    pub fn x(&self) -> f64 {
        self.v.x()
    }
    pub fn y(&self) -> f64 {
        self.v.y()
    }

    /// Component-wise minimum of two points.
    #[must_use]
    pub fn min(point1: Point, point2: Point) -> Point {
        Point { v: point1.v.min(point2.v) }
    }

    /// Component-wise maximum of two points.
    #[must_use]
    pub fn max(point1: Point, point2: Point) -> Point {
        Point { v: point1.v.max(point2.v) }
    }

    /// Returns this point translated by `(offset_x, offset_y)`.
    #[must_use]
    pub fn offset(&self, offset_x: f64, offset_y: f64) -> Point {
        Point { v: self.v + F64x2::new(offset_x, offset_y) }
    }

    #[must_use]
    pub fn with_x(&self, x: f64) -> Point {
        Point::new(x, self.y())
    }
    #[must_use]
    pub fn with_y(&self, y: f64) -> Point {
        Point::new(self.x(), y)
    }

    /// Checks if the point is approximately equal to another point, within
    /// [`APPROX_EPSILON`].
    pub fn almost_eq(&self, rhs: Point) -> bool {
        (*self - rhs).length() < APPROX_EPSILON
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "{0:.2$},{1:.2$}", self.x(), self.y(), p)
        } else {
            write!(f, "{},{}", self.x(), self.y())
        }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point { v: self.v + rhs.lanes() }
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point { v: self.v - rhs.lanes() }
    }
}

impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::from_lanes(self.v - rhs.v)
    }
}

impl From<Vector> for Point {
    fn from(vector: Vector) -> Point {
        Point::from_lanes(vector.lanes())
    }
}
impl From<Size> for Point {
    fn from(size: Size) -> Point {
        Point::from_lanes(size.lanes())
    }
}
