#[allow(unused_imports)]
use crate::prelude::*;

use crate::lane::F64x2;
use num_traits::Zero;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A free 2D displacement with `f64` components.
///
/// [`Vector`] is the leaf of the kernel: everything else is built from it.
/// It carries no invariant; NaN and infinite components are legal and
/// propagate through arithmetic per IEEE-754.
///
/// A vector is a displacement, not a position: `Vector + Vector = Vector`,
/// `Point + Vector = Point`, and `Point - Point = Vector`. Use the [`From`]
/// conversions to reinterpret a vector as a [`Point`] or (via absolute
/// values) a [`Size`].
///
/// # Examples
///
/// ```
/// use planar::prelude::*;
///
/// let v1 = Vector::new(3.0, 4.0);
/// let v2 = Vector::new(1.0, 2.0);
///
/// assert_eq!(v1 + v2, Vector::new(4.0, 6.0));
/// assert_eq!(v1.length(), 5.0);
/// assert_eq!(v1.dot(v2), 11.0);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector {
    v: F64x2,
}

impl Vector {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Vector {
        Vector { v: F64x2::new(x, y) }
    }
    #[must_use]
    pub fn zero() -> Vector {
        Vector::new(0.0, 0.0)
    }

    pub(crate) fn from_lanes(v: F64x2) -> Vector {
        Vector { v }
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

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`length`](Vector::length) when comparing lengths,
    /// to avoid the square root.
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the length of the vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns a unit vector in the same direction as this vector.
    ///
    /// The vector is first divided by its largest absolute component and only
    /// then by the resulting length, so that large-magnitude vectors do not
    /// overflow in the intermediate `length` computation. A zero vector
    /// normalizes to NaN components.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::prelude::*;
    ///
    /// let v = Vector::new(1e300, 1e300);
    /// assert!((v.normalize().length() - 1.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Vector {
        let scaled = *self / self.v.abs().hmax();
        scaled / scaled.length()
    }

    /// Computes the dot product of two vectors.
    #[must_use]
    pub fn dot(&self, other: Vector) -> f64 {
        self.v.mul_sum(other.v)
    }

    /// Computes the 2D cross product of two vectors.
    ///
    /// The result is the signed area of the parallelogram formed by the two
    /// vectors: positive if `other` is counter-clockwise from `self`,
    /// negative otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::prelude::*;
    /// let v1 = Vector::new(2.0, 0.0);
    /// let v2 = Vector::new(0.0, 3.0);
    /// assert_eq!(v1.cross_product(v2), 6.0);
    /// ```
    #[must_use]
    pub fn cross_product(&self, other: Vector) -> f64 {
        self.x() * other.y() - self.y() * other.x()
    }

    /// The determinant of the 2x2 matrix with `v1` and `v2` as rows; another
    /// name for [`cross_product`](Vector::cross_product).
    #[must_use]
    pub fn determinant(v1: Vector, v2: Vector) -> f64 {
        v1.cross_product(v2)
    }

    /// Returns the signed angle from `v1` to `v2` in degrees, in
    /// `(-180, 180]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use planar::prelude::*;
    /// let right = Vector::new(1.0, 0.0);
    /// let up = Vector::new(0.0, 1.0);
    /// assert_eq!(Vector::angle_between(right, up), 90.0);
    /// assert_eq!(Vector::angle_between(right, -right), 180.0);
    /// ```
    #[must_use]
    pub fn angle_between(v1: Vector, v2: Vector) -> f64 {
        let sin = v1.cross_product(v2);
        let cos = v1.dot(v2);
        f64::atan2(sin, cos) * DEGREES_PER_RADIAN
    }

    /// Performs a component-wise multiplication of two vectors.
    #[must_use]
    pub fn component_multiply(&self, other: Vector) -> Vector {
        Vector { v: self.v * other.v }
    }

    /// Performs a component-wise division of two vectors.
    #[must_use]
    pub fn component_divide(&self, other: Vector) -> Vector {
        Vector { v: self.v / other.v }
    }

    /// Returns a new vector with the absolute values of each component.
    #[must_use]
    pub fn abs(&self) -> Vector {
        Vector { v: self.v.abs() }
    }

    /// Checks if the vector is approximately equal to another vector, within
    /// [`APPROX_EPSILON`].
    pub fn almost_eq(&self, rhs: Vector) -> bool {
        (*self - rhs).length() < APPROX_EPSILON
    }

    /// Compares two vectors based on their squared length.
    ///
    /// Attempts [`partial_cmp()`](f64::partial_cmp) first; if that fails (NaN
    /// components), logs a warning and falls back to
    /// [`total_cmp()`](f64::total_cmp), which orders NaN deterministically.
    #[must_use]
    pub fn cmp_by_length(&self, other: &Vector) -> Ordering {
        let self_len = self.length_squared();
        let other_len = other.length_squared();
        self_len.partial_cmp(&other_len).unwrap_or_else(|| {
            warn!(
                "cmp_by_length(): partial_cmp() failed: {} vs. {}",
                self, other
            );
            self_len.total_cmp(&other_len)
        })
    }
}

impl Zero for Vector {
    fn zero() -> Self {
        Vector::zero()
    }

    fn is_zero(&self) -> bool {
        *self == Vector::zero()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "{0:.2$},{1:.2$}", self.x(), self.y(), p)
        } else {
            write!(f, "{},{}", self.x(), self.y())
        }
    }
}

impl Add<Vector> for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector { v: self.v + rhs.v }
    }
}
impl AddAssign<Vector> for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.v = self.v + rhs.v;
    }
}

impl Sub<Vector> for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector { v: self.v - rhs.v }
    }
}
impl SubAssign<Vector> for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.v = self.v - rhs.v;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector { v: -self.v }
    }
}

impl Add<Point> for Vector {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        rhs + self
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector { v: self.v * rhs }
    }
}
impl Mul<Vector> for f64 {
    type Output = Vector;

    fn mul(self, rhs: Vector) -> Vector {
        rhs * self
    }
}
impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.v = self.v * rhs;
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector { v: self.v / rhs }
    }
}
impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, rhs: f64) {
        self.v = self.v / rhs;
    }
}

impl From<Point> for Vector {
    fn from(point: Point) -> Vector {
        Vector::from_lanes(point.lanes())
    }
}
impl From<Size> for Vector {
    fn from(size: Size) -> Vector {
        Vector::from_lanes(size.lanes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Arithmetic ====================

    #[test]
    fn vector_addition_subtraction() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, 4.0);
        assert_eq!(a + b, Vector::new(4.0, 6.0));
        assert_eq!(b - a, Vector::new(2.0, 2.0));

        let mut c = a;
        c += b;
        assert_eq!(c, Vector::new(4.0, 6.0));
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn vector_scalar_multiplication_division() {
        let a = Vector::new(2.0, -3.0);
        assert_eq!(a * 2.0, Vector::new(4.0, -6.0));
        assert_eq!(2.0 * a, Vector::new(4.0, -6.0));
        assert_eq!(a / 2.0, Vector::new(1.0, -1.5));

        let mut b = a;
        b *= 3.0;
        assert_eq!(b, Vector::new(6.0, -9.0));
        b /= 3.0;
        assert_eq!(b, a);
    }

    #[test]
    fn vector_negation() {
        assert_eq!(-Vector::new(1.0, -2.0), Vector::new(-1.0, 2.0));
    }

    #[test]
    fn vector_dot_and_cross() {
        let a = Vector::new(2.0, 3.0);
        let b = Vector::new(4.0, 5.0);
        assert_eq!(a.dot(b), 23.0);
        assert_eq!(a.cross_product(b), -2.0);
        assert_eq!(Vector::determinant(a, b), -2.0);
    }

    #[test]
    fn vector_component_wise() {
        let a = Vector::new(8.0, 15.0);
        let b = Vector::new(4.0, 5.0);
        assert_eq!(a.component_multiply(b), Vector::new(32.0, 75.0));
        assert_eq!(a.component_divide(b), Vector::new(2.0, 3.0));
    }

    #[test]
    fn vector_nan_propagates() {
        let a = Vector::new(f64::NAN, 1.0);
        let b = a + Vector::new(1.0, 1.0);
        assert!(b.x().is_nan());
        assert_eq!(b.y(), 2.0);
        // IEEE equality: NaN components make the vector unequal to itself.
        assert_ne!(a, a);
    }

    #[test]
    fn vector_infinity_propagates() {
        let a = Vector::new(f64::INFINITY, 0.0);
        assert_eq!((a * 2.0).x(), f64::INFINITY);
        assert!((a - a).x().is_nan());
    }

    // ==================== Length and Normalization ====================

    #[test]
    fn vector_length() {
        let v = Vector::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn vector_normalize_unit_length_and_parallel() {
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = Vector::new(rng.gen_range(-1e3..1e3), rng.gen_range(-1e3..1e3));
            if v.is_zero() {
                continue;
            }
            let n = v.normalize();
            check_le!((n.length() - 1.0).abs(), 1e-9);
            // Parallel to the original: cross product vanishes.
            check_le!(v.cross_product(n).abs() / v.length(), 1e-9);
        }
    }

    #[test]
    fn vector_normalize_huge_magnitude() {
        // Naive v / v.length() would overflow the intermediate length here.
        let v = Vector::new(1e300, -1e300);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-9);
        assert!(n.x() > 0.0 && n.y() < 0.0);
    }

    #[test]
    fn vector_normalize_zero_is_nan() {
        let n = Vector::zero().normalize();
        assert!(n.x().is_nan() && n.y().is_nan());
    }

    // ==================== Angles ====================

    #[test]
    fn vector_angle_between_quadrants() {
        let right = Vector::new(1.0, 0.0);
        assert_eq!(Vector::angle_between(right, Vector::new(0.0, 1.0)), 90.0);
        assert_eq!(Vector::angle_between(right, Vector::new(0.0, -1.0)), -90.0);
        assert_eq!(Vector::angle_between(right, Vector::new(-1.0, 0.0)), 180.0);
        assert_eq!(Vector::angle_between(right, right), 0.0);
        // Result stays in (-180, 180].
        let almost_opposite = Vector::new(-1.0, -1e-12);
        assert!(Vector::angle_between(right, almost_opposite) < 0.0);
    }

    // ==================== Ordering and Logging ====================

    #[test]
    fn vector_cmp_by_length_falls_back_on_nan() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let a = Vector::new(1.0, 0.0);
        let b = Vector::new(f64::NAN, 0.0);
        // total_cmp puts NaN above all numbers.
        assert_eq!(a.cmp_by_length(&b), Ordering::Less);
        assert_eq!(a.cmp_by_length(&Vector::new(0.0, 2.0)), Ordering::Less);
        assert_eq!(a.cmp_by_length(&a), Ordering::Equal);
    }

    // ==================== Conversions and Formatting ====================

    #[test]
    fn vector_conversions() {
        let v = Vector::new(-3.0, 4.0);
        assert_eq!(Point::from(v), Point::new(-3.0, 4.0));
        assert_eq!(Size::from(v), Size::new(3.0, 4.0).unwrap());
        assert_eq!(Vector::from(Point::new(1.0, 2.0)), Vector::new(1.0, 2.0));
    }

    #[test]
    fn vector_display() {
        let v = Vector::new(1.0, 2.5);
        assert_eq!(v.to_string(), "1,2.5");
        assert_eq!(format!("{v:.2}"), "1.00,2.50");
    }
}
