#[allow(unused_imports)]
use crate::prelude::*;

use crate::lane::F64x2;
use std::fmt;
use std::fmt::Formatter;

/// A non-negative extent in the plane.
///
/// [`new`](Size::new) rejects negative components; the only way to obtain a
/// negative-width size is the [`empty`](Size::empty) sentinel, whose
/// components are -inf.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    v: F64x2,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Result<Size> {
        if width < 0.0 || height < 0.0 {
            bail!(GeometryError::NEGATIVE_SIZE);
        }
        Ok(Size { v: F64x2::new(width, height) })
    }

    #[must_use]
    pub fn zero() -> Size {
        Size { v: F64x2::splat(0.0) }
    }

    /// The empty sentinel: both components -inf.
    #[must_use]
    pub fn empty() -> Size {
        Size { v: F64x2::splat(f64::NEG_INFINITY) }
    }

    pub fn is_empty(&self) -> bool {
        self.width() < 0.0
    }

    pub(crate) fn from_lanes(v: F64x2) -> Size {
        Size { v }
    }
    pub(crate) fn lanes(&self) -> F64x2 {
        self.v
    }

    pub fn width(&self) -> f64 {
        self.v.x()
    }
    pub fn height(&self) -> f64 {
        self.v.y()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty")
        } else if let Some(p) = f.precision() {
            write!(f, "{0:.2$},{1:.2$}", self.width(), self.height(), p)
        } else {
            write!(f, "{},{}", self.width(), self.height())
        }
    }
}

// Conversions from signed types take absolute values, so the result is
// always a valid size.
impl From<Vector> for Size {
    fn from(vector: Vector) -> Size {
        Size { v: vector.lanes().abs() }
    }
}
impl From<Point> for Size {
    fn from(point: Point) -> Size {
        Size { v: point.lanes().abs() }
    }
}
