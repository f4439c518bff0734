#[allow(unused_imports)]
use crate::prelude::*;

/// Approximate equality for raw floats, within [`APPROX_EPSILON`].
pub trait AlmostEq {
    fn almost_eq(self, rhs: Self) -> bool;
}

impl AlmostEq for f64 {
    fn almost_eq(self, rhs: f64) -> bool {
        (self - rhs).abs() < APPROX_EPSILON
    }
}
