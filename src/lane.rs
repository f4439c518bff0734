//! Fixed-width `f64` lane packs backing the geometry types.
//!
//! Every geometry type stores its components in an [`F64x2`] (points,
//! vectors, sizes) or an [`F64x4`] (rects, laid out `[x, y, width, height]`).
//! Two interchangeable backends provide the same operations: a plain scalar
//! one, and (behind the `simd` feature) one over `std::simd`. The active
//! backend is re-exported at this module's root; both are compiled when the
//! feature is enabled so the cross-validation tests below can compare them
//! lane op by lane op.

pub mod scalar {
    use std::ops::{Add, Div, Mul, Neg, Sub};

    /// Two `f64` lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    pub struct F64x2([f64; 2]);

    impl F64x2 {
        #[must_use]
        pub fn new(x: f64, y: f64) -> F64x2 {
            F64x2([x, y])
        }
        #[must_use]
        pub fn splat(v: f64) -> F64x2 {
            F64x2([v, v])
        }
        pub fn x(&self) -> f64 {
            self.0[0]
        }
        pub fn y(&self) -> f64 {
            self.0[1]
        }
        #[must_use]
        pub fn min(self, rhs: F64x2) -> F64x2 {
            F64x2([self.0[0].min(rhs.0[0]), self.0[1].min(rhs.0[1])])
        }
        #[must_use]
        pub fn max(self, rhs: F64x2) -> F64x2 {
            F64x2([self.0[0].max(rhs.0[0]), self.0[1].max(rhs.0[1])])
        }
        #[must_use]
        pub fn abs(self) -> F64x2 {
            F64x2([self.0[0].abs(), self.0[1].abs()])
        }
        /// Horizontal max of the two lanes.
        pub fn hmax(self) -> f64 {
            self.0[0].max(self.0[1])
        }
        /// Sum of the lane-wise product, i.e. a dot product.
        pub fn mul_sum(self, rhs: F64x2) -> f64 {
            self.0[0] * rhs.0[0] + self.0[1] * rhs.0[1]
        }
    }

    impl Add<F64x2> for F64x2 {
        type Output = F64x2;
        fn add(self, rhs: F64x2) -> F64x2 {
            F64x2([self.0[0] + rhs.0[0], self.0[1] + rhs.0[1]])
        }
    }
    impl Sub<F64x2> for F64x2 {
        type Output = F64x2;
        fn sub(self, rhs: F64x2) -> F64x2 {
            F64x2([self.0[0] - rhs.0[0], self.0[1] - rhs.0[1]])
        }
    }
    impl Neg for F64x2 {
        type Output = F64x2;
        fn neg(self) -> F64x2 {
            F64x2([-self.0[0], -self.0[1]])
        }
    }
    impl Mul<F64x2> for F64x2 {
        type Output = F64x2;
        fn mul(self, rhs: F64x2) -> F64x2 {
            F64x2([self.0[0] * rhs.0[0], self.0[1] * rhs.0[1]])
        }
    }
    impl Div<F64x2> for F64x2 {
        type Output = F64x2;
        fn div(self, rhs: F64x2) -> F64x2 {
            F64x2([self.0[0] / rhs.0[0], self.0[1] / rhs.0[1]])
        }
    }
    impl Mul<f64> for F64x2 {
        type Output = F64x2;
        fn mul(self, rhs: f64) -> F64x2 {
            F64x2([self.0[0] * rhs, self.0[1] * rhs])
        }
    }
    impl Div<f64> for F64x2 {
        type Output = F64x2;
        fn div(self, rhs: f64) -> F64x2 {
            F64x2([self.0[0] / rhs, self.0[1] / rhs])
        }
    }

    /// Four `f64` lanes.
    #[derive(Copy, Clone, Debug, Default, PartialEq)]
    pub struct F64x4([f64; 4]);

    impl F64x4 {
        #[must_use]
        pub fn new(a: f64, b: f64, c: f64, d: f64) -> F64x4 {
            F64x4([a, b, c, d])
        }
        #[must_use]
        pub fn from_lo_hi(lo: F64x2, hi: F64x2) -> F64x4 {
            F64x4([lo.x(), lo.y(), hi.x(), hi.y()])
        }
        /// The first two lanes.
        #[must_use]
        pub fn lo(self) -> F64x2 {
            F64x2::new(self.0[0], self.0[1])
        }
        /// The last two lanes.
        #[must_use]
        pub fn hi(self) -> F64x2 {
            F64x2::new(self.0[2], self.0[3])
        }
    }

    impl Add<F64x4> for F64x4 {
        type Output = F64x4;
        fn add(self, rhs: F64x4) -> F64x4 {
            F64x4([
                self.0[0] + rhs.0[0],
                self.0[1] + rhs.0[1],
                self.0[2] + rhs.0[2],
                self.0[3] + rhs.0[3],
            ])
        }
    }
    impl Mul<F64x4> for F64x4 {
        type Output = F64x4;
        fn mul(self, rhs: F64x4) -> F64x4 {
            F64x4([
                self.0[0] * rhs.0[0],
                self.0[1] * rhs.0[1],
                self.0[2] * rhs.0[2],
                self.0[3] * rhs.0[3],
            ])
        }
    }
}

#[cfg(feature = "simd")]
pub mod simd {
    use std::ops::{Add, Div, Mul, Neg, Sub};
    use std::simd::cmp::SimdPartialEq;
    use std::simd::num::SimdFloat;
    use std::simd::{f64x2, f64x4, simd_swizzle};

    /// Two `f64` lanes in a SIMD register.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct F64x2(f64x2);

    impl F64x2 {
        #[must_use]
        pub fn new(x: f64, y: f64) -> F64x2 {
            F64x2(f64x2::from_array([x, y]))
        }
        #[must_use]
        pub fn splat(v: f64) -> F64x2 {
            F64x2(f64x2::splat(v))
        }
        pub fn x(&self) -> f64 {
            self.0.as_array()[0]
        }
        pub fn y(&self) -> f64 {
            self.0.as_array()[1]
        }
        #[must_use]
        pub fn min(self, rhs: F64x2) -> F64x2 {
            F64x2(self.0.simd_min(rhs.0))
        }
        #[must_use]
        pub fn max(self, rhs: F64x2) -> F64x2 {
            F64x2(self.0.simd_max(rhs.0))
        }
        #[must_use]
        pub fn abs(self) -> F64x2 {
            F64x2(self.0.abs())
        }
        /// Horizontal max of the two lanes, via swizzle+max rather than a
        /// branch.
        pub fn hmax(self) -> f64 {
            let swapped = simd_swizzle!(self.0, [1, 0]);
            self.0.simd_max(swapped).as_array()[0]
        }
        /// Sum of the lane-wise product, i.e. a dot product.
        pub fn mul_sum(self, rhs: F64x2) -> f64 {
            (self.0 * rhs.0).reduce_sum()
        }
    }

    // Lane-wise IEEE equality (NaN lanes unequal), matching the scalar
    // backend's derived PartialEq.
    impl PartialEq for F64x2 {
        fn eq(&self, other: &F64x2) -> bool {
            self.0.simd_eq(other.0).all()
        }
    }

    impl Add<F64x2> for F64x2 {
        type Output = F64x2;
        fn add(self, rhs: F64x2) -> F64x2 {
            F64x2(self.0 + rhs.0)
        }
    }
    impl Sub<F64x2> for F64x2 {
        type Output = F64x2;
        fn sub(self, rhs: F64x2) -> F64x2 {
            F64x2(self.0 - rhs.0)
        }
    }
    impl Neg for F64x2 {
        type Output = F64x2;
        fn neg(self) -> F64x2 {
            F64x2(-self.0)
        }
    }
    impl Mul<F64x2> for F64x2 {
        type Output = F64x2;
        fn mul(self, rhs: F64x2) -> F64x2 {
            F64x2(self.0 * rhs.0)
        }
    }
    impl Div<F64x2> for F64x2 {
        type Output = F64x2;
        fn div(self, rhs: F64x2) -> F64x2 {
            F64x2(self.0 / rhs.0)
        }
    }
    impl Mul<f64> for F64x2 {
        type Output = F64x2;
        fn mul(self, rhs: f64) -> F64x2 {
            F64x2(self.0 * f64x2::splat(rhs))
        }
    }
    impl Div<f64> for F64x2 {
        type Output = F64x2;
        fn div(self, rhs: f64) -> F64x2 {
            F64x2(self.0 / f64x2::splat(rhs))
        }
    }

    /// Four `f64` lanes in a SIMD register.
    #[derive(Copy, Clone, Debug, Default)]
    pub struct F64x4(f64x4);

    impl F64x4 {
        #[must_use]
        pub fn new(a: f64, b: f64, c: f64, d: f64) -> F64x4 {
            F64x4(f64x4::from_array([a, b, c, d]))
        }
        #[must_use]
        pub fn from_lo_hi(lo: F64x2, hi: F64x2) -> F64x4 {
            F64x4(simd_swizzle!(lo.0, hi.0, [0, 1, 2, 3]))
        }
        /// The first two lanes.
        #[must_use]
        pub fn lo(self) -> F64x2 {
            F64x2(simd_swizzle!(self.0, [0, 1]))
        }
        /// The last two lanes.
        #[must_use]
        pub fn hi(self) -> F64x2 {
            F64x2(simd_swizzle!(self.0, [2, 3]))
        }
    }

    impl PartialEq for F64x4 {
        fn eq(&self, other: &F64x4) -> bool {
            self.0.simd_eq(other.0).all()
        }
    }

    impl Add<F64x4> for F64x4 {
        type Output = F64x4;
        fn add(self, rhs: F64x4) -> F64x4 {
            F64x4(self.0 + rhs.0)
        }
    }
    impl Mul<F64x4> for F64x4 {
        type Output = F64x4;
        fn mul(self, rhs: F64x4) -> F64x4 {
            F64x4(self.0 * rhs.0)
        }
    }
}

#[cfg(not(feature = "simd"))]
pub use scalar::{F64x2, F64x4};
#[cfg(feature = "simd")]
pub use self::simd::{F64x2, F64x4};

#[cfg(test)]
mod tests {
    use super::scalar;

    // ==================== Scalar Backend ====================

    #[test]
    fn scalar_lane_arithmetic() {
        let a = scalar::F64x2::new(1.0, 2.0);
        let b = scalar::F64x2::new(3.0, 5.0);
        assert_eq!(a + b, scalar::F64x2::new(4.0, 7.0));
        assert_eq!(b - a, scalar::F64x2::new(2.0, 3.0));
        assert_eq!(-a, scalar::F64x2::new(-1.0, -2.0));
        assert_eq!(a * b, scalar::F64x2::new(3.0, 10.0));
        assert_eq!(b / a, scalar::F64x2::new(3.0, 2.5));
        assert_eq!(a * 2.0, scalar::F64x2::new(2.0, 4.0));
        assert_eq!(b / 2.0, scalar::F64x2::new(1.5, 2.5));
    }

    #[test]
    fn scalar_lane_min_max_abs() {
        let a = scalar::F64x2::new(-1.0, 4.0);
        let b = scalar::F64x2::new(2.0, -3.0);
        assert_eq!(a.min(b), scalar::F64x2::new(-1.0, -3.0));
        assert_eq!(a.max(b), scalar::F64x2::new(2.0, 4.0));
        assert_eq!(a.abs(), scalar::F64x2::new(1.0, 4.0));
        assert_eq!(a.hmax(), 4.0);
        assert_eq!(a.abs().hmax(), 4.0);
    }

    #[test]
    fn scalar_lane_mul_sum() {
        let a = scalar::F64x2::new(2.0, 3.0);
        let b = scalar::F64x2::new(4.0, 5.0);
        assert_eq!(a.mul_sum(b), 23.0);
    }

    #[test]
    fn scalar_lane4_split() {
        let v = scalar::F64x4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.lo(), scalar::F64x2::new(1.0, 2.0));
        assert_eq!(v.hi(), scalar::F64x2::new(3.0, 4.0));
        assert_eq!(scalar::F64x4::from_lo_hi(v.lo(), v.hi()), v);
    }

    #[test]
    fn scalar_lane_nan_inequality() {
        let a = scalar::F64x2::new(f64::NAN, 0.0);
        assert_ne!(a, a);
    }

    // ==================== Scalar vs. SIMD Cross-Validation ====================

    #[cfg(feature = "simd")]
    mod cross_validation {
        use crate::lane::{scalar, simd};
        use rand::rngs::StdRng;
        use rand::{Rng, SeedableRng};

        fn pairs(rng: &mut StdRng, n: usize) -> Vec<[f64; 4]> {
            let mut out: Vec<[f64; 4]> = (0..n)
                .map(|_| {
                    [
                        rng.gen_range(-1e6..1e6),
                        rng.gen_range(-1e6..1e6),
                        rng.gen_range(-1e6..1e6),
                        rng.gen_range(-1e6..1e6),
                    ]
                })
                .collect();
            // Edge lanes the rect sentinel relies on.
            out.push([f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY]);
            out.push([0.0, -0.0, 1.0, -1.0]);
            out
        }

        #[test]
        fn lane2_ops_agree() {
            let mut rng = StdRng::seed_from_u64(42);
            for [x1, y1, x2, y2] in pairs(&mut rng, 1000) {
                let (sa, sb) = (scalar::F64x2::new(x1, y1), scalar::F64x2::new(x2, y2));
                let (va, vb) = (simd::F64x2::new(x1, y1), simd::F64x2::new(x2, y2));

                let cases = [
                    (sa + sb, va + vb),
                    (sa - sb, va - vb),
                    (-sa, -va),
                    (sa * sb, va * vb),
                    (sa * y2, va * y2),
                    (sa.min(sb), va.min(vb)),
                    (sa.max(sb), va.max(vb)),
                    (sa.abs(), va.abs()),
                ];
                for (s, v) in cases {
                    assert_eq!(s.x().to_bits(), v.x().to_bits(), "lane x: {s:?} vs. {v:?}");
                    assert_eq!(s.y().to_bits(), v.y().to_bits(), "lane y: {s:?} vs. {v:?}");
                }
                assert_eq!(sa.hmax().to_bits(), va.hmax().to_bits());
                let (ssum, vsum) = (sa.mul_sum(sb), va.mul_sum(vb));
                if ssum.is_finite() {
                    assert!(
                        (ssum - vsum).abs() <= 1e-9 * ssum.abs().max(1.0),
                        "mul_sum: {ssum} vs. {vsum}"
                    );
                } else {
                    assert_eq!(ssum.to_bits(), vsum.to_bits());
                }
            }
        }

        #[test]
        fn lane4_ops_agree() {
            let mut rng = StdRng::seed_from_u64(43);
            for [a, b, c, d] in pairs(&mut rng, 1000) {
                let s = scalar::F64x4::new(a, b, c, d);
                let v = simd::F64x4::new(a, b, c, d);
                assert_eq!(s.lo().x().to_bits(), v.lo().x().to_bits());
                assert_eq!(s.lo().y().to_bits(), v.lo().y().to_bits());
                assert_eq!(s.hi().x().to_bits(), v.hi().x().to_bits());
                assert_eq!(s.hi().y().to_bits(), v.hi().y().to_bits());

                let ss = s * scalar::F64x4::new(d, c, b, a);
                let vv = v * simd::F64x4::new(d, c, b, a);
                assert_eq!(ss.lo().x().to_bits(), vv.lo().x().to_bits());
                assert_eq!(ss.hi().y().to_bits(), vv.hi().y().to_bits());
            }
        }

        #[test]
        fn simd_hmax_uses_no_nan_poisoning() {
            // maxNum semantics: a single NaN lane yields the other lane.
            let v = simd::F64x2::new(f64::NAN, 3.0);
            assert_eq!(v.hmax(), 3.0);
            let s = scalar::F64x2::new(f64::NAN, 3.0);
            assert_eq!(s.hmax(), 3.0);
        }
    }
}
