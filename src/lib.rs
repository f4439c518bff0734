#![cfg_attr(feature = "simd", feature(portable_simd))]

//! 2D geometric primitives: points, vectors, sizes, axis-aligned rectangles,
//! infinite lines and bounded segments, with intersection queries over all of
//! them.
//!
//! All types are immutable `f64` value types; the only interior mutability in
//! the crate is [`Segment`](segment::Segment)'s memoized line. With the `simd`
//! feature enabled (nightly only), component arithmetic runs on `std::simd`
//! lanes instead of the scalar fallback; the observable results are the same
//! either way.

pub mod assert;
pub mod config;
pub mod error;
pub mod float;
pub mod lane;
pub mod line;
pub mod matrix;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod segment;
pub mod size;
pub mod vector;
