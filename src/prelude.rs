#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    assert::*,
    config::*,
    error::GeometryError,
    float::AlmostEq,
    line::Line,
    matrix::Matrix,
    point::Point,
    rect::{Rect, Side},
    segment::Segment,
    size::Size,
    vector::Vector,
};
