/// Absolute tolerance used when comparing line slopes and intercepts.
///
/// Two slopes (or intercepts) closer than this are treated as equal, so the
/// lines are parallel (or coincident). A segment whose endpoints' X values
/// differ by less than this produces a vertical line.
pub const TOLERANCE: f64 = 1e-10;

/// Slack applied when testing whether a line intersection lands within a
/// segment's bounding rectangle.
///
/// Line intersections can fall marginally outside a segment's bounds due to
/// floating-point error, so segment containment is checked against bounds
/// expanded by this amount rather than with the rect's strict `contains`.
pub const CONTAINS_EPSILON: f64 = 1e-3;

/// Tolerance for approximate equality (`almost_eq`) between computed values,
/// including scalar/SIMD cross-validation.
pub const APPROX_EPSILON: f64 = 1e-9;

pub const DEGREES_PER_RADIAN: f64 = 180.0 / std::f64::consts::PI;
