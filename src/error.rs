use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The two hard-failure conditions of the kernel.
///
/// Geometric queries with no meaningful answer never produce an error; they
/// report through sentinels instead ([`Point::undefined()`], `None`, or an
/// empty iterator). `GeometryError` covers only argument validation and
/// illegal mutation of the empty rect.
///
/// [`Point::undefined()`]: crate::point::Point::undefined
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// A negative width or height was passed to a `Size` or `Rect`
    /// constructor or setter.
    InvalidArgument(&'static str),
    /// A mutating operation was attempted on the empty rect.
    InvalidOperation(&'static str),
}

impl GeometryError {
    pub(crate) const NEGATIVE_SIZE: GeometryError =
        GeometryError::InvalidArgument("width and height cannot be negative");
    pub(crate) const MODIFY_EMPTY_RECT: GeometryError =
        GeometryError::InvalidOperation("cannot modify the empty rect");
    pub(crate) const METHOD_ON_EMPTY_RECT: GeometryError =
        GeometryError::InvalidOperation("cannot call this method on the empty rect");

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GeometryError::InvalidArgument(_))
    }
    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, GeometryError::InvalidOperation(_))
    }
}

impl Display for GeometryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            GeometryError::InvalidOperation(msg) => write!(f, "invalid operation: {msg}"),
        }
    }
}

impl Error for GeometryError {}
