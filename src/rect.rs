#[allow(unused_imports)]
use crate::prelude::*;

use crate::lane::{F64x2, F64x4};
use std::fmt;
use std::fmt::Formatter;

/// One edge of a rectangle, or [`Side::None`] when no edge applies.
///
/// [`Side::ALL`] fixes the order edge queries are performed in.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    None,
}

impl Side {
    /// Edge query order: left, right, top, bottom.
    pub const ALL: [Side; 4] = [Side::Left, Side::Right, Side::Top, Side::Bottom];

    #[must_use]
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::None => Side::None,
        }
    }
}

/// An axis-aligned rectangle stored as `[x, y, width, height]`.
///
/// Width and height are never negative except in the [`empty`](Rect::empty)
/// sentinel, which is `[+inf, +inf, -inf, -inf]`. The sentinel absorbs under
/// intersection and is the identity under union, so it behaves like the empty
/// set; [`is_empty`](Rect::is_empty) tests for it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    v: F64x4,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Rect> {
        if width < 0.0 || height < 0.0 {
            bail!(GeometryError::NEGATIVE_SIZE);
        }
        Ok(Rect { v: F64x4::new(x, y, width, height) })
    }

    /// The empty sentinel.
    #[must_use]
    pub fn empty() -> Rect {
        Rect {
            v: F64x4::new(
                f64::INFINITY,
                f64::INFINITY,
                f64::NEG_INFINITY,
                f64::NEG_INFINITY,
            ),
        }
    }

    /// The smallest rectangle containing both points.
    #[must_use]
    pub fn from_points(point1: Point, point2: Point) -> Rect {
        let location = Point::min(point1, point2);
        let corner = Point::max(point1, point2);
        Rect {
            v: F64x4::from_lo_hi(location.lanes(), corner.lanes() - location.lanes()),
        }
    }

    /// The smallest rectangle containing `point` and `point + vector`.
    #[must_use]
    pub fn from_point_vector(point: Point, vector: Vector) -> Rect {
        Rect::from_points(point, point + vector)
    }

    /// A rectangle with the given top-left corner and size. An empty size
    /// yields the empty rectangle.
    #[must_use]
    pub fn from_size(location: Point, size: Size) -> Rect {
        if size.is_empty() {
            return Rect::empty();
        }
        Rect { v: F64x4::from_lo_hi(location.lanes(), size.lanes()) }
    }

    pub fn is_empty(&self) -> bool {
        let empty = self.width() < 0.0;
        // A negative width only ever occurs in the canonical sentinel.
        #[cfg(debug_assertions)]
        if empty {
            check!(*self == Rect::empty());
        }
        empty
    }

    pub fn x(&self) -> f64 {
        self.v.lo().x()
    }
    pub fn y(&self) -> f64 {
        self.v.lo().y()
    }
    pub fn width(&self) -> f64 {
        self.v.hi().x()
    }
    pub fn height(&self) -> f64 {
        self.v.hi().y()
    }

    pub fn set_x(&mut self, x: f64) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::MODIFY_EMPTY_RECT);
        }
        self.v = F64x4::from_lo_hi(F64x2::new(x, self.y()), self.v.hi());
        Ok(())
    }
    pub fn set_y(&mut self, y: f64) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::MODIFY_EMPTY_RECT);
        }
        self.v = F64x4::from_lo_hi(F64x2::new(self.x(), y), self.v.hi());
        Ok(())
    }
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::MODIFY_EMPTY_RECT);
        }
        if width < 0.0 {
            bail!(GeometryError::NEGATIVE_SIZE);
        }
        self.v = F64x4::from_lo_hi(self.v.lo(), F64x2::new(width, self.height()));
        Ok(())
    }
    pub fn set_height(&mut self, height: f64) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::MODIFY_EMPTY_RECT);
        }
        if height < 0.0 {
            bail!(GeometryError::NEGATIVE_SIZE);
        }
        self.v = F64x4::from_lo_hi(self.v.lo(), F64x2::new(self.width(), height));
        Ok(())
    }

    pub fn location(&self) -> Point {
        Point::from_lanes(self.v.lo())
    }
    pub fn set_location(&mut self, location: Point) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::MODIFY_EMPTY_RECT);
        }
        self.v = F64x4::from_lo_hi(location.lanes(), self.v.hi());
        Ok(())
    }

    pub fn size(&self) -> Size {
        if self.is_empty() {
            return Size::empty();
        }
        Size::from_lanes(self.v.hi())
    }
    /// Setting an empty size makes the whole rectangle empty.
    pub fn set_size(&mut self, size: Size) -> Result<()> {
        if size.is_empty() {
            *self = Rect::empty();
            return Ok(());
        }
        if self.is_empty() {
            bail!(GeometryError::MODIFY_EMPTY_RECT);
        }
        self.v = F64x4::from_lo_hi(self.v.lo(), size.lanes());
        Ok(())
    }

    pub fn left(&self) -> f64 {
        self.x()
    }
    pub fn top(&self) -> f64 {
        self.y()
    }
    /// -inf for the empty rectangle, else `x + width`.
    pub fn right(&self) -> f64 {
        if self.is_empty() {
            f64::NEG_INFINITY
        } else {
            self.x() + self.width()
        }
    }
    /// -inf for the empty rectangle, else `y + height`.
    pub fn bottom(&self) -> f64 {
        if self.is_empty() {
            f64::NEG_INFINITY
        } else {
            self.y() + self.height()
        }
    }

    /// The midpoint; undefined (NaN) for the empty rectangle.
    pub fn center(&self) -> Point {
        Point::from_lanes(self.v.lo() + self.v.hi() / 2.0)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }
    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }
    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn contains(&self, point: Point) -> bool {
        self.contains_xy(point.x(), point.y())
    }

    pub fn contains_xy(&self, x: f64, y: f64) -> bool {
        // Formulated so an infinite width never produces inf - inf = NaN.
        !self.is_empty()
            && x >= self.x()
            && x - self.width() <= self.x()
            && y >= self.y()
            && y - self.height() <= self.y()
    }

    pub fn contains_rect(&self, rect: &Rect) -> bool {
        !rect.is_empty() && self.contains(rect.top_left()) && self.contains(rect.bottom_right())
    }

    pub fn intersects_with(&self, rect: &Rect) -> bool {
        !self.is_empty()
            && !rect.is_empty()
            && rect.x() <= self.right()
            && rect.right() >= self.x()
            && rect.y() <= self.bottom()
            && rect.bottom() >= self.y()
    }

    /// Shrinks this rectangle to its overlap with `rect`; empty if they do
    /// not intersect. Degenerate overlaps (shared edge or corner) yield a
    /// zero-area rectangle, not the empty one.
    pub fn intersect(&mut self, rect: &Rect) {
        if !self.intersects_with(rect) {
            *self = Rect::empty();
            return;
        }
        let location = self.v.lo().max(rect.v.lo());
        let corner = (self.v.lo() + self.v.hi()).min(rect.v.lo() + rect.v.hi());
        let size = (corner - location).max(F64x2::splat(0.0));
        self.v = F64x4::from_lo_hi(location, size);
    }

    #[must_use]
    pub fn intersection(&self, rect: &Rect) -> Rect {
        let mut result = *self;
        result.intersect(rect);
        result
    }

    /// Grows this rectangle to the smallest one containing both. The empty
    /// rectangle is the identity.
    pub fn union(&mut self, rect: &Rect) {
        if rect.is_empty() {
            return;
        }
        if self.is_empty() {
            *self = *rect;
            return;
        }
        let location = self.v.lo().min(rect.v.lo());
        let right = self.right().max(rect.right());
        let bottom = self.bottom().max(rect.bottom());
        // An infinite extent stays infinite rather than becoming
        // inf - inf = NaN.
        let width = if right == f64::INFINITY {
            f64::INFINITY
        } else {
            (right - location.x()).max(0.0)
        };
        let height = if bottom == f64::INFINITY {
            f64::INFINITY
        } else {
            (bottom - location.y()).max(0.0)
        };
        self.v = F64x4::from_lo_hi(location, F64x2::new(width, height));
    }

    #[must_use]
    pub fn unioned(&self, rect: &Rect) -> Rect {
        let mut result = *self;
        result.union(rect);
        result
    }

    /// Grows this rectangle to contain `point`.
    pub fn union_point(&mut self, point: Point) {
        self.union(&Rect::from_points(point, point));
    }

    pub fn offset(&mut self, offset_x: f64, offset_y: f64) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::METHOD_ON_EMPTY_RECT);
        }
        self.v = self.v + F64x4::new(offset_x, offset_y, 0.0, 0.0);
        Ok(())
    }

    pub fn offset_vector(&mut self, vector: Vector) -> Result<()> {
        self.offset(vector.x(), vector.y())
    }

    /// Expands each edge outward by `width` horizontally and `height`
    /// vertically. Negative amounts shrink; a rectangle shrunk past zero
    /// extent becomes empty.
    pub fn inflate(&mut self, width: f64, height: f64) -> Result<()> {
        if self.is_empty() {
            bail!(GeometryError::METHOD_ON_EMPTY_RECT);
        }
        // Two additions of `width` rather than one of `2 * width`, so a
        // finite inflation of an infinite extent cannot overflow.
        self.v = self.v + F64x4::new(-width, -height, width, height);
        self.v = self.v + F64x4::new(0.0, 0.0, width, height);
        if !(self.width() >= 0.0 && self.height() >= 0.0) {
            *self = Rect::empty();
        }
        Ok(())
    }

    pub fn inflate_size(&mut self, size: Size) -> Result<()> {
        self.inflate(size.width(), size.height())
    }

    /// Multiplies position and extent by the given factors. Negative factors
    /// mirror the rectangle, which is then renormalized to keep its extent
    /// non-negative. No-op on the empty rectangle.
    pub fn scale(&mut self, scale_x: f64, scale_y: f64) {
        if self.is_empty() {
            return;
        }
        self.v = self.v * F64x4::new(scale_x, scale_y, scale_x, scale_y);
        let (mut x, mut y) = (self.x(), self.y());
        let (mut width, mut height) = (self.width(), self.height());
        if scale_x < 0.0 {
            x += width;
            width = -width;
        }
        if scale_y < 0.0 {
            y += height;
            height = -height;
        }
        self.v = F64x4::new(x, y, width, height);
    }

    /// Replaces this rectangle with the bounding box of its corners mapped
    /// through `matrix`. No-op on the empty rectangle.
    pub fn transform(&mut self, matrix: &Matrix) {
        if self.is_empty() {
            return;
        }
        let corners = [
            matrix.transform_point(self.top_left()),
            matrix.transform_point(self.top_right()),
            matrix.transform_point(self.bottom_left()),
            matrix.transform_point(self.bottom_right()),
        ];
        let mut location = corners[0];
        let mut corner = corners[0];
        for p in &corners[1..] {
            location = Point::min(location, *p);
            corner = Point::max(corner, *p);
        }
        *self = Rect::from_points(location, corner);
    }

    #[must_use]
    pub fn transformed(&self, matrix: &Matrix) -> Rect {
        let mut result = *self;
        result.transform(matrix);
        result
    }

    /// The edge of this rectangle on the given side, as a segment. The
    /// [`Side::None`] edge is a segment of undefined points.
    #[must_use]
    pub fn segment(&self, side: Side) -> Segment {
        match side {
            Side::Left => Segment::new(self.top_left(), self.bottom_left()),
            Side::Right => Segment::new(self.top_right(), self.bottom_right()),
            Side::Top => Segment::new(self.top_left(), self.top_right()),
            Side::Bottom => Segment::new(self.bottom_left(), self.bottom_right()),
            Side::None => Segment::new(Point::undefined(), Point::undefined()),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "Empty")
        } else if let Some(p) = f.precision() {
            write!(
                f,
                "{0:.4$},{1:.4$},{2:.4$},{3:.4$}",
                self.x(),
                self.y(),
                self.width(),
                self.height(),
                p
            )
        } else {
            write!(f, "{},{},{},{}", self.x(), self.y(), self.width(), self.height())
        }
    }
}
