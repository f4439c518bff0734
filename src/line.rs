#[allow(unused_imports)]
use crate::prelude::*;

use std::fmt;
use std::fmt::Formatter;

/// An infinite line in slope/intercept form.
///
/// Non-vertical lines store their slope and y-intercept. Vertical lines store
/// a slope of +inf and their x-intercept in `origin`, so every line in the
/// plane is representable. Slopes closer than [`TOLERANCE`] are treated as
/// equal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Line {
    slope: f64,
    origin: f64,
}

impl Line {
    /// A line with the given slope and y-intercept. Use
    /// [`vertical`](Line::vertical) for vertical lines.
    #[must_use]
    pub fn new(slope: f64, origin_y: f64) -> Line {
        Line { slope, origin: origin_y }
    }

    /// The vertical line through `x`.
    #[must_use]
    pub fn vertical(x: f64) -> Line {
        Line { slope: f64::INFINITY, origin: x }
    }

    /// The infinite line through a segment's endpoints. Endpoints within
    /// [`TOLERANCE`] of each other horizontally yield a vertical line.
    #[must_use]
    pub fn from_segment(segment: &Segment) -> Line {
        let a = segment.a();
        let b = segment.b();
        if (a.x() - b.x()).abs() < TOLERANCE {
            return Line::vertical(a.x());
        }
        let v = a - b;
        let slope = v.y() / v.x();
        Line { slope, origin: a.y() - slope * a.x() }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn is_vertical(&self) -> bool {
        self.slope == f64::INFINITY
    }
    pub fn is_horizontal(&self) -> bool {
        self.slope.abs() < TOLERANCE
    }

    /// The y-intercept; 0 for vertical lines, which never cross the y axis.
    pub fn origin_y(&self) -> f64 {
        if self.is_vertical() { 0.0 } else { self.origin }
    }

    /// The x-intercept; NaN for horizontal lines off the x axis.
    pub fn origin_x(&self) -> f64 {
        if self.is_vertical() {
            self.origin
        } else {
            (0.0 - self.origin) / self.slope
        }
    }

    /// A reference point on the line: the x-intercept's foot for vertical
    /// lines, the y-intercept otherwise.
    pub fn origin(&self) -> Point {
        if self.is_vertical() {
            Point::new(self.origin, 0.0)
        } else {
            Point::new(0.0, self.origin)
        }
    }

    /// Where two lines cross.
    ///
    /// Coincident lines answer with their shared [`origin`](Line::origin);
    /// parallel but distinct lines have no crossing and answer
    /// [`Point::undefined`].
    #[must_use]
    pub fn intersect(&self, line: &Line) -> Point {
        // Two verticals first: their slope difference is inf - inf = NaN,
        // which the generic slope test below cannot classify.
        if self.is_vertical() && line.is_vertical() {
            return if (self.origin_x() - line.origin_x()).abs() < TOLERANCE {
                self.origin()
            } else {
                Point::undefined()
            };
        }
        if (self.slope - line.slope).abs() < TOLERANCE {
            return if (self.origin_y() - line.origin_y()).abs() < TOLERANCE {
                self.origin()
            } else {
                Point::undefined()
            };
        }
        if self.is_vertical() {
            let x = self.origin_x();
            return Point::new(x, line.slope * x + line.origin_y());
        }
        if line.is_vertical() {
            let x = line.origin_x();
            return Point::new(x, self.slope * x + self.origin_y());
        }
        let x = (self.origin_y() - line.origin_y()) / (line.slope - self.slope);
        Point::new(x, line.slope * x + line.origin_y())
    }

    /// Where this line crosses a segment, if it does.
    pub fn intersect_segment(&self, segment: &Segment) -> Option<Point> {
        segment.intersect_line(self)
    }

    /// The points where this line crosses a rectangle's edges, in left,
    /// right, top, bottom order. A line through a corner reports that corner
    /// once per edge it touches.
    pub fn intersect_rect(&self, rect: &Rect) -> impl Iterator<Item = Point> + Clone {
        let line = *self;
        let rect = *rect;
        Side::ALL
            .into_iter()
            .filter_map(move |side| line.intersect_segment(&rect.segment(side)))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_vertical() {
            write!(f, "x = {}", self.origin)
        } else {
            write!(f, "y = {}x + {}", self.slope, self.origin)
        }
    }
}
