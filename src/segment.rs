#[allow(unused_imports)]
use crate::prelude::*;

use std::fmt;
use std::fmt::Formatter;
use std::sync::OnceLock;

/// A directed segment between two points.
///
/// The carrying [`Line`] is computed on first use and cached; equality and
/// hashing consider only the endpoints.
#[derive(Clone, Debug, Default)]
pub struct Segment {
    a: Point,
    b: Point,
    line: OnceLock<Line>,
}

impl Segment {
    #[must_use]
    pub fn new(a: Point, b: Point) -> Segment {
        Segment { a, b, line: OnceLock::new() }
    }

    pub fn a(&self) -> Point {
        self.a
    }
    pub fn b(&self) -> Point {
        self.b
    }

    /// The infinite line through this segment's endpoints.
    pub fn line(&self) -> &Line {
        self.line.get_or_init(|| Line::from_segment(self))
    }

    /// This segment's bounding rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.a, self.b)
    }

    pub fn length_squared(&self) -> f64 {
        let r = self.rect();
        r.width() * r.width() + r.height() * r.height()
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Bounding-box membership with a [`CONTAINS_EPSILON`] margin on every
    /// edge, so crossings landing just outside the endpoints still count.
    fn contains_loose(&self, point: Point) -> bool {
        let margin = Vector::new(CONTAINS_EPSILON, CONTAINS_EPSILON);
        let bounds = Rect::from_points(
            Point::min(self.a, self.b) - margin,
            Point::max(self.a, self.b) + margin,
        );
        bounds.contains(point)
    }

    /// Where a line crosses this segment, if the crossing lands on (or
    /// within tolerance of) the segment.
    pub fn intersect_line(&self, line: &Line) -> Option<Point> {
        let point = self.line().intersect(line);
        if point.is_undefined() || !self.contains_loose(point) {
            return None;
        }
        Some(point)
    }

    /// Where two segments cross, if the crossing lies within both segments'
    /// tolerance bounds.
    pub fn intersect_segment(&self, segment: &Segment) -> Option<Point> {
        let point = self.line().intersect(segment.line());
        if point.is_undefined()
            || !self.contains_loose(point)
            || !segment.contains_loose(point)
        {
            return None;
        }
        Some(point)
    }

    /// The points where this segment crosses a rectangle's edges, in left,
    /// right, top, bottom order.
    pub fn intersect_rect(&self, rect: &Rect) -> impl Iterator<Item = Point> + Clone {
        let segment = self.clone();
        let rect = *rect;
        Side::ALL
            .into_iter()
            .filter_map(move |side| segment.intersect_segment(&rect.segment(side)))
    }

    /// The first rectangle side this segment crosses, in left, right, top,
    /// bottom order, or [`Side::None`] if it crosses none.
    pub fn intersect_side(&self, rect: &Rect) -> Side {
        Side::ALL
            .into_iter()
            .find(|side| self.intersect_segment(&rect.segment(*side)).is_some())
            .unwrap_or(Side::None)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.a == other.a && self.b == other.b
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{} -> {}]", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    // ==================== Basics ====================
    #[test]
    fn segment_length() {
        let s = segment(0.0, 0.0, 3.0, 4.0);
        assert_eq!(s.length_squared(), 25.0);
        assert_eq!(s.length(), 5.0);
    }

    #[test]
    fn segment_rect_is_bounding_box() {
        let s = segment(5.0, 1.0, 1.0, 4.0);
        assert_eq!(s.rect(), Rect::new(1.0, 1.0, 4.0, 3.0).unwrap());
    }

    #[test]
    fn segment_line_is_cached() {
        let s = segment(0.0, 0.0, 2.0, 2.0);
        let first = s.line() as *const Line;
        let second = s.line() as *const Line;
        assert!(std::ptr::eq(first, second));
        assert_eq!(s.line().slope(), 1.0);
    }

    #[test]
    fn segment_equality_ignores_cache() {
        let a = segment(0.0, 0.0, 1.0, 1.0);
        let b = segment(0.0, 0.0, 1.0, 1.0);
        b.line();
        assert_eq!(a, b);
        assert_ne!(a, segment(1.0, 1.0, 0.0, 0.0));
    }

    // ==================== Line crossing ====================
    #[test]
    fn segment_intersect_line_hit() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        let l = Line::vertical(4.0);
        assert_eq!(s.intersect_line(&l), Some(Point::new(4.0, 0.0)));
    }

    #[test]
    fn segment_intersect_line_crossing_outside_bounds() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        let l = Line::vertical(15.0);
        assert_eq!(s.intersect_line(&l), None);
    }

    #[test]
    fn segment_intersect_line_parallel() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        let l = Line::new(0.0, 5.0);
        assert_eq!(s.intersect_line(&l), None);
    }

    #[test]
    fn segment_intersect_line_near_endpoint_within_tolerance() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        let l = Line::vertical(10.0005);
        assert_eq!(s.intersect_line(&l), Some(Point::new(10.0005, 0.0)));
        assert_eq!(s.intersect_line(&Line::vertical(10.1)), None);
    }

    // ==================== Segment crossing ====================
    #[test]
    fn segment_intersect_segment_crossing() {
        let a = segment(0.0, 0.0, 10.0, 10.0);
        let b = segment(0.0, 10.0, 10.0, 0.0);
        assert_eq!(a.intersect_segment(&b), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn segment_intersect_segment_lines_cross_outside_either() {
        // The carrying lines cross at (5, 5), outside both segments.
        let a = segment(0.0, 0.0, 2.0, 2.0);
        let b = segment(0.0, 10.0, 2.0, 8.0);
        assert_eq!(a.intersect_segment(&b), None);
        // Crossing inside a's bounds but outside b's.
        let c = segment(0.0, 0.0, 10.0, 10.0);
        let d = segment(0.0, 10.0, 2.0, 8.0);
        assert_eq!(c.intersect_segment(&d), None);
        assert_eq!(d.intersect_segment(&c), None);
    }

    #[test]
    fn segment_intersect_segment_parallel() {
        let a = segment(0.0, 0.0, 10.0, 0.0);
        let b = segment(0.0, 1.0, 10.0, 1.0);
        assert_eq!(a.intersect_segment(&b), None);
    }

    // ==================== Rect crossing ====================
    #[test]
    fn segment_intersect_rect_through_both_vertical_edges() {
        let s = segment(0.0, 0.0, 10.0, 0.0);
        let r = Rect::new(2.0, -5.0, 1.0, 10.0).unwrap();
        let hits: Vec<Point> = s.intersect_rect(&r).collect();
        assert_eq!(hits, vec![Point::new(2.0, 0.0), Point::new(3.0, 0.0)]);
    }

    #[test]
    fn segment_intersect_rect_miss() {
        let s = segment(0.0, 20.0, 10.0, 20.0);
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        assert_eq!(s.intersect_rect(&r).count(), 0);
    }

    #[test]
    fn segment_intersect_side_first_match_order() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).unwrap();
        // Crosses left and right edges; left is reported first.
        let across = segment(-5.0, 5.0, 15.0, 5.0);
        assert_eq!(across.intersect_side(&r), Side::Left);
        // Crosses top and bottom edges only.
        let down = segment(5.0, -5.0, 5.0, 15.0);
        assert_eq!(down.intersect_side(&r), Side::Top);
        let away = segment(20.0, 20.0, 30.0, 30.0);
        assert_eq!(away.intersect_side(&r), Side::None);
    }

    #[test]
    fn segment_display() {
        assert_eq!(segment(0.0, 0.0, 1.0, 2.0).to_string(), "[0,0 -> 1,2]");
    }
}
