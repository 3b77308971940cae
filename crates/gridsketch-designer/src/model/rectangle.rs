use smallvec::smallvec;

use super::{anchored_span, calculate_bounds, Point, ShapeKernel, Vertices};

/// Axis-aligned rectangle anchored at the drag origin.
///
/// Vertices are top-left, top-right, bottom-right, bottom-left (screen y-down),
/// regardless of which way the pointer was dragged.
pub struct RectangleShape;

impl ShapeKernel for RectangleShape {
    fn vertices(origin: Point, target: Point) -> Vertices {
        let (x, w) = anchored_span(origin.x, target.x);
        let (y, h) = anchored_span(origin.y, target.y);
        smallvec![
            Point::new(x, y),
            Point::new(x + w, y),
            Point::new(x + w, y + h),
            Point::new(x, y + h),
        ]
    }

    /// Zero width or zero height is degenerate.
    fn is_valid(vertices: &[Point]) -> bool {
        let b = calculate_bounds(vertices);
        vertices.len() == 4 && b.width > 0.0 && b.height > 0.0
    }

    fn center(vertices: &[Point]) -> Point {
        calculate_bounds(vertices).center()
    }

    fn contains_point(vertices: &[Point], p: Point, tolerance: f64) -> bool {
        calculate_bounds(vertices).expanded(tolerance).contains(p)
    }
}
