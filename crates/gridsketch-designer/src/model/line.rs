use smallvec::smallvec;

use super::{distance_to_segment, Point, ShapeKernel, Vertices};

/// Straight segment from `origin` to `target`.
pub struct LineShape;

impl ShapeKernel for LineShape {
    fn vertices(origin: Point, target: Point) -> Vertices {
        smallvec![origin, target]
    }

    /// A zero-length line is degenerate.
    fn is_valid(vertices: &[Point]) -> bool {
        vertices.len() == 2 && vertices[0] != vertices[1]
    }

    fn center(vertices: &[Point]) -> Point {
        vertices[0].midpoint(&vertices[1])
    }

    fn contains_point(vertices: &[Point], p: Point, tolerance: f64) -> bool {
        distance_to_segment(p, vertices[0], vertices[1]) <= tolerance
    }
}
