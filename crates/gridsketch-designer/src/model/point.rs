use smallvec::smallvec;

use super::{Point, ShapeKernel, Vertices};

/// Single-vertex marker. Committed on pointer-down; `target` is ignored.
pub struct PointShape;

impl ShapeKernel for PointShape {
    fn vertices(origin: Point, _target: Point) -> Vertices {
        smallvec![origin]
    }

    fn is_valid(vertices: &[Point]) -> bool {
        vertices.len() == 1
    }

    fn center(vertices: &[Point]) -> Point {
        vertices[0]
    }

    fn contains_point(vertices: &[Point], p: Point, tolerance: f64) -> bool {
        vertices[0].distance_to(&p) <= tolerance
    }
}
