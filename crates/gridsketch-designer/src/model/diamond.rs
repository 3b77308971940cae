use smallvec::smallvec;

use super::{anchored_span, calculate_bounds, distance_to_segment, Point, ShapeKernel, Vertices};

/// Height of a diamond as a fraction of its width.
pub const DIAMOND_ASPECT: f64 = 0.25;

/// Rhombus with a fixed aspect ratio, centered vertically on the drag origin.
///
/// Only the horizontal drag distance matters: the west tip is resolved the
/// same direction-aware way as a rectangle's left edge. Vertices are west,
/// north, east, south.
pub struct DiamondShape;

impl ShapeKernel for DiamondShape {
    fn vertices(origin: Point, target: Point) -> Vertices {
        let (west, width) = anchored_span(origin.x, target.x);
        let half_height = width * DIAMOND_ASPECT / 2.0;
        let mid_x = west + width / 2.0;
        let y = origin.y;
        smallvec![
            Point::new(west, y),
            Point::new(mid_x, y - half_height),
            Point::new(west + width, y),
            Point::new(mid_x, y + half_height),
        ]
    }

    fn is_valid(vertices: &[Point]) -> bool {
        vertices.len() == 4 && vertices[2].x - vertices[0].x > 0.0
    }

    fn center(vertices: &[Point]) -> Point {
        calculate_bounds(vertices).center()
    }

    /// Inside when the point lies on the same side of all four edges, or
    /// within `tolerance` of any edge. A diamond with no area only has edges.
    fn contains_point(vertices: &[Point], p: Point, tolerance: f64) -> bool {
        if signed_area(vertices) != 0.0 {
            let mut has_neg = false;
            let mut has_pos = false;
            for i in 0..4 {
                let a = vertices[i];
                let b = vertices[(i + 1) % 4];
                let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
                has_neg |= cross < 0.0;
                has_pos |= cross > 0.0;
            }
            if !(has_neg && has_pos) {
                return true;
            }
        }

        (0..4).any(|i| distance_to_segment(p, vertices[i], vertices[(i + 1) % 4]) <= tolerance)
    }
}

/// Shoelace area of the four-vertex outline; sign follows winding.
fn signed_area(vertices: &[Point]) -> f64 {
    (0..4)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % 4];
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        / 2.0
}
