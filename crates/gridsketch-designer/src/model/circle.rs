use smallvec::smallvec;

use super::{Bounds, Point, ShapeKernel, Vertices};

/// Circle stored as `[center, radius_point]`.
///
/// Both vertices move together on translate so the radius is preserved;
/// resizing goes through [`CircleShape::with_radius`] instead.
pub struct CircleShape;

impl CircleShape {
    pub fn radius(vertices: &[Point]) -> f64 {
        vertices[0].distance_to(&vertices[1])
    }

    /// Same center, new radius. The radius point keeps its direction from the
    /// center; a zero-radius circle grows along +x.
    pub fn with_radius(vertices: &[Point], radius: f64) -> Vertices {
        let center = vertices[0];
        let current = Self::radius(vertices);
        let (ux, uy) = if current > 0.0 {
            (
                (vertices[1].x - center.x) / current,
                (vertices[1].y - center.y) / current,
            )
        } else {
            (1.0, 0.0)
        };
        smallvec![
            center,
            Point::new(center.x + ux * radius, center.y + uy * radius)
        ]
    }
}

impl ShapeKernel for CircleShape {
    fn vertices(origin: Point, target: Point) -> Vertices {
        smallvec![origin, target]
    }

    fn is_valid(vertices: &[Point]) -> bool {
        vertices.len() == 2 && Self::radius(vertices) > 0.0
    }

    fn center(vertices: &[Point]) -> Point {
        vertices[0]
    }

    fn contains_point(vertices: &[Point], p: Point, tolerance: f64) -> bool {
        vertices[0].distance_to(&p) <= Self::radius(vertices) + tolerance
    }

    /// The two stored vertices do not enclose the disc, so bounds come from
    /// center and radius.
    fn bounds(vertices: &[Point]) -> Bounds {
        let c = vertices[0];
        let r = Self::radius(vertices);
        Bounds::new(c.x - r, c.y - r, c.x + r, c.y + r)
    }
}
