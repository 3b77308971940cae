//! Geometry kernel: per-shape vertex generation, bounds, metadata and hit-testing.
//!
//! Every drawable shape is built from two world points: `origin`, where the
//! pointer went down, and `target`, where it is now (or was released). The
//! same [`ShapeType::compute`] call produces both the live preview and the
//! committed vertices, so the two can never disagree.
//!
//! `origin` is a semantic reference point, not a min/max corner. Bounded
//! shapes resolve their extent on each axis through [`anchored_span`], which
//! is the single place the drag-direction rule lives.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

mod bounds;
mod circle;
mod diamond;
mod line;
mod point;
mod rectangle;

pub use bounds::{calculate_bounds, Bounds};
pub use circle::CircleShape;
pub use diamond::DiamondShape;
pub use line::LineShape;
pub use point::PointShape;
pub use rectangle::RectangleShape;

/// A location in world space.
///
/// World coordinates are what objects are stored in; panning the camera never
/// changes them. Snapped input produces integer-valued points, but derived
/// vertices (a diamond's north tip, a line's midpoint) may be fractional.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Ordered vertex list of a shape. Four inline slots cover every shape type.
pub type Vertices = SmallVec<[Point; 4]>;

/// The kind of a drawn object. Fixed for the object's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Single vertex.
    Point,
    /// Two endpoints.
    Line,
    /// Center followed by a point on the circumference.
    Circle,
    /// Four corners: top-left, top-right, bottom-right, bottom-left.
    Rectangle,
    /// Four cardinal points: west, north, east, south.
    Diamond,
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeType::Point => write!(f, "point"),
            ShapeType::Line => write!(f, "line"),
            ShapeType::Circle => write!(f, "circle"),
            ShapeType::Rectangle => write!(f, "rectangle"),
            ShapeType::Diamond => write!(f, "diamond"),
        }
    }
}

/// Result of running a shape kernel on an `(origin, target)` pair.
///
/// A degenerate drag (zero length, zero radius, zero area) is not an error:
/// it yields `is_valid == false` and the caller simply does not commit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeGeometry {
    pub vertices: Vertices,
    pub bounds: Bounds,
    pub is_valid: bool,
}

/// Derived description of a shape used by selection and inspection UIs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeMetadata {
    pub center: Point,
    pub bounds: Bounds,
}

/// Per-shape geometry rules.
///
/// Implementors are stateless; all methods are associated functions over
/// vertex slices so the same code serves previews and stored objects.
pub trait ShapeKernel {
    /// Vertices for a drag from `origin` to `target`.
    fn vertices(origin: Point, target: Point) -> Vertices;

    /// Whether `vertices` describe a non-degenerate shape.
    fn is_valid(vertices: &[Point]) -> bool;

    /// Type-appropriate centroid.
    fn center(vertices: &[Point]) -> Point;

    /// Point-in-shape test; `tolerance` is in world units.
    fn contains_point(vertices: &[Point], p: Point, tolerance: f64) -> bool;

    /// Axis-aligned bounds. Plain min/max over the vertices unless the
    /// vertex encoding does not enclose the shape.
    fn bounds(vertices: &[Point]) -> Bounds {
        calculate_bounds(vertices)
    }

    /// Run the kernel for a drag.
    fn compute(origin: Point, target: Point) -> ShapeGeometry {
        let vertices = Self::vertices(origin, target);
        ShapeGeometry {
            is_valid: Self::is_valid(&vertices),
            bounds: Self::bounds(&vertices),
            vertices,
        }
    }
}

impl ShapeType {
    /// Number of vertices a well-formed object of this type carries.
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeType::Point => 1,
            ShapeType::Line | ShapeType::Circle => 2,
            ShapeType::Rectangle | ShapeType::Diamond => 4,
        }
    }

    /// Compute preview or final geometry for a drag from `origin` to `target`.
    pub fn compute(self, origin: Point, target: Point) -> ShapeGeometry {
        match self {
            ShapeType::Point => PointShape::compute(origin, target),
            ShapeType::Line => LineShape::compute(origin, target),
            ShapeType::Circle => CircleShape::compute(origin, target),
            ShapeType::Rectangle => RectangleShape::compute(origin, target),
            ShapeType::Diamond => DiamondShape::compute(origin, target),
        }
    }

    /// Whether `vertices` describe a non-degenerate shape of this type.
    pub fn is_valid(self, vertices: &[Point]) -> bool {
        if vertices.len() != self.vertex_count() {
            return false;
        }
        match self {
            ShapeType::Point => PointShape::is_valid(vertices),
            ShapeType::Line => LineShape::is_valid(vertices),
            ShapeType::Circle => CircleShape::is_valid(vertices),
            ShapeType::Rectangle => RectangleShape::is_valid(vertices),
            ShapeType::Diamond => DiamondShape::is_valid(vertices),
        }
    }

    /// Bounds used for culling and selection.
    pub fn bounds(self, vertices: &[Point]) -> Bounds {
        match self {
            ShapeType::Circle if vertices.len() >= 2 => CircleShape::bounds(vertices),
            _ => calculate_bounds(vertices),
        }
    }
}

/// Center and bounds for an object of type `kind`.
pub fn calculate_metadata(kind: ShapeType, vertices: &[Point]) -> ShapeMetadata {
    let bounds = kind.bounds(vertices);
    let center = match kind {
        _ if vertices.len() < kind.vertex_count() => bounds.center(),
        ShapeType::Point => PointShape::center(vertices),
        ShapeType::Line => LineShape::center(vertices),
        ShapeType::Circle => CircleShape::center(vertices),
        ShapeType::Rectangle => RectangleShape::center(vertices),
        ShapeType::Diamond => DiamondShape::center(vertices),
    };
    ShapeMetadata { center, bounds }
}

/// Whether `point` hits an object of type `kind`.
///
/// `tolerance` is in world units; callers holding a pixel tolerance divide
/// by the cell size first. Malformed vertex lists never hit.
pub fn hit_test(kind: ShapeType, vertices: &[Point], point: Point, tolerance: f64) -> bool {
    if vertices.len() < kind.vertex_count() {
        return false;
    }
    match kind {
        ShapeType::Point => PointShape::contains_point(vertices, point, tolerance),
        ShapeType::Line => LineShape::contains_point(vertices, point, tolerance),
        ShapeType::Circle => CircleShape::contains_point(vertices, point, tolerance),
        ShapeType::Rectangle => RectangleShape::contains_point(vertices, point, tolerance),
        ShapeType::Diamond => DiamondShape::contains_point(vertices, point, tolerance),
    }
}

/// Start and extent of a span dragged from `origin` to `target` on one axis.
///
/// Dragging forward (`target >= origin`) makes `origin` the leading edge;
/// dragging backward makes it the trailing edge. Rectangle and diamond both
/// resolve their corners through this function.
pub fn anchored_span(origin: f64, target: f64) -> (f64, f64) {
    let extent = (target - origin).abs();
    if target >= origin {
        (origin, extent)
    } else {
        (origin - extent, extent)
    }
}

/// Translate every vertex by `(dx, dy)`.
pub fn translate_vertices(vertices: &[Point], dx: f64, dy: f64) -> Vertices {
    vertices.iter().map(|p| p.translated(dx, dy)).collect()
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let l2 = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    if l2 == 0.0 {
        return p.distance_to(&a);
    }
    let t = ((p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y)) / l2;
    let t = t.clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * (b.x - a.x), a.y + t * (b.y - a.y));
    p.distance_to(&proj)
}
