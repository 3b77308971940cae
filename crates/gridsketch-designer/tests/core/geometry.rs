//! Geometry kernel properties.

use gridsketch_designer::{ObjectStore, Point, ShapeType, Style};
use proptest::prelude::*;

#[test]
fn test_rectangle_direction_invariance() {
    let origin = Point::new(10.0, 10.0);
    for target in [
        Point::new(20.0, 15.0),
        Point::new(5.0, 8.0),
        Point::new(15.0, 7.0),
        Point::new(8.0, 12.0),
    ] {
        let g = ShapeType::Rectangle.compute(origin, target);
        assert!(g.is_valid);
        assert_eq!(g.bounds.min_x, origin.x.min(target.x));
        assert_eq!(g.bounds.min_y, origin.y.min(target.y));
        assert_eq!(g.bounds.max_x, origin.x.max(target.x));
        assert_eq!(g.bounds.max_y, origin.y.max(target.y));
    }
}

#[test]
fn test_rectangle_vertex_order_is_canonical() {
    let g = ShapeType::Rectangle.compute(Point::new(10.0, 10.0), Point::new(5.0, 8.0));
    let v = &g.vertices;
    assert!(v[0].x < v[1].x && v[0].y == v[1].y, "top edge left to right");
    assert!(v[1].x == v[2].x && v[1].y < v[2].y, "right edge top to bottom");
    assert!(v[3].x == v[0].x && v[3].y == v[2].y, "bottom-left");
}

#[test]
fn test_degenerate_shapes_are_not_valid() {
    let p = Point::new(4.0, 4.0);
    assert!(ShapeType::Point.compute(p, p).is_valid);
    for kind in [ShapeType::Line, ShapeType::Circle, ShapeType::Rectangle, ShapeType::Diamond] {
        assert!(!kind.compute(p, p).is_valid, "{kind} should be degenerate");
    }
    assert!(!ShapeType::Rectangle.compute(p, Point::new(9.0, 4.0)).is_valid);
    assert!(ShapeType::Diamond.compute(p, Point::new(9.0, 4.0)).is_valid);
}

proptest! {
    #[test]
    fn prop_circle_radius_survives_translate(
        cx in -1_000i32..1_000,
        cy in -1_000i32..1_000,
        dx in -1_000i32..1_000,
        dy in -1_000i32..1_000,
    ) {
        let mut store = ObjectStore::new();
        let center = Point::new(cx as f64, cy as f64);
        let g = ShapeType::Circle.compute(center, Point::new(cx as f64 + 3.0, cy as f64 + 4.0));
        let id = store.create(ShapeType::Circle, &g.vertices, Style::default());

        prop_assert!(store.translate(id, dx as f64, dy as f64));
        let v = &store.get(id).unwrap().vertices;
        prop_assert_eq!(v[0].distance_to(&v[1]), 5.0);
    }

    #[test]
    fn prop_bounds_match_min_max(
        ox in -500i32..500, oy in -500i32..500,
        tx in -500i32..500, ty in -500i32..500,
    ) {
        let o = Point::new(ox as f64, oy as f64);
        let t = Point::new(tx as f64, ty as f64);
        let g = ShapeType::Rectangle.compute(o, t);
        prop_assert_eq!(g.bounds.min_x, o.x.min(t.x));
        prop_assert_eq!(g.bounds.max_y, o.y.max(t.y));
        prop_assert_eq!(g.is_valid, ox != tx && oy != ty);
    }
}
