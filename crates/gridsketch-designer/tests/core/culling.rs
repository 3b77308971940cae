//! Viewport culling under panning.

use gridsketch_designer::{
    DesignerOptions, DesignerState, ObjectStore, Point, ShapeType, Style, ViewportSampler,
};

#[test]
fn test_object_outside_window_is_culled() {
    let mut store = ObjectStore::new();
    let g = ShapeType::Rectangle.compute(Point::new(20.0, 20.0), Point::new(25.0, 25.0));
    let outside = store.create(ShapeType::Rectangle, &g.vertices, Style::default());
    let g = ShapeType::Line.compute(Point::new(-5.0, 5.0), Point::new(1.0, 5.0));
    let straddling = store.create(ShapeType::Line, &g.vertices, Style::default());

    let mut sampler = ViewportSampler::default();
    sampler.update_window(Point::new(0.0, 0.0), 10.0, 10.0).unwrap();
    let visible: Vec<_> = sampler.visible_objects(&store).iter().map(|o| o.id).collect();

    assert!(!visible.contains(&outside));
    assert!(visible.contains(&straddling));
}

#[test]
fn test_circle_culled_by_disc_not_vertices() {
    let mut store = ObjectStore::new();
    // Both stored vertices are left of the window but the disc reaches into it.
    let g = ShapeType::Circle.compute(Point::new(-3.0, 5.0), Point::new(-3.0, 1.0));
    let id = store.create(ShapeType::Circle, &g.vertices, Style::default());

    let mut sampler = ViewportSampler::default();
    sampler.update_window(Point::new(0.0, 0.0), 10.0, 10.0).unwrap();
    assert_eq!(sampler.visible_objects(&store)[0].id, id);
}

#[test]
fn test_panning_follows_camera() {
    let mut designer = DesignerState::new(DesignerOptions {
        cell_size_px: 10.0,
        viewport_width_px: 100.0,
        viewport_height_px: 100.0,
        ..Default::default()
    })
    .unwrap();
    let id = {
        designer.set_mode(gridsketch_designer::DrawingMode::Point);
        designer.handle_pointer_event(
            gridsketch_designer::PointerEventKind::Down,
            gridsketch_designer::ScreenPoint::new(55.0, 55.0),
        );
        designer.store().iter().next().unwrap().id
    };
    assert_eq!(designer.visible_objects().len(), 1);

    designer.pan_by_cells(20, 0);
    assert!(designer.visible_objects().is_empty());
    assert_eq!(designer.sampler().window().position, Point::new(20.0, 0.0));

    designer.pan_by_cells(-15, 0);
    assert_eq!(designer.visible_objects()[0].id, id);
    // Panning never moves stored geometry.
    assert_eq!(designer.store().get(id).unwrap().vertices[0], Point::new(5.0, 5.0));
}

#[test]
fn test_data_bounds_grow_with_creations() {
    let mut designer = DesignerState::new(DesignerOptions::default()).unwrap();
    designer.set_mode(gridsketch_designer::DrawingMode::Point);
    for (x, y) in [(20.0, 20.0), (200.0, 120.0)] {
        designer.handle_pointer_event(
            gridsketch_designer::PointerEventKind::Down,
            gridsketch_designer::ScreenPoint::new(x, y),
        );
    }
    let bounds = designer.sampler().data_bounds().unwrap();
    assert_eq!((bounds.min_x, bounds.max_x), (1.0, 10.0));
    assert_eq!((bounds.min_y, bounds.max_y), (1.0, 6.0));

    designer.clear_all();
    assert_eq!(designer.sampler().data_bounds(), Some(bounds));
}
