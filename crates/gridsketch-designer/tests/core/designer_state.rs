//! Designer state manager integration tests

use gridsketch_designer::{
    CameraOffset, DesignerError, DesignerOptions, DesignerState, DrawOutcome, DrawingMode, Point,
    PointerEventKind, PointerOutcome, RenderLayer, ScreenPoint, SelectionOutcome, ShapeType,
    StyleField, StyleValue,
};

fn designer() -> DesignerState {
    DesignerState::new(DesignerOptions {
        cell_size_px: 10.0,
        viewport_width_px: 400.0,
        viewport_height_px: 300.0,
        hit_tolerance_px: 5.0,
        ..Default::default()
    })
    .unwrap()
}

fn event(designer: &mut DesignerState, kind: PointerEventKind, x: f64, y: f64) -> PointerOutcome {
    designer.handle_pointer_event(kind, ScreenPoint::new(x, y))
}

#[test]
fn test_invalid_options_rejected() {
    let err = DesignerState::new(DesignerOptions {
        cell_size_px: 0.0,
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, DesignerError::InvalidConfiguration { .. }));

    assert!(DesignerState::new(DesignerOptions {
        viewport_height_px: -10.0,
        ..Default::default()
    })
    .is_err());
}

#[test]
fn test_complete_workflow() {
    let mut state = designer();

    state.set_mode(DrawingMode::Rectangle);
    event(&mut state, PointerEventKind::Down, 10.0, 10.0);
    event(&mut state, PointerEventKind::Move, 60.0, 40.0);
    let outcome = event(&mut state, PointerEventKind::Up, 60.0, 40.0);
    let PointerOutcome::Draw(DrawOutcome::Committed(rect)) = outcome else {
        panic!("rectangle should commit, got {outcome:?}");
    };

    state.set_mode(DrawingMode::Line);
    event(&mut state, PointerEventKind::Down, 0.0, 100.0);
    event(&mut state, PointerEventKind::Up, 100.0, 100.0);
    assert_eq!(state.store().len(), 2);

    // Select and drag the rectangle by two cells right.
    state.set_mode(DrawingMode::Select);
    let outcome = event(&mut state, PointerEventKind::Down, 30.0, 20.0);
    assert_eq!(outcome, PointerOutcome::Selection(SelectionOutcome::DragStarted(rect)));
    event(&mut state, PointerEventKind::Move, 50.0, 20.0);
    event(&mut state, PointerEventKind::Up, 50.0, 20.0);

    let moved = state.store().get(rect).unwrap();
    assert_eq!(moved.bounds.min_x, 3.0);
    assert_eq!(moved.bounds.width, 5.0);
    assert_eq!(state.selected_id(), Some(rect));

    let plan = state.render_plan();
    assert_eq!(plan.items.last().unwrap().id, rect);
    assert_eq!(plan.items.last().unwrap().layer, RenderLayer::Selected);

    assert_eq!(state.delete_selected(), Some(rect));
    assert_eq!(state.selected_id(), None);
    assert_eq!(state.store().len(), 1);
}

#[test]
fn test_cancel_mid_draw_leaves_store_untouched() {
    let mut state = designer();
    state.set_mode(DrawingMode::Diamond);
    event(&mut state, PointerEventKind::Down, 0.0, 0.0);
    event(&mut state, PointerEventKind::Move, 80.0, 0.0);
    assert!(state.preview().is_some());

    let outcome = event(&mut state, PointerEventKind::Cancel, 80.0, 0.0);
    assert_eq!(outcome, PointerOutcome::Draw(DrawOutcome::Cancelled));
    assert!(state.preview().is_none());
    assert!(state.store().is_empty());
}

#[test]
fn test_cancel_drag_restores_position() {
    let mut state = designer();
    state.set_mode(DrawingMode::Circle);
    event(&mut state, PointerEventKind::Down, 100.0, 100.0);
    event(&mut state, PointerEventKind::Up, 130.0, 100.0);
    let id = state.store().iter().next().unwrap().id;
    let before = state.store().get(id).unwrap().vertices.clone();

    state.set_mode(DrawingMode::Select);
    event(&mut state, PointerEventKind::Down, 100.0, 100.0);
    event(&mut state, PointerEventKind::Move, 200.0, 150.0);
    assert_ne!(state.store().get(id).unwrap().vertices, before);

    state.cancel();
    assert_eq!(state.store().get(id).unwrap().vertices, before);
}

#[test]
fn test_drawing_under_camera_offset() {
    let mut state = designer();
    state.set_camera_offset(CameraOffset::new(-50, 7));
    state.set_mode(DrawingMode::Point);
    event(&mut state, PointerEventKind::Down, 15.0, 25.0);

    let point = state.store().iter().next().unwrap();
    assert_eq!(point.kind, ShapeType::Point);
    assert_eq!(point.vertices[0], Point::new(-49.0, 9.0));
    assert_eq!(state.visible_objects().len(), 1);
    assert_eq!(state.pick(Point::new(-49.0, 9.0)), Some(point.id));
}

#[test]
fn test_clear_all_during_draw() {
    let mut state = designer();
    state.set_mode(DrawingMode::Point);
    event(&mut state, PointerEventKind::Down, 15.0, 25.0);
    let id = state.store().iter().next().unwrap().id;
    state.set_style_override(id, StyleField::Color, StyleValue::Color(0xabcdef));

    state.set_mode(DrawingMode::Line);
    event(&mut state, PointerEventKind::Down, 0.0, 0.0);
    assert_eq!(state.clear_all(), 1);
    assert!(!state.session().is_active());

    // The release after the clear must not commit a leftover line.
    let outcome = event(&mut state, PointerEventKind::Up, 90.0, 0.0);
    assert_eq!(outcome, PointerOutcome::Draw(DrawOutcome::Ignored));
    assert!(state.store().is_empty());
    assert_eq!(state.store().override_count(), 0);
}

#[test]
fn test_cell_size_change_regenerates_mesh() {
    let mut state = designer();
    assert!(state.take_mesh_dirty());
    assert!(!state.take_mesh_dirty());

    state.set_cell_size(20.0).unwrap();
    assert!(state.take_mesh_dirty());
    assert_eq!(state.mesh().viewport_in_cells(), (20, 15));
    assert_eq!(state.sampler().window().width, 20.0);

    assert!(state.set_cell_size(-1.0).is_err());
    assert_eq!(state.mesh().cell_size().get(), 20.0);

    state.resize_viewport(1000.0, 300.0).unwrap();
    assert_eq!(state.mesh().viewport_in_cells(), (50, 15));
}

#[test]
fn test_circle_radius_edit_is_separate_from_move() {
    let mut state = designer();
    state.set_mode(DrawingMode::Circle);
    event(&mut state, PointerEventKind::Down, 100.0, 100.0);
    event(&mut state, PointerEventKind::Up, 130.0, 140.0);
    let id = state.store().iter().next().unwrap().id;

    assert!(state.translate(id, 10.0, -4.0));
    let c = state.store().get(id).unwrap();
    assert_eq!(c.vertices[0], Point::new(20.0, 6.0));
    assert_eq!(c.vertices[0].distance_to(&c.vertices[1]), 5.0);

    assert!(state.set_circle_radius(id, 10.0));
    let c = state.store().get(id).unwrap();
    assert_eq!(c.center(), Point::new(20.0, 6.0));
    assert_eq!(c.vertices[1], Point::new(26.0, 14.0));
}
