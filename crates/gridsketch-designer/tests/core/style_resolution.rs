//! Style precedence across overrides, committed defaults and built-ins.

use gridsketch_designer::{
    DesignerOptions, DesignerState, DrawingMode, ObjectStore, Point, PointerEventKind,
    ScreenPoint, ShapeType, StyleDefaults, StyleField, StyleValue,
};

fn blue_defaults() -> StyleDefaults {
    StyleDefaults {
        color: Some(0x0066cc),
        ..Default::default()
    }
}

#[test]
fn test_override_then_clear_falls_back_to_default() {
    let mut store = ObjectStore::new();
    let g = ShapeType::Line.compute(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
    let defaults = blue_defaults();
    let id = store.create(ShapeType::Line, &g.vertices, defaults.resolve());

    store.set_style_override(id, StyleField::Color, StyleValue::Color(0xff0000));
    assert_eq!(
        store.resolve_style(id, StyleField::Color, &defaults),
        StyleValue::Color(0xff0000)
    );

    store.clear_style_override(id, StyleField::Color);
    assert_eq!(
        store.resolve_style(id, StyleField::Color, &defaults),
        StyleValue::Color(0x0066cc)
    );
    // Unset default fields fall through to the built-ins.
    assert_eq!(
        store.resolve_style(id, StyleField::StrokeWidth, &defaults),
        StyleValue::Number(1.0)
    );
}

#[test]
fn test_clear_all_drops_every_override() {
    let mut store = ObjectStore::new();
    let mut ids = Vec::new();
    for i in 0..3 {
        let p = Point::new(i as f64, 0.0);
        let id = store.create(ShapeType::Point, &[p], blue_defaults().resolve());
        store.set_style_override(id, StyleField::Color, StyleValue::Color(0xff0000));
        ids.push(id);
    }

    assert_eq!(store.clear_all(), 3);
    assert!(store.is_empty());
    assert_eq!(store.override_count(), 0);
    for id in ids {
        assert!(store.style_override(id, StyleField::Color).is_none());
        assert_eq!(
            store.resolve_style(id, StyleField::Color, &blue_defaults()),
            StyleValue::Color(0x0066cc)
        );
    }
}

fn drag(designer: &mut DesignerState, from: (f64, f64), to: (f64, f64)) {
    designer.handle_pointer_event(PointerEventKind::Down, ScreenPoint::new(from.0, from.1));
    designer.handle_pointer_event(PointerEventKind::Move, ScreenPoint::new(to.0, to.1));
    designer.handle_pointer_event(PointerEventKind::Up, ScreenPoint::new(to.0, to.1));
}

#[test]
fn test_changing_default_only_affects_new_objects() {
    let mut designer = DesignerState::new(DesignerOptions {
        cell_size_px: 1.0,
        style_defaults: blue_defaults(),
        ..Default::default()
    })
    .unwrap();
    designer.set_mode(DrawingMode::Rectangle);

    drag(&mut designer, (0.0, 0.0), (10.0, 10.0));
    designer.set_style_default(StyleField::Color, StyleValue::Color(0x00ff00));
    drag(&mut designer, (20.0, 20.0), (30.0, 30.0));

    let objects: Vec<_> = designer.store().iter().collect();
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].bounds.width, 10.0);
    assert_eq!(objects[0].bounds.height, 10.0);
    assert_eq!(objects[0].style.color, 0x0066cc);
    assert_eq!(objects[1].style.color, 0x00ff00);
    assert_eq!(
        designer.resolve_style(objects[0].id, StyleField::Color),
        StyleValue::Color(0x0066cc)
    );
}

#[test]
fn test_cleared_ids_resolve_to_current_default() {
    let mut designer = DesignerState::new(DesignerOptions {
        cell_size_px: 1.0,
        style_defaults: blue_defaults(),
        ..Default::default()
    })
    .unwrap();
    designer.set_mode(DrawingMode::Rectangle);
    drag(&mut designer, (0.0, 0.0), (10.0, 10.0));
    let id = designer.store().iter().next().unwrap().id;
    assert!(designer.set_style_override(id, StyleField::Color, StyleValue::Color(0xff0000)));

    designer.clear_all();
    assert!(designer.store().is_empty());
    assert_eq!(
        designer.resolve_style(id, StyleField::Color),
        StyleValue::Color(0x0066cc)
    );

    designer.clear_style_default(StyleField::Color);
    assert_eq!(
        designer.resolve_style(id, StyleField::Color),
        StyleValue::Color(0x000000)
    );
    assert_eq!(designer.resolved_style(id).stroke_width, 1.0);
}

#[test]
fn test_preview_and_plan_share_resolution() {
    let mut designer = DesignerState::new(DesignerOptions {
        cell_size_px: 1.0,
        style_defaults: blue_defaults(),
        ..Default::default()
    })
    .unwrap();
    designer.set_mode(DrawingMode::Circle);
    drag(&mut designer, (50.0, 50.0), (53.0, 54.0));
    let id = designer.store().iter().next().unwrap().id;
    designer.set_style_override(id, StyleField::StrokeWidth, StyleValue::Number(4.0));

    designer.handle_pointer_event(PointerEventKind::Down, ScreenPoint::new(5.0, 5.0));
    designer.handle_pointer_event(PointerEventKind::Move, ScreenPoint::new(9.0, 5.0));
    designer.set_style_default(StyleField::Color, StyleValue::Color(0x123456));

    let plan = designer.render_plan();
    assert_eq!(plan.items[0].style.stroke_width, 4.0);
    assert_eq!(plan.items[0].style.color, 0x0066cc);
    let preview = plan.preview.expect("drawing in progress");
    assert_eq!(preview.style.color, 0x123456);
    assert_eq!(designer.store().len(), 1);
}

#[test]
fn test_wrong_type_default_rejected() {
    let mut designer = DesignerState::new(DesignerOptions::default()).unwrap();
    assert!(!designer.set_style_default(StyleField::Color, StyleValue::Number(3.0)));
    assert!(designer.set_style_default(StyleField::FillAlpha, StyleValue::Number(0.5)));
    assert_eq!(designer.style_defaults().fill_alpha, Some(0.5));
}
