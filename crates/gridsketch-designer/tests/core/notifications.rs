//! Per-slice change notification from the designer.

use std::cell::RefCell;
use std::rc::Rc;

use gridsketch_core::{ChangeEvent, ChangeSlice, MeshChange, ObjectsChange, StyleOverrideChange};
use gridsketch_designer::{
    DesignerOptions, DesignerState, DrawingMode, PointerEventKind, ScreenPoint, StyleField,
    StyleValue,
};

fn recorder(state: &mut DesignerState, slice: ChangeSlice) -> Rc<RefCell<Vec<ChangeEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    state.subscribe(slice, move |event| sink.borrow_mut().push(event.clone()));
    log
}

#[test]
fn test_object_events_stay_in_their_slice() {
    let mut state = DesignerState::new(DesignerOptions::default()).unwrap();
    let objects = recorder(&mut state, ChangeSlice::Objects);
    let overrides = recorder(&mut state, ChangeSlice::StyleOverrides);
    let mesh = recorder(&mut state, ChangeSlice::Mesh);

    state.set_mode(DrawingMode::Point);
    state.handle_pointer_event(PointerEventKind::Down, ScreenPoint::new(40.0, 40.0));

    let id = state.store().iter().next().unwrap().id;
    assert_eq!(
        objects.borrow().as_slice(),
        &[ChangeEvent::Objects(ObjectsChange::Created { id })]
    );
    assert!(overrides.borrow().is_empty());
    assert!(mesh.borrow().is_empty());

    state.set_style_override(id, StyleField::StrokeAlpha, StyleValue::Number(0.25));
    assert_eq!(objects.borrow().len(), 1);
    assert_eq!(
        overrides.borrow().as_slice(),
        &[ChangeEvent::StyleOverrides(StyleOverrideChange::Set {
            id,
            field: StyleField::StrokeAlpha
        })]
    );
}

#[test]
fn test_clear_all_notifies_both_slices() {
    let mut state = DesignerState::new(DesignerOptions::default()).unwrap();
    state.set_mode(DrawingMode::Point);
    state.handle_pointer_event(PointerEventKind::Down, ScreenPoint::new(0.0, 0.0));

    let objects = recorder(&mut state, ChangeSlice::Objects);
    let overrides = recorder(&mut state, ChangeSlice::StyleOverrides);
    state.clear_all();

    assert_eq!(
        objects.borrow().as_slice(),
        &[ChangeEvent::Objects(ObjectsChange::Cleared { count: 1 })]
    );
    assert_eq!(
        overrides.borrow().as_slice(),
        &[ChangeEvent::StyleOverrides(StyleOverrideChange::ClearedAll)]
    );
}

#[test]
fn test_mesh_and_viewport_events() {
    let mut state = DesignerState::new(DesignerOptions::default()).unwrap();
    let mesh = recorder(&mut state, ChangeSlice::Mesh);
    let window = recorder(&mut state, ChangeSlice::ViewportWindow);

    state.pan_by_cells(3, 4);
    assert_eq!(window.borrow().len(), 1);
    assert!(mesh.borrow().is_empty());

    state.set_cell_size(40.0).unwrap();
    assert_eq!(
        mesh.borrow().as_slice(),
        &[ChangeEvent::Mesh(MeshChange::Regenerated {
            columns: 20,
            rows: 15,
            cell_size: 40.0
        })]
    );
    assert_eq!(window.borrow().len(), 2);

    // Setting the same offset again is not a change.
    state.pan_by_cells(0, 0);
    assert_eq!(window.borrow().len(), 2);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut state = DesignerState::new(DesignerOptions::default()).unwrap();
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    let sub = state.subscribe(ChangeSlice::ViewportWindow, move |_| *sink.borrow_mut() += 1);

    state.pan_by_cells(1, 0);
    assert!(state.unsubscribe(sub));
    state.pan_by_cells(1, 0);
    assert_eq!(*count.borrow(), 1);
}
