//! Render plan: what to draw this frame, derived from store data alone.
//!
//! The plan is recomputed from scratch each frame rather than maintained as
//! a tree of per-object containers; renderers keep their own id to handle
//! index and diff against the plan.

use gridsketch_core::{ObjectId, Style, StyleDefaults};
use serde::Serialize;

use crate::drawing_session::PreviewObject;
use crate::model::{ShapeType, Vertices};
use crate::object_store::{GeometricObject, ObjectStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderLayer {
    Normal,
    /// Drawn above every normal item.
    Selected,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderItem {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: ShapeType,
    pub vertices: Vertices,
    /// Style after override resolution.
    pub style: Style,
    pub layer: RenderLayer,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RenderPlan {
    /// Normal layer first, then the selected layer; creation order within each.
    pub items: Vec<RenderItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<PreviewObject>,
}

impl RenderPlan {
    pub fn selected(&self) -> impl Iterator<Item = &RenderItem> {
        self.items.iter().filter(|item| item.layer == RenderLayer::Selected)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.preview.is_none()
    }
}

/// Build the plan for `objects` (already culled, in creation order).
///
/// Styles are resolved through `store` so overrides apply exactly as they do
/// everywhere else.
pub fn render_plan(
    objects: &[&GeometricObject],
    selected: Option<ObjectId>,
    store: &ObjectStore,
    defaults: &StyleDefaults,
) -> RenderPlan {
    let item = |object: &GeometricObject, layer| RenderItem {
        id: object.id,
        kind: object.kind,
        vertices: object.vertices.clone(),
        style: store.resolved_style(object.id, defaults),
        layer,
    };

    let (on_top, normal): (Vec<&GeometricObject>, Vec<&GeometricObject>) = objects
        .iter()
        .copied()
        .partition(|object| Some(object.id) == selected);

    let items = normal
        .into_iter()
        .map(|object| item(object, RenderLayer::Normal))
        .chain(on_top.into_iter().map(|object| item(object, RenderLayer::Selected)))
        .collect();

    RenderPlan {
        items,
        preview: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use gridsketch_core::{StyleField, StyleValue};

    #[test]
    fn test_selected_item_drawn_last() {
        let mut store = ObjectStore::new();
        let mut ids = Vec::new();
        for i in 0..3 {
            let x = i as f64 * 10.0;
            ids.push(store.create(ShapeType::Point, &[Point::new(x, 0.0)], Style::default()));
        }
        let objects: Vec<_> = store.iter().collect();

        let plan = render_plan(&objects, Some(ids[0]), &store, &StyleDefaults::default());
        let order: Vec<_> = plan.items.iter().map(|item| item.id).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
        assert_eq!(plan.selected().count(), 1);
        assert_eq!(plan.items[2].layer, RenderLayer::Selected);
    }

    #[test]
    fn test_plan_uses_resolved_style() {
        let mut store = ObjectStore::new();
        let id = store.create(ShapeType::Point, &[Point::new(0.0, 0.0)], Style::default());
        store.set_style_override(id, StyleField::StrokeWidth, StyleValue::Number(3.0));
        let objects: Vec<_> = store.iter().collect();

        let plan = render_plan(&objects, None, &store, &StyleDefaults::default());
        assert_eq!(plan.items[0].style.stroke_width, 3.0);
        assert_eq!(plan.items[0].layer, RenderLayer::Normal);
    }

    #[test]
    fn test_empty_plan() {
        let store = ObjectStore::new();
        let plan = render_plan(&[], Some(ObjectId::new()), &store, &StyleDefaults::default());
        assert!(plan.is_empty());
    }
}
