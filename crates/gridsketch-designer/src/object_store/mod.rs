//! Object store: the authoritative collection of drawn objects and their
//! per-object style overrides.
//!
//! Nothing outside the store mutates vertices or styles. Operations that name
//! a missing id are no-ops that return `false`; an editing UI may still hold
//! an id that was deleted a frame ago.
//!
//! # Style resolution
//!
//! [`ObjectStore::resolve_style`] is the single resolution path for every
//! consumer:
//! 1. the override for `(id, field)`, if set;
//! 2. otherwise the object's committed style (the global defaults in effect
//!    when it was created);
//! 3. otherwise, for an id the store no longer holds, the current global
//!    default, falling back to the built-in constant for the field.

mod types;

pub use types::{GeometricObject, StoreSnapshot, StyleOverrides};

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use gridsketch_core::{ObjectId, Style, StyleDefaults, StyleField, StyleValue};

use crate::model::{translate_vertices, CircleShape, Point, ShapeType};

#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: HashMap<ObjectId, GeometricObject>,
    draw_order: Vec<ObjectId>,
    overrides: HashMap<ObjectId, StyleOverrides>,
    next_sequence: u64,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new object and return its id.
    ///
    /// Bounds are computed from `vertices`. Validity is the caller's concern;
    /// the drawing session never commits degenerate geometry.
    pub fn create(&mut self, kind: ShapeType, vertices: &[Point], style: Style) -> ObjectId {
        let id = ObjectId::new();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        if vertices.len() != kind.vertex_count() {
            tracing::warn!(
                %kind,
                expected = kind.vertex_count(),
                got = vertices.len(),
                "Creating object with unexpected vertex count"
            );
        }

        let mut object = GeometricObject {
            id,
            kind,
            vertices: vertices.iter().copied().collect(),
            style,
            bounds: Default::default(),
            is_visible: true,
            created_at: Utc::now(),
            sequence,
        };
        object.refresh_bounds();

        self.objects.insert(id, object);
        self.draw_order.push(id);
        tracing::debug!(%id, %kind, sequence, "Object created");
        id
    }

    /// Remove an object together with its overrides.
    pub fn delete(&mut self, id: ObjectId) -> bool {
        if self.objects.remove(&id).is_none() {
            return false;
        }
        self.draw_order.retain(|&other| other != id);
        self.overrides.remove(&id);
        tracing::debug!(%id, "Object deleted");
        true
    }

    /// Remove every object and every override. Returns how many objects were
    /// removed.
    pub fn clear_all(&mut self) -> usize {
        let count = self.objects.len();
        self.objects.clear();
        self.draw_order.clear();
        self.overrides.clear();
        tracing::info!(count, "Cleared all objects");
        count
    }

    /// Replace an object's vertices and recompute its bounds.
    pub fn move_object(&mut self, id: ObjectId, vertices: &[Point]) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        object.vertices = vertices.iter().copied().collect();
        object.refresh_bounds();
        true
    }

    /// Shift every vertex by `(dx, dy)`. Shape proportions are untouched, so a
    /// circle keeps its radius exactly.
    pub fn translate(&mut self, id: ObjectId, dx: f64, dy: f64) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        object.vertices = translate_vertices(&object.vertices, dx, dy);
        object.refresh_bounds();
        true
    }

    /// Resize a circle in place, keeping its center.
    ///
    /// Returns `false` for unknown ids, non-circles and radii that are not
    /// finite and positive.
    pub fn set_circle_radius(&mut self, id: ObjectId, radius: f64) -> bool {
        let Some(object) = self.objects.get_mut(&id) else {
            return false;
        };
        if object.kind != ShapeType::Circle || object.vertices.len() != 2 {
            tracing::warn!(%id, kind = %object.kind, "Radius edit on non-circle ignored");
            return false;
        }
        if !(radius.is_finite() && radius > 0.0) {
            tracing::warn!(%id, radius, "Rejected circle radius");
            return false;
        }
        object.vertices = CircleShape::with_radius(&object.vertices, radius);
        object.refresh_bounds();
        true
    }

    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        match self.objects.get_mut(&id) {
            Some(object) => {
                object.is_visible = visible;
                true
            }
            None => false,
        }
    }

    /// Override one style field of one object.
    ///
    /// Returns `false` if the object does not exist or the value type does not
    /// fit the field.
    pub fn set_style_override(&mut self, id: ObjectId, field: StyleField, value: StyleValue) -> bool {
        if !self.objects.contains_key(&id) {
            return false;
        }
        if !field.accepts(value) {
            tracing::warn!(%id, %field, ?value, "Rejected style override of wrong type");
            return false;
        }
        self.overrides.entry(id).or_default().insert(field, value);
        true
    }

    /// Drop one override. Returns whether an override was present.
    pub fn clear_style_override(&mut self, id: ObjectId, field: StyleField) -> bool {
        let Some(fields) = self.overrides.get_mut(&id) else {
            return false;
        };
        let removed = fields.remove(&field).is_some();
        if fields.is_empty() {
            self.overrides.remove(&id);
        }
        removed
    }

    /// Drop every override of one object.
    pub fn reset_style_override(&mut self, id: ObjectId) -> bool {
        self.overrides.remove(&id).is_some()
    }

    /// Drop every override of every object. Returns how many objects had
    /// overrides.
    pub fn reset_all_style_overrides(&mut self) -> usize {
        let count = self.overrides.len();
        self.overrides.clear();
        count
    }

    pub fn style_override(&self, id: ObjectId, field: StyleField) -> Option<StyleValue> {
        self.overrides.get(&id)?.get(&field).copied()
    }

    pub fn overrides_for(&self, id: ObjectId) -> Option<&StyleOverrides> {
        self.overrides.get(&id)
    }

    /// Effective value of one style field.
    pub fn resolve_style(
        &self,
        id: ObjectId,
        field: StyleField,
        defaults: &StyleDefaults,
    ) -> StyleValue {
        if let Some(value) = self.style_override(id, field) {
            return value;
        }
        match self.objects.get(&id) {
            Some(object) => object.style.get(field),
            None => defaults.resolve_field(field),
        }
    }

    /// Every field resolved through [`ObjectStore::resolve_style`].
    pub fn resolved_style(&self, id: ObjectId, defaults: &StyleDefaults) -> Style {
        let mut style = Style::default();
        for field in StyleField::ALL {
            style.set(field, self.resolve_style(id, field, defaults));
        }
        style
    }

    pub fn get(&self, id: ObjectId) -> Option<&GeometricObject> {
        self.objects.get(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Objects in creation order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &GeometricObject> + '_ {
        self.draw_order.iter().filter_map(|id| self.objects.get(id))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects carrying at least one override.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            objects: self.iter().cloned().collect(),
            overrides: self
                .overrides
                .iter()
                .map(|(&id, fields)| (id, fields.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}
