//! Object operations (delete, clear, edit, style overrides) for designer state.

use gridsketch_core::{ChangeEvent, ObjectId, ObjectsChange, StyleField, StyleOverrideChange, StyleValue};

use super::DesignerState;
use crate::model::Point;

impl DesignerState {
    /// Deletes one object and its overrides.
    pub fn delete(&mut self, id: ObjectId) -> bool {
        let had_overrides = self.store.overrides_for(id).is_some();
        if !self.store.delete(id) {
            return false;
        }
        self.selection.on_deleted(id);
        self.bus
            .publish(&ChangeEvent::Objects(ObjectsChange::Deleted { id }));
        if had_overrides {
            self.bus
                .publish(&ChangeEvent::StyleOverrides(StyleOverrideChange::Reset { id }));
        }
        true
    }

    /// Deletes the selected object, returning its id.
    pub fn delete_selected(&mut self) -> Option<ObjectId> {
        let id = self.selection.selected_id()?;
        self.delete(id).then_some(id)
    }

    /// Clears every object and every override in one step. An in-progress
    /// drawing is cancelled first so nothing is committed afterwards.
    pub fn clear_all(&mut self) -> usize {
        self.session.cancel();
        self.selection.clear_selection();
        let count = self.store.clear_all();
        self.bus
            .publish(&ChangeEvent::Objects(ObjectsChange::Cleared { count }));
        self.bus
            .publish(&ChangeEvent::StyleOverrides(StyleOverrideChange::ClearedAll));
        count
    }

    /// Replaces an object's vertices.
    pub fn move_object(&mut self, id: ObjectId, vertices: &[Point]) -> bool {
        let moved = self.store.move_object(id, vertices);
        if moved {
            self.object_updated(id);
        }
        moved
    }

    /// Shifts an object by a world delta.
    pub fn translate(&mut self, id: ObjectId, dx: f64, dy: f64) -> bool {
        let moved = self.store.translate(id, dx, dy);
        if moved {
            self.object_updated(id);
        }
        moved
    }

    /// Resizes a circle without moving its center.
    pub fn set_circle_radius(&mut self, id: ObjectId, radius: f64) -> bool {
        let resized = self.store.set_circle_radius(id, radius);
        if resized {
            self.object_updated(id);
        }
        resized
    }

    pub fn set_visible(&mut self, id: ObjectId, visible: bool) -> bool {
        let changed = self.store.set_visible(id, visible);
        if changed {
            self.bus
                .publish(&ChangeEvent::Objects(ObjectsChange::Updated { id }));
        }
        changed
    }

    pub fn set_style_override(&mut self, id: ObjectId, field: StyleField, value: StyleValue) -> bool {
        let set = self.store.set_style_override(id, field, value);
        if set {
            self.bus
                .publish(&ChangeEvent::StyleOverrides(StyleOverrideChange::Set { id, field }));
        }
        set
    }

    pub fn clear_style_override(&mut self, id: ObjectId, field: StyleField) -> bool {
        let cleared = self.store.clear_style_override(id, field);
        if cleared {
            self.bus.publish(&ChangeEvent::StyleOverrides(
                StyleOverrideChange::Cleared { id, field },
            ));
        }
        cleared
    }

    pub fn reset_style_override(&mut self, id: ObjectId) -> bool {
        let reset = self.store.reset_style_override(id);
        if reset {
            self.bus
                .publish(&ChangeEvent::StyleOverrides(StyleOverrideChange::Reset { id }));
        }
        reset
    }

    /// Drops every override while keeping the objects.
    pub fn reset_all_style_overrides(&mut self) -> usize {
        let count = self.store.reset_all_style_overrides();
        if count > 0 {
            self.bus
                .publish(&ChangeEvent::StyleOverrides(StyleOverrideChange::ClearedAll));
        }
        count
    }
}
