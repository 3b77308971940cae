use gridsketch_core::{ensure_positive, DesignerError, ObjectId};

use crate::coordinates::CellSize;
use crate::model::{hit_test, Point, Vertices};
use crate::object_store::{GeometricObject, ObjectStore};

/// Result of a select-mode pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Nothing changed.
    Unchanged,
    Selected(ObjectId),
    Cleared,
    DragStarted(ObjectId),
    Dragged(ObjectId),
    DragEnded(ObjectId),
    DragCancelled(ObjectId),
}

#[derive(Debug, Clone)]
struct DragState {
    id: ObjectId,
    /// Pointer position the last delta was measured from.
    last: Point,
    /// Vertices before the drag, restored on cancel.
    original: Vertices,
}

/// Single-object selection and drag.
///
/// # Selection Model
///
/// - At most one object is selected, tracked by id.
/// - Picking walks candidates from last-created to first, so the object drawn
///   on top wins.
/// - Dragging applies pointer deltas to the stored vertices through
///   [`ObjectStore::translate`]. Geometry is never recomputed from the pointer
///   position, which keeps circle radii and rectangle sizes exact.
///
/// The tolerance is held in device pixels and converted to world units with
/// the current cell size at pick time.
#[derive(Debug, Clone)]
pub struct SelectionResolver {
    selected_id: Option<ObjectId>,
    drag: Option<DragState>,
    tolerance_px: f64,
}

impl Default for SelectionResolver {
    fn default() -> Self {
        Self {
            selected_id: None,
            drag: None,
            tolerance_px: 6.0,
        }
    }
}

impl SelectionResolver {
    /// Creates a resolver with the given pick tolerance in pixels. Zero means
    /// exact hits only.
    pub fn new(tolerance_px: f64) -> Result<Self, DesignerError> {
        if tolerance_px != 0.0 {
            ensure_positive("hit_tolerance_px", tolerance_px)?;
        }
        Ok(Self {
            tolerance_px,
            ..Self::default()
        })
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selected_id
    }

    pub fn tolerance_px(&self) -> f64 {
        self.tolerance_px
    }

    /// Pixel tolerance expressed in world units.
    pub fn tolerance_in_world(&self, cell_size: CellSize) -> f64 {
        self.tolerance_px / cell_size.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Topmost candidate hit by `point`. `candidates` must be in creation
    /// order.
    pub fn pick(point: Point, candidates: &[&GeometricObject], tolerance: f64) -> Option<ObjectId> {
        candidates
            .iter()
            .rev()
            .find(|object| hit_test(object.kind, &object.vertices, point, tolerance))
            .map(|object| object.id)
    }

    /// Pick and make the hit the selection. A miss clears the selection.
    pub fn select_at(
        &mut self,
        point: Point,
        candidates: &[&GeometricObject],
        cell_size: CellSize,
    ) -> SelectionOutcome {
        let hit = Self::pick(point, candidates, self.tolerance_in_world(cell_size));
        match hit {
            Some(id) => {
                self.selected_id = Some(id);
                SelectionOutcome::Selected(id)
            }
            None if self.selected_id.is_some() => {
                self.selected_id = None;
                SelectionOutcome::Cleared
            }
            None => SelectionOutcome::Unchanged,
        }
    }

    /// Select whatever is under `point` and, if anything is, begin dragging it.
    pub fn drag_start(
        &mut self,
        point: Point,
        candidates: &[&GeometricObject],
        cell_size: CellSize,
    ) -> SelectionOutcome {
        match self.select_at(point, candidates, cell_size) {
            SelectionOutcome::Selected(id) => {
                let original = candidates
                    .iter()
                    .find(|object| object.id == id)
                    .map(|object| object.vertices.clone())
                    .unwrap_or_default();
                self.drag = Some(DragState {
                    id,
                    last: point,
                    original,
                });
                tracing::debug!(%id, "Drag started");
                SelectionOutcome::DragStarted(id)
            }
            other => other,
        }
    }

    /// Move the dragged object by the pointer delta since the last update.
    pub fn drag_update(&mut self, point: Point, store: &mut ObjectStore) -> SelectionOutcome {
        let Some(drag) = self.drag.as_mut() else {
            return SelectionOutcome::Unchanged;
        };
        let (dx, dy) = (point.x - drag.last.x, point.y - drag.last.y);
        if dx == 0.0 && dy == 0.0 {
            return SelectionOutcome::Unchanged;
        }
        let id = drag.id;
        if !store.translate(id, dx, dy) {
            tracing::warn!(%id, "Dragged object disappeared");
            self.drag = None;
            self.selected_id = None;
            return SelectionOutcome::Cleared;
        }
        drag.last = point;
        SelectionOutcome::Dragged(id)
    }

    pub fn drag_end(&mut self) -> SelectionOutcome {
        match self.drag.take() {
            Some(drag) => {
                tracing::debug!(id = %drag.id, "Drag ended");
                SelectionOutcome::DragEnded(drag.id)
            }
            None => SelectionOutcome::Unchanged,
        }
    }

    /// Abort a drag and put the object back where it started.
    pub fn cancel_drag(&mut self, store: &mut ObjectStore) -> SelectionOutcome {
        match self.drag.take() {
            Some(drag) => {
                store.move_object(drag.id, &drag.original);
                SelectionOutcome::DragCancelled(drag.id)
            }
            None => SelectionOutcome::Unchanged,
        }
    }

    pub fn clear_selection(&mut self) -> bool {
        self.drag = None;
        self.selected_id.take().is_some()
    }

    /// Forget `id` if it was selected or being dragged.
    pub fn on_deleted(&mut self, id: ObjectId) {
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
        if self.drag.as_ref().is_some_and(|drag| drag.id == id) {
            self.drag = None;
        }
    }
}
