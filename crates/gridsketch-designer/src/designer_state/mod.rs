//! Designer state manager for UI integration.
//!
//! Owns every core component and routes input to them. The surrounding
//! application forwards raw pointer events here and reads back the render
//! plan; it never touches the object store directly.
//!
//! This module is split into submodules:
//! - `shapes`: deletion, clearing, edits and style overrides
//! - `viewport`: camera offset, panning, resize and cell size

mod shapes;
mod viewport;

use gridsketch_core::{
    ChangeBus, ChangeEvent, ChangeSlice, DesignerError, ObjectId, ObjectsChange, Style,
    StyleDefaults, StyleField, StyleValue, SubscriptionId,
};
use serde::{Deserialize, Serialize};

use crate::coordinates::{CameraOffset, ScreenPoint};
use crate::drawing_session::{
    DrawContext, DrawOutcome, DrawingMode, DrawingSession, PointerEventKind, PreviewObject,
};
use crate::mesh::MeshGrid;
use crate::model::Point;
use crate::object_store::{GeometricObject, ObjectStore, StoreSnapshot};
use crate::render_plan::{render_plan, RenderPlan};
use crate::selection_manager::{SelectionOutcome, SelectionResolver};
use crate::viewport::{ViewportSampler, ViewportWindow};

/// Construction parameters for [`DesignerState`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerOptions {
    pub cell_size_px: f64,
    pub viewport_width_px: f64,
    pub viewport_height_px: f64,
    pub hit_tolerance_px: f64,
    pub style_defaults: StyleDefaults,
}

impl Default for DesignerOptions {
    fn default() -> Self {
        Self {
            cell_size_px: 20.0,
            viewport_width_px: 800.0,
            viewport_height_px: 600.0,
            hit_tolerance_px: 6.0,
            style_defaults: StyleDefaults::default(),
        }
    }
}

/// What a pointer event did, depending on the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Draw(DrawOutcome),
    Selection(SelectionOutcome),
}

/// Designer state for UI integration
pub struct DesignerState {
    mesh: MeshGrid,
    store: ObjectStore,
    session: DrawingSession,
    sampler: ViewportSampler,
    selection: SelectionResolver,
    style_defaults: StyleDefaults,
    offset: CameraOffset,
    bus: ChangeBus,
}

impl DesignerState {
    /// Creates a new designer state. Fails if the cell size, viewport size or
    /// tolerance is out of range.
    pub fn new(options: DesignerOptions) -> Result<Self, DesignerError> {
        let mesh = MeshGrid::new(
            options.cell_size_px,
            options.viewport_width_px,
            options.viewport_height_px,
        )?;
        let selection = SelectionResolver::new(options.hit_tolerance_px)?;
        let (columns, rows) = mesh.viewport_in_cells();
        let sampler = ViewportSampler::new(ViewportWindow {
            position: Point::default(),
            width: columns as f64,
            height: rows as f64,
        });

        tracing::info!(
            cell_size = options.cell_size_px,
            columns,
            rows,
            "Designer initialised"
        );

        Ok(Self {
            mesh,
            store: ObjectStore::new(),
            session: DrawingSession::new(),
            sampler,
            selection,
            style_defaults: options.style_defaults,
            offset: CameraOffset::default(),
            bus: ChangeBus::new(),
        })
    }

    pub fn mesh(&self) -> &MeshGrid {
        &self.mesh
    }

    pub fn store(&self) -> &ObjectStore {
        &self.store
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn sampler(&self) -> &ViewportSampler {
        &self.sampler
    }

    pub fn mode(&self) -> DrawingMode {
        self.session.mode()
    }

    /// Sets the drawing mode. Any drag in progress is abandoned.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.session.set_mode(mode);
        if let SelectionOutcome::DragCancelled(id) = self.selection.cancel_drag(&mut self.store) {
            self.object_updated(id);
        }
    }

    pub fn selected_id(&self) -> Option<ObjectId> {
        self.selection.selected_id()
    }

    pub fn clear_selection(&mut self) -> bool {
        self.selection.clear_selection()
    }

    /// Route a raw pointer event to the drawing session or, in select mode,
    /// to selection and drag.
    pub fn handle_pointer_event(&mut self, kind: PointerEventKind, screen: ScreenPoint) -> PointerOutcome {
        if self.session.mode() != DrawingMode::Select {
            return PointerOutcome::Draw(self.handle_draw_event(kind, screen));
        }

        let world = self.mesh.world_under_pointer(screen, self.offset);
        let cell_size = self.mesh.cell_size();
        let outcome = match kind {
            PointerEventKind::Down => {
                let candidates = self.sampler.visible_objects(&self.store);
                self.selection.drag_start(world, &candidates, cell_size)
            }
            PointerEventKind::Move => self.selection.drag_update(world, &mut self.store),
            PointerEventKind::Up => self.selection.drag_end(),
            PointerEventKind::Cancel => self.selection.cancel_drag(&mut self.store),
        };

        match outcome {
            SelectionOutcome::Dragged(id) | SelectionOutcome::DragCancelled(id) => {
                self.object_updated(id)
            }
            _ => {}
        }
        PointerOutcome::Selection(outcome)
    }

    fn handle_draw_event(&mut self, kind: PointerEventKind, screen: ScreenPoint) -> DrawOutcome {
        let outcome = self.session.handle_pointer_event(
            kind,
            screen,
            DrawContext {
                mesh: &self.mesh,
                offset: self.offset,
                store: &mut self.store,
                defaults: &self.style_defaults,
            },
        );
        if let DrawOutcome::Committed(id) = outcome {
            self.record_bounds(id);
            self.bus
                .publish(&ChangeEvent::Objects(ObjectsChange::Created { id }));
        }
        outcome
    }

    /// Abort whatever the pointer is doing: an in-progress drawing or a drag.
    pub fn cancel(&mut self) {
        self.session.cancel();
        if let SelectionOutcome::DragCancelled(id) = self.selection.cancel_drag(&mut self.store) {
            self.object_updated(id);
        }
    }

    pub fn preview(&self) -> Option<PreviewObject> {
        self.session.preview(&self.style_defaults)
    }

    pub fn visible_objects(&self) -> Vec<&GeometricObject> {
        self.sampler.visible_objects(&self.store)
    }

    /// Topmost visible object under a world point, using the configured
    /// pixel tolerance.
    pub fn pick(&self, world: Point) -> Option<ObjectId> {
        let tolerance = self.selection.tolerance_in_world(self.mesh.cell_size());
        SelectionResolver::pick(world, &self.visible_objects(), tolerance)
    }

    pub fn resolve_style(&self, id: ObjectId, field: StyleField) -> StyleValue {
        self.store.resolve_style(id, field, &self.style_defaults)
    }

    pub fn resolved_style(&self, id: ObjectId) -> Style {
        self.store.resolved_style(id, &self.style_defaults)
    }

    pub fn style_defaults(&self) -> &StyleDefaults {
        &self.style_defaults
    }

    /// Change a global default. Objects already drawn keep their style; the
    /// live preview picks the change up immediately.
    pub fn set_style_default(&mut self, field: StyleField, value: StyleValue) -> bool {
        self.style_defaults.set(field, value)
    }

    pub fn clear_style_default(&mut self, field: StyleField) {
        self.style_defaults.clear(field);
    }

    /// Everything the renderer needs for one frame.
    pub fn render_plan(&self) -> RenderPlan {
        let visible = self.visible_objects();
        let mut plan = render_plan(
            &visible,
            self.selection.selected_id(),
            &self.store,
            &self.style_defaults,
        );
        plan.preview = self.preview();
        plan
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.store.snapshot()
    }

    pub fn subscribe<F>(&mut self, slice: ChangeSlice, handler: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + 'static,
    {
        self.bus.subscribe(slice, handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    fn record_bounds(&mut self, id: ObjectId) {
        if let Some(object) = self.store.get(id) {
            self.sampler.record_bounds(&object.bounds);
        }
    }

    fn object_updated(&mut self, id: ObjectId) {
        self.record_bounds(id);
        self.bus
            .publish(&ChangeEvent::Objects(ObjectsChange::Updated { id }));
    }
}

impl std::fmt::Debug for DesignerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignerState")
            .field("mode", &self.session.mode())
            .field("objects", &self.store.len())
            .field("offset", &self.offset)
            .field("selected", &self.selection.selected_id())
            .finish()
    }
}
