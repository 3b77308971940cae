//! Drawing session: turns pointer events into committed objects.
//!
//! ```text
//!            down (mode draws)              up, valid
//!   Idle ----------------------> Active ---------------> Idle + object
//!     ^                           |  ^ move (preview)
//!     |      up, degenerate       |  |
//!     +---------------------------+--+
//!     |      cancel
//!     +---------------------------- Active
//! ```
//!
//! Point mode is the exception: pointer-down commits immediately and the
//! session never becomes active.
//!
//! Preview and commit both call [`ShapeType::compute`] and both resolve style
//! from the `StyleDefaults` handed in at that moment, so the committed object
//! is exactly what the last preview showed.

use gridsketch_core::{ObjectId, Style, StyleDefaults};
use serde::{Deserialize, Serialize};

use crate::coordinates::{CameraOffset, ScreenPoint};
use crate::mesh::MeshGrid;
use crate::model::{Point, ShapeGeometry, ShapeType};
use crate::object_store::ObjectStore;

/// Active tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    /// Pointer input selects and drags existing objects.
    #[default]
    Select,
    Point,
    Line,
    Circle,
    Rectangle,
    Diamond,
}

impl DrawingMode {
    /// Shape drawn by this mode, `None` for [`DrawingMode::Select`].
    pub fn shape_type(self) -> Option<ShapeType> {
        match self {
            DrawingMode::Select => None,
            DrawingMode::Point => Some(ShapeType::Point),
            DrawingMode::Line => Some(ShapeType::Line),
            DrawingMode::Circle => Some(ShapeType::Circle),
            DrawingMode::Rectangle => Some(ShapeType::Rectangle),
            DrawingMode::Diamond => Some(ShapeType::Diamond),
        }
    }
}

impl std::fmt::Display for DrawingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.shape_type() {
            Some(kind) => write!(f, "{kind}"),
            None => write!(f, "select"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Escape, focus loss or any other abort.
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active { kind: ShapeType, origin: Point },
}

/// Uncommitted shape shown while dragging. Never stored in the object store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewObject {
    #[serde(rename = "type")]
    pub kind: ShapeType,
    pub geometry: ShapeGeometry,
    pub style: Style,
}

/// What a pointer event did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOutcome {
    /// Nothing to do in the current state or mode.
    Ignored,
    /// A drag began at the snapped origin.
    Started,
    PreviewUpdated,
    Committed(ObjectId),
    /// The drag ended on degenerate geometry; nothing was stored.
    Discarded,
    Cancelled,
}

/// Collaborators a pointer event needs.
pub struct DrawContext<'a> {
    pub mesh: &'a MeshGrid,
    pub offset: CameraOffset,
    pub store: &'a mut ObjectStore,
    pub defaults: &'a StyleDefaults,
}

#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    mode: DrawingMode,
    state: SessionState,
    current: Option<Point>,
}

impl DrawingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    /// Latest snapped pointer position while active.
    pub fn current_point(&self) -> Option<Point> {
        self.current
    }

    /// Switch tools. An in-progress drag is cancelled; returns whether one was.
    pub fn set_mode(&mut self, mode: DrawingMode) -> bool {
        let cancelled = self.cancel() == DrawOutcome::Cancelled;
        if self.mode != mode {
            tracing::debug!(from = %self.mode, to = %mode, "Drawing mode changed");
        }
        self.mode = mode;
        cancelled
    }

    /// Route a raw pointer event. The screen position is snapped through the
    /// mesh before anything else sees it.
    pub fn handle_pointer_event(
        &mut self,
        kind: PointerEventKind,
        screen: ScreenPoint,
        ctx: DrawContext<'_>,
    ) -> DrawOutcome {
        let world = ctx.mesh.world_under_pointer(screen, ctx.offset);
        match kind {
            PointerEventKind::Down => self.pointer_down(world, ctx.store, ctx.defaults),
            PointerEventKind::Move => self.pointer_move(world),
            PointerEventKind::Up => self.pointer_up(world, ctx.store, ctx.defaults),
            PointerEventKind::Cancel => self.cancel(),
        }
    }

    /// Start a drag at a snapped world point. A second down while already
    /// active restarts from the new origin.
    pub fn pointer_down(
        &mut self,
        world: Point,
        store: &mut ObjectStore,
        defaults: &StyleDefaults,
    ) -> DrawOutcome {
        let Some(kind) = self.mode.shape_type() else {
            return DrawOutcome::Ignored;
        };

        if kind == ShapeType::Point {
            self.reset();
            return self.commit(kind, world, world, store, defaults);
        }

        if self.is_active() {
            tracing::debug!("Pointer down while drawing, restarting at new origin");
        }
        self.state = SessionState::Active {
            kind,
            origin: world,
        };
        self.current = Some(world);
        DrawOutcome::Started
    }

    pub fn pointer_move(&mut self, world: Point) -> DrawOutcome {
        if !self.is_active() {
            return DrawOutcome::Ignored;
        }
        self.current = Some(world);
        DrawOutcome::PreviewUpdated
    }

    /// Finish the drag at `world`, committing the shape if it is not
    /// degenerate.
    pub fn pointer_up(
        &mut self,
        world: Point,
        store: &mut ObjectStore,
        defaults: &StyleDefaults,
    ) -> DrawOutcome {
        let SessionState::Active { kind, origin } = self.state else {
            return DrawOutcome::Ignored;
        };
        self.reset();
        self.commit(kind, origin, world, store, defaults)
    }

    /// Abandon an in-progress drag without touching the store.
    pub fn cancel(&mut self) -> DrawOutcome {
        if !self.is_active() {
            return DrawOutcome::Ignored;
        }
        self.reset();
        tracing::debug!("Drawing cancelled");
        DrawOutcome::Cancelled
    }

    /// Live preview styled with `defaults` as they are now.
    pub fn preview(&self, defaults: &StyleDefaults) -> Option<PreviewObject> {
        let SessionState::Active { kind, origin } = self.state else {
            return None;
        };
        let target = self.current.unwrap_or(origin);
        Some(PreviewObject {
            kind,
            geometry: kind.compute(origin, target),
            style: defaults.resolve(),
        })
    }

    fn reset(&mut self) {
        self.state = SessionState::Idle;
        self.current = None;
    }

    fn commit(
        &self,
        kind: ShapeType,
        origin: Point,
        target: Point,
        store: &mut ObjectStore,
        defaults: &StyleDefaults,
    ) -> DrawOutcome {
        let geometry = kind.compute(origin, target);
        if !geometry.is_valid {
            tracing::debug!(%kind, "Discarding degenerate shape");
            return DrawOutcome::Discarded;
        }
        DrawOutcome::Committed(store.create(kind, &geometry.vertices, defaults.resolve()))
    }
}
