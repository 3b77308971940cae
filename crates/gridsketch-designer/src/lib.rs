//! # GridSketch Designer
//!
//! Drawing surface core: a user clicks and drags on a grid to create points,
//! lines, circles, rectangles and diamonds, which are stored in world space,
//! culled against a pannable viewport and handed to a renderer every frame.
//!
//! ## Core Components
//!
//! - **Coordinates**: pure conversions between screen pixels, mesh cells and
//!   world space under a camera offset
//! - **Mesh**: owns the cell size and the covering grid; the only path from a
//!   pointer position to a cell
//! - **Geometry kernel**: per-shape vertex generation, bounds, metadata and
//!   hit-testing
//! - **Object store**: committed objects plus sparse style overrides
//! - **Drawing session**: pointer events to preview to committed object
//! - **Viewport sampler**: visible subset of the store
//! - **Selection**: topmost-wins picking and delta-based dragging
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── MeshGrid ── coordinates
//!   ├── DrawingSession ── model (compute)
//!   ├── ObjectStore ── model (bounds)
//!   ├── ViewportSampler
//!   ├── SelectionResolver ── model (hit_test)
//!   └── ChangeBus (per-slice notification)
//!
//! render_plan(visible, selected, store, defaults) -> RenderPlan
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use gridsketch_designer::{DesignerOptions, DesignerState, DrawingMode, PointerEventKind, ScreenPoint};
//!
//! let mut designer = DesignerState::new(DesignerOptions::default()).unwrap();
//! designer.set_mode(DrawingMode::Rectangle);
//!
//! designer.handle_pointer_event(PointerEventKind::Down, ScreenPoint::new(0.0, 0.0));
//! designer.handle_pointer_event(PointerEventKind::Move, ScreenPoint::new(200.0, 100.0));
//! designer.handle_pointer_event(PointerEventKind::Up, ScreenPoint::new(200.0, 100.0));
//!
//! assert_eq!(designer.store().len(), 1);
//! assert_eq!(designer.render_plan().len(), 1);
//! ```

pub mod coordinates;
pub mod designer_state;
pub mod drawing_session;
pub mod mesh;
pub mod model;
pub mod object_store;
pub mod render_plan;
pub mod selection_manager;
pub mod viewport;

pub use coordinates::{
    cell_to_screen, cell_to_world, screen_to_cell, screen_to_world, world_to_cell,
    world_to_screen, CameraOffset, CellPoint, CellSize, ScreenPoint,
};
pub use designer_state::{DesignerOptions, DesignerState, PointerOutcome};
pub use drawing_session::{
    DrawContext, DrawOutcome, DrawingMode, DrawingSession, PointerEventKind, PreviewObject,
    SessionState,
};
pub use mesh::MeshGrid;
pub use model::{
    anchored_span, calculate_bounds, calculate_metadata, hit_test, Bounds, Point, ShapeGeometry,
    ShapeKernel, ShapeMetadata, ShapeType, Vertices,
};
pub use object_store::{GeometricObject, ObjectStore, StoreSnapshot, StyleOverrides};
pub use render_plan::{render_plan, RenderItem, RenderLayer, RenderPlan};
pub use selection_manager::{SelectionOutcome, SelectionResolver};
pub use viewport::{ViewportSampler, ViewportWindow};

pub use gridsketch_core::{
    DesignerError, ObjectId, Style, StyleDefaults, StyleField, StyleValue,
};
