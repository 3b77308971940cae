//! Change event definitions.
//!
//! Events are grouped by the state slice they describe. They carry ids and
//! small summaries, not object data; subscribers read the current state back
//! through the owning component.

use serde::{Deserialize, Serialize};

use crate::object_id::ObjectId;
use crate::style::StyleField;

/// Root event enum, one variant per slice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChangeEvent {
    /// Object collection changes
    Objects(ObjectsChange),
    /// Per-object style override changes
    StyleOverrides(StyleOverrideChange),
    /// Camera window changes
    Viewport(ViewportChange),
    /// Grid regeneration
    Mesh(MeshChange),
}

impl ChangeEvent {
    /// Get the slice this event belongs to
    pub fn slice(&self) -> ChangeSlice {
        match self {
            ChangeEvent::Objects(_) => ChangeSlice::Objects,
            ChangeEvent::StyleOverrides(_) => ChangeSlice::StyleOverrides,
            ChangeEvent::Viewport(_) => ChangeSlice::ViewportWindow,
            ChangeEvent::Mesh(_) => ChangeSlice::Mesh,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            ChangeEvent::Objects(e) => e.description(),
            ChangeEvent::StyleOverrides(e) => e.description(),
            ChangeEvent::Viewport(e) => e.description(),
            ChangeEvent::Mesh(e) => e.description(),
        }
    }
}

/// Independently observable slice of the drawing state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeSlice {
    /// The object collection.
    Objects,
    /// The style override map.
    StyleOverrides,
    /// The visible window of the camera.
    ViewportWindow,
    /// The cell grid covering the viewport.
    Mesh,
}

impl std::fmt::Display for ChangeSlice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeSlice::Objects => write!(f, "Objects"),
            ChangeSlice::StyleOverrides => write!(f, "StyleOverrides"),
            ChangeSlice::ViewportWindow => write!(f, "ViewportWindow"),
            ChangeSlice::Mesh => write!(f, "Mesh"),
        }
    }
}

/// Object collection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectsChange {
    /// An object was committed.
    Created {
        /// Id of the new object.
        id: ObjectId,
    },
    /// Geometry or visibility of an object changed.
    Updated {
        /// Id of the changed object.
        id: ObjectId,
    },
    /// An object was deleted.
    Deleted {
        /// Id of the removed object.
        id: ObjectId,
    },
    /// Every object was removed.
    Cleared {
        /// How many objects were removed.
        count: usize,
    },
}

impl ObjectsChange {
    fn description(&self) -> String {
        match self {
            ObjectsChange::Created { id } => format!("Object {} created", id),
            ObjectsChange::Updated { id } => format!("Object {} updated", id),
            ObjectsChange::Deleted { id } => format!("Object {} deleted", id),
            ObjectsChange::Cleared { count } => format!("{} objects cleared", count),
        }
    }
}

/// Style override events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StyleOverrideChange {
    /// One field was overridden.
    Set {
        /// Id of the object.
        id: ObjectId,
        /// The overridden field.
        field: StyleField,
    },
    /// One field override was removed.
    Cleared {
        /// Id of the object.
        id: ObjectId,
        /// The field returned to its default.
        field: StyleField,
    },
    /// Every override of one object was removed.
    Reset {
        /// Id of the object.
        id: ObjectId,
    },
    /// The whole override map was emptied.
    ClearedAll,
}

impl StyleOverrideChange {
    fn description(&self) -> String {
        match self {
            StyleOverrideChange::Set { id, field } => format!("Override {} set on {}", field, id),
            StyleOverrideChange::Cleared { id, field } => {
                format!("Override {} cleared on {}", field, id)
            }
            StyleOverrideChange::Reset { id } => format!("Overrides reset on {}", id),
            StyleOverrideChange::ClearedAll => "All overrides cleared".to_string(),
        }
    }
}

/// Viewport window events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewportChange {
    /// The visible window moved or was resized.
    WindowChanged {
        /// World x of the window's top-left corner.
        x: f64,
        /// World y of the window's top-left corner.
        y: f64,
        /// Window width in cells.
        width: f64,
        /// Window height in cells.
        height: f64,
    },
}

impl ViewportChange {
    fn description(&self) -> String {
        match self {
            ViewportChange::WindowChanged {
                x,
                y,
                width,
                height,
            } => format!("Window at ({}, {}) size {}x{}", x, y, width, height),
        }
    }
}

/// Grid events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MeshChange {
    /// The covering grid was rebuilt; cached render geometry is stale.
    Regenerated {
        /// Number of cell columns.
        columns: u32,
        /// Number of cell rows.
        rows: u32,
        /// Cell edge length in pixels.
        cell_size: f64,
    },
}

impl MeshChange {
    fn description(&self) -> String {
        match self {
            MeshChange::Regenerated {
                columns,
                rows,
                cell_size,
            } => format!("Grid regenerated: {}x{} cells of {}px", columns, rows, cell_size),
        }
    }
}
