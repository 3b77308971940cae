//! Stored object records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use gridsketch_core::{ObjectId, Style, StyleField, StyleValue};
use serde::{Deserialize, Serialize};

use crate::model::{calculate_metadata, Bounds, Point, ShapeMetadata, ShapeType, Vertices};

/// A committed drawing primitive.
///
/// `id` and `kind` never change after creation. `bounds` is derived from
/// `vertices` and is refreshed by every store operation that touches them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometricObject {
    pub id: ObjectId,
    #[serde(rename = "type")]
    pub kind: ShapeType,
    pub vertices: Vertices,
    /// Style resolved from the global defaults at creation time.
    pub style: Style,
    pub bounds: Bounds,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    /// Strictly increasing creation counter; wall clock time can repeat.
    pub sequence: u64,
}

impl GeometricObject {
    pub fn metadata(&self) -> ShapeMetadata {
        calculate_metadata(self.kind, &self.vertices)
    }

    pub fn center(&self) -> Point {
        self.metadata().center
    }

    pub(crate) fn refresh_bounds(&mut self) {
        self.bounds = self.kind.bounds(&self.vertices);
    }
}

/// Sparse per-object style overrides.
pub type StyleOverrides = BTreeMap<StyleField, StyleValue>;

/// Consistent copy of the store for renderers and inspectors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Objects in creation order.
    pub objects: Vec<GeometricObject>,
    pub overrides: BTreeMap<ObjectId, StyleOverrides>,
}
