//! Viewport sampling and culling.
//!
//! The plane is unbounded; the window is the slice of world space currently on
//! screen. Only objects whose bounds overlap the window are handed to the
//! renderer and to selection.

use gridsketch_core::{ensure_positive, DesignerError};
use serde::{Deserialize, Serialize};

use crate::model::{Bounds, Point};
use crate::object_store::{GeometricObject, ObjectStore};

/// Visible rectangle of world space: camera position and size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportWindow {
    pub position: Point,
    pub width: f64,
    pub height: f64,
}

impl ViewportWindow {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position.x, self.position.y, self.width, self.height)
    }
}

impl Default for ViewportWindow {
    fn default() -> Self {
        Self {
            position: Point::default(),
            width: 1.0,
            height: 1.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewportSampler {
    window: ViewportWindow,
    data_bounds: Option<Bounds>,
}

impl ViewportSampler {
    pub fn new(window: ViewportWindow) -> Self {
        Self {
            window,
            data_bounds: None,
        }
    }

    pub fn window(&self) -> ViewportWindow {
        self.window
    }

    /// Move or resize the window. Non-positive sizes are rejected and the
    /// previous window is kept.
    pub fn update_window(
        &mut self,
        position: Point,
        width: f64,
        height: f64,
    ) -> Result<(), DesignerError> {
        ensure_positive("viewport_width", width)?;
        ensure_positive("viewport_height", height)?;
        self.window = ViewportWindow {
            position,
            width,
            height,
        };
        tracing::trace!(x = position.x, y = position.y, width, height, "Viewport window updated");
        Ok(())
    }

    /// Visible objects overlapping the window, in creation order. Touching the
    /// window edge counts as overlapping.
    pub fn visible_objects<'a>(&self, store: &'a ObjectStore) -> Vec<&'a GeometricObject> {
        let window = self.window.bounds();
        store
            .iter()
            .filter(|object| object.is_visible && object.bounds.intersects(&window))
            .collect()
    }

    /// Grow the diagnostic data bounds to include `bounds`.
    pub fn record_bounds(&mut self, bounds: &Bounds) {
        self.data_bounds = Some(match self.data_bounds {
            Some(current) => current.union(bounds),
            None => *bounds,
        });
    }

    /// Union of every bounds ever recorded. Never shrinks, even when objects
    /// are deleted.
    pub fn data_bounds(&self) -> Option<Bounds> {
        self.data_bounds
    }
}
