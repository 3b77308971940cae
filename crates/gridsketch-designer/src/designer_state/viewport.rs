//! Camera and grid controls for designer state.

use gridsketch_core::{ChangeEvent, DesignerError, MeshChange, ViewportChange};

use super::DesignerState;
use crate::coordinates::CameraOffset;
use crate::model::Point;

impl DesignerState {
    pub fn camera_offset(&self) -> CameraOffset {
        self.offset
    }

    /// Moves the camera. Stored geometry stays where it is in world space.
    pub fn set_camera_offset(&mut self, offset: CameraOffset) {
        if self.offset == offset {
            return;
        }
        self.offset = offset;
        self.sync_window();
    }

    /// Pans the camera by whole cells.
    pub fn pan_by_cells(&mut self, dx: i64, dy: i64) {
        self.set_camera_offset(self.offset.panned(dx, dy));
    }

    /// Resizes the canvas and regenerates the mesh.
    pub fn resize_viewport(&mut self, width_px: f64, height_px: f64) -> Result<(), DesignerError> {
        self.mesh.resize(width_px, height_px)?;
        self.mesh_regenerated();
        Ok(())
    }

    /// Changes the cell size and regenerates the mesh.
    pub fn set_cell_size(&mut self, cell_size_px: f64) -> Result<(), DesignerError> {
        self.mesh.set_cell_size(cell_size_px)?;
        self.mesh_regenerated();
        Ok(())
    }

    /// Consumes the mesh regeneration flag for the renderer.
    pub fn take_mesh_dirty(&mut self) -> bool {
        self.mesh.take_dirty()
    }

    fn mesh_regenerated(&mut self) {
        self.bus.publish(&ChangeEvent::Mesh(MeshChange::Regenerated {
            columns: self.mesh.columns(),
            rows: self.mesh.rows(),
            cell_size: self.mesh.cell_size().get(),
        }));
        self.sync_window();
    }

    /// Point the sampler at the cells currently on screen.
    fn sync_window(&mut self) {
        let (columns, rows) = self.mesh.viewport_in_cells();
        let position = Point::new(self.offset.x as f64, self.offset.y as f64);
        let (width, height) = (columns as f64, rows as f64);
        if let Err(e) = self.sampler.update_window(position, width, height) {
            tracing::error!("Viewport window rejected: {}", e);
            return;
        }
        self.bus.publish(&ChangeEvent::Viewport(ViewportChange::WindowChanged {
            x: position.x,
            y: position.y,
            width,
            height,
        }));
    }
}
