//! Mesh grid covering the viewport.
//!
//! The mesh owns the authoritative cell size. [`MeshGrid::cell_under_pointer`]
//! is the only path from a pointer position to a cell; callers must not divide
//! screen coordinates themselves.

use gridsketch_core::DesignerError;

use crate::coordinates::{
    cell_to_world, screen_to_cell, CameraOffset, CellPoint, CellSize, ScreenPoint,
};
use crate::model::Point;

#[derive(Debug, Clone)]
pub struct MeshGrid {
    cell_size: CellSize,
    viewport_width_px: f64,
    viewport_height_px: f64,
    columns: u32,
    rows: u32,
    dirty: bool,
    generation: u64,
}

fn cover(dimension_px: f64, cell_size: CellSize) -> u32 {
    (dimension_px / cell_size.get()).ceil() as u32
}

fn validate_viewport(width_px: f64, height_px: f64) -> Result<(), DesignerError> {
    gridsketch_core::ensure_positive("viewport_width", width_px)?;
    gridsketch_core::ensure_positive("viewport_height", height_px)?;
    Ok(())
}

impl MeshGrid {
    /// Build a mesh for a `width_px` x `height_px` viewport.
    pub fn new(cell_size_px: f64, width_px: f64, height_px: f64) -> Result<Self, DesignerError> {
        let cell_size = CellSize::new(cell_size_px)?;
        validate_viewport(width_px, height_px)?;
        let mut mesh = Self {
            cell_size,
            viewport_width_px: width_px,
            viewport_height_px: height_px,
            columns: 0,
            rows: 0,
            dirty: false,
            generation: 0,
        };
        mesh.regenerate();
        Ok(mesh)
    }

    fn regenerate(&mut self) {
        self.columns = cover(self.viewport_width_px, self.cell_size);
        self.rows = cover(self.viewport_height_px, self.cell_size);
        self.dirty = true;
        self.generation += 1;
        tracing::debug!(
            columns = self.columns,
            rows = self.rows,
            cell_size = self.cell_size.get(),
            generation = self.generation,
            "Mesh regenerated"
        );
    }

    /// Recompute column and row counts for a new viewport size.
    pub fn resize(&mut self, width_px: f64, height_px: f64) -> Result<(), DesignerError> {
        validate_viewport(width_px, height_px)?;
        self.viewport_width_px = width_px;
        self.viewport_height_px = height_px;
        self.regenerate();
        Ok(())
    }

    /// Change the cell size. A rejected size leaves the mesh untouched.
    pub fn set_cell_size(&mut self, cell_size_px: f64) -> Result<(), DesignerError> {
        self.cell_size = CellSize::new(cell_size_px)?;
        self.regenerate();
        Ok(())
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn viewport_size_px(&self) -> (f64, f64) {
        (self.viewport_width_px, self.viewport_height_px)
    }

    /// Visible size in cells, `(columns, rows)`.
    pub fn viewport_in_cells(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Number of regenerations since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_under_pointer(&self, screen: ScreenPoint) -> CellPoint {
        screen_to_cell(screen, self.cell_size)
    }

    pub fn world_under_pointer(&self, screen: ScreenPoint, offset: CameraOffset) -> Point {
        cell_to_world(self.cell_under_pointer(screen), offset)
    }

    /// All cells covering the viewport, row-major.
    pub fn cells(&self) -> impl Iterator<Item = CellPoint> + '_ {
        (0..self.rows as i64)
            .flat_map(move |y| (0..self.columns as i64).map(move |x| CellPoint::new(x, y)))
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consume the regeneration flag. Returns whether cached render geometry
    /// must be rebuilt.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
