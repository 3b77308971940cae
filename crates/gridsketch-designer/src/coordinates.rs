//! Coordinate pipeline between screen pixels, mesh cells and world space.
//!
//! Three parallel representations of a location:
//! - **Screen**: device pixels inside the canvas, origin top-left, y down.
//! - **Cell**: integer mesh index, `floor(screen / cell_size)`.
//! - **World**: `cell + camera_offset`. Objects are stored in world space so
//!   panning the camera never moves stored geometry.
//!
//! Every function takes its cell size and offset explicitly; nothing here
//! reads ambient state. At `offset = (0, 0)` cell and world coordinates are
//! numerically identical.
//!
//! ```text
//! screen --screen_to_cell--> cell --cell_to_world--> world
//! screen <--cell_to_screen-- cell <--world_to_cell-- world
//! ```

use gridsketch_core::{ensure_positive, DesignerError};
use serde::{Deserialize, Serialize};

use crate::model::Point;

/// Device pixel position within the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer mesh cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CellPoint {
    pub x: i64,
    pub y: i64,
}

impl CellPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Camera position in whole cells. Always integer-snapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CameraOffset {
    pub x: i64,
    pub y: i64,
}

impl CameraOffset {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Pan by whole cells, saturating at the ends of the `i64` range.
    pub fn panned(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Edge length of one mesh cell in device pixels.
///
/// Validated once on construction; holding a `CellSize` means the value is
/// finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CellSize(f64);

impl CellSize {
    /// Fails with [`DesignerError::InvalidConfiguration`] for zero, negative
    /// or non-finite sizes.
    pub fn new(pixels: f64) -> Result<Self, DesignerError> {
        ensure_positive("cell_size", pixels).map(Self)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for CellSize {
    type Error = DesignerError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for CellSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        CellSize::new(raw).map_err(serde::de::Error::custom)
    }
}

/// `floor(screen / cell_size)` per axis.
pub fn screen_to_cell(screen: ScreenPoint, cell_size: CellSize) -> CellPoint {
    let size = cell_size.get();
    CellPoint::new(
        (screen.x / size).floor() as i64,
        (screen.y / size).floor() as i64,
    )
}

/// `cell + offset`.
pub fn cell_to_world(cell: CellPoint, offset: CameraOffset) -> Point {
    Point::new(
        cell.x.saturating_add(offset.x) as f64,
        cell.y.saturating_add(offset.y) as f64,
    )
}

/// `world - offset`, flooring fractional world coordinates onto their cell.
pub fn world_to_cell(world: Point, offset: CameraOffset) -> CellPoint {
    CellPoint::new(
        (world.x.floor() as i64).saturating_sub(offset.x),
        (world.y.floor() as i64).saturating_sub(offset.y),
    )
}

/// Top-left pixel of `cell`.
pub fn cell_to_screen(cell: CellPoint, cell_size: CellSize) -> ScreenPoint {
    let size = cell_size.get();
    ScreenPoint::new(cell.x as f64 * size, cell.y as f64 * size)
}

/// Snapped world position of a screen pixel.
pub fn screen_to_world(screen: ScreenPoint, cell_size: CellSize, offset: CameraOffset) -> Point {
    cell_to_world(screen_to_cell(screen, cell_size), offset)
}

/// Top-left pixel of the cell holding `world`.
pub fn world_to_screen(world: Point, cell_size: CellSize, offset: CameraOffset) -> ScreenPoint {
    cell_to_screen(world_to_cell(world, offset), cell_size)
}
