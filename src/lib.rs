//! # GridSketch
//!
//! Interactive grid-snapped 2D vector drawing core. A user clicks and drags on
//! a rendered grid to create points, lines, circles, rectangles and diamonds;
//! the core keeps them in world space, culls them against a pannable viewport
//! and tells the renderer what to draw.
//!
//! ## Architecture
//!
//! GridSketch is organized as a workspace with multiple crates:
//!
//! 1. **gridsketch-core** - Error taxonomy, object ids, style model, change bus
//! 2. **gridsketch-settings** - Configuration file handling and validation
//! 3. **gridsketch-designer** - Coordinates, mesh, shape kernels, object store,
//!    drawing session, viewport culling and selection
//! 4. **gridsketch** - Facade plus a headless replay binary
//!
//! Windowing, toolbars and pixel rendering are left to the host application.

pub mod script;

pub use gridsketch_core::{
    ChangeBus, ChangeEvent, ChangeSlice, DesignerError, ObjectId, Style, StyleDefaults, StyleField,
    StyleValue,
};

pub use gridsketch_designer as designer;
pub use gridsketch_designer::{
    CameraOffset, DesignerOptions, DesignerState, DrawingMode, GeometricObject, Point,
    PointerEventKind, RenderPlan, ScreenPoint, ShapeType,
};

pub use gridsketch_settings::{Config, GridSettings, SelectionSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Designer construction options taken from a loaded configuration.
pub fn designer_options_from(config: &Config) -> DesignerOptions {
    DesignerOptions {
        cell_size_px: config.grid.cell_size,
        viewport_width_px: config.grid.viewport_width_px,
        viewport_height_px: config.grid.viewport_height_px,
        hit_tolerance_px: config.selection.hit_tolerance_px,
        style_defaults: config.style,
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - stderr output, so stdout stays free for command output
/// - RUST_LOG environment variable support
/// - JSON lines instead of text when `json` is true
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let registry = tracing_subscriber::registry().with(env_filter);
    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()?;
    }

    Ok(())
}
