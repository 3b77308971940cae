//! # Change Notification Module
//!
//! Scoped change notification for the drawing core. State is split into
//! independent slices (objects, style overrides, viewport window, mesh) and
//! consumers subscribe to the slices they render from. There is no
//! subscription to the whole state: a renderer that only draws the grid is
//! never woken by an object edit.
//!
//! ## Usage
//!
//! ```rust
//! use gridsketch_core::event_bus::{ChangeBus, ChangeEvent, ChangeSlice, MeshChange};
//!
//! let mut bus = ChangeBus::new();
//! let subscription = bus.subscribe(ChangeSlice::Mesh, |event| {
//!     if let ChangeEvent::Mesh(MeshChange::Regenerated { columns, rows, .. }) = event {
//!         println!("grid is now {columns}x{rows}");
//!     }
//! });
//!
//! bus.publish(&ChangeEvent::Mesh(MeshChange::Regenerated {
//!     columns: 40,
//!     rows: 30,
//!     cell_size: 20.0,
//! }));
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
