//! # GridSketch Core
//!
//! Core types shared by the GridSketch crates.
//! Provides the error taxonomy, object identity, the style model with its
//! three-tier resolution constants, and per-slice change notification.

pub mod error;
pub mod event_bus;
pub mod object_id;
pub mod style;

pub use error::{ensure_positive, DesignerError};

pub use event_bus::{
    ChangeBus, ChangeEvent, ChangeSlice, MeshChange, ObjectsChange, StyleOverrideChange,
    SubscriptionId, ViewportChange,
};

pub use object_id::ObjectId;

pub use style::{Style, StyleDefaults, StyleField, StyleValue};
