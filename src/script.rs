//! Headless replay of recorded input.
//!
//! A script is a JSON list of steps that drive a [`DesignerState`] the same way
//! a host UI would: pointer events in screen pixels, tool changes, panning and
//! style edits. Useful for reproducing bug reports without a window.

use gridsketch_core::{StyleField, StyleValue};
use gridsketch_designer::{
    DesignerState, DrawOutcome, DrawingMode, PointerEventKind, PointerOutcome, ScreenPoint,
};
use serde::{Deserialize, Serialize};

/// One recorded input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    Mode { mode: DrawingMode },
    Pointer { kind: PointerEventKind, x: f64, y: f64 },
    Pan { dx: i64, dy: i64 },
    StyleDefault { field: StyleField, value: StyleValue },
    Cancel,
    DeleteSelected,
    ClearAll,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    pub steps: Vec<ScriptStep>,
}

impl Script {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Summary of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReplayStats {
    pub steps: usize,
    pub committed: usize,
    pub rejected: usize,
}

/// Apply every step in order.
pub fn replay(designer: &mut DesignerState, script: &Script) -> ReplayStats {
    let mut stats = ReplayStats::default();
    for (index, step) in script.steps.iter().enumerate() {
        stats.steps += 1;
        match step {
            ScriptStep::Mode { mode } => designer.set_mode(*mode),
            ScriptStep::Pointer { kind, x, y } => {
                let outcome = designer.handle_pointer_event(*kind, ScreenPoint::new(*x, *y));
                if let PointerOutcome::Draw(DrawOutcome::Committed(id)) = outcome {
                    tracing::debug!(index, %id, "Replay committed object");
                    stats.committed += 1;
                }
            }
            ScriptStep::Pan { dx, dy } => designer.pan_by_cells(*dx, *dy),
            ScriptStep::StyleDefault { field, value } => {
                if !designer.set_style_default(*field, *value) {
                    tracing::warn!(index, %field, "Replay step rejected");
                    stats.rejected += 1;
                }
            }
            ScriptStep::Cancel => designer.cancel(),
            ScriptStep::DeleteSelected => {
                designer.delete_selected();
            }
            ScriptStep::ClearAll => {
                designer.clear_all();
            }
        }
    }
    stats
}
