//! Editor state aggregate: selection, canvas transform, UI flags.
//!
//! `EditorState` is one cohesive value, updated copy-on-write through the
//! editor's observable holder. Selection and pan/zoom changes are direct
//! (non-undoable) transitions; everything else mutates only inside a
//! command's apply/undo.

use crate::model::Point;
use serde::{Deserialize, Serialize};

/// What the operator currently has selected: one shape or one placed
/// device, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A drawn shape, by shape id.
    Shape(u64),
    /// A placed device, by catalog device id.
    Device(u64),
}

/// Canvas-to-screen transform: `screen = canvas * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    /// Zoom factor, always positive.
    pub scale: f64,
    /// Screen-space translation of the canvas origin.
    pub offset: Point,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: Point::ZERO,
        }
    }
}

/// UI-facing flags derived from editing activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState {
    /// Set by every executed/undone/redone command; cleared only by the
    /// host's explicit "saved" signal.
    pub is_dirty: bool,
    /// Whether the shape property panel is visible.
    pub show_shape_properties: bool,
}

/// The full editor state aggregate.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditorState {
    pub selection: Option<Selection>,
    pub canvas: CanvasState,
    pub ui: UiState,
}

impl EditorState {
    /// State for a freshly opened scheme: nothing selected, identity
    /// transform, clean.
    pub fn new() -> Self {
        Self::default()
    }
}
