//! # SchemeKit Editor
//!
//! The scheme/diagram editor core of an equipment-inventory application:
//! a 2D canvas on which operators place instrument devices and drawn
//! shapes, move and restyle them, and undo/redo every mutation.
//!
//! ## Core Components
//!
//! - **Model**: drawn shapes as a tagged union over five variants
//!   (rectangle, ellipse, rhombus, line, text)
//! - **Geometry**: pure screen/canvas transforms and rotation-aware
//!   hit-testing
//! - **Scene containers**: [`ShapeManager`] and [`DeviceManager`], the
//!   two z-ordered collections of one scheme
//! - **Commands**: paired apply/undo mutation units over an explicit
//!   [`Scene`] handle
//! - **History**: bounded undo/redo stacks in [`CommandManager`]
//! - **Editor aggregate**: [`SchemeEditor`] with observable state,
//!   selection, pan/zoom, and batched drag gestures
//! - **Serialization**: the scheme blob exchanged with the persistence
//!   collaborator
//!
//! ## Architecture
//!
//! ```text
//! SchemeEditor (aggregate, observable state)
//!   ├── Scene
//!   │     ├── ShapeManager  (drawn shapes, draw order = z-order)
//!   │     └── DeviceManager (placements + catalog mirror)
//!   ├── CommandManager (bounded undo/redo)
//!   └── EditorState (selection, canvas transform, UI flags)
//!
//! geometry (pure functions: transforms, hit tests)
//! ```
//!
//! Pointer input flows: hit-test via `geometry` → build an
//! [`EditorCommand`] → execute through the history → containers mutate
//! and observers re-render from the published state.
//!
//! ## Usage
//!
//! ```rust
//! use schemekit_editor::SchemeEditor;
//!
//! let mut editor = SchemeEditor::new();
//! let id = editor.add_rectangle(10.0, 10.0, 80.0, 40.0);
//! editor.undo();
//! assert!(editor.scene().shapes.is_empty());
//! let _ = id;
//! ```

pub mod commands;
pub mod device_store;
pub mod editor;
pub mod editor_state;
pub mod geometry;
pub mod history;
pub mod model;
pub mod scene;
pub mod serialization;
pub mod shape_store;

pub use commands::{CommandEffect, CommandTarget, EditorCommand};
pub use device_store::{CatalogDevice, DeviceManager, PlacedDevice};
pub use editor::{EditorEvent, SchemeEditor, SchemeInfo};
pub use editor_state::{CanvasState, EditorState, Selection, UiState};
pub use history::CommandManager;
pub use model::{Point, ShapeKind, ShapeObject};
pub use scene::{Scene, SceneHit};
pub use serialization::{shapes_from_json, shapes_to_json, try_shapes_from_json, SchemeDocument};
pub use shape_store::ShapeManager;

// Re-export the shared foundation so hosts depend on one crate.
pub use schemekit_core::{Color, Dispatcher, Observable, SchemeError, SubscriptionId};
