//! Scheme editor aggregate.
//!
//! `SchemeEditor` ties the core together for a UI host: the scene
//! containers, the observable editor state, the bounded command history,
//! and the scheme's canvas settings. The host reads snapshots, subscribes
//! to change events, and funnels every undoable mutation through the
//! command entry points here.
//!
//! Split into submodules:
//! - `history`: command execution, undo/redo, the notification contract
//! - `input`: selection, pan/zoom, drag gestures
//! - `shapes`: shape and device mutation entry points

mod history;
mod input;
mod shapes;

pub use input::ActiveDrag;

use crate::device_store::CatalogDevice;
use crate::editor_state::EditorState;
use crate::history::CommandManager;
use crate::scene::Scene;
use crate::serialization::{self, SchemeDocument};
use schemekit_core::{Dispatcher, Observable, Result, SubscriptionId};

/// Change notification published to editor observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    ShapesChanged,
    DevicesChanged,
    HistoryChanged,
}

/// Canvas settings of the open scheme (everything in the persisted
/// document except the device placements, which live in the scene).
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeInfo {
    pub width: f64,
    pub height: f64,
    pub background_color: schemekit_core::Color,
    pub background_image: Option<String>,
    pub grid_enabled: bool,
    pub grid_size: f64,
}

impl Default for SchemeInfo {
    fn default() -> Self {
        let doc = SchemeDocument::default();
        Self {
            width: doc.width,
            height: doc.height,
            background_color: doc.background_color,
            background_image: doc.background_image,
            grid_enabled: doc.grid_enabled,
            grid_size: doc.grid_size,
        }
    }
}

/// The scheme editor core: scene, state, history, and change events.
///
/// All mutation happens on one owner thread; observers may read published
/// snapshots from anywhere.
pub struct SchemeEditor {
    pub(crate) scene: Scene,
    pub(crate) scheme: SchemeInfo,
    pub(crate) state: Observable<EditorState>,
    pub(crate) history: CommandManager,
    pub(crate) events: Dispatcher<EditorEvent>,
    pub(crate) active_drag: Option<ActiveDrag>,
}

impl SchemeEditor {
    /// Creates an editor with an empty scheme.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            scheme: SchemeInfo::default(),
            state: Observable::new(EditorState::new()),
            history: CommandManager::new(),
            events: Dispatcher::new(),
            active_drag: None,
        }
    }

    /// Creates an editor with a specific history capacity.
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: CommandManager::with_limit(limit),
            ..Self::new()
        }
    }

    /// Initializes the editor from a persisted scheme document and its
    /// shape blob. Malformed shape data opens as an empty shape list.
    /// Resets selection, canvas transform, dirty flag, and history.
    pub fn load_scheme(&mut self, doc: SchemeDocument, shapes_json: &str) {
        self.scene.clear();
        self.scheme = SchemeInfo {
            width: doc.width,
            height: doc.height,
            background_color: doc.background_color,
            background_image: doc.background_image,
            grid_enabled: doc.grid_enabled,
            grid_size: doc.grid_size,
        };

        let mut placements = doc.devices;
        placements.sort_by_key(|p| p.z_index);
        for placement in placements {
            self.scene.devices.restore(placement);
        }
        for shape in serialization::shapes_from_json(shapes_json) {
            self.scene.shapes.restore(shape);
        }

        self.history.clear();
        self.active_drag = None;
        self.state.set(EditorState::new());
        self.events.emit(&EditorEvent::ShapesChanged);
        self.events.emit(&EditorEvent::DevicesChanged);
        self.events.emit(&EditorEvent::HistoryChanged);
    }

    /// Produces the scheme document and shape blob for saving. Does not
    /// clear the dirty flag; call [`SchemeEditor::mark_saved`] once the
    /// persistence collaborator commits.
    pub fn save_scheme(&self) -> Result<(SchemeDocument, String)> {
        let doc = SchemeDocument {
            width: self.scheme.width,
            height: self.scheme.height,
            background_color: self.scheme.background_color,
            background_image: self.scheme.background_image.clone(),
            grid_enabled: self.scheme.grid_enabled,
            grid_size: self.scheme.grid_size,
            devices: self.scene.devices.to_vec(),
        };
        let shapes = serialization::shapes_to_json(&self.scene.shapes)?;
        Ok((doc, shapes))
    }

    /// The external "saved" signal: clears the dirty flag.
    pub fn mark_saved(&mut self) {
        self.state.update(|s| s.ui.is_dirty = false);
    }

    /// Read access to the scene containers.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The open scheme's canvas settings.
    pub fn scheme(&self) -> &SchemeInfo {
        &self.scheme
    }

    /// Snapshot of the current editor state.
    pub fn state(&self) -> EditorState {
        self.state.get()
    }

    /// Subscribes to editor change events.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&EditorEvent) + Send + Sync + 'static,
    {
        self.events.subscribe(handler)
    }

    /// Subscribes to published editor-state snapshots.
    pub fn subscribe_state<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&EditorState) + Send + Sync + 'static,
    {
        self.state.subscribe(handler)
    }

    /// Replaces the device-catalog mirror wholesale. Not undoable.
    pub fn set_catalog(&mut self, catalog: Vec<CatalogDevice>) {
        self.scene.devices.set_catalog(catalog);
    }

    /// Toggles the background grid. Direct scheme-settings change; marks
    /// the scheme dirty but is not undoable.
    pub fn set_grid_enabled(&mut self, enabled: bool) {
        self.scheme.grid_enabled = enabled;
        self.state.update(|s| s.ui.is_dirty = true);
    }

    /// Sets the grid spacing in canvas units.
    pub fn set_grid_size(&mut self, size: f64) {
        debug_assert!(size.is_finite() && size > 0.0, "grid size must be positive, got {size}");
        self.scheme.grid_size = size;
        self.state.update(|s| s.ui.is_dirty = true);
    }

    /// Sets the scheme background color.
    pub fn set_background_color(&mut self, color: schemekit_core::Color) {
        self.scheme.background_color = color;
        self.state.update(|s| s.ui.is_dirty = true);
    }

    /// Sets or clears the scheme background image reference.
    pub fn set_background_image(&mut self, image: Option<String>) {
        self.scheme.background_image = image;
        self.state.update(|s| s.ui.is_dirty = true);
    }
}

impl Default for SchemeEditor {
    fn default() -> Self {
        Self::new()
    }
}
