//! Shape and device mutation entry points.
//!
//! Convenience constructors the UI host calls in response to pointer
//! gestures. Each builds a command and runs it through the history, so
//! every mutation here is undoable.

use super::SchemeEditor;
use crate::commands::EditorCommand;
use crate::editor_state::Selection;
use crate::model::{Point, ShapeKind, ShapeObject};
use schemekit_core::Color;

impl SchemeEditor {
    fn add_shape(&mut self, kind: ShapeKind, x: f64, y: f64, width: f64, height: f64) -> u64 {
        let id = self.scene.shapes.generate_id();
        let shape = ShapeObject::new(id, kind, x, y, width, height);
        self.execute(EditorCommand::add_shape(shape));
        id
    }

    /// Adds a rectangle, returning its id.
    pub fn add_rectangle(&mut self, x: f64, y: f64, width: f64, height: f64) -> u64 {
        self.add_shape(ShapeKind::Rectangle { corner_radius: 0.0 }, x, y, width, height)
    }

    /// Adds an ellipse inscribed in the given box.
    pub fn add_ellipse(&mut self, x: f64, y: f64, width: f64, height: f64) -> u64 {
        self.add_shape(ShapeKind::Ellipse, x, y, width, height)
    }

    /// Adds a rhombus inscribed in the given box.
    pub fn add_rhombus(&mut self, x: f64, y: f64, width: f64, height: f64) -> u64 {
        self.add_shape(ShapeKind::Rhombus, x, y, width, height)
    }

    /// Adds a line between two canvas-space points.
    pub fn add_line(&mut self, from: Point, to: Point) -> u64 {
        let x = from.x.min(to.x);
        let y = from.y.min(to.y);
        let width = (to.x - from.x).abs();
        let height = (to.y - from.y).abs();
        // Endpoints are stored corner-relative so the shape moves as one.
        let kind = ShapeKind::Line {
            start: Point::new(from.x - x, from.y - y),
            end: Point::new(to.x - x, to.y - y),
        };
        self.add_shape(kind, x, y, width, height)
    }

    /// Adds a text block at the given position.
    pub fn add_text(
        &mut self,
        content: impl Into<String>,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> u64 {
        let kind = ShapeKind::Text {
            content: content.into(),
            font_size: 14.0,
            bold: false,
            italic: false,
        };
        self.add_shape(kind, x, y, width, height)
    }

    /// Removes a shape by id. Missing id leaves history untouched.
    pub fn remove_shape(&mut self, id: u64) {
        if self.scene.shapes.get(id).is_none() {
            tracing::debug!(id, "remove_shape ignored for unknown shape");
            return;
        }
        self.execute(EditorCommand::remove_shape(id));
    }

    /// Removes whatever is currently selected.
    pub fn remove_selected(&mut self) {
        match self.state.get().selection {
            Some(Selection::Shape(id)) => self.remove_shape(id),
            Some(Selection::Device(device_id)) => self.remove_device(device_id),
            None => {}
        }
    }

    /// Places a catalog device at a canvas-space position. Returns `false`
    /// when the device is already on the scheme.
    pub fn place_device(&mut self, device_id: u64, x: f64, y: f64) -> bool {
        let Some(placement) = self.scene.devices.place(device_id, x, y) else {
            return false;
        };
        self.execute(EditorCommand::add_device(placement));
        true
    }

    /// Removes a device placement. Unplaced id leaves history untouched.
    pub fn remove_device(&mut self, device_id: u64) {
        if self.scene.devices.get(device_id).is_none() {
            tracing::debug!(device_id, "remove_device ignored for unplaced device");
            return;
        }
        self.execute(EditorCommand::remove_device(device_id));
    }

    /// Moves a shape by a delta as a single undoable step.
    pub fn move_shape(&mut self, id: u64, dx: f64, dy: f64) {
        self.execute(EditorCommand::move_shape(id, dx, dy));
    }

    /// Moves a device placement by a delta as a single undoable step.
    pub fn move_device(&mut self, device_id: u64, dx: f64, dy: f64) {
        self.execute(EditorCommand::move_device(device_id, dx, dy));
    }

    /// Changes the selected shape's fill color. No-op unless a shape is
    /// selected.
    pub fn set_fill_color(&mut self, fill: Color) {
        if let Some(Selection::Shape(id)) = self.state.get().selection {
            self.execute(EditorCommand::set_fill_color(id, fill));
        }
    }

    /// Changes the selected shape's stroke width. No-op unless a shape is
    /// selected.
    pub fn set_stroke_width(&mut self, width: f64) {
        if let Some(Selection::Shape(id)) = self.state.get().selection {
            self.execute(EditorCommand::set_stroke_width(id, width));
        }
    }
}
