//! Pointer-driven navigation: selection, pan/zoom, drag gestures.
//!
//! Selection and canvas transform changes are direct state transitions,
//! deliberately outside the undo history. Drag gestures preview by
//! mutating the containers directly and commit as one batched Move
//! command on release, so a per-pixel drag cannot flood the bounded
//! history.

use super::{EditorEvent, SchemeEditor};
use crate::commands::EditorCommand;
use crate::editor_state::Selection;
use crate::geometry;
use crate::model::Point;
use crate::scene::SceneHit;
use schemekit_core::constants::{MAX_ZOOM, MIN_ZOOM, VIEW_PADDING, ZOOM_STEP};

/// An in-progress drag of the selected entity, accumulating the total
/// delta until the gesture ends.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDrag {
    target: Selection,
    total_dx: f64,
    total_dy: f64,
}

impl SchemeEditor {
    /// Selects the topmost entity under a screen-space point, or clears
    /// the selection on a miss. Not undoable.
    pub fn select_at(&mut self, screen_point: Point) -> Option<Selection> {
        let canvas_point = geometry::screen_to_canvas(screen_point, &self.state.get().canvas);
        let selection = match self.scene.find_topmost_at(canvas_point) {
            Some(SceneHit::Shape(id)) => Some(Selection::Shape(id)),
            Some(SceneHit::Device(id)) => Some(Selection::Device(id)),
            None => None,
        };
        self.state.update(|s| {
            s.selection = selection;
            s.ui.show_shape_properties = matches!(selection, Some(Selection::Shape(_)));
        });
        selection
    }

    /// Clears the selection and hides the property panel.
    pub fn clear_selection(&mut self) {
        self.state.update(|s| {
            s.selection = None;
            s.ui.show_shape_properties = false;
        });
    }

    /// Selects a shape by id, if it exists.
    pub fn select_shape(&mut self, id: u64) {
        if self.scene.shapes.get(id).is_none() {
            tracing::debug!(id, "select_shape ignored for unknown shape");
            return;
        }
        self.state.update(|s| {
            s.selection = Some(Selection::Shape(id));
            s.ui.show_shape_properties = true;
        });
    }

    /// Selects a placed device by device id, if it is on the scheme.
    pub fn select_device(&mut self, device_id: u64) {
        if self.scene.devices.get(device_id).is_none() {
            tracing::debug!(device_id, "select_device ignored for unplaced device");
            return;
        }
        self.state.update(|s| {
            s.selection = Some(Selection::Device(device_id));
            s.ui.show_shape_properties = false;
        });
    }

    /// Pans the canvas by a screen-space delta. Not undoable.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.state.update(|s| {
            s.canvas.offset.x += dx;
            s.canvas.offset.y += dy;
        });
    }

    /// Sets the zoom factor, clamped to the supported range. Not undoable.
    pub fn set_zoom(&mut self, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            tracing::debug!(scale, "ignoring non-positive zoom");
            return;
        }
        let scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        self.state.update(|s| s.canvas.scale = scale);
    }

    /// Zooms in one step.
    pub fn zoom_in(&mut self) {
        let scale = self.state.get().canvas.scale;
        self.set_zoom(scale * ZOOM_STEP);
    }

    /// Zooms out one step.
    pub fn zoom_out(&mut self) {
        let scale = self.state.get().canvas.scale;
        self.set_zoom(scale / ZOOM_STEP);
    }

    /// Zooms to a new factor while keeping the canvas point under the
    /// given screen position fixed ("zoom to cursor").
    pub fn zoom_at(&mut self, screen_point: Point, scale: f64) {
        if !scale.is_finite() || scale <= 0.0 {
            return;
        }
        let scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
        self.state.update(|s| {
            let anchor = geometry::screen_to_canvas(screen_point, &s.canvas);
            s.canvas.scale = scale;
            s.canvas.offset = Point::new(
                screen_point.x - anchor.x * scale,
                screen_point.y - anchor.y * scale,
            );
        });
    }

    /// Fits the whole scheme into a viewport of the given pixel size,
    /// centered with standard padding.
    pub fn fit_to_view(&mut self, view_width: f64, view_height: f64) {
        let canvas = geometry::fit_canvas(
            self.scheme.width,
            self.scheme.height,
            view_width,
            view_height,
            VIEW_PADDING,
        );
        self.state.update(|s| s.canvas = canvas);
    }

    /// Starts a drag of the currently selected entity. Returns whether a
    /// drag began.
    pub fn begin_drag(&mut self) -> bool {
        let Some(target) = self.state.get().selection else {
            return false;
        };
        self.active_drag = Some(ActiveDrag {
            target,
            total_dx: 0.0,
            total_dy: 0.0,
        });
        true
    }

    /// Applies a canvas-space delta to the dragged entity as a live
    /// preview. The history sees nothing until the gesture ends.
    pub fn update_drag(&mut self, dx: f64, dy: f64) {
        let Some(drag) = self.active_drag.as_mut() else {
            return;
        };
        drag.total_dx += dx;
        drag.total_dy += dy;
        match drag.target {
            Selection::Shape(id) => {
                self.scene.shapes.translate(id, dx, dy);
                self.events.emit(&EditorEvent::ShapesChanged);
            }
            Selection::Device(device_id) => {
                self.scene.devices.translate(device_id, dx, dy);
                self.events.emit(&EditorEvent::DevicesChanged);
            }
        }
    }

    /// Ends the drag, committing the accumulated delta as one Move
    /// command. A zero-delta drag records nothing.
    pub fn end_drag(&mut self) {
        let Some(drag) = self.active_drag.take() else {
            return;
        };
        if drag.total_dx == 0.0 && drag.total_dy == 0.0 {
            return;
        }
        let cmd = match drag.target {
            Selection::Shape(id) => EditorCommand::move_shape(id, drag.total_dx, drag.total_dy),
            Selection::Device(device_id) => {
                EditorCommand::move_device(device_id, drag.total_dx, drag.total_dy)
            }
        };
        self.record(cmd);
    }

    /// Abandons an in-progress drag, reverting the previewed movement.
    pub fn cancel_drag(&mut self) {
        let Some(drag) = self.active_drag.take() else {
            return;
        };
        match drag.target {
            Selection::Shape(id) => {
                self.scene.shapes.translate(id, -drag.total_dx, -drag.total_dy);
                self.events.emit(&EditorEvent::ShapesChanged);
            }
            Selection::Device(device_id) => {
                self.scene
                    .devices
                    .translate(device_id, -drag.total_dx, -drag.total_dy);
                self.events.emit(&EditorEvent::DevicesChanged);
            }
        }
    }
}
