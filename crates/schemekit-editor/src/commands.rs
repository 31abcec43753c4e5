//! Undoable scene mutations.
//!
//! Every editor mutation is an [`EditorCommand`]: a paired `apply`/`undo`
//! unit over an explicit [`Scene`] handle. Add/remove commands carry the
//! full record through an `Option` slot that moves between the command and
//! the container; property commands capture the previous value at first
//! `apply`, before mutating, because the container keeps no history of its
//! own. Commands are only ever driven in stack order by the history, so
//! `apply` and `undo` always alternate.

use crate::device_store::PlacedDevice;
use crate::model::ShapeObject;
use crate::scene::Scene;
use schemekit_core::Color;

/// Which collection a command targets, for change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandTarget {
    Shapes,
    Devices,
}

/// Observable side effect of applying or undoing a command. Drives the
/// editor-state notification contract: every effect dirties the scheme,
/// and a removing effect clears the selection.
#[derive(Debug, Clone, Copy)]
pub struct CommandEffect {
    pub name: &'static str,
    pub target: CommandTarget,
    /// Whether this direction removed entities from the scene.
    pub removed_entities: bool,
}

#[derive(Debug, Clone)]
pub struct AddShape {
    pub id: u64,
    /// `Some` while off-canvas (before first apply, or after undo).
    pub object: Option<ShapeObject>,
}

#[derive(Debug, Clone)]
pub struct RemoveShape {
    pub id: u64,
    /// `Some` while removed (after apply), `None` while on canvas.
    pub object: Option<ShapeObject>,
    /// Draw-order position captured at apply, so undo re-inserts the
    /// shape at its original z position instead of on top.
    pub index: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct MoveShape {
    pub id: u64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone)]
pub struct AddDevice {
    pub device_id: u64,
    pub placement: Option<PlacedDevice>,
}

#[derive(Debug, Clone)]
pub struct RemoveDevice {
    pub device_id: u64,
    pub placement: Option<PlacedDevice>,
}

#[derive(Debug, Clone)]
pub struct MoveDevice {
    pub device_id: u64,
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone)]
pub struct SetFillColor {
    pub id: u64,
    pub fill: Color,
    /// Captured from the shape at first apply, before mutation.
    pub previous: Option<Color>,
}

#[derive(Debug, Clone)]
pub struct SetStrokeWidth {
    pub id: u64,
    pub width: f64,
    pub previous: Option<f64>,
}

/// A paired execute/undo mutation unit driving the undo-redo history.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    AddShape(AddShape),
    RemoveShape(RemoveShape),
    MoveShape(MoveShape),
    AddDevice(AddDevice),
    RemoveDevice(RemoveDevice),
    MoveDevice(MoveDevice),
    SetFillColor(SetFillColor),
    SetStrokeWidth(SetStrokeWidth),
}

impl EditorCommand {
    /// Builds an add-shape command carrying a shape whose id was already
    /// allocated by the scene's shape container.
    pub fn add_shape(object: ShapeObject) -> Self {
        EditorCommand::AddShape(AddShape {
            id: object.id,
            object: Some(object),
        })
    }

    pub fn remove_shape(id: u64) -> Self {
        EditorCommand::RemoveShape(RemoveShape {
            id,
            object: None,
            index: None,
        })
    }

    pub fn move_shape(id: u64, dx: f64, dy: f64) -> Self {
        EditorCommand::MoveShape(MoveShape { id, dx, dy })
    }

    /// Builds an add-device command from a placement record allocated by
    /// [`crate::device_store::DeviceManager::place`].
    pub fn add_device(placement: PlacedDevice) -> Self {
        EditorCommand::AddDevice(AddDevice {
            device_id: placement.device_id,
            placement: Some(placement),
        })
    }

    pub fn remove_device(device_id: u64) -> Self {
        EditorCommand::RemoveDevice(RemoveDevice {
            device_id,
            placement: None,
        })
    }

    pub fn move_device(device_id: u64, dx: f64, dy: f64) -> Self {
        EditorCommand::MoveDevice(MoveDevice { device_id, dx, dy })
    }

    pub fn set_fill_color(id: u64, fill: Color) -> Self {
        EditorCommand::SetFillColor(SetFillColor {
            id,
            fill,
            previous: None,
        })
    }

    pub fn set_stroke_width(id: u64, width: f64) -> Self {
        EditorCommand::SetStrokeWidth(SetStrokeWidth {
            id,
            width,
            previous: None,
        })
    }

    /// Performs the mutation.
    pub fn apply(&mut self, scene: &mut Scene) {
        match self {
            EditorCommand::AddShape(cmd) => {
                if let Some(object) = cmd.object.take() {
                    scene.shapes.restore(object);
                }
            }
            EditorCommand::RemoveShape(cmd) => {
                cmd.index = scene.shapes.index_of(cmd.id);
                if let Some(object) = scene.shapes.remove(cmd.id) {
                    cmd.object = Some(object);
                }
            }
            EditorCommand::MoveShape(cmd) => {
                scene.shapes.translate(cmd.id, cmd.dx, cmd.dy);
            }
            EditorCommand::AddDevice(cmd) => {
                if let Some(placement) = cmd.placement.take() {
                    scene.devices.restore(placement);
                }
            }
            EditorCommand::RemoveDevice(cmd) => {
                if let Some(placement) = scene.devices.remove(cmd.device_id) {
                    cmd.placement = Some(placement);
                }
            }
            EditorCommand::MoveDevice(cmd) => {
                scene.devices.translate(cmd.device_id, cmd.dx, cmd.dy);
            }
            EditorCommand::SetFillColor(cmd) => {
                if cmd.previous.is_none() {
                    cmd.previous = scene.shapes.get(cmd.id).map(|s| s.fill);
                }
                let fill = cmd.fill;
                scene.shapes.update(cmd.id, |s| s.fill = fill);
            }
            EditorCommand::SetStrokeWidth(cmd) => {
                if cmd.previous.is_none() {
                    cmd.previous = scene.shapes.get(cmd.id).map(|s| s.stroke_width);
                }
                let width = cmd.width.max(0.0);
                scene.shapes.update(cmd.id, |s| s.stroke_width = width);
            }
        }
    }

    /// Reverses the mutation.
    pub fn undo(&mut self, scene: &mut Scene) {
        match self {
            EditorCommand::AddShape(cmd) => {
                if let Some(object) = scene.shapes.remove(cmd.id) {
                    cmd.object = Some(object);
                }
            }
            EditorCommand::RemoveShape(cmd) => {
                if let Some(object) = cmd.object.take() {
                    match cmd.index {
                        Some(index) => scene.shapes.restore_at(index, object),
                        None => scene.shapes.restore(object),
                    }
                }
            }
            EditorCommand::MoveShape(cmd) => {
                scene.shapes.translate(cmd.id, -cmd.dx, -cmd.dy);
            }
            EditorCommand::AddDevice(cmd) => {
                if let Some(placement) = scene.devices.remove(cmd.device_id) {
                    cmd.placement = Some(placement);
                }
            }
            EditorCommand::RemoveDevice(cmd) => {
                if let Some(placement) = cmd.placement.take() {
                    scene.devices.restore(placement);
                }
            }
            EditorCommand::MoveDevice(cmd) => {
                scene.devices.translate(cmd.device_id, -cmd.dx, -cmd.dy);
            }
            EditorCommand::SetFillColor(cmd) => {
                if let Some(previous) = cmd.previous {
                    scene.shapes.update(cmd.id, |s| s.fill = previous);
                }
            }
            EditorCommand::SetStrokeWidth(cmd) => {
                if let Some(previous) = cmd.previous {
                    scene.shapes.update(cmd.id, |s| s.stroke_width = previous);
                }
            }
        }
    }

    /// Command name for history display.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::AddShape(_) => "Add Shape",
            EditorCommand::RemoveShape(_) => "Remove Shape",
            EditorCommand::MoveShape(_) => "Move Shape",
            EditorCommand::AddDevice(_) => "Place Device",
            EditorCommand::RemoveDevice(_) => "Remove Device",
            EditorCommand::MoveDevice(_) => "Move Device",
            EditorCommand::SetFillColor(_) => "Change Fill Color",
            EditorCommand::SetStrokeWidth(_) => "Change Stroke Width",
        }
    }

    /// The collection this command mutates.
    pub fn target(&self) -> CommandTarget {
        match self {
            EditorCommand::AddShape(_)
            | EditorCommand::RemoveShape(_)
            | EditorCommand::MoveShape(_)
            | EditorCommand::SetFillColor(_)
            | EditorCommand::SetStrokeWidth(_) => CommandTarget::Shapes,
            EditorCommand::AddDevice(_)
            | EditorCommand::RemoveDevice(_)
            | EditorCommand::MoveDevice(_) => CommandTarget::Devices,
        }
    }

    /// Whether `apply` removes entities from the scene.
    pub fn removes_on_apply(&self) -> bool {
        matches!(
            self,
            EditorCommand::RemoveShape(_) | EditorCommand::RemoveDevice(_)
        )
    }

    /// Whether `undo` removes entities from the scene.
    pub fn removes_on_undo(&self) -> bool {
        matches!(
            self,
            EditorCommand::AddShape(_) | EditorCommand::AddDevice(_)
        )
    }

    /// Effect descriptor for the apply direction.
    pub fn apply_effect(&self) -> CommandEffect {
        CommandEffect {
            name: self.name(),
            target: self.target(),
            removed_entities: self.removes_on_apply(),
        }
    }

    /// Effect descriptor for the undo direction.
    pub fn undo_effect(&self) -> CommandEffect {
        CommandEffect {
            name: self.name(),
            target: self.target(),
            removed_entities: self.removes_on_undo(),
        }
    }
}
