//! Command execution and undo/redo for the editor aggregate.
//!
//! This is where the command side-effect contract lives: every executed,
//! undone, or redone command marks the scheme dirty, and any effect that
//! removed entities clears the selection and hides the shape property
//! panel, since the selected entity may be gone.

use super::{EditorEvent, SchemeEditor};
use crate::commands::{CommandEffect, CommandTarget, EditorCommand};
use crate::editor_state::EditorState;
use schemekit_core::{Dispatcher, Observable};

fn notify_effect(
    state: &Observable<EditorState>,
    events: &Dispatcher<EditorEvent>,
    effect: CommandEffect,
) {
    state.update(|s| {
        s.ui.is_dirty = true;
        if effect.removed_entities {
            s.selection = None;
            s.ui.show_shape_properties = false;
        }
    });
    events.emit(&match effect.target {
        CommandTarget::Shapes => EditorEvent::ShapesChanged,
        CommandTarget::Devices => EditorEvent::DevicesChanged,
    });
    events.emit(&EditorEvent::HistoryChanged);
}

impl SchemeEditor {
    /// Executes a command against the scene and pushes it onto the undo
    /// history.
    pub fn execute(&mut self, cmd: EditorCommand) {
        let state = &self.state;
        let events = &self.events;
        self.history.execute(cmd, &mut self.scene, |effect| {
            notify_effect(state, events, effect);
        });
    }

    /// Records an already-applied command (drag batching).
    pub(crate) fn record(&mut self, cmd: EditorCommand) {
        let state = &self.state;
        let events = &self.events;
        self.history.record(cmd, |effect| {
            notify_effect(state, events, effect);
        });
    }

    /// Undoes the most recent command. No-op with empty history.
    pub fn undo(&mut self) -> bool {
        let state = &self.state;
        let events = &self.events;
        self.history.undo(&mut self.scene, |effect| {
            notify_effect(state, events, effect);
        })
    }

    /// Redoes the most recently undone command. No-op with empty history.
    pub fn redo(&mut self) -> bool {
        let state = &self.state;
        let events = &self.events;
        self.history.redo(&mut self.scene, |effect| {
            notify_effect(state, events, effect);
        })
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Label of the next undoable command, for menu items.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.history.undo_name()
    }

    /// Label of the next redoable command.
    pub fn redo_name(&self) -> Option<&'static str> {
        self.history.redo_name()
    }

    /// Number of commands on the undo stack.
    pub fn undo_len(&self) -> usize {
        self.history.undo_len()
    }

    /// Number of commands on the redo stack.
    pub fn redo_len(&self) -> usize {
        self.history.redo_len()
    }
}
