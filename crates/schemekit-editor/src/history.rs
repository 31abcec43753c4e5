//! Bounded undo/redo history.
//!
//! Two double-ended queues of commands, each capped at the configured
//! limit. Executing or recording a new command clears the redo stack:
//! branching history is not supported, a new action after an undo discards
//! the undone branch. When the undo stack is full the oldest entry is
//! evicted, so continuous editing stays amortized O(1).

use crate::commands::{CommandEffect, EditorCommand};
use crate::scene::Scene;
use schemekit_core::constants::DEFAULT_HISTORY_LIMIT;
use std::collections::VecDeque;

/// Command history with bounded undo and redo stacks.
#[derive(Debug, Default)]
pub struct CommandManager {
    undo_stack: VecDeque<EditorCommand>,
    redo_stack: VecDeque<EditorCommand>,
    limit: usize,
}

impl CommandManager {
    /// Creates a history with the default capacity.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates a history with a specific capacity.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(limit),
            redo_stack: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Applies the command to the scene immediately, pushes it onto the
    /// undo stack, and reports its effect to the caller's notification.
    pub fn execute(
        &mut self,
        mut cmd: EditorCommand,
        scene: &mut Scene,
        notify: impl FnOnce(CommandEffect),
    ) {
        cmd.apply(scene);
        let effect = cmd.apply_effect();
        self.push(cmd);
        notify(effect);
    }

    /// Pushes a command whose mutation has already happened (gesture-end
    /// batching: the drag previewed the move directly on the container).
    /// Follows the same eviction and redo-clearing rules as `execute`.
    pub fn record(&mut self, cmd: EditorCommand, notify: impl FnOnce(CommandEffect)) {
        let effect = cmd.apply_effect();
        self.push(cmd);
        notify(effect);
    }

    fn push(&mut self, cmd: EditorCommand) {
        if self.undo_stack.len() >= self.limit {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(cmd);
        self.redo_stack.clear();
    }

    /// Undoes the most recent command. No-op on an empty stack; returns
    /// whether anything was undone.
    pub fn undo(&mut self, scene: &mut Scene, notify: impl FnOnce(CommandEffect)) -> bool {
        let Some(mut cmd) = self.undo_stack.pop_back() else {
            return false;
        };
        cmd.undo(scene);
        let effect = cmd.undo_effect();
        if self.redo_stack.len() >= self.limit {
            self.redo_stack.pop_front();
        }
        self.redo_stack.push_back(cmd);
        notify(effect);
        true
    }

    /// Re-applies the most recently undone command. No-op on an empty
    /// stack; returns whether anything was redone.
    pub fn redo(&mut self, scene: &mut Scene, notify: impl FnOnce(CommandEffect)) -> bool {
        let Some(mut cmd) = self.redo_stack.pop_back() else {
            return false;
        };
        cmd.apply(scene);
        let effect = cmd.apply_effect();
        if self.undo_stack.len() >= self.limit {
            self.undo_stack.pop_front();
        }
        self.undo_stack.push_back(cmd);
        notify(effect);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Name of the command that would be undone next, for menu labels.
    pub fn undo_name(&self) -> Option<&'static str> {
        self.undo_stack.back().map(|c| c.name())
    }

    /// Name of the command that would be redone next.
    pub fn redo_name(&self) -> Option<&'static str> {
        self.redo_stack.back().map(|c| c.name())
    }

    /// Drops all history, e.g. when a new scheme is loaded.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShapeKind, ShapeObject};

    fn add_rect_cmd(scene: &mut Scene) -> EditorCommand {
        let id = scene.shapes.generate_id();
        EditorCommand::add_shape(ShapeObject::new(
            id,
            ShapeKind::Rectangle { corner_radius: 0.0 },
            0.0,
            0.0,
            10.0,
            10.0,
        ))
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut history = CommandManager::new();
        let mut scene = Scene::new();
        assert!(!history.undo(&mut scene, |_| {}));
        assert!(!history.redo(&mut scene, |_| {}));
    }

    #[test]
    fn test_eviction_drops_oldest_first() {
        let mut history = CommandManager::with_limit(2);
        let mut scene = Scene::new();
        for _ in 0..3 {
            let cmd = add_rect_cmd(&mut scene);
            history.execute(cmd, &mut scene, |_| {});
        }
        assert_eq!(history.undo_len(), 2);
        assert_eq!(scene.shapes.len(), 3);

        // Only the last two adds are undoable.
        assert!(history.undo(&mut scene, |_| {}));
        assert!(history.undo(&mut scene, |_| {}));
        assert!(!history.undo(&mut scene, |_| {}));
        assert_eq!(scene.shapes.len(), 1);
    }

    #[test]
    fn test_new_command_discards_redo_branch() {
        let mut history = CommandManager::new();
        let mut scene = Scene::new();

        let a = add_rect_cmd(&mut scene);
        history.execute(a, &mut scene, |_| {});
        let b = add_rect_cmd(&mut scene);
        history.execute(b, &mut scene, |_| {});

        assert!(history.undo(&mut scene, |_| {}));
        assert!(history.can_redo());

        let c = add_rect_cmd(&mut scene);
        history.execute(c, &mut scene, |_| {});
        assert!(!history.can_redo());
        assert!(!history.redo(&mut scene, |_| {}));
    }

    #[test]
    fn test_notify_reports_removal_direction() {
        let mut history = CommandManager::new();
        let mut scene = Scene::new();

        let cmd = add_rect_cmd(&mut scene);
        let mut removed = None;
        history.execute(cmd, &mut scene, |e| removed = Some(e.removed_entities));
        assert_eq!(removed, Some(false));

        history.undo(&mut scene, |e| removed = Some(e.removed_entities));
        assert_eq!(removed, Some(true));

        history.redo(&mut scene, |e| removed = Some(e.removed_entities));
        assert_eq!(removed, Some(false));
    }
}
