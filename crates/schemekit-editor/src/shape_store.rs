//! Shape container for the scheme canvas.
//!
//! `ShapeManager` owns the drawn shapes as an arena: stable `u64` keys in
//! an id map plus a draw-order vector. Insertion order is z-order, so the
//! last-added shape paints on top and is hit-tested first. Every mutation
//! is total over the id space: a missing id is a silent no-op.

use crate::geometry;
use crate::model::{Point, ShapeObject};
use std::collections::HashMap;

/// Ordered, observable collection of drawn shapes.
#[derive(Debug, Clone, Default)]
pub struct ShapeManager {
    shapes: HashMap<u64, ShapeObject>,
    draw_order: Vec<u64>,
    next_id: u64,
    revision: u64,
}

impl ShapeManager {
    /// Creates an empty shape container.
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Allocates the next unique shape id.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Inserts a shape at the top of the draw order. If the shape's id was
    /// never allocated here (a restored scheme), the id counter advances
    /// past it so future allocations stay unique.
    pub fn restore(&mut self, shape: ShapeObject) {
        let top = self.draw_order.len();
        self.restore_at(top, shape);
    }

    /// Inserts a shape at a specific draw-order position, clamped to the
    /// current stack height. Used when undoing a removal so the shape
    /// returns to its original z position rather than on top.
    pub fn restore_at(&mut self, index: usize, shape: ShapeObject) {
        if self.shapes.contains_key(&shape.id) {
            tracing::debug!(id = shape.id, "ignoring duplicate shape insert");
            return;
        }
        self.next_id = self.next_id.max(shape.id + 1);
        let index = index.min(self.draw_order.len());
        self.draw_order.insert(index, shape.id);
        self.shapes.insert(shape.id, shape);
        self.revision += 1;
    }

    /// Draw-order position of a shape: `0` is the bottom of the stack.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.draw_order.iter().position(|&s| s == id)
    }

    /// Removes a shape, returning it for undo capture. Missing id = `None`.
    pub fn remove(&mut self, id: u64) -> Option<ShapeObject> {
        let shape = self.shapes.remove(&id)?;
        self.draw_order.retain(|&s| s != id);
        self.revision += 1;
        Some(shape)
    }

    /// Applies a mutator to a shape in place. Missing id = no-op.
    pub fn update(&mut self, id: u64, f: impl FnOnce(&mut ShapeObject)) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            f(shape);
            self.revision += 1;
        }
    }

    /// Moves a shape by a delta. Missing id = no-op.
    pub fn translate(&mut self, id: u64, dx: f64, dy: f64) {
        self.update(id, |shape| shape.translate(dx, dy));
    }

    /// Gets a shape by id.
    pub fn get(&self, id: u64) -> Option<&ShapeObject> {
        self.shapes.get(&id)
    }

    /// Iterates shapes bottom-to-top in draw order.
    pub fn iter(&self) -> impl Iterator<Item = &ShapeObject> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Returns the topmost shape id at a canvas-space point, walking the
    /// draw order from top to bottom.
    pub fn find_topmost_at(&self, point: Point) -> Option<u64> {
        self.draw_order
            .iter()
            .rev()
            .filter_map(|id| self.shapes.get(id))
            .find(|shape| geometry::shape_contains(shape, point))
            .map(|shape| shape.id)
    }

    /// Number of shapes on the canvas.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Removes all shapes, keeping the id counter.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.draw_order.clear();
        self.revision += 1;
    }

    /// Monotonic change counter for cheap change detection by observers.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
