//! Scene model: the two parallel collections of one scheme.

use crate::device_store::DeviceManager;
use crate::model::Point;
use crate::shape_store::ShapeManager;

/// What a canvas-space point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneHit {
    Shape(u64),
    Device(u64),
}

/// One scheme's editable content: drawn shapes and placed devices.
///
/// Commands receive the scene as an explicit handle; nothing in the
/// command layer captures it by reference.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub shapes: ShapeManager,
    pub devices: DeviceManager,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the topmost entity at a canvas-space point. Devices sit
    /// above shapes: they are the operator's primary content.
    pub fn find_topmost_at(&self, point: Point) -> Option<SceneHit> {
        if let Some(device_id) = self.devices.find_topmost_at(point) {
            return Some(SceneHit::Device(device_id));
        }
        self.shapes.find_topmost_at(point).map(SceneHit::Shape)
    }

    /// Removes all shapes and placements.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.devices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ShapeKind, ShapeObject};

    #[test]
    fn test_devices_resolve_above_shapes() {
        let mut scene = Scene::new();
        let shape_id = scene.shapes.generate_id();
        scene.shapes.restore(ShapeObject::new(
            shape_id,
            ShapeKind::Rectangle { corner_radius: 0.0 },
            0.0,
            0.0,
            200.0,
            200.0,
        ));
        let placement = scene.devices.place(42, 100.0, 100.0).unwrap();
        scene.devices.restore(placement);

        assert_eq!(
            scene.find_topmost_at(Point::new(100.0, 100.0)),
            Some(SceneHit::Device(42))
        );
        assert_eq!(
            scene.find_topmost_at(Point::new(5.0, 5.0)),
            Some(SceneHit::Shape(shape_id))
        );
        assert_eq!(scene.find_topmost_at(Point::new(500.0, 500.0)), None);
    }
}
