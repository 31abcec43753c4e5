//! Placed-device container and catalog mirror.
//!
//! `DeviceManager` owns the scheme's device placements, keyed by the
//! catalog device id: at most one placement per device within a scheme.
//! z-indices are allocated monotonically at placement time so new devices
//! paint on top. The manager also carries a read-only mirror of the device
//! catalog for UI lookups; the mirror is replaced wholesale and never
//! enters the undo history.

use crate::geometry;
use crate::model::Point;
use serde::{Deserialize, Serialize};

/// A catalog device's placement within one scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedDevice {
    /// Id of the catalog device this placement references. Device business
    /// data stays in the external catalog.
    pub device_id: u64,
    /// Center position in canvas space.
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Paint and hit-test priority; higher is on top.
    pub z_index: i32,
}

fn default_scale() -> f64 {
    1.0
}

/// Read-only mirror entry of a catalog device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDevice {
    pub id: u64,
    /// Device type tag from the catalog (sensor, valve, pump, ...).
    pub kind: String,
    pub name: String,
}

/// Ordered, observable collection of device placements.
#[derive(Debug, Clone, Default)]
pub struct DeviceManager {
    placements: Vec<PlacedDevice>,
    catalog: Vec<CatalogDevice>,
    next_z: i32,
    revision: u64,
}

impl DeviceManager {
    /// Creates an empty device container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a placement record for a device at a position, allocating
    /// the next z-index, without inserting it. Returns `None` when the
    /// device is already placed on this scheme.
    pub fn place(&mut self, device_id: u64, x: f64, y: f64) -> Option<PlacedDevice> {
        if self.get(device_id).is_some() {
            tracing::debug!(device_id, "device already placed on this scheme");
            return None;
        }
        let z_index = self.next_z;
        self.next_z += 1;
        Some(PlacedDevice {
            device_id,
            x,
            y,
            rotation: 0.0,
            scale: 1.0,
            z_index,
        })
    }

    /// Inserts a placement, keeping its z-index and advancing the z
    /// counter past it. A duplicate device id is a silent no-op.
    pub fn restore(&mut self, placement: PlacedDevice) {
        if self.get(placement.device_id).is_some() {
            tracing::debug!(
                device_id = placement.device_id,
                "ignoring duplicate device placement"
            );
            return;
        }
        self.next_z = self.next_z.max(placement.z_index + 1);
        self.placements.push(placement);
        self.revision += 1;
    }

    /// Removes a placement, returning it for undo capture.
    pub fn remove(&mut self, device_id: u64) -> Option<PlacedDevice> {
        let pos = self.placements.iter().position(|p| p.device_id == device_id)?;
        self.revision += 1;
        Some(self.placements.remove(pos))
    }

    /// Applies a mutator to a placement in place. Missing id = no-op.
    pub fn update(&mut self, device_id: u64, f: impl FnOnce(&mut PlacedDevice)) {
        if let Some(placement) = self
            .placements
            .iter_mut()
            .find(|p| p.device_id == device_id)
        {
            f(placement);
            self.revision += 1;
        }
    }

    /// Moves a placement by a delta. Missing id = no-op.
    pub fn translate(&mut self, device_id: u64, dx: f64, dy: f64) {
        self.update(device_id, |p| {
            p.x += dx;
            p.y += dy;
        });
    }

    /// Gets a placement by device id.
    pub fn get(&self, device_id: u64) -> Option<&PlacedDevice> {
        self.placements.iter().find(|p| p.device_id == device_id)
    }

    /// Iterates placements bottom-to-top in paint order (z ascending).
    pub fn iter(&self) -> impl Iterator<Item = &PlacedDevice> {
        let mut ordered: Vec<&PlacedDevice> = self.placements.iter().collect();
        ordered.sort_by_key(|p| p.z_index);
        ordered.into_iter()
    }

    /// Returns the topmost placement's device id at a canvas-space point,
    /// walking z-indices from top to bottom.
    pub fn find_topmost_at(&self, point: Point) -> Option<u64> {
        let mut ordered: Vec<&PlacedDevice> = self.placements.iter().collect();
        ordered.sort_by_key(|p| std::cmp::Reverse(p.z_index));
        ordered
            .into_iter()
            .find(|p| geometry::device_contains(p, point))
            .map(|p| p.device_id)
    }

    /// Number of placements on the scheme.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Removes all placements, keeping the catalog mirror.
    pub fn clear(&mut self) {
        self.placements.clear();
        self.revision += 1;
    }

    /// Snapshot of all placements in paint order, for saving.
    pub fn to_vec(&self) -> Vec<PlacedDevice> {
        self.iter().cloned().collect()
    }

    /// Replaces the catalog mirror wholesale. Not undoable.
    pub fn set_catalog(&mut self, catalog: Vec<CatalogDevice>) {
        self.catalog = catalog;
    }

    /// The mirrored device catalog.
    pub fn catalog(&self) -> &[CatalogDevice] {
        &self.catalog
    }

    /// Looks up a catalog device by id.
    pub fn catalog_device(&self, id: u64) -> Option<&CatalogDevice> {
        self.catalog.iter().find(|d| d.id == id)
    }

    /// Monotonic change counter for cheap change detection by observers.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_index_monotonic_and_topmost() {
        let mut manager = DeviceManager::new();
        let a = manager.place(1, 10.0, 10.0).unwrap();
        manager.restore(a);
        let b = manager.place(2, 10.0, 10.0).unwrap();
        manager.restore(b);

        assert!(manager.get(2).unwrap().z_index > manager.get(1).unwrap().z_index);
        // Both hit boxes cover (10,10); the later placement wins.
        assert_eq!(manager.find_topmost_at(Point::new(10.0, 10.0)), Some(2));
    }

    #[test]
    fn test_single_placement_per_device() {
        let mut manager = DeviceManager::new();
        let first = manager.place(7, 0.0, 0.0).unwrap();
        manager.restore(first.clone());

        assert!(manager.place(7, 50.0, 50.0).is_none());
        manager.restore(PlacedDevice {
            x: 50.0,
            ..first
        });
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.get(7).unwrap().x, 0.0);
    }

    #[test]
    fn test_restore_preserves_z_after_remove() {
        let mut manager = DeviceManager::new();
        let a = manager.place(1, 0.0, 0.0).unwrap();
        manager.restore(a);
        let b = manager.place(2, 0.0, 0.0).unwrap();
        manager.restore(b);

        let removed = manager.remove(1).unwrap();
        manager.restore(removed.clone());
        assert_eq!(manager.get(1).unwrap().z_index, removed.z_index);
        // New placements still go on top of everything restored.
        let c = manager.place(3, 0.0, 0.0).unwrap();
        assert!(c.z_index > removed.z_index);
    }

    #[test]
    fn test_catalog_mirror_lookup() {
        let mut manager = DeviceManager::new();
        manager.set_catalog(vec![CatalogDevice {
            id: 5,
            kind: "valve".to_string(),
            name: "Inlet valve".to_string(),
        }]);
        assert_eq!(manager.catalog_device(5).unwrap().name, "Inlet valve");
        assert!(manager.catalog_device(6).is_none());
    }
}
