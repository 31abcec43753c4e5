//! Scheme (de)serialization surface.
//!
//! The persistence collaborator exchanges two opaque blobs with the
//! editor: the scheme document (canvas settings plus device placements)
//! and a separately serialized shape list, both JSON. Storage itself is
//! the collaborator's concern; malformed shape data must degrade to an
//! empty scene, never crash the editor.

use crate::device_store::PlacedDevice;
use crate::model::ShapeObject;
use crate::shape_store::ShapeManager;
use schemekit_core::{Color, Result, SchemeError};
use serde::{Deserialize, Serialize};

/// Persisted scheme structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeDocument {
    pub width: f64,
    pub height: f64,
    pub background_color: Color,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub grid_enabled: bool,
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default)]
    pub devices: Vec<PlacedDevice>,
}

fn default_grid_size() -> f64 {
    20.0
}

impl Default for SchemeDocument {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            background_color: Color::WHITE,
            background_image: None,
            grid_enabled: true,
            grid_size: default_grid_size(),
            devices: Vec::new(),
        }
    }
}

impl SchemeDocument {
    /// Parses a persisted scheme document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(SchemeError::MalformedDocument)
    }

    /// Serializes the document for the persistence collaborator.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(SchemeError::Serialize)
    }
}

/// Serializes the shape list for the persistence collaborator.
pub fn shapes_to_json(shapes: &ShapeManager) -> Result<String> {
    let list: Vec<&ShapeObject> = shapes.iter().collect();
    serde_json::to_string(&list).map_err(SchemeError::Serialize)
}

/// Parses a persisted shape list, reporting malformed input to callers
/// that want to distinguish corruption from an empty scheme.
pub fn try_shapes_from_json(json: &str) -> Result<Vec<ShapeObject>> {
    serde_json::from_str(json).map_err(SchemeError::MalformedShapes)
}

/// Parses a persisted shape list. Malformed input degrades to an empty
/// list so a corrupted blob opens as an empty scene.
pub fn shapes_from_json(json: &str) -> Vec<ShapeObject> {
    match try_shapes_from_json(json) {
        Ok(list) => list,
        Err(err) => {
            tracing::warn!(error = %err, "malformed shape list, opening empty scene");
            Vec::new()
        }
    }
}
