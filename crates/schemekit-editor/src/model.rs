//! Shape model for the scheme canvas.
//!
//! A drawn shape is a [`ShapeObject`]: common placement and styling fields
//! plus a [`ShapeKind`] tagged union carrying the variant-specific payload.
//! Keeping the payload in a sum type prevents invalid field combinations
//! (a rhombus cannot carry text content, a rectangle cannot carry segment
//! endpoints).

use schemekit_core::Color;
use serde::{Deserialize, Serialize};

/// A point or 2D vector in canvas or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Variant-specific payload of a drawn shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeKind {
    Rectangle {
        #[serde(default)]
        corner_radius: f64,
    },
    Ellipse,
    Rhombus,
    /// Segment endpoints are local, relative to the shape's top-left corner.
    Line { start: Point, end: Point },
    Text {
        content: String,
        font_size: f64,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
    },
}

impl ShapeKind {
    /// Display name used for UI lists and command labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle { .. } => "Rectangle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Rhombus => "Rhombus",
            ShapeKind::Line { .. } => "Line",
            ShapeKind::Text { .. } => "Text",
        }
    }
}

/// A drawn shape on the scheme canvas.
///
/// `(x, y)` is the top-left corner of the unrotated bounding box;
/// `rotation` is degrees clockwise about the shape's center. The id is
/// allocated by the shape container, is unique within a scheme, and stays
/// stable across mutation. Width, height, and stroke width are
/// non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeObject {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub kind: ShapeKind,
}

impl ShapeObject {
    /// Creates a shape with default styling.
    pub fn new(id: u64, kind: ShapeKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "shape dimensions must be non-negative, got {width}x{height}"
        );
        Self {
            id,
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
            rotation: 0.0,
            fill: Color::WHITE,
            stroke: Color::BLACK,
            stroke_width: 2.0,
            kind,
        }
    }

    /// The shape's center in canvas space, the pivot for rotation.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Moves the shape by a delta.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Axis-aligned bounding box of the rotated shape,
    /// as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        if self.rotation.abs() < 1e-9 {
            return (self.x, self.y, self.x + self.width, self.y + self.height);
        }
        let center = self.center();
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for (cx, cy) in [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)] {
            let rx = center.x + cx * cos - cy * sin;
            let ry = center.y + cx * sin + cy * cos;
            min_x = min_x.min(rx);
            min_y = min_y.min(ry);
            max_x = max_x.max(rx);
            max_y = max_y.max(ry);
        }
        (min_x, min_y, max_x, max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_translate() {
        let mut shape = ShapeObject::new(
            1,
            ShapeKind::Rectangle { corner_radius: 0.0 },
            10.0,
            20.0,
            40.0,
            20.0,
        );
        assert_eq!(shape.center(), Point::new(30.0, 30.0));

        shape.translate(5.0, -10.0);
        assert_eq!((shape.x, shape.y), (15.0, 10.0));
        assert_eq!(shape.center(), Point::new(35.0, 20.0));
    }

    #[test]
    fn test_rotated_bounds_contain_unrotated_box() {
        let mut shape = ShapeObject::new(1, ShapeKind::Ellipse, 0.0, 0.0, 40.0, 20.0);
        shape.rotation = 90.0;
        let (min_x, min_y, max_x, max_y) = shape.bounds();
        // A 40x20 box rotated 90 degrees about (20,10) spans 20x40.
        assert!((min_x - 10.0).abs() < 1e-9);
        assert!((min_y - (-10.0)).abs() < 1e-9);
        assert!((max_x - 30.0).abs() < 1e-9);
        assert!((max_y - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_shape_kind_serde_tag() {
        let kind = ShapeKind::Text {
            content: "Pump P-101".to_string(),
            font_size: 14.0,
            bold: true,
            italic: false,
        };
        let json = serde_json::to_string(&kind).unwrap();
        assert!(json.contains("\"type\":\"Text\""));
        assert_eq!(serde_json::from_str::<ShapeKind>(&json).unwrap(), kind);
    }
}
