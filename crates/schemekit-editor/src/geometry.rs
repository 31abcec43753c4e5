//! Coordinate transforms and hit-testing.
//!
//! Pure, stateless functions safe to call from any thread. Screen space is
//! host pixels; canvas space is the scheme's logical coordinate system,
//! related by `screen = canvas * scale + offset`. Hit tests first map the
//! query point into a shape's local space (center-relative, inverse-rotated)
//! so the per-variant predicates stay axis-aligned.

use crate::device_store::PlacedDevice;
use crate::editor_state::CanvasState;
use crate::model::{Point, ShapeKind, ShapeObject};
use schemekit_core::constants::{DEVICE_HIT_SIZE, LINE_HIT_TOLERANCE, MAX_ZOOM, MIN_ZOOM};

/// Converts a screen-space point to canvas space.
///
/// A zero scale is treated as `1` so a degenerate transform can never
/// divide by zero.
pub fn screen_to_canvas(p: Point, canvas: &CanvasState) -> Point {
    let scale = if canvas.scale == 0.0 { 1.0 } else { canvas.scale };
    Point::new((p.x - canvas.offset.x) / scale, (p.y - canvas.offset.y) / scale)
}

/// Converts a canvas-space point to screen space. Inverse of
/// [`screen_to_canvas`].
pub fn canvas_to_screen(p: Point, canvas: &CanvasState) -> Point {
    Point::new(
        p.x * canvas.scale + canvas.offset.x,
        p.y * canvas.scale + canvas.offset.y,
    )
}

/// Maps a canvas-space point into a shape's local space: center-relative,
/// then inverse-rotated by `-rotation_deg` so subsequent tests are
/// axis-aligned.
pub fn to_local_space(p: Point, center: Point, rotation_deg: f64) -> Point {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    if rotation_deg.abs() < 1e-9 {
        return Point::new(dx, dy);
    }
    let (sin, cos) = (-rotation_deg.to_radians()).sin_cos();
    Point::new(dx * cos - dy * sin, dx * sin + dy * cos)
}

/// Box test in local (center-relative) space. Covers rectangles, text
/// blocks, and device hit boxes.
pub fn box_contains(local: Point, width: f64, height: f64) -> bool {
    local.x.abs() <= width / 2.0 && local.y.abs() <= height / 2.0
}

/// Ellipse test in local space: `(x/(w/2))^2 + (y/(h/2))^2 <= 1`.
pub fn ellipse_contains(local: Point, width: f64, height: f64) -> bool {
    let rx = width / 2.0;
    let ry = height / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return local.x == 0.0 && local.y == 0.0;
    }
    let nx = local.x / rx;
    let ny = local.y / ry;
    nx * nx + ny * ny <= 1.0
}

/// Rhombus test in local space: `|x|/(w/2) + |y|/(h/2) <= 1`.
pub fn rhombus_contains(local: Point, width: f64, height: f64) -> bool {
    let rx = width / 2.0;
    let ry = height / 2.0;
    if rx <= 0.0 || ry <= 0.0 {
        return local.x == 0.0 && local.y == 0.0;
    }
    local.x.abs() / rx + local.y.abs() / ry <= 1.0
}

/// Perpendicular distance from a point to the segment `a..b`, with the
/// projection parameter clamped to `[0, 1]`.
pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return p.distance_to(&a);
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    let closest = Point::new(a.x + t * ab.x, a.y + t * ab.y);
    p.distance_to(&closest)
}

/// Tests whether a canvas-space point lands on a shape, honoring the
/// shape's rotation and variant geometry.
pub fn shape_contains(shape: &ShapeObject, p: Point) -> bool {
    let local = to_local_space(p, shape.center(), shape.rotation);
    match &shape.kind {
        ShapeKind::Rectangle { .. } | ShapeKind::Text { .. } => {
            box_contains(local, shape.width, shape.height)
        }
        ShapeKind::Ellipse => ellipse_contains(local, shape.width, shape.height),
        ShapeKind::Rhombus => rhombus_contains(local, shape.width, shape.height),
        ShapeKind::Line { start, end } => {
            // Stored endpoints are corner-relative; shift them into the
            // same center-relative frame as the query point.
            let half = Point::new(shape.width / 2.0, shape.height / 2.0);
            let a = *start - half;
            let b = *end - half;
            segment_distance(local, a, b) <= shape.stroke_width + LINE_HIT_TOLERANCE
        }
    }
}

/// Tests whether a canvas-space point lands on a placed device. The hit
/// box is a fixed square scaled by the placement and rotated with it.
pub fn device_contains(device: &PlacedDevice, p: Point) -> bool {
    let side = DEVICE_HIT_SIZE * device.scale;
    let local = to_local_space(p, Point::new(device.x, device.y), device.rotation);
    box_contains(local, side, side)
}

/// Computes a canvas transform that fits a `scheme_w` x `scheme_h` scheme
/// into a `view_w` x `view_h` viewport, centered, with `padding` (fraction
/// of the viewport, 0.0-1.0) reserved around it.
pub fn fit_canvas(scheme_w: f64, scheme_h: f64, view_w: f64, view_h: f64, padding: f64) -> CanvasState {
    if scheme_w <= 0.0 || scheme_h <= 0.0 || view_w <= 0.0 || view_h <= 0.0 {
        return CanvasState::default();
    }
    let usable = 1.0 - (padding * 2.0);
    let scale_x = view_w * usable / scheme_w;
    let scale_y = view_h * usable / scheme_h;
    let scale = scale_x.min(scale_y).clamp(MIN_ZOOM, MAX_ZOOM);

    let offset = Point::new(
        (view_w - scheme_w * scale) / 2.0,
        (view_h - scheme_h * scale) / 2.0,
    );
    CanvasState { scale, offset }
}
