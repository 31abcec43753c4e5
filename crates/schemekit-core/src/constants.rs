//! Tuning constants shared across the editor core.

/// Extra pick margin, in canvas units, added to a line's stroke width
/// when hit-testing thin segments.
pub const LINE_HIT_TOLERANCE: f64 = 5.0;

/// Side length, in canvas units, of the square hit box used for placed
/// devices at scale 1.0.
pub const DEVICE_HIT_SIZE: f64 = 60.0;

/// Maximum number of commands retained on each history stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Lower bound for the canvas zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Upper bound for the canvas zoom factor.
pub const MAX_ZOOM: f64 = 50.0;

/// Multiplier applied per zoom-in / zoom-out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Fraction of the viewport reserved as padding when fitting a scheme
/// into view.
pub const VIEW_PADDING: f64 = 0.05;
