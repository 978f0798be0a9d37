// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, point styling).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Radius of the dot drawn at every non-null data point.
pub const POINT_RADIUS: f32 = 3.0;
/// Stroke width of line series.
pub const LINE_WIDTH: f32 = 2.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    // Left and bottom leave room for tick labels plus the axis titles.
    fn default() -> Self {
        Self::new(88, 24, 24, 64)
    }
}
