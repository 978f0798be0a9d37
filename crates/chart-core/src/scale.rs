// File: crates/chart-core/src/scale.rs
// Summary: Category (X) and linear value (Y) scale transforms.

/// Horizontal category scale: label index -> pixel, evenly spread across the plot.
/// With a single label the point sits in the middle of the plot.
#[derive(Clone, Copy, Debug)]
pub struct CategoryScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl CategoryScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Pixel distance between two adjacent labels (full width when only one).
    pub fn spacing(&self) -> f32 {
        if self.count < 2 { self.right_px - self.left_px } else { (self.right_px - self.left_px) / (self.count - 1) as f32 }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count < 2 {
            (self.left_px + self.right_px) * 0.5
        } else {
            self.left_px + index as f32 * self.spacing()
        }
    }

    /// Nearest label index for a pixel, clamped to the valid range.
    pub fn nearest_index(&self, px: f32) -> Option<usize> {
        if self.count == 0 { return None; }
        if self.count == 1 { return Some(0); }
        let raw = ((px - self.left_px) / self.spacing()).round();
        Some(raw.clamp(0.0, (self.count - 1) as f32) as usize)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` to `[bottom, top]` pixels.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
