// File: crates/chart-core/src/axis.rs
// Summary: Axis model with titles, ranges and the zero-baseline option.

#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    /// Draw the axis line, ticks and title.
    pub display: bool,
    /// Draw the title next to the axis.
    pub show_title: bool,
    pub min: f64,
    pub max: f64,
    /// Force the lower bound to include zero when autoscaling.
    pub begin_at_zero: bool,
}

impl Axis {
    pub fn new(title: impl Into<String>, min: f64, max: f64) -> Self {
        Self { title: title.into(), display: true, show_title: true, min, max, begin_at_zero: false }
    }

    pub fn default_x() -> Self {
        Self::new("Date", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        let mut a = Self::new("Value", 0.0, 1.0);
        a.begin_at_zero = true;
        a
    }

    pub fn with_begin_at_zero(mut self, yes: bool) -> Self {
        self.begin_at_zero = yes;
        self
    }
}
