// File: crates/chart-core/src/series.rs
// Summary: Line series model: nullable values aligned with the chart's category labels.

use std::ops::Range;

#[derive(Clone, Debug)]
pub struct Series {
    /// Human-readable name shown in tooltips.
    pub name: String,
    /// One entry per chart label; `None` is a gap in the line.
    pub values: Vec<Option<f64>>,
    /// Fill the area between the line and the axis baseline.
    pub fill: bool,
    /// Bezier curve tension, 0 draws straight segments.
    pub tension: f32,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), values, fill: false, tension: 0.0 }
    }

    /// Build from plain values (no gaps).
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        Self::new(name, values.iter().copied().map(Some).collect())
    }

    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = tension.max(0.0);
        self
    }

    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Value at `index` when present and finite.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten().filter(|v| v.is_finite())
    }

    /// Index ranges of consecutive present values; the line is drawn per run.
    pub fn segments(&self) -> Vec<Range<usize>> {
        let mut out = Vec::new();
        let mut start: Option<usize> = None;
        for i in 0..self.values.len() {
            match (self.value(i), start) {
                (Some(_), None) => start = Some(i),
                (None, Some(s)) => {
                    out.push(s..i);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start { out.push(s..self.values.len()); }
        out
    }

    /// Min/max over present values.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values.iter().flatten().filter(|v| v.is_finite()).fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}
