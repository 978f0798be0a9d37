// File: crates/history-charts/src/factory.rs
// Summary: Declarative line chart configuration and the charting-primitive capability it is handed to.

use crate::error::RenderError;
use crate::extract::Series;

/// Title of the shared date axis.
pub const DATE_AXIS_TITLE: &str = "日期";
/// Curve smoothing applied to every line.
pub const LINE_TENSION: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Every dataset's value at the hovered label.
    Index,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionConfig {
    pub mode: InteractionMode,
    pub intersect: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatasetConfig {
    pub label: String,
    pub data: Series,
    pub fill: bool,
    pub tension: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub display: bool,
    pub title: String,
    pub begin_at_zero: bool,
}

/// Everything the charting primitive needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineChartConfig {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetConfig>,
    pub responsive: bool,
    pub interaction: InteractionConfig,
    pub x: AxisConfig,
    pub y: AxisConfig,
}

/// The fixed single-series line chart configuration: no fill, slight curve,
/// index-mode hover, zero-based Y axis titled with the series name.
pub fn line_chart_config(labels: &[String], name: &str, series: Series) -> LineChartConfig {
    LineChartConfig {
        kind: ChartKind::Line,
        labels: labels.to_vec(),
        datasets: vec![DatasetConfig { label: name.to_string(), data: series, fill: false, tension: LINE_TENSION }],
        responsive: true,
        interaction: InteractionConfig { mode: InteractionMode::Index, intersect: false },
        x: AxisConfig { display: true, title: DATE_AXIS_TITLE.to_string(), begin_at_zero: false },
        y: AxisConfig { display: true, title: name.to_string(), begin_at_zero: true },
    }
}

/// A charting primitive: binds a configuration to a named drawing surface and
/// returns a live handle to the drawn chart.
pub trait ChartBackend {
    type Handle;

    fn construct(&mut self, surface_id: &str, config: LineChartConfig) -> Result<Self::Handle, RenderError>;
}

/// Build the fixed line chart configuration and hand it to `backend`.
/// Failures are returned to the caller untouched.
pub fn create_line_chart<B: ChartBackend>(
    backend: &mut B,
    surface_id: &str,
    labels: &[String],
    name: &str,
    series: Series,
) -> Result<B::Handle, RenderError> {
    backend.construct(surface_id, line_chart_config(labels, name, series))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_fixed_apart_from_labels_and_data() {
        let labels = vec!["2024-01-01".to_string(), "2024-01-02".to_string()];
        let cfg = line_chart_config(&labels, "粉丝数", vec![Some(50.0), None]);

        assert_eq!(cfg.kind, ChartKind::Line);
        assert_eq!(cfg.labels, labels);
        assert_eq!(cfg.datasets.len(), 1);
        let ds = &cfg.datasets[0];
        assert_eq!(ds.label, "粉丝数");
        assert_eq!(ds.data, vec![Some(50.0), None]);
        assert!(!ds.fill);
        assert_eq!(ds.tension, 0.1);
        assert!(cfg.responsive);
        assert_eq!(cfg.interaction, InteractionConfig { mode: InteractionMode::Index, intersect: false });
        assert_eq!(cfg.x.title, "日期");
        assert!(cfg.y.begin_at_zero);
        assert_eq!(cfg.y.title, "粉丝数");
    }
}
