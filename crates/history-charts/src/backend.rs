// File: crates/history-charts/src/backend.rs
// Summary: Skia-backed charting primitive: draws a line chart config onto a PNG drawing surface.

use chart_core::{Axis, Chart, Interaction, RenderOptions, Theme, TooltipItem};
use tracing::info;

use crate::error::RenderError;
use crate::factory::{ChartBackend, InteractionMode, LineChartConfig};
use crate::surface::{DrawingSurface, SurfaceSet};

pub struct SkiaBackend {
    surfaces: SurfaceSet,
    theme: Theme,
    draw_labels: bool,
}

impl SkiaBackend {
    pub fn new(surfaces: SurfaceSet) -> Self {
        Self { surfaces, theme: Theme::default(), draw_labels: true }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Tick labels and titles; disable for font-independent output.
    pub fn with_labels(mut self, draw_labels: bool) -> Self {
        self.draw_labels = draw_labels;
        self
    }

    pub fn surfaces(&self) -> &SurfaceSet {
        &self.surfaces
    }
}

impl ChartBackend for SkiaBackend {
    type Handle = RenderedChart;

    fn construct(&mut self, surface_id: &str, config: LineChartConfig) -> Result<RenderedChart, RenderError> {
        let surface = self
            .surfaces
            .get(surface_id)
            .cloned()
            .ok_or_else(|| RenderError::MissingSurface(surface_id.to_string()))?;

        let mut opts = RenderOptions { theme: self.theme, draw_labels: self.draw_labels, ..RenderOptions::default() };
        // Responsive charts take the surface's size, others keep the default canvas.
        if config.responsive {
            opts.width = surface.width;
            opts.height = surface.height;
        }

        let handle = RenderedChart { chart: build_chart(config), surface, opts };
        handle.redraw()?;
        info!(surface = surface_id, path = %handle.surface.path.display(), "chart rendered");
        Ok(handle)
    }
}

fn build_chart(config: LineChartConfig) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new(config.x.title, 0.0, 1.0).with_begin_at_zero(config.x.begin_at_zero);
    chart.x_axis.display = config.x.display;
    chart.y_axis = Axis::new(config.y.title, 0.0, 1.0).with_begin_at_zero(config.y.begin_at_zero);
    chart.y_axis.display = config.y.display;
    chart.interaction = Interaction {
        mode: match config.interaction.mode {
            InteractionMode::Index => chart_core::InteractionMode::Index,
        },
        intersect: config.interaction.intersect,
    };
    chart.set_labels(config.labels);
    for ds in config.datasets {
        chart.add_series(chart_core::Series::new(ds.label, ds.data).with_fill(ds.fill).with_tension(ds.tension));
    }
    chart.autoscale_y();
    chart
}

/// A chart drawn on a surface. Keeps its data so it can redraw itself.
pub struct RenderedChart {
    pub chart: Chart,
    pub surface: DrawingSurface,
    opts: RenderOptions,
}

impl RenderedChart {
    pub fn surface_id(&self) -> &str {
        &self.surface.id
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Draw the chart onto its surface again.
    pub fn redraw(&self) -> Result<(), RenderError> {
        self.chart
            .render_to_png(&self.opts, &self.surface.path)
            .map_err(|source| RenderError::Draw { surface: self.surface.id.clone(), source })
    }

    /// Redraw at a new surface size.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), RenderError> {
        self.surface.width = width;
        self.surface.height = height;
        self.opts.width = width;
        self.opts.height = height;
        self.redraw()
    }

    /// Tooltip rows for a pointer over the surface.
    pub fn tooltip_at(&self, x: f32, y: f32) -> Vec<TooltipItem> {
        self.chart.hit_test(x, y, &self.opts)
    }

    /// Redraw with the crosshair and tooltip shown for a pointer position.
    pub fn hover(&mut self, x: f32, y: f32) -> Result<Vec<TooltipItem>, RenderError> {
        self.opts.crosshair = Some((x, y));
        self.redraw()?;
        Ok(self.tooltip_at(x, y))
    }
}
