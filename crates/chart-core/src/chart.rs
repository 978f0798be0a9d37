// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG / RGBA) using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::{clamp, spline_control_points, PointF, RectI32};
use crate::grid::{format_tick, nice_ticks, tick_values};
use crate::interaction::{Interaction, InteractionMode, TooltipItem};
use crate::scale::{CategoryScale, LinearScale};
use crate::series::Series;
use crate::types::{Insets, HEIGHT, LINE_WIDTH, POINT_RADIUS, WIDTH};
use crate::{Axis, TextShaper, Theme};

/// Target number of value ticks on the Y axis.
const Y_TICKS: usize = 6;
const TICK_FONT: f32 = 12.0;
const TITLE_FONT: f32 = 14.0;
/// Pointer distance (px) that counts as hovering a point when `intersect` is set.
const HIT_RADIUS: f32 = POINT_RADIUS + 3.0;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Tick labels and axis titles; off gives font-independent output.
    pub draw_labels: bool,
    /// Pointer position in pixels, used for the crosshair and tooltip.
    pub crosshair: Option<(f32, f32)>,
    pub show_tooltip: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            crosshair: None,
            show_tooltip: true,
        }
    }
}

pub struct Chart {
    /// Category labels along X; every series is aligned to them by index.
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub interaction: Interaction,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            interaction: Interaction::default(),
        }
    }

    pub fn with_labels(labels: Vec<String>) -> Self {
        let mut chart = Self::new();
        chart.set_labels(labels);
        chart
    }

    pub fn set_labels(&mut self, labels: Vec<String>) {
        self.x_axis.min = 0.0;
        self.x_axis.max = labels.len().saturating_sub(1) as f64;
        self.labels = labels;
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit the Y axis to the data with "nice" bounds; includes zero when the
    /// axis begins at zero. Empty data yields `[0, 1]`.
    pub fn autoscale_y(&mut self) {
        let range = self.series.iter().filter_map(Series::min_max).fold(None, |acc: Option<(f64, f64)>, (lo, hi)| {
            Some(match acc {
                None => (lo, hi),
                Some((a, b)) => (a.min(lo), b.max(hi)),
            })
        });
        let Some((mut lo, mut hi)) = range else {
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        };
        if self.y_axis.begin_at_zero {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        let (nlo, nhi, _) = nice_ticks(lo, hi, Y_TICKS);
        self.y_axis.min = nlo;
        self.y_axis.max = nhi;
    }

    pub fn plot_rect(&self, opts: &RenderOptions) -> RectI32 {
        let left = opts.insets.left as i32;
        let top = opts.insets.top as i32;
        let right = (opts.width - opts.insets.right as i32).max(left + 1);
        let bottom = (opts.height - opts.insets.bottom as i32).max(top + 1);
        RectI32::from_ltrb(left, top, right, bottom)
    }

    pub fn x_scale(&self, opts: &RenderOptions) -> CategoryScale {
        let r = self.plot_rect(opts);
        CategoryScale::new(r.left as f32, r.right as f32, self.category_count())
    }

    pub fn y_scale(&self, opts: &RenderOptions) -> LinearScale {
        let r = self.plot_rect(opts);
        LinearScale::new(r.top as f32, r.bottom as f32, self.y_axis.min, self.y_axis.max)
    }

    /// Number of X categories: the labels, or the longest series when unlabeled.
    fn category_count(&self) -> usize {
        self.series.iter().map(Series::len).chain(std::iter::once(self.labels.len())).max().unwrap_or(0)
    }

    fn label(&self, index: usize) -> String {
        self.labels.get(index).cloned().unwrap_or_else(|| index.to_string())
    }

    /// Label index nearest to an X pixel.
    pub fn index_at(&self, px: f32, opts: &RenderOptions) -> Option<usize> {
        self.x_scale(opts).nearest_index(px)
    }

    /// Every series' value at `index`, skipping gaps.
    pub fn items_at_index(&self, index: usize) -> Vec<TooltipItem> {
        self.series
            .iter()
            .filter_map(|s| {
                s.value(index).map(|value| TooltipItem { index, label: self.label(index), series: s.name.clone(), value })
            })
            .collect()
    }

    /// Items selected by a pointer at `(px, py)` under the chart's interaction settings.
    pub fn hit_test(&self, px: f32, py: f32, opts: &RenderOptions) -> Vec<TooltipItem> {
        let xs = self.x_scale(opts);
        let ys = self.y_scale(opts);
        let near = |item: &TooltipItem| {
            let dx = xs.to_px(item.index) - px;
            let dy = ys.to_px(item.value) - py;
            (dx * dx + dy * dy).sqrt()
        };
        match self.interaction.mode {
            InteractionMode::Index => {
                let Some(index) = xs.nearest_index(px) else { return Vec::new() };
                let items = self.items_at_index(index);
                if self.interaction.intersect && !items.iter().any(|it| near(it) <= HIT_RADIUS) {
                    return Vec::new();
                }
                items
            }
            InteractionMode::Nearest => {
                let best = (0..self.category_count())
                    .flat_map(|i| self.items_at_index(i))
                    .map(|it| (near(&it), it))
                    .min_by(|a, b| a.0.total_cmp(&b.0));
                match best {
                    Some((d, it)) if !self.interaction.intersect || d <= HIT_RADIUS => vec![it],
                    _ => Vec::new(),
                }
            }
        }
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render into an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (opts.width, opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, pixels.as_mut_slice(), row_bytes, (0, 0)) {
            anyhow::bail!("reading back {w}x{h} pixels failed");
        }
        Ok((pixels, w, h, row_bytes))
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            anyhow::bail!("invalid surface size {}x{}", opts.width, opts.height);
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let plot = self.plot_rect(opts);
        let xs = self.x_scale(opts);
        let ys = self.y_scale(opts);
        let shaper = opts.draw_labels.then(TextShaper::new);

        let x_ticks = self.x_tick_indices(&xs, shaper.as_ref());
        let (y_ticks, y_step) = self.y_ticks();

        draw_grid(canvas, plot, &xs, &ys, &x_ticks, &y_ticks, theme);
        if let Some(shaper) = &shaper {
            self.draw_axes(canvas, shaper, plot, &xs, &ys, &x_ticks, &y_ticks, y_step, opts);
        } else {
            draw_axis_lines(canvas, plot, self.x_axis.display, self.y_axis.display, theme);
        }

        for s in &self.series {
            draw_line_series(canvas, plot, &xs, &ys, s, theme);
        }

        if opts.show_tooltip {
            if let Some((cx, cy)) = opts.crosshair {
                let items = self.hit_test(cx, cy, opts);
                if let Some(first) = items.first() {
                    draw_tooltip(canvas, shaper.as_ref(), plot, xs.to_px(first.index), &items, y_step, theme);
                }
            }
        }
    }

    /// Category indices that get a tick label, thinned so labels never overlap.
    fn x_tick_indices(&self, xs: &CategoryScale, shaper: Option<&TextShaper>) -> Vec<usize> {
        let n = self.category_count();
        if n == 0 { return Vec::new(); }
        let widest = match shaper {
            Some(sh) => (0..n).map(|i| sh.measure_width(&self.label(i), TICK_FONT, false)).fold(0.0f32, f32::max),
            None => 10.0 * TICK_FONT * 0.6,
        };
        let step = ((widest + 8.0) / xs.spacing().max(1.0)).ceil().max(1.0) as usize;
        (0..n).step_by(step).collect()
    }

    fn y_ticks(&self) -> (Vec<f64>, f64) {
        let (lo, hi, step) = nice_ticks(self.y_axis.min, self.y_axis.max, Y_TICKS);
        let eps = step * 1e-6;
        let ticks = tick_values(lo, hi, step)
            .into_iter()
            .filter(|v| *v >= self.y_axis.min - eps && *v <= self.y_axis.max + eps)
            .collect();
        (ticks, step)
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_axes(
        &self,
        canvas: &skia::Canvas,
        shaper: &TextShaper,
        plot: RectI32,
        xs: &CategoryScale,
        ys: &LinearScale,
        x_ticks: &[usize],
        y_ticks: &[f64],
        y_step: f64,
        opts: &RenderOptions,
    ) {
        let theme = &opts.theme;
        draw_axis_lines(canvas, plot, self.x_axis.display, self.y_axis.display, theme);
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        if self.x_axis.display {
            for &i in x_ticks {
                shaper.draw_centered(canvas, &self.label(i), xs.to_px(i), b + 18.0, TICK_FONT, theme.tick);
            }
            if self.x_axis.show_title && !self.x_axis.title.is_empty() {
                shaper.draw_centered(canvas, &self.x_axis.title, (l + r) * 0.5, opts.height as f32 - 12.0, TITLE_FONT, theme.axis_label);
            }
        }
        if self.y_axis.display {
            for &v in y_ticks {
                shaper.draw_right(canvas, &format_tick(v, y_step), l - 6.0, ys.to_px(v) + 4.0, TICK_FONT, theme.tick, true);
            }
            if self.y_axis.show_title && !self.y_axis.title.is_empty() {
                shaper.draw_vertical(canvas, &self.y_axis.title, 14.0, (t + b) * 0.5, TITLE_FONT, theme.axis_label);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    xs: &CategoryScale,
    ys: &LinearScale,
    x_ticks: &[usize],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    // verticals
    for &i in x_ticks {
        let x = xs.to_px(i);
        canvas.draw_line((x, t), (x, b), &paint);
    }
    // horizontals
    for &v in y_ticks {
        let y = ys.to_px(v);
        canvas.draw_line((l, y), (r, y), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, plot: RectI32, x: bool, y: bool, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    if x {
        canvas.draw_line((l, b), (r, b), &axis_paint);
    }
    if y {
        canvas.draw_line((l, t), (l, b), &axis_paint);
    }
}

fn draw_line_series(
    canvas: &skia::Canvas,
    plot: RectI32,
    xs: &CategoryScale,
    ys: &LinearScale,
    series: &Series,
    theme: &Theme,
) {
    let color = theme.line_stroke;
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_color(color);

    let mut dot = skia::Paint::default();
    dot.set_anti_alias(true);
    dot.set_style(skia::paint::Style::Fill);
    dot.set_color(color);

    let baseline = ys.to_px(clamp(0.0, ys.vmin, ys.vmax));

    canvas.save();
    canvas.clip_rect(
        skia::Rect::from_ltrb(plot.left as f32, plot.top as f32 - POINT_RADIUS, plot.right as f32 + POINT_RADIUS, plot.bottom as f32),
        skia::ClipOp::Intersect,
        true,
    );
    for seg in series.segments() {
        let pts: Vec<PointF> = seg
            .filter_map(|i| series.value(i).map(|v| PointF::new(xs.to_px(i), ys.to_px(v))))
            .collect();
        if pts.len() >= 2 {
            let mut path = skia::Path::new();
            path.move_to((pts[0].x, pts[0].y));
            if series.tension > 0.0 {
                let cps = spline_control_points(&pts, series.tension, plot);
                for i in 1..pts.len() {
                    let (c1, c2) = (cps[i - 1].next, cps[i].previous);
                    path.cubic_to((c1.x, c1.y), (c2.x, c2.y), (pts[i].x, pts[i].y));
                }
            } else {
                for p in &pts[1..] {
                    path.line_to((p.x, p.y));
                }
            }

            if series.fill {
                let mut area = path.clone();
                let (first, last) = (pts[0], pts[pts.len() - 1]);
                area.line_to((last.x, baseline));
                area.line_to((first.x, baseline));
                area.close();
                let mut fill = skia::Paint::default();
                fill.set_anti_alias(true);
                fill.set_style(skia::paint::Style::Fill);
                fill.set_color(theme.area_fill);
                canvas.draw_path(&area, &fill);
            }
            canvas.draw_path(&path, &stroke);
        }
        for p in &pts {
            canvas.draw_circle((p.x, p.y), POINT_RADIUS, &dot);
        }
    }
    canvas.restore();
}

fn draw_tooltip(
    canvas: &skia::Canvas,
    shaper: Option<&TextShaper>,
    plot: RectI32,
    x: f32,
    items: &[TooltipItem],
    y_step: f64,
    theme: &Theme,
) {
    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_stroke_width(1.0);
    line.set_color(theme.crosshair);
    canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &line);

    let mut rows = Vec::with_capacity(items.len() + 1);
    rows.push(items[0].label.clone());
    for it in items {
        rows.push(format!("{}: {}", it.series, format_tick(it.value, if it.value.fract() == 0.0 { y_step.max(1.0) } else { 0.01 })));
    }
    let row_h = TICK_FONT + 6.0;
    let width = match shaper {
        Some(sh) => rows.iter().map(|r| sh.measure_width(r, TICK_FONT, false)).fold(0.0f32, f32::max),
        None => rows.iter().map(|r| r.chars().count() as f32 * TICK_FONT * 0.6).fold(0.0f32, f32::max),
    } + 16.0;
    let height = rows.len() as f32 * row_h + 8.0;
    let left = if x + 10.0 + width > plot.right as f32 { x - 10.0 - width } else { x + 10.0 };
    let top = plot.top as f32 + 8.0;

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.tooltip_background);
    canvas.draw_round_rect(skia::Rect::from_xywh(left, top, width, height), 4.0, 4.0, &bg);

    if let Some(sh) = shaper {
        for (i, row) in rows.iter().enumerate() {
            sh.draw_left(canvas, row, left + 8.0, top + 4.0 + row_h * (i as f32 + 1.0) - 4.0, TICK_FONT, theme.tooltip_text, false);
        }
    }
}
