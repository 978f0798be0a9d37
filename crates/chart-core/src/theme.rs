// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub crosshair: skia::Color,
    pub line_stroke: skia::Color,
    pub area_fill: skia::Color,
    pub tooltip_background: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            crosshair: skia::Color::from_argb(255, 30, 120, 240),
            line_stroke: skia::Color::from_argb(255, 54, 162, 235),
            area_fill: skia::Color::from_argb(64, 54, 162, 235),
            tooltip_background: skia::Color::from_argb(204, 0, 0, 0),
            tooltip_text: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            crosshair: skia::Color::from_argb(255, 255, 230, 70),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            area_fill: skia::Color::from_argb(96, 64, 160, 255),
            tooltip_background: skia::Color::from_argb(230, 50, 50, 58),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            tick: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            crosshair: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
            line_stroke: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            area_fill: skia::Color::from_argb(120, 0x00, 0xaa, 0xff),
            tooltip_background: skia::Color::from_argb(255, 0x22, 0x22, 0x22),
            tooltip_text: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
