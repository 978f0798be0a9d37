// File: crates/history-charts/src/lib.rs
// Summary: History chart renderer: load dated statistics, project each field, draw one line chart per field.

pub mod backend;
pub mod config;
pub mod error;
pub mod extract;
pub mod factory;
pub mod loader;
pub mod model;
pub mod renderer;
pub mod surface;

pub use backend::{RenderedChart, SkiaBackend};
pub use config::RendererConfig;
pub use error::{ConfigError, LoadError, RenderError};
pub use extract::{coerce_number, extract_series, Series};
pub use factory::{create_line_chart, line_chart_config, ChartBackend, LineChartConfig};
pub use loader::{DataLocation, DefaultFetcher, Fetch, HistoryLoader};
pub use model::{Field, HistoryDataset, HistoryRecord};
pub use renderer::{draw_charts, render_charts, HistoryChartRenderer, RenderState};
pub use surface::{DrawingSurface, SurfaceSet};
