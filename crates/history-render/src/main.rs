// File: crates/history-render/src/main.rs
// Summary: Loads the stats history next to the hosting page and renders one PNG chart per field.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use history_charts::{HistoryChartRenderer, HistoryLoader, RenderState, RendererConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render follower/article/like/view history charts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML config file; command-line flags override its values
    #[arg(short, long, env = "HISTORY_RENDER_CONFIG")]
    config: Option<PathBuf>,

    /// URL or path of the hosting page the data location is resolved against
    #[arg(long)]
    page: Option<String>,

    /// History document location relative to the page
    #[arg(long)]
    data: Option<String>,

    /// Output directory for the chart PNGs
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    /// Theme preset: light, dark, high-contrast-dark
    #[arg(long)]
    theme: Option<String>,

    /// Skip tick labels and axis titles
    #[arg(long)]
    no_labels: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Result<RendererConfig> {
        let mut cfg = match &self.config {
            Some(path) => RendererConfig::load(path)?,
            None => RendererConfig::default(),
        };
        if let Some(page) = self.page { cfg.page = page; }
        if let Some(data) = self.data { cfg.data = data; }
        if let Some(out) = self.out { cfg.output_dir = out; }
        if let Some(width) = self.width { cfg.width = width; }
        if let Some(height) = self.height { cfg.height = height; }
        if let Some(theme) = self.theme { cfg.theme = theme; }
        if self.no_labels { cfg.draw_labels = false; }
        Ok(cfg)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let cfg = args.into_config()?;
    let location = cfg
        .data_location()
        .with_context(|| format!("cannot resolve '{}' against page '{}'", cfg.data, cfg.page))?;
    info!(url = %location.url(), out = %cfg.output_dir.display(), "rendering history charts");

    let mut renderer = HistoryChartRenderer::new(HistoryLoader::new(location), cfg.backend());
    match renderer.on_ready().await? {
        RenderState::Rendered { charts } => {
            for chart in renderer.charts() {
                println!("Wrote {}", chart.surface.path.display());
            }
            info!(charts, "done");
        }
        state => info!(?state, "no charts rendered"),
    }
    Ok(())
}
