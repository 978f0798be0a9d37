// File: crates/history-charts/src/renderer.rs
// Summary: One-shot render pass: load history, then draw one line chart per field.

use tracing::{debug, info, warn};

use crate::error::RenderError;
use crate::extract::extract_series;
use crate::factory::{create_line_chart, ChartBackend};
use crate::loader::{DefaultFetcher, Fetch, HistoryLoader};
use crate::model::{Field, HistoryDataset};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    /// Waiting for the ready signal.
    Pending,
    Rendered { charts: usize },
    /// The history was empty or could not be loaded; nothing was drawn.
    Skipped,
    /// A chart could not be constructed; later charts were not attempted.
    /// Charts drawn before the failure stay in place.
    Failed,
}

impl RenderState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RenderState::Pending)
    }
}

/// Draw every field of a non-empty dataset, in [`Field::ALL`] order. Stops at
/// the first failure.
pub fn draw_charts<B: ChartBackend>(history: &HistoryDataset, backend: &mut B) -> Result<Vec<B::Handle>, RenderError> {
    let mut handles = Vec::with_capacity(Field::ALL.len());
    draw_into(history, backend, &mut handles)?;
    Ok(handles)
}

/// Pushes each drawn chart as it completes, so `handles` holds the charts
/// drawn before a failure.
fn draw_into<B: ChartBackend>(
    history: &HistoryDataset,
    backend: &mut B,
    handles: &mut Vec<B::Handle>,
) -> Result<(), RenderError> {
    let labels = history.labels();
    for field in Field::ALL {
        let series = extract_series(history, field);
        handles.push(create_line_chart(backend, field.surface_id(), &labels, field.label(), series)?);
    }
    Ok(())
}

/// Load the history and draw its charts. An empty or unloadable history
/// draws nothing and is not an error.
pub async fn render_charts<F: Fetch, B: ChartBackend>(
    loader: &HistoryLoader<F>,
    backend: &mut B,
) -> Result<Vec<B::Handle>, RenderError> {
    let history = loader.load().await;
    if history.is_empty() {
        debug!("history is empty, no charts drawn");
        return Ok(Vec::new());
    }
    draw_charts(&history, backend)
}

/// Owns one render pass and its lifecycle: `Pending` until [`on_ready`]
/// runs, then terminal.
///
/// [`on_ready`]: HistoryChartRenderer::on_ready
pub struct HistoryChartRenderer<B: ChartBackend, F = DefaultFetcher> {
    loader: HistoryLoader<F>,
    backend: B,
    state: RenderState,
    charts: Vec<B::Handle>,
}

impl<B: ChartBackend, F: Fetch> HistoryChartRenderer<B, F> {
    pub fn new(loader: HistoryLoader<F>, backend: B) -> Self {
        Self { loader, backend, state: RenderState::Pending, charts: Vec::new() }
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Handles of the charts drawn by the pass. After a failure these are the
    /// charts drawn before it.
    pub fn charts(&self) -> &[B::Handle] {
        &self.charts
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Run the render pass. Only the first call does any work; later calls
    /// return the terminal state.
    pub async fn on_ready(&mut self) -> Result<RenderState, RenderError> {
        if self.state.is_terminal() {
            debug!(state = ?self.state, "render pass already ran");
            return Ok(self.state);
        }

        let history = self.loader.load().await;
        if history.is_empty() {
            self.state = RenderState::Skipped;
            debug!("history is empty, no charts drawn");
            return Ok(self.state);
        }

        let result = draw_into(&history, &mut self.backend, &mut self.charts);
        match result {
            Ok(()) => {
                info!(charts = self.charts.len(), records = history.len(), "charts rendered");
                self.state = RenderState::Rendered { charts: self.charts.len() };
                Ok(self.state)
            }
            Err(err) => {
                warn!(drawn = self.charts.len(), error = %err, "render pass aborted");
                self.state = RenderState::Failed;
                Err(err)
            }
        }
    }
}
