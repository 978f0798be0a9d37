// File: crates/history-charts/tests/common/mod.rs
// Purpose: Shared test doubles: an in-memory fetcher and a backend that records calls.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use history_charts::{ChartBackend, DataLocation, Fetch, HistoryLoader, LineChartConfig, LoadError, RenderError};
use url::Url;

pub enum Reply {
    Body(&'static str),
    Status(u16),
    Unreachable,
}

pub struct StubFetcher {
    reply: Reply,
    pub calls: Arc<AtomicUsize>,
}

impl StubFetcher {
    pub fn new(reply: Reply) -> Self {
        Self { reply, calls: Arc::new(AtomicUsize::new(0)) }
    }
}

#[async_trait]
impl Fetch for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            Reply::Body(body) => Ok(body.as_bytes().to_vec()),
            Reply::Status(status) => Err(LoadError::Status { url: url.to_string(), status }),
            Reply::Unreachable => Err(LoadError::Io {
                path: url.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
            }),
        }
    }
}

pub fn stub_loader(reply: Reply) -> (HistoryLoader<StubFetcher>, Arc<AtomicUsize>) {
    let fetcher = StubFetcher::new(reply);
    let calls = fetcher.calls.clone();
    let location = DataLocation::from_url(Url::parse("https://example.com/data/history.json").unwrap());
    (HistoryLoader::with_fetcher(location, fetcher), calls)
}

/// Records every construction; fails on the surfaces listed in `fail_on`.
#[derive(Default)]
pub struct RecordingBackend {
    pub calls: Vec<(String, LineChartConfig)>,
    pub fail_on: Vec<String>,
}

impl ChartBackend for RecordingBackend {
    type Handle = String;

    fn construct(&mut self, surface_id: &str, config: LineChartConfig) -> Result<String, RenderError> {
        self.calls.push((surface_id.to_string(), config));
        if self.fail_on.iter().any(|s| s == surface_id) {
            return Err(RenderError::MissingSurface(surface_id.to_string()));
        }
        Ok(surface_id.to_string())
    }
}
