// File: crates/history-charts/src/loader.rs
// Summary: Resolves and fetches the history document, parses it and orders it by date.

use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, error, warn};
use url::Url;

use crate::error::LoadError;
use crate::model::{HistoryDataset, HistoryRecord};

/// Data file location relative to the hosting page.
pub const DEFAULT_DATA_PATH: &str = "../data/history.json";
/// Hosting page used when none is configured.
pub const DEFAULT_PAGE: &str = "web/index.html";

/// Absolute location of the history document, resolved against the page the
/// way a browser resolves a relative link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataLocation {
    url: Url,
}

impl DataLocation {
    /// Resolve `relative` against `page`, which is either a URL or a local
    /// path (a directory when it exists as one or ends with a separator).
    pub fn resolve(page: &str, relative: &str) -> Result<Self, LoadError> {
        let base = page_url(page)?;
        if base.cannot_be_a_base() {
            return Err(LoadError::NotABase(page.to_string()));
        }
        let url = base
            .join(relative)
            .map_err(|source| LoadError::InvalidLocation { location: relative.to_string(), source })?;
        Ok(Self { url })
    }

    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

fn page_url(page: &str) -> Result<Url, LoadError> {
    match Url::parse(page) {
        // Single-letter schemes are Windows drive letters, not URLs.
        Ok(url) if url.scheme().len() > 1 => Ok(url),
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => file_url(page),
        Err(source) => Err(LoadError::InvalidLocation { location: page.to_string(), source }),
    }
}

fn file_url(page: &str) -> Result<Url, LoadError> {
    let invalid = || LoadError::InvalidPath(page.to_string());
    let path = std::path::absolute(Path::new(page)).map_err(|_| invalid())?;
    let is_dir = page.ends_with('/') || page.ends_with(std::path::MAIN_SEPARATOR) || path.is_dir();
    if is_dir {
        Url::from_directory_path(&path).map_err(|_| invalid())
    } else {
        Url::from_file_path(&path).map_err(|_| invalid())
    }
}

/// Retrieves the raw bytes behind a URL.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError>;
}

/// Reads `file://` URLs from disk and `http(s)://` URLs over the network.
/// No timeout is applied.
#[derive(Clone, Debug, Default)]
pub struct DefaultFetcher {
    client: reqwest::Client,
}

impl DefaultFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Fetch for DefaultFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, LoadError> {
        match url.scheme() {
            "file" => {
                let path = url.to_file_path().map_err(|_| LoadError::InvalidPath(url.to_string()))?;
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| LoadError::Io { path: path.display().to_string(), source })
            }
            "http" | "https" => {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status { url: url.to_string(), status: status.as_u16() });
                }
                Ok(response.bytes().await?.to_vec())
            }
            other => Err(LoadError::UnsupportedScheme(other.to_string())),
        }
    }
}

pub struct HistoryLoader<F = DefaultFetcher> {
    location: DataLocation,
    fetcher: F,
}

impl HistoryLoader<DefaultFetcher> {
    pub fn new(location: DataLocation) -> Self {
        Self { location, fetcher: DefaultFetcher::default() }
    }
}

impl<F: Fetch> HistoryLoader<F> {
    pub fn with_fetcher(location: DataLocation, fetcher: F) -> Self {
        Self { location, fetcher }
    }

    /// Fetch, parse and order the history document.
    #[tracing::instrument(skip(self), fields(url = %self.location.url()))]
    pub async fn try_load(&self) -> Result<HistoryDataset, LoadError> {
        let bytes = self.fetcher.fetch(self.location.url()).await?;
        let records: Vec<HistoryRecord> = serde_json::from_slice(&bytes)?;
        for record in records.iter().filter(|r| r.calendar_date().is_none()) {
            warn!(date = %record.date, "date is not YYYY-MM-DD; ordered as plain text");
        }
        let dataset = HistoryDataset::from_records(records);
        debug!(records = dataset.len(), "history loaded");
        Ok(dataset)
    }

    /// Like [`try_load`](Self::try_load), but any failure is logged and
    /// yields an empty dataset.
    pub async fn load(&self) -> HistoryDataset {
        match self.try_load().await {
            Ok(dataset) => dataset,
            Err(err) => {
                error!(url = %self.location.url(), error = ?err, "failed to load history data");
                HistoryDataset::empty()
            }
        }
    }
}
