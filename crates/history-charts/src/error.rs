// File: crates/history-charts/src/error.rs
// Summary: Error taxonomy for loading history data, rendering charts and reading configuration.

use thiserror::Error;

/// Failure to obtain the history document. Recovered by [`crate::HistoryLoader::load`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid data location '{location}'")]
    InvalidLocation {
        location: String,
        #[source]
        source: url::ParseError,
    },

    #[error("page location '{0}' cannot be used as a base for relative paths")]
    NotABase(String),

    #[error("'{0}' is not a usable file path")]
    InvalidPath(String),

    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to send the request")]
    Http(#[from] reqwest::Error),

    #[error("request for {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("history document is not a valid JSON array of records")]
    Json(#[from] serde_json::Error),
}

/// Failure to construct a chart. Propagates out of the render pass.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no drawing surface with id '{0}'")]
    MissingSurface(String),

    #[error("failed to draw chart on '{surface}'")]
    Draw {
        surface: String,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
