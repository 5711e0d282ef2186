// SPDX-License-Identifier: GPL-3.0-only

use thiserror::Error;

/// Errors talking to the remote API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Url of the request that failed, if any
    pub fn url(&self) -> Option<&str> {
        match self {
            ApiError::Request { url, .. }
            | ApiError::Status { url, .. }
            | ApiError::Decode { url, .. } => Some(url),
            ApiError::Client(_) => None,
        }
    }
}

/// Errors writing the favorites slot
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("could not serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("could not write favorites: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("no config directory available on this platform")]
    NoConfigDir,
}

/// Errors reading or writing the catalog snapshot
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("no catalog snapshot found at {0}")]
    NotFound(String),

    #[error("catalog snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse catalog snapshot: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("could not serialize catalog snapshot: {0}")]
    Serialize(#[from] ron::Error),
}
