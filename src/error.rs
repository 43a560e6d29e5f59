// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only the loader and the config reader can fail. Everything downstream of a
//! loaded corpus degrades to "no results" or "no-op" instead of erroring.

use thiserror::Error;

/// Why the corpus could not be loaded. All variants leave the engine not ready.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch corpus: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("corpus request returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed corpus payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid corpus URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Why a configuration file could not be read.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "toml")]
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(String),
}
