// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: one GET (or file read) at startup, no retries.
//!
//! The corpus is a JSON array of [`CorpusDocument`]s. On wasm32 `reqwest`
//! goes through the browser's `fetch`, so the same code serves the page and
//! the CLI.

use crate::error::LoadError;
use crate::types::CorpusDocument;
use std::path::{Path, PathBuf};
use url::Url;

/// Where to read the corpus from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    Url(Url),
    Path(PathBuf),
}

impl CorpusSource {
    /// Interpret `location` as an absolute URL, a URL relative to `base`,
    /// or (with no base) a filesystem path.
    pub fn resolve(location: &str, base: Option<&Url>) -> Result<Self, LoadError> {
        if let Ok(url) = Url::parse(location) {
            if matches!(url.scheme(), "http" | "https") {
                return Ok(CorpusSource::Url(url));
            }
        }
        match base {
            Some(base) => base
                .join(location)
                .map(CorpusSource::Url)
                .map_err(|source| LoadError::InvalidUrl {
                    url: location.to_string(),
                    source,
                }),
            None => Ok(CorpusSource::Path(PathBuf::from(location))),
        }
    }
}

impl std::fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusSource::Url(url) => write!(f, "{}", url),
            CorpusSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a serialized corpus.
pub fn parse_corpus(text: &str) -> Result<Vec<CorpusDocument>, LoadError> {
    Ok(serde_json::from_str(text)?)
}

/// GET the corpus. Any non-2xx status is a failure.
pub async fn fetch_corpus(url: &Url) -> Result<Vec<CorpusDocument>, LoadError> {
    let response = reqwest::get(url.clone()).await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
            body,
        });
    }
    parse_corpus(&body)
}

#[cfg(feature = "tokio")]
async fn read_file(path: &Path) -> std::io::Result<String> {
    tokio::fs::read_to_string(path).await
}

/// No async runtime without the CLI; the read blocks.
#[cfg(not(feature = "tokio"))]
async fn read_file(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Load the corpus from `source`, logging the outcome.
pub async fn load(source: &CorpusSource) -> Result<Vec<CorpusDocument>, LoadError> {
    let result = match source {
        CorpusSource::Url(url) => fetch_corpus(url).await,
        CorpusSource::Path(path) => read_file(path)
            .await
            .map_err(LoadError::from)
            .and_then(|text| parse_corpus(&text)),
    };
    match &result {
        Ok(docs) => tracing::info!(%source, docs = docs.len(), "corpus loaded"),
        Err(error) => tracing::warn!(%source, %error, "corpus load failed"),
    }
    result
}
