// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Matcher options and widget configuration.
//!
//! Options arrive as a loosely-typed object from the page (`params.fuseOpts`)
//! with lower-case field names, every field optional. Resolution has two
//! regimes:
//!
//! | Caller supplies          | Result                                        |
//! |--------------------------|-----------------------------------------------|
//! | no options object        | [`MatchOptions::strict`] (exact, content only) |
//! | an object (even `{}`)    | each absent field falls back individually      |
//!
//! The strict default is deliberately narrower than the per-field defaults:
//! a site that never configured search gets exact matches over page bodies.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the corpus lives relative to the search page.
pub const DEFAULT_INDEX_URL: &str = "../index.json";

/// Externally supplied matcher options. Field names match the site params.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMatchOptions {
    #[serde(alias = "isCaseSensitive")]
    pub iscasesensitive: Option<bool>,
    #[serde(alias = "includeScore")]
    pub includescore: Option<bool>,
    #[serde(alias = "includeMatches")]
    pub includematches: Option<bool>,
    #[serde(alias = "minMatchCharLength")]
    pub minmatchcharlength: Option<usize>,
    #[serde(alias = "shouldSort")]
    pub shouldsort: Option<bool>,
    #[serde(alias = "findAllMatches")]
    pub findallmatches: Option<bool>,
    pub keys: Option<Vec<String>>,
    pub location: Option<usize>,
    pub threshold: Option<f64>,
    pub distance: Option<usize>,
    #[serde(alias = "ignoreLocation")]
    pub ignorelocation: Option<bool>,
}

/// Fully resolved matcher configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// Compare without case folding
    pub is_case_sensitive: bool,
    /// Populate `MatchResult::score`
    pub include_score: bool,
    /// Populate `MatchResult::matches`
    pub include_matches: bool,
    /// Spans shorter than this are not reported
    pub min_match_char_length: usize,
    /// Sort results best-first
    pub should_sort: bool,
    /// Keep scanning a field after the first approximate hit
    pub find_all_matches: bool,
    /// Fields to search, in reporting order
    pub keys: Vec<String>,
    /// Expected match position (only used when `ignore_location` is false)
    pub location: usize,
    /// 0.0 = exact only, 1.0 = match anything
    pub threshold: f64,
    /// How far from `location` a match may drift before it scores 1.0
    pub distance: usize,
    /// Disable position-proximity weighting
    pub ignore_location: bool,
}

impl Default for MatchOptions {
    /// Per-field fallbacks used when an options object is present.
    fn default() -> Self {
        Self {
            is_case_sensitive: false,
            include_score: false,
            include_matches: false,
            min_match_char_length: 0,
            should_sort: true,
            find_all_matches: false,
            keys: ["title", "permalink", "summary", "content"]
                .iter()
                .map(|k| k.to_string())
                .collect(),
            location: 0,
            threshold: 0.4,
            distance: 100,
            ignore_location: true,
        }
    }
}

impl MatchOptions {
    /// The built-in configuration used when no options object is supplied.
    ///
    /// Exact matching over `content` only. Spans are always included so the
    /// highlighter has something to work with.
    pub fn strict() -> Self {
        Self {
            include_score: true,
            include_matches: true,
            keys: vec!["content".to_string()],
            threshold: 0.0,
            distance: 100,
            ignore_location: true,
            ..Self::default()
        }
    }

    /// Resolve user options: user wins key-by-key, `None` means strict.
    pub fn resolve(raw: Option<&RawMatchOptions>) -> Self {
        let Some(raw) = raw else {
            return Self::strict();
        };
        let base = Self::default();
        Self {
            is_case_sensitive: raw.iscasesensitive.unwrap_or(base.is_case_sensitive),
            include_score: raw.includescore.unwrap_or(base.include_score),
            include_matches: raw.includematches.unwrap_or(base.include_matches),
            min_match_char_length: raw
                .minmatchcharlength
                .unwrap_or(base.min_match_char_length),
            should_sort: raw.shouldsort.unwrap_or(base.should_sort),
            find_all_matches: raw.findallmatches.unwrap_or(base.find_all_matches),
            keys: raw.keys.clone().unwrap_or(base.keys),
            location: raw.location.unwrap_or(base.location),
            threshold: raw
                .threshold
                .filter(|t| t.is_finite())
                .unwrap_or(base.threshold)
                .clamp(0.0, 1.0),
            distance: raw.distance.unwrap_or(base.distance),
            ignore_location: raw.ignorelocation.unwrap_or(base.ignore_location),
        }
    }
}

/// Everything the widget needs from the page besides its mount points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Corpus location, resolved against the page URL when relative
    pub index_url: String,
    /// Matcher options; `None` selects the strict default
    #[serde(alias = "fuseopts")]
    pub fuse_opts: Option<RawMatchOptions>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            fuse_opts: None,
        }
    }
}

/// Hugo-style site config: only `[params]` is read.
#[cfg(feature = "toml")]
#[derive(Deserialize, Default)]
struct SiteConfig {
    #[serde(default)]
    params: WidgetConfig,
}

impl WidgetConfig {
    /// Parse page params as emitted into the page (`{"fuseOpts": {...}}`).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a site config, reading `[params]` / `[params.fuseOpts]`.
    #[cfg(feature = "toml")]
    pub fn from_site_toml(text: &str) -> Result<Self, ConfigError> {
        let site: SiteConfig = toml::from_str(text)?;
        Ok(site.params)
    }

    /// Load from a `.json` or `.toml` file, chosen by extension.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_site_toml(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::resolve(self.fuse_opts.as_ref())
    }
}
