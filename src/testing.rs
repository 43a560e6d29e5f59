//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{CorpusDocument, FieldMatch, MatchResult};

/// Create a document with a title and body. The permalink is derived from
/// the title (`"Hello World"` -> `/hello-world/`).
pub fn make_doc(title: &str, content: &str) -> CorpusDocument {
    CorpusDocument {
        title: title.to_string(),
        permalink: format!("/{}/", title.to_lowercase().replace(' ', "-")),
        summary: String::new(),
        content: content.to_string(),
    }
}

/// Create a match result with a single field match over `doc`'s `key` field.
pub fn make_match(doc: CorpusDocument, key: &str, spans: &[(usize, usize)]) -> MatchResult {
    let value = doc.field(key).unwrap_or_default().to_string();
    MatchResult {
        item: doc,
        ref_index: 0,
        score: Some(0.0),
        matches: vec![FieldMatch {
            key: key.to_string(),
            value,
            indices: spans.to_vec(),
        }],
    }
}

/// A small blog-like corpus used by integration tests and the benchmark.
pub fn sample_corpus() -> Vec<CorpusDocument> {
    vec![
        CorpusDocument {
            title: "Getting started with Rust".into(),
            permalink: "/posts/getting-started-with-rust/".into(),
            summary: "Installing the toolchain and writing a first program".into(),
            content: "Rust is a systems programming language. Install it with rustup, \
                      then create a project with cargo new and run it with cargo run."
                .into(),
        },
        CorpusDocument {
            title: "Photography notes".into(),
            permalink: "/posts/photography-notes/".into(),
            summary: "Lenses, light and patience".into(),
            content: "Good photography is mostly about light. A fast prime lens helps \
                      in low light, but patience helps more."
                .into(),
        },
        CorpusDocument {
            title: "Hiking the ridge".into(),
            permalink: "/posts/hiking-the-ridge/".into(),
            summary: "A long day above the tree line".into(),
            content: "We started before sunrise and reached the ridge by noon. The light \
                      on the granite was worth every step."
                .into(),
        },
    ]
}
