// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use fastsearch::{
    loader, CorpusDocument, CorpusSource, Key, MatchResult, MemoryView, SearchController,
    WidgetConfig,
};

mod cli;
use cli::display::{
    focus_label, row, score_value, section_bot, section_top, snippet_line, themed, truncate,
    BOX_WIDTH, BOLD, GRAY, GREEN, RED,
};
use cli::{Cli, Commands};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // RUST_LOG=fastsearch=debug shows resolved options and hit counts
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            index,
            query,
            config,
            limit,
            html,
        } => run_search(&index, &query, config.as_deref(), limit, html).await,
        Commands::Inspect { index } => run_inspect(&index).await,
        Commands::Navigate {
            index,
            query,
            keys,
            config,
        } => run_navigate(&index, &query, &keys, config.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<WidgetConfig> {
    match path {
        Some(path) => WidgetConfig::load(Path::new(path))
            .with_context(|| format!("Failed to read config {}", path)),
        None => Ok(WidgetConfig::default()),
    }
}

async fn load_corpus(index: &str) -> Result<Vec<CorpusDocument>> {
    let source = CorpusSource::resolve(index, None)?;
    loader::load(&source)
        .await
        .with_context(|| format!("Failed to load corpus from {}", source))
}

/// A headless widget over `index`, configured the way the page would be.
async fn widget(index: &str, config: Option<&str>) -> Result<SearchController<MemoryView>> {
    let config = load_config(config)?;
    let corpus = load_corpus(index).await?;
    let mut controller: SearchController<MemoryView> = SearchController::new(MemoryView::new());
    controller.init(corpus, config.fuse_opts.as_ref());
    Ok(controller)
}

async fn run_search(
    index: &str,
    query: &str,
    config: Option<&str>,
    limit: usize,
    html: bool,
) -> Result<()> {
    let mut controller = widget(index, config).await?;
    controller.view_mut().input = query.to_string();
    let results = controller.on_input(query);

    if html {
        for entry in controller.view().entries.iter().take(limit) {
            println!("{}", entry.to_html());
        }
        return Ok(());
    }

    section_top(&format!("RESULTS FOR \"{}\"", query.trim()));
    if results.is_empty() {
        row(&format!("  {}", themed(GRAY, &[], "no matches")));
    }
    for (i, (entry, result)) in controller
        .view()
        .entries
        .iter()
        .zip(&results)
        .take(limit)
        .enumerate()
    {
        print_entry(i, &entry.title, &entry.permalink, result);
        for snippet in &entry.snippets {
            row(&format!("      {}", truncate_line(&snippet_line(snippet))));
        }
    }
    if results.len() > limit {
        row(&format!(
            "  {}",
            themed(GRAY, &[], &format!("… {} more", results.len() - limit))
        ));
    }
    section_bot();
    Ok(())
}

fn print_entry(i: usize, title: &str, permalink: &str, result: &MatchResult) {
    let fields: Vec<&str> = result.matches.iter().map(|m| m.key.as_str()).collect();
    row(&format!(
        "  {:>2}. {}  {}",
        i + 1,
        score_value(result.score),
        themed(GREEN, &[BOLD], &truncate(title, 50))
    ));
    row(&format!(
        "      {}  {}",
        themed(GRAY, &[], &truncate(permalink, 40)),
        themed(GRAY, &[], &fields.join(","))
    ));
}

/// Snippets can run past the box; colored ones are left alone.
fn truncate_line(line: &str) -> String {
    if line.contains('\x1b') {
        line.to_string()
    } else {
        truncate(line, BOX_WIDTH - 8)
    }
}

async fn run_inspect(index: &str) -> Result<()> {
    let corpus = load_corpus(index).await?;

    let count = |key: &str| {
        corpus
            .iter()
            .filter(|d| d.field(key).is_some_and(|v| !v.is_empty()))
            .count()
    };
    let content_chars: usize = corpus.iter().map(|d| d.content.chars().count()).sum();

    section_top("CORPUS");
    row(&format!("  Source:      {}", index));
    row(&format!("  Documents:   {}", corpus.len()));
    row(&format!("  {}", themed(GRAY, &[], "non-empty fields")));
    for key in ["title", "permalink", "summary", "content"] {
        row(&format!("  {:<13}{}", format!("{}:", key), count(key)));
    }
    row(&format!("  Content:     {} chars", content_chars));
    if !corpus.is_empty() {
        row(&format!("  Avg content: {} chars", content_chars / corpus.len()));
    }
    section_bot();
    Ok(())
}

async fn run_navigate(
    index: &str,
    query: &str,
    keys: &[String],
    config: Option<&str>,
) -> Result<()> {
    let mut controller = widget(index, config).await?;
    controller.view_mut().input = query.to_string();
    let results = controller.on_input(query);

    section_top(&format!("NAVIGATE \"{}\"", query.trim()));
    row(&format!("  {} results", results.len()));
    row(&format!("  start        {}", focus_label(controller.focus())));

    for name in keys {
        let key: Key = name.parse().unwrap_or(Key::Other);
        let visited = controller.view().visited.len();
        let shown = controller.view().entries.len();
        let prevented = controller.on_keydown(key);

        let view = controller.view();
        let effect = if view.visited.len() > visited {
            let target = view.visited.last().map(String::as_str).unwrap_or_default();
            format!("  → open {}", target)
        } else if shown > 0 && view.entries.is_empty() {
            themed(GRAY, &[], "  (cleared)")
        } else {
            String::new()
        };
        row(&format!(
            "  {:<12} {}{}{}",
            name,
            focus_label(controller.focus()),
            effect,
            if prevented {
                themed(GRAY, &[], "  (default prevented)")
            } else {
                String::new()
            }
        ));
    }

    section_bot();
    Ok(())
}
