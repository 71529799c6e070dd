// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::error::Error;
use std::path::Path;

use glimmer::{render, SearchConfig, SearchEngine, SearchIndex, SearchOutcome};

mod cli;
use cli::display::*;
use cli::{log_level, Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            config,
            limit,
            format,
        } => run_search(&index, &query, config.as_deref(), limit, format),
        Commands::Inspect { index } => run_inspect(&index),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_search(
    index: &Path,
    query: &str,
    config: Option<&Path>,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let mut config = match config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    if limit.is_some() {
        config.limit = limit;
    }

    let mut engine = SearchEngine::new(config);
    engine.load_path(index)?;
    let outcome = engine.confirm(query);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Html => println!("{}", render(&outcome).html),
        OutputFormat::Text => print_outcome(&outcome, engine.config()),
    }
    Ok(())
}

fn print_outcome(outcome: &SearchOutcome, config: &SearchConfig) {
    match outcome {
        SearchOutcome::Cleared => println!("{}", themed(GRAY, &[DIM], "(empty query)")),
        SearchOutcome::Hint { message } => println!("{}", themed(YELLOW, &[], message)),
        SearchOutcome::Results {
            query,
            results,
            announcement,
        } => {
            banner(&format!("\"{}\": {}", truncate(query, 40), announcement));
            if results.is_empty() {
                return;
            }
            let (open, close) = (&config.highlight.open_tag, &config.highlight.close_tag);
            for (i, result) in results.iter().enumerate() {
                let header = format!("#{} {}", i + 1, result.href);
                section_top(&truncate(&header, BOX_WIDTH - 6));
                row(&format!(
                    " {} {} {}",
                    score_value(result.score),
                    pad_right(&location_label(result.location.as_str()), 8),
                    marks_to_ansi(&result.title_html, open, close)
                ));
                if let Some(excerpt) = &result.excerpt_html {
                    section_mid("excerpt");
                    for line in wrap(excerpt, BOX_WIDTH - 2) {
                        row(&format!(" {}", marks_to_ansi(&line, open, close)));
                    }
                }
                section_bot();
            }
        }
    }
}

/// Greedy word wrap on plain visible width. Markers count toward the width,
/// which only makes lines a little short.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

fn run_inspect(path: &Path) -> Result<(), Box<dyn Error>> {
    let index = SearchIndex::from_path(path)?;

    let title_chars: usize = index.documents().map(|d| d.title.chars().count()).sum();
    let content_chars: usize = index.documents().map(|d| d.content.chars().count()).sum();
    let empty_titles: Vec<&str> = index
        .documents()
        .filter(|d| d.title.trim().is_empty())
        .map(|d| d.url.as_str())
        .collect();
    let empty_content: Vec<&str> = index
        .documents()
        .filter(|d| d.content.trim().is_empty())
        .map(|d| d.url.as_str())
        .collect();

    banner(&path.display().to_string());
    section_top("DOCUMENTS");
    row(&format!(" {:<20}{}", "count", index.len()));
    row(&format!(" {:<20}{}", "title chars", title_chars));
    row(&format!(" {:<20}{}", "content chars", content_chars));
    row(&format!(
        " {:<20}{}",
        "empty titles",
        count_value(empty_titles.len(), true)
    ));
    row(&format!(
        " {:<20}{}",
        "empty content",
        count_value(empty_content.len(), false)
    ));

    if !empty_titles.is_empty() {
        section_mid("EMPTY TITLES");
        for url in &empty_titles {
            row(&format!(" {}", truncate(url, BOX_WIDTH - 2)));
        }
    }
    if !empty_content.is_empty() {
        section_mid("EMPTY CONTENT (previews as \"...\")");
        for url in &empty_content {
            row(&format!(" {}", truncate(url, BOX_WIDTH - 2)));
        }
    }
    section_bot();
    Ok(())
}
