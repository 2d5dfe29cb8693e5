//! vimwords — dump Vim builtin keywords as a lisp assoc list.
//!
//! Reads `syntax/vim.vim` and collects every command, option and autocmd
//! event together with its shortest accepted abbreviation:
//!
//! `vimwords -v 9.0 -o vim-builtins.txt`
//! `vimwords -f runtime/syntax/vim.vim --format json -o builtins.json`

mod config;
mod lookup;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = config::Config::from_cli(config::Cli::parse());
    run(&config)
}

/// Read the syntax file, extract keywords and write the rendered output.
///
/// The input is read completely before the output is touched, so a missing
/// input never leaves a fresh or truncated output file behind.
fn run(config: &config::Config) -> Result<()> {
    let renderer = render::create_renderer(&config.format)?;

    log::debug!("reading {}", config.input.display());
    let input = fs::read_to_string(&config.input)
        .with_context(|| format!("failed to read {}", config.input.display()))?;

    let keywords = parser::parse(&input);
    for (category, entries) in keywords.buckets() {
        log::debug!("{}: {} keywords", category.name(), entries.len());
    }

    fs::write(&config.output, renderer.render(&keywords))
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    if config.verify {
        verify(&keywords)?;
    }

    Ok(())
}

/// Check every entry resolves back to its own keyword within its bucket.
fn verify(keywords: &model::Keywords) -> Result<()> {
    let mut failures = 0;
    for (category, entries) in keywords.buckets() {
        for entry in lookup::ambiguous(entries) {
            log::warn!(
                "{}: \"{}\" does not resolve to \"{}\"",
                category.name(),
                entry.short,
                entry.full
            );
            failures += 1;
        }
    }
    if failures > 0 {
        anyhow::bail!("{} ambiguous abbreviation(s)", failures);
    }
    Ok(())
}
