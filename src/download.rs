use std::path::PathBuf;

use anyhow::{Context, Result};
use reqwest::{blocking::Client, header};
use tracing::info;

use crate::{config::Config, error::Error, markdown, puzzle::PuzzleId, scaffold};

const USER_AGENT: &str = concat!("aoc-workbench/", env!("CARGO_PKG_VERSION"));

fn fetch(config: &Config, url: &str, what: &str, id: PuzzleId) -> Result<String> {
    let cookie = config.cookie().ok_or(Error::NoSession)?;
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client.")?;
    let response = client
        .get(url)
        .header(header::COOKIE, cookie)
        .send()
        .with_context(|| format!("Failed to request {} for {} from {}.", what, id, url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::FetchFailed(what.to_string(), id, status.as_u16()).into());
    }

    response
        .text()
        .with_context(|| format!("Failed to read {} body for {}.", what, id))
}

pub fn day_url(config: &Config, id: PuzzleId) -> String {
    format!("{}/{}/day/{}", config.base_url, id.year(), id.day())
}

/// Saves the personal puzzle input to `input.txt`.
pub fn download_input(config: &Config, id: PuzzleId) -> Result<PathBuf> {
    println!("Downloading input for {}...", id);
    let url = format!("{}/input", day_url(config, id));
    let text = fetch(config, &url, "input", id)?;

    let path = id.input_path(&config.root);
    scaffold::write_file(&path, &text)?;
    info!(%id, path = %path.display(), bytes = text.len(), "saved input");

    Ok(path)
}

/// Saves the puzzle description, converted to Markdown, to `puzzle.md`.
pub fn download_puzzle(config: &Config, id: PuzzleId) -> Result<PathBuf> {
    let url = day_url(config, id);
    let html = fetch(config, &url, "puzzle", id)?;
    let md = markdown::puzzle_to_markdown(&html)
        .with_context(|| format!("Failed to convert puzzle for {}.", id))?;

    let path = id.puzzle_path(&config.root);
    scaffold::write_file(&path, &md)?;
    info!(%id, path = %path.display(), "saved puzzle");

    Ok(path)
}
