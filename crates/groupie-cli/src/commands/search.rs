use std::path::Path;

use anyhow::{Context, Result};
use groupie_core::catalog;
use groupie_search::{Match, SearchEngine, SearchField, SearchOptions};

/// Load the catalog at `data_path`, search it and print the matches.
pub fn run_search(
    data_path: &Path,
    query: &str,
    fields: Vec<SearchField>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let matches = search_catalog(data_path, query, build_options(fields, limit))?;
    println!("{}", format_matches(&matches, json)?);
    Ok(())
}

fn search_catalog(data_path: &Path, query: &str, options: SearchOptions) -> Result<Vec<Match>> {
    let artists = catalog::load(data_path)
        .with_context(|| format!("Failed to load catalog from {}", data_path.display()))?;

    let matches = SearchEngine::new(options).search(&artists, query);
    log::debug!("{} matches for {:?}", matches.len(), query);
    Ok(matches)
}

/// Everything printed to stdout for a search.
fn format_matches(matches: &[Match], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(matches)?)
    } else {
        Ok(render(matches))
    }
}

/// `--field` replaces the default field set when given at least once.
fn build_options(fields: Vec<SearchField>, limit: Option<usize>) -> SearchOptions {
    let mut options = SearchOptions::default();
    if !fields.is_empty() {
        options = options.with_fields(fields);
    }
    if let Some(limit) = limit {
        options = options.with_limit(limit);
    }
    options
}

fn render(matches: &[Match]) -> String {
    if matches.is_empty() {
        return String::from("No matches.");
    }

    matches
        .iter()
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(m: &Match) -> String {
    let detail = match m {
        Match::Artist { artist, .. } => artist.clone(),
        Match::Member { artist, member, .. } => format!("{member} ({artist})"),
        Match::CreationDate { artist, year, .. } => format!("{artist} (formed {year})"),
        Match::FirstAlbum {
            artist,
            first_album,
            ..
        } => format!("{artist} (first album {first_album})"),
    };
    format!("{:>5}  {:<14} {}", m.score(), m.kind(), detail)
}
