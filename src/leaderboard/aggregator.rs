// src/leaderboard/aggregator.rs
use anyhow::{Context, Result};
use std::collections::HashSet;
use tracing::info;

use super::parser;
use crate::core::PageFetcher;
use crate::types::LeaderboardRow;

/// Fetch every leaderboard page in order and merge the parsed rows.
///
/// Ranks are kept as parsed, so merged output can contain the same rank once
/// per page. A single failed fetch aborts the whole aggregation.
pub async fn aggregate<F: PageFetcher>(
    fetcher: &F,
    urls: &[String],
) -> Result<(Vec<LeaderboardRow>, Vec<String>)> {
    let mut rows = Vec::new();

    for url in urls {
        let html = fetcher
            .fetch(url)
            .await
            .with_context(|| format!("Failed to load leaderboard {}", url))?;

        let parsed = parser::parse(&html);
        info!("Parsed {} leaderboard rows from {}", parsed.len(), url);
        rows.extend(parsed);
    }

    let companies = derive_companies(&rows);
    Ok((rows, companies))
}

/// Non-empty company names in first-seen order, without repeats.
pub fn derive_companies(rows: &[LeaderboardRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    rows.iter()
        .map(|row| row.company.trim())
        .filter(|name| !name.is_empty() && seen.insert(*name))
        .map(str::to_string)
        .collect()
}
