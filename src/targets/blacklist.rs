// src/targets/blacklist.rs
//! Company blacklist.
//!
//! A token blocks a company when it appears anywhere inside the lower-cased
//! name. Matching is not word-bounded: `block` also blocks `Unblocked Corp`.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

use crate::types::{Job, LeaderboardRow};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    tokens: BTreeSet<String>,
}

impl Blacklist {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// One token per line; blank lines and `#` comments are ignored.
    pub fn from_text(text: &str) -> Self {
        Self::from_tokens(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// A missing file is an empty blacklist, not an error.
    pub fn load(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let blacklist = Self::from_text(&text);
                info!(
                    "Loaded {} blacklist entries from {}",
                    blacklist.len(),
                    path.display()
                );
                Ok(blacklist)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No blacklist at {}, nothing is blocked", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read blacklist: {}", path.display())),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn blocks(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.tokens.iter().any(|token| name.contains(token.as_str()))
    }
}

pub fn is_blocked(name: &str, blacklist: &Blacklist) -> bool {
    blacklist.blocks(name)
}

pub fn filter_companies(companies: Vec<String>, blacklist: &Blacklist) -> Vec<String> {
    companies
        .into_iter()
        .filter(|c| !blacklist.blocks(c))
        .collect()
}

pub fn filter_rows(rows: Vec<LeaderboardRow>, blacklist: &Blacklist) -> Vec<LeaderboardRow> {
    rows.into_iter()
        .filter(|r| !blacklist.blocks(&r.company))
        .collect()
}

pub fn filter_jobs(jobs: Vec<Job>, blacklist: &Blacklist) -> Vec<Job> {
    jobs.into_iter()
        .filter(|j| !blacklist.blocks(&j.company))
        .collect()
}
