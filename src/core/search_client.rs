// src/core/search_client.rs
//! Job-search provider client.
//!
//! Talks to a JobSpy bridge service: one POST per search term, a JSON array of
//! raw postings back.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::SearchSettings;
use crate::types::{Job, RawPosting};

const SEARCH_ENDPOINT: &str = "/search";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    pub site: String,
    pub search_term: String,
    pub location: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub distance: u32,
    pub country: String,
}

impl SearchQuery {
    pub fn from_settings(settings: &SearchSettings, search_term: String) -> Self {
        Self {
            site: settings.site.clone(),
            search_term,
            location: settings.location.clone(),
            results_wanted: settings.results_wanted,
            hours_old: settings.hours_old,
            distance: settings.radius_miles,
            country: settings.country.clone(),
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait JobSearchProvider {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawPosting>>;
}

pub struct HttpSearchClient {
    client: Client,
    base_url: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl JobSearchProvider for HttpSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<RawPosting>> {
        let url = format!("{}{}", self.base_url, SEARCH_ENDPOINT);
        debug!("Calling job search service: {} ({})", url, query.search_term);

        let response = self
            .client
            .post(&url)
            .json(query)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<Vec<RawPosting>>()
                .await
                .context("Failed to parse job search response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("Job search failed with status {}: {}", status, error_text)
        }
    }
}

/// One query per role term, each biased towards `company` by appending the
/// name to the search text. The provider has no company-only filter.
pub async fn search_company_roles<P: JobSearchProvider>(
    provider: &P,
    settings: &SearchSettings,
    company: &str,
    role_terms: &[String],
) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    for term in role_terms {
        let query = SearchQuery::from_settings(settings, format!("{} {}", term, company));
        let postings = provider.search(&query).await?;
        jobs.extend(postings.into_iter().map(|p| p.into_job(&settings.site)));
    }
    info!("Found {} postings for {}", jobs.len(), company);
    Ok(jobs)
}

/// The broad query: one search per role term with no company bias.
pub async fn search_by_query<P: JobSearchProvider>(
    provider: &P,
    settings: &SearchSettings,
    role_terms: &[String],
) -> Result<Vec<Job>> {
    let mut jobs = Vec::new();
    for term in role_terms {
        let query = SearchQuery::from_settings(settings, term.clone());
        let postings = provider.search(&query).await?;
        jobs.extend(postings.into_iter().map(|p| p.into_job(&settings.site)));
    }
    info!("Broad query returned {} postings", jobs.len());
    Ok(jobs)
}
