// src/pipeline.rs
//! End-to-end run: leaderboards, company queries, broad query, filtering

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Config, SeedMode};
use crate::core::search_client::{search_by_query, search_company_roles};
use crate::core::{JobSearchProvider, PageFetcher};
use crate::leaderboard;
use crate::targets::{self, rules};
use crate::types::{Job, LeaderboardRow};

#[derive(Debug, Clone, Serialize)]
pub struct FailedCompany {
    pub company: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineReport {
    /// Leaderboard rows left after blacklisting (empty in static seed mode).
    pub rows: Vec<LeaderboardRow>,
    /// Seed companies left after blacklisting, in rank order.
    pub companies: Vec<String>,
    /// The top-N slice of `companies` that was actually queried.
    pub searched_companies: Vec<String>,
    pub company_jobs: Vec<Job>,
    pub broad_jobs: Vec<Job>,
    pub failed_companies: Vec<FailedCompany>,
}

pub struct Pipeline<'a, F, P> {
    config: &'a Config,
    fetcher: &'a F,
    provider: &'a P,
}

impl<'a, F, P> Pipeline<'a, F, P>
where
    F: PageFetcher,
    P: JobSearchProvider,
{
    pub fn new(config: &'a Config, fetcher: &'a F, provider: &'a P) -> Self {
        Self {
            config,
            fetcher,
            provider,
        }
    }

    pub async fn run(&self) -> Result<PipelineReport> {
        let (rows, companies) = self.seed().await?;

        let top_n = self.config.app.search.top_companies;
        let searched_companies: Vec<String> = companies.iter().take(top_n).cloned().collect();
        info!(
            "Querying {} of {} seed companies",
            searched_companies.len(),
            companies.len()
        );

        let (company_jobs, failed_companies) = self.company_branch(&searched_companies).await;

        let broad_jobs = if self.config.app.search.broad_query {
            self.broad_branch().await?
        } else {
            info!("Broad query disabled");
            Vec::new()
        };

        Ok(PipelineReport {
            rows,
            companies,
            searched_companies,
            company_jobs,
            broad_jobs,
            failed_companies,
        })
    }

    async fn seed(&self) -> Result<(Vec<LeaderboardRow>, Vec<String>)> {
        let blacklist = &self.config.blacklist;

        match self.config.app.runtime.seed_mode {
            SeedMode::Levels => {
                let (rows, companies) =
                    leaderboard::aggregate(self.fetcher, &self.config.app.levels.urls)
                        .await
                        .context("Failed to aggregate leaderboards")?;
                info!(
                    "Aggregated {} rows and {} companies from {} leaderboards",
                    rows.len(),
                    companies.len(),
                    self.config.app.levels.urls.len()
                );
                Ok((
                    targets::filter_rows(rows, blacklist),
                    targets::filter_companies(companies, blacklist),
                ))
            }
            SeedMode::Static => {
                let companies = self.config.app.search.companies.clone();
                Ok((Vec::new(), targets::filter_companies(companies, blacklist)))
            }
        }
    }

    /// A failing company is logged and skipped; the others still run.
    async fn company_branch(&self, companies: &[String]) -> (Vec<Job>, Vec<FailedCompany>) {
        let settings = &self.config.app.search;
        let mut collected = Vec::new();
        let mut failed = Vec::new();

        for company in companies {
            match search_company_roles(self.provider, settings, company, &settings.role_terms).await
            {
                Ok(jobs) => collected.extend(jobs),
                Err(e) => {
                    warn!("Job search failed for {}: {:#}", company, e);
                    failed.push(FailedCompany {
                        company: company.clone(),
                        error: format!("{:#}", e),
                    });
                }
            }
        }

        // a company-biased query can still return postings from other employers
        let allowed = targets::filter_jobs(collected, &self.config.blacklist);
        let unique = targets::deduplicate(allowed);
        let kept = rules::filter(unique, &self.config.rules);
        info!("{} company postings passed the rules", kept.len());
        (kept, failed)
    }

    async fn broad_branch(&self) -> Result<Vec<Job>> {
        let settings = &self.config.app.search;
        let jobs = search_by_query(self.provider, settings, &settings.role_terms)
            .await
            .context("Broad job search failed")?;

        let allowed = targets::filter_jobs(jobs, &self.config.blacklist);
        let unique = targets::deduplicate(allowed);
        let kept = rules::filter(unique, &self.config.rules);
        info!("{} broad postings passed the rules", kept.len());
        Ok(kept)
    }
}
