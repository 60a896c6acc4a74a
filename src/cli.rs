// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

use crate::config::{resolve_config_dir, Config};
use crate::core::{HttpPageFetcher, HttpSearchClient};
use crate::pipeline::{Pipeline, PipelineReport};
use crate::types::Job;

#[derive(Parser)]
#[command(name = "job-alerter")]
#[command(about = "Find postings at top-paying companies that match your rules")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding app.yaml, rules.yaml and blacklist.txt
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the configuration and print a summary
    Check,
    /// Scrape leaderboards, search jobs and print the matches
    Run {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let config = Config::load(&resolve_config_dir(cli.config_dir))?;

    match cli.command {
        Command::Check => print_summary(&config),
        Command::Run { format } => {
            let levels = &config.app.levels;
            let fetcher = HttpPageFetcher::new(levels.request_timeout_seconds, &levels.user_agent)?;
            let search = &config.app.search;
            let provider = HttpSearchClient::new(&search.base_url, search.request_timeout_seconds)?;

            info!("Starting run with seed mode: {}", config.app.runtime.seed_mode);
            let report = Pipeline::new(&config, &fetcher, &provider).run().await?;

            match format {
                OutputFormat::Text => print_report(&report),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
    }

    Ok(())
}

fn print_summary(config: &Config) {
    println!("job-alerter configuration OK ({})", config.dir.display());
    println!("- seed_mode: {}", config.app.runtime.seed_mode);
    println!("- levels urls: {}", config.app.levels.urls.len());
    println!("- blacklist entries: {}", config.blacklist.len());
    println!("- role terms: {:?}", config.app.search.role_terms);
    println!("- include titles: {:?}", config.rules.role_titles.include_any);
    println!("- include descriptions: {:?}", config.rules.job_descriptions.include_any);
    println!("- include locations: {:?}", config.rules.locations.include_any);
}

fn print_report(report: &PipelineReport) {
    if !report.rows.is_empty() {
        println!("Leaderboard ({} rows):", report.rows.len());
        println!("{:<5} {:<25} {:<30} {:>12}", "Rank", "Company", "Title", "Total");
        println!("{}", "-".repeat(75));
        for row in &report.rows {
            let total = row
                .comp_total
                .map(|t| format!("${}", t))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:<5} {:<25} {:<30} {:>12}",
                row.rank, row.company, row.title, total
            );
        }
        println!();
    }

    println!("Searched companies: {}", report.searched_companies.join(", "));
    for failed in &report.failed_companies {
        println!("  ⚠️  {}: {}", failed.company, failed.error);
    }
    println!();

    print_jobs("Matches at seed companies", &report.company_jobs);
    print_jobs("Matches from broad search", &report.broad_jobs);
}

fn print_jobs(heading: &str, jobs: &[Job]) {
    println!("{} ({}):", heading, jobs.len());
    if jobs.is_empty() {
        println!("  (none)");
    }
    for job in jobs {
        let salary = match (job.salary.min, job.salary.max) {
            (Some(min), Some(max)) => format!(" [{}-{} {}/{}]", min, max, job.salary.currency, job.salary.periodicity),
            (Some(min), None) => format!(" [{}+ {}/{}]", min, job.salary.currency, job.salary.periodicity),
            _ => String::new(),
        };
        println!("  {} @ {} ({}){}", job.title, job.company, job.location, salary);
        println!("    {}", job.url);
    }
    println!();
}
