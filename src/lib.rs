//! Compensation-leaderboard driven job alerts.
//!
//! Leaderboard pages seed a list of top-paying companies, a job-search
//! provider is queried per company (and once broadly), and the postings are
//! narrowed by blacklist, keyword rules and url identity.

pub mod cli;
pub mod config;
pub mod core;
pub mod leaderboard;
pub mod pipeline;
pub mod targets;
pub mod types;

pub use config::Config;
pub use pipeline::{Pipeline, PipelineReport};
