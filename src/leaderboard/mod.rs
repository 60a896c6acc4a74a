// src/leaderboard/mod.rs
//! Compensation leaderboard scraping

pub mod aggregator;
pub mod money;
pub mod parser;

pub use aggregator::{aggregate, derive_companies};
pub use parser::parse;
