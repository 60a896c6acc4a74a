// src/targets/mod.rs
//! Narrowing job postings down to the ones worth looking at

pub mod blacklist;
pub mod dedup;
pub mod rules;

pub use blacklist::{filter_companies, filter_jobs, filter_rows, is_blocked, Blacklist};
pub use dedup::deduplicate;
pub use rules::{KeywordRule, Rules};
