// src/core/mod.rs
//! Network collaborators: leaderboard page fetch and job search

pub mod page_fetcher;
pub mod search_client;

pub use page_fetcher::{HttpPageFetcher, PageFetcher};
pub use search_client::{HttpSearchClient, JobSearchProvider, SearchQuery};
