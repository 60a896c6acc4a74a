// src/targets/dedup.rs
use std::collections::HashSet;

use crate::types::Job;

/// Keep the first job per url, in input order. Jobs without a url cannot be
/// identified and are always dropped.
pub fn deduplicate(jobs: Vec<Job>) -> Vec<Job> {
    let mut seen: HashSet<String> = HashSet::new();
    jobs.into_iter()
        .filter(|job| match job.identity() {
            Some(url) => seen.insert(url.to_string()),
            None => false,
        })
        .collect()
}
