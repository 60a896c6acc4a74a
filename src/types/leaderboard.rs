// src/types/leaderboard.rs
use serde::{Deserialize, Serialize};

/// One ranked company/title/compensation record from a leaderboard page.
///
/// `rank` is the 1-based position of the row inside its own document; it is
/// never renumbered when several documents are merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub company: String,
    pub title: String,
    pub comp_total: Option<i64>,
    pub comp_base: Option<i64>,
    pub comp_stock: Option<i64>,
    pub comp_bonus: Option<i64>,
}
