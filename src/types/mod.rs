// src/types/mod.rs
//! Value types shared by the leaderboard, search and filtering stages

pub mod job;
pub mod leaderboard;
pub mod response;

pub use job::{Job, SalaryRange};
pub use leaderboard::LeaderboardRow;
pub use response::RawPosting;
