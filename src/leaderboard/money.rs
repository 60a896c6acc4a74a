// src/leaderboard/money.rs
//! Money-like text to whole USD amounts

use regex::Regex;
use std::sync::LazyLock;

static THOUSANDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+(?:\.[0-9]+)?)\s*[Kk]$").expect("thousands pattern is valid")
});

/// Convert strings such as `"$301,000"`, `"191K"` or `"12.5k"` into an
/// integer amount (no cents). Unparsable input yields `None`.
pub fn normalize(text: Option<&str>) -> Option<i64> {
    let text = text?.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("N/A") || text.eq_ignore_ascii_case("NA") {
        return None;
    }

    if let Some(caps) = THOUSANDS.captures(text) {
        let amount = caps[1].parse::<f64>().ok().map(|a| (a * 1000.0).trunc());
        if let Some(amount) = amount {
            // too large for i64 is unparsable, not saturated
            return if amount.is_finite() && amount < i64::MAX as f64 {
                Some(amount as i64)
            } else {
                None
            };
        }
    }

    let stripped: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
    if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
        return stripped.parse().ok();
    }

    let digits: String = stripped.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
