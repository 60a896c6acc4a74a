// src/types/job.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_PERIODICITY: &str = "year";

/// Salary as stated by the provider. Currency and periodicity are carried
/// through untouched; nothing is annualized or converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub currency: String,
    pub periodicity: String,
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            currency: DEFAULT_CURRENCY.to_string(),
            periodicity: DEFAULT_PERIODICITY.to_string(),
        }
    }
}

impl SalaryRange {
    pub fn new(min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    /// Identity key for deduplication. Empty means unidentifiable.
    pub url: String,
    pub source: String,
    pub listed_at: Option<String>,
    pub salary: SalaryRange,
    pub description: Option<String>,
    pub req_id: Option<String>,
}

impl Job {
    /// Minimal constructor; remaining fields take their defaults.
    pub fn new(title: &str, company: &str, location: &str, url: &str, source: &str) -> Self {
        Self {
            title: title.to_string(),
            company: company.to_string(),
            location: location.to_string(),
            url: url.to_string(),
            source: source.to_string(),
            listed_at: None,
            salary: SalaryRange::default(),
            description: None,
            req_id: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_salary(mut self, salary: SalaryRange) -> Self {
        self.salary = salary;
        self
    }

    /// The dedup key, or `None` when the url is blank.
    pub fn identity(&self) -> Option<&str> {
        let url = self.url.trim();
        if url.is_empty() {
            None
        } else {
            Some(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_defaults() {
        let salary = SalaryRange::new(Some(120000), None);
        assert_eq!(salary.currency, "USD");
        assert_eq!(salary.periodicity, "year");
        assert_eq!(salary.max, None);
    }

    #[test]
    fn test_identity_blank_url() {
        let job = Job::new("Engineer", "Acme", "Remote", "   ", "indeed");
        assert_eq!(job.identity(), None);

        let job = Job::new("Engineer", "Acme", "Remote", "https://x/1", "indeed");
        assert_eq!(job.identity(), Some("https://x/1"));
    }
}
