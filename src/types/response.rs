// src/types/response.rs
//! Raw records returned by the job-search service

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::job::{Job, SalaryRange, DEFAULT_CURRENCY, DEFAULT_PERIODICITY};

/// One posting as the search provider returns it. Every field may be absent
/// or blank; salary numbers may come back as numbers, strings or null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPosting {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default)]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub salary_min: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub salary_max: Option<i64>,
    #[serde(default)]
    pub salary_currency: Option<String>,
    #[serde(default)]
    pub salary_period: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl RawPosting {
    pub fn into_job(self, source: &str) -> Job {
        let url = trimmed(self.job_url);

        Job {
            title: trimmed(self.title),
            company: trimmed(self.company),
            location: trimmed(self.location),
            req_id: non_blank(Some(url.clone())),
            url,
            source: source.to_string(),
            listed_at: non_blank(self.date_posted),
            salary: SalaryRange {
                min: self.salary_min,
                max: self.salary_max,
                currency: non_blank(self.salary_currency)
                    .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
                periodicity: non_blank(self.salary_period)
                    .unwrap_or_else(|| DEFAULT_PERIODICITY.to_string()),
            },
            description: non_blank(self.description),
        }
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn non_blank(value: Option<String>) -> Option<String> {
    let value = trimmed(value);
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Accepts `120000`, `120000.0`, `"120000"`, `""` and `null`; anything that
/// is not a whole number degrades to `None` instead of failing the record.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_job_trims_and_defaults() {
        let raw: RawPosting = serde_json::from_value(serde_json::json!({
            "title": "  Software Engineer ",
            "company": "Google",
            "location": "Austin, TX",
            "job_url": " https://example.com/job1 ",
            "salary_min": 120000,
            "salary_max": "180000",
            "salary_currency": "",
            "description": "   "
        }))
        .unwrap();

        let job = raw.into_job("indeed");
        assert_eq!(job.title, "Software Engineer");
        assert_eq!(job.url, "https://example.com/job1");
        assert_eq!(job.req_id.as_deref(), Some("https://example.com/job1"));
        assert_eq!(job.source, "indeed");
        assert_eq!(job.salary.min, Some(120000));
        assert_eq!(job.salary.max, Some(180000));
        assert_eq!(job.salary.currency, "USD");
        assert_eq!(job.salary.periodicity, "year");
        assert_eq!(job.description, None);
        assert_eq!(job.listed_at, None);
    }

    #[test]
    fn test_lenient_salary_numbers() {
        let raw: RawPosting = serde_json::from_value(serde_json::json!({
            "salary_min": 95000.75,
            "salary_max": "n/a",
            "salary_period": "hour"
        }))
        .unwrap();

        assert_eq!(raw.salary_min, Some(95000));
        assert_eq!(raw.salary_max, None);

        let job = raw.into_job("linkedin");
        assert_eq!(job.salary.periodicity, "hour");
        assert_eq!(job.url, "");
        assert_eq!(job.req_id, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let raw: RawPosting = serde_json::from_str("{}").unwrap();
        let job = raw.into_job("indeed");
        assert_eq!(job.title, "");
        assert_eq!(job.company, "");
        assert_eq!(job.salary, SalaryRange::default());
    }
}
