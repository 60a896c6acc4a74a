// src/targets/rules.rs
//! Include/exclude keyword rules over three independent dimensions.
//!
//! Matching is case-insensitive substring search, not word-bounded, the same
//! as the blacklist.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::types::Job;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    #[serde(default)]
    pub include_any: Vec<String>,
    #[serde(default)]
    pub exclude_any: Vec<String>,
}

impl KeywordRule {
    pub fn new<S: AsRef<str>>(include_any: &[S], exclude_any: &[S]) -> Self {
        Self {
            include_any: include_any.iter().map(|s| s.as_ref().to_string()).collect(),
            exclude_any: exclude_any.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// An empty `include_any` places no positive constraint; an empty
    /// `exclude_any` places no negative one.
    pub fn accepts(&self, text: &str) -> bool {
        let text = text.to_lowercase();
        let contains = |term: &String| text.contains(&term.to_lowercase());

        if !self.include_any.is_empty() && !self.include_any.iter().any(contains) {
            return false;
        }
        !self.exclude_any.iter().any(contains)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default)]
    pub role_titles: KeywordRule,
    #[serde(default)]
    pub job_descriptions: KeywordRule,
    #[serde(default)]
    pub locations: KeywordRule,
}

impl Rules {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules: {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse rules: {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // an empty file means "no rules"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

pub fn matches_role_title(job: &Job, rule: &KeywordRule) -> bool {
    rule.accepts(&job.title)
}

/// Falls back to title and company when the posting has no description.
pub fn matches_job_description(job: &Job, rule: &KeywordRule) -> bool {
    match job.description.as_deref().filter(|d| !d.is_empty()) {
        Some(description) => rule.accepts(description),
        None => rule.accepts(&format!("{} {}", job.title, job.company)),
    }
}

pub fn matches_location(job: &Job, rule: &KeywordRule) -> bool {
    rule.accepts(&job.location)
}

pub fn matches(job: &Job, rules: &Rules) -> bool {
    matches_role_title(job, &rules.role_titles)
        && matches_job_description(job, &rules.job_descriptions)
        && matches_location(job, &rules.locations)
}

pub fn filter(jobs: Vec<Job>, rules: &Rules) -> Vec<Job> {
    jobs.into_iter().filter(|job| matches(job, rules)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SalaryRange;

    fn job(title: &str, company: &str, location: &str, url: &str, salary: (i64, i64), description: &str) -> Job {
        Job::new(title, company, location, url, "indeed")
            .with_salary(SalaryRange::new(Some(salary.0), Some(salary.1)))
            .with_description(description)
    }

    fn sample_jobs() -> Vec<Job> {
        vec![
            job("Software Engineer", "Google", "Austin, TX", "https://example.com/job1", (120000, 180000),
                "We are looking for a backend software engineer with experience in Python, AWS, and distributed systems. You will work on our cloud platform infrastructure."),
            job("Backend Engineer", "Amazon", "Remote", "https://example.com/job2", (130000, 200000),
                "Join our team to build scalable backend services using Java, microservices architecture, and AWS cloud technologies."),
            job("Platform Engineer", "Microsoft", "United States", "https://example.com/job3", (110000, 170000),
                "Work on our distributed platform using Scala, Kubernetes, and cloud infrastructure to support millions of users."),
            job("Principal Software Engineer", "Facebook", "Austin, TX", "https://example.com/job4", (200000, 300000),
                "Lead technical architecture for our backend systems using Python, AWS, and distributed computing."),
            job("Director of Engineering", "Netflix", "Remote", "https://example.com/job5", (250000, 400000),
                "Manage engineering teams building backend services with Java, microservices, and cloud platforms."),
            job("Software Engineer", "EuropeanCorp", "London, UK", "https://example.com/job7", (80000, 120000),
                "Develop backend systems using Python, AWS, and distributed architecture for our European operations."),
            job("Software Developer", "PythonCorp", "Remote", "https://example.com/job8", (90000, 140000),
                "Python developer needed for backend services, cloud infrastructure, and distributed systems using AWS."),
        ]
    }

    fn title_rule() -> KeywordRule {
        KeywordRule::new(
            &["Software Engineer", "Software Developer", "Backend Engineer", "Platform Engineer"],
            &["Principal", "Director", "Intern", "Staff", "Lead"],
        )
    }

    fn description_rule() -> KeywordRule {
        KeywordRule::new(
            &["backend", "distributed", "platform", "scala", "python", "aws", "java"],
            &["frontend", "mobile", "ios", "android", "react", "angular", "vue"],
        )
    }

    fn location_rule() -> KeywordRule {
        KeywordRule::new(&["Austin", "Remote", "United States"], &[])
    }

    #[test]
    fn test_exclude_dominates_include() {
        let rule = KeywordRule::new(&["Software Engineer"], &["Principal"]);
        let plain = Job::new("Software Engineer", "Acme", "Remote", "u", "indeed");
        let principal = Job::new("Principal Software Engineer", "Acme", "Remote", "u", "indeed");

        assert!(matches_role_title(&plain, &rule));
        assert!(!matches_role_title(&principal, &rule));
    }

    #[test]
    fn test_role_title_dimension() {
        let passing: Vec<String> = sample_jobs()
            .into_iter()
            .filter(|j| matches_role_title(j, &title_rule()))
            .map(|j| j.company)
            .collect();
        assert_eq!(passing, vec!["Google", "Amazon", "Microsoft", "EuropeanCorp", "PythonCorp"]);
    }

    #[test]
    fn test_description_dimension_all_pass() {
        assert!(sample_jobs()
            .iter()
            .all(|j| matches_job_description(j, &description_rule())));
    }

    #[test]
    fn test_description_falls_back_to_title_and_company() {
        let rule = KeywordRule::new(&["pythoncorp"], &[]);
        let no_description = Job::new("Developer", "PythonCorp", "Remote", "u", "indeed");
        assert!(matches_job_description(&no_description, &rule));

        let described = no_description.clone().with_description("Ruby shop");
        assert!(!matches_job_description(&described, &rule));
    }

    #[test]
    fn test_location_dimension() {
        let rejected: Vec<String> = sample_jobs()
            .into_iter()
            .filter(|j| !matches_location(j, &location_rule()))
            .map(|j| j.location)
            .collect();
        assert_eq!(rejected, vec!["London, UK"]);
    }

    #[test]
    fn test_combined_filtering() {
        let rules = Rules {
            role_titles: title_rule(),
            job_descriptions: description_rule(),
            locations: location_rule(),
        };

        let companies: Vec<String> = filter(sample_jobs(), &rules)
            .into_iter()
            .map(|j| j.company)
            .collect();
        assert_eq!(companies, vec!["Google", "Amazon", "Microsoft", "PythonCorp"]);
    }

    #[test]
    fn test_empty_rules_pass_everything() {
        assert_eq!(filter(sample_jobs(), &Rules::default()).len(), 7);
    }

    #[test]
    fn test_rules_from_yaml() {
        let rules = Rules::from_yaml(
            r#"
role_titles:
  include_any: ["Software Engineer"]
  exclude_any: ["Principal"]
locations:
  include_any: ["Remote"]
"#,
        )
        .unwrap();

        assert_eq!(rules.role_titles.include_any, vec!["Software Engineer"]);
        assert!(rules.job_descriptions.include_any.is_empty());
        assert!(rules.locations.exclude_any.is_empty());
        assert_eq!(Rules::from_yaml("  \n").unwrap(), Rules::default());
    }
}
