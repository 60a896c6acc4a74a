// src/config.rs
//! Run configuration: `app.yaml`, `rules.yaml` and the optional `blacklist.txt`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::targets::{Blacklist, Rules};

pub const CONFIG_DIR_ENV: &str = "JOB_ALERTER_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = "config";
const APP_FILE: &str = "app.yaml";
const RULES_FILE: &str = "rules.yaml";
const BLACKLIST_FILE: &str = "blacklist.txt";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    /// Company seeds come from the compensation leaderboards.
    #[default]
    Levels,
    /// Company seeds come from `search.companies`.
    Static,
}

impl std::fmt::Display for SeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedMode::Levels => write!(f, "levels"),
            SeedMode::Static => write!(f, "static"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeSettings {
    #[serde(default)]
    pub seed_mode: SeedMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelsSettings {
    pub urls: Vec<String>,
    pub request_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for LevelsSettings {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            request_timeout_seconds: 30,
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub site: String,
    pub base_url: String,
    pub request_timeout_seconds: u64,
    pub location: String,
    pub radius_miles: u32,
    pub results_wanted: u32,
    pub hours_old: u32,
    pub country: String,
    pub top_companies: usize,
    pub role_terms: Vec<String>,
    pub companies: Vec<String>,
    pub broad_query: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            site: "indeed".to_string(),
            base_url: "http://127.0.0.1:8765".to_string(),
            request_timeout_seconds: 120,
            location: "United States".to_string(),
            radius_miles: 50,
            results_wanted: 50,
            hours_old: 168,
            country: "USA".to_string(),
            top_companies: 10,
            role_terms: Vec::new(),
            companies: Vec::new(),
            broad_query: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub runtime: RuntimeSettings,
    #[serde(default)]
    pub levels: LevelsSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

impl AppSettings {
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

/// Everything one run needs, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub dir: PathBuf,
    pub app: AppSettings,
    pub rules: Rules,
    pub blacklist: Blacklist,
}

impl Config {
    pub fn load(dir: &Path) -> Result<Self> {
        info!("Loading configuration from: {}", dir.display());

        let app_path = dir.join(APP_FILE);
        let content = std::fs::read_to_string(&app_path)
            .with_context(|| format!("Failed to read {}", app_path.display()))?;
        let app = AppSettings::from_yaml(&content)
            .with_context(|| format!("Failed to parse {}", app_path.display()))?;

        let rules = Rules::load(&dir.join(RULES_FILE))?;
        let blacklist = Blacklist::load(&dir.join(BLACKLIST_FILE))?;

        Ok(Self {
            dir: dir.to_path_buf(),
            app,
            rules,
            blacklist,
        })
    }
}

/// CLI flag first, then the environment, then `./config`.
pub fn resolve_config_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
}
