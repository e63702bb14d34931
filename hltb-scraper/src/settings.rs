//! Client settings: where to reach HowLongToBeat and how strict name
//! matching is.
//!
//! Values come from `~/.config/hltb/settings.toml` (platform config dir),
//! overridden per field by environment variables.
//!
//! Without a configured user agent, every request presents a browser user
//! agent picked at random from [`BROWSER_USER_AGENTS`].

use std::path::{Path, PathBuf};

use hltb_core::DEFAULT_MIN_SIMILARITY;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::ScrapeError;

pub const DEFAULT_BASE_URL: &str = "https://howlongtobeat.com/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const BROWSER_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

pub const ENV_BASE_URL: &str = "HLTB_BASE_URL";
pub const ENV_MIN_SIMILARITY: &str = "HLTB_MIN_SIMILARITY";
pub const ENV_TIMEOUT_SECS: &str = "HLTB_TIMEOUT_SECS";
pub const ENV_USER_AGENT: &str = "HLTB_USER_AGENT";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Site root, with trailing slash
    pub base_url: String,
    /// Threshold for name searches; 0 keeps every result
    pub min_similarity: f64,
    pub timeout_secs: u64,
    /// Fixed user agent; `None` rotates through [`BROWSER_USER_AGENTS`]
    pub user_agent: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            min_similarity: DEFAULT_MIN_SIMILARITY,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

/// On-disk layout; every field optional so partial files work.
#[derive(Debug, Default, Deserialize, Serialize)]
struct SettingsFile {
    hltb: Option<HltbSection>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct HltbSection {
    base_url: Option<String>,
    min_similarity: Option<f64>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

impl Settings {
    /// Load settings with priority: env vars > config file > defaults.
    ///
    /// A missing config file is not an error; an unreadable or invalid one is.
    pub fn load() -> Result<Self, ScrapeError> {
        let settings = match settings_path() {
            Some(path) if path.exists() => Self::load_from(&path)?,
            _ => Self::default(),
        };
        settings.with_env_overrides()
    }

    /// Load settings from an explicit file, without env overrides.
    pub fn load_from(path: &Path) -> Result<Self, ScrapeError> {
        let content = std::fs::read_to_string(path)?;
        let file: SettingsFile = toml::from_str(&content).map_err(|e| {
            ScrapeError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        let section = file.hltb.unwrap_or_default();
        let defaults = Self::default();

        let settings = Self {
            base_url: section.base_url.unwrap_or(defaults.base_url),
            min_similarity: section.min_similarity.unwrap_or(defaults.min_similarity),
            timeout_secs: section.timeout_secs.unwrap_or(defaults.timeout_secs),
            user_agent: section.user_agent.or(defaults.user_agent),
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Apply `HLTB_*` environment variables on top of these settings.
    pub fn with_env_overrides(self) -> Result<Self, ScrapeError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ScrapeError> {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(value) = lookup(ENV_MIN_SIMILARITY) {
            self.min_similarity = value.trim().parse().map_err(|_| {
                ScrapeError::Config(format!("{ENV_MIN_SIMILARITY} is not a number: {value}"))
            })?;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = value.trim().parse().map_err(|_| {
                ScrapeError::Config(format!("{ENV_TIMEOUT_SECS} is not a whole number: {value}"))
            })?;
        }
        if let Some(ua) = lookup(ENV_USER_AGENT) {
            self.user_agent = Some(ua);
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ScrapeError> {
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(ScrapeError::Config(format!(
                "min_similarity must be between 0 and 1, got {}",
                self.min_similarity
            )));
        }
        if self.base_url.is_empty() {
            return Err(ScrapeError::Config("base_url is empty".to_string()));
        }
        Ok(())
    }

    /// Base URL guaranteed to end with `/`.
    pub fn base_url(&self) -> String {
        if self.base_url.ends_with('/') {
            self.base_url.clone()
        } else {
            format!("{}/", self.base_url)
        }
    }

    /// User agent for the next request: the configured one, or a random
    /// browser user agent.
    pub fn user_agent(&self) -> &str {
        match &self.user_agent {
            Some(ua) => ua,
            None => random_user_agent(),
        }
    }

    /// Write these settings as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ScrapeError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = SettingsFile {
            hltb: Some(HltbSection {
                base_url: Some(self.base_url.clone()),
                min_similarity: Some(self.min_similarity),
                timeout_secs: Some(self.timeout_secs),
                user_agent: self.user_agent.clone(),
            }),
        };
        let toml_str = toml::to_string_pretty(&file)
            .map_err(|e| ScrapeError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

pub fn random_user_agent() -> &'static str {
    BROWSER_USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(BROWSER_USER_AGENTS[0])
}

/// Return the path to the settings file.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("hltb").join("settings.toml"))
}
