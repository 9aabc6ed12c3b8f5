use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::core::{MIN_SCORE, TOP_K};
use crate::models::ScoringWeights;
use crate::services::{DEFAULT_ENDPOINTS, DEFAULT_TIMEOUT_SECS};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub chat: ChatSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> String { "data/internships.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub min_score: i32,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            max_results: default_max_results(),
        }
    }
}

fn default_min_score() -> i32 { MIN_SCORE }
fn default_max_results() -> usize { TOP_K }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_weight")]
    pub skill: i32,
    #[serde(default = "default_sector_weight")]
    pub sector: i32,
    #[serde(default = "default_location_exact_weight")]
    pub location_exact: i32,
    #[serde(default = "default_location_no_preference_weight")]
    pub location_no_preference: i32,
    #[serde(default = "default_location_flexible_weight")]
    pub location_flexible: i32,
    #[serde(default = "default_location_mismatch_weight")]
    pub location_mismatch: i32,
    #[serde(default = "default_high_demand_weight")]
    pub high_demand: i32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill: default_skill_weight(),
            sector: default_sector_weight(),
            location_exact: default_location_exact_weight(),
            location_no_preference: default_location_no_preference_weight(),
            location_flexible: default_location_flexible_weight(),
            location_mismatch: default_location_mismatch_weight(),
            high_demand: default_high_demand_weight(),
        }
    }
}

fn default_skill_weight() -> i32 { 12 }
fn default_sector_weight() -> i32 { 18 }
fn default_location_exact_weight() -> i32 { 10 }
fn default_location_no_preference_weight() -> i32 { 4 }
fn default_location_flexible_weight() -> i32 { 2 }
fn default_location_mismatch_weight() -> i32 { -1 }
fn default_high_demand_weight() -> i32 { 3 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(w: &WeightsConfig) -> Self {
        Self {
            skill: w.skill,
            sector: w.sector,
            location_exact: w.location_exact,
            location_no_preference: w.location_no_preference,
            location_flexible: w.location_flexible,
            location_mismatch: w.location_mismatch,
            high_demand: w.high_demand,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatSettings {
    /// Credential for the generative API; chat is fallback-only without it
    pub api_key: Option<String>,
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoints: default_endpoints(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured key, ignoring blank values
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|e| e.to_string()).collect()
}
fn default_timeout_secs() -> u64 { DEFAULT_TIMEOUT_SECS }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with INTERNMATCH)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., INTERNMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("INTERNMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// Pull well-known environment variables into the config tree
///
/// `GEMINI_API_KEY` is the conventional name for the chat credential and
/// takes precedence over anything set in files.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty());

    let mut builder = Config::builder().add_source(settings);

    if let Some(key) = api_key {
        builder = builder.set_override("chat.api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_match_scoring_defaults() {
        let weights = WeightsConfig::default();
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.min_score, 15);
        assert_eq!(matching.max_results, 5);
    }

    #[test]
    fn test_blank_credential_ignored() {
        let chat = ChatSettings {
            api_key: Some("   ".to_string()),
            ..ChatSettings::default()
        };
        assert!(chat.credential().is_none());
        assert_eq!(chat.endpoints.len(), 3);
        assert_eq!(chat.timeout(), Duration::from_secs(8));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "compact");
    }
}
