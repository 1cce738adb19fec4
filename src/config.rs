use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::core::{KeywordExtractor, ScoringStrategy, DEFAULT_MIN_KEYWORD_LENGTH, DEFAULT_STOP_WORDS};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub recommendations: RecommendationSettings,
    #[serde(default)]
    pub keywords: KeywordSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationSettings {
    /// Number of picks shown on a student's dashboard
    #[serde(default = "default_top_picks")]
    pub top_picks: usize,
    /// Upper bound on a client-requested limit
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            top_picks: default_top_picks(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_top_picks() -> usize { 3 }
fn default_max_limit() -> usize { 50 }

#[derive(Debug, Clone, Deserialize)]
pub struct KeywordSettings {
    /// Replaces the built-in stop-word list when set
    #[serde(default)]
    pub stop_words: Option<Vec<String>>,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

impl Default for KeywordSettings {
    fn default() -> Self {
        Self {
            stop_words: None,
            min_length: default_min_length(),
        }
    }
}

impl KeywordSettings {
    pub fn extractor(&self) -> KeywordExtractor {
        match &self.stop_words {
            Some(words) => KeywordExtractor::new(words, self.min_length),
            None => KeywordExtractor::new(DEFAULT_STOP_WORDS.iter().copied(), self.min_length),
        }
    }
}

fn default_min_length() -> usize { DEFAULT_MIN_KEYWORD_LENGTH }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub strategy: ScoringStrategy,
}

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
    /// 4. Environment variables (prefixed with PROVICS__)
    /// 5. DATABASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PROVICS__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        let settings = apply_database_url(settings)?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PROVICS")
        .prefix_separator("__")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("keywords.stop_words")
        .try_parsing(true)
}

/// Let the conventional DATABASE_URL variable win over file settings
fn apply_database_url(settings: Config) -> Result<Config, ConfigError> {
    match std::env::var("DATABASE_URL") {
        Ok(url) => Config::builder()
            .add_source(settings)
            .set_override("database.url", url)?
            .build(),
        Err(_) => Ok(settings),
    }
}
