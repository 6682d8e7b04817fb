use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub directory: DirectorySettings,
    pub cache: CacheSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Connection settings for the SkillSwap core API
#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    pub endpoint: String,
    pub api_key: String,
    #[serde(default = "default_directory_timeout")]
    pub timeout_secs: u64,
}

fn default_directory_timeout() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub redis_url: String,
    pub ttl_secs: Option<u64>,
    pub l1_cache_size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with SKILLSWAP_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with SKILLSWAP_)
            // e.g., SKILLSWAP_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply conventional environment overrides on top of the layered config
///
/// REDIS_URL is honored ahead of SKILLSWAP_CACHE__REDIS_URL because hosting
/// platforms inject it under that name.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let redis_url = env::var("REDIS_URL")
        .or_else(|_| env::var("SKILLSWAP_CACHE__REDIS_URL"))
        .unwrap_or_else(|_| "redis://localhost:6379".to_string());

    let directory_endpoint = env::var("SKILLSWAP_DIRECTORY__ENDPOINT").ok();
    let directory_api_key = env::var("SKILLSWAP_DIRECTORY__API_KEY").ok();

    let mut builder = Config::builder()
        .add_source(settings)
        .set_override("cache.redis_url", redis_url)?;

    if let Some(endpoint) = directory_endpoint {
        builder = builder.set_override("directory.endpoint", endpoint)?;
    }
    if let Some(api_key) = directory_api_key {
        builder = builder.set_override("directory.api_key", api_key)?;
    }

    builder.build()
}
