use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub recommend: RecommendSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
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

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    8080
}

/// Paths of the prepared data files loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    #[serde(default = "default_matrix_path")]
    pub matrix_path: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            matrix_path: default_matrix_path(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/df_wisata_bogor_final_prepared.csv".to_string()
}
fn default_matrix_path() -> String {
    "data/similarity_matrix.csv".to_string()
}

/// Request-level defaults and caps for the recommend endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendSettings {
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            default_top_n: default_top_n(),
            default_radius_km: default_radius_km(),
            max_top_n: default_max_top_n(),
        }
    }
}

fn default_top_n() -> usize {
    5
}
fn default_radius_km() -> f64 {
    100.0
}
fn default_max_top_n() -> usize {
    100
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

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with WISATA__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WISATA__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("WISATA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("WISATA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
