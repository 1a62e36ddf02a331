//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::persistence::DEFAULT_STORAGE_KEY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Category catalog source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// URL (`http://`, `https://`) or file path of the catalog document
    #[serde(default = "default_catalog_source")]
    pub source: String,

    /// Optional fetch timeout for remote catalogs; unset waits indefinitely
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

fn default_catalog_source() -> String {
    "categories.json".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            request_timeout_ms: None,
        }
    }
}

/// Saved-widget storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Key the saved widget list is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,

    /// Restore widgets with a stored selection as editable widgets
    #[serde(default)]
    pub restore_editable: bool,
}

fn default_data_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("widgetboard").to_string_lossy().to_string())
        .unwrap_or_else(|| "./widgetboard_data".to_string())
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            key: default_storage_key(),
            restore_editable: false,
        }
    }
}

impl StorageConfig {
    /// Data directory with a leading `~/` expanded to the home directory
    pub fn data_path(&self) -> PathBuf {
        match (self.data_dir.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.data_dir),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8083
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> String {
        format!("widgetboard={},tower_http={}", self.level, self.level)
    }

    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let (config, origin) = Self::locate_default();
        origin.log();
        config
    }

    /// Load from default locations or environment without logging.
    ///
    /// The returned origin can be logged once a subscriber is installed.
    pub fn locate_default() -> (Self, ConfigOrigin) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("widgetboard").join("config.toml")),
            Some(PathBuf::from("/etc/widgetboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First existing path that loads wins; otherwise environment only
    fn load_first(paths: &[PathBuf]) -> (Self, ConfigOrigin) {
        let mut skipped = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    let origin = ConfigOrigin::File {
                        path: path.clone(),
                        skipped,
                    };
                    return (config, origin);
                }
                Err(e) => skipped.push(e),
            }
        }

        (Self::from_env(), ConfigOrigin::Environment { skipped })
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(source) = var("WIDGETBOARD_CATALOG") {
            self.catalog.source = source;
        }

        if let Some(data_dir) = var("WIDGETBOARD_DATA_DIR") {
            self.storage.data_dir = data_dir;
        }
        if let Some(key) = var("WIDGETBOARD_STORAGE_KEY") {
            self.storage.key = key;
        }

        if let Some(host) = var("WIDGETBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("WIDGETBOARD_API_PORT") {
            match port.parse() {
                Ok(p) => self.api.port = p,
                Err(_) => tracing::warn!("Ignoring invalid WIDGETBOARD_API_PORT: {}", port),
            }
        }

        if let Some(level) = var("WIDGETBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WIDGETBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Where a loaded configuration came from
#[derive(Debug)]
pub enum ConfigOrigin {
    /// Loaded from a file, after skipping files that failed to load
    File {
        path: PathBuf,
        skipped: Vec<ConfigError>,
    },
    /// No config file loaded; defaults plus environment overrides
    Environment { skipped: Vec<ConfigError> },
}

impl ConfigOrigin {
    pub fn log(&self) {
        let skipped = match self {
            ConfigOrigin::File { skipped, .. } | ConfigOrigin::Environment { skipped } => skipped,
        };
        for error in skipped {
            tracing::warn!("Failed to load config: {}", error);
        }

        match self {
            ConfigOrigin::File { path, .. } => tracing::info!("Loaded config from {:?}", path),
            ConfigOrigin::Environment { .. } => {
                tracing::info!("Using default config with environment overrides")
            }
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Widget Board Configuration
#
# Environment variables override these settings:
# - WIDGETBOARD_CATALOG
# - WIDGETBOARD_DATA_DIR
# - WIDGETBOARD_STORAGE_KEY
# - WIDGETBOARD_API_HOST
# - WIDGETBOARD_API_PORT
# - WIDGETBOARD_LOG_LEVEL
# - WIDGETBOARD_LOG_FORMAT

[catalog]
# Catalog document: an http(s) URL or a local file path
source = "categories.json"

# Timeout for fetching a remote catalog (ms). Unset waits indefinitely.
# request_timeout_ms = 10000

[storage]
# Directory holding saved widgets
data_dir = "~/.local/share/widgetboard"

# Key the saved widget list is stored under
key = "savedWidgets"

# Restore saved widgets as editable instead of display-only
restore_editable = false

[api]
# Server host
host = "127.0.0.1"

# Server port
port = 8083

# Allowed CORS origins (empty allows any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_parses() {
        let config = Config::from_toml(&generate_default_config()).unwrap();

        assert_eq!(config.catalog.source, "categories.json");
        assert_eq!(config.catalog.request_timeout_ms, None);
        assert_eq!(config.storage.key, "savedWidgets");
        assert!(!config.storage.restore_editable);
        assert_eq!(config.api.addr(), "127.0.0.1:8083");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml(
            r#"
            [catalog]
            source = "https://example.com/categories.json"

            [api]
            port = 9000
            "#,
        )
        .unwrap();

        assert_eq!(config.catalog.source, "https://example.com/categories.json");
        assert_eq!(config.catalog.request_timeout_ms, None);
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.api.host, "127.0.0.1");
        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WIDGETBOARD_CATALOG", "/srv/categories.json"),
            ("WIDGETBOARD_API_PORT", "not-a-port"),
            ("WIDGETBOARD_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.catalog.source, "/srv/categories.json");
        assert_eq!(config.api.port, 8083);
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_data_path_expands_home() {
        let storage = StorageConfig {
            data_dir: "~/.local/share/widgetboard".to_string(),
            ..StorageConfig::default()
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(storage.data_path(), home.join(".local/share/widgetboard"));
        }

        let storage = StorageConfig {
            data_dir: "/var/lib/widgetboard".to_string(),
            ..StorageConfig::default()
        };
        assert_eq!(storage.data_path(), PathBuf::from("/var/lib/widgetboard"));
    }

    #[test]
    fn test_load_first_skips_broken_files() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "[api\n").unwrap();
        std::fs::write(&good, "[api]\nport = 9100\n").unwrap();

        let paths = [dir.path().join("absent.toml"), broken, good.clone()];
        let (config, origin) = Config::load_first(&paths);

        assert_eq!(config.api.port, 9100);
        match origin {
            ConfigOrigin::File { path, skipped } => {
                assert_eq!(path, good);
                assert_eq!(skipped.len(), 1);
                assert!(matches!(skipped[0], ConfigError::Parse { .. }));
            }
            other => panic!("expected file origin, got {:?}", other),
        }
    }

    #[test]
    fn test_load_first_falls_back_to_environment() {
        let dir = tempdir().unwrap();
        let (config, origin) = Config::load_first(&[dir.path().join("absent.toml")]);

        assert_eq!(config.storage.key, DEFAULT_STORAGE_KEY);
        assert!(matches!(origin, ConfigOrigin::Environment { ref skipped } if skipped.is_empty()));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[api]\nport = \"high\"\n").unwrap();

        match Config::load(&path) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {:?}", other),
        }

        assert!(matches!(
            Config::load(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
