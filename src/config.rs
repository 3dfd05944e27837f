//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Compiled site bundle configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory holding `index.html` and the wasm bundle
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// `Cache-Control: max-age` sent with every static response
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u64,
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("./jepto-ui/dist")
}

fn default_cache_max_age() -> u64 {
    3600 // 1 hour
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
            cache_max_age_secs: default_cache_max_age(),
        }
    }
}

impl SiteConfig {
    /// Entry document served for `/` and every unknown path
    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, for development
    #[default]
    Pretty,
    /// One JSON object per line, for production
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "logging.format",
                value: other.to_string(),
            }),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
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
        let config_paths = [
            dirs::config_dir().map(|p| p.join("jepto").join("config.toml")),
            Some(PathBuf::from("/etc/jepto/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; unparsable numbers are ignored
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("JEPTO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("JEPTO_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }

        if let Some(dir) = lookup("JEPTO_DIST_DIR") {
            self.site.dist_dir = PathBuf::from(dir);
        }
        if let Some(age) = lookup("JEPTO_CACHE_MAX_AGE").and_then(|a| a.parse().ok()) {
            self.site.cache_max_age_secs = age;
        }

        if let Some(level) = lookup("JEPTO_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("JEPTO_LOG_FORMAT") {
            match format.parse() {
                Ok(f) => self.logging.format = f,
                Err(e) => tracing::warn!("Ignoring JEPTO_LOG_FORMAT: {}", e),
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

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Jepto Site Host Configuration
#
# Environment variables override these settings:
# - JEPTO_HOST
# - JEPTO_PORT
# - JEPTO_DIST_DIR
# - JEPTO_CACHE_MAX_AGE
# - JEPTO_LOG_LEVEL
# - JEPTO_LOG_FORMAT

[server]
# Address to bind to
host = "0.0.0.0"

# Port to listen on
port = 8080

[site]
# Directory produced by `trunk build --release` in jepto-ui/
dist_dir = "./jepto-ui/dist"

# Cache-Control max-age for static files (seconds)
cache_max_age_secs = 3600

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
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.site.cache_max_age_secs, 3600);
        assert_eq!(config.site.index_path(), PathBuf::from("./jepto-ui/dist/index.html"));
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.dist_dir, PathBuf::from("./jepto-ui/dist"));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.site.cache_max_age_secs, 3600);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_errors_carry_path() {
        let missing = Config::load(Path::new("/nonexistent/jepto.toml"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        match Config::load(file.path()) {
            Err(ConfigError::Parse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_overrides_win() {
        let vars: HashMap<&str, &str> = [
            ("JEPTO_HOST", "127.0.0.1"),
            ("JEPTO_PORT", "3000"),
            ("JEPTO_DIST_DIR", "/srv/jepto"),
            ("JEPTO_CACHE_MAX_AGE", "60"),
            ("JEPTO_LOG_FORMAT", "JSON"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:3000");
        assert_eq!(config.site.dist_dir, PathBuf::from("/srv/jepto"));
        assert_eq!(config.site.cache_max_age_secs, 60);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_override_values_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "JEPTO_PORT" => Some("eighty".to_string()),
            "JEPTO_LOG_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }
}
