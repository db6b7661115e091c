use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::{
    domain::models::credential::{Pepper, PepperError},
    infrastructure::pbkdf2_password_hasher::MIN_ITERATIONS,
};

pub const DEFAULT_CONFIG_PATH: &str = "authcli.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid pepper: {0}")]
    Pepper(#[from] PepperError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,

    pub security: SecurityConfig,

    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// sea-orm connection URL. `DATABASE_URL` takes precedence.
    pub url: String,

    pub max_connections: u32,

    pub min_connections: u32,

    /// Log every SQL statement through sqlx
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://authcli.db?mode=rwc".to_string(),
            max_connections: 5,
            min_connections: 1,
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// PBKDF2 rounds, at least 100000
    pub pbkdf2_iterations: u32,

    /// Hex encoded 32 byte pepper. A random one is generated per process when unset.
    pub pepper: Option<String>,

    pub allow_empty_username: bool,

    pub allow_empty_password: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            pbkdf2_iterations: MIN_ITERATIONS,
            pepper: None,
            allow_empty_username: false,
            allow_empty_password: false,
        }
    }
}

impl SecurityConfig {
    /// The configured pepper, or a fresh random one.
    pub fn pepper(&self) -> Result<Pepper, PepperError> {
        match &self.pepper {
            Some(value) => Pepper::from_hex(value),
            None => Pepper::generate(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, overridden by `RUST_LOG`
    pub level: String,

    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file does not exist.
    /// `DATABASE_URL` from the environment (or `.env`) overrides the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::load_from_path(path)?
        } else {
            Self::default()
        };

        if let Ok(url) = dotenvy::var("DATABASE_URL") {
            config.database.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.is_empty() {
            return Err(ConfigError::Invalid("database.url cannot be empty".to_string()));
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid(
                "database.min_connections cannot exceed database.max_connections".to_string(),
            ));
        }

        if self.security.pbkdf2_iterations < MIN_ITERATIONS {
            return Err(ConfigError::Invalid(format!(
                "security.pbkdf2_iterations must be at least {MIN_ITERATIONS}"
            )));
        }

        if let Some(pepper) = &self.security.pepper {
            Pepper::from_hex(pepper)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.security.pbkdf2_iterations, 100_000);
        assert!(!config.security.allow_empty_username);
        assert!(!config.security.allow_empty_password);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [security]
            pbkdf2_iterations = 250000
            allow_empty_password = true

            [logging]
            format = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.security.pbkdf2_iterations, 250_000);
        assert!(config.security.allow_empty_password);
        assert!(!config.security.allow_empty_username);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_validate_rejects_low_iterations() {
        let mut config = Config::default();
        config.security.pbkdf2_iterations = 1_000;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_bad_pepper() {
        let mut config = Config::default();
        config.security.pepper = Some("abcd".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::Pepper(_))));

        config.security.pepper = Some("11".repeat(32));
        assert!(config.validate().is_ok());
        assert!(config.security.pepper().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let mut config = Config::default();
        config.database.min_connections = 10;
        config.database.max_connections = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("authcli.toml");
        std::fs::write(&path, "[database]\nmax_connections = 3\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.database.max_connections, 3);

        std::fs::write(&path, "[database\n").unwrap();
        assert!(matches!(
            Config::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
