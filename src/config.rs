use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Scheme used when none is given on the command line
pub const DEFAULT_SCHEME: &str = "integer";

/// Log level used when neither the config nor the environment sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "VERSION_SANITY_LOG";

/// Configuration structure
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Scheme identifier used when none is given explicitly
    pub default_scheme: String,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "version_sanity=debug"
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns the path to the config directory for version-sanity.
/// Uses $XDG_CONFIG_HOME/version-sanity if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-sanity,
/// or ./version-sanity if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("version-sanity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn config_from_partial_object_uses_defaults_for_missing_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "defaultScheme": "semver"
        }))
        .unwrap();

        assert_eq!(result.default_scheme, "semver");
        assert_eq!(result.log, LogConfig::default());
    }

    #[test]
    fn config_from_full_object_parses_all_fields() {
        let result = serde_json::from_value::<Config>(json!({
            "defaultScheme": "semver",
            "log": { "level": "debug" }
        }))
        .unwrap();

        assert_eq!(
            result,
            Config {
                default_scheme: "semver".to_string(),
                log: LogConfig {
                    level: "debug".to_string()
                }
            }
        );
    }

    #[test]
    fn load_returns_defaults_when_file_is_missing() {
        let temp_dir = TempDir::new().unwrap();

        let config = Config::load(&temp_dir.path().join("missing.json")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.default_scheme, "integer");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn load_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "log": { "level": "trace" } }"#).unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.default_scheme, "integer");
        assert_eq!(config.log.level, "trace");
    }

    #[test]
    fn load_rejects_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let error = Config::load(&path).unwrap_err();

        assert!(matches!(error, ConfigError::Invalid { .. }));
    }

    #[test]
    fn config_dir_with_env_uses_xdg_config_home_when_set() {
        let path = config_dir_with_env(
            Some("/tmp/test-config".to_string()),
            Some(PathBuf::from("/home/user")),
        );

        assert_eq!(path, PathBuf::from("/tmp/test-config/version-sanity"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_home_config() {
        let path = config_dir_with_env(None, Some(PathBuf::from("/home/user")));

        assert_eq!(path, PathBuf::from("/home/user/.config/version-sanity"));
    }

    #[test]
    fn config_dir_with_env_falls_back_to_current_dir_when_no_dirs_available() {
        let path = config_dir_with_env(None, None);
        assert_eq!(path, PathBuf::from("./version-sanity"));
    }
}
