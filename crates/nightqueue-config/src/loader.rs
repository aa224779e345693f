//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::ConfigError;
use crate::schema::Config;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "nightqueue.toml";

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Build the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, `nightqueue.toml` in the
    /// working directory is used if present, otherwise built-in defaults.
    /// Process environment overrides are applied on top.
    pub fn resolve(path: Option<&Path>) -> Result<Config, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::load(default_path)?
                } else {
                    Config::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        config.storage.queue_file = PathBuf::from(Self::expand_path(
            &config.storage.queue_file.to_string_lossy(),
        ));
        Ok(config)
    }

    /// Apply `PORT`, `NIGHTQUEUE_QUEUE_FILE` and `NIGHTQUEUE_SELF_URL`.
    ///
    /// Blank values count as unset.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = lookup("PORT") {
            config.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }

        if let Some(queue_file) = lookup("NIGHTQUEUE_QUEUE_FILE") {
            config.storage.queue_file = PathBuf::from(queue_file);
        }

        if let Some(url) = lookup("NIGHTQUEUE_SELF_URL") {
            config.keepalive.url = Url::parse(&url).map_err(|e| ConfigError::InvalidValue {
                field: "NIGHTQUEUE_SELF_URL".to_string(),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/queue.json`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.keepalive.interval_secs, 300);
    }

    #[test]
    fn test_load_full_config() {
        let content = r#"
            [server]
            host = "127.0.0.1"
            port = 8000

            [storage]
            queue_file = "/data/queue.json"

            [keepalive]
            enabled = false
            url = "https://example.com/"
            interval_secs = 120

            [logging]
            level = "debug"
            file = true
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.storage.queue_file, PathBuf::from("/data/queue.json"));
        assert!(!config.keepalive.enabled);
        assert_eq!(config.keepalive.url.as_str(), "https://example.com/");
        assert_eq!(config.keepalive.interval_secs, 120);
        assert_eq!(config.keepalive.timeout_secs, 30);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.file);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 5000").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/nightqueue.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_resolve_explicit_missing_file() {
        let result = ConfigLoader::resolve(Some(Path::new("/nonexistent/nightqueue.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_load_invalid_url() {
        let content = r#"
            [keepalive]
            url = "not a url"
        "#;
        assert!(ConfigLoader::load_str(content).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        let lookup = env(&[
            ("PORT", "8123"),
            ("NIGHTQUEUE_QUEUE_FILE", "/tmp/q.json"),
            ("NIGHTQUEUE_SELF_URL", "https://my-queue.example.org/"),
        ]);

        ConfigLoader::apply_env_overrides(&mut config, lookup).unwrap();
        assert_eq!(config.server.port, 8123);
        assert_eq!(config.storage.queue_file, PathBuf::from("/tmp/q.json"));
        assert_eq!(config.keepalive.url.as_str(), "https://my-queue.example.org/");
    }

    #[test]
    fn test_env_overrides_absent() {
        let mut config = Config::default();
        ConfigLoader::apply_env_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.queue_file, PathBuf::from("queue.json"));
    }

    #[test]
    fn test_env_overrides_blank_values_ignored() {
        let mut config = Config::default();
        let lookup = env(&[
            ("PORT", ""),
            ("NIGHTQUEUE_QUEUE_FILE", " "),
            ("NIGHTQUEUE_SELF_URL", ""),
        ]);

        ConfigLoader::apply_env_overrides(&mut config, lookup).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.storage.queue_file, PathBuf::from("queue.json"));
        assert_eq!(config.keepalive.url.as_str(), crate::schema::DEFAULT_SELF_URL);
    }

    #[test]
    fn test_env_override_invalid_port() {
        let mut config = Config::default();
        let result = ConfigLoader::apply_env_overrides(&mut config, env(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_env_override_invalid_url() {
        let mut config = Config::default();
        let result =
            ConfigLoader::apply_env_overrides(&mut config, env(&[("NIGHTQUEUE_SELF_URL", "::")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("NIGHTQUEUE_TEST_CONFIG_VAR", "test_value");
        }
        let content = "value = \"${NIGHTQUEUE_TEST_CONFIG_VAR}\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert!(expanded.contains("test_value"));
        unsafe {
            std::env::remove_var("NIGHTQUEUE_TEST_CONFIG_VAR");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_NIGHTQUEUE_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/srv/queue.json"), "/srv/queue.json");
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = ConfigLoader::expand_path("~/queue.json");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("/queue.json"));
    }
}
