use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_API_URL: &str = "http://localhost:8000";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the catalog backend
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Offline catalog document; takes precedence over `api_url`
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
    /// Where log output goes
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            catalog_file: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".transformation-catalog"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// an error so the caller can report it once logging is up.
    pub fn load() -> Result<Config> {
        match Self::config_path() {
            Some(path) => Ok(Self::load_from(&path)?.unwrap_or_default()),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed config {}", path.display()))?;
        Ok(Some(config))
    }

    /// Save the config to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded config
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        catalog_file: Option<PathBuf>,
        log_file: Option<PathBuf>,
    ) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
            // An explicit URL means the user wants the API, not a stored file
            self.catalog_file = None;
        }
        if catalog_file.is_some() {
            self.catalog_file = catalog_file;
        }
        if log_file.is_some() {
            self.log_file = log_file;
        }
        self
    }

    /// Log file path, defaulting into the config directory
    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("catalog.log")))
            .unwrap_or_else(|| env::temp_dir().join("transformation-catalog.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            api_url: "http://catalog.internal:9000".to_string(),
            catalog_file: Some(PathBuf::from("/tmp/catalog.yaml")),
            log_file: None,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Some(config));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_malformed_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Malformed config"));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_missing_config_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        assert_eq!(Config::load_from(&path).unwrap(), None);
    }

    #[test]
    fn test_cli_overrides_config() {
        let base = Config {
            api_url: "http://old".to_string(),
            catalog_file: Some(PathBuf::from("stored.yaml")),
            log_file: None,
        };

        let overridden = base
            .clone()
            .with_overrides(Some("http://new".to_string()), None, Some("out.log".into()));
        assert_eq!(overridden.api_url, "http://new");
        assert!(overridden.catalog_file.is_none());
        assert_eq!(overridden.resolved_log_file(), PathBuf::from("out.log"));

        let untouched = base.clone().with_overrides(None, None, None);
        assert_eq!(untouched, base);
    }
}
