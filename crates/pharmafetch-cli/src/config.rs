//! Configuration loading from TOML files

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable backing `--api-key`
pub const API_KEY_ENV: &str = "NCBI_API_KEY";

/// Global configuration for pharmafetch
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub pubmed: PubmedConfig,
    pub http: HttpSettings,
}

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct PubmedConfig {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub api_key: Option<String>,
    pub tool: Option<String>,
    pub email: Option<String>,
    pub max_results: usize,
}

impl Default for PubmedConfig {
    fn default() -> Self {
        let client = pharmafetch_pubmed::Config::default();
        Self {
            base_url: client.base_url,
            api_key: None,
            tool: client.tool,
            email: client.email,
            max_results: 100,
        }
    }
}

impl std::fmt::Debug for PubmedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubmedConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("tool", &self.tool)
            .field("email", &self.email)
            .field("max_results", &self.max_results)
            .finish()
    }
}

impl PubmedConfig {
    /// Client configuration; `api_key` (flag or environment) wins over the file.
    pub fn client_config(&self, api_key: Option<String>) -> pharmafetch_pubmed::Config {
        pharmafetch_pubmed::Config {
            base_url: self.base_url.clone(),
            api_key: api_key
                .filter(|k| !k.is_empty())
                .or_else(|| self.api_key.clone()),
            tool: self.tool.clone(),
            email: self.email.clone(),
        }
    }
}

/// Transport timeouts, in seconds; 0 (the default) keeps the transport's own
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    pub connect_timeout: u64,
    pub request_timeout: u64,
}

impl HttpSettings {
    pub fn to_http_config(self) -> pharmafetch_core::HttpConfig {
        pharmafetch_core::HttpConfig {
            connect_timeout: seconds(self.connect_timeout),
            request_timeout: seconds(self.request_timeout),
        }
    }
}

fn seconds(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

/// Deserialize a string that may contain environment variable reference like ${VAR}
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| expand_env_var(&s)))
}

/// Expand ${VAR} to environment variable value
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./pharmafetch.toml (current directory)
    /// 2. <user config dir>/pharmafetch/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("pharmafetch.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "pharmafetch") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.pubmed.base_url.contains("eutils"));
        assert_eq!(config.pubmed.max_results, 100);
        assert!(config.pubmed.api_key.is_none());
        assert_eq!(config.http.connect_timeout, 0);
    }

    #[test]
    fn expand_env_var_simple() {
        std::env::set_var("PHARMAFETCH_TEST_VAR", "test_value");
        assert_eq!(
            expand_env_var("${PHARMAFETCH_TEST_VAR}"),
            Some("test_value".to_string())
        );
        std::env::remove_var("PHARMAFETCH_TEST_VAR");
    }

    #[test]
    fn expand_env_var_literal() {
        assert_eq!(expand_env_var("literal"), Some("literal".to_string()));
    }

    #[test]
    fn expand_env_var_missing() {
        assert_eq!(expand_env_var("${NONEXISTENT_VAR_12345}"), None);
    }

    #[test]
    fn parse_config_toml() {
        let toml = r#"
[pubmed]
base_url = "http://localhost:8080/"
api_key = "abc123"
email = "me@example.org"
max_results = 25

[http]
connect_timeout = 5
request_timeout = 60
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.pubmed.base_url, "http://localhost:8080/");
        assert_eq!(config.pubmed.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.pubmed.email.as_deref(), Some("me@example.org"));
        assert_eq!(config.pubmed.tool.as_deref(), Some("pharmafetch"));
        assert_eq!(config.pubmed.max_results, 25);

        let http = config.http.to_http_config();
        assert_eq!(http.connect_timeout, Some(Duration::from_secs(5)));
        assert_eq!(http.request_timeout, Some(Duration::from_secs(60)));
    }

    #[test]
    fn default_timeouts_are_left_to_transport() {
        let http = HttpSettings::default().to_http_config();
        assert!(http.connect_timeout.is_none());
        assert!(http.request_timeout.is_none());
    }

    #[test]
    fn cli_api_key_wins() {
        let pubmed = PubmedConfig {
            api_key: Some("from-file".to_string()),
            ..Default::default()
        };
        let client = pubmed.client_config(Some("from-cli".to_string()));
        assert_eq!(client.api_key.as_deref(), Some("from-cli"));

        let client = pubmed.client_config(None);
        assert_eq!(client.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn debug_redacts_api_key() {
        let pubmed = PubmedConfig {
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert!(!format!("{pubmed:?}").contains("abc123"));
    }

    #[test]
    fn from_file_reads_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("pharmafetch.toml");
        std::fs::write(&path, "[pubmed]\nmax_results = 7\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.pubmed.max_results, 7);
    }

    #[test]
    fn from_file_missing_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Config::from_file(&dir.path().join("nope.toml")).is_err());
    }
}
