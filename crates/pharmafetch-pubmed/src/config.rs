//! E-utilities client configuration

/// Runtime configuration for the PubMed E-utilities client
#[derive(Clone)]
pub struct Config {
    /// Base URL of the E-utilities service (trailing slash optional)
    pub base_url: String,
    /// NCBI API key; raises the request rate limit
    pub api_key: Option<String>,
    /// `tool` parameter identifying this program to NCBI
    pub tool: Option<String>,
    /// Contact `email` parameter for NCBI
    pub email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/".to_string(),
            api_key: None,
            tool: Some("pharmafetch".to_string()),
            email: None,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("tool", &self.tool)
            .field("email", &self.email)
            .finish()
    }
}

impl Config {
    /// Full URL of an E-utilities endpoint such as `esearch.fcgi`.
    pub fn endpoint(&self, name: &str) -> String {
        format!("{}/{name}", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert!(config.base_url.starts_with("https://"));
        assert!(config.api_key.is_none());
        assert_eq!(config.tool.as_deref(), Some("pharmafetch"));
    }

    #[test]
    fn endpoint_with_and_without_slash() {
        let mut config = Config::default();
        assert_eq!(
            config.endpoint("esearch.fcgi"),
            "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/esearch.fcgi"
        );
        config.base_url = "http://localhost:8080".to_string();
        assert_eq!(config.endpoint("efetch.fcgi"), "http://localhost:8080/efetch.fcgi");
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config {
            api_key: Some("s3cret".to_string()),
            ..Default::default()
        };
        let shown = format!("{config:?}");
        assert!(!shown.contains("s3cret"));
        assert!(shown.contains("redacted"));
    }
}
