use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::time::Duration;

/// Prefix shared by every catalog environment variable
pub const ENV_PREFIX: &str = "TMDB_";

/// Catalog configuration loaded from `TMDB_*` environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// API key passed through on every request (`TMDB_API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,

    /// Catalog API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Language sent with every request
    #[serde(default = "default_language")]
    pub language: String,

    /// Base path prepended to poster paths
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_language() -> String {
    "pt-BR".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            language: default_language(),
            image_base_url: default_image_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<CatalogConfig>()
            .map_err(|e| CatalogError::Config(format!("Failed to load config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from explicit key/value pairs (same names as the env vars)
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, CatalogConfig>(vars)
            .map_err(|e| CatalogError::Config(format!("Failed to load config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Full poster URL for a poster path, `None` when there is no path
    pub fn poster_url(&self, poster_path: Option<&str>) -> Option<String> {
        crate::types::poster_url(&self.image_base_url, poster_path)
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(CatalogError::Config("TMDB_BASE_URL cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(CatalogError::Config(
                "TMDB_TIMEOUT_SECS must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_apply() {
        let config = CatalogConfig::from_vars(vars(&[("TMDB_API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.language, "pt-BR");
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = CatalogConfig::from_vars(vars(&[
            ("TMDB_LANGUAGE", "en-US"),
            ("TMDB_TIMEOUT_SECS", "3"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.language, "en-US");
        assert_eq!(config.timeout_secs, 3);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = CatalogConfig::from_vars(vars(&[("TMDB_TIMEOUT_SECS", "0")]));
        assert!(matches!(result, Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_poster_url() {
        let config = CatalogConfig::default();
        assert_eq!(
            config.poster_url(Some("/abc.jpg")).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/abc.jpg")
        );
        assert_eq!(config.poster_url(None), None);
        assert_eq!(config.poster_url(Some("")), None);
    }
}
