// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// eCourts portal endpoints and HTTP behavior
    #[serde(default)]
    pub portal: PortalConfig,

    /// Output directory settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.portal.user_agent.trim().is_empty() {
            return Err(AppError::validation("portal.user_agent is empty"));
        }
        if self.portal.timeout_secs == 0 {
            return Err(AppError::validation("portal.timeout_secs must be > 0"));
        }
        if self.portal.download_timeout_secs == 0 {
            return Err(AppError::validation(
                "portal.download_timeout_secs must be > 0",
            ));
        }
        Url::parse(&self.portal.base_url)
            .map_err(|_| AppError::validation("portal.base_url is not a valid URL"))?;
        Url::parse(&self.portal.host)
            .map_err(|_| AppError::validation("portal.host is not a valid URL"))?;
        if !self.portal.case_status_url.contains("{cnr}") {
            return Err(AppError::validation(
                "portal.case_status_url must contain a {cnr} placeholder",
            ));
        }
        Url::parse(&self.portal.case_status_url.replace("{cnr}", "X"))
            .map_err(|_| AppError::validation("portal.case_status_url is not a valid URL"))?;
        if self.output.dir.trim().is_empty() {
            return Err(AppError::validation("output.dir is empty"));
        }
        Ok(())
    }
}

/// eCourts portal endpoints and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Cause-list page URL
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Host prefix for resolving relative PDF hrefs
    #[serde(default = "defaults::host")]
    pub host: String,

    /// Case-status lookup URL template with a {cnr} placeholder
    #[serde(default = "defaults::case_status_url")]
    pub case_status_url: String,

    /// Portal home link shown when a lookup is blocked
    #[serde(default = "defaults::fallback_url")]
    pub fallback_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds for page fetches
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Request timeout in seconds for PDF downloads
    #[serde(default = "defaults::download_timeout")]
    pub download_timeout_secs: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            host: defaults::host(),
            case_status_url: defaults::case_status_url(),
            fallback_url: defaults::fallback_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            download_timeout_secs: defaults::download_timeout(),
        }
    }
}

/// Output directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for downloaded PDFs and generated summaries
    #[serde(default = "defaults::output_dir")]
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: defaults::output_dir(),
        }
    }
}

/// Web server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "defaults::server_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "defaults::server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::server_host(),
            port: defaults::server_port(),
        }
    }
}

mod defaults {
    pub fn base_url() -> String {
        "https://services.ecourts.gov.in/ecourtindia_v6/?p=cause_list/".into()
    }
    pub fn host() -> String {
        "https://services.ecourts.gov.in".into()
    }
    pub fn case_status_url() -> String {
        "https://services.ecourts.gov.in/ecourtindia_v6/cases/display_case_status.php?cnr={cnr}"
            .into()
    }
    pub fn fallback_url() -> String {
        "https://services.ecourts.gov.in/ecourtindia_v6/?p=home/index&app_token=e0d9490bd40051a40e68c4626754e0c1f29fc01ede3478003f35f239b8e1f794"
            .into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0".into()
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn download_timeout() -> u64 {
        20
    }
    pub fn output_dir() -> String {
        "data".into()
    }
    pub fn server_host() -> String {
        "127.0.0.1".into()
    }
    pub fn server_port() -> u16 {
        8080
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.portal.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.portal.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_missing_cnr_placeholder() {
        let mut config = Config::default();
        config.portal.case_status_url = "https://example.com/case".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [output]
            dir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(config.output.dir, "out");
        assert_eq!(config.portal.user_agent, "Mozilla/5.0");
        assert!(config.portal.base_url.contains("cause_list"));
    }
}
