use crate::error::{ConfigError, CoreError};
use crate::types::DistrictConfig;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable that overrides the configured access token.
pub const ACCESS_TOKEN_ENV: &str = "FACEBOOK_ACCESS_TOKEN";

const DEFAULT_CONFIG_PATH: &str = "leavewatch.toml";

/// Runtime configuration, loaded from TOML with compiled defaults.
///
/// Every field has a default, so the binary runs with no config file at all:
/// the stock Kerala collector-page table, the production keyword tables, a
/// post limit of 3 and a 1 second inter-request delay.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub access_token: Option<String>,
    pub post_limit: u32,
    pub request_delay_secs: u64,
    pub districts: Vec<DistrictConfig>,
    pub keywords: KeywordConfig,
}

/// Keyword tables as they appear in configuration. Declaration order is
/// matching order.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    pub leave: Vec<String>,
    pub educational: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            post_limit: 3,
            request_delay_secs: 1,
            districts: default_districts(),
            keywords: KeywordConfig::default(),
        }
    }
}

impl Default for KeywordConfig {
    fn default() -> Self {
        let leave = [
            "leave",
            "holiday",
            "അവധി",
            "ലീവ്",
            "school",
            "college",
            "സ്കൂൾ",
            "കോളേജ്",
            "വിദ്യാലയം",
            "weather",
            "rain",
            "മഴ",
            "കാലാവസ്ഥ",
        ];
        let educational = ["educational", "academic", "വിദ്യാഭ്യാസ", "അക്കാദമിക്"];

        Self {
            leave: leave.iter().map(|w| w.to_string()).collect(),
            educational: educational.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Load configuration, preferring `path` when given.
    ///
    /// Without an explicit path, `leavewatch.toml` is read if present and the
    /// compiled defaults are used otherwise. An explicit path that does not
    /// exist is an error. `FACEBOOK_ACCESS_TOKEN` overrides the file token.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    debug!("No configuration file, using compiled defaults");
                    Self::default()
                }
            }
        };

        if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
            if !token.is_empty() {
                info!("Using access token from {}", ACCESS_TOKEN_ENV);
                config.access_token = Some(token);
            }
        }

        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config = toml::from_str(&raw).map_err(ConfigError::Parse)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.post_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "post_limit".to_string(),
                value: self.post_limit.to_string(),
            });
        }
        Ok(())
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_secs(self.request_delay_secs)
    }
}

/// The 14 Kerala district collector pages tracked by the dashboard.
fn default_districts() -> Vec<DistrictConfig> {
    [
        ("Thiruvananthapuram", "collectortvpm"),
        ("Kollam", "dckollam"),
        ("Pathanamthitta", "dc.pathanamthitta"),
        ("Alappuzha", "districtcollectoralappuzha"),
        ("Kottayam", "collectorkottayam"),
        ("Idukki", "collectoridukki"),
        ("Ernakulam", "dcekm"),
        ("Thrissur", "thrissurcollector"),
        ("Palakkad", "DISTRICTCOLLECTORPALAKKAD"),
        ("Malappuram", "malappuramcollector"),
        ("Kozhikode", "CollectorKKD"),
        ("Wayanad", "wayanadWE"),
        ("Kannur", "CollectorKNR"),
        ("Kasaragod", "KasaragodCollector"),
    ]
    .iter()
    .map(|(name, page)| DistrictConfig::new(*name, *page))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_production_tables() {
        let config = AppConfig::default();
        assert_eq!(config.districts.len(), 14);
        assert_eq!(config.keywords.leave.len(), 13);
        assert_eq!(config.keywords.educational.len(), 4);
        assert_eq!(config.post_limit, 3);
        assert_eq!(config.request_delay(), Duration::from_secs(1));
        assert_eq!(config.districts[0].name, "Thiruvananthapuram");
        assert_eq!(config.districts[0].page, "collectortvpm");
    }

    #[test]
    fn config_parses_from_toml() {
        let raw = r#"
            access_token = "EAAB..."
            post_limit = 5
            request_delay_secs = 2

            [[districts]]
            name = "Ernakulam"
            page = "dcekm"

            [keywords]
            leave = ["rain"]
            educational = ["academic"]
        "#;

        let config: AppConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("EAAB..."));
        assert_eq!(config.post_limit, 5);
        assert_eq!(config.request_delay(), Duration::from_secs(2));
        assert_eq!(config.districts, vec![DistrictConfig::new("Ernakulam", "dcekm")]);
        assert_eq!(config.keywords.leave, vec!["rain"]);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("post_limit = 2").unwrap();
        assert_eq!(config.post_limit, 2);
        assert_eq!(config.districts.len(), 14);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn zero_post_limit_is_rejected() {
        let config = AppConfig {
            post_limit: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "post_limit"
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/leavewatch.toml")));
        assert!(matches!(
            result,
            Err(CoreError::Config(ConfigError::FileNotFound { .. }))
        ));
    }

    #[test]
    fn env_token_overrides_configured_token() {
        std::env::set_var(ACCESS_TOKEN_ENV, "env-token");
        let config = AppConfig::load(None).unwrap();
        std::env::remove_var(ACCESS_TOKEN_ENV);
        assert_eq!(config.access_token.as_deref(), Some("env-token"));
    }
}
