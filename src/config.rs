use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub intake: IntakeConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IntakeConfig {
    pub url: String,
    /// Unset means the request is bounded only by the network layer.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl IntakeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// What the contact action does after the intake accepted a request.
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SuccessBehavior {
    /// Reset the form in place and show a toast.
    #[default]
    Reset,
    /// Navigate to the success page.
    Redirect,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactConfig {
    #[serde(default)]
    pub on_success: SuccessBehavior,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_assets_base_url")]
    pub assets_base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_base_url: default_assets_base_url(),
        }
    }
}

fn default_assets_base_url() -> String {
    "/static".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (VALDECI__INTAKE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("intake.url", "http://127.0.0.1:5000/api/contact")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("VALDECI")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(intake_url) = env::var("INTAKE_URL") {
            builder = builder.set_override("intake.url", intake_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let intake_url = url::Url::parse(&self.intake.url)
            .map_err(|e| format!("Invalid intake url '{}': {e}", self.intake.url))?;

        if !matches!(intake_url.scheme(), "http" | "https") {
            return Err(format!(
                "Intake url must use http or https, got '{}'",
                intake_url.scheme()
            ));
        }

        if self.intake.timeout_secs == Some(0) {
            return Err("Intake timeout must be greater than 0 when set".to_string());
        }

        if self.site.assets_base_url.ends_with('/') {
            return Err("Assets base url must not end with '/'".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            intake: IntakeConfig {
                url: "http://127.0.0.1:5000/api/contact".to_string(),
                timeout_secs: None,
            },
            contact: ContactConfig::default(),
            site: SiteConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_intake_url() {
        let mut config = config();

        config.intake.url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.intake.url = "ftp://example.com/api/contact".to_string();
        assert!(config.validate().is_err());

        config.intake.url = "https://valdeci.com.br/api/contact".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = config();
        config.intake.timeout_secs = Some(0);
        assert!(config.validate().is_err());

        config.intake.timeout_secs = Some(10);
        assert!(config.validate().is_ok());
        assert_eq!(config.intake.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_validation_assets_trailing_slash() {
        let mut config = config();
        config.site.assets_base_url = "/static/".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = config();

        assert_eq!(config.contact.on_success, SuccessBehavior::Reset);
        assert_eq!(config.site.assets_base_url, "/static");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.intake.timeout(), None);
    }

    #[test]
    fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let path = env::temp_dir().join(format!("valdeci-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
[server]
port = 8081

[intake]
url = "https://intake.example.com/api/contact"
timeout_secs = 15

[contact]
on_success = "redirect"
"#,
        )?;

        let config = Config::load(Some(path.to_string_lossy().into_owned()));
        std::fs::remove_file(&path)?;
        let config = config?;

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.intake.url, "https://intake.example.com/api/contact");
        assert_eq!(config.intake.timeout_secs, Some(15));
        assert_eq!(config.contact.on_success, SuccessBehavior::Redirect);

        Ok(())
    }
}
