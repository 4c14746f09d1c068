// Engine settings, loaded from the embedded default.json or from the file named by CALC_CONFIG
use std::path::{Path, PathBuf};

use axum::http::Uri;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::EngineError;

/// Environment variable naming a config file that replaces the embedded default.
pub const CONFIG_PATH_ENV: &str = "CALC_CONFIG";

const DEFAULT_API_PREFIX: &str = "/api";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    #[serde(default)]
    pub server: EngineSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    pub frontend: FrontendSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// Directory with the built calculator UI. Served only when it exists.
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DataSettings {
    /// Lots export used by the profitability report. Unset means no lots are available.
    #[serde(default)]
    pub lots_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings { filter: "info".to_string() }
    }
}

/// Settings of the single page calculator UI.
#[derive(Debug, Deserialize, Clone)]
pub struct FrontendSettings {
    pub ssr: bool,
    pub head: HeadSettings,
    #[serde(default)]
    pub css: Vec<String>,
    #[serde(default)]
    pub dev_proxy: Vec<ProxyRule>,
    pub compatibility_date: NaiveDate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HeadSettings {
    pub lang: String,
    pub title: String,
    pub charset: String,
    pub viewport: String,
}

/// Forwards UI dev-server requests under `prefix` to `target`.
#[derive(Debug, Deserialize, Clone)]
pub struct ProxyRule {
    pub prefix: String,
    pub target: String,
    #[serde(default)]
    pub change_origin: bool,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, EngineError> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, EngineError> {
        let config_str = std::fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_json(&config_str)
    }

    /// Loads the file named by `CALC_CONFIG`, or the embedded default when unset.
    pub fn load() -> Result<Self, EngineError> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from_file(Path::new(&path)),
            None => Self::load_default(),
        }
    }

    pub fn from_json(config_str: &str) -> Result<Self, EngineError> {
        let config: AppConfig = serde_json::from_str(config_str)
            .map_err(|e| EngineError::ConfigError(format!("Invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.server.host.trim().is_empty() {
            return Err(EngineError::ConfigError("server.host must not be empty".to_string()));
        }
        if self.server.port == 0 {
            return Err(EngineError::ConfigError("server.port must be non-zero".to_string()));
        }
        for rule in &self.frontend.dev_proxy {
            if !rule.prefix.starts_with('/') {
                return Err(EngineError::ConfigError(format!(
                    "dev_proxy prefix '{}' must start with '/'",
                    rule.prefix
                )));
            }
            rule.target.parse::<Uri>().map_err(|e| {
                EngineError::ConfigError(format!("dev_proxy target '{}' is not a URI: {}", rule.target, e))
            })?;
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Path prefix the API is mounted under; the UI dev server proxies it to the engine.
    pub fn api_prefix(&self) -> &str {
        self.frontend
            .dev_proxy
            .first()
            .map(|rule| rule.prefix.trim_end_matches('/'))
            .filter(|prefix| !prefix.is_empty())
            .unwrap_or(DEFAULT_API_PREFIX)
    }

    /// Proxy rules whose target port differs from the port the engine listens on.
    pub fn mismatched_proxy_targets(&self) -> Vec<&ProxyRule> {
        self.frontend
            .dev_proxy
            .iter()
            .filter(|rule| {
                rule.target
                    .parse::<Uri>()
                    .ok()
                    .and_then(|uri| uri.port_u16())
                    .map_or(false, |port| port != self.server.port)
            })
            .collect()
    }
}
