use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

use super::document::DocumentConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "homepage-editor.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/homepage-editor/config.toml";

/// Main configuration structure for the homepage editor
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Edited YAML document
    #[serde(default)]
    pub document: DocumentConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. homepage-editor.toml in current directory
    /// 3. /etc/homepage-editor/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.document_path {
            self.document.path = path;
        }
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(dir) = overrides.static_dir {
            self.server.static_dir = Some(dir);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("Port cannot be 0".to_string()));
        }

        if self.document.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Document path cannot be empty".to_string(),
            ));
        }

        self.bind_address()?;

        Ok(())
    }

    /// Listener address. The host must be an IP literal; IPv6 may be given
    /// with or without brackets.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let host = self.server.host.trim();
        let host = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host);
        let ip: IpAddr = host.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid host '{}'", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub document_path: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<String>,
    pub log_level: Option<String>,
}
