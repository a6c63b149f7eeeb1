#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::utils::error::Result;
use crate::utils::validation::{validate_not_empty, validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(field_name: &str, value: &str) -> Result<Self> {
        let value = value.trim().to_ascii_lowercase();
        validate_one_of(field_name, &value, &["text", "json"])?;
        Ok(if value == "json" {
            LogFormat::Json
        } else {
            LogFormat::Text
        })
    }
}

/// Fully resolved settings the server runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::Text,
            verbose: false,
        }
    }
}

impl ServerConfig {
    /// Start from defaults and apply whatever the file sets.
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = &file.server.host {
            config.host = host.clone();
        }
        if let Some(port) = file.server.port {
            config.port = port;
        }
        if let Some(format) = &file.logging.format {
            config.log_format = LogFormat::parse("logging.format", format)?;
        }
        if let Some(verbose) = file.logging.verbose {
            config.verbose = verbose;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_not_empty("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
