use super::{LogFormat, ServerConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-processor")]
#[command(about = "Scores purchase receipts and serves the points over HTTP")]
#[command(version)]
pub struct CliConfig {
    /// Host to bind to (default: 0.0.0.0)
    #[arg(long, env = "RECEIPT_HOST")]
    pub host: Option<String>,

    /// Port to bind to (default: 8080)
    #[arg(long, env = "RECEIPT_PORT")]
    pub port: Option<u16>,

    /// Optional TOML config file; flags given here take precedence over it
    #[arg(short, long, env = "RECEIPT_CONFIG")]
    pub config: Option<String>,

    /// Log output format: text or json
    #[arg(long, env = "RECEIPT_LOG_FORMAT")]
    pub log_format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load(&self) -> Result<ServerConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        let mut config = ServerConfig::from_toml(&file)?;

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(format) = &self.log_format {
            config.log_format = LogFormat::parse("log_format", format)?;
        }
        if self.verbose {
            config.verbose = true;
        }

        config.validate()?;
        Ok(config)
    }
}
