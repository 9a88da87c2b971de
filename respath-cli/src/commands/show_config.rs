//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_settings, GlobalOptions};
use clap::{Args, ValueEnum};
use respath::Config;

/// Output format for the effective configuration.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigFormat {
    /// YAML, the configuration file format
    #[default]
    Yaml,
    /// JSON
    Json,
}

/// Show the effective configuration after merging every source.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Output format
    #[arg(long, value_enum, default_value_t = ConfigFormat::Yaml)]
    pub format: ConfigFormat,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global)?;
        let config = Config::from(&settings);

        let rendered = match self.format {
            ConfigFormat::Yaml => serde_yaml::to_string(&config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?,
            ConfigFormat::Json => serde_json::to_string_pretty(&config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {e}")))?,
        };

        println!("{}", rendered.trim_end());
        Ok(())
    }
}
