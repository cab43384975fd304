use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use waybar_weather_core::{Config, OutputRecord, WeatherWidget};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "waybar-weather",
    version,
    about = "Print current weather as a Waybar custom-module JSON record"
)]
pub struct Cli {
    /// City or location as understood by wttr.in, e.g. "New_York" or "Berlin".
    #[arg(long, env = "WAYBAR_WEATHER_CITY")]
    pub city: Option<String>,

    /// Config file; defaults to the platform config directory.
    #[arg(long, env = "WAYBAR_WEATHER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Weather service base URL.
    #[arg(long, env = "WAYBAR_WEATHER_URL", hide = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Never fails: any error is folded into the "N/A" record.
    pub async fn run(self) -> OutputRecord {
        match self.widget() {
            Ok(widget) => widget.status().await,
            Err(err) => {
                tracing::warn!("could not set up widget: {err:#}");
                OutputRecord::from_error(&err)
            }
        }
    }

    fn widget(self) -> Result<WeatherWidget> {
        let config = self.resolve_config()?;
        tracing::debug!(city = config.city(), url = config.base_url(), "resolved configuration");
        WeatherWidget::from_config(&config)
    }

    /// Config file values with command-line and environment values layered on top.
    fn resolve_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(city) = self.city {
            config.city = Some(city);
        }
        if let Some(base_url) = self.base_url {
            config.base_url = Some(base_url);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }

        Ok(config)
    }
}

/// N/A record for arguments clap rejected, carrying the first line of its message.
pub fn record_for_parse_error(err: &clap::Error) -> OutputRecord {
    let msg = err.to_string();
    OutputRecord::unavailable(msg.lines().next().unwrap_or_default())
}
