use crate::{Config, WeatherReading, provider::wttr::WttrProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod wttr;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for the provider's configured location.
    async fn current_reading(&self) -> anyhow::Result<WeatherReading>;
}

/// Construct the wttr.in provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let provider = WttrProvider::new(config.base_url(), config.city(), config.timeout())?;
    Ok(Box::new(provider))
}
