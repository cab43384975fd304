use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use std::{fmt, time::Duration};

use crate::{error::ResponseError, model::WeatherReading};

use super::WeatherProvider;

/// Current conditions from wttr.in's `format=j1` JSON endpoint.
#[derive(Debug, Clone)]
pub struct WttrProvider {
    url: Url,
    http: Client,
}

impl WttrProvider {
    pub fn new(base_url: &str, city: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .with_context(|| format!("Invalid weather service URL: {base_url}"))?;

        url.path_segments_mut()
            .map_err(|_| anyhow!("Invalid weather service URL: {base_url}"))?
            .pop_if_empty()
            .push(city);
        url.query_pairs_mut().append_pair("format", "j1");

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self { url, http })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl WeatherProvider for WttrProvider {
    async fn current_reading(&self) -> Result<WeatherReading> {
        tracing::debug!(url = %self.url, "requesting current conditions");

        let res = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .context("Failed to send request to wttr.in")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read wttr.in response body")?;

        tracing::debug!(%status, bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(anyhow!(
                "wttr.in request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        parse_reading(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WttrResponse {
    current_condition: Vec<WttrCondition>,
}

#[derive(Debug, Deserialize)]
struct WttrCondition {
    #[serde(rename = "temp_C")]
    temp_c: Scalar,
    #[serde(rename = "FeelsLikeC")]
    feels_like_c: Scalar,
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<WttrValue>,
}

#[derive(Debug, Deserialize)]
struct WttrValue {
    value: String,
}

/// wttr.in sends numbers as strings, but accept bare numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

fn parse_reading(body: &str) -> Result<WeatherReading> {
    let parsed: WttrResponse =
        serde_json::from_str(body).context("Failed to parse wttr.in JSON")?;

    let current = parsed
        .current_condition
        .into_iter()
        .next()
        .ok_or(ResponseError::NoCurrentCondition)?;

    let description = current
        .weather_desc
        .into_iter()
        .next()
        .map(|d| d.value)
        .ok_or(ResponseError::NoDescription)?;

    Ok(WeatherReading {
        temperature_c: current.temp_c.to_string(),
        feels_like_c: current.feels_like_c.to_string(),
        description,
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
