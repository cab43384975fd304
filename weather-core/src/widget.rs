use std::io::Write;

use anyhow::{Context, Result};

use crate::{Config, IconMap, OutputRecord, WeatherProvider, provider::provider_from_config};

/// One fetch → icon lookup → record pass.
#[derive(Debug)]
pub struct WeatherWidget {
    provider: Box<dyn WeatherProvider>,
    icons: IconMap,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>, icons: IconMap) -> Self {
        Self { provider, icons }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(provider_from_config(config)?, config.icon_map()))
    }

    /// Always yields a record; failures become the "N/A" fallback.
    pub async fn status(&self) -> OutputRecord {
        match self.provider.current_reading().await {
            Ok(reading) => OutputRecord::from_reading(&reading, &self.icons),
            Err(err) => {
                tracing::warn!("weather unavailable: {err:#}");
                OutputRecord::from_error(&err)
            }
        }
    }
}

/// Write `record` as one JSON line.
pub fn emit<W: Write>(out: &mut W, record: &OutputRecord) -> Result<()> {
    let line = record.to_json_line().context("Failed to serialize output record")?;
    writeln!(out, "{line}").context("Failed to write output record")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WeatherReading;
    use async_trait::async_trait;
    use serde_json::Value;
    use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

    #[derive(Debug)]
    struct Canned(Option<WeatherReading>);

    #[async_trait]
    impl WeatherProvider for Canned {
        async fn current_reading(&self) -> Result<WeatherReading> {
            self.0.clone().ok_or_else(|| anyhow::anyhow!("simulated outage"))
        }
    }

    fn emitted(record: &OutputRecord) -> String {
        let mut buf = Vec::new();
        emit(&mut buf, record).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn assert_single_json_line(out: &str) -> Value {
        assert!(out.ends_with('\n'));
        assert_eq!(out.lines().count(), 1);

        let value: Value = serde_json::from_str(out.trim_end()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("text") && obj.contains_key("tooltip"));
        value
    }

    #[tokio::test]
    async fn successful_reading_renders_icon_and_temperatures() {
        let widget = WeatherWidget::new(
            Box::new(Canned(Some(WeatherReading {
                temperature_c: "22".into(),
                feels_like_c: "20".into(),
                description: "Sunny".into(),
            }))),
            IconMap::builtin(),
        );

        let out = emitted(&widget.status().await);
        let value = assert_single_json_line(&out);

        assert_eq!(value["text"], "☀️ 22°C");
        assert_eq!(value["tooltip"], "Sunny | Feels like 20°C");
    }

    #[tokio::test]
    async fn provider_failure_renders_fallback() {
        let widget = WeatherWidget::new(Box::new(Canned(None)), IconMap::builtin());

        let record = widget.status().await;

        assert_eq!(record, OutputRecord::unavailable("simulated outage"));
        assert_single_json_line(&emitted(&record));
    }

    #[tokio::test]
    async fn connection_refused_yields_na_record() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = Config { base_url: Some(format!("http://{addr}")), ..Config::default() };
        let widget = WeatherWidget::from_config(&config).unwrap();

        let record = widget.status().await;

        assert_eq!(record.text, "N/A");
        assert!(record.tooltip.starts_with("Failed to send request to wttr.in"));
        assert_single_json_line(&emitted(&record));
    }

    #[tokio::test]
    async fn missing_current_condition_yields_na_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"weather":[]}"#))
            .mount(&server)
            .await;

        let config = Config { base_url: Some(server.uri()), ..Config::default() };
        let record = WeatherWidget::from_config(&config).unwrap().status().await;

        assert_eq!(record.text, "N/A");
        assert!(record.tooltip.contains("current_condition"));
    }

    #[tokio::test]
    async fn configured_city_and_icons_flow_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(wiremock::matchers::path("/Oslo"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"current_condition":[{"temp_C":"3","FeelsLikeC":"-1",
                    "weatherDesc":[{"value":"Light Rain"}]}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let config = Config {
            city: Some("Oslo".into()),
            base_url: Some(server.uri()),
            icons: [("Light Rain".to_string(), "R".to_string())].into_iter().collect(),
            ..Config::default()
        };
        let record = WeatherWidget::from_config(&config).unwrap().status().await;

        assert_eq!(record.text, "R 3°C");
        assert_eq!(record.tooltip, "Light Rain | Feels like -1°C");
    }
}
