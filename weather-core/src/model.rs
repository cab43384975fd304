use serde::Serialize;

use crate::icons::IconMap;

/// Current conditions as reported by the weather service.
///
/// Temperatures are kept as the text the service returned and rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherReading {
    pub temperature_c: String,
    pub feels_like_c: String,
    pub description: String,
}

/// The object printed for the status-bar host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub text: String,
    pub tooltip: String,
}

impl OutputRecord {
    /// Text shown in the bar when no reading is available.
    pub const UNAVAILABLE: &'static str = "N/A";

    pub fn from_reading(reading: &WeatherReading, icons: &IconMap) -> Self {
        let icon = icons.lookup(&reading.description);

        Self {
            text: format!("{icon} {}°C", reading.temperature_c),
            tooltip: format!(
                "{} | Feels like {}°C",
                reading.description, reading.feels_like_c
            ),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self { text: Self::UNAVAILABLE.to_string(), tooltip: reason.into() }
    }

    /// Fallback record carrying the full context chain of `err`.
    pub fn from_error(err: &anyhow::Error) -> Self {
        Self::unavailable(format!("{err:#}"))
    }

    /// Single-line compact JSON.
    pub fn to_json_line(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
