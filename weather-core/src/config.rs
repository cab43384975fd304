use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::icons::IconMap;

/// Location used when neither the command line nor the config file names one.
pub const DEFAULT_CITY: &str = "New_York";

/// wttr.in endpoint; overridable mostly for testing against a local server.
pub const DEFAULT_BASE_URL: &str = "https://wttr.in";

/// Optional configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// city = "Berlin"
/// timeout_secs = 10
///
/// [icons]
/// Sunny = "☼"
/// "Patchy rain nearby" = "🌦"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub city: Option<String>,
    pub base_url: Option<String>,

    /// Request timeout. Absent means the HTTP client default (none).
    pub timeout_secs: Option<u64>,

    /// Description → icon overrides layered over the built-in table.
    pub icons: HashMap<String, String>,
}

impl Config {
    /// Load from the platform config directory, or defaults if no file exists.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "waybar-weather", "waybar-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().filter(|c| !c.trim().is_empty()).unwrap_or(DEFAULT_CITY)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().filter(|u| !u.trim().is_empty()).unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn icon_map(&self) -> IconMap {
        IconMap::with_overrides(&self.icons)
    }
}
