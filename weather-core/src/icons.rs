use std::collections::HashMap;

/// Icon used when a description has no entry in the map.
pub const DEFAULT_ICON: &str = "🌡️";

/// Built-in icons keyed by the wttr.in description with whitespace removed.
const BUILTIN_ICONS: &[(&str, &str)] = &[
    ("Overcast", "☁️"),
    ("Cloudy", "☁️"),
    ("Fog", "🌫"),
    ("HeavyRain", "🌧"),
    ("HeavyShowers", "🌦"),
    ("HeavySnow", "❄️"),
    ("LightRain", "🌦"),
    ("LightShowers", "🌦"),
    ("LightSleet", "🌧"),
    ("LightSnow", "🌨"),
    ("PartlyCloudy", "⛅"),
    ("Sunny", "☀️"),
    ("ThunderyHeavyRain", "⛈"),
    ("ThunderyShowers", "⛈"),
    ("VeryCloudy", "☁️"),
];

/// Strip every whitespace character, so "Light Rain" becomes "LightRain".
pub fn normalize_description(description: &str) -> String {
    description.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Immutable description → icon table.
///
/// Built once at startup from the built-in entries, optionally overlaid with
/// user overrides from the config file (to match the font in use, e.g. Nerd
/// Fonts glyphs instead of emoji).
#[derive(Debug, Clone)]
pub struct IconMap {
    icons: HashMap<String, String>,
}

impl IconMap {
    pub fn builtin() -> Self {
        let icons = BUILTIN_ICONS
            .iter()
            .map(|(desc, icon)| ((*desc).to_string(), (*icon).to_string()))
            .collect();

        Self { icons }
    }

    /// Built-in table with `overrides` layered on top. Override keys are
    /// normalized the same way descriptions are.
    pub fn with_overrides<'a, I>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut map = Self::builtin();
        for (desc, icon) in overrides {
            map.icons.insert(normalize_description(desc), icon.clone());
        }
        map
    }

    /// Icon for a raw API description, or [`DEFAULT_ICON`].
    pub fn lookup(&self, description: &str) -> &str {
        self.icons
            .get(&normalize_description(description))
            .map(String::as_str)
            .unwrap_or(DEFAULT_ICON)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl Default for IconMap {
    fn default() -> Self {
        Self::builtin()
    }
}
