//! Core library for the `waybar-weather` status-bar widget.
//!
//! This crate defines:
//! - The description → icon table
//! - Optional on-disk configuration (city, endpoint, icon overrides)
//! - Abstraction over the weather source and its wttr.in implementation
//! - The widget turning a reading, or a failure, into the host's JSON record
//!
//! It is used by `waybar-weather`, but can also be reused by other bar integrations.

pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod provider;
pub mod widget;

pub use config::Config;
pub use error::ResponseError;
pub use icons::{DEFAULT_ICON, IconMap};
pub use model::{OutputRecord, WeatherReading};
pub use provider::WeatherProvider;
pub use widget::{WeatherWidget, emit};
