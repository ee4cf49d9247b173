//! Core library for the weather widget.
//!
//! This crate defines:
//! - Configuration & credential lookup
//! - The weatherapi.com client behind the [`WeatherProvider`] trait
//! - Message formatting for temperatures, conditions and locations
//! - The widget's state machine and view model
//!
//! It is used by `weather-widget`, but any host that can render a
//! [`WidgetView`] can drive a [`WeatherWidget`].

pub mod config;
pub mod error;
pub mod format;
pub mod model;
pub mod provider;
pub mod widget;

pub use config::Config;
pub use error::WeatherError;
pub use format::{Clock, SystemClock};
pub use model::WeatherResult;
pub use provider::{WeatherProvider, provider_from_config, weatherapi::WeatherApiProvider};
pub use widget::{Phase, WeatherWidget, WidgetState, WidgetView};
