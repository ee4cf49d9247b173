use crate::{Config, WeatherError, WeatherResult, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current conditions for a location query.
///
/// Implementations issue at most one request per call and never retry.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_weather(&self, query: &str) -> Result<WeatherResult, WeatherError>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn fetch_weather(&self, query: &str) -> Result<WeatherResult, WeatherError> {
        (**self).fetch_weather(query).await
    }
}

/// Construct the configured provider.
pub fn provider_from_config(config: &Config) -> Box<dyn WeatherProvider> {
    Box::new(WeatherApiProvider::from_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_config_never_fails_without_key() {
        let provider = provider_from_config(&Config::default());
        assert!(format!("{provider:?}").contains("WeatherApiProvider"));
    }
}
