use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info, warn};

use crate::{
    config::{Config, DEFAULT_ENDPOINT},
    error::WeatherError,
    model::WeatherResult,
};

use super::WeatherProvider;

/// Client for the weatherapi.com current-conditions endpoint.
#[derive(Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, endpoint: DEFAULT_ENDPOINT.to_string(), http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.resolve_api_key()).with_endpoint(config.endpoint())
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Use a preconfigured HTTP client (proxy settings, TLS roots).
    pub fn with_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("endpoint", &self.endpoint)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn fetch_weather(&self, query: &str) -> Result<WeatherResult, WeatherError> {
        debug!(endpoint = %self.endpoint, query, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "failed to send request to weatherapi.com");
                WeatherError::Transport
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(error = %e, %status, "failed to read weatherapi.com response body");
            WeatherError::Transport
        })?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(weather) => info!(location = %weather.location, "weather lookup succeeded"),
            Err(err) => {
                warn!(%status, body = %truncate_body(&body), "weather lookup failed: {err}");
            }
        }
        result
    }
}

/// Map a status and raw body from the provider onto a result or a user-facing error.
///
/// Non-JSON bodies collapse to [`WeatherError::Transport`] whatever the status.
/// On failure statuses the provider's `error.message` is passed through. On
/// success, JSON lacking any required field is [`WeatherError::MalformedResponse`].
pub fn interpret_response(status: StatusCode, body: &str) -> Result<WeatherResult, WeatherError> {
    let json: Value = serde_json::from_str(body).map_err(|_| WeatherError::Transport)?;

    if !status.is_success() {
        let message = json.pointer("/error/message").and_then(Value::as_str);
        return Err(WeatherError::provider(message));
    }

    let parsed: WaResponse =
        serde_json::from_value(json).map_err(|_| WeatherError::MalformedResponse)?;

    Ok(WeatherResult::celsius(
        parsed.location.name,
        parsed.current.temp_c,
        parsed.current.condition.text,
    ))
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
