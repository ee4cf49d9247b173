use thiserror::Error;

/// Fallback shown when the provider rejects a request without saying why.
pub const PROVIDER_FALLBACK_MESSAGE: &str = "Error while fetching weather data.";

/// Every way a lookup can fail. `Display` is the message shown to the user.
///
/// Transport detail is logged where it happens and never stored here, so the
/// error stays cheap to clone into widget state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    /// Blank or whitespace-only query, caught before any request.
    #[error("Invalid location! Please enter a valid location.")]
    InvalidQuery,

    /// Non-success status; carries the provider's message or the fallback.
    #[error("{0}")]
    Provider(String),

    /// Network failure, unreadable body or a body that is not JSON.
    #[error("City not found, please try again.")]
    Transport,

    /// Well-formed JSON that lacks a field the result needs.
    #[error("The weather service returned an incomplete report, please try again.")]
    MalformedResponse,
}

impl WeatherError {
    /// Provider error from an optional message, falling back when it is missing or empty.
    pub fn provider(message: Option<&str>) -> Self {
        match message {
            Some(m) if !m.is_empty() => WeatherError::Provider(m.to_string()),
            _ => WeatherError::Provider(PROVIDER_FALLBACK_MESSAGE.to_string()),
        }
    }
}
