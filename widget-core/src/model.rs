use serde::{Deserialize, Serialize};

/// Scale code for temperatures reported by the client.
pub const CELSIUS: &str = "C";

/// Normalized current conditions for one successful lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    /// Display name as returned by the provider; may differ from the query.
    pub location: String,
    pub temperature: f64,
    /// Free-text condition in the provider's own vocabulary.
    pub description: String,
    pub unit: String,
}

impl WeatherResult {
    pub fn celsius(location: String, temperature: f64, description: String) -> Self {
        Self { location, temperature, description, unit: CELSIUS.to_string() }
    }
}
