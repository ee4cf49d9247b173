use crate::{WeatherError, WeatherResult};

/// Events that move the widget between phases.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetIntent {
    /// The search field changed.
    EditQuery(String),
    /// The user pressed Search.
    Submit,
    /// The outstanding request finished.
    Settled(Result<WeatherResult, WeatherError>),
}
