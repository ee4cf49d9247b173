use super::state::WidgetState;
use crate::format::{Clock, location_message, temperature_message, weather_message};

pub const TITLE: &str = "Weather Widget";
pub const DESCRIPTION: &str = "Search for the current weather conditions in your city.";
pub const PLACEHOLDER: &str = "Enter a city name";
pub const SEARCH_LABEL: &str = "Search";
pub const BUSY_LABEL: &str = "Loading...";

/// The three sentences shown for a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLines {
    pub temperature: String,
    pub condition: String,
    pub location: String,
}

/// Host-agnostic snapshot of what the widget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub title: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub query: String,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub error: Option<String>,
    pub result: Option<ResultLines>,
}

impl WidgetView {
    pub fn render(state: &WidgetState, clock: &dyn Clock) -> Self {
        let loading = state.is_loading();

        Self {
            title: TITLE,
            description: DESCRIPTION,
            placeholder: PLACEHOLDER,
            query: state.query.clone(),
            button_label: if loading { BUSY_LABEL } else { SEARCH_LABEL },
            button_enabled: !loading,
            error: state.error().map(ToString::to_string),
            result: state.result().map(|r| ResultLines {
                temperature: temperature_message(r.temperature, &r.unit),
                condition: weather_message(&r.description).to_string(),
                location: location_message(&r.location, clock),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        WeatherError, WeatherResult,
        format::FixedHour,
        widget::state::{Phase, WidgetState},
    };

    #[test]
    fn idle_view_shows_search_only() {
        let view = WidgetView::render(&WidgetState::default(), &FixedHour(12));

        assert_eq!(view.button_label, SEARCH_LABEL);
        assert!(view.button_enabled);
        assert!(view.error.is_none());
        assert!(view.result.is_none());
    }

    #[test]
    fn loading_view_disables_button() {
        let state = WidgetState { query: "London".into(), phase: Phase::Loading };
        let view = WidgetView::render(&state, &FixedHour(12));

        assert_eq!(view.button_label, BUSY_LABEL);
        assert!(!view.button_enabled);
    }

    #[test]
    fn failed_view_shows_error_line() {
        let state =
            WidgetState { query: " ".into(), phase: Phase::Failed(WeatherError::InvalidQuery) };
        let view = WidgetView::render(&state, &FixedHour(12));

        assert_eq!(view.error.as_deref(), Some("Invalid location! Please enter a valid location."));
        assert!(view.result.is_none());
    }

    #[test]
    fn success_view_formats_three_lines() {
        let result = WeatherResult::celsius("London".into(), 15.0, "Cloudy".into());
        let state = WidgetState { query: "london".into(), phase: Phase::Success(result) };
        let view = WidgetView::render(&state, &FixedHour(21));

        assert_eq!(
            view.result,
            Some(ResultLines {
                temperature: "The temperature is 15°C. Comfortable for a light jacket.".into(),
                condition: "It's cloudy today.".into(),
                location: "London at Night".into(),
            })
        );
        assert!(view.error.is_none());
    }
}
