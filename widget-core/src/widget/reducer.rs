use super::intent::WidgetIntent;
use super::state::{Phase, WidgetState};
use crate::WeatherError;

/// The only place widget state changes. Pure: `(state, intent) -> state`.
pub fn reduce(state: WidgetState, intent: WidgetIntent) -> WidgetState {
    match intent {
        WidgetIntent::EditQuery(query) => WidgetState { query, ..state },

        // Search is disabled while a request is outstanding.
        WidgetIntent::Submit if state.is_loading() => state,
        WidgetIntent::Submit => {
            let phase = if state.query.trim().is_empty() {
                Phase::Failed(WeatherError::InvalidQuery)
            } else {
                Phase::Loading
            };
            WidgetState { phase, ..state }
        }

        WidgetIntent::Settled(outcome) => match state.phase {
            Phase::Loading => {
                let phase = match outcome {
                    Ok(result) => Phase::Success(result),
                    Err(err) => Phase::Failed(err),
                };
                WidgetState { phase, ..state }
            }
            // Nothing was outstanding.
            _ => state,
        },
    }
}
