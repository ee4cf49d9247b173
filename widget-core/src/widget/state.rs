use crate::{WeatherError, WeatherResult};

/// Where the widget is in its lookup cycle.
///
/// Result and error live in separate variants, so a settled widget holds at
/// most one of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success(WeatherResult),
    Failed(WeatherError),
}

/// Everything the widget renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetState {
    /// Raw text as typed; trimmed only when submitted.
    pub query: String,
    pub phase: Phase,
}

impl WidgetState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&WeatherError> {
        match &self.phase {
            Phase::Failed(err) => Some(err),
            _ => None,
        }
    }
}
