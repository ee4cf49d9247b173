//! Input/state controller for the weather widget.
//!
//! State follows a small unidirectional loop:
//!
//! ```text
//! Intent ──→ reduce ──→ WidgetState ──→ WidgetView
//!    ↑                                     │
//!    └─────────────────────────────────────┘
//! ```
//!
//! [`WeatherWidget`] owns the state, feeds intents through [`reduce`], and
//! performs the single outbound request a valid submit calls for.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::WidgetIntent;
pub use reducer::reduce;
pub use state::{Phase, WidgetState};
pub use view::{ResultLines, WidgetView};

use crate::{WeatherError, WeatherResult, format::Clock, provider::WeatherProvider};
use tracing::{debug, warn};

#[derive(Debug)]
pub struct WeatherWidget<P> {
    provider: P,
    state: WidgetState,
}

impl<P: WeatherProvider> WeatherWidget<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, state: WidgetState::default() }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// False while a request is outstanding.
    pub fn can_submit(&self) -> bool {
        !self.state.is_loading()
    }

    pub fn view(&self, clock: &dyn Clock) -> WidgetView {
        WidgetView::render(&self.state, clock)
    }

    pub fn dispatch(&mut self, intent: WidgetIntent) {
        apply(&mut self.state, intent);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.dispatch(WidgetIntent::EditQuery(query.into()));
    }

    /// Apply a submit and return the trimmed query when a request must be issued.
    ///
    /// `None` means nothing goes out: the query was blank (the widget is now
    /// failed) or a request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<String> {
        let was_loading = self.state.is_loading();
        self.dispatch(WidgetIntent::Submit);

        (!was_loading && self.state.is_loading()).then(|| self.state.query.trim().to_string())
    }

    /// Record the outcome of the outstanding request.
    pub fn settle(&mut self, outcome: Result<WeatherResult, WeatherError>) {
        self.dispatch(WidgetIntent::Settled(outcome));
    }

    /// Set the query and run one full lookup cycle.
    ///
    /// Every path through here leaves the widget out of `Loading`, including
    /// the future being dropped mid-request, which settles as a transport
    /// failure. A call made while a request is outstanding is a no-op.
    pub async fn submit(&mut self, raw_query: &str) {
        if !self.can_submit() {
            debug!("submit ignored while a request is outstanding");
            return;
        }

        self.set_query(raw_query);
        let Some(query) = self.begin_submit() else {
            debug!("blank query rejected");
            return;
        };

        let Self { provider, state } = self;
        let pending = PendingRequest { state: Some(state) };
        let outcome = provider.fetch_weather(&query).await;
        pending.settle(outcome);
    }
}

fn apply(state: &mut WidgetState, intent: WidgetIntent) {
    let current = std::mem::take(state);
    *state = reduce(current, intent);
}

/// Holds the widget's state while a request is in flight and settles it on drop.
struct PendingRequest<'a> {
    state: Option<&'a mut WidgetState>,
}

impl PendingRequest<'_> {
    fn settle(mut self, outcome: Result<WeatherResult, WeatherError>) {
        if let Some(state) = self.state.take() {
            apply(state, WidgetIntent::Settled(outcome));
        }
    }
}

impl Drop for PendingRequest<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            warn!("weather request abandoned before it settled");
            apply(state, WidgetIntent::Settled(Err(WeatherError::Transport)));
        }
    }
}
