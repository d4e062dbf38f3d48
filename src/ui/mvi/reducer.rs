use super::intent::Intent;
use super::state::UiState;

/// The only place a screen state changes: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Must not log, fetch or touch anything outside `state`.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
