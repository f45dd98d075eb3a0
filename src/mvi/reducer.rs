//! Reducer trait.

use super::intent::Intent;
use super::state::SliceState;

/// Reducer transforms one slice based on an intent.
///
/// The reducer is the only place where slice transitions happen. It must be
/// total and free of side effects; anything that touches the outside world
/// (persisting the locale, notifying subscribers) is done by the caller
/// around the `reduce` call.
pub trait Reducer {
    /// The slice this reducer owns.
    type State: SliceState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the next slice value.
    ///
    /// Intents are borrowed because one action is routed through several
    /// slice reducers in turn.
    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State;
}
