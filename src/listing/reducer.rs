use crate::mvi::Reducer;

use super::intent::ListIntent;
use super::state::ListViewState;
use super::view::{clamp_cursor, page_count};

/// Reducer for list filtering and pagination.
///
/// Moves step from the cursor pulled into range, so a stale cursor left over
/// from before a filter change never walks further out of bounds.
pub struct ListReducer;

impl Reducer for ListReducer {
    type State = ListViewState;
    type Intent = ListIntent;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            ListIntent::SetFilter { text, mode } => {
                state.filter = text.clone();
                *state.cursor_mut(*mode) = 1;
            }
            ListIntent::PrevPage { mode, filtered } => {
                let pages = page_count(*filtered, state.page_size(*mode));
                let current = clamp_cursor(state.cursor(*mode), pages);
                if current > 1 {
                    *state.cursor_mut(*mode) = current - 1;
                }
            }
            ListIntent::NextPage { mode, filtered } => {
                let pages = page_count(*filtered, state.page_size(*mode));
                let current = clamp_cursor(state.cursor(*mode), pages);
                if current < pages {
                    *state.cursor_mut(*mode) = current + 1;
                }
            }
            ListIntent::GoToPage {
                mode,
                page,
                filtered,
            } => {
                let pages = page_count(*filtered, state.page_size(*mode));
                *state.cursor_mut(*mode) = clamp_cursor(*page, pages);
            }
        }
        state
    }
}
