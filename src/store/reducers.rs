//! One reducer per slice, plus the root reducer that routes an action
//! through all three.

use crate::model::Employee;
use crate::mvi::Reducer;

use super::action::Action;
use super::state::{AppState, LocaleTag, ViewMode};

/// Owns the `employees` slice.
pub struct EmployeesReducer;

impl Reducer for EmployeesReducer {
    type State = Vec<Employee>;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::SetEmployees(records) => records.clone(),
            Action::AddEmployee(record) => {
                let mut state = state;
                state.push(record.clone());
                state
            }
            Action::UpdateEmployee(record) => state
                .into_iter()
                .map(|e| if e.id == record.id { record.clone() } else { e })
                .collect(),
            Action::ChangeLocale(_) | Action::SetViewMode(_) => state,
        }
    }
}

/// Owns the `locale` slice. Persistence is done by the store, not here.
pub struct LocaleReducer;

impl Reducer for LocaleReducer {
    type State = LocaleTag;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::ChangeLocale(tag) => tag.clone(),
            Action::SetEmployees(_)
            | Action::AddEmployee(_)
            | Action::UpdateEmployee(_)
            | Action::SetViewMode(_) => state,
        }
    }
}

/// Owns the `viewMode` slice.
pub struct ViewModeReducer;

impl Reducer for ViewModeReducer {
    type State = ViewMode;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        match intent {
            Action::SetViewMode(mode) => *mode,
            Action::SetEmployees(_)
            | Action::AddEmployee(_)
            | Action::UpdateEmployee(_)
            | Action::ChangeLocale(_) => state,
        }
    }
}

/// Combines the slice reducers. Each slice only sees its own value.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = AppState;
    type Intent = Action;

    fn reduce(state: Self::State, intent: &Self::Intent) -> Self::State {
        AppState {
            employees: EmployeesReducer::reduce(state.employees, intent),
            locale: LocaleReducer::reduce(state.locale, intent),
            view_mode: ViewModeReducer::reduce(state.view_mode, intent),
        }
    }
}
