use crate::config::DirectoryConfig;
use crate::model::{Employee, EmployeeId};
use crate::mvi::Reducer;
use crate::store::{Action, Store, StoreError, ViewMode};

use super::delete::DeleteConfirmation;
use super::intent::ListIntent;
use super::reducer::ListReducer;
use super::state::ListViewState;
use super::view::filter_records;

/// One rendered page, detached from the store snapshot it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage {
    pub mode: ViewMode,
    pub items: Vec<Employee>,
    pub cursor: usize,
    pub page_count: usize,
    pub filtered_count: usize,
}

/// The employee list screen's logic: reads the store, owns the list
/// view-model and the pending delete.
pub struct EmployeeList {
    store: Store,
    state: ListViewState,
    deletion: DeleteConfirmation,
}

impl EmployeeList {
    pub fn new(store: Store, config: &DirectoryConfig) -> Self {
        Self {
            store,
            state: ListViewState::from_config(config),
            deletion: DeleteConfirmation::default(),
        }
    }

    /// First display: installs `roster` when the store has no employees yet.
    pub fn mount(&self, roster: Vec<Employee>) -> Result<bool, StoreError> {
        self.store.seed_if_empty(roster)
    }

    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn view_mode(&self) -> ViewMode {
        self.store.get_state().view_mode
    }

    /// Switch layout. Cursors and filter are kept as they are.
    pub fn toggle_view(&self, mode: ViewMode) -> Result<(), StoreError> {
        self.store.dispatch(Action::SetViewMode(mode))
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        let mode = self.view_mode();
        self.apply(ListIntent::SetFilter {
            text: text.into(),
            mode,
        });
    }

    pub fn prev_page(&mut self) {
        let mode = self.view_mode();
        let filtered = self.filtered_count();
        self.apply(ListIntent::PrevPage { mode, filtered });
    }

    pub fn next_page(&mut self) {
        let mode = self.view_mode();
        let filtered = self.filtered_count();
        self.apply(ListIntent::NextPage { mode, filtered });
    }

    pub fn go_to_page(&mut self, page: usize) {
        let mode = self.view_mode();
        let filtered = self.filtered_count();
        self.apply(ListIntent::GoToPage {
            mode,
            page,
            filtered,
        });
    }

    /// Current page of the active view mode.
    pub fn page(&self) -> ListPage {
        let snapshot = self.store.get_state();
        let view = self.state.derive(&snapshot.employees, snapshot.view_mode);
        ListPage {
            mode: view.mode,
            items: view.page().iter().map(|e| (*e).clone()).collect(),
            cursor: view.cursor,
            page_count: view.page_count,
            filtered_count: view.filtered_count(),
        }
    }

    pub fn request_delete(&mut self, id: &EmployeeId) -> bool {
        let employees = self.store.get_state().employees;
        self.deletion.request(&employees, id)
    }

    pub fn pending_delete(&self) -> Option<&Employee> {
        self.deletion.pending()
    }

    pub fn confirm_delete(&mut self) -> Result<Option<EmployeeId>, StoreError> {
        self.deletion.confirm(&self.store)
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    fn filtered_count(&self) -> usize {
        let employees = self.store.get_state().employees;
        filter_records(&employees, &self.state.filter).len()
    }

    fn apply(&mut self, intent: ListIntent) {
        self.state = ListReducer::reduce(std::mem::take(&mut self.state), &intent);
    }
}
