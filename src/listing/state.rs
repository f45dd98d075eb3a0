use crate::config::DirectoryConfig;
use crate::model::Employee;
use crate::mvi::SliceState;
use crate::store::ViewMode;

use super::view::{clamp_cursor, filter_records, page_count, ListView};

/// Pagination and filter state of the employee list.
///
/// List and card views keep separate cursors; the filter is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewState {
    pub filter: String,
    /// 1-based page of the list view.
    pub list_page: usize,
    /// 1-based page of the card view.
    pub card_page: usize,
    pub list_page_size: usize,
    pub card_page_size: usize,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::with_page_sizes(10, 6)
    }
}

impl SliceState for ListViewState {}

impl ListViewState {
    /// Page sizes below 1 are raised to 1.
    pub fn with_page_sizes(list_page_size: usize, card_page_size: usize) -> Self {
        Self {
            filter: String::new(),
            list_page: 1,
            card_page: 1,
            list_page_size: list_page_size.max(1),
            card_page_size: card_page_size.max(1),
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::with_page_sizes(config.list_page_size, config.card_page_size)
    }

    /// Stored cursor of `mode`, possibly out of range for the current data.
    pub fn cursor(&self, mode: ViewMode) -> usize {
        match mode {
            ViewMode::List => self.list_page,
            ViewMode::Card => self.card_page,
        }
    }

    pub fn page_size(&self, mode: ViewMode) -> usize {
        match mode {
            ViewMode::List => self.list_page_size,
            ViewMode::Card => self.card_page_size,
        }
    }

    pub(crate) fn cursor_mut(&mut self, mode: ViewMode) -> &mut usize {
        match mode {
            ViewMode::List => &mut self.list_page,
            ViewMode::Card => &mut self.card_page,
        }
    }

    /// Derive the filtered, paged view of `records` for `mode`.
    pub fn derive<'a>(&self, records: &'a [Employee], mode: ViewMode) -> ListView<'a> {
        let filtered = filter_records(records, &self.filter);
        let page_size = self.page_size(mode);
        let page_count = page_count(filtered.len(), page_size);
        ListView {
            mode,
            cursor: clamp_cursor(self.cursor(mode), page_count),
            filtered,
            page_size,
            page_count,
        }
    }
}
