//! Pure derivations: filtering, page counts and page slices.

use std::ops::{Range, RangeInclusive};

use crate::model::Employee;
use crate::store::ViewMode;

/// Case-insensitive substring match over first name, last name and
/// department. An empty filter matches everything.
pub fn matches_filter(employee: &Employee, filter: &str) -> bool {
    filter.is_empty() || employee.search_text().contains(&filter.to_lowercase())
}

/// Records matching `filter`, in collection order.
pub fn filter_records<'a>(records: &'a [Employee], filter: &str) -> Vec<&'a Employee> {
    records
        .iter()
        .filter(|e| matches_filter(e, filter))
        .collect()
}

/// `max(1, ceil(filtered / page_size))`. A zero page size counts as 1.
pub fn page_count(filtered: usize, page_size: usize) -> usize {
    filtered.div_ceil(page_size.max(1)).max(1)
}

/// Pull a cursor into `[1, page_count]`.
pub fn clamp_cursor(cursor: usize, page_count: usize) -> usize {
    cursor.clamp(1, page_count.max(1))
}

/// Index range of page `cursor` within `len` items. Pages past the end are
/// empty ranges rather than errors.
pub fn page_bounds(cursor: usize, page_size: usize, len: usize) -> Range<usize> {
    let start = cursor.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// `items[(cursor - 1) * page_size .. cursor * page_size]`, truncated to
/// what exists.
pub fn page_slice<T>(items: &[T], cursor: usize, page_size: usize) -> &[T] {
    &items[page_bounds(cursor, page_size, items.len())]
}

/// Derived list view for one mode.
///
/// `cursor` is the stored cursor pulled into range, so the visible page is
/// never past the end even after the collection shrank or the filter
/// changed while the other mode was active.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub mode: ViewMode,
    pub filtered: Vec<&'a Employee>,
    pub cursor: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl<'a> ListView<'a> {
    pub fn page(&self) -> &[&'a Employee] {
        page_slice(&self.filtered, self.cursor, self.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn has_prev(&self) -> bool {
        self.cursor > 1
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.page_count
    }

    /// Page numbers for the pager buttons.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.page_count
    }
}
