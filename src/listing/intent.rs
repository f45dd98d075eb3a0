use crate::mvi::Intent;
use crate::store::ViewMode;

/// Navigation actions on the list view-model.
///
/// `mode` is the view mode active when the user acted; only that mode's
/// cursor moves. `filtered` is the current filtered record count, needed to
/// bound the cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum ListIntent {
    /// New filter text; resets the active cursor to 1.
    SetFilter { text: String, mode: ViewMode },
    PrevPage { mode: ViewMode, filtered: usize },
    NextPage { mode: ViewMode, filtered: usize },
    /// Jump to `page`, clamped into `[1, page_count]`.
    GoToPage {
        mode: ViewMode,
        page: usize,
        filtered: usize,
    },
}

impl Intent for ListIntent {}
