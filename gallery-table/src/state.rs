//! The table state aggregate.

use serde::Deserialize;
use serde::Serialize;

use crate::filter::ColumnFilters;
use crate::selection::Selection;
use crate::sort::SortingState;
use crate::view::ViewMode;
use crate::visibility::ColumnVisibility;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Page position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page, at least 1 once applied.
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Number of pages needed for `row_count` rows. Zero rows means zero pages.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.max(1))
    }

    /// Correct the page size to at least 1 and clamp the index into
    /// `[0, max(0, page_count - 1)]`.
    pub fn clamped(self, row_count: usize) -> Self {
        let page_size = self.page_size.max(1);
        let last = row_count.div_ceil(page_size).saturating_sub(1);
        Self {
            page_index: self.page_index.min(last),
            page_size,
        }
    }

    /// Row range `[start, end)` of the current page within `row_count` rows.
    pub fn bounds(&self, row_count: usize) -> (usize, usize) {
        let start = self.page_index.saturating_mul(self.page_size).min(row_count);
        let end = start.saturating_add(self.page_size).min(row_count);
        (start, end)
    }
}

/// The full mutable state of one table instance.
///
/// Created with defaults (or caller overrides), then mutated only through
/// [`DataTable`](crate::DataTable) actions. Serializable so a caller may
/// persist it between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableState {
    pub row_selection: Selection,
    pub sorting: SortingState,
    pub column_filters: ColumnFilters,
    pub pagination: Pagination,
    pub column_visibility: ColumnVisibility,
    pub view_mode: ViewMode,
}

impl TableState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the initial page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.pagination.page_size = page_size;
        self
    }

    /// Override the initial sort criteria.
    pub fn with_sorting(mut self, sorting: SortingState) -> Self {
        self.sorting = sorting;
        self
    }

    /// Override the initial column visibility.
    pub fn with_visibility(mut self, visibility: ColumnVisibility) -> Self {
        self.column_visibility = visibility;
        self
    }

    /// Override the initial view mode.
    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }
}
