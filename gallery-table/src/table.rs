//! The table coordinator.

use std::collections::HashSet;
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::column::ColumnDescriptor;
use crate::column::ColumnKind;
use crate::column::TableRow;
use crate::column::column_index;
use crate::filter::ColumnFilters;
use crate::filter::FilterValue;
use crate::filter::filter_rows;
use crate::sort::ColumnSort;
use crate::sort::SortDirection;
use crate::sort::SortingState;
use crate::sort::next_direction;
use crate::sort::normalize_sorting;
use crate::sort::sort_indices;
use crate::state::Pagination;
use crate::state::TableState;
use crate::view::GridTile;
use crate::view::ImageRenderer;
use crate::view::ViewMode;
use crate::view::grid_text_columns;
use crate::view::tile_alt;
use crate::visibility::Breakpoint;
use crate::visibility::ColumnVisibility;
use crate::visibility::default_visibility;
use crate::visibility::enforce_non_hideable;
use crate::visibility::is_visible;
use crate::visibility::visibility_for_width;

/// Called with the selected rows (in loaded order) after every selection change.
pub type SelectionCallback<T> = Box<dyn FnMut(&[T]) + Send>;

/// Debug view of the table state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSnapshot {
    pub view_mode: ViewMode,
    pub selected_count: usize,
    pub total_rows: usize,
    pub filtered_rows: usize,
    /// One-based page number.
    pub current_page: usize,
    pub page_count: usize,
    pub sorting: SortingState,
    pub column_filters: ColumnFilters,
    pub pagination: Pagination,
    pub column_visibility: ColumnVisibility,
}

/// Sorting, filtering, paging, selection, column visibility and view mode
/// over one loaded set of rows.
///
/// `DataTable` owns its [`TableState`] and is the only thing that changes it.
/// Every action re-derives the row model synchronously, so the read methods
/// are plain functions of `(rows, state)`.
///
/// # Example
///
/// ```
/// use gallery_table::{ColumnDescriptor, ColumnSort, DataTable, TableRow};
///
/// #[derive(Clone, Debug)]
/// struct Item { id: u32, price: i64 }
///
/// impl TableRow for Item {
///     fn id(&self) -> String { self.id.to_string() }
/// }
///
/// let columns = vec![ColumnDescriptor::new("price", "PRICE", |i: &Item| i.price.into())];
/// let mut table = DataTable::new(columns, vec![Item { id: 1, price: 10 }, Item { id: 2, price: 5 }]);
/// table.set_sorting(vec![ColumnSort::asc("price")]);
///
/// let ids: Vec<u32> = table.page_rows().iter().map(|i| i.id).collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
pub struct DataTable<T: TableRow> {
    columns: Vec<ColumnDescriptor<T>>,
    rows: Vec<T>,
    state: TableState,
    /// Filtered and sorted row indices.
    row_model: Vec<usize>,
    /// Breakpoint of the last resize, for coalescing.
    viewport: Option<Breakpoint>,
    on_selection_change: Option<SelectionCallback<T>>,
}

impl<T: TableRow> DataTable<T> {
    /// Create a table with default state.
    pub fn new(columns: Vec<ColumnDescriptor<T>>, rows: Vec<T>) -> Self {
        let state = TableState {
            column_visibility: default_visibility(&columns),
            ..TableState::default()
        };
        Self::with_state(columns, rows, state)
    }

    /// Create a table with initial state overrides.
    ///
    /// The state is brought in line with the invariants: unknown sort
    /// columns dropped, non-hideable columns visible, selection limited to
    /// loaded rows and the page index clamped.
    pub fn with_state(columns: Vec<ColumnDescriptor<T>>, rows: Vec<T>, mut state: TableState) -> Self {
        state.sorting = normalize_sorting(&columns, std::mem::take(&mut state.sorting));
        enforce_non_hideable(&columns, &mut state.column_visibility);
        let mut table = Self {
            columns,
            rows,
            state,
            row_model: Vec::new(),
            viewport: None,
            on_selection_change: None,
        };
        table.prune_selection();
        table.refresh();
        table
    }

    /// Register the selection callback.
    pub fn on_selection_change(mut self, callback: impl FnMut(&[T]) + Send + 'static) -> Self {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    // -------------------------------------------------------------------------
    // Access
    // -------------------------------------------------------------------------

    /// Column declarations.
    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// Look up a column by id.
    pub fn column(&self, id: &str) -> Option<&ColumnDescriptor<T>> {
        column_index(&self.columns, id).map(|i| &self.columns[i])
    }

    /// All loaded rows, in loaded order.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Current state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Replace the loaded rows.
    ///
    /// Selected ids that are no longer loaded are dropped; the page index is
    /// clamped to the new row count.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        debug!("DataTable: replacing {} rows with {}", self.rows.len(), rows.len());
        self.rows = rows;
        let pruned = self.prune_selection();
        self.refresh();
        if pruned {
            self.notify_selection();
        }
    }

    fn prune_selection(&mut self) -> bool {
        let ids: Vec<String> = self.rows.iter().map(TableRow::id).collect();
        let loaded: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let removed = self.state.row_selection.prune(&loaded);
        if !removed.is_empty() {
            debug!("DataTable: pruned {} stale selections", removed.len());
        }
        !removed.is_empty()
    }

    fn refresh(&mut self) {
        let mut indices = filter_rows(&self.rows, &self.columns, &self.state.column_filters);
        sort_indices(&mut indices, &self.rows, &self.columns, &self.state.sorting);
        self.row_model = indices;
        self.state.pagination = self.state.pagination.clamped(self.row_model.len());
    }

    // -------------------------------------------------------------------------
    // Derived rows
    // -------------------------------------------------------------------------

    /// Rows after filtering, then stable sorting.
    pub fn filtered_sorted_rows(&self) -> Vec<&T> {
        self.row_model.iter().map(|&i| &self.rows[i]).collect()
    }

    /// Number of rows that pass the filters.
    pub fn filtered_row_count(&self) -> usize {
        self.row_model.len()
    }

    /// Rows of the current page.
    pub fn page_rows(&self) -> Vec<&T> {
        let (start, end) = self.state.pagination.bounds(self.row_model.len());
        self.row_model[start..end].iter().map(|&i| &self.rows[i]).collect()
    }

    /// Ids of the current page, in rendered order.
    pub fn page_ids(&self) -> Vec<String> {
        self.page_rows().into_iter().map(TableRow::id).collect()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Replace the sort criteria.
    ///
    /// Unknown and non-sortable columns are ignored; for a repeated column
    /// the last entry wins; declaration order decides precedence.
    pub fn set_sorting(&mut self, next: SortingState) {
        self.state.sorting = normalize_sorting(&self.columns, next);
        debug!("DataTable: sorting {:?}", self.state.sorting);
        self.refresh();
    }

    /// Current direction for a column, if it is sorted.
    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.state
            .sorting
            .iter()
            .find(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }

    /// Header click: cycle the column through asc → desc → unsorted.
    ///
    /// With `multi` other criteria are kept, otherwise they are replaced.
    /// Returns the column's new direction.
    pub fn toggle_sorting(&mut self, column_id: &str, multi: bool) -> Option<SortDirection> {
        if !self.column(column_id).is_some_and(|c| c.enable_sorting) {
            return None;
        }
        let next = next_direction(self.sort_direction(column_id));
        let mut sorting: SortingState = if multi {
            self.state
                .sorting
                .iter()
                .filter(|s| s.column_id != column_id)
                .cloned()
                .collect()
        } else {
            Vec::new()
        };
        if let Some(direction) = next {
            sorting.push(ColumnSort {
                column_id: column_id.to_string(),
                direction,
            });
        }
        self.set_sorting(sorting);
        next
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Replace all column filters. Empty filter values are dropped.
    ///
    /// Returns to the first page, since the previous page position refers to
    /// a different row set.
    pub fn set_column_filters(&mut self, next: ColumnFilters) {
        self.state.column_filters = next.into_iter().filter(|(_, v)| !v.is_empty()).collect();
        self.state.pagination.page_index = 0;
        debug!("DataTable: filters {:?}", self.state.column_filters);
        self.refresh();
    }

    /// Set or remove the filter of one column.
    pub fn set_column_filter(&mut self, column_id: &str, value: Option<FilterValue>) {
        let mut filters = self.state.column_filters.clone();
        match value {
            Some(value) => filters.insert(column_id.to_string(), value),
            None => filters.remove(column_id),
        };
        self.set_column_filters(filters);
    }

    /// Filter of one column, if any.
    pub fn column_filter(&self, column_id: &str) -> Option<&FilterValue> {
        self.state.column_filters.get(column_id)
    }

    /// Remove every filter.
    pub fn reset_column_filters(&mut self) {
        self.set_column_filters(ColumnFilters::new());
    }

    /// Whether any filter is active.
    pub fn is_filtered(&self) -> bool {
        !self.state.column_filters.is_empty()
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Replace page index and size. Size is corrected to at least 1 and the
    /// index clamped to the last page.
    pub fn set_pagination(&mut self, next: Pagination) {
        self.state.pagination = next.clamped(self.row_model.len());
        debug!("DataTable: pagination {:?}", self.state.pagination);
    }

    pub fn set_page_index(&mut self, page_index: usize) {
        self.set_pagination(Pagination {
            page_index,
            ..self.state.pagination
        });
    }

    /// Change the page size, keeping the first row of the current page on
    /// the new page.
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        let top_row = self.state.pagination.page_index * self.state.pagination.page_size;
        self.set_pagination(Pagination::new(top_row / page_size, page_size));
    }

    /// Number of pages for the filtered rows.
    pub fn page_count(&self) -> usize {
        self.state.pagination.page_count(self.row_model.len())
    }

    pub fn can_previous_page(&self) -> bool {
        self.state.pagination.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.state.pagination.page_index + 1 < self.page_count()
    }

    pub fn previous_page(&mut self) {
        self.set_page_index(self.state.pagination.page_index.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.set_page_index(self.state.pagination.page_index + 1);
    }

    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    pub fn last_page(&mut self) {
        self.set_page_index(self.page_count().saturating_sub(1));
    }

    // -------------------------------------------------------------------------
    // Column visibility
    // -------------------------------------------------------------------------

    /// Override column visibility. Non-hideable columns stay visible.
    ///
    /// The override holds until a resize moves the viewport into another
    /// breakpoint.
    pub fn set_column_visibility(&mut self, mut next: ColumnVisibility) {
        enforce_non_hideable(&self.columns, &mut next);
        self.state.column_visibility = next;
    }

    /// Flip one column's visibility. Returns whether it is now visible.
    pub fn toggle_column_visibility(&mut self, column_id: &str) -> bool {
        let Some(column) = self.column(column_id) else {
            return false;
        };
        if !column.enable_hiding {
            return true;
        }
        let visible = !is_visible(column, &self.state.column_visibility);
        self.state
            .column_visibility
            .insert(column_id.to_string(), visible);
        visible
    }

    /// Whether a column is currently shown. Unknown columns are not.
    pub fn is_column_visible(&self, column_id: &str) -> bool {
        self.column(column_id)
            .is_some_and(|c| is_visible(c, &self.state.column_visibility))
    }

    /// Visible columns in declaration order.
    pub fn visible_columns(&self) -> Vec<&ColumnDescriptor<T>> {
        self.columns
            .iter()
            .filter(|c| is_visible(c, &self.state.column_visibility))
            .collect()
    }

    /// Apply the visibility policy for a new viewport width.
    ///
    /// Bursts of resize events inside one breakpoint collapse into nothing:
    /// the policy only runs when the breakpoint changes. Returns true if the
    /// visibility mapping changed.
    pub fn on_resize(&mut self, width: u32) -> bool {
        let breakpoint = Breakpoint::for_width(width);
        if self.viewport == Some(breakpoint) {
            return false;
        }
        self.viewport = Some(breakpoint);
        let next = visibility_for_width(&self.columns, width);
        if next == self.state.column_visibility {
            return false;
        }
        debug!("DataTable: viewport {}px ({:?}), visibility {:?}", width, breakpoint, next);
        self.state.column_visibility = next;
        true
    }

    // -------------------------------------------------------------------------
    // View mode
    // -------------------------------------------------------------------------

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    /// Switch renderer. Every other part of the state is kept.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        debug!("DataTable: view {} -> {}", self.state.view_mode, mode);
        self.state.view_mode = mode;
    }

    /// Columns used as text lines in the grid view.
    pub fn grid_columns(&self, image_key: &str) -> Vec<&ColumnDescriptor<T>> {
        grid_text_columns(&self.columns, &self.state.column_visibility, image_key)
    }

    /// Build the grid tiles of the current page.
    ///
    /// `image_key` names the column holding the image URL; the renderer
    /// turns URL, alt text and per-row props into its output.
    pub fn grid_tiles<R: ImageRenderer<T>>(
        &self,
        image_key: &str,
        renderer: &R,
    ) -> Vec<GridTile<'_, T, R::Output>> {
        let text_columns = self.grid_columns(image_key);
        let image_column = self
            .column(image_key)
            .filter(|c| c.kind == ColumnKind::Image || c.kind == ColumnKind::Data);

        self.page_rows()
            .into_iter()
            .map(|row| {
                let id = row.id();
                let src = image_column
                    .map(|c| c.value(row).display())
                    .unwrap_or_default();
                let first = text_columns.first().map(|c| c.value(row).display());
                let alt = tile_alt(first.as_deref());
                let props = renderer.image_props(row);
                GridTile {
                    selected: self.state.row_selection.is_selected(&id),
                    image: renderer.render_image(&src, &alt, &props),
                    lines: text_columns.iter().map(|c| c.render(row)).collect(),
                    row,
                    id,
                }
            })
            .collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Set one row's flag. Ids that are not loaded are ignored.
    /// The row becomes the anchor for range selection.
    pub fn toggle_row(&mut self, id: &str, selected: bool) {
        if !self.rows.iter().any(|r| r.id() == id) {
            return;
        }
        if self.state.row_selection.set(id, selected) {
            self.notify_selection();
        }
    }

    /// Set every row between two positions of the current page, inclusive.
    /// Invalid positions are a no-op.
    pub fn toggle_range(&mut self, anchor_index: usize, target_index: usize, selected: bool) {
        let ids = self.page_ids();
        if self
            .state
            .row_selection
            .set_range(anchor_index, target_index, selected, &ids)
        {
            self.notify_selection();
        }
    }

    /// Shift-click: range from the anchor (last plain toggle) to `target_index`.
    ///
    /// Without an anchor on the current page this is a no-op.
    pub fn shift_select(&mut self, target_index: usize, selected: bool) {
        let ids = self.page_ids();
        let Some(anchor_index) = self
            .state
            .row_selection
            .anchor()
            .and_then(|anchor| ids.iter().position(|id| id == anchor))
        else {
            return;
        };
        if self
            .state
            .row_selection
            .set_range(anchor_index, target_index, selected, &ids)
        {
            self.notify_selection();
        }
    }

    /// Select or deselect every row of the current page.
    pub fn toggle_all_visible(&mut self, selected: bool) {
        let ids = self.page_ids();
        if self.state.row_selection.set_many(&ids, selected) {
            self.notify_selection();
        }
    }

    /// Deselect everything.
    pub fn clear_selection(&mut self) {
        if !self.state.row_selection.clear().is_empty() {
            self.notify_selection();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.state.row_selection.is_selected(id)
    }

    /// Selected rows in loaded order.
    pub fn selected_rows(&self) -> Vec<&T> {
        self.rows
            .iter()
            .filter(|r| self.state.row_selection.is_selected(&r.id()))
            .collect()
    }

    /// Every row of the current page is selected (and the page is not empty).
    pub fn is_all_page_selected(&self) -> bool {
        let ids = self.page_ids();
        !ids.is_empty() && ids.iter().all(|id| self.state.row_selection.is_selected(id))
    }

    /// At least one row of the current page is selected.
    pub fn is_some_page_selected(&self) -> bool {
        self.page_ids()
            .iter()
            .any(|id| self.state.row_selection.is_selected(id))
    }

    fn notify_selection(&mut self) {
        if self.on_selection_change.is_none() {
            return;
        }
        let selected: Vec<T> = self.selected_rows().into_iter().cloned().collect();
        debug!("DataTable: {} rows selected", selected.len());
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(&selected);
        }
    }

    // -------------------------------------------------------------------------
    // Debug
    // -------------------------------------------------------------------------

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            view_mode: self.state.view_mode,
            selected_count: self.state.row_selection.len(),
            total_rows: self.rows.len(),
            filtered_rows: self.row_model.len(),
            current_page: self.state.pagination.page_index + 1,
            page_count: self.page_count(),
            sorting: self.state.sorting.clone(),
            column_filters: self.state.column_filters.clone(),
            pagination: self.state.pagination,
            column_visibility: self.state.column_visibility.clone(),
        }
    }
}

impl<T: TableRow + fmt::Debug> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("rows", &self.rows)
            .field("state", &self.state)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}
