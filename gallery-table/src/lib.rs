//! Data-table state for list views.
//!
//! `gallery-table` keeps the state behind a listing screen: sorting,
//! filtering, pagination, id-keyed row selection, responsive column
//! visibility and the table/grid view switch. It never renders anything;
//! renderers read the [`DataTable`] and send user intent back through its
//! actions.

pub mod column;
pub mod filter;
pub mod selection;
pub mod sort;
pub mod state;
pub mod table;
pub mod value;
pub mod view;
pub mod visibility;

pub use column::{Accessor, ColumnDescriptor, ColumnKind, Formatter, TableRow};
pub use filter::{ColumnFilters, FilterValue};
pub use selection::Selection;
pub use sort::{ColumnSort, SortDirection, SortingState};
pub use state::{DEFAULT_PAGE_SIZE, Pagination, TableState};
pub use table::{DataTable, SelectionCallback, TableSnapshot};
pub use value::CellValue;
pub use view::{GRID_TEXT_LINES, GridTile, ImageProps, ImageRenderer, ViewMode, grid_text_columns};
pub use visibility::{Breakpoint, ColumnVisibility, default_visibility, is_visible, visibility_for_width};
