//! Row trait and column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::value::CellValue;
use crate::visibility::Breakpoint;

/// Trait for records that can be displayed as table rows.
///
/// Rows are never mutated by the table. The id is used for stable selection
/// across sorting, filtering and paging.
pub trait TableRow: Send + Sync + Clone + 'static {
    /// Unique identifier for this row.
    fn id(&self) -> String;
}

/// Extracts the sortable/filterable value of a column from a row.
pub type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Maps a row to the text shown in a cell.
pub type Formatter<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// What a column holds. Controls which columns the grid view may use as
/// text lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    /// Ordinary data column.
    #[default]
    Data,
    /// Row selection checkbox.
    Select,
    /// Image URL column.
    Image,
    /// Per-row action menu.
    Actions,
}

/// Declarative column definition.
///
/// Columns carry data access (accessor), presentation (formatter) and the
/// flags the table needs: whether the column can be hidden, sorted or
/// filtered, and from which viewport width it is shown.
///
/// # Examples
///
/// ```
/// use gallery_table::{Breakpoint, ColumnDescriptor, TableRow};
///
/// #[derive(Clone)]
/// struct Item { id: u32, name: String, year: Option<i64> }
///
/// impl TableRow for Item {
///     fn id(&self) -> String { self.id.to_string() }
/// }
///
/// let columns: Vec<ColumnDescriptor<Item>> = vec![
///     ColumnDescriptor::select(),
///     ColumnDescriptor::new("name", "NAME", |i: &Item| i.name.as_str().into()).not_hideable(),
///     ColumnDescriptor::new("year", "YEAR", |i: &Item| i.year.into())
///         .breakpoint(Breakpoint::Sm)
///         .display(|i: &Item| i.year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".into())),
/// ];
/// assert_eq!(columns.len(), 3);
/// ```
pub struct ColumnDescriptor<T> {
    /// Column identifier, used as key in sort, filter and visibility state.
    pub id: String,
    /// Header text.
    pub label: String,
    /// Column kind.
    pub kind: ColumnKind,
    /// Whether the column may be hidden. Non-hideable columns are always visible.
    pub enable_hiding: bool,
    /// Whether the column participates in sorting.
    pub enable_sorting: bool,
    /// Whether the column participates in filtering.
    pub enable_filtering: bool,
    /// Minimum viewport class at which the column is shown.
    pub breakpoint: Breakpoint,
    accessor: Accessor<T>,
    formatter: Option<Formatter<T>>,
}

impl<T: 'static> ColumnDescriptor<T> {
    /// Create a data column that is hideable, sortable and filterable.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accessor: impl Fn(&T) -> CellValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ColumnKind::Data,
            enable_hiding: true,
            enable_sorting: true,
            enable_filtering: true,
            breakpoint: Breakpoint::Always,
            accessor: Arc::new(accessor),
            formatter: None,
        }
    }

    /// The leading checkbox column.
    pub fn select() -> Self {
        Self::new("select", "", |_: &T| CellValue::Null)
            .kind(ColumnKind::Select)
            .not_hideable()
            .not_sortable()
            .not_filterable()
    }

    /// The trailing per-row actions column.
    pub fn actions() -> Self {
        Self::new("actions", "", |_: &T| CellValue::Null)
            .kind(ColumnKind::Actions)
            .not_hideable()
            .not_sortable()
            .not_filterable()
    }

    /// Custom cell text.
    pub fn display(mut self, formatter: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }
}

impl<T> ColumnDescriptor<T> {
    /// Set the column kind. Image columns stop sorting and filtering.
    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        if kind == ColumnKind::Image {
            self.enable_sorting = false;
            self.enable_filtering = false;
        }
        self
    }

    /// Keep the column visible regardless of policy or overrides.
    pub fn not_hideable(mut self) -> Self {
        self.enable_hiding = false;
        self
    }

    /// Exclude the column from sorting.
    pub fn not_sortable(mut self) -> Self {
        self.enable_sorting = false;
        self
    }

    /// Exclude the column from filtering.
    pub fn not_filterable(mut self) -> Self {
        self.enable_filtering = false;
        self
    }

    /// Show the column only from the given viewport class upwards.
    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Value used for sorting and filtering.
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Text shown in the cell.
    pub fn render(&self, row: &T) -> String {
        match &self.formatter {
            Some(formatter) => formatter(row),
            None => self.value(row).display(),
        }
    }
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            kind: self.kind,
            enable_hiding: self.enable_hiding,
            enable_sorting: self.enable_sorting,
            enable_filtering: self.enable_filtering,
            breakpoint: self.breakpoint,
            accessor: Arc::clone(&self.accessor),
            formatter: self.formatter.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("enable_hiding", &self.enable_hiding)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_filtering", &self.enable_filtering)
            .field("breakpoint", &self.breakpoint)
            .finish_non_exhaustive()
    }
}

/// Position of a column in declaration order, if declared.
pub(crate) fn column_index<T>(columns: &[ColumnDescriptor<T>], id: &str) -> Option<usize> {
    columns.iter().position(|c| c.id == id)
}
