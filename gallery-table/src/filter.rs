//! Column filters.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnDescriptor;
use crate::column::column_index;
use crate::value::CellValue;

/// Column id → filter value. All entries must match (logical AND).
pub type ColumnFilters = BTreeMap<String, FilterValue>;

/// A filter on one column.
///
/// # Example
///
/// ```
/// use gallery_table::FilterValue;
///
/// // Case-insensitive substring match
/// let search = FilterValue::text("blue");
///
/// // Faceted match on any of the given values
/// let status = FilterValue::one_of(["available", "reserved"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterValue {
    /// Case-insensitive substring match on the cell text.
    Text(String),
    /// Cell text equals any of the values (case-insensitive).
    OneOf(BTreeSet<String>),
}

impl FilterValue {
    /// Creates a substring filter.
    pub fn text(needle: impl Into<String>) -> Self {
        FilterValue::Text(needle.into())
    }

    /// Creates a faceted filter.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if the filter restricts nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Text(needle) => needle.is_empty(),
            FilterValue::OneOf(values) => values.is_empty(),
        }
    }

    /// Check a cell value against the filter.
    pub fn matches(&self, value: &CellValue) -> bool {
        if self.is_empty() {
            return true;
        }
        let text = value.display().to_lowercase();
        match self {
            FilterValue::Text(needle) => text.contains(&needle.to_lowercase()),
            FilterValue::OneOf(values) => values.iter().any(|v| v.to_lowercase() == text),
        }
    }
}

/// Indices of the rows that pass every filter, in original order.
///
/// Filters on unknown or non-filterable columns are ignored.
pub(crate) fn filter_rows<T>(
    rows: &[T],
    columns: &[ColumnDescriptor<T>],
    filters: &ColumnFilters,
) -> Vec<usize> {
    let active: Vec<(&ColumnDescriptor<T>, &FilterValue)> = filters
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .filter_map(|(id, value)| {
            let column = &columns[column_index(columns, id)?];
            column.enable_filtering.then_some((column, value))
        })
        .collect();

    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            active
                .iter()
                .all(|(column, filter)| filter.matches(&column.value(row)))
        })
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Piece {
        title: &'static str,
        status: &'static str,
    }

    fn columns() -> Vec<ColumnDescriptor<Piece>> {
        vec![
            ColumnDescriptor::new("title", "TITLE", |p: &Piece| p.title.into()),
            ColumnDescriptor::new("status", "STATUS", |p: &Piece| p.status.into()),
            ColumnDescriptor::new("notes", "NOTES", |p: &Piece| p.title.into()).not_filterable(),
        ]
    }

    fn pieces() -> Vec<Piece> {
        vec![
            Piece { title: "Blue Hour", status: "available" },
            Piece { title: "Red Field", status: "sold" },
            Piece { title: "Deep blue", status: "reserved" },
        ]
    }

    #[test]
    fn test_text_filter_is_case_insensitive_substring() {
        let mut filters = ColumnFilters::new();
        filters.insert("title".into(), FilterValue::text("BLUE"));
        assert_eq!(filter_rows(&pieces(), &columns(), &filters), vec![0, 2]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut filters = ColumnFilters::new();
        filters.insert("title".into(), FilterValue::text("blue"));
        filters.insert("status".into(), FilterValue::one_of(["reserved", "sold"]));
        assert_eq!(filter_rows(&pieces(), &columns(), &filters), vec![2]);
    }

    #[test]
    fn test_unknown_and_disabled_columns_are_ignored() {
        let mut filters = ColumnFilters::new();
        filters.insert("missing".into(), FilterValue::text("zzz"));
        filters.insert("notes".into(), FilterValue::text("zzz"));
        assert_eq!(filter_rows(&pieces(), &columns(), &filters), vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_filters_match_everything() {
        assert!(FilterValue::text("").matches(&CellValue::Null));
        assert!(FilterValue::one_of(Vec::<String>::new()).matches(&"x".into()));
        assert!(!FilterValue::text("a").matches(&CellValue::Null));
    }
}
