//! Sort state and the stable multi-column sorter.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnDescriptor;
use crate::column::column_index;
use crate::value::CellValue;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// One sort criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column_id: String,
    pub direction: SortDirection,
}

impl ColumnSort {
    /// Ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Ordered sort criteria.
pub type SortingState = Vec<ColumnSort>;

/// Clean up requested sort criteria against the declared columns.
///
/// Unknown and non-sortable columns are dropped. When a column appears more
/// than once the last entry wins. Criteria are ordered by column declaration
/// order, which makes the earlier-declared column the primary key.
pub(crate) fn normalize_sorting<T>(
    columns: &[ColumnDescriptor<T>],
    requested: SortingState,
) -> SortingState {
    let mut keyed: Vec<(usize, ColumnSort)> = Vec::with_capacity(requested.len());
    for sort in requested {
        let Some(index) = column_index(columns, &sort.column_id) else {
            continue;
        };
        if !columns[index].enable_sorting {
            continue;
        }
        keyed.retain(|(i, _)| *i != index);
        keyed.push((index, sort));
    }
    keyed.sort_by_key(|(index, _)| *index);
    keyed.into_iter().map(|(_, sort)| sort).collect()
}

/// Next direction in the header-click cycle: none → asc → desc → none.
pub fn next_direction(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// Compare two values for one criterion. Nulls go last in both directions.
fn compare_keys(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    match (a.is_null(), b.is_null()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Asc => a.compare(b),
            SortDirection::Desc => b.compare(a),
        },
    }
}

/// Stable sort of row indices by normalized criteria.
///
/// Rows with equal keys keep their relative order.
pub(crate) fn sort_indices<T>(
    indices: &mut Vec<usize>,
    rows: &[T],
    columns: &[ColumnDescriptor<T>],
    sorting: &[ColumnSort],
) {
    let criteria: Vec<(&ColumnDescriptor<T>, SortDirection)> = sorting
        .iter()
        .filter_map(|sort| {
            let index = column_index(columns, &sort.column_id)?;
            Some((&columns[index], sort.direction))
        })
        .collect();
    if criteria.is_empty() {
        return;
    }

    let mut keyed: Vec<(usize, Vec<CellValue>)> = indices
        .iter()
        .map(|&i| {
            let keys = criteria.iter().map(|(c, _)| c.value(&rows[i])).collect();
            (i, keys)
        })
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        criteria
            .iter()
            .enumerate()
            .map(|(k, (_, direction))| compare_keys(&a[k], &b[k], *direction))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    *indices = keyed.into_iter().map(|(i, _)| i).collect();
}
