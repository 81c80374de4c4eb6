//! Responsive column visibility.
//!
//! Columns declare the smallest viewport class they are shown at. The policy
//! maps a viewport width to a visibility mapping; non-hideable columns are
//! always visible.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnDescriptor;

/// Column id → visible. A missing key means visible.
pub type ColumnVisibility = BTreeMap<String, bool>;

/// Viewport width classes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Shown at every width.
    #[default]
    Always,
    /// Shown from 640px.
    Sm,
    /// Shown from 768px.
    Md,
    /// Shown from 1024px.
    Lg,
}

impl Breakpoint {
    /// Minimum viewport width for this class.
    pub const fn min_width(self) -> u32 {
        match self {
            Breakpoint::Always => 0,
            Breakpoint::Sm => 640,
            Breakpoint::Md => 768,
            Breakpoint::Lg => 1024,
        }
    }

    /// Largest class whose minimum width fits into `width`.
    pub fn for_width(width: u32) -> Self {
        [Breakpoint::Lg, Breakpoint::Md, Breakpoint::Sm]
            .into_iter()
            .find(|bp| width >= bp.min_width())
            .unwrap_or(Breakpoint::Always)
    }
}

/// Compute column visibility for a viewport width.
///
/// Applying the policy twice at the same width yields the same mapping.
pub fn visibility_for_width<T>(columns: &[ColumnDescriptor<T>], width: u32) -> ColumnVisibility {
    columns
        .iter()
        .map(|column| {
            let visible = !column.enable_hiding || width >= column.breakpoint.min_width();
            (column.id.clone(), visible)
        })
        .collect()
}

/// Visibility before any policy runs: every column shown.
pub fn default_visibility<T>(columns: &[ColumnDescriptor<T>]) -> ColumnVisibility {
    columns.iter().map(|column| (column.id.clone(), true)).collect()
}

/// Force non-hideable columns back to visible.
pub(crate) fn enforce_non_hideable<T>(
    columns: &[ColumnDescriptor<T>],
    visibility: &mut ColumnVisibility,
) {
    for column in columns.iter().filter(|c| !c.enable_hiding) {
        visibility.insert(column.id.clone(), true);
    }
}

/// Whether a column is visible under a mapping. Missing keys are visible.
pub fn is_visible<T>(column: &ColumnDescriptor<T>, visibility: &ColumnVisibility) -> bool {
    !column.enable_hiding || visibility.get(&column.id).copied().unwrap_or(true)
}
