//! Table/grid view switching and grid tile layout.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::column::ColumnDescriptor;
use crate::column::ColumnKind;
use crate::visibility::ColumnVisibility;
use crate::visibility::is_visible;

/// Maximum number of text lines under a grid tile.
pub const GRID_TEXT_LINES: usize = 4;

/// Which renderer shows the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn is_grid(self) -> bool {
        self == ViewMode::Grid
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::Grid => f.write_str("grid"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            other => Err(format!("unknown view mode '{}'", other)),
        }
    }
}

/// Extra attributes handed to the image renderer for one row.
pub type ImageProps = BTreeMap<String, String>;

/// Renders the image of a grid tile.
///
/// The table never looks at image data, it only passes the URL and alt text
/// through.
pub trait ImageRenderer<T> {
    type Output;

    /// Per-row extra attributes. None by default.
    fn image_props(&self, _row: &T) -> ImageProps {
        ImageProps::new()
    }

    fn render_image(&self, src: &str, alt: &str, extra: &ImageProps) -> Self::Output;
}

/// One tile of the grid view.
#[derive(Debug, Clone)]
pub struct GridTile<'a, T, O> {
    pub row: &'a T,
    pub id: String,
    pub selected: bool,
    pub image: O,
    /// Rendered text of the grid text columns; the first line is the title line.
    pub lines: Vec<String>,
}

/// Columns shown as text lines under each grid tile.
///
/// Up to [`GRID_TEXT_LINES`] visible columns in declaration order, skipping
/// the selection column, image columns and the image key.
pub fn grid_text_columns<'a, T>(
    columns: &'a [ColumnDescriptor<T>],
    visibility: &ColumnVisibility,
    image_key: &str,
) -> Vec<&'a ColumnDescriptor<T>> {
    columns
        .iter()
        .filter(|c| !matches!(c.kind, ColumnKind::Select | ColumnKind::Image) && c.id != image_key)
        .filter(|c| is_visible(c, visibility))
        .take(GRID_TEXT_LINES)
        .collect()
}

/// Alt text for a tile image, derived from its first text line.
pub(crate) fn tile_alt(first_value: Option<&str>) -> String {
    format!("Image for {}", first_value.unwrap_or_default())
}
