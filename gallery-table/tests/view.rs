mod common;

use common::{Piece, columns, letters};
use gallery_table::{
    ColumnVisibility, DataTable, ImageProps, ImageRenderer, ViewMode, visibility_for_width,
};

const OPTIONAL: [&str; 4] = ["year", "dimensions", "price", "artist"];

fn hidden(visibility: &ColumnVisibility) -> Vec<&str> {
    visibility
        .iter()
        .filter(|(_, visible)| !**visible)
        .map(|(id, _)| id.as_str())
        .collect()
}

// ============================================================================
// Visibility policy
// ============================================================================

#[test]
fn test_narrow_viewport_hides_optional_columns() {
    let visibility = visibility_for_width(&columns(), 500);
    for id in OPTIONAL {
        assert_eq!(visibility.get(id), Some(&false), "{} hidden at 500px", id);
    }
    assert_eq!(visibility.get("title"), Some(&true));
    assert_eq!(visibility.get("status"), Some(&true));
    assert_eq!(visibility.get("image"), Some(&true));
    assert_eq!(visibility.get("actions"), Some(&true));
}

#[test]
fn test_wide_viewport_shows_everything() {
    let visibility = visibility_for_width(&columns(), 1200);
    assert!(hidden(&visibility).is_empty());
}

#[test]
fn test_intermediate_breakpoints() {
    assert_eq!(hidden(&visibility_for_width(&columns(), 800)), vec!["dimensions"]);
    let at_700 = visibility_for_width(&columns(), 700);
    assert_eq!(hidden(&at_700), vec!["dimensions", "price"]);
}

#[test]
fn test_non_hideable_visible_at_zero() {
    let visibility = visibility_for_width(&columns(), 0);
    assert_eq!(visibility.get("title"), Some(&true));
    assert_eq!(visibility.get("select"), Some(&true));
}

#[test]
fn test_policy_is_idempotent() {
    assert_eq!(
        visibility_for_width(&columns(), 900),
        visibility_for_width(&columns(), 900)
    );
}

// ============================================================================
// Resize handling
// ============================================================================

#[test]
fn test_resize_coalesces_within_breakpoint() {
    let mut table = DataTable::new(columns(), letters());
    assert!(table.on_resize(500));
    assert!(!table.on_resize(520));
    assert!(!table.on_resize(639));
    assert!(!table.is_column_visible("year"));
    assert!(table.on_resize(1200));
    assert!(table.is_column_visible("year"));
}

#[test]
fn test_override_holds_until_breakpoint_changes() {
    let mut table = DataTable::new(columns(), letters());
    table.on_resize(1200);

    let mut visibility = table.state().column_visibility.clone();
    visibility.insert("year".into(), false);
    visibility.insert("title".into(), false);
    table.set_column_visibility(visibility);
    assert!(!table.is_column_visible("year"));
    assert!(table.is_column_visible("title"), "title cannot be hidden");

    table.on_resize(1300);
    assert!(!table.is_column_visible("year"));

    table.on_resize(700);
    table.on_resize(1100);
    assert!(table.is_column_visible("year"));
}

#[test]
fn test_toggle_column_visibility() {
    let mut table = DataTable::new(columns(), letters());
    assert!(!table.toggle_column_visibility("price"));
    assert!(!table.is_column_visible("price"));
    assert!(table.toggle_column_visibility("price"));
    assert!(table.toggle_column_visibility("status"));
    assert!(!table.toggle_column_visibility("nope"));
}

#[test]
fn test_visible_columns_in_declaration_order() {
    let mut table = DataTable::new(columns(), letters());
    table.on_resize(320);
    let ids: Vec<&str> = table.visible_columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["select", "image", "title", "status", "actions"]);
}

// ============================================================================
// Grid view
// ============================================================================

struct TextImages;

impl ImageRenderer<Piece> for TextImages {
    type Output = String;

    fn image_props(&self, row: &Piece) -> ImageProps {
        let mut props = ImageProps::new();
        props.insert("title".into(), row.title.to_string());
        props
    }

    fn render_image(&self, src: &str, alt: &str, extra: &ImageProps) -> String {
        format!("{} [{}] {}", src, alt, extra.len())
    }
}

#[test]
fn test_grid_takes_four_text_columns() {
    let table = DataTable::new(columns(), letters());
    let ids: Vec<&str> = table.grid_columns("image").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["title", "year", "artist", "dimensions"]);
}

#[test]
fn test_grid_skips_hidden_columns() {
    let mut table = DataTable::new(columns(), letters());
    table.on_resize(500);
    let ids: Vec<&str> = table.grid_columns("image").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["title", "status", "actions"]);
}

#[test]
fn test_grid_tile_lines_include_actions_when_room() {
    let mut table = DataTable::new(columns(), letters());
    table.on_resize(500);
    let tiles = table.grid_tiles("image", &TextImages);
    assert_eq!(tiles[0].lines, vec!["A", "available", ""]);
}

#[test]
fn test_grid_tiles() {
    let mut table = DataTable::new(columns(), letters());
    table.set_view_mode(ViewMode::Grid);
    table.toggle_row("1", true);

    let tiles = table.grid_tiles("image", &TextImages);
    assert_eq!(tiles.len(), 5);

    let first = &tiles[0];
    assert_eq!(first.id, "1");
    assert!(first.selected);
    assert!(!tiles[1].selected);
    assert_eq!(first.image, "https://img.example/1.jpg [Image for A] 1");
    assert_eq!(first.lines, vec!["A", "2001", "Ada", "30x40 cm"]);
}
