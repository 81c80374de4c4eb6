//! Plain-text rendering of a listing page.

use gallery_lib::IMAGE_KEY;
use gallery_lib::model::Artwork;
use gallery_table::{ColumnDescriptor, ColumnKind, DataTable, ImageProps, ImageRenderer, SortDirection};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a table cell may get before it is cut.
const MAX_CELL_WIDTH: usize = 32;

const ELLIPSIS: char = '…';

/// Renders tile images as a bracketed alt text followed by the URL.
pub struct TextImage;

impl ImageRenderer<Artwork> for TextImage {
    type Output = String;

    fn render_image(&self, src: &str, alt: &str, _extra: &ImageProps) -> String {
        if src.is_empty() {
            format!("[{}] (no image)", alt)
        } else {
            format!("[{}] {}", alt, src)
        }
    }
}

/// Cuts `text` to `width` display columns, then pads it to exactly `width`.
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    if text.width() <= width {
        out.push_str(text);
        used = text.width();
    } else if width > 0 {
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w + 1 > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push(ELLIPSIS);
        used += 1;
    }

    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

fn header(table: &DataTable<Artwork>, column: &ColumnDescriptor<Artwork>) -> String {
    match column.kind {
        ColumnKind::Select => select_box(table.is_all_page_selected(), table.is_some_page_selected()),
        ColumnKind::Actions => String::new(),
        _ => match table.sort_direction(&column.id) {
            Some(SortDirection::Asc) => format!("{} ^", column.label),
            Some(SortDirection::Desc) => format!("{} v", column.label),
            None => column.label.clone(),
        },
    }
}

fn cell(table: &DataTable<Artwork>, column: &ColumnDescriptor<Artwork>, row: &Artwork) -> String {
    match column.kind {
        ColumnKind::Select => select_box(table.is_selected(&row.id.to_string()), false),
        ColumnKind::Actions => "...".to_string(),
        ColumnKind::Image => if row.main_image.is_some() { "img" } else { "-" }.to_string(),
        ColumnKind::Data => column.render(row),
    }
}

fn select_box(all: bool, some: bool) -> String {
    match (all, some) {
        (true, _) => "[x]",
        (false, true) => "[-]",
        (false, false) => "[ ]",
    }
    .to_string()
}

/// Visible columns of the current page as aligned text.
pub fn render_table(table: &DataTable<Artwork>) -> String {
    let columns = table.visible_columns();
    let rows = table.page_rows();

    let headers: Vec<String> = columns.iter().map(|c| header(table, c)).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| cell(table, c, row)).collect())
        .collect();

    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            cells
                .iter()
                .map(|line| line[i].width())
                .chain(std::iter::once(headers[i].width()))
                .max()
                .unwrap_or(0)
                .min(MAX_CELL_WIDTH)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    if cells.is_empty() {
        out.push_str("No results.\n");
    }
    for line in &cells {
        push_line(&mut out, line, &widths);
    }
    out
}

fn push_line(out: &mut String, values: &[String], widths: &[usize]) {
    let line: Vec<String> = values.iter().zip(widths).map(|(v, w)| fit(v, *w)).collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Tiles of the current page: selection box and image line, then the
/// non-empty text lines.
pub fn render_grid(table: &DataTable<Artwork>) -> String {
    let tiles = table.grid_tiles(IMAGE_KEY, &TextImage);
    if tiles.is_empty() {
        return "No results.\n".to_string();
    }

    let mut out = String::new();
    for (i, tile) in tiles.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{} {}\n", select_box(tile.selected, false), tile.image));
        for line in tile.lines.iter().filter(|l| !l.is_empty()) {
            out.push_str(&format!("    {}\n", line));
        }
    }
    out
}

/// Selection count and page position.
pub fn footer(table: &DataTable<Artwork>) -> String {
    let snapshot = table.snapshot();
    format!(
        "{} of {} row(s) selected. Page {} of {}",
        snapshot.selected_count,
        snapshot.filtered_rows,
        snapshot.current_page,
        snapshot.page_count.max(1)
    )
}
