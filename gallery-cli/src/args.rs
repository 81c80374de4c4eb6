//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use gallery_lib::model::ArtworkStatus;
use gallery_table::{ColumnSort, FilterValue, ViewMode};

use crate::error::CliError;

/// Print one page of an artwork catalogue as a table or a grid.
#[derive(Debug, Parser)]
#[command(name = "gallery", about = "Artwork listing viewer")]
pub struct Args {
    /// JSON file holding an array of artworks.
    #[arg(short, long, value_name = "FILE")]
    pub data: PathBuf,

    /// Listing page to fetch (1-based).
    #[arg(short, long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page. Overrides the settings file.
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Case-insensitive title search.
    #[arg(short = 'q', long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Only list artworks with this status (available, sold, reserved, not_for_sale).
    #[arg(long)]
    pub status: Option<ArtworkStatus>,

    /// Sort criterion, repeatable. Criteria on several columns rank by column order.
    #[arg(short, long = "sort", value_name = "COLUMN[:asc|:desc]")]
    pub sort: Vec<String>,

    /// Column filter, repeatable. A comma-separated value matches any of the listed values.
    #[arg(short, long = "filter", value_name = "COLUMN=VALUE[,VALUE...]")]
    pub filter: Vec<String>,

    /// Viewport width in pixels for the column visibility policy.
    #[arg(short, long, value_name = "PX")]
    pub width: Option<u32>,

    /// Layout: table or grid.
    #[arg(long)]
    pub view: Option<ViewMode>,

    /// Select a row by artwork id, repeatable.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,

    /// Select every row on the shown page.
    #[arg(long)]
    pub select_page: bool,

    /// Print the table state as JSON instead of rendering rows.
    #[arg(long)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace). Overrides the settings file.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

/// Parses `column`, `column:asc` or `column:desc`.
pub fn parse_sort(value: &str) -> Result<ColumnSort, CliError> {
    let (column, direction) = match value.rsplit_once(':') {
        Some((column, direction)) => (column, Some(direction)),
        None => (value, None),
    };
    if column.is_empty() {
        return Err(CliError::invalid_argument(format!("missing sort column in '{}'", value)));
    }
    match direction.map(|d| d.to_ascii_lowercase()) {
        None => Ok(ColumnSort::asc(column)),
        Some(d) if d == "asc" => Ok(ColumnSort::asc(column)),
        Some(d) if d == "desc" => Ok(ColumnSort::desc(column)),
        Some(d) => Err(CliError::invalid_argument(format!("unknown sort direction '{}'", d))),
    }
}

/// Page size as a listing limit. Sizes beyond `u32::MAX` are rejected.
pub fn listing_limit(page_size: usize) -> Result<u32, CliError> {
    u32::try_from(page_size)
        .map_err(|_| CliError::invalid_argument(format!("page size {} is too large", page_size)))
}

/// Parses `column=text` or `column=a,b,c`.
pub fn parse_filter(value: &str) -> Result<(String, FilterValue), CliError> {
    let Some((column, needle)) = value.split_once('=') else {
        return Err(CliError::invalid_argument(format!(
            "filter '{}' is not of the form COLUMN=VALUE",
            value
        )));
    };
    let column = column.trim();
    if column.is_empty() {
        return Err(CliError::invalid_argument(format!("missing filter column in '{}'", value)));
    }
    let filter = if needle.contains(',') {
        FilterValue::one_of(needle.split(',').map(str::trim).filter(|v| !v.is_empty()))
    } else {
        FilterValue::text(needle)
    };
    Ok((column.to_string(), filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("price").unwrap(), ColumnSort::asc("price"));
        assert_eq!(parse_sort("price:DESC").unwrap(), ColumnSort::desc("price"));
        assert_eq!(parse_sort("artist.name:asc").unwrap(), ColumnSort::asc("artist.name"));
        assert!(parse_sort(":desc").is_err());
        assert!(parse_sort("price:up").is_err());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!(
            parse_filter("title=blue").unwrap(),
            ("title".to_string(), FilterValue::text("blue"))
        );
        assert_eq!(
            parse_filter("status=sold, reserved").unwrap(),
            ("status".to_string(), FilterValue::one_of(["sold", "reserved"]))
        );
        assert!(parse_filter("title").is_err());
        assert!(parse_filter("=x").is_err());
    }

    #[test]
    fn test_listing_limit() {
        assert_eq!(listing_limit(25).unwrap(), 25);
        assert_eq!(listing_limit(u32::MAX as usize).unwrap(), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            listing_limit(u32::MAX as usize + 1),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "gallery", "-d", "art.json", "--status", "sold", "-s", "price:desc", "--view", "grid",
            "--select", "a", "--select", "b",
        ])
        .unwrap();
        assert_eq!(args.page, 1);
        assert_eq!(args.status, Some(ArtworkStatus::Sold));
        assert_eq!(args.view, Some(ViewMode::Grid));
        assert_eq!(args.select, vec!["a", "b"]);
        assert_eq!(args.sort, vec!["price:desc"]);
    }
}
