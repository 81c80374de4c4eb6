//! gallery - print a page of an artwork catalogue.
//!
//! Usage:
//!   gallery -d demos/artworks.json                      # first page, table view
//!   gallery -d demos/artworks.json -s price:desc -w 600 # sorted, narrow viewport
//!   gallery -d demos/artworks.json --view grid -f status=sold,reserved

mod args;
mod error;
mod paths;
mod render;
mod settings;

use std::fs::{self, File};

use clap::Parser;
use gallery_lib::artwork_columns;
use gallery_lib::source::{ArtworkQuery, ArtworkSource, MemorySource};
use gallery_table::{DataTable, TableState};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::{Args, listing_limit, parse_filter, parse_sort};
use crate::error::CliError;
use crate::settings::Settings;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let settings = match paths::settings_file() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    let level = match &args.log_level {
        Some(level) => level
            .parse::<LevelFilter>()
            .map_err(|_| CliError::invalid_argument(format!("unknown log level '{}'", level)))?,
        None => settings.level_filter(),
    };
    init_logging(level);

    let page_size = args.page_size.unwrap_or(settings.page_size).max(1);
    let width = args.width.unwrap_or(settings.viewport_width);
    let view_mode = args.view.unwrap_or(settings.view_mode);

    let sorting = args.sort.iter().map(|s| parse_sort(s)).collect::<Result<Vec<_>, _>>()?;
    let filters = args.filter.iter().map(|f| parse_filter(f)).collect::<Result<Vec<_>, _>>()?;

    let json = fs::read_to_string(&args.data)?;
    let source = MemorySource::from_json(&json)?;

    let mut query = ArtworkQuery::new().page(args.page).limit(listing_limit(page_size)?);
    if let Some(search) = &args.search {
        query = query.search(search.as_str());
    }
    if let Some(status) = args.status {
        query = query.status(status);
    }
    let page = source.list(&query).await?;
    log::info!(
        "Fetched page {} with {} of {} artworks",
        query.page,
        page.len(),
        page.total_count
    );
    let listing_pages = page.page_count(query.limit);

    let state = TableState::new()
        .with_page_size(page_size)
        .with_sorting(sorting)
        .with_view_mode(view_mode);
    let mut table = DataTable::with_state(artwork_columns(), page.artworks, state)
        .on_selection_change(|rows| log::debug!("Selection changed: {} rows", rows.len()));
    table.on_resize(width);

    for (column, filter) in filters {
        table.set_column_filter(&column, Some(filter));
    }
    for id in &args.select {
        if !table.rows().iter().any(|a| a.id.to_string() == *id) {
            log::warn!("Ignoring selection of unknown artwork {}", id);
        }
        table.toggle_row(id, true);
    }
    if args.select_page {
        table.toggle_all_visible(true);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.snapshot())?);
        return Ok(());
    }

    let body = if table.view_mode().is_grid() {
        render::render_grid(&table)
    } else {
        render::render_table(&table)
    };
    print!("{}", body);
    println!();
    println!("{}", render::footer(&table));
    println!(
        "Listing page {} of {} ({} artworks)",
        query.page,
        listing_pages.max(1),
        page.total_count
    );

    Ok(())
}

/// Write logs to `<cache_dir>/latest.log`. Logging is skipped when the file
/// cannot be created.
fn init_logging(level: LevelFilter) {
    let Some(path) = paths::log_file() else { return };
    paths::rotate_logs();

    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: cannot create log directory {}: {}", dir.display(), e);
            return;
        }
    }

    match File::create(&path) {
        Ok(file) => {
            if WriteLogger::init(level, Config::default(), file).is_err() {
                eprintln!("Warning: logger already initialized");
            }
        }
        Err(e) => eprintln!("Warning: cannot create log file {}: {}", path.display(), e),
    }
}
