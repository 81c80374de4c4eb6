//! Column declarations for the artwork listing.

use gallery_table::{Breakpoint, CellValue, ColumnDescriptor, ColumnKind};

use crate::model::Artwork;

/// Column id of the main image, used as the grid view's image key.
pub const IMAGE_KEY: &str = "mainImage";

const NOT_AVAILABLE: &str = "N/A";

/// The artwork listing columns in display order.
///
/// Year and artist are shown from small viewports up, price from medium and
/// dimensions only on large viewports. Title, image and status always stay.
pub fn artwork_columns() -> Vec<ColumnDescriptor<Artwork>> {
    vec![
        ColumnDescriptor::select(),
        ColumnDescriptor::new(IMAGE_KEY, "IMAGE", |a: &Artwork| a.image_url().into())
            .kind(ColumnKind::Image)
            .not_hideable(),
        ColumnDescriptor::new("title", "TITLE", |a: &Artwork| a.title.as_str().into()).not_hideable(),
        ColumnDescriptor::new("year", "YEAR", |a: &Artwork| a.year.into())
            .breakpoint(Breakpoint::Sm)
            .display(|a: &Artwork| or_not_available(a.year.map(|y| y.to_string()))),
        ColumnDescriptor::new("artist.name", "ARTIST", |a: &Artwork| a.artist_name().into())
            .breakpoint(Breakpoint::Sm)
            .display(|a: &Artwork| a.artist_name().unwrap_or("Unknown").to_string()),
        ColumnDescriptor::new("dimensions", "DIMENSIONS", |a: &Artwork| a.dimensions.as_deref().into())
            .breakpoint(Breakpoint::Lg)
            .display(|a: &Artwork| or_not_available(a.dimensions.clone())),
        ColumnDescriptor::new("price", "PRICE", |a: &Artwork| a.price.map(|p| p.value()).into())
            .breakpoint(Breakpoint::Md)
            .display(|a: &Artwork| or_not_available(a.price.map(|p| p.format_usd()))),
        ColumnDescriptor::new("status", "STATUS", |a: &Artwork| CellValue::from(a.status.as_str()))
            .not_hideable()
            .display(|a: &Artwork| a.status.label().to_string()),
        ColumnDescriptor::actions(),
    ]
}

fn or_not_available(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
