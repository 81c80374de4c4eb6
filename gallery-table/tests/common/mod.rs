//! Shared fixtures for table tests.

#![allow(dead_code)]

use gallery_table::{Breakpoint, CellValue, ColumnDescriptor, ColumnKind, TableRow};

#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    pub id: u32,
    pub title: &'static str,
    pub year: Option<i64>,
    pub artist: Option<&'static str>,
    pub dimensions: Option<&'static str>,
    pub price: Option<i64>,
    pub status: &'static str,
    pub image: &'static str,
}

impl TableRow for Piece {
    fn id(&self) -> String {
        self.id.to_string()
    }
}

pub fn piece(id: u32, title: &'static str, price: Option<i64>) -> Piece {
    Piece {
        id,
        title,
        year: Some(2000 + id as i64),
        artist: Some("Ada"),
        dimensions: Some("30x40 cm"),
        price,
        status: "available",
        image: "https://img.example/1.jpg",
    }
}

pub fn columns() -> Vec<ColumnDescriptor<Piece>> {
    vec![
        ColumnDescriptor::select(),
        ColumnDescriptor::new("image", "IMAGE", |p: &Piece| p.image.into())
            .kind(ColumnKind::Image)
            .not_hideable(),
        ColumnDescriptor::new("title", "TITLE", |p: &Piece| p.title.into()).not_hideable(),
        ColumnDescriptor::new("year", "YEAR", |p: &Piece| p.year.into())
            .breakpoint(Breakpoint::Sm)
            .display(|p: &Piece| p.year.map(|y| y.to_string()).unwrap_or_else(|| "N/A".into())),
        ColumnDescriptor::new("artist", "ARTIST", |p: &Piece| p.artist.into())
            .breakpoint(Breakpoint::Sm),
        ColumnDescriptor::new("dimensions", "DIMENSIONS", |p: &Piece| p.dimensions.into())
            .breakpoint(Breakpoint::Lg),
        ColumnDescriptor::new("price", "PRICE", |p: &Piece| p.price.into())
            .breakpoint(Breakpoint::Md),
        ColumnDescriptor::new("status", "STATUS", |p: &Piece| CellValue::from(p.status))
            .not_hideable(),
        ColumnDescriptor::actions(),
    ]
}

/// Rows A..E (ids 1..5).
pub fn letters() -> Vec<Piece> {
    vec![
        piece(1, "A", Some(50)),
        piece(2, "B", Some(40)),
        piece(3, "C", Some(30)),
        piece(4, "D", Some(20)),
        piece(5, "E", Some(10)),
    ]
}

pub fn ids(rows: &[&Piece]) -> Vec<u32> {
    rows.iter().map(|p| p.id).collect()
}
