//! Artwork gallery library
//!
//! Domain model, listing columns and row sources for the artwork listing.
//! The table state itself lives in `gallery-table`.

pub mod columns;
pub mod error;
pub mod model;
pub mod source;

pub use columns::{IMAGE_KEY, artwork_columns};
pub use error::{FieldValidationError, SourceError, ValidationErrors};
