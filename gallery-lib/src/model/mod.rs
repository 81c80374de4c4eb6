//! Artwork domain types

mod artwork;
mod money;
mod new_artwork;

pub use artwork::{ArtistRef, Artwork, ArtworkStatus, ImageRef, ParseStatusError};
pub use money::Money;
pub use new_artwork::{ArtworkImage, MaterialUsage, NewArtwork, ProductionCosts, Provenance};
