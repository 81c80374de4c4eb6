//! Artwork records

use chrono::DateTime;
use chrono::Utc;
use gallery_table::TableRow;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use super::Money;

/// Sales status of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtworkStatus {
    #[default]
    Available,
    Sold,
    Reserved,
    NotForSale,
}

impl ArtworkStatus {
    /// Every status, in display order.
    pub const ALL: [ArtworkStatus; 4] = [
        ArtworkStatus::Available,
        ArtworkStatus::Sold,
        ArtworkStatus::Reserved,
        ArtworkStatus::NotForSale,
    ];

    /// Wire name, as stored and as used in listing parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtworkStatus::Available => "available",
            ArtworkStatus::Sold => "sold",
            ArtworkStatus::Reserved => "reserved",
            ArtworkStatus::NotForSale => "not_for_sale",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ArtworkStatus::Available => "Available",
            ArtworkStatus::Sold => "Sold",
            ArtworkStatus::Reserved => "Reserved",
            ArtworkStatus::NotForSale => "Not for sale",
        }
    }

    /// `(value, label)` pairs for a faceted status filter.
    pub fn facet_options() -> Vec<(&'static str, &'static str)> {
        Self::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
    }
}

impl std::fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unknown status name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown artwork status: {0}")]
pub struct ParseStatusError(pub String);

impl std::str::FromStr for ArtworkStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// The artist an artwork is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Reference to a stored image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// One artwork as shown in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub dimensions: Option<String>,
    #[serde(default)]
    pub price: Option<Money>,
    #[serde(default)]
    pub status: ArtworkStatus,
    #[serde(default)]
    pub artist: Option<ArtistRef>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Artwork {
    /// Creates an available artwork with a fresh id and nothing but a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            year: None,
            medium: None,
            dimensions: None,
            price: None,
            status: ArtworkStatus::Available,
            artist: None,
            main_image: None,
            created_at: Utc::now(),
        }
    }

    pub fn artist_name(&self) -> Option<&str> {
        self.artist.as_ref().and_then(|a| a.name.as_deref())
    }

    pub fn image_url(&self) -> Option<&str> {
        self.main_image.as_ref().map(|i| i.url.as_str())
    }
}

impl TableRow for Artwork {
    fn id(&self) -> String {
        self.id.to_string()
    }
}
