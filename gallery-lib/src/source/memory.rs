//! In-memory artwork source

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ArtworkPage, ArtworkQuery, ArtworkSource};
use crate::error::SourceError;
use crate::model::{ArtistRef, Artwork, ImageRef, NewArtwork};

/// Artwork source backed by a vector.
///
/// Listings are ordered newest first, ties keep insertion order.
#[derive(Debug, Default)]
pub struct MemorySource {
    artworks: RwLock<Vec<Artwork>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artworks(artworks: Vec<Artwork>) -> Self {
        Self {
            artworks: RwLock::new(artworks),
        }
    }

    /// Loads a JSON array of artworks.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let artworks: Vec<Artwork> = serde_json::from_str(json)?;
        log::info!("Loaded {} artworks", artworks.len());
        Ok(Self::with_artworks(artworks))
    }

    pub async fn len(&self) -> usize {
        self.artworks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.artworks.read().await.is_empty()
    }

    /// Validates the form and stores a new artwork.
    pub async fn create(&self, form: NewArtwork) -> Result<Artwork, SourceError> {
        form.validate()?;

        let artwork = Artwork {
            id: Uuid::new_v4(),
            title: form.title.trim().to_string(),
            year: form.year,
            medium: form.medium,
            dimensions: form.dimensions,
            price: form.retail_price,
            status: form.status,
            artist: form.artist_id.map(|id| ArtistRef { id, name: None }),
            main_image: form.main_image.map(|image| ImageRef {
                url: image.url,
                alt: image.alt,
            }),
            created_at: Utc::now(),
        };

        log::info!("Created artwork {} ({})", artwork.id, artwork.title);
        self.artworks.write().await.push(artwork.clone());
        Ok(artwork)
    }

    /// Removes an artwork and returns it.
    pub async fn delete(&self, id: Uuid) -> Result<Artwork, SourceError> {
        let mut artworks = self.artworks.write().await;
        let index = artworks
            .iter()
            .position(|a| a.id == id)
            .ok_or(SourceError::NotFound(id))?;
        log::info!("Deleted artwork {}", id);
        Ok(artworks.remove(index))
    }
}

#[async_trait]
impl ArtworkSource for MemorySource {
    async fn list(&self, query: &ArtworkQuery) -> Result<ArtworkPage, SourceError> {
        let artworks = self.artworks.read().await;

        let mut matching: Vec<&Artwork> = artworks.iter().filter(|a| query.matches(a)).collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total_count = matching.len();
        let page: Vec<Artwork> = matching
            .into_iter()
            .skip(query.offset())
            .take(query.limit as usize)
            .cloned()
            .collect();

        log::debug!(
            "Listed page {} ({} of {} artworks, search={:?}, status={:?})",
            query.page,
            page.len(),
            total_count,
            query.search,
            query.status
        );

        Ok(ArtworkPage {
            artworks: page,
            total_count,
        })
    }

    async fn get(&self, id: Uuid) -> Result<Artwork, SourceError> {
        self.artworks
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(SourceError::NotFound(id))
    }
}
