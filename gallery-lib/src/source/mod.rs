//! Artwork row sources
//!
//! A source answers paged listing queries. The table core never talks to a
//! source directly; callers fetch a page and hand the rows to a
//! [`gallery_table::DataTable`].

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::SourceError;
use crate::model::{Artwork, ArtworkStatus};

pub use memory::MemorySource;

/// Default page size for listings.
pub const DEFAULT_LIMIT: u32 = 10;

// =============================================================================
// ArtworkQuery
// =============================================================================

/// Paged listing query.
///
/// `page` is 1-based. `search` matches titles case-insensitively, `status`
/// must match exactly.
///
/// # Example
///
/// ```
/// use gallery_lib::source::ArtworkQuery;
/// use gallery_lib::model::ArtworkStatus;
///
/// let query = ArtworkQuery::from_params([("page", "3"), ("q", "blue"), ("status", "sold")]);
/// assert_eq!(query.page, 3);
/// assert_eq!(query.offset(), 20);
/// assert_eq!(query.status, Some(ArtworkStatus::Sold));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtworkQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub status: Option<ArtworkStatus>,
}

impl Default for ArtworkQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            search: None,
            status: None,
        }
    }
}

impl ArtworkQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the 1-based page. Zero becomes 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Sets the page size. Zero becomes 1.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Title search. Blank text clears it.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn status(mut self, status: ArtworkStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builds a query from listing parameters (`page`, `q`, `limit`,
    /// `status`). Values that do not parse fall back to the defaults.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = Self::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                "page" => match value.parse::<u32>() {
                    Ok(page) if page >= 1 => query.page = page,
                    _ => log::warn!("Ignoring invalid page parameter: {:?}", value),
                },
                "limit" => match value.parse::<u32>() {
                    Ok(limit) if limit >= 1 => query.limit = limit,
                    _ => log::warn!("Ignoring invalid limit parameter: {:?}", value),
                },
                "q" => query = query.search(value),
                "status" if value.is_empty() => query.status = None,
                "status" => match value.parse::<ArtworkStatus>() {
                    Ok(status) => query.status = Some(status),
                    Err(e) => log::warn!("Ignoring status parameter: {}", e),
                },
                _ => {}
            }
        }
        query
    }

    /// Number of rows skipped before this page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }

    /// Whether an artwork passes the search and status filters.
    pub fn matches(&self, artwork: &Artwork) -> bool {
        let search_ok = self
            .search
            .as_ref()
            .is_none_or(|needle| artwork.title.to_lowercase().contains(&needle.to_lowercase()));
        let status_ok = self.status.is_none_or(|status| artwork.status == status);
        search_ok && status_ok
    }
}

// =============================================================================
// ArtworkPage
// =============================================================================

/// One page of listing results.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtworkPage {
    /// Artworks on this page.
    pub artworks: Vec<Artwork>,
    /// Number of artworks matching the query across all pages.
    pub total_count: usize,
}

impl ArtworkPage {
    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Pages needed for `total_count` at the given page size.
    pub fn page_count(&self, limit: u32) -> usize {
        let limit = limit.max(1) as usize;
        self.total_count.div_ceil(limit)
    }
}

// =============================================================================
// ArtworkSource
// =============================================================================

/// Async provider of artwork listings.
#[async_trait]
pub trait ArtworkSource: Send + Sync {
    /// Returns the requested page of matching artworks, newest first.
    async fn list(&self, query: &ArtworkQuery) -> Result<ArtworkPage, SourceError>;

    /// Looks up one artwork.
    async fn get(&self, id: Uuid) -> Result<Artwork, SourceError>;
}
