use chrono::{Duration, TimeZone, Utc};
use gallery_lib::model::{Artwork, ArtworkImage, ArtworkStatus, Money, NewArtwork};
use gallery_lib::source::{ArtworkQuery, ArtworkSource, MemorySource};
use gallery_lib::{IMAGE_KEY, SourceError, artwork_columns};
use gallery_table::{ColumnSort, DataTable, FilterValue};

/// Twelve artworks, created one day apart, "Work 1" oldest.
fn catalogue() -> Vec<Artwork> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (1..=12)
        .map(|i| {
            let mut artwork = Artwork::new(format!("Work {}", i));
            artwork.created_at = start + Duration::days(i);
            artwork.price = Some(Money::from_int(100 * i));
            artwork.status = if i % 3 == 0 {
                ArtworkStatus::Sold
            } else {
                ArtworkStatus::Available
            };
            artwork
        })
        .collect()
}

fn titles(artworks: &[Artwork]) -> Vec<&str> {
    artworks.iter().map(|a| a.title.as_str()).collect()
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_pages_newest_first() {
    let source = MemorySource::with_artworks(catalogue());

    let first = source.list(&ArtworkQuery::new()).await.unwrap();
    assert_eq!(first.total_count, 12);
    assert_eq!(first.len(), 10);
    assert_eq!(first.artworks[0].title, "Work 12");

    let second = source.list(&ArtworkQuery::new().page(2)).await.unwrap();
    assert_eq!(titles(&second.artworks), vec!["Work 2", "Work 1"]);
    assert_eq!(second.page_count(10), 2);
}

#[tokio::test]
async fn test_list_beyond_last_page_is_empty() {
    let source = MemorySource::with_artworks(catalogue());
    let page = source.list(&ArtworkQuery::new().page(9)).await.unwrap();
    assert!(page.is_empty());
    assert_eq!(page.total_count, 12);
}

#[tokio::test]
async fn test_list_search_and_status() {
    let source = MemorySource::with_artworks(catalogue());

    let query = ArtworkQuery::from_params([("q", "work 1"), ("limit", "5")]);
    let page = source.list(&query).await.unwrap();
    assert_eq!(titles(&page.artworks), vec!["Work 12", "Work 11", "Work 10", "Work 1"]);

    let sold = source.list(&ArtworkQuery::new().status(ArtworkStatus::Sold)).await.unwrap();
    assert_eq!(sold.total_count, 4);
    assert!(sold.artworks.iter().all(|a| a.status == ArtworkStatus::Sold));
}

#[tokio::test]
async fn test_get_and_not_found() {
    let artworks = catalogue();
    let id = artworks[4].id;
    let source = MemorySource::with_artworks(artworks);

    assert_eq!(source.get(id).await.unwrap().title, "Work 5");

    let missing = uuid::Uuid::new_v4();
    let err = source.get(missing).await.unwrap_err();
    assert!(err.is_not_found());
}

// ============================================================================
// Create / delete
// ============================================================================

#[tokio::test]
async fn test_create_validates() {
    let source = MemorySource::new();
    let err = source.create(NewArtwork::new("")).await.unwrap_err();
    assert!(matches!(err, SourceError::Validation(ref e) if e.len() == 1));
    assert!(source.is_empty().await);
}

#[tokio::test]
async fn test_create_then_delete() {
    let source = MemorySource::with_artworks(catalogue());

    let mut form = NewArtwork::new("  Morning Fog ");
    form.retail_price = Some(Money::from_int(750));
    form.artist_id = Some("artist-7".into());
    form.main_image = Some(ArtworkImage {
        id: "img".into(),
        url: "https://img.example/fog.jpg".into(),
        alt: Some("Fog over water".into()),
        position: 0,
    });
    let created = source.create(form).await.unwrap();
    assert_eq!(created.title, "Morning Fog");
    assert_eq!(created.image_url(), Some("https://img.example/fog.jpg"));
    assert_eq!(source.len().await, 13);

    let first = source.list(&ArtworkQuery::new()).await.unwrap();
    assert_eq!(first.artworks[0].id, created.id);

    let removed = source.delete(created.id).await.unwrap();
    assert_eq!(removed.id, created.id);
    assert!(source.delete(created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_from_json() {
    let json = r#"[
        {"id": "0b8e5a52-1c1e-4a44-9d7e-5f6f2e0f9a01", "title": "Salt Flats", "status": "reserved"},
        {"id": "0b8e5a52-1c1e-4a44-9d7e-5f6f2e0f9a02", "title": "Kiln", "price": 80}
    ]"#;
    let source = MemorySource::from_json(json).unwrap();
    assert_eq!(source.len().await, 2);

    assert!(matches!(MemorySource::from_json("{"), Err(SourceError::Json(_))));
}

// ============================================================================
// Listing page into a table
// ============================================================================

#[tokio::test]
async fn test_page_drives_table() {
    let source = MemorySource::with_artworks(catalogue());
    let page = source.list(&ArtworkQuery::new()).await.unwrap();

    let mut table = DataTable::new(artwork_columns(), page.artworks);
    table.set_sorting(vec![ColumnSort::asc("price")]);
    let rows = table.page_rows();
    assert_eq!(rows[0].title, "Work 3");

    table.set_column_filter("status", Some(FilterValue::one_of(["sold"])));
    let sold: Vec<String> = table.filtered_sorted_rows().iter().map(|a| a.title.clone()).collect();
    assert_eq!(sold, vec!["Work 3", "Work 6", "Work 9", "Work 12"]);

    table.on_resize(500);
    let grid: Vec<&str> = table.grid_columns(IMAGE_KEY).iter().map(|c| c.id.as_str()).collect();
    assert_eq!(grid, vec!["title", "status", "actions"]);
}
