//! Client for the local Bible API verse lookup service.

mod client;
mod error;
mod path;
mod retry;
mod types;

pub use bibleapi_core::{ChapterRequest, RangeSpec, VerseRequest};
pub use client::BibleApiClient;
pub use error::BibleApiError;
pub use types::{ChapterResponse, VerseResponse};

/// Fetches the text of `book chapter:verse` from the service at
/// `localhost:5000` using default settings.
///
/// # Errors
///
/// See [`BibleApiClient::get_verse`].
pub async fn get_verse(
    book: &str,
    chapter: u32,
    verse: impl Into<RangeSpec>,
) -> Result<String, BibleApiError> {
    get_verse_from(bibleapi_core::DEFAULT_BASE_URL, book, chapter, verse).await
}

/// Like [`get_verse`], against the service at `base_url`.
///
/// # Errors
///
/// See [`BibleApiClient::with_base_url`] and [`BibleApiClient::get_verse`].
pub async fn get_verse_from(
    base_url: &str,
    book: &str,
    chapter: u32,
    verse: impl Into<RangeSpec>,
) -> Result<String, BibleApiError> {
    let config = bibleapi_core::AppConfig {
        base_url: base_url.to_owned(),
        ..bibleapi_core::AppConfig::default()
    };
    let client = BibleApiClient::from_app_config(&config)?;
    let response = client
        .get_verse(&VerseRequest::new(book, chapter, verse))
        .await?;
    Ok(response.verse)
}
