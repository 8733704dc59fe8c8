//! HTTP client for the local Bible API.
//!
//! Each lookup is a single GET whose path carries the book, chapter and verse
//! specifier as percent-encoded segments. The HTTP status is not used to
//! reject a response: whatever body comes back is decoded, and the lookup
//! fails only if it is not JSON or lacks the expected key.

use std::time::Duration;

use bibleapi_core::{AppConfig, ChapterRequest, VerseRequest, DEFAULT_BASE_URL};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::BibleApiError;
use crate::path::encode_segment;
use crate::retry::retry_with_backoff;
use crate::types::{ChapterResponse, VerseResponse};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Client for the Bible API service.
///
/// Use [`BibleApiClient::new`] for the default `localhost:5000` service or
/// [`BibleApiClient::with_base_url`] to point elsewhere (a mock server in
/// tests, for instance).
pub struct BibleApiClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl BibleApiClient {
    /// Creates a client for the service at [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`BibleApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, BibleApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs, user_agent)
    }

    /// Creates a client with a custom base URL. Retries are disabled.
    ///
    /// A path prefix on `base_url` is kept; any query string or fragment is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns [`BibleApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`BibleApiError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute `http(s)` URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, BibleApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(user_agent)
            .build()?;

        let invalid = |reason: String| BibleApiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let mut parsed =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
        }
        // Lookups carry everything in the path.
        parsed.set_query(None);
        parsed.set_fragment(None);

        Ok(Self {
            client,
            base_url: parsed,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Creates a client from loaded application configuration, including its
    /// retry policy.
    ///
    /// # Errors
    ///
    /// Same as [`BibleApiClient::with_base_url`].
    pub fn from_app_config(config: &AppConfig) -> Result<Self, BibleApiError> {
        let client = Self::with_base_url(
            &config.base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )?;
        Ok(client.with_retries(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Enables retry of connect failures and timeouts.
    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `<base>/api/get_verse/<book>/<chapter>/<verse>`.
    ///
    /// # Errors
    ///
    /// Returns [`BibleApiError::InvalidPathSegment`] if the book or verse is
    /// `.` or `..`.
    pub fn verse_url(&self, request: &VerseRequest) -> Result<Url, BibleApiError> {
        let chapter = request.chapter.to_string();
        let verse = request.verse.to_string();
        self.endpoint_url("get_verse", &[request.book.as_str(), &chapter, &verse])
    }

    /// `<base>/api/get_chapter/<book>/<chapters>`.
    ///
    /// # Errors
    ///
    /// Returns [`BibleApiError::InvalidPathSegment`] if the book or chapter
    /// specifier is `.` or `..`.
    pub fn chapter_url(&self, request: &ChapterRequest) -> Result<Url, BibleApiError> {
        let chapters = request.chapters.to_string();
        self.endpoint_url("get_chapter", &[request.book.as_str(), &chapters])
    }

    /// Fetches one verse or verse range.
    ///
    /// # Errors
    ///
    /// - [`BibleApiError::Http`] on network failure or timeout.
    /// - [`BibleApiError::Deserialize`] if the body is not JSON or `verse` is
    ///   not a string.
    /// - [`BibleApiError::MissingField`] if the body has no `verse` key.
    /// - [`BibleApiError::InvalidPathSegment`] if the book or verse is `.` or
    ///   `..`; nothing is sent.
    pub async fn get_verse(
        &self,
        request: &VerseRequest,
    ) -> Result<VerseResponse, BibleApiError> {
        let url = self.verse_url(request)?;
        self.fetch_with_field(&url, "verse").await
    }

    /// Fetches every verse of a chapter, or of an `N-M` run of chapters.
    ///
    /// # Errors
    ///
    /// As [`BibleApiClient::get_verse`], with `verses` as the required key.
    pub async fn get_chapter(
        &self,
        request: &ChapterRequest,
    ) -> Result<ChapterResponse, BibleApiError> {
        let url = self.chapter_url(request)?;
        self.fetch_with_field(&url, "verses").await
    }

    /// Appends `api/<endpoint>/<segments...>` to the base URL path, encoding
    /// each segment.
    fn endpoint_url(&self, endpoint: &str, segments: &[&str]) -> Result<Url, BibleApiError> {
        let mut path = self.base_url.path().trim_end_matches('/').to_owned();
        path.push_str("/api/");
        path.push_str(endpoint);
        for segment in segments {
            path.push('/');
            path.push_str(&encode_segment(segment)?);
        }
        let mut url = self.base_url.clone();
        url.set_path(&path);
        Ok(url)
    }

    async fn fetch_with_field<T: DeserializeOwned>(
        &self,
        url: &Url,
        field: &'static str,
    ) -> Result<T, BibleApiError> {
        let (status, body) =
            retry_with_backoff(self.max_retries, self.backoff_base_ms, || self.send(url)).await?;
        decode_body(url, status, &body, field)
    }

    /// Sends a GET request and returns the status with the raw body text.
    async fn send(&self, url: &Url) -> Result<(StatusCode, String), BibleApiError> {
        tracing::debug!(%url, "requesting Bible API");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                %url,
                status = status.as_u16(),
                "Bible API returned non-success status; decoding body anyway"
            );
        }
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Parses `body` as JSON, requires the top-level `field` key, then maps the
/// object onto `T`.
pub(crate) fn decode_body<T: DeserializeOwned>(
    url: &Url,
    status: StatusCode,
    body: &str,
    field: &'static str,
) -> Result<T, BibleApiError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| BibleApiError::Deserialize {
            context: format!("{url} (HTTP {})", status.as_u16()),
            source: e,
        })?;

    if value.get(field).is_none() {
        return Err(BibleApiError::MissingField {
            field,
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    serde_json::from_value(value).map_err(|e| BibleApiError::Deserialize {
        context: format!("{field} from {url}"),
        source: e,
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
