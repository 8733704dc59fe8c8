use thiserror::Error;

/// Errors returned by the Bible API client.
#[derive(Debug, Error)]
pub enum BibleApiError {
    /// Network or TLS failure from the underlying HTTP client, including
    /// connection refused and timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A path value that URL normalisation would collapse (`.` or `..`), so
    /// it cannot be sent as its own segment.
    #[error("path value \"{value}\" cannot be sent as a URL segment")]
    InvalidPathSegment { value: String },

    /// The response body was not JSON, or did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The response was JSON but lacked the expected top-level key.
    #[error("response from {url} (HTTP {status}) has no \"{field}\" key")]
    MissingField {
        field: &'static str,
        url: String,
        status: u16,
    },
}
