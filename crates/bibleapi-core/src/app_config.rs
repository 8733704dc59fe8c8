/// Base URL of the local Bible API service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Scheme, host and port of the Bible API, without a trailing path.
    pub base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after a network-level failure. `0` disables retry.
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "warn".to_string(),
            request_timeout_secs: 30,
            user_agent: "bibleapi/0.1 (verse-lookup)".to_string(),
            max_retries: 0,
            retry_backoff_base_ms: 1_000,
        }
    }
}
