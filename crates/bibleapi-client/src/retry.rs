//! Opt-in retry with exponential back-off and jitter.
//!
//! The client defaults to zero retries, so failures surface on the first
//! attempt. When enabled, only network-level failures are retried; a
//! response that arrived but could not be decoded is returned immediately.

use std::future::Future;
use std::time::Duration;

use crate::error::BibleApiError;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// **Retriable:** connect failures and timeouts.
///
/// **Not retriable:** everything that means the server answered, plus the
/// URL construction errors.
pub(crate) fn is_retriable(err: &BibleApiError) -> bool {
    match err {
        BibleApiError::Http(e) => e.is_timeout() || e.is_connect(),
        BibleApiError::InvalidBaseUrl { .. }
        | BibleApiError::InvalidPathSegment { .. }
        | BibleApiError::Deserialize { .. }
        | BibleApiError::MissingField { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The sleep before retry `n` is `backoff_base_ms × 2ⁿ⁻¹` with ±25 % jitter,
/// capped at 60 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, BibleApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, BibleApiError>>,
{
    const MAX_DELAY_MS: u64 = 60_000;
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "Bible API unreachable, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
