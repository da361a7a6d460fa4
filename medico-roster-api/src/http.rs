//! Generic HTTP request plumbing.
//!
//! One place for the request/response mechanics every endpoint shares:
//! sending, logging, timeout classification, and the read-path retry loop.
//! Endpoint-specific status handling and body decoding stay with the caller.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// Maximum number of characters of a response body to include in debug logs.
const LOG_BODY_LIMIT: usize = 256;

/// Truncate a response body for logging.
fn truncate_for_log(s: &str) -> String {
    if s.len() <= LOG_BODY_LIMIT {
        s.to_string()
    } else {
        let mut end = LOG_BODY_LIMIT;
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
    }
}

/// Perform an HTTP request and return `(status_code, response_text)`.
///
/// Transport failures are classified into [`ApiError::Timeout`] and
/// [`ApiError::Network`]. Gateway errors (HTTP 502–504) are mapped to
/// [`ApiError::Network`] so the read path can retry them; every other
/// status is returned to the caller untouched.
pub(crate) async fn execute_request(
    request_builder: RequestBuilder,
    method: &str,
    url: &str,
) -> Result<(u16, String)> {
    log::debug!("{method} {url}");

    let response = request_builder.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::Timeout {
                detail: e.to_string(),
            }
        } else {
            ApiError::Network {
                detail: e.to_string(),
            }
        }
    })?;

    let status_code = response.status().as_u16();
    log::debug!("Response Status: {status_code}");

    if matches!(status_code, 502..=504) {
        let body = response.text().await.unwrap_or_default();
        log::warn!("Gateway error (HTTP {status_code})");
        return Err(ApiError::Network {
            detail: format!("HTTP {status_code}: {body}"),
        });
    }

    let response_text = response.text().await.map_err(|e| ApiError::Network {
        detail: format!("Failed to read response body: {e}"),
    })?;

    log::debug!("Response Body: {}", truncate_for_log(&response_text));

    Ok((status_code, response_text))
}

/// Perform a request with automatic retries on transient failures.
///
/// Only used on the read path: list requests are idempotent, so a network
/// error or timeout is retried with exponential backoff (100ms, 200ms,
/// 400ms, ... capped at 10s). Server rejections are never retried.
pub(crate) async fn execute_request_with_retry(
    request_builder: RequestBuilder,
    method: &str,
    url: &str,
    max_retries: u32,
) -> Result<(u16, String)> {
    if max_retries == 0 {
        return execute_request(request_builder, method, url).await;
    }

    let mut last_error = None;

    for attempt in 0..=max_retries {
        // RequestBuilder is single-use; clone for every attempt.
        let Some(req) = request_builder.try_clone() else {
            log::warn!("Cannot clone request, disabling retry");
            return execute_request(request_builder, method, url).await;
        };

        match execute_request(req, method, url).await {
            Ok(resp) => return Ok(resp),
            Err(e) if attempt < max_retries && is_retryable(&e) => {
                let delay = backoff_delay(attempt);
                log::warn!(
                    "Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                    attempt + 1,
                    max_retries,
                    delay.as_secs_f32(),
                    e
                );
                tokio::time::sleep(delay).await;
                last_error = Some(e);
            }
            Err(e) => return Err(e),
        }
    }

    Err(last_error.unwrap_or_else(|| ApiError::Network {
        detail: "All retries exhausted with no error captured".to_string(),
    }))
}

/// Decode a JSON response body.
pub(crate) fn parse_json<T>(response_text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_str(response_text).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(response_text));
        ApiError::Parse {
            detail: e.to_string(),
        }
    })
}

/// Whether the error is worth retrying.
///
/// Transport failures are; server rejections and decode failures are not.
fn is_retryable(error: &ApiError) -> bool {
    matches!(error, ApiError::Network { .. } | ApiError::Timeout { .. })
}

/// Exponential backoff delay: 100ms, 200ms, 400ms, ... capped at 10s.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20); // keep 2^attempt from overflowing
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}
