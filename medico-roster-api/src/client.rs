//! Doctor collection API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::http;
use crate::types::{CreatePayload, Doctor, DoctorDraft, ErrorBody, ListPayload};

/// Resource path of the doctor collection.
const DOCTORS_PATH: &str = "/doctors";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Default retry budget for read requests.
const DEFAULT_READ_RETRIES: u32 = 2;

/// Connection settings for [`RestDoctorApi`].
///
/// There is no client-side timeout policy beyond what is configured here;
/// the transport owns it entirely.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:3000/api`.
    pub base_url: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// Retry budget for read requests. Mutating requests are never retried.
    pub max_read_retries: u32,
}

impl ApiConfig {
    /// Configuration with default timeouts for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_read_retries: DEFAULT_READ_RETRIES,
        }
    }
}

/// The doctor collection as seen by the screens.
///
/// Screens depend on this trait rather than on [`RestDoctorApi`] directly
/// so tests can substitute an in-memory implementation.
#[async_trait]
pub trait DoctorApi: Send + Sync {
    /// Fetch the full collection.
    ///
    /// An unrecognized response shape degrades to an empty collection
    /// rather than failing.
    async fn list_doctors(&self) -> Result<Vec<Doctor>>;

    /// Create a record from the draft's raw string values.
    ///
    /// Returns the created record when the response carries one; the
    /// screens do not consume it either way.
    async fn create_doctor(&self, draft: &DoctorDraft) -> Result<Option<Doctor>>;

    /// Delete a record by identity.
    ///
    /// Deleting an id that no longer exists is not special-cased; whatever
    /// the server answers is surfaced through the normal error path.
    async fn delete_doctor(&self, id: i64) -> Result<()>;
}

/// [`DoctorApi`] implementation over HTTP.
pub struct RestDoctorApi {
    client: Client,
    config: ApiConfig,
}

impl RestDoctorApi {
    /// Build a client with the configured timeouts.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ApiError::Network {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Map a non-success status to [`ApiError::Server`], extracting the
    /// optional `mensaje` from the error body.
    fn check_status(status: u16, body: &str) -> Result<()> {
        if (200..300).contains(&status) {
            return Ok(());
        }
        let mensaje = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.mensaje);
        log::warn!("Request rejected (HTTP {status}), mensaje={mensaje:?}");
        Err(ApiError::Server { status, mensaje })
    }
}

#[async_trait]
impl DoctorApi for RestDoctorApi {
    async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        let url = self.url(DOCTORS_PATH);
        let (status, body) = http::execute_request_with_retry(
            self.client.get(&url),
            "GET",
            &url,
            self.config.max_read_retries,
        )
        .await?;
        Self::check_status(status, &body)?;

        let payload: ListPayload = http::parse_json(&body)?;
        Ok(payload.into_doctors())
    }

    async fn create_doctor(&self, draft: &DoctorDraft) -> Result<Option<Doctor>> {
        let url = self.url(DOCTORS_PATH);
        let request = self.client.post(&url).json(draft);
        let (status, body) = http::execute_request(request, "POST", &url).await?;
        Self::check_status(status, &body)?;

        // The success body is tolerated in any shape; a record is a bonus.
        match serde_json::from_str::<CreatePayload>(&body) {
            Ok(payload) => Ok(payload.into_doctor()),
            Err(e) => {
                log::debug!("Create response carried no decodable record: {e}");
                Ok(None)
            }
        }
    }

    async fn delete_doctor(&self, id: i64) -> Result<()> {
        let url = format!("{}/{id}", self.url(DOCTORS_PATH));
        let request = self.client.delete(&url);
        let (status, body) = http::execute_request(request, "DELETE", &url).await?;
        Self::check_status(status, &body)?;
        Ok(())
    }
}
