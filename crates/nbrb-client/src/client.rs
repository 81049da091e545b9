use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::error::LookupError;
use crate::record::RateRecord;

/// Production endpoint; the identifier is appended as a path segment.
pub const DEFAULT_BASE_URL: &str = "https://api.nbrb.by/exrates/rates";

/// Rate lookup capability. [`RateLookupClient`] is the HTTP implementation; tests substitute stubs.
#[async_trait]
pub trait RateLookup: Send + Sync {
    /// Fetches the current rate record for `bank_id`.
    async fn fetch_rate(&self, bank_id: &str) -> Result<RateRecord, LookupError>;
}

/// HTTP client for the rate provider. Cheap to clone; shares one connection pool.
#[derive(Clone, Debug)]
pub struct RateLookupClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for RateLookupClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl RateLookupClient {
    /// Creates a client against `base_url` (a trailing `/` is ignored).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client reusing an existing reqwest client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `bank_id`. The identifier is interpolated as is.
    pub fn rate_url(&self, bank_id: &str) -> String {
        format!("{}/{}", self.base_url, bank_id)
    }
}

#[async_trait]
impl RateLookup for RateLookupClient {
    #[instrument(skip(self))]
    async fn fetch_rate(&self, bank_id: &str) -> Result<RateRecord, LookupError> {
        let url = self.rate_url(bank_id);
        info!(url = %url, "Requesting exchange rate");

        let response = self.http.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Rate provider unreachable");
            LookupError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Rate provider returned error status");
            return Err(LookupError::Transport(format!(
                "{} returned HTTP {}",
                url, status
            )));
        }

        let body = response.text().await?;
        let record: RateRecord = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, body_len = body.len(), "Rate provider response did not parse");
            LookupError::from(e)
        })?;

        info!(
            abbreviation = %record.abbreviation,
            official_rate = record.official_rate,
            date = %record.date,
            "Exchange rate received"
        );
        Ok(record)
    }
}
