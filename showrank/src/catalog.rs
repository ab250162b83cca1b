//! Catalog API client
//!
//! Client for the paginated TV-series catalog endpoint: one GET per page,
//! bounded by a fixed timeout, no caching and no retries. Responses decode
//! permissively so that odd records degrade to skips instead of failures;
//! `imdb_rating` in particular arrives as either a JSON number or a string
//! and is kept raw until [`SeriesRecord::rating`] coerces it.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::CatalogConfig;

/// Catalog endpoint queried when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://jsonmock.hackerrank.com/api/tvseries";

/// Per-request timeout. Exceeding it fails the whole search.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "showrank/0.1.0";

/// Catalog client errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network-level failure: connect error, timeout, interrupted transfer.
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status.
    #[error("API error {0}: {1}")]
    Api(u16, String),

    /// Response body was not a decodable catalog page.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// One page of catalog records plus whatever pagination metadata the
/// endpoint chose to declare.
///
/// Every field is optional; the pager works out what it can from what is
/// present (see `PagePlan::from_first_page`) and unknown fields are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeriesPage {
    /// Records on this page. Absent or `null` counts as an empty page.
    pub data: Option<Vec<SeriesRecord>>,
    /// Declared total page count, trusted verbatim when present.
    pub total_pages: Option<u64>,
    /// Declared total record count across all pages.
    pub total: Option<u64>,
    /// Declared page size.
    pub per_page: Option<u64>,
}

impl SeriesPage {
    /// Consume the page, yielding its records. Absent/null `data` is empty.
    pub fn into_records(self) -> Vec<SeriesRecord> {
        self.data.unwrap_or_default()
    }
}

/// One catalog record.
///
/// `name` and `genre` may be absent or null; such records are dropped
/// before genre matching ever runs.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeriesRecord {
    /// Series name.
    pub name: Option<String>,
    /// Raw comma-separated genre string, e.g. `"Crime, Drama"`.
    pub genre: Option<String>,
    /// Rating as delivered: number, numeric string, `"N/A"`, null, ...
    #[serde(default)]
    pub imdb_rating: serde_json::Value,
}

impl SeriesRecord {
    /// Parse the rating into a finite `f64`.
    ///
    /// Accepts a JSON number or a numeric string (surrounding whitespace
    /// tolerated). Returns `None` for everything else - absent, null,
    /// `"N/A"`, empty - and for non-finite values, which would make
    /// best-candidate selection order-dependent.
    pub fn rating(&self) -> Option<f64> {
        let value = match &self.imdb_rating {
            serde_json::Value::Number(number) => number.as_f64(),
            serde_json::Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        };
        value.filter(|rating| rating.is_finite())
    }
}

/// Abstraction over the paginated catalog feed.
///
/// [`CatalogClient`] is the production implementation; tests substitute
/// scripted sources.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one page by 1-based index.
    async fn fetch_page(&self, page: u32) -> Result<SeriesPage, CatalogError>;
}

/// HTTP client for the catalog endpoint.
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client against the default endpoint.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(&CatalogConfig::default())
    }

    /// Create a client from resolved configuration.
    pub fn with_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    /// Endpoint this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl PageSource for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<SeriesPage, CatalogError> {
        tracing::debug!(page, url = %self.base_url, "Fetching catalog page");

        let response = self
            .http_client
            .get(&self.base_url)
            .query(&[("page", page)])
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api(status.as_u16(), error_text));
        }

        let payload: SeriesPage = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        tracing::debug!(
            page,
            records = payload.data.as_ref().map(Vec::len).unwrap_or(0),
            total_pages = ?payload.total_pages,
            "Catalog page decoded"
        );

        Ok(payload)
    }
}
