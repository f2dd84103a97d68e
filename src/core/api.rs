use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::model::QuantityRecord;

/// Errors from the quantity backend, split by failure class: transport,
/// non-success status, malformed body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to the quantity backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("quantity backend returned {status} for {endpoint}")]
    Status {
        status: reqwest::StatusCode,
        endpoint: &'static str,
    },

    #[error("quantity backend sent a malformed response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Access to the per-country quantity records the backend owns.
pub trait QuantityStore {
    /// Fetches every stored quantity record in bulk.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<QuantityRecord>, ApiError>>;

    /// Creates or increments the record for `name`. Create-or-increment
    /// semantics live entirely in the backend; the client supplies only the
    /// name, never a delta.
    fn add_or_update(&self, name: &str)
    -> impl Future<Output = Result<QuantityRecord, ApiError>>;
}

#[derive(Debug, Deserialize)]
struct QuantityListBody {
    states: Vec<QuantityRecord>,
}

#[derive(Debug, Serialize)]
struct AddOrUpdateBody<'a> {
    name: &'a str,
}

/// REST client for the quantity backend.
#[derive(Debug, Clone)]
pub struct HttpQuantityStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpQuantityStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(
        response: reqwest::Response,
        endpoint: &'static str,
    ) -> Result<String, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
                endpoint,
            });
        }
        Ok(response.text().await?)
    }
}

impl QuantityStore for HttpQuantityStore {
    async fn fetch_all(&self) -> Result<Vec<QuantityRecord>, ApiError> {
        let response = self.client.get(self.endpoint("/getAll")).send().await?;
        let body = Self::read_body(response, "/getAll").await?;
        let parsed: QuantityListBody = serde_json::from_str(&body)?;
        debug!(records = parsed.states.len(), "fetched quantity records");
        Ok(parsed.states)
    }

    async fn add_or_update(&self, name: &str) -> Result<QuantityRecord, ApiError> {
        let response = self
            .client
            .post(self.endpoint("/addOrUpdateQuantity"))
            .json(&AddOrUpdateBody { name })
            .send()
            .await?;
        let body = Self::read_body(response, "/addOrUpdateQuantity").await?;
        let record: QuantityRecord = serde_json::from_str(&body)?;
        debug!(country = %record.name, quantity = record.quantity, "quantity updated");
        Ok(record)
    }
}
