use crate::error::{CatalogError, CatalogErrorExt};
use crate::source::PartSource;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use rig_domain::config::CatalogConfig;
use rig_domain::constants::ALL_CATEGORIES;
use rig_domain::part::{Part, PartsEnvelope};
use serde_json::Value;
use tracing::{debug, warn};

/// Parts API client: `GET {base_url}/parts[?category=..]` with a fixed timeout.
///
/// One attempt per call, no retries. The underlying [`Client`] pools connections and is
/// cheap to clone.
#[derive(Debug, Clone)]
pub struct HttpPartSource {
    client: Client,
    parts_url: String,
}

impl HttpPartSource {
    /// Builds the client from the catalog settings.
    ///
    /// # Errors
    /// Returns [`CatalogError::Http`] if the TLS backend cannot be initialized.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("rig-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, parts_url: format!("{}/parts", config.base_url.trim_end_matches('/')) })
    }

    #[must_use]
    pub fn parts_url(&self) -> &str {
        &self.parts_url
    }

    /// Fetches parts and reports every failure.
    ///
    /// # Errors
    /// * [`CatalogError::Http`] for connection failures and timeouts.
    /// * [`CatalogError::Status`] for any status other than `200 OK`.
    /// * [`CatalogError::Decode`] when the body is not a `{ "data": [...] }` envelope.
    ///
    /// Individual records that do not decode are skipped.
    pub async fn try_fetch(&self, category: Option<&str>) -> Result<Vec<Part>, CatalogError> {
        let mut request = self.client.get(&self.parts_url);
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let response = request.send().await.context("Request to parts API failed")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CatalogError::Status { status: status.as_u16(), context: None });
        }

        let body = response.bytes().await.context("Failed to read parts API response")?;
        let envelope: PartsEnvelope<Value> =
            serde_json::from_slice(&body).context("Parts API returned malformed JSON")?;

        Ok(decode_records(envelope.data))
    }
}

/// Decodes each record on its own; a record that is not a part is logged and skipped.
fn decode_records(records: Vec<Value>) -> Vec<Part> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(part) => Some(part),
            Err(error) => {
                warn!(index, %error, "Skipping malformed part record");
                None
            },
        })
        .collect()
}

#[async_trait]
impl PartSource for HttpPartSource {
    async fn fetch(&self, category: Option<&str>) -> Vec<Part> {
        match self.try_fetch(category).await {
            Ok(parts) => {
                debug!(count = parts.len(), category = category.unwrap_or(ALL_CATEGORIES), "Fetched parts");
                parts
            },
            Err(error) => {
                warn!(
                    url = %self.parts_url,
                    category = category.unwrap_or(ALL_CATEGORIES),
                    %error,
                    "Error fetching parts"
                );
                Vec::new()
            },
        }
    }
}
