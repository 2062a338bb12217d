pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::config::DEFAULT_SHEETS_API_BASE;
use crate::error::PriceError;
use crate::models::SheetConfig;

/// Rows of a spreadsheet range, every cell rendered as text.
pub type SheetRows = Vec<Vec<String>>;

#[async_trait]
pub trait SheetsClient: Send + Sync {
    async fn fetch_values(&self, config: &SheetConfig) -> Result<SheetRows, PriceError>;
}

pub struct SheetsHttpClient {
    client: Client,
    base_url: Url,
}

impl SheetsHttpClient {
    pub fn new() -> Result<Self, PriceError> {
        Self::with_base_url(DEFAULT_SHEETS_API_BASE)
    }

    /// Points the client at another host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: &str) -> Result<Self, PriceError> {
        let client = Client::builder().build()?;
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|_| PriceError::Configuration {
            field: "sheets_api_base",
        })?;
        Ok(Self { client, base_url })
    }

    /// `{base}/v4/spreadsheets/{sheet_id}/values/{range}?key={access_key}`
    pub fn values_url(&self, config: &SheetConfig) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", config.sheet_id.trim(), "values", config.range.trim()]);
        }
        url.query_pairs_mut().append_pair("key", config.access_key.trim());
        url
    }
}

#[async_trait]
impl SheetsClient for SheetsHttpClient {
    async fn fetch_values(&self, config: &SheetConfig) -> Result<SheetRows, PriceError> {
        let url = self.values_url(config);
        debug!(sheet_id = %config.sheet_id, range = %config.range, "fetching sheet values");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Http { status: status.as_u16() });
        }

        let body_text = response.text().await?;
        let parsed: dto::ValueRangeResponse = serde_json::from_str(&body_text)?;

        parsed.into_text_rows().ok_or(PriceError::NoData)
    }
}
