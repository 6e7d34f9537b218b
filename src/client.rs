//! Spreadsheet API collaborator.
//!
//! The compiler only needs two calls: read sheet metadata and submit one
//! `batchUpdate`. Both sit behind [`SheetsApi`] so commands can be driven by
//! the HTTP client in production and an in-memory double in tests.

use crate::config::{ClientConfig, ConfigError};
use crate::errors::SheetsError;
use crate::model::{BatchUpdateRequest, BatchUpdateResponse, Request, SpreadsheetMetadata};
use anyhow::{Context, Result};
use async_trait::async_trait;

pub const METADATA_FIELDS: &str = "spreadsheetId,properties.title,sheets.properties";

const FETCH_METADATA: &str = "fetch spreadsheet metadata";
const APPLY_BATCH_UPDATE: &str = "apply batch update";

#[async_trait]
pub trait SheetsApi: Send + Sync {
    async fn get_spreadsheet_metadata(
        &self,
        spreadsheet_id: &str,
    ) -> Result<SpreadsheetMetadata, SheetsError>;

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[Request],
    ) -> Result<BatchUpdateResponse, SheetsError>;
}

/// Sheets v4 REST client authenticated with a pre-minted bearer token.
#[derive(Clone)]
pub struct HttpSheetsClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl HttpSheetsClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let token = config
            .access_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                ConfigError::new("missing access token: set --access-token or GSHEET_OPS_ACCESS_TOKEN")
            })?;

        let mut builder = reqwest::Client::builder()
            .user_agent(format!("gsheet-ops/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("failed to build HTTP client")?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn spreadsheet_url(&self, spreadsheet_id: &str) -> String {
        format!("{}/spreadsheets/{}", self.api_base, spreadsheet_id)
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<T, SheetsError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SheetsError::transport(
            operation,
            format!("HTTP {}: {}", status.as_u16(), body.trim()),
        ));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| SheetsError::transport(operation, format!("invalid response: {err}")))
}

#[async_trait]
impl SheetsApi for HttpSheetsClient {
    async fn get_spreadsheet_metadata(
        &self,
        spreadsheet_id: &str,
    ) -> Result<SpreadsheetMetadata, SheetsError> {
        tracing::debug!(spreadsheet_id, "fetching spreadsheet metadata");
        let response = self
            .http
            .get(self.spreadsheet_url(spreadsheet_id))
            .bearer_auth(&self.token)
            .query(&[("fields", METADATA_FIELDS)])
            .send()
            .await
            .map_err(|err| SheetsError::transport(FETCH_METADATA, err.to_string()))?;
        read_json(FETCH_METADATA, response).await
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: &[Request],
    ) -> Result<BatchUpdateResponse, SheetsError> {
        tracing::debug!(spreadsheet_id, requests = requests.len(), "sending batch update");
        let url = format!("{}:batchUpdate", self.spreadsheet_url(spreadsheet_id));
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(&BatchUpdateRequest { requests })
            .send()
            .await
            .map_err(|err| SheetsError::transport(APPLY_BATCH_UPDATE, err.to_string()))?;
        read_json(APPLY_BATCH_UPDATE, response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_requires_token() {
        let config = ClientConfig {
            access_token: Some("  ".to_string()),
            ..ClientConfig::default()
        };
        let err = HttpSheetsClient::new(&config).err().expect("missing token");
        assert!(err.to_string().contains("missing access token"));
    }

    #[test]
    fn urls_trim_trailing_slash() {
        let config = ClientConfig {
            api_base: "https://example.test/v4/".to_string(),
            access_token: Some("tok".to_string()),
            ..ClientConfig::default()
        };
        let client = HttpSheetsClient::new(&config).unwrap();
        assert_eq!(
            client.spreadsheet_url("abc"),
            "https://example.test/v4/spreadsheets/abc"
        );
    }
}
