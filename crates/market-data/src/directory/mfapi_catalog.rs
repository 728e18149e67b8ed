//! HTTP scheme catalog backed by the mfapi.in listing endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::QuoteError;
use crate::models::SchemeRecord;

use super::SchemeCatalog;

const BASE_URL: &str = "https://api.mfapi.in/mf";
const SOURCE_ID: &str = "MFAPI";

/// Catalog entry as the endpoint serves it. Scheme codes arrive as JSON
/// numbers; they are opaque strings everywhere downstream.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    scheme_code: serde_json::Value,
    scheme_name: String,
}

impl CatalogEntry {
    fn into_record(self) -> SchemeRecord {
        let code = match self.scheme_code {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        SchemeRecord::new(code, self.scheme_name)
    }
}

/// The full mutual-fund scheme listing from mfapi.in.
pub struct MfapiCatalog {
    client: Client,
}

impl MfapiCatalog {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

#[async_trait]
impl SchemeCatalog for MfapiCatalog {
    async fn fetch_all(&self) -> Result<Vec<SchemeRecord>, QuoteError> {
        debug!("fetching full scheme catalog from {}", BASE_URL);

        let response = self.client.get(BASE_URL).send().await.map_err(|e| {
            if e.is_timeout() {
                QuoteError::Timeout {
                    provider: SOURCE_ID.to_string(),
                }
            } else {
                QuoteError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::HttpStatus {
                provider: SOURCE_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let entries: Vec<CatalogEntry> =
            response
                .json()
                .await
                .map_err(|e| QuoteError::Malformed {
                    provider: SOURCE_ID.to_string(),
                    message: format!("catalog listing did not parse: {}", e),
                })?;

        Ok(entries.into_iter().map(CatalogEntry::into_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_with_numeric_code() {
        let json = r#"{"schemeCode": 118825, "schemeName": "SBI Small Cap Fund Regular Growth"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        let record = entry.into_record();
        assert_eq!(record.scheme_code, "118825");
        assert_eq!(record.scheme_name, "SBI Small Cap Fund Regular Growth");
    }

    #[test]
    fn test_catalog_entry_with_string_code() {
        let json = r#"{"schemeCode": "100033", "schemeName": "Aditya Birla Sun Life Equity Fund"}"#;
        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.into_record().scheme_code, "100033");
    }

    #[test]
    fn test_catalog_listing_preserves_source_order() {
        let json = r#"[
            {"schemeCode": 100027, "schemeName": "Grindlays Super Saver Income Fund"},
            {"schemeCode": 118825, "schemeName": "SBI Small Cap Fund Regular Growth"}
        ]"#;
        let entries: Vec<CatalogEntry> = serde_json::from_str(json).unwrap();
        let records: Vec<SchemeRecord> =
            entries.into_iter().map(CatalogEntry::into_record).collect();
        assert_eq!(records[0].scheme_code, "100027");
        assert_eq!(records[1].scheme_code, "118825");
    }
}
