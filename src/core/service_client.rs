// src/core/service_client.rs
//! HTTP access to the positions listing of the backend

use anyhow::{Context, Result};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::settings::CheckSettings;

const POSITIONS_ENDPOINT: &str = "/api/positions";

/// Ways a single positions fetch can fail
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status}")]
    Status { status: StatusCode, body: String },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Network(#[source] reqwest::Error),

    #[error("{source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

pub struct ServiceClient {
    client: reqwest::Client,
    positions_url: Url,
    timeout: Duration,
}

impl ServiceClient {
    /// Create the client for the configured backend
    pub fn new(settings: &CheckSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let base = format!(
            "{}{}",
            settings.base_url.trim_end_matches('/'),
            POSITIONS_ENDPOINT
        );
        let positions_url =
            Url::parse_with_params(&base, &[("country", settings.country.as_str())])
                .with_context(|| format!("Invalid backend URL: {}", settings.base_url))?;

        Ok(Self {
            client,
            positions_url,
            timeout: settings.timeout,
        })
    }

    /// Full URL of the listing request, query string included
    pub fn positions_url(&self) -> &Url {
        &self.positions_url
    }

    /// GET the listing and decode it as a JSON array. A non-200 status is
    /// reported before any decoding is attempted.
    pub async fn fetch_positions(&self) -> Result<Vec<Value>, FetchError> {
        info!("Fetching positions: {}", self.positions_url);

        let response = self
            .client
            .get(self.positions_url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Backend returned {} ({} bytes)", status, body.len());
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        debug!("Received {} bytes", body.len());

        serde_json::from_str::<Vec<Value>>(&body)
            .map_err(|source| FetchError::Decode { source, body })
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            warn!("Request timed out after {:?}", self.timeout);
            FetchError::Timeout(self.timeout)
        } else {
            warn!("Request failed: {}", error);
            FetchError::Network(error)
        }
    }
}
