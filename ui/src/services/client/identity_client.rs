use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::errors::LoginError;
use crate::login::LoginMode;
use crate::services::config::{ClientConfig, ConfigError};

/// Source of identity records, keyed by login mode and identifier
#[async_trait(?Send)]
pub trait IdentityDirectory {
    /// Fetch the raw record for `identifier`. The identifier is used as-is;
    /// normalization happens before this call.
    async fn fetch_record(&self, mode: LoginMode, identifier: &str) -> Result<Value, LoginError>;
}

/// HTTP client for the customer-service backend
#[derive(Clone, Debug)]
pub struct IdentityClient {
    http_client: Client,
    base_url: Url,
}

impl IdentityClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let base_url = config.parsed_base_url()?;

        let http_client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::InvalidBaseUrl {
                value: config.base_url.clone(),
                reason: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/customer/{identifier}` or `{base}/user/{identifier}`, with the
    /// identifier percent-encoded as one path segment.
    pub fn record_url(&self, mode: LoginMode, identifier: &str) -> Result<Url, LoginError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LoginError::Misconfigured {
                message: format!("Base URL {} cannot take path segments", self.base_url),
            })?
            .pop_if_empty()
            .push(mode.endpoint_segment())
            .push(identifier);
        Ok(url)
    }

    #[instrument(skip(self), err)]
    pub async fn fetch_identity(
        &self,
        mode: LoginMode,
        identifier: &str,
    ) -> Result<Value, LoginError> {
        let url = self.record_url(mode, identifier)?;
        info!("Looking up {} identity at {}", mode.as_str(), url);

        let response = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Identity request for {} did not complete: {}", identifier, e);
                LoginError::from(e)
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            info!("No {} found for identifier {}", mode.as_str(), identifier);
            return Err(LoginError::NotFound);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(
                "Identity lookup for {} failed with status {}: {}",
                identifier, status, error_text
            );
            return Err(LoginError::RequestFailed {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LoginError::InvalidData {
                reason: format!("Response body is not JSON: {}", e),
            })
    }
}

#[async_trait(?Send)]
impl IdentityDirectory for IdentityClient {
    async fn fetch_record(&self, mode: LoginMode, identifier: &str) -> Result<Value, LoginError> {
        self.fetch_identity(mode, identifier).await
    }
}
