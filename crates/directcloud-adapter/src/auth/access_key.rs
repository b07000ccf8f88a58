/*
[INPUT]:  Service name, service key and access key
[OUTPUT]: Fresh access token per call
[POS]:    Auth layer - access-key token provider
[UPDATE]: When the access-key token flow changes
*/

use std::fmt;

use async_trait::async_trait;

use super::TokenProvider;
use super::jauth::{ACCESS_KEY_TOKEN_PATH, TokenEndpoint};
use crate::http::{ClientConfig, Result};

/// Exchanges a service key and access key for a token
///
/// POST /openapi/jauth/access_token?lang=eng
#[derive(Clone)]
pub struct AccessKeyTokenProvider {
    endpoint: TokenEndpoint,
    service: String,
    service_key: String,
    access_key: String,
}

impl AccessKeyTokenProvider {
    /// Create a provider against the default host
    pub fn new(
        service: impl Into<String>,
        service_key: impl Into<String>,
        access_key: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(service, service_key, access_key, &ClientConfig::default())
    }

    /// Create a provider with custom host and timeouts
    pub fn with_config(
        service: impl Into<String>,
        service_key: impl Into<String>,
        access_key: impl Into<String>,
        config: &ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            endpoint: TokenEndpoint::new(config, &ACCESS_KEY_TOKEN_PATH)?,
            service: service.into(),
            service_key: service_key.into(),
            access_key: access_key.into(),
        })
    }
}

impl fmt::Debug for AccessKeyTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessKeyTokenProvider")
            .field("endpoint", &self.endpoint)
            .field("service", &self.service)
            .field("service_key", &"<redacted>")
            .field("access_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for AccessKeyTokenProvider {
    async fn get_token(&self) -> Result<String> {
        self.endpoint
            .request_token(&[
                ("service", self.service.as_str()),
                ("service_key", self.service_key.as_str()),
                ("access_key", self.access_key.as_str()),
            ])
            .await
    }
}
