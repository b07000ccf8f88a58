/*
[INPUT]:  HTTP configuration (base URL, timeouts, page size) and a token provider
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::auth::TokenProvider;
use crate::http::{DirectCloudError, Result};

/// Base URL for the DirectCloud API
pub const DEFAULT_BASE_URL: &str = "https://api.directcloud.jp";

/// Fixed page size sent with folder listings
pub const DEFAULT_LIST_LIMIT: u32 = 1000;

/// Node of the top-level folder
pub const ROOT_NODE: &str = "1{2";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub list_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }
}

impl ClientConfig {
    /// Point the client at a different host (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check the configuration and return the parsed base URL
    pub fn validate(&self) -> Result<Url> {
        if self.list_limit == 0 {
            return Err(DirectCloudError::Config(
                "list_limit must be greater than zero".to_string(),
            ));
        }

        let url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(DirectCloudError::Config(format!(
                "base URL cannot carry a path: {}",
                self.base_url
            )));
        }
        Ok(url)
    }

    pub(crate) fn build_http_client(&self) -> Result<Client> {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()?;
        Ok(http_client)
    }
}

/// Append path segments to a base URL, percent-encoding each one
pub(crate) fn join_segments<S: AsRef<str>>(base: &Url, segments: &[S]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|()| {
            DirectCloudError::Config(format!("base URL cannot carry a path: {base}"))
        })?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment.as_ref());
        }
    }
    Ok(url)
}

/// Main HTTP client for the DirectCloud API
#[derive(Debug, Clone)]
pub struct DirectCloudClient {
    pub(crate) http_client: Client,
    base_url: Url,
    pub(crate) list_limit: u32,
    pub(crate) token_provider: Arc<dyn TokenProvider>,
}

impl DirectCloudClient {
    /// Create a new client with default configuration
    pub fn new(token_provider: impl TokenProvider + 'static) -> Result<Self> {
        Self::with_config(token_provider, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        token_provider: impl TokenProvider + 'static,
        config: ClientConfig,
    ) -> Result<Self> {
        Self::with_shared_provider(Arc::new(token_provider), config)
    }

    /// Create a client around a provider that is shared with other clients
    pub fn with_shared_provider(
        token_provider: Arc<dyn TokenProvider>,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = config.validate()?;
        let http_client = config.build_http_client()?;

        Ok(Self {
            http_client,
            base_url,
            list_limit: config.list_limit,
            token_provider,
        })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint from its path segments
    pub(crate) fn endpoint_url(&self, segments: &[String]) -> Result<Url> {
        join_segments(&self.base_url, segments)
    }
}
