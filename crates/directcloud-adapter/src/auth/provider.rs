/*
[INPUT]:  Credentials or a pre-issued token
[OUTPUT]: Bearer token string for every dispatch
[POS]:    Auth layer - token provider abstraction
[UPDATE]: When adding new token sources
*/

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::http::Result;

/// Trait for token acquisition
///
/// Called once per API request. Network-backed providers fetch a fresh token
/// each time; nothing is cached.
#[async_trait]
pub trait TokenProvider: Send + Sync + fmt::Debug {
    /// Return a bearer token, or `DirectCloudError::Auth` when the backend refuses
    async fn get_token(&self) -> Result<String>;
}

#[async_trait]
impl<T: TokenProvider + ?Sized> TokenProvider for Arc<T> {
    async fn get_token(&self) -> Result<String> {
        (**self).get_token().await
    }
}

/// Provider around a token obtained elsewhere. Never touches the network.
#[derive(Clone)]
pub struct InMemoryTokenProvider {
    token: String,
}

impl InMemoryTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for InMemoryTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for InMemoryTokenProvider {
    async fn get_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
