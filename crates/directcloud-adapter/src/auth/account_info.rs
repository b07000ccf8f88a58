/*
[INPUT]:  Service credentials plus company code, user id and password
[OUTPUT]: Fresh access token per call
[POS]:    Auth layer - account-login token provider
[UPDATE]: When the account token flow changes
*/

use std::fmt;

use async_trait::async_trait;

use super::TokenProvider;
use super::jauth::{ACCOUNT_TOKEN_PATH, TokenEndpoint};
use crate::http::{ClientConfig, Result};

/// Account login used to obtain a token
#[derive(Clone)]
pub struct AccountInfo {
    pub code: String,
    pub id: String,
    pub password: String,
}

impl AccountInfo {
    pub fn new(
        code: impl Into<String>,
        id: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            id: id.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AccountInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountInfo")
            .field("code", &self.code)
            .field("id", &self.id)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Logs in with account credentials for every token
///
/// POST /openapi/jauth/token?lang=eng
#[derive(Clone)]
pub struct AccountInfoTokenProvider {
    endpoint: TokenEndpoint,
    service: String,
    service_key: String,
    account: AccountInfo,
}

impl AccountInfoTokenProvider {
    pub fn new(
        service: impl Into<String>,
        service_key: impl Into<String>,
        account: AccountInfo,
    ) -> Result<Self> {
        Self::with_config(service, service_key, account, &ClientConfig::default())
    }

    pub fn with_config(
        service: impl Into<String>,
        service_key: impl Into<String>,
        account: AccountInfo,
        config: &ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            endpoint: TokenEndpoint::new(config, &ACCOUNT_TOKEN_PATH)?,
            service: service.into(),
            service_key: service_key.into(),
            account,
        })
    }
}

impl fmt::Debug for AccountInfoTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountInfoTokenProvider")
            .field("endpoint", &self.endpoint)
            .field("service", &self.service)
            .field("service_key", &"<redacted>")
            .field("account", &self.account)
            .finish()
    }
}

#[async_trait]
impl TokenProvider for AccountInfoTokenProvider {
    async fn get_token(&self) -> Result<String> {
        self.endpoint
            .request_token(&[
                ("service", self.service.as_str()),
                ("service_key", self.service_key.as_str()),
                ("code", self.account.code.as_str()),
                ("id", self.account.id.as_str()),
                ("password", self.account.password.as_str()),
            ])
            .await
    }
}
