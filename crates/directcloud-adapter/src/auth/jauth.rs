/*
[INPUT]:  Token endpoint path and form credentials
[OUTPUT]: `access_token` value or an Auth error
[POS]:    Auth layer - shared request flow for the jauth token endpoints
[UPDATE]: When token endpoints or their envelope change
*/

use reqwest::{Client, StatusCode, Url};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::client::join_segments;
use crate::http::{ClientConfig, DirectCloudError, Result};

pub(crate) const ACCESS_KEY_TOKEN_PATH: [&str; 3] = ["openapi", "jauth", "access_token"];
pub(crate) const ACCOUNT_TOKEN_PATH: [&str; 3] = ["openapi", "jauth", "token"];

/// HTTP client bound to one token endpoint
#[derive(Debug, Clone)]
pub(crate) struct TokenEndpoint {
    http_client: Client,
    url: Url,
}

impl TokenEndpoint {
    pub(crate) fn new(config: &ClientConfig, path: &[&str]) -> Result<Self> {
        let base_url = config.validate()?;
        Ok(Self {
            http_client: config.build_http_client()?,
            url: join_segments(&base_url, path)?,
        })
    }

    /// POST the credentials and pull `access_token` out of the body
    pub(crate) async fn request_token(&self, form: &[(&str, &str)]) -> Result<String> {
        debug!(endpoint = self.url.path(), "requesting access token");

        let response = self
            .http_client
            .post(self.url.clone())
            .query(&[("lang", "eng")])
            .form(form)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        let result = parse_token_body(status, &body);
        if let Err(err) = &result {
            warn!(endpoint = self.url.path(), %status, error = %err, "token request rejected");
        }
        result
    }
}

pub(crate) fn parse_token_body(status: StatusCode, body: &[u8]) -> Result<String> {
    if status != StatusCode::OK {
        return Err(DirectCloudError::auth(status, body));
    }

    let Ok(Value::Object(json)) = serde_json::from_slice::<Value>(body) else {
        return Err(DirectCloudError::auth(status, body));
    };

    if json.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(DirectCloudError::auth(status, body));
    }

    json.get("access_token")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| DirectCloudError::Auth {
            status,
            message: Some("missing access_token".to_string()),
        })
}
