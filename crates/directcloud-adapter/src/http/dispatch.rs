/*
[INPUT]:  Endpoint table rows, path arguments and parameter bags
[OUTPUT]: Interpreted v1/v2 envelopes or DirectCloudError
[POS]:    HTTP layer - token injection and response normalization for both API generations
[UPDATE]: When header conventions or envelope rules change
*/

use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;
use futures_util::stream::{self, BoxStream};
use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::endpoints::Endpoint;
use crate::http::params::RequestParams;
use crate::http::{DirectCloudClient, DirectCloudError, Result};
use crate::types::{ApiVersion, JsonObject, V2Payload};

const V1_TOKEN_HEADER: &str = "access_token";
const V1_LANG: &str = "eng";
const V2_TOKEN_HEADER: &str = "Access-Token";
const V2_LANG_HEADER: &str = "Lang";
const V2_LANG: &str = "en";

/// v2 error statuses surfaced as `BadRequest`
const V2_BAD_REQUEST_STATUSES: [StatusCode; 5] = [
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
    StatusCode::INTERNAL_SERVER_ERROR,
];

/// Response body handed out chunk by chunk
pub type ByteStream = BoxStream<'static, Result<Bytes>>;

impl DirectCloudClient {
    /// Send a request to a `/openapp/v1` endpoint
    ///
    /// Adds the `access_token` header and `lang=eng`. Any 4xx/5xx status or a
    /// body with `"success": false` is a `BadRequest`.
    pub async fn v1_request(
        &self,
        endpoint: &Endpoint,
        path_args: &[(&str, &str)],
        params: RequestParams,
    ) -> Result<JsonObject> {
        let (status, body) = self.execute(endpoint, path_args, params, &[]).await?;
        interpret_v1(status, &body).inspect_err(|err| log_rejection(endpoint, err))
    }

    /// Send a request to a `/openapi/v2` endpoint
    ///
    /// Adds `Access-Token` and `Lang: en` plus any `extra_headers`. A body
    /// without `result` comes back as `V2Payload::Raw`.
    pub async fn v2_request(
        &self,
        endpoint: &Endpoint,
        path_args: &[(&str, &str)],
        params: RequestParams,
        extra_headers: &[(&str, &str)],
    ) -> Result<V2Payload> {
        let (status, body) = self
            .execute(endpoint, path_args, params, extra_headers)
            .await?;
        interpret_v2(status, body).inspect_err(|err| log_rejection(endpoint, err))
    }

    /// Like `v2_request`, but a success body that is not an envelope is streamed
    ///
    /// Bodies labelled JSON, or whose first chunk opens with `{`, are buffered
    /// and checked against the v2 rules whatever their content type.
    pub(crate) async fn v2_stream(
        &self,
        endpoint: &Endpoint,
        path_args: &[(&str, &str)],
        params: RequestParams,
    ) -> Result<ByteStream> {
        let response = self.send(endpoint, path_args, params, &[]).await?;
        let status = response.status();

        let body = if status.is_success() && !is_json(&response) {
            let mut chunks = response
                .bytes_stream()
                .map(|chunk| chunk.map_err(DirectCloudError::from))
                .boxed();
            let first = match chunks.next().await {
                Some(chunk) => chunk?,
                None => return Ok(stream::empty().boxed()),
            };
            if !opens_object(&first) {
                return Ok(stream::once(async move { Ok(first) }).chain(chunks).boxed());
            }

            let mut buffered = BytesMut::from(first.as_ref());
            while let Some(chunk) = chunks.next().await {
                buffered.extend_from_slice(&chunk?);
            }
            buffered.freeze()
        } else {
            response.bytes().await?
        };

        match interpret_v2(status, body).inspect_err(|err| log_rejection(endpoint, err))? {
            V2Payload::Raw(bytes) => Ok(stream::once(async move { Ok(bytes) }).boxed()),
            V2Payload::Json(_) => Err(DirectCloudError::InvalidResponse(
                "expected file content, got a JSON envelope".to_string(),
            )),
        }
    }

    async fn execute(
        &self,
        endpoint: &Endpoint,
        path_args: &[(&str, &str)],
        params: RequestParams,
        extra_headers: &[(&str, &str)],
    ) -> Result<(StatusCode, Bytes)> {
        let response = self
            .send(endpoint, path_args, params, extra_headers)
            .await?;
        let status = response.status();
        let body = response.bytes().await?;
        Ok((status, body))
    }

    async fn send(
        &self,
        endpoint: &Endpoint,
        path_args: &[(&str, &str)],
        params: RequestParams,
        extra_headers: &[(&str, &str)],
    ) -> Result<Response> {
        debug!(
            method = %endpoint.method,
            path = endpoint.path,
            version = endpoint.version.as_str(),
            params = params.kind(),
            "dispatching request"
        );

        let builder = self
            .prepare(endpoint, path_args, params, extra_headers)
            .await?;
        let response = builder.send().await?;

        debug!(path = endpoint.path, status = %response.status(), "response received");
        Ok(response)
    }

    async fn prepare(
        &self,
        endpoint: &Endpoint,
        path_args: &[(&str, &str)],
        params: RequestParams,
        extra_headers: &[(&str, &str)],
    ) -> Result<RequestBuilder> {
        let url = self.endpoint_url(&endpoint.segments(path_args)?)?;
        let token = self.token_provider.get_token().await?;

        let builder = self.http_client.request(endpoint.method.clone(), url);
        let builder = match endpoint.version {
            ApiVersion::V1 => builder
                .header(V1_TOKEN_HEADER, token)
                .query(&[("lang", V1_LANG)]),
            ApiVersion::V2 => builder
                .header(V2_TOKEN_HEADER, token)
                .header(V2_LANG_HEADER, V2_LANG),
        };
        let builder = extra_headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(*name, *value));

        Ok(params.apply(builder))
    }
}

/// v1 envelope rules. A 2xx body that is not a JSON object reads as `{}`.
pub(crate) fn interpret_v1(status: StatusCode, body: &[u8]) -> Result<JsonObject> {
    if status.is_client_error() || status.is_server_error() {
        return Err(DirectCloudError::bad_request(status, body));
    }

    let json = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(json)) => json,
        _ => JsonObject::new(),
    };

    if json.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(DirectCloudError::bad_request(status, body));
    }

    Ok(json)
}

/// v2 envelope rules
pub(crate) fn interpret_v2(status: StatusCode, body: Bytes) -> Result<V2Payload> {
    if status.is_client_error() || status.is_server_error() {
        if V2_BAD_REQUEST_STATUSES.contains(&status) {
            return Err(DirectCloudError::bad_request(status, &body));
        }
        return Err(DirectCloudError::UnexpectedStatus {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    let json = match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(json)) => json,
        _ => return Ok(V2Payload::Raw(body)),
    };

    match json.get("result") {
        None | Some(Value::Null) => Ok(V2Payload::Raw(body)),
        Some(Value::String(result)) if result == "success" => Ok(V2Payload::Json(json)),
        Some(_) => Err(DirectCloudError::bad_request(status, &body)),
    }
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"))
}

fn opens_object(chunk: &[u8]) -> bool {
    chunk.trim_ascii_start().starts_with(b"{")
}

fn log_rejection(endpoint: &Endpoint, err: &DirectCloudError) {
    warn!(
        path = endpoint.path,
        status = ?err.status(),
        message = err.message().unwrap_or_default(),
        "request rejected"
    );
}
