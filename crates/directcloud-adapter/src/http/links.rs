/*
[INPUT]:  File or folder target plus optional link settings
[OUTPUT]: Created share link
[POS]:    HTTP layer - share link endpoint (v1)
[UPDATE]: When link options or the link endpoint change
*/

use crate::http::endpoints::LINK_CREATE;
use crate::http::{DirectCloudClient, RequestParams, Result};
use crate::types::{CreateLinkRequest, CreatedLink, LinkOptions};

impl DirectCloudClient {
    /// Create a share link for a file
    ///
    /// POST /openapp/v1/links/create (target_type=file)
    pub async fn create_file_link(
        &self,
        node: &str,
        file_seq: u64,
        options: &LinkOptions,
    ) -> Result<CreatedLink> {
        self.create_link(CreateLinkRequest::file(node, file_seq, options))
            .await
    }

    /// Create a share link for a folder
    ///
    /// POST /openapp/v1/links/create (target_type=folder)
    pub async fn create_folder_link(&self, node: &str, options: &LinkOptions) -> Result<CreatedLink> {
        self.create_link(CreateLinkRequest::folder(node, options))
            .await
    }

    async fn create_link(&self, request: CreateLinkRequest) -> Result<CreatedLink> {
        let params = RequestParams::form(&request)?;
        let body = self.v1_request(&LINK_CREATE, &[], params).await?;
        Ok(serde_json::from_value(serde_json::Value::Object(body))?)
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::InMemoryTokenProvider;
    use crate::http::{ClientConfig, DirectCloudClient};
    use crate::types::LinkOptions;
    use chrono::NaiveDate;
    use wiremock::matchers::{body_string_contains, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> DirectCloudClient {
        DirectCloudClient::with_config(
            InMemoryTokenProvider::new("test-token"),
            ClientConfig::default().with_base_url(server.uri()),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_create_file_link() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openapp/v1/links/create"))
            .and(query_param("lang", "eng"))
            .and(header("access_token", "test-token"))
            .and(body_string_contains("target_type=file"))
            .and(body_string_contains("file_seq=31"))
            .and(body_string_contains("expiration_date=2026-11-30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "url": "https://c.directcloud.jp/s/abc"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = LinkOptions {
            expiration_date: NaiveDate::from_ymd_opt(2026, 11, 30),
            ..LinkOptions::default()
        };
        let link = client_for(&server)
            .create_file_link("node1", 31, &options)
            .await
            .expect("create_file_link");
        assert_eq!(link.url.as_deref(), Some("https://c.directcloud.jp/s/abc"));
    }

    #[tokio::test]
    async fn test_create_folder_link_targets_folder() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openapp/v1/links/create"))
            .and(body_string_contains("target_type=folder"))
            .and(body_string_contains("password=s3cret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "url": "https://c.directcloud.jp/s/def"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let options = LinkOptions {
            password: Some("s3cret".to_string()),
            ..LinkOptions::default()
        };
        let link = client_for(&server)
            .create_folder_link("node1", &options)
            .await
            .expect("create_folder_link");
        assert_eq!(link.url.as_deref(), Some("https://c.directcloud.jp/s/def"));
    }

    #[tokio::test]
    async fn test_create_link_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/openapp/v1/links/create"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "message": "link sharing disabled"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_folder_link("node1", &LinkOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_bad_request());
        assert_eq!(err.message(), Some("link sharing disabled"));
    }
}
