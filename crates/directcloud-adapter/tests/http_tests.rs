/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for v1/v2 dispatch across operations
[POS]:    Integration tests - HTTP endpoints
[UPDATE]: When HTTP endpoints or envelope rules change
*/

mod common;

use std::future::Future;
use std::pin::Pin;

use common::{mock_client, mock_token, setup_mock_server};
use directcloud_adapter::http::endpoints::FOLDER_LIST;
use directcloud_adapter::{
    DirectCloudClient, DirectCloudError, LinkOptions, RequestParams, Result, UploadSource,
    V2Payload,
};
use rstest::rstest;
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

type Operation = for<'a> fn(&'a DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + 'a>>;

fn create_folder(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.create_folder("node1", "New").await.map(drop) })
}

fn rename_folder(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.rename_folder("node1", "New").await.map(drop) })
}

fn delete_folder(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.delete_folder("node1").await.map(drop) })
}

fn rename_file(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.rename_file("node1", 5, "b.txt").await.map(drop) })
}

fn delete_file(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.delete_file("node1", 5).await.map(drop) })
}

fn folder_info(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.folder_info("node1", 3).await.map(drop) })
}

fn file_info(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.file_info("node1", 5).await.map(drop) })
}

fn create_file_link(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move {
        client
            .create_file_link("node1", 5, &LinkOptions::default())
            .await
            .map(drop)
    })
}

fn list(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.list("node1").await.map(drop) })
}

fn move_folder(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.move_folder("dst", "src", "node1").await.map(drop) })
}

fn copy_file(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.copy_file("dst", "src", 5).await.map(drop) })
}

fn move_file(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.move_file("dst", "src", 5).await.map(drop) })
}

fn download(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move { client.download(5).await.map(drop) })
}

fn upload(client: &DirectCloudClient) -> Pin<Box<dyn Future<Output = Result<()>> + '_>> {
    Box::pin(async move {
        client
            .upload("node1", UploadSource::new("data", "a.txt"), None)
            .await
            .map(drop)
    })
}

#[rstest]
#[case::create_folder("POST", "/openapp/v1/folders/create/node1", create_folder as Operation)]
#[case::rename_folder("POST", "/openapp/v1/folders/rename/node1", rename_folder as Operation)]
#[case::delete_folder("POST", "/openapp/v1/folders/delete/node1", delete_folder as Operation)]
#[case::rename_file("POST", "/openapp/v1/files/rename/node1", rename_file as Operation)]
#[case::delete_file("POST", "/openapp/v1/files/delete/node1", delete_file as Operation)]
#[case::folder_info("GET", "/openapp/v1/folders/index/node1/3", folder_info as Operation)]
#[case::file_info("GET", "/openapp/v1/files/index/node1/5", file_info as Operation)]
#[case::create_link("POST", "/openapp/v1/links/create", create_file_link as Operation)]
#[tokio::test]
async fn test_v1_success_false_is_bad_request_with_message(
    #[case] verb: &str,
    #[case] route: &str,
    #[case] operation: Operation,
) {
    let server = setup_mock_server().await;
    Mock::given(method(verb))
        .and(path(route))
        .and(query_param("lang", "eng"))
        .and(header("access_token", mock_token().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "X",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = operation(&client).await.unwrap_err();

    assert!(err.is_bad_request());
    assert_eq!(err.message(), Some("X"));
}

#[rstest]
#[case::create_folder("POST", "/openapp/v1/folders/create/node1", create_folder as Operation)]
#[case::delete_file("POST", "/openapp/v1/files/delete/node1", delete_file as Operation)]
#[case::file_info("GET", "/openapp/v1/files/index/node1/5", file_info as Operation)]
#[tokio::test]
async fn test_v1_not_found_is_bad_request_regardless_of_body(
    #[case] verb: &str,
    #[case] route: &str,
    #[case] operation: Operation,
) {
    let server = setup_mock_server().await;
    Mock::given(method(verb))
        .and(path(route))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": true,
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = operation(&client).await.unwrap_err();

    assert!(err.is_bad_request());
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[rstest]
#[case::list("GET", "/openapi/v2/folders/lists", list as Operation)]
#[case::move_folder("PUT", "/openapi/v2/folders/move", move_folder as Operation)]
#[case::copy_file("PUT", "/openapi/v2/files/copy", copy_file as Operation)]
#[case::move_file("PUT", "/openapi/v2/files/move", move_file as Operation)]
#[case::download("POST", "/openapi/v2/files/download", download as Operation)]
#[case::upload("POST", "/openapi/v2/files/upload/sync", upload as Operation)]
#[tokio::test]
async fn test_v2_result_error_is_bad_request(
    #[case] verb: &str,
    #[case] route: &str,
    #[case] operation: Operation,
) {
    let server = setup_mock_server().await;
    Mock::given(method(verb))
        .and(path(route))
        .and(header("Access-Token", mock_token().as_str()))
        .and(header("Lang", "en"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "result": "error",
            "message": "rejected",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = operation(&client).await.unwrap_err();

    assert!(err.is_bad_request());
    assert_eq!(err.message(), Some("rejected"));
}

#[tokio::test]
async fn test_v2_unmapped_status_propagates() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/openapi/v2/files/copy"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = mock_client(&server)
        .copy_file("dst", "src", 5)
        .await
        .unwrap_err();

    match err {
        DirectCloudError::UnexpectedStatus { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_v2_request_merges_extra_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/openapi/v2/folders/lists"))
        .and(header("Access-Token", mock_token().as_str()))
        .and(header("X-Trace", "trace-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain body"))
        .expect(1)
        .mount(&server)
        .await;

    let payload = assert_ok!(
        mock_client(&server)
            .v2_request(
                &FOLDER_LIST,
                &[],
                RequestParams::None,
                &[("X-Trace", "trace-1")],
            )
            .await
    );

    assert_eq!(payload, V2Payload::Raw(bytes::Bytes::from_static(b"plain body")));
}

#[tokio::test]
async fn test_download_is_byte_for_byte() {
    let server = setup_mock_server().await;
    let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    Mock::given(method("POST"))
        .and(path("/openapi/v2/files/download"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(content.clone(), "application/octet-stream"),
        )
        .mount(&server)
        .await;

    let bytes = assert_ok!(mock_client(&server).download(5).await);
    assert_eq!(bytes.as_ref(), content.as_slice());
}
