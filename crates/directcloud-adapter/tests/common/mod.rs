/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for directcloud-adapter tests

use directcloud_adapter::{ClientConfig, DirectCloudClient, InMemoryTokenProvider};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Config pointing at the mock server
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}

/// Client with a fixed token, pointing at the mock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> DirectCloudClient {
    DirectCloudClient::with_config(InMemoryTokenProvider::new(mock_token()), mock_config(server))
        .expect("client init")
}

/// Token returned by mocked token endpoints
pub fn mock_token() -> String {
    "dc-test-token-0001".to_string()
}
