//! Shared fixtures for the wiremock-backed endpoint tests.

use wiremock::MockServer;

use crate::client::GitHubClient;
use crate::config::ClientConfig;
use crate::models::GitHubAuth;

/// Start a mock server and a client authenticated as `test_user:test_token`
/// that sends every request to it.
pub(crate) async fn setup() -> (MockServer, GitHubClient) {
  let mock_server = MockServer::start().await;
  let auth = GitHubAuth::Basic {
    username: "test_user".to_string(),
    token: "test_token".to_string(),
  };
  let config = ClientConfig::with_base_url(mock_server.uri());
  let client = GitHubClient::with_config(Some(auth), &config).expect("mock client should build");

  (mock_server, client)
}
