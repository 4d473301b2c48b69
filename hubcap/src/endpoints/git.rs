//! # GitHub Git Data Endpoints
//!
//! Reading and creating git tree objects.

use reqwest::Method;
use serde::Serialize;
use tracing::{info, instrument};

use crate::client::{GitHubClient, Response, path_segment};
use crate::error::Result;
use crate::models::{Tree, TreeEntry};

/// Request body for creating a tree
#[derive(Debug, Serialize)]
struct CreateTree<'a> {
  #[serde(skip_serializing_if = "str::is_empty")]
  base_tree: &'a str,
  tree: &'a [TreeEntry],
}

/// `repos/{owner}/{repo}/git`
fn git_path(owner: &str, repo: &str) -> Result<String> {
  Ok(format!(
    "repos/{}/{}/git",
    path_segment("owner", owner)?,
    path_segment("repo", repo)?
  ))
}

impl GitHubClient {
  /// Fetch the tree `sha` of `owner/repo`. With `recursive`, GitHub flattens
  /// every subtree into the returned entry list.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_tree(&self, owner: &str, repo: &str, sha: &str, recursive: bool) -> Result<Response<Tree>> {
    let sha = path_segment("sha", sha)?;
    let mut request = self.new_request(Method::GET, &format!("{}/trees/{sha}", git_path(owner, repo)?))?;
    if recursive {
      request.url_mut().query_pairs_mut().append_pair("recursive", "1");
    }
    self.execute(request).await
  }

  /// Create a tree in `owner/repo` from `entries` on top of `base_tree`.
  ///
  /// An empty `base_tree` creates a tree holding only `entries`.
  #[instrument(skip(self, entries), level = "debug")]
  pub async fn create_tree(
    &self,
    owner: &str,
    repo: &str,
    base_tree: &str,
    entries: &[TreeEntry],
  ) -> Result<Response<Tree>> {
    info!("Creating tree with {} entries in {}/{}", entries.len(), owner, repo);

    let body = CreateTree {
      base_tree,
      tree: entries,
    };
    let request = self.new_json_request(Method::POST, &format!("{}/trees", git_path(owner, repo)?), &body)?;
    self.execute(request).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{any, body_json, method, path, query_param};
  use wiremock::{Mock, ResponseTemplate};

  use super::*;
  use crate::test_support::setup;

  fn blob_entry() -> TreeEntry {
    TreeEntry {
      path: Some("file.rb".to_string()),
      mode: Some("100644".to_string()),
      kind: Some("blob".to_string()),
      sha: Some("7c258a9869f33c1e1e1f74fbb32f07c86cb5a75b".to_string()),
      ..Default::default()
    }
  }

  #[tokio::test]
  async fn test_get_tree_recursive() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/git/trees/s"))
      .and(query_param("recursive", "1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "sha": "s",
          "tree": [{"type": "blob"}]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let tree = client.get_tree("o", "r", "s", true).await?.into_body();

    assert_eq!(
      tree,
      Tree {
        sha: Some("s".to_string()),
        entries: vec![TreeEntry {
          kind: Some("blob".to_string()),
          ..Default::default()
        }],
      }
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_get_tree_not_recursive() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
      .and(path("/repos/o/r/git/trees/s"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "sha": "s",
          "tree": [
              {"path": "src", "type": "tree", "mode": "040000", "sha": "t1"},
              {"path": "README.md", "type": "blob", "mode": "100644", "sha": "b1", "size": 30}
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let tree = client.get_tree("o", "r", "s", false).await?.into_body();
    let paths: Vec<_> = tree.entries.iter().filter_map(|e| e.path.as_deref()).collect();
    assert_eq!(paths, vec!["src", "README.md"]);
    assert_eq!(tree.entries[1].size, Some(30));

    let requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(requests[0].url.query(), None);

    Ok(())
  }

  #[tokio::test]
  async fn test_create_tree() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    let input = vec![blob_entry()];

    Mock::given(method("POST"))
      .and(path("/repos/o/r/git/trees"))
      .and(body_json(json!({
          "base_tree": "b",
          "tree": [{
              "path": "file.rb",
              "mode": "100644",
              "type": "blob",
              "sha": "7c258a9869f33c1e1e1f74fbb32f07c86cb5a75b"
          }]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({
          "sha": "cd8274d15fa3ae2ab983129fb037999f264ba9a7",
          "tree": [{
              "path": "file.rb",
              "mode": "100644",
              "type": "blob",
              "size": 132,
              "sha": "7c258a9869f33c1e1e1f74fbb32f07c86cb5a75b"
          }]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let tree = client.create_tree("o", "r", "b", &input).await?.into_body();

    assert_eq!(
      tree,
      Tree {
        sha: Some("cd8274d15fa3ae2ab983129fb037999f264ba9a7".to_string()),
        entries: vec![TreeEntry {
          size: Some(132),
          ..blob_entry()
        }],
      }
    );

    Ok(())
  }

  #[tokio::test]
  async fn test_create_tree_without_base() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;
    let input = vec![TreeEntry {
      content: Some("puts 'hi'\n".to_string()),
      sha: None,
      ..blob_entry()
    }];

    Mock::given(method("POST"))
      .and(path("/repos/o/r/git/trees"))
      .and(body_json(json!({
          "tree": [{
              "path": "file.rb",
              "mode": "100644",
              "type": "blob",
              "content": "puts 'hi'\n"
          }]
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sha": "new"})))
      .expect(1)
      .mount(&mock_server)
      .await;

    let tree = client.create_tree("o", "r", "", &input).await?.into_body();
    assert_eq!(tree.sha.as_deref(), Some("new"));
    assert!(tree.entries.is_empty());

    Ok(())
  }

  #[tokio::test]
  async fn test_create_tree_validation_error() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
      .and(path("/repos/o/r/git/trees"))
      .respond_with(ResponseTemplate::new(422).set_body_json(json!({
          "message": "Validation Failed",
          "errors": [{"resource": "Tree", "field": "tree", "code": "invalid"}]
      })))
      .mount(&mock_server)
      .await;

    let err = client.create_tree("o", "r", "b", &[]).await.unwrap_err();

    match err {
      crate::Error::Api { status, response, .. } => {
        assert_eq!(status.as_u16(), 422);
        let response = response.unwrap_or_default();
        assert_eq!(response.message, "Validation Failed");
        assert_eq!(response.errors[0].field, "tree");
      }
      other => panic!("expected an API error, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_tree_identifiers_with_path_syntax_send_nothing() -> anyhow::Result<()> {
    let (mock_server, client) = setup().await;

    Mock::given(any())
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"sha": "wrong"})))
      .expect(0)
      .mount(&mock_server)
      .await;

    for (owner, repo, sha) in [("..", "r", "s"), ("o", "r/../x", "s"), ("o", "r", "s?recursive=1"), ("o", "r", "#s")] {
      let err = client.get_tree(owner, repo, sha, false).await.unwrap_err();
      assert!(err.is_url_parse(), "get_tree({owner:?}, {repo:?}, {sha:?})");
    }

    for (owner, repo) in [("o/x", "r"), ("o", ".."), ("", "r"), ("o", "r?x")] {
      let err = client.create_tree(owner, repo, "b", &[blob_entry()]).await.unwrap_err();
      assert!(err.is_url_parse(), "create_tree({owner:?}, {repo:?})");
    }

    Ok(())
  }
}
