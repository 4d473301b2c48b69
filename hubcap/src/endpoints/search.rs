//! # GitHub Search Endpoints
//!
//! Repository, issue, user and code search. All four share one query builder
//! and differ only in the `search/{kind}` path and the result shape.

use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{instrument, trace};

use crate::client::{GitHubClient, Response};
use crate::consts::MIME_PREVIEW;
use crate::error::Result;
use crate::models::{CodeSearchResult, IssuesSearchResult, RepositoriesSearchResult, SearchOptions, UsersSearchResult};

impl GitHubClient {
  /// Search repositories.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_repositories(
    &self,
    query: &str,
    opt: Option<&SearchOptions>,
  ) -> Result<Response<RepositoriesSearchResult>> {
    self.search("repositories", query, opt).await
  }

  /// Search issues and pull requests.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, query: &str, opt: Option<&SearchOptions>) -> Result<Response<IssuesSearchResult>> {
    self.search("issues", query, opt).await
  }

  /// Search users.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_users(&self, query: &str, opt: Option<&SearchOptions>) -> Result<Response<UsersSearchResult>> {
    self.search("users", query, opt).await
  }

  /// Search code.
  #[instrument(skip(self), level = "debug")]
  pub async fn search_code(&self, query: &str, opt: Option<&SearchOptions>) -> Result<Response<CodeSearchResult>> {
    self.search("code", query, opt).await
  }

  async fn search<T>(&self, kind: &str, query: &str, opt: Option<&SearchOptions>) -> Result<Response<T>>
  where
    T: DeserializeOwned,
  {
    let mut request = self.new_request(Method::GET, &format!("search/{kind}"))?;

    {
      let mut params = request.url_mut().query_pairs_mut();
      params.append_pair("q", query);
      if let Some(opt) = opt {
        params
          .append_pair("sort", &opt.sort)
          .append_pair("order", &opt.order)
          .append_pair("page", &opt.page.to_string())
          .append_pair("per_page", &opt.per_page.to_string());
      }
    }
    trace!("GitHub search URL: {}", request.url());

    request
      .headers_mut()
      .insert(ACCEPT, HeaderValue::from_static(MIME_PREVIEW));

    self.execute(request).await
  }
}
