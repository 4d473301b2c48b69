//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication, request building, and response parsing for GitHub REST API
//! operations.
//!
//! Endpoint modules build a request with [`GitHubClient::new_request`] (or
//! [`GitHubClient::new_json_request`] when there is a body), adjust it if
//! needed, and hand it to [`GitHubClient::execute`]. One call of an endpoint
//! method is one HTTP round-trip.

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::consts;
use crate::error::{Error, Result};
use crate::models::{ErrorResponse, GitHubAuth};

/// Represents a GitHub API client
///
/// The client is cheap to share: it owns a pooled `reqwest::Client` and
/// immutable settings, and keeps no state between calls.
#[derive(Debug, Clone)]
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: Url,
  pub(crate) auth: Option<GitHubAuth>,
}

/// A decoded response body together with the HTTP status and headers it
/// arrived with
#[derive(Debug, Clone)]
pub struct Response<T> {
  pub status: StatusCode,
  pub headers: HeaderMap,
  pub body: T,
}

impl<T> Response<T> {
  /// Discard the response metadata and keep the body
  pub fn into_body(self) -> T {
    self.body
  }
}

impl GitHubClient {
  /// Create a new GitHub client against api.github.com
  pub fn new(auth: GitHubAuth) -> Result<Self> {
    Self::with_config(Some(auth), &ClientConfig::default())
  }

  /// Create a client with explicit transport settings. `auth` may be `None`
  /// for anonymous access to public endpoints.
  pub fn with_config(auth: Option<GitHubAuth>, config: &ClientConfig) -> Result<Self> {
    let base_url = config.parsed_base_url()?;

    let user_agent = HeaderValue::from_str(&config.user_agent)
      .map_err(|e| Error::Config(format!("invalid User-Agent {:?}: {e}", config.user_agent)))?;

    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static(consts::ACCEPT));

    let mut builder = Client::builder()
      .user_agent(user_agent)
      .default_headers(default_headers);
    if let Some(timeout) = config.timeout() {
      builder = builder.timeout(timeout);
    }

    Ok(Self {
      client: builder.build()?,
      base_url,
      auth,
    })
  }

  /// Base URL relative API paths are resolved against
  pub fn base_url(&self) -> &Url {
    &self.base_url
  }

  /// Credentials attached to every request, if any
  pub fn auth(&self) -> Option<&GitHubAuth> {
    self.auth.as_ref()
  }

  /// Test the GitHub connection by fetching the current user
  #[instrument(skip(self), level = "debug")]
  pub async fn test_connection(&self) -> Result<bool> {
    let request = self.new_request(Method::GET, "user")?;
    let response = self.client.execute(request).await?;
    debug!("GitHub API response status: {}", response.status());

    Ok(response.status().is_success())
  }

  /// Build a request for `path`, relative to the base URL, with credentials
  /// attached. Fails without touching the network if `path` is not a valid
  /// relative URL.
  pub(crate) fn new_request(&self, method: Method, path: &str) -> Result<Request> {
    let url = self.resolve(path)?;
    self.authorize(self.client.request(method, url)).build().map_err(Error::from)
  }

  /// Like [`new_request`](Self::new_request), with `body` serialized as the
  /// JSON request body.
  pub(crate) fn new_json_request<B>(&self, method: Method, path: &str, body: &B) -> Result<Request>
  where
    B: Serialize + ?Sized,
  {
    let url = self.resolve(path)?;
    let body = serde_json::to_vec(body).map_err(Error::Encode)?;

    self
      .authorize(self.client.request(method, url))
      .header(CONTENT_TYPE, "application/json")
      .body(body)
      .build()
      .map_err(Error::from)
  }

  /// Send `request` and decode a successful response body into `T`.
  pub(crate) async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<Response<T>> {
    let response = self.dispatch(request).await?;
    let status = response.status();
    let headers = response.headers().clone();

    let bytes = response.bytes().await?;
    let body = serde_json::from_slice::<T>(&bytes).map_err(Error::Decode)?;

    Ok(Response { status, headers, body })
  }

  /// Send `request`, check the status and ignore whatever body came back.
  pub(crate) async fn execute_empty(&self, request: Request) -> Result<Response<()>> {
    let response = self.dispatch(request).await?;

    Ok(Response {
      status: response.status(),
      headers: response.headers().clone(),
      body: (),
    })
  }

  async fn dispatch(&self, request: Request) -> Result<reqwest::Response> {
    let method = request.method().clone();
    let url = request.url().to_string();
    trace!("GitHub API request: {} {}", method, url);

    let response = self.client.execute(request).await?;
    debug!("GitHub API response status: {}", response.status());

    check_response(method, url, response).await
  }

  fn resolve(&self, path: &str) -> Result<Url> {
    validate_path(path)?;
    self.base_url.join(path).map_err(|e| Error::url_parse(path, e))
  }

  fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
    match &self.auth {
      Some(GitHubAuth::Token(token)) => builder.header(AUTHORIZATION, format!("token {token}")),
      Some(GitHubAuth::Basic { username, token }) => builder.basic_auth(username, Some(token)),
      None => builder,
    }
  }
}

/// Turn a non-2xx response into [`Error::Api`], keeping GitHub's error body
/// when it is JSON.
async fn check_response(method: Method, url: String, response: reqwest::Response) -> Result<reqwest::Response> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }

  if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
    warn!("Authentication failed when accessing GitHub API");
  }

  let body = response.bytes().await.unwrap_or_default();
  let error_response = serde_json::from_slice::<ErrorResponse>(&body).ok();

  Err(Error::Api {
    method,
    url,
    status,
    response: error_response,
  })
}

/// Reject paths a strict URL parser would refuse: broken percent-escapes and
/// control characters. The `url` crate passes both through silently.
fn validate_path(path: &str) -> Result<()> {
  let bytes = path.as_bytes();
  for (i, c) in path.char_indices() {
    if c == '%' {
      let escape_ok = bytes
        .get(i + 1..i + 3)
        .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
      if !escape_ok {
        let escape: String = path[i..].chars().take(3).collect();
        return Err(Error::url_parse(path, format!("invalid URL escape {escape:?}")));
      }
    } else if c.is_control() {
      return Err(Error::url_parse(path, "invalid control character in URL"));
    }
  }
  Ok(())
}

/// Check a caller-supplied identifier (login, owner, repo, sha) before it is
/// spliced into a request path. Anything that would change which endpoint the
/// path resolves to is a URL-parse error.
pub(crate) fn path_segment<'a>(kind: &str, value: &'a str) -> Result<&'a str> {
  let reason = if value.is_empty() {
    Some("must not be empty")
  } else if value == "." || value == ".." {
    Some("must not be a relative path segment")
  } else if value.contains(['/', '\\', '?', '#']) {
    Some("must not contain '/', '\\', '?' or '#'")
  } else {
    None
  };

  match reason {
    Some(reason) => Err(Error::url_parse(value, format!("invalid {kind}: {reason}"))),
    None => Ok(value),
  }
}

/// Create a GitHub client from basic-auth credentials
pub fn create_github_client(username: &str, token: &str) -> Result<GitHubClient> {
  let auth = GitHubAuth::Basic {
    username: username.to_string(),
    token: token.to_string(),
  };

  GitHubClient::new(auth)
}
