//! Constants for the hubcap client

/// Base URL for the official SaaS GitHub API
pub const API_BASE_URL: &str = "https://api.github.com/";

/// User-Agent header value for the GitHub API client
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Accept header value for the GitHub API
pub const ACCEPT: &str = "application/vnd.github.v3+json";

/// Accept header value opting into API features still in preview (search).
pub const MIME_PREVIEW: &str = "application/vnd.github.preview";

/// Hostname looked up in `.netrc` for GitHub credentials
pub const GITHUB_MACHINE: &str = "github.com";

/// Environment variable holding a personal access token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const ENV_API_URL: &str = "HUBCAP_API_URL";

/// Environment variable overriding the User-Agent header
pub const ENV_USER_AGENT: &str = "HUBCAP_USER_AGENT";

/// Environment variable setting a request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "HUBCAP_TIMEOUT_SECS";
