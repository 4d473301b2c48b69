//! # GitHub User Endpoints
//!
//! Profile lookup and update, the user directory, email address management
//! and follower queries.

use reqwest::{Method, StatusCode};
use tracing::{debug, info, instrument};

use crate::client::{GitHubClient, Response, path_segment};
use crate::error::{Error, Result};
use crate::models::{FollowingUser, User, UserEmail, UserListOptions};

/// `user` for the authenticated user, `users/{login}` otherwise
fn user_path(user: Option<&str>, suffix: &str) -> Result<String> {
  match user.filter(|login| !login.is_empty()) {
    Some(login) => Ok(format!("users/{}{suffix}", path_segment("login", login)?)),
    None => Ok(format!("user{suffix}")),
  }
}

impl GitHubClient {
  /// Fetch a user. `None` (or an empty login) fetches the authenticated user.
  #[instrument(skip(self), level = "debug")]
  pub async fn get_user(&self, user: Option<&str>) -> Result<Response<User>> {
    let request = self.new_request(Method::GET, &user_path(user, "")?)?;
    self.execute(request).await
  }

  /// Update the authenticated user. Only the fields set on `user` are sent.
  #[instrument(skip(self, user), level = "debug")]
  pub async fn edit_user(&self, user: &User) -> Result<Response<User>> {
    let request = self.new_json_request(Method::PATCH, "user", user)?;
    self.execute(request).await
  }

  /// List all GitHub users in signup order, starting after `opt.since`.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_all_users(&self, opt: Option<&UserListOptions>) -> Result<Response<Vec<User>>> {
    let mut request = self.new_request(Method::GET, "users")?;
    if let Some(opt) = opt {
      request
        .url_mut()
        .query_pairs_mut()
        .append_pair("since", &opt.since.to_string());
    }
    self.execute(request).await
  }

  /// List the email addresses of the authenticated user.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_emails(&self) -> Result<Response<Vec<UserEmail>>> {
    let request = self.new_request(Method::GET, "user/emails")?;
    self.execute(request).await
  }

  /// Add email addresses to the authenticated user and return the full list.
  #[instrument(skip(self), level = "debug")]
  pub async fn add_emails(&self, emails: &[UserEmail]) -> Result<Response<Vec<UserEmail>>> {
    info!("Adding {} email address(es)", emails.len());
    let request = self.new_json_request(Method::POST, "user/emails", emails)?;
    self.execute(request).await
  }

  /// Remove email addresses from the authenticated user.
  #[instrument(skip(self), level = "debug")]
  pub async fn delete_emails(&self, emails: &[UserEmail]) -> Result<Response<()>> {
    info!("Deleting {} email address(es)", emails.len());
    let request = self.new_json_request(Method::DELETE, "user/emails", emails)?;
    self.execute_empty(request).await
  }

  /// List the followers of a user, or of the authenticated user for `None`.
  #[instrument(skip(self), level = "debug")]
  pub async fn list_followers(&self, user: Option<&str>) -> Result<Response<Vec<FollowingUser>>> {
    let request = self.new_request(Method::GET, &user_path(user, "/followers")?)?;
    self.execute(request).await
  }

  /// Check whether the authenticated user follows `user`.
  ///
  /// GitHub answers with 204 (202 on some deployments) when the user is
  /// followed and 404 when not; the 404 is reported as `Ok(false)`. Any other
  /// status, and any transport failure, is an error.
  #[instrument(skip(self), level = "debug")]
  pub async fn is_following(&self, user: &str) -> Result<bool> {
    let request = self.new_request(Method::GET, &format!("user/following/{}", path_segment("login", user)?))?;
    let method = request.method().clone();
    let url = request.url().to_string();

    match self.execute_empty(request).await {
      Ok(response) => match response.status {
        StatusCode::NO_CONTENT | StatusCode::ACCEPTED => Ok(true),
        status => Err(Error::UnexpectedStatus { method, url, status }),
      },
      Err(Error::Api {
        status: StatusCode::NOT_FOUND,
        ..
      }) => {
        debug!("Not following {}", user);
        Ok(false)
      }
      Err(e) => Err(e),
    }
  }
}
